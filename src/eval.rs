use tracing::trace;

use crate::{builtin, value::*};

/// Reduce a value. Only S-expressions do anything; every other value
/// evaluates to itself.
pub fn eval(val: Val) -> Val {
    match val {
        Val::Sexpr(cells) => eval_sexpr(cells),
        val => val,
    }
}

fn eval_sexpr(cells: Vec<Val>) -> Val {
    trace!(count = cells.len(), "eval sexpr");
    let mut evaluated = Vec::with_capacity(cells.len());
    // The first error wins; the siblings after it are dropped unevaluated
    for cell in cells {
        let val = eval(cell);
        if val.is_err() {
            return val;
        }
        evaluated.push(val);
    }
    match evaluated.len() {
        0 => Val::Sexpr(evaluated),
        1 => Val::Sexpr(evaluated).take(0),
        _ => match evaluated.remove(0) {
            Val::Sym(name) => builtin::call(&name, evaluated),
            _ => Val::err(LispError::NotASymbol),
        },
    }
}
