use std::fmt;

use itertools::Itertools;

use crate::value::*;

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Val::Num(n) => write!(f, "{}", n),
            Val::Err(e) => write!(f, "Error: {}", e),
            Val::Sym(name) => write!(f, "{}", name),
            Val::Sexpr(cells) => write!(f, "({})", cells.iter().format(" ")),
            Val::Qexpr(cells) => write!(f, "{{{}}}", cells.iter().format(" ")),
        }
    }
}

/// Render a value as the text the read loop shows for it
pub fn render(val: &Val) -> String {
    val.to_string()
}
