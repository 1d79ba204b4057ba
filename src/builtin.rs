use tracing::debug;

use crate::{eval::eval, value::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }
    fn apply(self, x: i64, y: i64) -> Result<i64, LispError> {
        match self {
            Op::Add => x.checked_add(y).ok_or(LispError::Overflow),
            Op::Sub => x.checked_sub(y).ok_or(LispError::Overflow),
            Op::Mul => x.checked_mul(y).ok_or(LispError::Overflow),
            Op::Div if y == 0 => Err(LispError::DivisionByZero),
            Op::Div => x.checked_div(y).ok_or(LispError::Overflow),
        }
    }
}

/// The fixed table of primitive operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    List,
    Head,
    Tail,
    Join,
    Eval,
    Op(Op),
}

impl Builtin {
    const ALL: &'static [Builtin] = &[
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Join,
        Builtin::Eval,
        Builtin::Op(Op::Add),
        Builtin::Op(Op::Sub),
        Builtin::Op(Op::Mul),
        Builtin::Op(Op::Div),
    ];
    pub fn from_name(name: &str) -> Option<Self> {
        Builtin::ALL
            .iter()
            .copied()
            .find(|builtin| builtin.name() == name)
    }
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Op(op) => op.name(),
        }
    }
    /// Apply to already-evaluated arguments, consuming them
    pub fn apply(self, args: Vec<Val>) -> Val {
        debug!(builtin = self.name(), args = args.len(), "apply");
        let res = match self {
            Builtin::List => Ok(Val::Sexpr(args).quoted()),
            Builtin::Head => head(args),
            Builtin::Tail => tail(args),
            Builtin::Join => join(args),
            Builtin::Eval => eval_quoted(args),
            Builtin::Op(op) => arith(op, args),
        };
        res.unwrap_or_else(|e| {
            debug!(builtin = self.name(), error = %e, "builtin failed");
            Val::err(e)
        })
    }
}

/// Look up `name` and apply it, or fail with an unknown function error
pub fn call(name: &str, args: Vec<Val>) -> Val {
    match Builtin::from_name(name) {
        Some(builtin) => builtin.apply(args),
        None => {
            debug!(name, "unknown function");
            Val::err(LispError::UnknownFunction)
        }
    }
}

type BuiltinResult = Result<Val, LispError>;

/// The single quoted list argument of `func`
fn single_qexpr(func: &'static str, mut args: Vec<Val>) -> BuiltinResult {
    match args.len() {
        0 => return Err(LispError::NoArgs(func)),
        1 => {}
        _ => return Err(LispError::TooManyArgs(func)),
    }
    match args.pop() {
        Some(list @ Val::Qexpr(_)) => Ok(list),
        _ => Err(LispError::IncorrectType(func)),
    }
}

fn non_empty_qexpr(func: &'static str, args: Vec<Val>) -> BuiltinResult {
    let list = single_qexpr(func, args)?;
    if list.count() == 0 {
        return Err(LispError::EmptyList(func));
    }
    Ok(list)
}

fn head(args: Vec<Val>) -> BuiltinResult {
    let list = non_empty_qexpr("head", args)?;
    Ok(Val::qexpr().add(list.take(0)))
}

fn tail(args: Vec<Val>) -> BuiltinResult {
    let mut list = non_empty_qexpr("tail", args)?;
    list.pop(0);
    Ok(list)
}

fn join(args: Vec<Val>) -> BuiltinResult {
    if !args.iter().all(|arg| matches!(arg, Val::Qexpr(_))) {
        return Err(LispError::IncorrectType("join"));
    }
    Ok(args.into_iter().fold(Val::qexpr(), Val::join))
}

fn eval_quoted(args: Vec<Val>) -> BuiltinResult {
    let list = single_qexpr("eval", args)?;
    Ok(eval(list.unquoted()))
}

fn arith(op: Op, args: Vec<Val>) -> BuiltinResult {
    let nums = args
        .into_iter()
        .map(|arg| match arg {
            Val::Num(n) => Ok(n),
            _ => Err(LispError::NonNumber),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut nums = nums.into_iter();
    let first = nums.next().ok_or(LispError::NoArgs(op.name()))?;
    if op == Op::Sub && nums.len() == 0 {
        return first.checked_neg().map(Val::num).ok_or(LispError::Overflow);
    }
    nums.try_fold(first, |acc, n| op.apply(acc, n)).map(Val::num)
}
