//! A small lisp: integer arithmetic plus a handful of list primitives over
//! S-expressions `( ... )`, which are evaluated, and Q-expressions `{ ... }`,
//! which are data.
//!
//! ```
//! assert_eq!(lispy::eval_str("eval (head {(+ 1 2) 4})").unwrap().to_string(), "3");
//! ```

pub mod builtin;
pub mod eval;
pub mod parse;
pub mod print;
pub mod read;
pub mod value;

use pest::iterators::Pair;

pub use crate::{
    eval::eval,
    parse::{parse, ParseResult, Rule},
    print::render,
    read::read,
    value::{LispError, Val},
};

/// Read and evaluate a whole parsed line
pub fn evaluate_program(root: Pair<Rule>) -> Val {
    eval(read(root))
}

/// Parse and evaluate one line of source
pub fn eval_str(input: &str) -> ParseResult<Val> {
    parse(input).map(evaluate_program)
}
