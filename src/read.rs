use pest::iterators::Pair;

use crate::{parse::Rule, value::*};

/// Convert a parse tree into a value tree
pub fn read(pair: Pair<Rule>) -> Val {
    match pair.as_rule() {
        Rule::number => read_num(pair.as_str()),
        Rule::symbol => Val::sym(pair.as_str()),
        Rule::lispy | Rule::sexpr => read_cells(Val::sexpr(), pair),
        Rule::qexpr => read_cells(Val::qexpr(), pair),
        rule => unreachable!("{:?}", rule),
    }
}

fn read_num(text: &str) -> Val {
    text.parse::<i64>()
        .map(Val::num)
        .unwrap_or_else(|_| Val::err(LispError::InvalidNumber))
}

fn read_cells(list: Val, pair: Pair<Rule>) -> Val {
    pair.into_inner()
        .filter(|child| child.as_rule() != Rule::EOI)
        .fold(list, |list, child| list.add(read(child)))
}
