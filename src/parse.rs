#![allow(clippy::upper_case_acronyms)]

use pest::{
    error::{Error as PestError, ErrorVariant},
    iterators::Pair,
    Parser, Position, RuleType,
};

pub type ParseResult<T> = Result<T, PestError<Rule>>;

#[derive(pest_derive::Parser)]
#[grammar = "grammar.pest"]
struct LispyParser;

/// Parse one line of input into its root `lispy` node
pub fn parse(input: &str) -> ParseResult<Pair<Rule>> {
    LispyParser::parse(Rule::lispy, input)?.next().ok_or_else(|| {
        PestError::new_from_pos(
            ErrorVariant::CustomError {
                message: "empty parse".into(),
            },
            Position::from_start(input),
        )
    })
}

/// Number of nodes in a parse tree, counting the node itself
pub fn node_count<R>(pair: Pair<R>) -> usize
where
    R: RuleType,
{
    1 + pair.into_inner().map(node_count).sum::<usize>()
}

/// Indented `rule "text"` listing of a parse tree
pub fn dump<R>(pair: Pair<R>) -> String
where
    R: RuleType,
{
    fn go<R: RuleType>(pair: Pair<R>, depth: usize, out: &mut String) {
        out.push_str(&format!(
            "{:indent$}{:?} {:?}\n",
            "",
            pair.as_rule(),
            pair.as_str(),
            indent = depth * 2
        ));
        for child in pair.into_inner() {
            go(child, depth + 1, out);
        }
    }
    let mut out = String::new();
    go(pair, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules(input: &str) -> Vec<Rule> {
        parse(input)
            .unwrap()
            .into_inner()
            .map(|pair| pair.as_rule())
            .collect()
    }

    #[test]
    fn top_level_forms() {
        assert_eq!(
            rules("+ 1 (2) {3}"),
            vec![
                Rule::symbol,
                Rule::number,
                Rule::sexpr,
                Rule::qexpr,
                Rule::EOI
            ]
        );
        assert_eq!(rules(""), vec![Rule::EOI]);
    }

    #[test]
    fn minus_binds_to_digits_only_without_space() {
        assert_eq!(rules("-5"), vec![Rule::number, Rule::EOI]);
        assert_eq!(rules("- 5"), vec![Rule::symbol, Rule::number, Rule::EOI]);
    }

    #[test]
    fn brackets_are_not_nodes() {
        let root = parse("(+ 1 {2})").unwrap();
        let sexpr = root.into_inner().next().unwrap();
        let children: Vec<_> = sexpr.into_inner().map(|p| p.as_str()).collect();
        assert_eq!(children, vec!["+", "1", "{2}"]);
    }

    #[test]
    fn syntax_errors() {
        assert!(parse("(+ 1 2").is_err());
        assert!(parse("foo").is_err());
        assert!(parse("{1 2}}").is_err());
    }

    #[test]
    fn counts_nodes() {
        // lispy, sexpr, +, 1, 2, EOI
        assert_eq!(node_count(parse("(+ 1 2)").unwrap()), 6);
        assert_eq!(node_count(parse("").unwrap()), 2);
    }

    #[test]
    fn dumps_tree() {
        let dumped = dump(parse("{1}").unwrap());
        assert_eq!(
            dumped,
            "lispy \"{1}\"\n  qexpr \"{1}\"\n    number \"1\"\n  EOI \"\"\n"
        );
    }
}
