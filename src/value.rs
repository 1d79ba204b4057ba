use thiserror::Error;

/// Every way evaluation of a line can fail. Errors are ordinary values: once
/// one shows up among the evaluated children of an expression it becomes
/// the result of the whole expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LispError {
    #[error("invalid number")]
    InvalidNumber,
    #[error("S-expression does not start with symbol!")]
    NotASymbol,
    #[error("Function '{0}' passed too many arguments")]
    TooManyArgs(&'static str),
    #[error("Function '{0}' passed no arguments")]
    NoArgs(&'static str),
    #[error("Function '{0}' passed incorrect type")]
    IncorrectType(&'static str),
    #[error("Function '{0}' passed {{}}")]
    EmptyList(&'static str),
    #[error("Cannot operate on non-number!")]
    NonNumber,
    #[error("Division By Zero!")]
    DivisionByZero,
    #[error("Integer overflow!")]
    Overflow,
    #[error("Unknown function")]
    UnknownFunction,
}

/// A lisp value. Lists own their children outright, so dropping a value
/// drops the whole tree beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Val {
    Num(i64),
    Err(LispError),
    Sym(String),
    Sexpr(Vec<Val>),
    Qexpr(Vec<Val>),
}

impl Val {
    pub fn num(n: i64) -> Self {
        Val::Num(n)
    }
    pub fn err(e: LispError) -> Self {
        Val::Err(e)
    }
    pub fn sym<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Val::Sym(name.into())
    }
    pub fn sexpr() -> Self {
        Val::Sexpr(Vec::new())
    }
    pub fn qexpr() -> Self {
        Val::Qexpr(Vec::new())
    }
    pub fn is_err(&self) -> bool {
        matches!(self, Val::Err(_))
    }
    /// The children of a list, or an empty slice for atoms
    pub fn cells(&self) -> &[Val] {
        match self {
            Val::Sexpr(cells) | Val::Qexpr(cells) => cells,
            _ => &[],
        }
    }
    pub fn count(&self) -> usize {
        self.cells().len()
    }
    #[track_caller]
    fn cells_mut(&mut self) -> &mut Vec<Val> {
        match self {
            Val::Sexpr(cells) | Val::Qexpr(cells) => cells,
            val => unreachable!("{:?} is not a list", val),
        }
    }
    /// Append a child to the end of a list
    #[track_caller]
    pub fn add(mut self, x: Val) -> Self {
        self.cells_mut().push(x);
        self
    }
    /// Remove the child at `i`, shifting later children down.
    ///
    /// Callers check the bounds; popping out of range is a bug.
    #[track_caller]
    pub fn pop(&mut self, i: usize) -> Val {
        self.cells_mut().remove(i)
    }
    /// Pop the child at `i` and drop what is left of the list
    #[track_caller]
    pub fn take(mut self, i: usize) -> Val {
        self.pop(i)
    }
    /// Move every child of `other` onto the end of this list
    #[track_caller]
    pub fn join(mut self, mut other: Val) -> Self {
        let moved = std::mem::take(other.cells_mut());
        self.cells_mut().extend(moved);
        self
    }
    /// Reinterpret a list as quoted data. Atoms are returned unchanged.
    pub fn quoted(self) -> Self {
        match self {
            Val::Sexpr(cells) => Val::Qexpr(cells),
            val => val,
        }
    }
    /// Reinterpret a list as a live expression. Atoms are returned unchanged.
    pub fn unquoted(self) -> Self {
        match self {
            Val::Qexpr(cells) => Val::Sexpr(cells),
            val => val,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nums(ns: &[i64]) -> Val {
        ns.iter().fold(Val::qexpr(), |list, &n| list.add(Val::num(n)))
    }

    #[test]
    fn add_keeps_insertion_order() {
        let list = Val::sexpr().add(Val::num(1)).add(Val::sym("head"));
        assert_eq!(list, Val::Sexpr(vec![Val::Num(1), Val::Sym("head".into())]));
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn pop_compacts_the_rest() {
        let mut list = nums(&[1, 2, 3, 4]);
        assert_eq!(list.pop(1), Val::Num(2));
        assert_eq!(list, nums(&[1, 3, 4]));
        assert_eq!(list.pop(2), Val::Num(4));
        assert_eq!(list.pop(0), Val::Num(1));
        assert_eq!(list, nums(&[3]));
    }

    #[test]
    fn take_returns_single_child() {
        let inner = nums(&[7, 8]);
        let list = Val::sexpr().add(Val::num(1)).add(inner.clone());
        assert_eq!(list.take(1), inner);
    }

    #[test]
    fn join_moves_children_in_order() {
        let joined = nums(&[1, 2]).join(nums(&[])).join(nums(&[3]));
        assert_eq!(joined, nums(&[1, 2, 3]));
    }

    #[test]
    fn quoting_only_retags() {
        let list = Val::sexpr().add(Val::num(1));
        assert_eq!(list.quoted(), Val::Qexpr(vec![Val::Num(1)]));
        assert_eq!(Val::num(3).unquoted(), Val::Num(3));
    }

    #[test]
    #[should_panic]
    fn pop_out_of_range_is_a_bug() {
        nums(&[1]).pop(1);
    }

    #[test]
    fn empty_list_is_not_an_error() {
        assert!(!Val::qexpr().is_err());
        assert_eq!(Val::qexpr().count(), 0);
        assert!(Val::num(4).cells().is_empty());
    }
}
