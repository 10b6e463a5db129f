use std::fmt;
use std::rc::Rc;

/// Builds a node from one operand. Returning `None` fails the parse.
pub type Unary<T> = Rc<dyn Fn(T) -> Option<T>>;

/// Builds a node from two operands. Returning `None` fails the parse.
pub type Binary<T> = Rc<dyn Fn(T, T) -> Option<T>>;

/// What an operator does and how tightly it binds
///
/// Higher precedence binds tighter. Operators of equal precedence group to
/// the left unless registered as [`RightInfix`](OperatorHandler::RightInfix).
pub enum OperatorHandler<T> {
    Prefix(Unary<T>, i32),
    LeftInfix(Binary<T>, i32),
    RightInfix(Binary<T>, i32),
    Postfix(Unary<T>, i32),
}

impl<T> OperatorHandler<T> {
    pub fn prefix<F>(build: F, precedence: i32) -> Self
    where
        F: Fn(T) -> Option<T> + 'static,
    {
        OperatorHandler::Prefix(Rc::new(build), precedence)
    }

    pub fn left_infix<F>(build: F, precedence: i32) -> Self
    where
        F: Fn(T, T) -> Option<T> + 'static,
    {
        OperatorHandler::LeftInfix(Rc::new(build), precedence)
    }

    pub fn right_infix<F>(build: F, precedence: i32) -> Self
    where
        F: Fn(T, T) -> Option<T> + 'static,
    {
        OperatorHandler::RightInfix(Rc::new(build), precedence)
    }

    pub fn postfix<F>(build: F, precedence: i32) -> Self
    where
        F: Fn(T) -> Option<T> + 'static,
    {
        OperatorHandler::Postfix(Rc::new(build), precedence)
    }

    pub fn precedence(&self) -> i32 {
        match self {
            OperatorHandler::Prefix(_, precedence)
            | OperatorHandler::LeftInfix(_, precedence)
            | OperatorHandler::RightInfix(_, precedence)
            | OperatorHandler::Postfix(_, precedence) => *precedence,
        }
    }

    pub fn is_prefix(&self) -> bool {
        matches!(self, OperatorHandler::Prefix(..))
    }

    fn kind(&self) -> &'static str {
        match self {
            OperatorHandler::Prefix(..) => "Prefix",
            OperatorHandler::LeftInfix(..) => "LeftInfix",
            OperatorHandler::RightInfix(..) => "RightInfix",
            OperatorHandler::Postfix(..) => "Postfix",
        }
    }
}

impl<T> Clone for OperatorHandler<T> {
    fn clone(&self) -> Self {
        match self {
            OperatorHandler::Prefix(build, precedence) => {
                OperatorHandler::Prefix(Rc::clone(build), *precedence)
            }
            OperatorHandler::LeftInfix(build, precedence) => {
                OperatorHandler::LeftInfix(Rc::clone(build), *precedence)
            }
            OperatorHandler::RightInfix(build, precedence) => {
                OperatorHandler::RightInfix(Rc::clone(build), *precedence)
            }
            OperatorHandler::Postfix(build, precedence) => {
                OperatorHandler::Postfix(Rc::clone(build), *precedence)
            }
        }
    }
}

/// Entry in the prefix table
pub(crate) struct PrefixOp<T> {
    pub(crate) build: Unary<T>,
    pub(crate) precedence: i32,
}

impl<T> Clone for PrefixOp<T> {
    fn clone(&self) -> Self {
        PrefixOp {
            build: Rc::clone(&self.build),
            precedence: self.precedence,
        }
    }
}

/// Entry in the table consulted after an operand
pub(crate) enum TrailingOp<T> {
    LeftInfix(Binary<T>, i32),
    RightInfix(Binary<T>, i32),
    Postfix(Unary<T>, i32),
}

impl<T> TrailingOp<T> {
    pub(crate) fn precedence(&self) -> i32 {
        match self {
            TrailingOp::LeftInfix(_, precedence)
            | TrailingOp::RightInfix(_, precedence)
            | TrailingOp::Postfix(_, precedence) => *precedence,
        }
    }
}

impl<T> Clone for TrailingOp<T> {
    fn clone(&self) -> Self {
        match self {
            TrailingOp::LeftInfix(build, precedence) => {
                TrailingOp::LeftInfix(Rc::clone(build), *precedence)
            }
            TrailingOp::RightInfix(build, precedence) => {
                TrailingOp::RightInfix(Rc::clone(build), *precedence)
            }
            TrailingOp::Postfix(build, precedence) => {
                TrailingOp::Postfix(Rc::clone(build), *precedence)
            }
        }
    }
}

/// Which table a handler belongs in
pub(crate) enum TableEntry<T> {
    Prefix(PrefixOp<T>),
    Trailing(TrailingOp<T>),
}

impl<T> From<OperatorHandler<T>> for TableEntry<T> {
    fn from(handler: OperatorHandler<T>) -> Self {
        match handler {
            OperatorHandler::Prefix(build, precedence) => {
                TableEntry::Prefix(PrefixOp { build, precedence })
            }
            OperatorHandler::LeftInfix(build, precedence) => {
                TableEntry::Trailing(TrailingOp::LeftInfix(build, precedence))
            }
            OperatorHandler::RightInfix(build, precedence) => {
                TableEntry::Trailing(TrailingOp::RightInfix(build, precedence))
            }
            OperatorHandler::Postfix(build, precedence) => {
                TableEntry::Trailing(TrailingOp::Postfix(build, precedence))
            }
        }
    }
}

impl<T> fmt::Debug for OperatorHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.precedence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_and_kind() {
        let negate = OperatorHandler::<i64>::prefix(|x| Some(-x), 60);
        let power = OperatorHandler::<i64>::right_infix(|a, b| Some(a.pow(b as u32)), 80);

        assert_eq!(negate.precedence(), 60);
        assert!(negate.is_prefix());
        assert_eq!(power.precedence(), 80);
        assert!(!power.is_prefix());
        assert_eq!(format!("{:?}", power), "RightInfix(80)");
    }

    #[test]
    fn test_clone_shares_builder() {
        let add = OperatorHandler::<i64>::left_infix(|a, b| a.checked_add(b), 50);
        let copy = add.clone();

        match copy {
            OperatorHandler::LeftInfix(build, 50) => {
                assert_eq!(build(2, 3), Some(5));
                assert_eq!(build(i64::MAX, 1), None);
            }
            other => panic!("unexpected handler {other:?}"),
        }
    }

    #[test]
    fn test_table_entry_routing() {
        let negate = OperatorHandler::<i64>::prefix(|x| Some(-x), 60);
        let bang = OperatorHandler::<i64>::postfix(|x| Some(x + 1), 90);

        match TableEntry::from(negate) {
            TableEntry::Prefix(op) => {
                assert_eq!(op.precedence, 60);
                assert_eq!((op.build)(4), Some(-4));
            }
            TableEntry::Trailing(_) => panic!("prefix routed to the trailing table"),
        }
        match TableEntry::from(bang) {
            TableEntry::Trailing(op) => assert_eq!(op.precedence(), 90),
            TableEntry::Prefix(_) => panic!("postfix routed to the prefix table"),
        }
    }
}
