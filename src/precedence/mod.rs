//! Operator-precedence expression parsing
//!
//! [`OperatorPrecedence`] turns a parser for operands ("primary"
//! expressions) and a parser for operator tokens into a parser for whole
//! expressions, using precedence climbing over a table of registered
//! operators.
//!
//! ```
//! use parsiclimb::{Parser, parse_str};
//! use parsiclimb::precedence::{OperatorHandler, OperatorPrecedence};
//! use parsiclimb::text::{lexeme, number::integer, pattern};
//!
//! let mut opp = OperatorPrecedence::new(
//!     lexeme(pattern("[-+*]").unwrap()),
//!     lexeme(integer()),
//! );
//! opp.add_operator("+", OperatorHandler::left_infix(|a: i64, b: i64| Some(a + b), 50));
//! opp.add_operator("*", OperatorHandler::left_infix(|a: i64, b: i64| Some(a * b), 70));
//! opp.add_operator("-", OperatorHandler::prefix(|a: i64| Some(-a), 60));
//!
//! assert_eq!(parse_str(&opp, "2 + 3 * 4"), Ok(14));
//! assert_eq!(parse_str(&opp, "-2 + 3"), Ok(1));
//! ```

mod handler;
mod opset;

pub use handler::{Binary, OperatorHandler, Unary};

use handler::{PrefixOp, TableEntry, TrailingOp};

use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;
use log::{debug, trace};
use opset::OpSet;

/// Expression parser built from an operator-token parser and a primary parser
///
/// Prefix operators and infix/postfix operators live in separate tables, so
/// one name (`-`, say) can be both. Registering a name twice in the same
/// table replaces the earlier handler.
///
/// An expression that fails after an operator has been read does not give
/// that operator back; wrap the whole expression in
/// [`attempt`](crate::attempt::attempt) if the caller needs to retry from
/// the start.
pub struct OperatorPrecedence<T, O, P> {
    op_format: O,
    primary: P,
    prefix_ops: OpSet<PrefixOp<T>>,
    infix_ops: OpSet<TrailingOp<T>>,
}

impl<T, O, P> OperatorPrecedence<T, O, P> {
    pub fn new(op_format: O, primary: P) -> Self {
        OperatorPrecedence {
            op_format,
            primary,
            prefix_ops: OpSet::new(),
            infix_ops: OpSet::new(),
        }
    }

    pub fn add_operator(&mut self, name: impl Into<String>, handler: OperatorHandler<T>) {
        let name = name.into();
        match TableEntry::from(handler) {
            TableEntry::Prefix(op) => self.prefix_ops.insert(name, op),
            TableEntry::Trailing(op) => self.infix_ops.insert(name, op),
        }
    }

    /// Builder form of [`add_operator`](Self::add_operator)
    pub fn with_operator(mut self, name: impl Into<String>, handler: OperatorHandler<T>) -> Self {
        self.add_operator(name, handler);
        self
    }

    pub fn has_prefix(&self, name: &str) -> bool {
        self.prefix_ops.contains(name)
    }

    pub fn has_infix(&self, name: &str) -> bool {
        self.infix_ops.contains(name)
    }
}

impl<'code, T, O, P> OperatorPrecedence<T, O, P>
where
    O: Parser<'code>,
    O::Output: AsRef<str>,
    P: Parser<'code, Output = T>,
{
    /// Parse an expression whose operators all bind tighter than `min_precedence`
    ///
    /// Stops at the first operator that binds as loosely as `min_precedence`
    /// or looser, leaving the cursor just before it.
    pub fn parse_expression(
        &self,
        cursor: &mut Cursor<'code>,
        min_precedence: i32,
    ) -> ParseResult<T> {
        let result = self.climb(cursor, min_precedence);
        if let Some(parked) = self.infix_ops.take_parked() {
            debug!(
                "giving back operator `{}` at offset {}",
                parked.name,
                parked.start.offset()
            );
            cursor.set_position(parked.start);
        }
        result
    }

    fn leading_term(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        match self.prefix_ops.next(&self.op_format, cursor) {
            Some(op) => {
                let PrefixOp { build, precedence } = op.handler;
                trace!("prefix `{}` at precedence {precedence}", op.name);
                let operand = self.climb(cursor, precedence)?;
                build(operand).ok_or(NoMatch)
            }
            None => self.primary.parse(cursor),
        }
    }

    fn climb(&self, cursor: &mut Cursor<'code>, min_precedence: i32) -> ParseResult<T> {
        let mut left = self.leading_term(cursor)?;

        while let Some(op) = self.infix_ops.next(&self.op_format, cursor) {
            let precedence = op.handler.precedence();
            if precedence <= min_precedence {
                trace!(
                    "`{}` ({precedence}) does not bind tighter than {min_precedence}, parking it",
                    op.name
                );
                self.infix_ops.put_back(op);
                break;
            }

            trace!("consuming `{}` at precedence {precedence}", op.name);
            left = match op.handler {
                TrailingOp::LeftInfix(build, precedence) => {
                    let right = self.climb(cursor, precedence)?;
                    build(left, right).ok_or(NoMatch)?
                }
                TrailingOp::RightInfix(build, precedence) => {
                    let right = self.climb(cursor, precedence.saturating_sub(1))?;
                    build(left, right).ok_or(NoMatch)?
                }
                TrailingOp::Postfix(build, _) => build(left).ok_or(NoMatch)?,
            };
        }

        Ok(left)
    }
}

impl<'code, T, O, P> Parser<'code> for OperatorPrecedence<T, O, P>
where
    O: Parser<'code>,
    O::Output: AsRef<str>,
    P: Parser<'code, Output = T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        self.parse_expression(cursor, 0)
    }
}
