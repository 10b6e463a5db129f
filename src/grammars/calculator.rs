//! Floating point calculator
//!
//! Supports `+ - * / % ^`, unary `+` and `-`, brackets, and the functions
//! `sin cos tan exp log sqrt` applied to a bracketed argument.

use crate::between::between;
use crate::choice::ChoiceExt;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::forward::{ForwardRef, forward_ref};
use crate::map::MapExt;
use crate::parser::Parser;
use crate::precedence::{OperatorHandler, OperatorPrecedence};
use crate::sequence::SequenceExt;
use crate::text::number::float;
use crate::text::{end_of_input, lexeme, literal, satisfy, whitespace};
use std::rc::Rc;

const OPERATORS: &str = "+-*/%^";

/// Evaluates arithmetic expressions as it parses them
///
/// ```
/// use parsiclimb::grammars::calculator::Calculator;
///
/// let calculator = Calculator::new();
/// assert_eq!(calculator.evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(calculator.evaluate("(2 + 3) * 4"), Ok(20.0));
/// ```
pub struct Calculator<'code> {
    primary: ForwardRef<'code, f64>,
    expression: Rc<dyn Parser<'code, Output = f64> + 'code>,
}

impl<'code> Calculator<'code> {
    pub fn new() -> Self {
        let primary = forward_ref::<f64>();

        let op_format = lexeme(satisfy(|c| OPERATORS.contains(c)).map(String::from));
        let opp = OperatorPrecedence::<f64, _, _>::new(op_format, primary.clone())
            .with_operator("+", OperatorHandler::left_infix(|a: f64, b: f64| Some(a + b), 50))
            .with_operator("-", OperatorHandler::left_infix(|a: f64, b: f64| Some(a - b), 50))
            .with_operator("*", OperatorHandler::left_infix(|a: f64, b: f64| Some(a * b), 70))
            .with_operator("/", OperatorHandler::left_infix(|a: f64, b: f64| Some(a / b), 70))
            .with_operator("%", OperatorHandler::left_infix(|a: f64, b: f64| Some(a % b), 70))
            .with_operator("^", OperatorHandler::left_infix(|a: f64, b: f64| Some(a.powf(b)), 80))
            .with_operator("+", OperatorHandler::prefix(Some, 60))
            .with_operator("-", OperatorHandler::prefix(|a: f64| Some(-a), 60));
        let expression: Rc<dyn Parser<'code, Output = f64> + 'code> = Rc::new(opp);

        let bracketed = Rc::new(between(
            lexeme(literal('(')),
            Rc::clone(&expression),
            lexeme(literal(')')),
        ));
        let functions = function("sin", f64::sin, Rc::clone(&bracketed))
            .or(function("cos", f64::cos, Rc::clone(&bracketed)))
            .or(function("tan", f64::tan, Rc::clone(&bracketed)))
            .or(function("exp", f64::exp, Rc::clone(&bracketed)))
            .or(function("log", f64::ln, Rc::clone(&bracketed)))
            .or(function("sqrt", f64::sqrt, Rc::clone(&bracketed)));
        let number = lexeme(float(false));

        primary.define(functions.or(bracketed).or(number));

        Calculator {
            primary,
            expression,
        }
    }

    /// Evaluate `text`, which must hold exactly one expression
    pub fn evaluate(&self, text: &'code str) -> ParseResult<f64> {
        let mut cursor = Cursor::new(text);
        whitespace().parse(&mut cursor)?;
        let value = self.expression.parse(&mut cursor)?;
        end_of_input().parse(&mut cursor)?;
        Ok(value)
    }
}

impl Default for Calculator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Calculator<'_> {
    fn drop(&mut self) {
        self.primary.undefine();
    }
}

impl<'code> Parser<'code> for Calculator<'code> {
    type Output = f64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        self.expression.parse(cursor)
    }
}

fn function<'code, P>(
    name: &'static str,
    apply: fn(f64) -> f64,
    argument: P,
) -> impl Parser<'code, Output = f64>
where
    P: Parser<'code, Output = f64>,
{
    literal(name).then(argument).map(apply)
}
