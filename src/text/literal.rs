use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;
use std::fmt::Display;

/// Parser that matches the textual form of a value and yields the value
///
/// The text is `value.to_string()`, computed once at construction.
pub struct Literal<T> {
    value: T,
    text: String,
}

impl<T: Display> Literal<T> {
    pub fn new(value: T) -> Self {
        let text = value.to_string();
        Literal { value, text }
    }
}

impl<'code, T: Clone> Parser<'code> for Literal<T> {
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        if cursor.starts_with(&self.text) {
            cursor.advance_past(&self.text);
            Ok(self.value.clone())
        } else {
            Err(NoMatch)
        }
    }
}

/// Convenience function to create a Literal parser
///
/// ```
/// use parsiclimb::{Cursor, Parser};
/// use parsiclimb::text::literal;
///
/// let mut cursor = Cursor::new("true,");
/// assert_eq!(literal(true).parse(&mut cursor), Ok(true));
/// assert_eq!(cursor.remaining(), ",");
/// ```
pub fn literal<T: Display + Clone>(value: T) -> Literal<T> {
    Literal::new(value)
}
