use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Parser that matches a single character accepted by a predicate
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        match cursor.head() {
            Some(c) if (self.predicate)(c) => {
                cursor.advance(1);
                Ok(c)
            }
            _ => Err(NoMatch),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser for one specific character
pub fn is_char(expected: char) -> Satisfy<impl Fn(char) -> bool> {
    Satisfy::new(move |c| c == expected)
}
