use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives start from the same position. That relies on the first
/// one leaving the cursor untouched when it fails.
pub struct Choice<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Choice<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Choice { first, second }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Choice<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        match self.first.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.second.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait ChoiceExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Choice<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Choice::new(self, other)
    }
}

/// Implement ChoiceExt for all parsers
impl<'code, P> ChoiceExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Choice parser
pub fn choice<'code, P1, P2, O>(first: P1, second: P2) -> Choice<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Choice::new(first, second)
}
