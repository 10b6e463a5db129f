use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Runs a parser and rewinds to the starting position if it fails
///
/// The primitives and sequencing combinators already behave this way. This is
/// for parsers that may fail after consuming input, such as
/// [`OperatorPrecedence`](crate::precedence::OperatorPrecedence) failing
/// mid-expression.
pub struct Attempt<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let start = cursor.position();
        let result = self.parser.parse(cursor);
        if result.is_err() {
            cursor.set_position(start);
        }
        result
    }
}

pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt { parser }
}
