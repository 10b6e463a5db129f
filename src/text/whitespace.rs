use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser that consumes zero or more whitespace characters and yields them. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl<'code> Parser<'code> for Whitespace {
    type Output = &'code str;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let remaining = cursor.remaining();
        let trimmed = remaining.trim_start();
        let skipped = &remaining[..remaining.len() - trimmed.len()];
        cursor.advance_past(skipped);
        Ok(skipped)
    }
}

pub fn whitespace() -> Whitespace {
    Whitespace
}

/// Runs `parser` and then skips any whitespace after it
pub struct Lexeme<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Lexeme<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let value = self.parser.parse(cursor)?;
        Whitespace.parse(cursor)?;
        Ok(value)
    }
}

pub fn lexeme<'code, P>(parser: P) -> Lexeme<P>
where
    P: Parser<'code>,
{
    Lexeme { parser }
}
