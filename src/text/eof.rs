use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Parser that succeeds only when no input remains. Never consumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        if cursor.at_end() { Ok(()) } else { Err(NoMatch) }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_input() {
        let mut cursor = Cursor::new("a");
        assert_eq!(end_of_input().parse(&mut cursor), Err(NoMatch));

        cursor.advance(1);
        assert_eq!(end_of_input().parse(&mut cursor), Ok(()));
        assert_eq!(end_of_input().parse(&mut cursor), Ok(()));
    }
}
