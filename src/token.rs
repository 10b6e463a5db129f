use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Runs a trigger parser for the input it consumes and yields a fixed value instead of its result
pub struct Token<P, V> {
    trigger: P,
    value: V,
}

impl<P, V> Token<P, V> {
    pub fn new(trigger: P, value: V) -> Self {
        Token { trigger, value }
    }
}

impl<'code, P, V> Parser<'code> for Token<P, V>
where
    P: Parser<'code>,
    V: Clone,
{
    type Output = V;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        self.trigger.parse(cursor)?;
        Ok(self.value.clone())
    }
}

pub fn token<'code, P, V>(trigger: P, value: V) -> Token<P, V>
where
    P: Parser<'code>,
    V: Clone,
{
    Token::new(trigger, value)
}
