use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

/// Runs two parsers in sequence and combines their results
///
/// Restores the starting position if the second parser fails.
pub struct Map2<P1, P2, F> {
    first: P1,
    second: P2,
    combine: F,
}

impl<'code, P1, P2, F, U> Parser<'code> for Map2<P1, P2, F>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    F: Fn(P1::Output, P2::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let start = cursor.position();
        let a = self.first.parse(cursor)?;
        match self.second.parse(cursor) {
            Ok(b) => Ok((self.combine)(a, b)),
            Err(e) => {
                cursor.set_position(start);
                Err(e)
            }
        }
    }
}

pub fn map2<'code, P1, P2, F, U>(first: P1, second: P2, combine: F) -> Map2<P1, P2, F>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    F: Fn(P1::Output, P2::Output) -> U,
{
    Map2 {
        first,
        second,
        combine,
    }
}
