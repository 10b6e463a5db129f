use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// If the first parser succeeds and the second fails, the cursor is put back
/// where the first one started, undoing its advance.
///
/// Note: chaining `.and()` produces nested tuples like `((a, b), c)`.
///
/// ```
/// use parsiclimb::{Cursor, Parser};
/// use parsiclimb::sequence::SequenceExt;
/// use parsiclimb::text::{literal, number::integer};
///
/// let mut cursor = Cursor::new("12.5");
/// let ((whole, _), frac) = integer()
///     .and(literal('.'))
///     .and(integer())
///     .parse(&mut cursor)
///     .unwrap();
/// assert_eq!((whole, frac), (12, 5));
/// ```
pub struct Sequence<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Sequence<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Sequence { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Sequence<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let start = cursor.position();
        let first = self.first.parse(cursor)?;
        match self.second.parse(cursor) {
            Ok(second) => Ok((first, second)),
            Err(e) => {
                cursor.set_position(start);
                Err(e)
            }
        }
    }
}

/// Sequence that keeps only the first result
pub struct SequenceFirst<P1, P2> {
    inner: Sequence<P1, P2>,
}

impl<'code, P1, P2> Parser<'code> for SequenceFirst<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let (first, _) = self.inner.parse(cursor)?;
        Ok(first)
    }
}

/// Sequence that keeps only the second result
pub struct SequenceSecond<P1, P2> {
    inner: Sequence<P1, P2>,
}

impl<'code, P1, P2> Parser<'code> for SequenceSecond<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let (_, second) = self.inner.parse(cursor)?;
        Ok(second)
    }
}

pub fn sequence<'code, P1, P2>(first: P1, second: P2) -> Sequence<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Sequence::new(first, second)
}

pub fn sequence_first<'code, P1, P2>(first: P1, second: P2) -> SequenceFirst<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    SequenceFirst {
        inner: Sequence::new(first, second),
    }
}

pub fn sequence_second<'code, P1, P2>(first: P1, second: P2) -> SequenceSecond<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    SequenceSecond {
        inner: Sequence::new(first, second),
    }
}

/// Extension trait to add .and(), .skip() and .then() method support for parsers
pub trait SequenceExt<'code>: Parser<'code> + Sized {
    /// Run `other` after this parser and keep both results
    fn and<P>(self, other: P) -> Sequence<Self, P>
    where
        P: Parser<'code>,
    {
        sequence(self, other)
    }

    /// Run `other` after this parser and keep only this parser's result
    fn skip<P>(self, other: P) -> SequenceFirst<Self, P>
    where
        P: Parser<'code>,
    {
        sequence_first(self, other)
    }

    /// Run `other` after this parser and keep only `other`'s result
    fn then<P>(self, other: P) -> SequenceSecond<Self, P>
    where
        P: Parser<'code>,
    {
        sequence_second(self, other)
    }
}

/// Implement SequenceExt for all parsers
impl<'code, P> SequenceExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoMatch;
    use crate::text::{literal, pattern};

    #[test]
    fn test_sequence_both_succeed() {
        let mut cursor = Cursor::new("A5xyz");
        let parser = literal('A').and(literal('5'));

        assert_eq!(parser.parse(&mut cursor), Ok(('A', '5')));
        assert_eq!(cursor.head(), Some('x'));
    }

    #[test]
    fn test_sequence_first_fails() {
        let mut cursor = Cursor::new("Bxyz");
        let parser = literal('A').and(literal('x'));

        assert_eq!(parser.parse(&mut cursor), Err(NoMatch));
        assert_eq!(cursor.position().offset(), 0);
    }

    #[test]
    fn test_sequence_second_fails_restores() {
        let mut cursor = Cursor::new("foo!");
        let parser = pattern("[a-z]+").unwrap().and(literal('?'));

        assert_eq!(parser.parse(&mut cursor), Err(NoMatch));
        assert_eq!(cursor.position().offset(), 0);
    }

    #[test]
    fn test_keep_first_and_second() {
        let mut cursor = Cursor::new("(x)");
        let open_then_x = literal('(').then(literal('x'));
        assert_eq!(open_then_x.parse(&mut cursor), Ok('x'));

        let mut cursor = Cursor::new("x)");
        let x_then_close = literal('x').skip(literal(')'));
        assert_eq!(x_then_close.parse(&mut cursor), Ok('x'));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_keep_variants_restore_on_failure() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(
            sequence_first(literal('a'), literal('c')).parse(&mut cursor),
            Err(NoMatch)
        );
        assert_eq!(
            sequence_second(literal('a'), literal('c')).parse(&mut cursor),
            Err(NoMatch)
        );
        assert_eq!(cursor.position().offset(), 0);
    }

    #[test]
    fn test_nested_sequence_restores_whole_chain() {
        let mut cursor = Cursor::new("abd");
        let parser = literal('a').and(literal('b')).and(literal('c'));

        assert_eq!(parser.parse(&mut cursor), Err(NoMatch));
        assert_eq!(cursor.position().offset(), 0);
    }
}
