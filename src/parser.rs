use crate::cursor::Cursor;
use crate::error::ParseResult;
use std::rc::Rc;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to consume a prefix of the cursor's remaining input
    ///
    /// Returns the parsed value on success. On failure the cursor must be
    /// left where it was found, so that an enclosing parser can try
    /// something else from the same place.
    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser, for grammars whose combinator types get unwieldy
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

/// Parser backed by a plain function or closure
pub struct FnParser<F> {
    function: F,
}

impl<'code, F, T> Parser<'code> for FnParser<F>
where
    F: Fn(&mut Cursor<'code>) -> ParseResult<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (self.function)(cursor)
    }
}

/// Wrap a closure as a parser. The closure must honor the backtracking contract.
pub fn parser_fn<'code, F, T>(function: F) -> FnParser<F>
where
    F: Fn(&mut Cursor<'code>) -> ParseResult<T>,
{
    FnParser { function }
}

/// Extension trait for erasing a parser's concrete type
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// Run `parser` over a fresh cursor on `text`
///
/// Does not require the whole input to be consumed; sequence with
/// [`end_of_input`](crate::text::end_of_input) for that.
pub fn parse_str<'code, P>(parser: &P, text: &'code str) -> ParseResult<P::Output>
where
    P: Parser<'code> + ?Sized,
{
    let mut cursor = Cursor::new(text);
    parser.parse(&mut cursor)
}
