use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;

/// Parser combinator that matches repeated occurrences of the given parser
///
/// Stops at the first failure of the body, which leaves the cursor after the
/// last successful iteration.
pub struct Repeat<P> {
    body: P,
    allow_empty: bool,
}

impl<P> Repeat<P> {
    pub fn new(body: P, allow_empty: bool) -> Self {
        Repeat { body, allow_empty }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let mut results = Vec::new();

        loop {
            let start = cursor.position();
            match self.body.parse(cursor) {
                Ok(value) => results.push(value),
                Err(_) => break,
            }
            // a body that matched nothing would match nothing forever
            if cursor.position() == start {
                break;
            }
        }

        if !self.allow_empty && results.is_empty() {
            return Err(NoMatch);
        }
        Ok(results)
    }
}

/// Zero or more occurrences
pub fn many<'code, P>(body: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(body, true)
}

/// One or more occurrences
pub fn many1<'code, P>(body: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(body, false)
}
