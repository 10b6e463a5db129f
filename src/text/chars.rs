use crate::map::{Map, MapExt};
use crate::parser::Parser;
use crate::repeat::{Repeat, many, many1};

/// Mapping used by the char-collecting parsers
pub type Collect = fn(Vec<char>) -> String;

/// Zero or more characters from `item`, collected into a `String`
pub fn many_chars<'code, P>(item: P) -> Map<Repeat<P>, Collect>
where
    P: Parser<'code, Output = char>,
{
    many(item).map(collect as Collect)
}

/// One or more characters from `item`, collected into a `String`
pub fn many1_chars<'code, P>(item: P) -> Map<Repeat<P>, Collect>
where
    P: Parser<'code, Output = char>,
{
    many1(item).map(collect as Collect)
}

fn collect(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}
