use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// An input that does not start with an item yields an empty list rather than
/// failing. A trailing separator is left unconsumed. A separator and item
/// pair that matches without consuming input ends the list after that pair.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `""` → `vec![]`
pub struct Separated<P, PS> {
    item: P,
    separator: PS,
}

impl<P, PS> Separated<P, PS> {
    pub fn new(item: P, separator: PS) -> Self {
        Separated { item, separator }
    }
}

impl<'code, P, PS> Parser<'code> for Separated<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let mut results = Vec::new();

        if let Ok(first) = self.item.parse(cursor) {
            results.push(first);
            // separator then item, undoing the separator if no item follows
            loop {
                let start = cursor.position();
                if self.separator.parse(cursor).is_err() {
                    break;
                }
                match self.item.parse(cursor) {
                    Ok(next) => results.push(next),
                    Err(_) => {
                        cursor.set_position(start);
                        break;
                    }
                }
                // separator and item that both matched nothing would repeat forever
                if cursor.position() == start {
                    break;
                }
            }
        }

        Ok(results)
    }
}

/// Convenience function to create a Separated parser
pub fn separated<'code, P, PS>(item: P, separator: PS) -> Separated<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    Separated::new(item, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ChoiceExt;
    use crate::map::MapExt;
    use crate::sequence::SequenceExt;
    use crate::text::{literal, many_chars, pattern, satisfy, whitespace};

    #[test]
    fn test_separated_several() {
        let mut cursor = Cursor::new("a,b,c;");
        let parser = separated(pattern("[a-z]").unwrap(), literal(','));

        assert_eq!(parser.parse(&mut cursor), Ok(vec!["a", "b", "c"]));
        assert_eq!(cursor.remaining(), ";");
    }

    #[test]
    fn test_separated_single() {
        let mut cursor = Cursor::new("42");
        let parser = separated(pattern("[0-9]+").unwrap(), literal(','));

        assert_eq!(parser.parse(&mut cursor), Ok(vec!["42"]));
    }

    #[test]
    fn test_separated_empty_is_success() {
        let mut cursor = Cursor::new(")");
        let parser = separated(pattern("[0-9]+").unwrap(), literal(','));

        assert_eq!(parser.parse(&mut cursor), Ok(vec![]));
        assert_eq!(cursor.position().offset(), 0);
    }

    #[test]
    fn test_separated_trailing_separator_left() {
        let mut cursor = Cursor::new("1,2,)");
        let parser = separated(pattern("[0-9]+").unwrap(), literal(','));

        assert_eq!(parser.parse(&mut cursor), Ok(vec!["1", "2"]));
        assert_eq!(cursor.remaining(), ",)");
    }

    #[test]
    fn test_separated_empty_matches_terminate() {
        let mut cursor = Cursor::new("x");
        let parser = separated(many_chars(satisfy(char::is_alphabetic)), whitespace());

        assert_eq!(
            parser.parse(&mut cursor),
            Ok(vec!["x".to_string(), String::new()])
        );
        assert!(cursor.at_end());
    }

    #[test]
    fn test_separated_gives_back_separator_to_next_parser() {
        let mut cursor = Cursor::new("1,2,x");
        let parser = separated(pattern("[0-9]+").unwrap(), literal(',')).and(literal(",x"));

        assert_eq!(parser.parse(&mut cursor), Ok((vec!["1", "2"], ",x")));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_separated_inside_choice_retries_from_start() {
        let mut cursor = Cursor::new("1,2,x");
        let terminated = separated(pattern("[0-9]+").unwrap(), literal(',')).skip(literal(';'));
        let fallback = pattern("[0-9,]+x").unwrap().map(|text| vec![text]);
        let parser = terminated.or(fallback);

        assert_eq!(parser.parse(&mut cursor), Ok(vec!["1,2,x"]));
        assert!(cursor.at_end());
    }
}
