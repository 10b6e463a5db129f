use crate::cursor::Cursor;
use crate::error::{GrammarError, NoMatch, ParseResult};
use crate::parser::Parser;
use regex::Regex;

/// Parser that matches a regular expression at the cursor and yields the matched text
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `expr`, anchored to the cursor position
    pub fn new(expr: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(&format!("^(?:{expr})")).map_err(|source| {
            GrammarError::InvalidPattern {
                pattern: expr.to_string(),
                source,
            }
        })?;
        Ok(Pattern { regex })
    }
}

impl<'code> Parser<'code> for Pattern {
    type Output = &'code str;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let matched = cursor.match_pattern(&self.regex).ok_or(NoMatch)?;
        cursor.advance_past(matched);
        Ok(matched)
    }
}

/// Convenience function to create a Pattern parser
///
/// ```
/// use parsiclimb::{Cursor, Parser};
/// use parsiclimb::text::pattern;
///
/// let digits = pattern("[0-9]+").unwrap();
/// let mut cursor = Cursor::new("123abc");
/// assert_eq!(digits.parse(&mut cursor), Ok("123"));
/// ```
pub fn pattern(expr: &str) -> Result<Pattern, GrammarError> {
    Pattern::new(expr)
}
