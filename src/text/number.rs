use crate::cursor::Cursor;
use crate::error::{NoMatch, ParseResult};
use crate::parser::Parser;
use regex::Regex;
use std::sync::LazyLock;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("integer regex is valid"));

static FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?").expect("float regex is valid")
});

/// Parser for a signed decimal integer
///
/// Fails without consuming if the digits do not fit in an `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerParser;

impl<'code> Parser<'code> for IntegerParser {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let text = cursor.match_pattern(&INTEGER).ok_or(NoMatch)?;
        let value = text.parse::<i64>().map_err(|_| NoMatch)?;
        cursor.advance_past(text);
        Ok(value)
    }
}

pub fn integer() -> IntegerParser {
    IntegerParser
}

/// Parser for a decimal floating point number with optional exponent
///
/// A strict parser refuses text that is exactly an integer, so that a
/// grammar can try `float(true)` before `integer()` and keep the two apart.
#[derive(Debug, Clone, Copy)]
pub struct FloatParser {
    strict: bool,
}

impl FloatParser {
    pub fn new(strict: bool) -> Self {
        FloatParser { strict }
    }
}

impl<'code> Parser<'code> for FloatParser {
    type Output = f64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let text = cursor.match_pattern(&FLOAT).ok_or(NoMatch)?;
        if self.strict && cursor.match_pattern(&INTEGER) == Some(text) {
            return Err(NoMatch);
        }
        let value = text.parse::<f64>().unwrap_or(f64::NAN);
        cursor.advance_past(text);
        Ok(value)
    }
}

pub fn float(strict: bool) -> FloatParser {
    FloatParser::new(strict)
}
