//! A small JSON reader
//!
//! Strings are taken verbatim between double quotes; escape sequences are
//! not interpreted.

use crate::between::between;
use crate::choice::ChoiceExt;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::forward::{ForwardRef, forward_ref};
use crate::map::MapExt;
use crate::parser::Parser;
use crate::separated::separated;
use crate::sequence::SequenceExt;
use crate::text::number::float;
use crate::text::{end_of_input, lexeme, literal, many_chars, satisfy, whitespace};
use crate::token::token;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

pub type JsonObject = BTreeMap<String, JsonValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    String(String),
    Number(f64),
    Object(JsonObject),
    Array(Vec<JsonValue>),
    Bool(bool),
    Null,
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::String(s) => write!(f, "\"{s}\""),
            JsonValue::Number(n) => write!(f, "{n}"),
            JsonValue::Bool(b) => write!(f, "{b}"),
            JsonValue::Null => write!(f, "null"),
            JsonValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            JsonValue::Object(members) => {
                write!(f, "{{")?;
                for (i, (name, value)) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{name}\": {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Parser for a JSON document whose top level is an object
///
/// ```
/// use parsiclimb::grammars::json::{JsonValue, parse_object};
///
/// let object = parse_object(r#"{"a": 555}"#).unwrap();
/// assert_eq!(object["a"], JsonValue::Number(555.0));
/// ```
pub struct JsonParser<'code> {
    value: ForwardRef<'code, JsonValue>,
    object: Rc<dyn Parser<'code, Output = JsonObject> + 'code>,
}

impl<'code> JsonParser<'code> {
    pub fn new() -> Self {
        let value = forward_ref::<JsonValue>();

        let member = string().skip(lexeme(literal(':'))).and(value.clone());
        let object: Rc<dyn Parser<'code, Output = JsonObject> + 'code> = Rc::new(
            between(
                lexeme(literal('{')),
                separated(member, lexeme(literal(','))),
                lexeme(literal('}')),
            )
            .map(|members| members.into_iter().collect::<JsonObject>()),
        );
        let array = between(
            lexeme(literal('[')),
            separated(value.clone(), lexeme(literal(','))),
            lexeme(literal(']')),
        )
        .map(JsonValue::Array);

        let null = token(literal("null"), JsonValue::Null);
        let boolean = literal(true).or(literal(false)).map(JsonValue::Bool);
        let number = float(false).map(JsonValue::Number);

        value.define(lexeme(
            null.or(Rc::clone(&object).map(JsonValue::Object))
                .or(array)
                .or(boolean)
                .or(string().map(JsonValue::String))
                .or(number),
        ));

        JsonParser { value, object }
    }

    /// Parse `text`, which must hold exactly one value of any kind
    pub fn parse_value(&self, text: &'code str) -> ParseResult<JsonValue> {
        complete(&self.value, text)
    }

    /// Parse `text`, which must hold exactly one object
    pub fn parse_object(&self, text: &'code str) -> ParseResult<JsonObject> {
        complete(&self.object, text)
    }
}

impl Default for JsonParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for JsonParser<'_> {
    fn drop(&mut self) {
        self.value.undefine();
    }
}

impl<'code> Parser<'code> for JsonParser<'code> {
    type Output = JsonObject;

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        self.object.parse(cursor)
    }
}

/// Parse a complete JSON object document
pub fn parse_object(text: &str) -> ParseResult<JsonObject> {
    JsonParser::new().parse_object(text)
}

/// A double-quoted string followed by optional whitespace
fn string<'code>() -> impl Parser<'code, Output = String> {
    lexeme(between(
        literal('"'),
        many_chars(satisfy(|c| c != '"')),
        literal('"'),
    ))
}

fn complete<'code, P>(parser: &P, text: &'code str) -> ParseResult<P::Output>
where
    P: Parser<'code> + ?Sized,
{
    let mut cursor = Cursor::new(text);
    whitespace().parse(&mut cursor)?;
    let value = parser.parse(&mut cursor)?;
    end_of_input().parse(&mut cursor)?;
    Ok(value)
}
