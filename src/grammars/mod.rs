//! Complete grammars built from the combinators
//!
//! Both close their recursion through a [`ForwardRef`](crate::forward::ForwardRef)
//! and undefine it on drop.

pub mod calculator;
pub mod json;

pub use calculator::Calculator;
pub use json::{JsonObject, JsonParser, JsonValue};
