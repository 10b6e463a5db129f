//! Primitive matchers over text, and the small text helpers built on them
//!
//! Every parser in this module is all-or-nothing: when it fails, the cursor
//! is exactly where it was. The sequencing combinators rely on that.

pub mod chars;
pub mod eof;
pub mod literal;
pub mod number;
pub mod pattern;
pub mod satisfy;
pub mod whitespace;

pub use chars::{many_chars, many1_chars};
pub use eof::{EndOfInput, end_of_input};
pub use literal::{Literal, literal};
pub use pattern::{Pattern, pattern};
pub use satisfy::{Satisfy, is_char, satisfy};
pub use whitespace::{lexeme, whitespace};
