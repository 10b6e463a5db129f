//! # ParsiClimb - Parser Combinators with Precedence Climbing
//!
//! A backtracking parser combinator library over text, with an
//! operator-precedence engine for expression grammars.
//!
//! - **Backtracking contract**: a parser that fails leaves the cursor where
//!   it found it, so alternatives can be retried from the same place
//! - **Recursive grammars**: close cycles with [`forward::ForwardRef`]
//! - **Expressions**: [`precedence::OperatorPrecedence`] handles prefix,
//!   postfix and left/right associative infix operators
//! - **Bare failures**: a failed parse is just [`NoMatch`], with no position
//!   or message attached

pub mod attempt;
pub mod between;
pub mod choice;
pub mod cursor;
pub mod error;
pub mod forward;
pub mod grammars;
pub mod map;
pub mod parser;
pub mod precedence;
pub mod repeat;
pub mod separated;
pub mod sequence;
pub mod text;
pub mod token;

pub use attempt::attempt;
pub use between::between;
pub use choice::{ChoiceExt, choice};
pub use cursor::{Cursor, Position};
pub use error::{GrammarError, NoMatch, ParseResult};
pub use forward::{ForwardRef, forward_ref};
pub use map::{MapExt, map, map2};
pub use parser::{BoxedExt, BoxedParser, Parser, parse_str, parser_fn};
pub use precedence::{OperatorHandler, OperatorPrecedence};
pub use repeat::{many, many1};
pub use separated::separated;
pub use sequence::{SequenceExt, sequence, sequence_first, sequence_second};
pub use token::token;
