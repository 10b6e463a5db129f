use thiserror::Error;

/// The single way a parse can fail: the parser did not match at the cursor.
///
/// Carries no position or explanation. Recovery is structural, via
/// [`choice`](crate::choice::choice) and the repetition combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("no match")]
pub struct NoMatch;

/// Result type returned by every [`Parser`](crate::Parser)
pub type ParseResult<T> = Result<T, NoMatch>;

/// Errors raised while *building* a grammar, before any input is seen
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
