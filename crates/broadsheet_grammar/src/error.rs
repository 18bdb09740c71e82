//! Parse errors for the template grammar.

use thiserror::Error;

/// A syntax error in template text.
///
/// Line and column are 1-based and point at where the problem starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("parse error at {line}:{column}: {message}")]
pub struct ParseError {
    /// Description of the parse error.
    pub message: String,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl ParseError {
    /// Creates a new parse error at the given position.
    #[must_use]
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}
