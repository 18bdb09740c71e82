//! Runtime render failures.
//!
//! Distinct from the edit-time validation taxonomy: these abort a whole
//! render rather than describing a rejected edit.

use broadsheet_grammar::ParseError;
use broadsheet_tags::TagError;
use thiserror::Error;

/// Result type of render engine operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// An error that aborts an entire render. There is no partial output.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The template string does not parse under the tag grammar.
    #[error("template parse failed: {0}")]
    Parse(#[from] ParseError),

    /// The template calls a tag head no handler supports.
    #[error("unsupported tag \"{name}\" in template")]
    UnsupportedTag {
        /// The offending tag head.
        name: String,
    },

    /// A handler rejected its input while building a payload.
    #[error(transparent)]
    Handler(#[from] TagError),

    /// The engine's own machinery failed.
    #[error("render engine failure: {0}")]
    Internal(String),
}
