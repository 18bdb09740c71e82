//! Structural tag handler errors.

use broadsheet_foundation::TagKind;
use thiserror::Error;

/// A structural error raised while building or rendering a tag payload.
///
/// These abort the whole render. Content-level problems in `value` tags
/// never take this path; they render as caution blocks instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[{tag}] {message}")]
pub struct TagError {
    /// The tag kind that failed.
    pub tag: TagKind,
    /// What went wrong.
    pub message: String,
}

impl TagError {
    /// Creates a new tag error.
    #[must_use]
    pub fn new(tag: TagKind, message: impl Into<String>) -> Self {
        Self {
            tag,
            message: message.into(),
        }
    }
}
