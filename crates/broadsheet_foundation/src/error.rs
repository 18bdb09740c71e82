//! The edit-time validation error taxonomy.
//!
//! Every pipeline stage reports failures through [`ValidationError`], whose
//! [`ErrorCode`] is a closed set of stable wire names consumers can match on.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Uniform result type of every edit-time pipeline stage.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Stable machine-readable codes for template validation failures.
///
/// The serialized names are part of the external contract and never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Placeholder text is malformed or carries an invalid id.
    #[serde(rename = "template_placeholder_invalid_format")]
    PlaceholderInvalidFormat,
    /// A placeholder references no tag definition.
    #[serde(rename = "template_placeholder_unknown_id")]
    PlaceholderUnknownId,
    /// A tag definition is never referenced by the text.
    #[serde(rename = "template_tag_unused_definition")]
    TagUnusedDefinition,
    /// Two tag definitions share one id.
    #[serde(rename = "template_tag_duplicate_id")]
    TagDuplicateId,
    /// A tag definition names an unsupported tag.
    #[serde(rename = "template_tag_unsupported_name")]
    TagUnsupportedName,
    /// A tag definition's params violate its schema.
    #[serde(rename = "template_tag_invalid_params")]
    TagInvalidParams,
    /// A tag definition's source key is missing, malformed, or unavailable.
    #[serde(rename = "template_tag_invalid_source")]
    TagInvalidSource,
    /// The assembled template is internally inconsistent or unparseable.
    #[serde(rename = "template_render_invalid")]
    RenderInvalid,
}

impl ErrorCode {
    /// Returns the stable wire name for this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlaceholderInvalidFormat => "template_placeholder_invalid_format",
            Self::PlaceholderUnknownId => "template_placeholder_unknown_id",
            Self::TagUnusedDefinition => "template_tag_unused_definition",
            Self::TagDuplicateId => "template_tag_duplicate_id",
            Self::TagUnsupportedName => "template_tag_unsupported_name",
            Self::TagInvalidParams => "template_tag_invalid_params",
            Self::TagInvalidSource => "template_tag_invalid_source",
            Self::RenderInvalid => "template_render_invalid",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step in the structural path from the edit payload to the failing field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A named field, e.g. `"tags"` or `"params"`.
    Key(String),
    /// A position in a list, e.g. the index of a tag definition.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A single edit-time validation failure.
///
/// Stages fail fast, so one call yields at most one of these. The `path`
/// locates the offending field in the edit payload and `details` carries
/// machine-readable context for editor tooling.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ValidationError {
    /// The stable error code.
    pub code: ErrorCode,
    /// Human-readable description of the failure.
    pub message: String,
    /// Structural path to the offending field, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
    /// Machine-readable context (ids, keys, available options).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
}

impl ValidationError {
    /// Creates a new error with the given code and message.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Vec::new(),
            details: Map::new(),
        }
    }

    /// Sets the structural path.
    #[must_use]
    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one segment to the structural path.
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path.push(segment.into());
        self
    }

    /// Adds one detail entry.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}
