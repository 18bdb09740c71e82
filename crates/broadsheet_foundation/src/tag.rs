//! The closed set of supported template tags and source key rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source key a tag falls back to when it names none.
pub const MAIN_SOURCE_KEY: &str = "main";

/// The supported template tag kinds.
///
/// This set is closed on purpose: every dispatch site matches exhaustively,
/// so adding a kind is a compile-time change, not a registry lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// Renders a slice of a table source as a Markdown pipe table.
    Table,
    /// Renders a single cell of a table source as inline text.
    Value,
}

impl TagKind {
    /// All supported kinds, in canonical order.
    pub const ALL: [Self; 2] = [Self::Table, Self::Value];

    /// Resolves a tag name to its kind, if supported.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "table" => Some(Self::Table),
            "value" => Some(Self::Value),
            _ => None,
        }
    }

    /// Returns the tag name as it appears in template text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the given string is a valid source key.
///
/// Source keys and placeholder ids share the same charset: one or more
/// ASCII letters, digits, hyphens, or underscores.
#[must_use]
pub fn is_valid_source_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
