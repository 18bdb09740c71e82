//! Attribute value escaping.
//!
//! Attribute values are double-quoted, so backslashes and quotes must be
//! escaped when emitting canonical tag text. Backslashes go first, or the
//! escape of `"` would itself get re-escaped.

/// Escapes a string for use inside a double-quoted attribute value.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
