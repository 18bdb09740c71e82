//! The `value` tag: renders a single cell of a table source as inline text.
//!
//! Attributes:
//! - `source` - key in the context's table sources (default: `main`)
//! - `path`   - `.columnName[row]` shorthand, mutually exclusive with the rest
//! - `row`    - 1-based row index (default: 1)
//! - `column` - column name, alias, or 1-based index (default: 1)
//!
//! Unlike `table`, this tag never aborts a render: payload building records
//! problems instead of failing, and rendering turns them into caution
//! blocks so a report with one broken value still ships.

use broadsheet_foundation::{MAIN_SOURCE_KEY, Scalar, TagKind};
use broadsheet_grammar::TagAttrs;
use serde::{Deserialize, Serialize};

use crate::context::{DataTableHeader, RenderContext};
use crate::error::TagError;
use crate::markdown::caution_block;

/// Row used when no `row` attribute or path index is given.
pub const DEFAULT_ROW: &str = "1";
/// Column used when no `column` attribute is given.
pub const DEFAULT_COLUMN: &str = "1";

/// Everything a value tag call needs to render later.
///
/// `error` carries a problem found while building; rendering surfaces it
/// as a caution block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuePayload {
    /// The resolved source key.
    pub source: String,
    /// Headers of the source, in column order.
    pub headers: Vec<DataTableHeader>,
    /// Rows of the source.
    pub rows: Vec<Vec<Scalar>>,
    /// The `path` attribute, trimmed, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The `row` attribute, trimmed, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
    /// The `column` attribute, trimmed, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// A problem recorded while building, rendered as a caution block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Builds a value payload from tag attributes and the render context.
///
/// Never fails: problems become error payloads that render as cautions.
#[must_use]
pub fn build_value_payload(attrs: &TagAttrs, ctx: &RenderContext) -> ValuePayload {
    let source_attr = attrs.get("source").map_or("", str::trim);
    let (source, explicit) = if source_attr.is_empty() {
        (MAIN_SOURCE_KEY, false)
    } else {
        (source_attr, true)
    };
    let source = source.to_string();

    let (headers, rows) = match ctx.source(&source) {
        Some(table) => (table.headers.clone(), table.rows.clone()),
        None if explicit => {
            return ValuePayload {
                error: Some(format!("source \"{source}\" is not configured")),
                source,
                ..ValuePayload::default()
            };
        }
        // The implicit default may be absent; rendering reports empty data.
        None => (Vec::new(), Vec::new()),
    };

    let path = trimmed_attr(attrs, "path");
    let column = trimmed_attr(attrs, "column");
    let row = trimmed_attr(attrs, "row");

    if is_present(&path) && (is_present(&column) || is_present(&row)) {
        return ValuePayload {
            source,
            headers,
            rows,
            error: Some("\"path\" cannot be combined with \"column\" or \"row\"".to_string()),
            ..ValuePayload::default()
        };
    }

    ValuePayload {
        source,
        headers,
        rows,
        path,
        row,
        column,
        error: None,
    }
}

/// Renders a value payload: the cell text, or a caution block naming the
/// problem.
#[must_use]
pub fn render_value(payload: &ValuePayload) -> String {
    match resolve_value(payload) {
        Ok(text) => text,
        Err(message) => caution_block(&TagError::new(TagKind::Value, message).to_string()),
    }
}

fn resolve_value(payload: &ValuePayload) -> Result<String, String> {
    if let Some(error) = &payload.error {
        return Err(error.clone());
    }
    if payload.headers.is_empty() {
        return Err(format!("source \"{}\" has no columns", payload.source));
    }
    if payload.rows.is_empty() {
        return Err(format!("source \"{}\" has no rows", payload.source));
    }

    if let Some(path) = payload.path.as_deref().filter(|p| !p.is_empty()) {
        return resolve_from_path(path, &payload.headers, &payload.rows);
    }

    let row_raw = payload.row.as_deref().unwrap_or(DEFAULT_ROW);
    let row_number = parse_positive(row_raw)
        .ok_or_else(|| format!("\"row\" must be a positive integer, got \"{row_raw}\""))?;
    let row = payload
        .rows
        .get(row_number - 1)
        .ok_or_else(|| format!("row \"{row_number}\" is out of range"))?;

    let column_raw = payload.column.as_deref().unwrap_or(DEFAULT_COLUMN);
    let column_index = resolve_column_index(column_raw, &payload.headers)?;
    if column_index >= row.len() {
        return Err(format!(
            "column \"{column_raw}\" is out of range for row \"{row_number}\""
        ));
    }

    Ok(cell_text(&row[column_index]))
}

fn resolve_from_path(
    path: &str,
    headers: &[DataTableHeader],
    rows: &[Vec<Scalar>],
) -> Result<String, String> {
    let Some((column_name, row_ref)) = parse_value_path(path) else {
        return Err(
            "\"path\" must match \".columnName[row]\" (row optional), for example: .revenue[1]"
                .to_string(),
        );
    };

    let row_raw = row_ref.unwrap_or(DEFAULT_ROW);
    let row_number = parse_positive(row_raw).ok_or_else(|| {
        format!("\"path\" row index must be a positive integer, got \"{row_raw}\"")
    })?;
    let row = rows
        .get(row_number - 1)
        .ok_or_else(|| format!("row \"{row_number}\" is out of range"))?;

    let column_index = resolve_column_index(column_name, headers)?;
    if column_index >= row.len() {
        return Err(format!(
            "column \"{column_name}\" is out of range for row \"{row_number}\""
        ));
    }

    Ok(cell_text(&row[column_index]))
}

/// Splits a `.columnName[row]` path into its column name and optional row.
///
/// The column follows identifier rules (letter or underscore first, then
/// letters, digits, underscores); the row part is bracketed digits.
fn parse_value_path(path: &str) -> Option<(&str, Option<&str>)> {
    let rest = path.strip_prefix('.')?;
    let bytes = rest.as_bytes();
    let first = *bytes.first()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    let mut end = 1;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    let column = &rest[..end];
    let tail = &rest[end..];
    if tail.is_empty() {
        return Some((column, None));
    }
    let row = tail.strip_prefix('[')?.strip_suffix(']')?;
    if row.is_empty() || !row.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((column, Some(row)))
}

/// Resolves a column reference: 1-based index first, then exact name or
/// alias, then case-insensitive name or alias.
fn resolve_column_index(raw: &str, headers: &[DataTableHeader]) -> Result<usize, String> {
    if let Some(number) = parse_positive(raw) {
        let index = number - 1;
        if index >= headers.len() {
            return Err(format!("column \"{number}\" is out of range"));
        }
        return Ok(index);
    }

    if let Some(index) = headers
        .iter()
        .position(|h| h.name == raw || h.alias.as_deref() == Some(raw))
    {
        return Ok(index);
    }

    let lowered = raw.to_lowercase();
    if let Some(index) = headers.iter().position(|h| {
        h.name.to_lowercase() == lowered
            || h.alias
                .as_deref()
                .is_some_and(|alias| alias.to_lowercase() == lowered)
    }) {
        return Ok(index);
    }

    Err(format!("column \"{raw}\" not found"))
}

/// Parses a string of digits into a positive number.
fn parse_positive(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().filter(|n| *n > 0)
}

fn cell_text(cell: &Scalar) -> String {
    cell.to_string()
}

fn trimmed_attr(attrs: &TagAttrs, name: &str) -> Option<String> {
    attrs.get(name).map(|v| v.trim().to_string())
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
