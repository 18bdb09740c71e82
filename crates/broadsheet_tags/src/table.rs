//! The `table` tag: renders a slice of a table source as a Markdown table.
//!
//! Attributes:
//! - `source`  - key in the context's table sources (default: `main`)
//! - `limit`   - max rows to display (default: 10, cap: 100)
//! - `from`    - slice origin: `start` (default) or `end`
//! - `columns` - comma-separated column names/aliases to include

use std::num::IntErrorKind;

use broadsheet_foundation::{MAIN_SOURCE_KEY, Scalar, TagKind};
use broadsheet_grammar::TagAttrs;
use serde::{Deserialize, Serialize};

use crate::context::{DataTableHeader, RenderContext};
use crate::error::TagError;

/// Rows shown when no `limit` attribute is given.
pub const DEFAULT_TABLE_ROWS: usize = 10;
/// Hard cap on rows regardless of the requested limit.
pub const MAX_TABLE_ROWS: usize = 100;

/// The sliced, column-filtered view of a source that a table tag renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TablePayload {
    /// Headers of the columns being rendered, in output order.
    pub headers: Vec<DataTableHeader>,
    /// Row data matching `headers`.
    pub rows: Vec<Vec<Scalar>>,
}

/// Where to slice rows from.
enum SliceFrom {
    Start,
    End,
}

/// Builds a table payload from tag attributes and the render context.
///
/// Slicing happens before column filtering, so `limit` counts source rows.
///
/// # Errors
/// Fails when an explicitly named source is missing, `limit` is not a
/// number, `from` is neither `start` nor `end`, or a requested column does
/// not exist.
pub fn build_table_payload(
    attrs: &TagAttrs,
    ctx: &RenderContext,
) -> Result<TablePayload, TagError> {
    let source_attr = attrs.get("source").map_or("", str::trim);
    let (source, explicit) = if source_attr.is_empty() {
        (MAIN_SOURCE_KEY, false)
    } else {
        (source_attr, true)
    };

    let Some(table) = ctx.source(source) else {
        if explicit {
            return Err(error(format!("source \"{source}\" is not configured")));
        }
        // The implicit default may be absent; that renders as nothing.
        return Ok(TablePayload::default());
    };

    let limit = resolve_limit(attrs)?;
    let from = resolve_from(attrs)?;
    let sliced = slice_rows(&table.rows, limit, &from);

    match attrs.get("columns") {
        Some(raw) if !raw.is_empty() => filter_columns(&table.headers, sliced, raw),
        _ => Ok(TablePayload {
            headers: table.headers.clone(),
            rows: sliced,
        }),
    }
}

/// Renders a table payload as a Markdown pipe table.
///
/// Empty headers or rows render as the empty string. Header cells show the
/// alias when one exists; `|` in cell values is escaped.
#[must_use]
pub fn render_table(payload: &TablePayload) -> String {
    if payload.rows.is_empty() || payload.headers.is_empty() {
        return String::new();
    }

    let header_cells: Vec<&str> = payload.headers.iter().map(DataTableHeader::label).collect();
    let header_line = format!("| {} |", header_cells.join(" | "));
    let separator_line = format!(
        "| {} |",
        payload
            .headers
            .iter()
            .map(|_| "---")
            .collect::<Vec<_>>()
            .join(" | ")
    );

    let mut lines = vec![header_line, separator_line];
    for row in &payload.rows {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }
    lines.join("\n")
}

/// Renders one cell: null as empty, everything else with `|` escaped.
fn cell_text(cell: &Scalar) -> String {
    match cell {
        Scalar::Null => String::new(),
        other => other.to_string().replace('|', "\\|"),
    }
}

fn resolve_limit(attrs: &TagAttrs) -> Result<usize, TagError> {
    let Some(raw) = attrs.get("limit") else {
        return Ok(DEFAULT_TABLE_ROWS);
    };
    let raw = raw.trim();
    // A number too large for usize is still a well-formed request; it
    // lands on the cap like any other oversized limit.
    let parsed = match raw.parse::<usize>() {
        Ok(n) => n,
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow) => MAX_TABLE_ROWS,
        Err(_) => {
            return Err(error(format!(
                "\"limit\" must be a non-negative integer, got \"{raw}\""
            )));
        }
    };
    Ok(parsed.min(MAX_TABLE_ROWS))
}

fn resolve_from(attrs: &TagAttrs) -> Result<SliceFrom, TagError> {
    match attrs.get("from") {
        None => Ok(SliceFrom::Start),
        Some("start") => Ok(SliceFrom::Start),
        Some("end") => Ok(SliceFrom::End),
        Some(other) => Err(error(format!(
            "\"from\" must be \"start\" or \"end\", got \"{other}\""
        ))),
    }
}

fn slice_rows(rows: &[Vec<Scalar>], limit: usize, from: &SliceFrom) -> Vec<Vec<Scalar>> {
    match from {
        SliceFrom::Start => rows.iter().take(limit).cloned().collect(),
        SliceFrom::End => rows[rows.len().saturating_sub(limit)..].to_vec(),
    }
}

fn filter_columns(
    headers: &[DataTableHeader],
    rows: Vec<Vec<Scalar>>,
    columns_raw: &str,
) -> Result<TablePayload, TagError> {
    let names: Vec<&str> = columns_raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    let mut indices = Vec::with_capacity(names.len());
    for name in names {
        let index = headers
            .iter()
            .position(|h| h.name == name || h.alias.as_deref() == Some(name))
            .ok_or_else(|| error(format!("column \"{name}\" not found in source headers")))?;
        indices.push(index);
    }

    Ok(TablePayload {
        headers: indices.iter().map(|&i| headers[i].clone()).collect(),
        rows: rows
            .into_iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or(Scalar::Null))
                    .collect()
            })
            .collect(),
    })
}

fn error(message: String) -> TagError {
    TagError::new(TagKind::Table, message)
}
