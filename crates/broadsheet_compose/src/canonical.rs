//! Canonical single-line rendering of tag definitions.
//!
//! A definition compiles to exactly one textual form, with attributes in
//! a fixed per-kind order, so that re-compiling an unchanged document
//! reproduces the template byte for byte.

use std::collections::BTreeMap;

use broadsheet_foundation::{ErrorCode, Scalar, TagKind, ValidationError, ValidationResult};
use broadsheet_grammar::escape_attribute;

use crate::contract::canonical_source;
use crate::definition::TagDefinition;

/// Renders one definition to its canonical `{{name attr="v"}}` form.
///
/// Attribute order is fixed: `source, columns, limit, from` for tables;
/// `source`, then `path` or `column`/`row`, for values. A present `path`
/// suppresses `column` and `row`. Parameters of the wrong shape are
/// skipped, not rejected; contract validation owns shape errors.
///
/// # Errors
///
/// `template_tag_unsupported_name` for an unknown name and
/// `template_tag_invalid_params` when no source can be resolved.
pub fn render_definition(tag: &TagDefinition) -> ValidationResult<String> {
    let Some(kind) = tag.kind() else {
        return Err(ValidationError::new(
            ErrorCode::TagUnsupportedName,
            format!("Unsupported template tag \"{}\".", tag.name),
        )
        .with_detail("tagId", tag.id.as_str())
        .with_detail("tagName", tag.name.as_str()));
    };

    let Some(source) = canonical_source(&tag.params) else {
        return Err(ValidationError::new(
            ErrorCode::TagInvalidParams,
            format!(
                "Tag \"{}\" ({}) is missing \"source\" or \"sourceKey\".",
                tag.name, tag.id
            ),
        )
        .with_detail("tagId", tag.id.as_str())
        .with_detail("tagName", tag.name.as_str()));
    };

    let mut attrs = vec![attr("source", source)];
    match kind {
        TagKind::Table => {
            if let Some(columns) = trimmed_string(&tag.params, "columns") {
                attrs.push(attr("columns", columns));
            }
            if let Some(limit) = integral_number(&tag.params, "limit") {
                attrs.push(format!("limit=\"{limit}\""));
            }
            if let Some(from) = trimmed_string(&tag.params, "from") {
                attrs.push(attr("from", from));
            }
        }
        TagKind::Value => {
            if let Some(path) = trimmed_string(&tag.params, "path") {
                attrs.push(attr("path", path));
            } else {
                if let Some(column) = scalar_text(&tag.params, "column") {
                    attrs.push(attr("column", &column));
                }
                if let Some(row) = scalar_text(&tag.params, "row") {
                    attrs.push(attr("row", &row));
                }
            }
        }
    }

    let mut out = String::from("{{");
    out.push_str(kind.as_str());
    for piece in &attrs {
        out.push(' ');
        out.push_str(piece);
    }
    out.push_str("}}");
    Ok(out)
}

/// Renders every definition, keyed by id.
///
/// # Errors
///
/// Returns the first failing definition's error.
pub fn render_definitions(tags: &[TagDefinition]) -> ValidationResult<BTreeMap<String, String>> {
    let mut rendered = BTreeMap::new();
    for tag in tags {
        rendered.insert(tag.id.clone(), render_definition(tag)?);
    }
    Ok(rendered)
}

fn attr(name: &str, value: &str) -> String {
    format!("{name}=\"{}\"", escape_attribute(value))
}

fn trimmed_string<'a>(params: &'a BTreeMap<String, Scalar>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .and_then(Scalar::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Reads a numeric parameter as its integer-truncated text.
fn integral_number(params: &BTreeMap<String, Scalar>, key: &str) -> Option<String> {
    match params.get(key)? {
        Scalar::Int(n) => Some(n.to_string()),
        Scalar::Float(f) if f.is_finite() => Some(f.trunc().to_string()),
        _ => None,
    }
}

/// Reads a string-or-number parameter as attribute text: numbers keep
/// their printed form, strings are trimmed and must be non-empty.
fn scalar_text(params: &BTreeMap<String, Scalar>, key: &str) -> Option<String> {
    match params.get(key)? {
        Scalar::Int(n) => Some(n.to_string()),
        Scalar::Float(f) if f.is_finite() => Some(f.to_string()),
        Scalar::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}
