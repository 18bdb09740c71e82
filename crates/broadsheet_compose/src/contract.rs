//! Per-kind parameter contracts for tag definitions.
//!
//! Each supported tag kind has a strict schema: unknown parameters are
//! rejected, field shapes are checked one by one, and cross-field rules
//! run last. On top of the schema, every definition must resolve to a
//! well-formed source key that the caller's options allow.

use std::collections::BTreeMap;

use broadsheet_foundation::{
    ErrorCode, MAIN_SOURCE_KEY, Scalar, TagKind, ValidationError, ValidationResult,
    is_valid_source_key,
};
use serde_json::Value;

use crate::definition::TagDefinition;

/// Options governing source-key validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOptions {
    /// When set, non-`main` source keys must be members of this list.
    pub available_source_keys: Option<Vec<String>>,
    /// Accept `main` unconditionally, without consulting the list above.
    pub allow_main_source: bool,
}

impl ValidationOptions {
    /// Creates the default options: any well-formed key, `main` allowed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts non-`main` source keys to the given list.
    #[must_use]
    pub fn with_available_sources<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_source_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether `main` bypasses the availability list.
    #[must_use]
    pub fn with_allow_main_source(mut self, allow: bool) -> Self {
        self.allow_main_source = allow;
        self
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            available_source_keys: None,
            allow_main_source: true,
        }
    }
}

/// Validates every definition, failing at the first bad one.
///
/// # Errors
///
/// Returns the first failing definition's error; its path names the
/// definition's index in `tags`.
pub fn validate_all(tags: &[TagDefinition], options: &ValidationOptions) -> ValidationResult<()> {
    for (index, tag) in tags.iter().enumerate() {
        validate_definition(tag, index, options)?;
    }
    Ok(())
}

/// Validates one definition: name, parameter schema, then source key.
///
/// # Errors
///
/// `template_tag_unsupported_name` for an unknown name,
/// `template_tag_invalid_params` for a schema violation, and
/// `template_tag_invalid_source` for a missing, malformed, or unavailable
/// source key.
pub fn validate_definition(
    tag: &TagDefinition,
    index: usize,
    options: &ValidationOptions,
) -> ValidationResult<()> {
    let Some(kind) = tag.kind() else {
        return Err(ValidationError::new(
            ErrorCode::TagUnsupportedName,
            format!("Unsupported template tag \"{}\".", tag.name),
        )
        .with_path(["tags"])
        .with_segment(index)
        .with_segment("name")
        .with_detail("tagName", tag.name.as_str())
        .with_detail("tagId", tag.id.as_str()));
    };

    check_schema(tag, kind, index)?;
    check_source(tag, index, options)
}

/// Resolves the canonical source key of a definition: trimmed `source` if
/// non-empty, else trimmed `sourceKey`.
#[must_use]
pub fn canonical_source(params: &BTreeMap<String, Scalar>) -> Option<&str> {
    ["source", "sourceKey"].iter().find_map(|key| {
        params
            .get(*key)
            .and_then(Scalar::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    })
}

// ============================================================================
// Parameter schemas
// ============================================================================

/// First schema violation found: the failing field (when one field is at
/// fault) and an author-facing message.
struct Violation {
    field: Option<&'static str>,
    message: String,
}

impl Violation {
    fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }

    fn object(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

fn check_schema(tag: &TagDefinition, kind: TagKind, index: usize) -> ValidationResult<()> {
    let violation = match kind {
        TagKind::Table => table_violation(&tag.params),
        TagKind::Value => value_violation(&tag.params),
    };
    let Some(violation) = violation else {
        return Ok(());
    };

    let mut error = ValidationError::new(
        ErrorCode::TagInvalidParams,
        format!(
            "Invalid params for tag \"{}\" ({}). {}",
            tag.name, tag.id, violation.message
        ),
    )
    .with_path(["tags"])
    .with_segment(index)
    .with_segment("params")
    .with_detail("tagName", tag.name.as_str())
    .with_detail("tagId", tag.id.as_str());
    if let Some(field) = violation.field {
        error = error.with_segment(field);
    }
    Err(error)
}

const TABLE_PARAM_KEYS: [&str; 5] = ["source", "sourceKey", "limit", "from", "columns"];
const VALUE_PARAM_KEYS: [&str; 5] = ["source", "sourceKey", "path", "row", "column"];

fn table_violation(params: &BTreeMap<String, Scalar>) -> Option<Violation> {
    non_empty_string(params, "source")
        .or_else(|| non_empty_string(params, "sourceKey"))
        .or_else(|| positive_integer(params, "limit"))
        .or_else(|| slice_origin(params, "from"))
        .or_else(|| non_empty_string(params, "columns"))
        .or_else(|| unknown_key(params, &TABLE_PARAM_KEYS))
        .or_else(|| source_refinements(params))
}

fn value_violation(params: &BTreeMap<String, Scalar>) -> Option<Violation> {
    non_empty_string(params, "source")
        .or_else(|| non_empty_string(params, "sourceKey"))
        .or_else(|| non_empty_string(params, "path"))
        .or_else(|| string_or_number(params, "row"))
        .or_else(|| string_or_number(params, "column"))
        .or_else(|| unknown_key(params, &VALUE_PARAM_KEYS))
        .or_else(|| source_refinements(params))
        .or_else(|| path_conflict(params))
}

fn non_empty_string(params: &BTreeMap<String, Scalar>, key: &'static str) -> Option<Violation> {
    match params.get(key) {
        None => None,
        Some(Scalar::String(s)) if !s.is_empty() => None,
        Some(_) => Some(Violation::field(
            key,
            format!("\"{key}\" must be a non-empty string."),
        )),
    }
}

fn positive_integer(params: &BTreeMap<String, Scalar>, key: &'static str) -> Option<Violation> {
    let ok = match params.get(key) {
        None => true,
        Some(Scalar::Int(n)) => *n > 0,
        Some(Scalar::Float(f)) => f.is_finite() && f.fract() == 0.0 && *f > 0.0,
        Some(_) => false,
    };
    if ok {
        None
    } else {
        Some(Violation::field(
            key,
            format!("\"{key}\" must be a positive integer."),
        ))
    }
}

fn slice_origin(params: &BTreeMap<String, Scalar>, key: &'static str) -> Option<Violation> {
    match params.get(key) {
        None => None,
        Some(Scalar::String(s)) if &**s == "start" || &**s == "end" => None,
        Some(_) => Some(Violation::field(
            key,
            format!("\"{key}\" must be \"start\" or \"end\"."),
        )),
    }
}

fn string_or_number(params: &BTreeMap<String, Scalar>, key: &'static str) -> Option<Violation> {
    match params.get(key) {
        None | Some(Scalar::Int(_) | Scalar::Float(_)) => None,
        Some(Scalar::String(s)) if !s.is_empty() => None,
        Some(_) => Some(Violation::field(
            key,
            format!("\"{key}\" must be a non-empty string or a number."),
        )),
    }
}

fn unknown_key(params: &BTreeMap<String, Scalar>, allowed: &[&str]) -> Option<Violation> {
    params
        .keys()
        .find(|key| !allowed.contains(&key.as_str()))
        .map(|key| Violation::object(format!("Unknown parameter \"{key}\".")))
}

fn source_refinements(params: &BTreeMap<String, Scalar>) -> Option<Violation> {
    let source = params.get("source").and_then(Scalar::as_str);
    let source_key = params.get("sourceKey").and_then(Scalar::as_str);

    if source.is_none() && source_key.is_none() {
        return Some(Violation::field(
            "source",
            "Either \"source\" or \"sourceKey\" is required.",
        ));
    }
    if let (Some(source), Some(source_key)) = (source, source_key) {
        if source.trim() != source_key.trim() {
            return Some(Violation::field(
                "sourceKey",
                "\"source\" and \"sourceKey\" must match when both are provided.",
            ));
        }
    }
    None
}

fn path_conflict(params: &BTreeMap<String, Scalar>) -> Option<Violation> {
    if params.contains_key("path")
        && (params.contains_key("row") || params.contains_key("column"))
    {
        return Some(Violation::field(
            "path",
            "\"path\" cannot be combined with \"row\" or \"column\".",
        ));
    }
    None
}

// ============================================================================
// Source-key rules
// ============================================================================

fn check_source(
    tag: &TagDefinition,
    index: usize,
    options: &ValidationOptions,
) -> ValidationResult<()> {
    let Some(source) = canonical_source(&tag.params) else {
        return Err(ValidationError::new(
            ErrorCode::TagInvalidSource,
            format!(
                "Tag \"{}\" ({}) must define \"source\" or \"sourceKey\".",
                tag.name, tag.id
            ),
        )
        .with_path(["tags"])
        .with_segment(index)
        .with_segment("params")
        .with_detail("tagName", tag.name.as_str())
        .with_detail("tagId", tag.id.as_str()));
    };

    if !is_valid_source_key(source) {
        return Err(ValidationError::new(
            ErrorCode::TagInvalidSource,
            format!(
                "Invalid source key \"{source}\" for tag \"{}\" ({}).",
                tag.name, tag.id
            ),
        )
        .with_path(["tags"])
        .with_segment(index)
        .with_segment("params")
        .with_segment("source")
        .with_detail("source", source)
        .with_detail("tagName", tag.name.as_str())
        .with_detail("tagId", tag.id.as_str()));
    }

    if options.allow_main_source && source == MAIN_SOURCE_KEY {
        return Ok(());
    }

    if let Some(available) = &options.available_source_keys {
        if !available.iter().any(|key| key == source) {
            return Err(ValidationError::new(
                ErrorCode::TagInvalidSource,
                format!(
                    "Source \"{source}\" is not available for tag \"{}\" ({}).",
                    tag.name, tag.id
                ),
            )
            .with_path(["tags"])
            .with_segment(index)
            .with_segment("params")
            .with_segment("source")
            .with_detail("source", source)
            .with_detail("tagName", tag.name.as_str())
            .with_detail("tagId", tag.id.as_str())
            .with_detail("availableSourceKeys", Value::from(available.clone())));
        }
    }

    Ok(())
}
