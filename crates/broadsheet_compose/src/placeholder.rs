//! Placeholder scanning and the placeholder/definition bijection.
//!
//! Document text marks tag positions with `[[TAG:<id>]]`. Scanning finds
//! every well-formed marker (the id part may not contain `]`), trims and
//! charset-checks its id, and then verifies no stray `[[TAG:` opener is
//! left once the well-formed markers are cut out.

use std::collections::HashSet;
use std::ops::Range;

use broadsheet_foundation::{ErrorCode, ValidationError, ValidationResult};

use crate::definition::TagDefinition;

const PLACEHOLDER_OPEN: &str = "[[TAG:";

/// The placeholder ids found in one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaceholderScan {
    /// Every id in document order, repeats kept.
    pub ids_in_order: Vec<String>,
    /// Distinct ids, ordered by first occurrence.
    pub unique_ids: Vec<String>,
}

/// Scans document text for placeholders and validates their format.
///
/// # Errors
///
/// Fails with `template_placeholder_invalid_format` when a marker carries
/// an id outside `[A-Za-z0-9_-]`, or when an unclosed `[[TAG:` opener
/// remains after all well-formed markers are removed.
pub fn scan_text(text: &str) -> ValidationResult<PlaceholderScan> {
    let mut ids_in_order = Vec::new();
    let mut stripped = String::new();
    let mut cursor = 0;

    while let Some((span, raw_id)) = next_placeholder(text, cursor) {
        let id = raw_id.trim();
        if !is_valid_placeholder_id(id) {
            let placeholder = &text[span.clone()];
            return Err(ValidationError::new(
                ErrorCode::PlaceholderInvalidFormat,
                format!(
                    "Invalid placeholder format \"{placeholder}\". Expected [[TAG:<id>]] \
                     where <id> uses letters, numbers, underscore, or dash."
                ),
            )
            .with_segment("text")
            .with_detail("placeholder", placeholder));
        }
        ids_in_order.push(id.to_string());
        stripped.push_str(&text[cursor..span.start]);
        cursor = span.end;
    }
    stripped.push_str(&text[cursor..]);

    // Cutting markers out can splice the remainder into a new opener, so
    // the check runs on the joined text, not on the untouched regions.
    if stripped.contains(PLACEHOLDER_OPEN) {
        return Err(ValidationError::new(
            ErrorCode::PlaceholderInvalidFormat,
            "Template text contains malformed placeholder syntax. \
             Use [[TAG:<id>]] and make sure placeholders are closed with ]].",
        )
        .with_segment("text"));
    }

    let mut unique_ids = Vec::new();
    let mut seen = HashSet::new();
    for id in &ids_in_order {
        if seen.insert(id.clone()) {
            unique_ids.push(id.clone());
        }
    }

    Ok(PlaceholderScan {
        ids_in_order,
        unique_ids,
    })
}

/// Scans the text and checks that placeholder ids and definition ids form
/// a bijection.
///
/// # Errors
///
/// In check order: text format errors from [`scan_text`], then
/// `template_tag_duplicate_id`, then `template_placeholder_unknown_id`,
/// then `template_tag_unused_definition`.
pub fn validate_placeholders(
    text: &str,
    tags: &[TagDefinition],
) -> ValidationResult<PlaceholderScan> {
    let scan = scan_text(text)?;

    let tag_ids: Vec<&str> = tags.iter().map(|tag| tag.id.as_str()).collect();
    if let Some(duplicate) = first_duplicate(&tag_ids) {
        return Err(ValidationError::new(
            ErrorCode::TagDuplicateId,
            format!("Duplicate tag definition id \"{duplicate}\" is not allowed."),
        )
        .with_segment("tags")
        .with_detail("duplicateId", duplicate));
    }

    let tag_id_set: HashSet<&str> = tag_ids.iter().copied().collect();
    for placeholder_id in &scan.unique_ids {
        if !tag_id_set.contains(placeholder_id.as_str()) {
            return Err(ValidationError::new(
                ErrorCode::PlaceholderUnknownId,
                format!(
                    "Placeholder [[TAG:{placeholder_id}]] does not have a matching tag definition."
                ),
            )
            .with_segment("text")
            .with_detail("placeholderId", placeholder_id.as_str()));
        }
    }

    let placeholder_id_set: HashSet<&str> = scan.unique_ids.iter().map(String::as_str).collect();
    for tag_id in &tag_ids {
        if !placeholder_id_set.contains(tag_id) {
            return Err(ValidationError::new(
                ErrorCode::TagUnusedDefinition,
                format!("Tag definition \"{tag_id}\" is not used in template text."),
            )
            .with_segment("tags")
            .with_detail("tagId", *tag_id));
        }
    }

    Ok(scan)
}

/// Finds the next well-formed placeholder at or after `from`.
///
/// Returns the marker's byte span and the raw (untrimmed) id text. An
/// opener whose marker never closes is skipped, not reported; the caller
/// catches leftovers through the stripped-text check.
pub(crate) fn next_placeholder(text: &str, from: usize) -> Option<(Range<usize>, &str)> {
    let bytes = text.as_bytes();
    let mut search = from;
    loop {
        let start = search + text.get(search..)?.find(PLACEHOLDER_OPEN)?;
        let content_start = start + PLACEHOLDER_OPEN.len();
        let mut end = content_start;
        while end < bytes.len() && bytes[end] != b']' {
            end += 1;
        }
        if end + 1 < bytes.len() && bytes[end + 1] == b']' {
            return Some((start..end + 2, &text[content_start..end]));
        }
        search = start + 1;
    }
}

fn is_valid_placeholder_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

fn first_duplicate<'a>(ids: &[&'a str]) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.iter().find(|id| !seen.insert(**id)).copied()
}
