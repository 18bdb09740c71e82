//! Substitution of rendered tags into document text.

use std::collections::BTreeMap;

use broadsheet_foundation::{ErrorCode, ValidationError, ValidationResult};

use crate::placeholder::next_placeholder;

/// Replaces every `[[TAG:<id>]]` marker with its rendered tag.
///
/// Repeats of one id all receive the same rendering. Text outside the
/// markers passes through untouched.
///
/// # Errors
///
/// `template_render_invalid` when a marker's id has no rendering. With
/// validated inputs the earlier stages make this unreachable; it guards
/// direct callers.
pub fn assemble(text: &str, rendered_by_id: &BTreeMap<String, String>) -> ValidationResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some((span, raw_id)) = next_placeholder(text, cursor) {
        let id = raw_id.trim();
        let Some(rendered) = rendered_by_id.get(id) else {
            return Err(ValidationError::new(
                ErrorCode::RenderInvalid,
                format!("Placeholder [[TAG:{id}]] has no rendered tag."),
            )
            .with_segment("text")
            .with_detail("placeholderId", id));
        };
        out.push_str(&text[cursor..span.start]);
        out.push_str(rendered);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);

    Ok(out)
}
