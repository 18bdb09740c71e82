//! Final validation of an assembled template.
//!
//! Whatever compilation hands back to the caller must be safe to persist:
//! free of leftover placeholder syntax, parseable under the canonical tag
//! grammar, and restricted to the supported tag names.

use broadsheet_foundation::{ErrorCode, TagKind, ValidationError, ValidationResult};
use broadsheet_grammar::{TemplateNode, parse_template};

/// Checks an assembled template string.
///
/// # Errors
///
/// `template_render_invalid` when placeholder syntax survived assembly,
/// when the template does not parse, or when a tag head is not a
/// supported tag name.
pub fn validate_template(template: &str) -> ValidationResult<()> {
    if template.contains("[[TAG:") {
        return Err(ValidationError::new(
            ErrorCode::RenderInvalid,
            "Rendered template still contains unresolved placeholder markers.",
        )
        .with_segment("template"));
    }

    let nodes = parse_template(template).map_err(|err| {
        ValidationError::new(
            ErrorCode::RenderInvalid,
            format!("Rendered template is not valid tag syntax: {err}."),
        )
        .with_segment("template")
    })?;

    for node in &nodes {
        if let TemplateNode::Tag(tag) = node {
            if TagKind::from_name(&tag.name).is_none() {
                return Err(ValidationError::new(
                    ErrorCode::RenderInvalid,
                    format!("Rendered template uses unsupported tag \"{}\".", tag.name),
                )
                .with_segment("template")
                .with_detail("tagName", tag.name.as_str()));
            }
        }
    }

    Ok(())
}
