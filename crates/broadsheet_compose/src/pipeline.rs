//! The edit-time compilation pipeline.

use std::collections::BTreeMap;

use broadsheet_foundation::ValidationResult;
use serde::{Deserialize, Serialize};

use crate::assemble::assemble;
use crate::canonical::render_definitions;
use crate::contract::{ValidationOptions, validate_all};
use crate::definition::TagDefinition;
use crate::placeholder::validate_placeholders;
use crate::validate::validate_template;

/// Everything a successful compilation produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledTemplate {
    /// The assembled, validated template string.
    pub template: String,
    /// The canonical rendering of each tag definition, keyed by id.
    pub rendered_tags_by_id: BTreeMap<String, String>,
}

/// Compiles a document into a template: validates the placeholder and
/// definition pair, canonicalizes each definition, substitutes, and
/// re-validates the assembled result.
///
/// Stages run in a fixed order and the first failure wins:
/// placeholders, contracts, canonical rendering, assembly, final check.
///
/// # Errors
///
/// Returns the failing stage's [`ValidationError`](broadsheet_foundation::ValidationError).
pub fn compile(
    text: &str,
    tags: &[TagDefinition],
    options: &ValidationOptions,
) -> ValidationResult<CompiledTemplate> {
    match run_stages(text, tags, options) {
        Ok(compiled) => {
            tracing::debug!(
                tag_count = tags.len(),
                template_len = compiled.template.len(),
                "template compiled"
            );
            Ok(compiled)
        }
        Err(error) => {
            tracing::warn!(
                code = %error.code,
                message = %error.message,
                "template compilation failed"
            );
            Err(error)
        }
    }
}

fn run_stages(
    text: &str,
    tags: &[TagDefinition],
    options: &ValidationOptions,
) -> ValidationResult<CompiledTemplate> {
    validate_placeholders(text, tags)?;
    validate_all(tags, options)?;
    let rendered_tags_by_id = render_definitions(tags)?;
    let template = assemble(text, &rendered_tags_by_id)?;
    validate_template(&template)?;
    Ok(CompiledTemplate {
        template,
        rendered_tags_by_id,
    })
}
