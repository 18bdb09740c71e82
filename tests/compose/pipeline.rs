//! Integration tests for full edit-time compilation
//!
//! Drives `compile` end to end: stage order, canonical output, and the
//! serialized form of the compiled result.

use broadsheet_compose::{CompiledTemplate, TagDefinition, ValidationOptions, assemble, compile};
use broadsheet_foundation::ErrorCode;

// =============================================================================
// Canonical Output
// =============================================================================

#[test]
fn single_table_document_compiles_to_its_canonical_tag() {
    let compiled = compile(
        "[[TAG:t1]]",
        &[TagDefinition::new("t1", "table").with_param("source", "main")],
        &ValidationOptions::new(),
    )
    .unwrap();
    assert_eq!(compiled.template, "{{table source=\"main\"}}");
}

#[test]
fn mixed_document_keeps_text_and_substitutes_every_marker() {
    let tags = vec![
        TagDefinition::new("overview", "table")
            .with_param("source", "main")
            .with_param("columns", "region,revenue")
            .with_param("limit", 5i64),
        TagDefinition::new("total", "value")
            .with_param("source", "main")
            .with_param("path", ".revenue[1]"),
    ];
    let compiled = compile(
        "# Report\n\n[[TAG:overview]]\n\nTotal: [[TAG:total]] ([[TAG:total]])\n",
        &tags,
        &ValidationOptions::new(),
    )
    .unwrap();

    assert_eq!(
        compiled.template,
        "# Report\n\n\
         {{table source=\"main\" columns=\"region,revenue\" limit=\"5\"}}\n\n\
         Total: {{value source=\"main\" path=\".revenue[1]\"}} \
         ({{value source=\"main\" path=\".revenue[1]\"}})\n"
    );
    assert_eq!(compiled.rendered_tags_by_id.len(), 2);
}

#[test]
fn reassembling_the_text_reproduces_the_template() {
    let text = "a [[TAG:x]] b [[TAG:y]] c [[TAG:x]]";
    let tags = vec![
        TagDefinition::new("x", "table").with_param("source", "main"),
        TagDefinition::new("y", "value").with_param("source", "main"),
    ];
    let compiled = compile(text, &tags, &ValidationOptions::new()).unwrap();
    let reassembled = assemble(text, &compiled.rendered_tags_by_id).unwrap();
    assert_eq!(reassembled, compiled.template);
}

// =============================================================================
// Stage Order
// =============================================================================

#[test]
fn stages_fail_in_pipeline_order() {
    let options = ValidationOptions::new();

    // Placeholder stage: unmatched marker.
    let err = compile("[[TAG:t1]]", &[], &options).unwrap_err();
    assert_eq!(err.code, ErrorCode::PlaceholderUnknownId);

    // Contract stage: the bijection holds but the params are bad.
    let bad_params = [TagDefinition::new("t1", "table")
        .with_param("source", "main")
        .with_param("limit", 0i64)];
    let err = compile("[[TAG:t1]]", &bad_params, &options).unwrap_err();
    assert_eq!(err.code, ErrorCode::TagInvalidParams);

    // Final stage: raw tag syntax smuggled into the text.
    let err = compile("see {{chart}}", &[], &options).unwrap_err();
    assert_eq!(err.code, ErrorCode::RenderInvalid);
    assert!(err.message.contains("\"chart\""));
}

#[test]
fn duplicate_ids_report_before_everything_else() {
    let tags = [
        TagDefinition::new("t1", "chart"),
        TagDefinition::new("t1", "chart"),
    ];
    let err = compile("[[TAG:t1]]", &tags, &ValidationOptions::new()).unwrap_err();
    assert_eq!(err.code, ErrorCode::TagDuplicateId);
}

// =============================================================================
// Serialized Form
// =============================================================================

#[test]
fn compiled_templates_round_trip_through_json() {
    let compiled = compile(
        "[[TAG:t1]]",
        &[TagDefinition::new("t1", "table").with_param("source", "main")],
        &ValidationOptions::new(),
    )
    .unwrap();

    let json = serde_json::to_string(&compiled).unwrap();
    let back: CompiledTemplate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, compiled);
    assert!(json.contains("\"rendered_tags_by_id\""));
}

#[test]
fn tag_definitions_deserialize_from_editor_json() {
    let json = r#"{
        "id": "t1",
        "name": "table",
        "params": { "source": "main", "limit": 5, "columns": "a,b" }
    }"#;
    let tag: TagDefinition = serde_json::from_str(json).unwrap();
    let compiled = compile("[[TAG:t1]]", &[tag], &ValidationOptions::new()).unwrap();
    assert_eq!(
        compiled.template,
        "{{table source=\"main\" columns=\"a,b\" limit=\"5\"}}"
    );
}
