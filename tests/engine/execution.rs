//! Integration tests for template execution
//!
//! Runs compiled templates against data contexts and checks the rendered
//! text and per-tag metadata.

use broadsheet_engine::Engine;
use broadsheet_foundation::{Scalar, TagKind};
use broadsheet_tags::{DataTableHeader, RenderContext, TableSource, TagPayload};

fn quarterly_ctx() -> RenderContext {
    RenderContext::new()
        .with_source(
            "main",
            TableSource::new(
                vec![
                    DataTableHeader::new("region").with_alias("Region"),
                    DataTableHeader::new("revenue"),
                ],
                vec![
                    vec![Scalar::from("north"), Scalar::Int(1200)],
                    vec![Scalar::from("south"), Scalar::Int(980)],
                    vec![Scalar::from("west"), Scalar::Int(1430)],
                ],
            ),
        )
        .with_source(
            "targets",
            TableSource::new(
                vec![DataTableHeader::new("target")],
                vec![vec![Scalar::Int(4000)]],
            ),
        )
}

// =============================================================================
// Rendered Text
// =============================================================================

#[test]
fn renders_a_full_report() {
    let engine = Engine::new().unwrap();
    let template = "# Q3\n\n\
                    {{table source=\"main\" limit=\"2\"}}\n\n\
                    Target: {{value source=\"targets\" column=\"target\"}}\n";
    let output = engine.execute(template, &quarterly_ctx()).unwrap();

    assert_eq!(
        output.rendered,
        "# Q3\n\n\
         | Region | revenue |\n\
         | --- | --- |\n\
         | north | 1200 |\n\
         | south | 980 |\n\n\
         Target: 4000\n"
    );
}

#[test]
fn text_only_templates_pass_through_unchanged() {
    let engine = Engine::new().unwrap();
    let template = "No tags here.\nJust two lines.";
    let output = engine.execute(template, &quarterly_ctx()).unwrap();
    assert_eq!(output.rendered, template);
    assert!(output.tags.is_empty());
}

#[test]
fn many_renders_share_one_engine() {
    let engine = Engine::new().unwrap();
    let ctx = quarterly_ctx();
    for _ in 0..5 {
        let output = engine
            .execute("{{value source=\"main\" column=\"revenue\" row=\"3\"}}", &ctx)
            .unwrap();
        assert_eq!(output.rendered, "1430");
    }
}

// =============================================================================
// Tag Metadata
// =============================================================================

#[test]
fn metadata_lists_every_call_in_document_order() {
    let engine = Engine::new().unwrap();
    let template = "{{value source=\"targets\"}} {{table source=\"main\"}} {{value source=\"main\"}}";
    let output = engine.execute(template, &quarterly_ctx()).unwrap();

    let kinds: Vec<TagKind> = output.tags.iter().map(|t| t.tag).collect();
    assert_eq!(kinds, [TagKind::Value, TagKind::Table, TagKind::Value]);

    match &output.tags[1].payload {
        TagPayload::Table(table) => assert_eq!(table.rows.len(), 3),
        TagPayload::Value(_) => panic!("expected a table payload"),
    }
    assert!(output.tags.iter().all(|t| t.meta.is_none()));
}

#[test]
fn output_json_omits_empty_meta() {
    let engine = Engine::new().unwrap();
    let output = engine
        .execute("{{value source=\"main\"}}", &quarterly_ctx())
        .unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["tags"][0]["tag"], "value");
    assert_eq!(json["tags"][0]["payload"]["source"], "main");
    assert!(json["tags"][0].get("meta").is_none());
}
