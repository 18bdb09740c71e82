//! Integration tests for the table handler
//!
//! Builds payloads from parsed attributes and checks the rendered
//! Markdown, slicing rules, and failure modes.

use broadsheet_foundation::Scalar;
use broadsheet_grammar::TagAttrs;
use broadsheet_tags::{
    DataTableHeader, RenderContext, TableSource, build_table_payload, render_table,
};

fn sales_ctx() -> RenderContext {
    RenderContext::new().with_source(
        "main",
        TableSource::new(
            vec![
                DataTableHeader::new("a"),
                DataTableHeader::new("b"),
            ],
            vec![
                vec![Scalar::from("1"), Scalar::from("2")],
                vec![Scalar::from("3"), Scalar::from("4")],
            ],
        ),
    )
}

// =============================================================================
// Slicing and Filtering
// =============================================================================

#[test]
fn column_filter_keeps_matching_cells() {
    let attrs = TagAttrs::new().with("columns", "b");
    let payload = build_table_payload(&attrs, &sales_ctx()).unwrap();

    assert_eq!(
        payload.rows,
        vec![vec![Scalar::from("2")], vec![Scalar::from("4")]]
    );
    let rendered = render_table(&payload);
    assert!(rendered.starts_with("| b |"));
    assert!(!rendered.contains("| a |"));
}

#[test]
fn limit_defaults_to_ten_and_caps_at_one_hundred() {
    let rows: Vec<Vec<Scalar>> = (0..500).map(|i| vec![Scalar::Int(i)]).collect();
    let ctx = RenderContext::new().with_source(
        "main",
        TableSource::new(vec![DataTableHeader::new("n")], rows),
    );

    let defaulted = build_table_payload(&TagAttrs::new(), &ctx).unwrap();
    assert_eq!(defaulted.rows.len(), 10);

    let capped =
        build_table_payload(&TagAttrs::new().with("limit", "400"), &ctx).unwrap();
    assert_eq!(capped.rows.len(), 100);
}

#[test]
fn from_end_keeps_original_row_order() {
    let rows: Vec<Vec<Scalar>> = (0..6).map(|i| vec![Scalar::Int(i)]).collect();
    let ctx = RenderContext::new().with_source(
        "main",
        TableSource::new(vec![DataTableHeader::new("n")], rows),
    );
    let attrs = TagAttrs::new().with("limit", "2").with("from", "end");
    let payload = build_table_payload(&attrs, &ctx).unwrap();

    assert_eq!(payload.rows, vec![vec![Scalar::Int(4)], vec![Scalar::Int(5)]]);
}

// =============================================================================
// Rendered Markdown
// =============================================================================

#[test]
fn renders_a_complete_pipe_table() {
    let ctx = RenderContext::new().with_source(
        "main",
        TableSource::new(
            vec![
                DataTableHeader::new("region").with_alias("Region"),
                DataTableHeader::new("revenue"),
            ],
            vec![
                vec![Scalar::from("north"), Scalar::Int(1200)],
                vec![Scalar::Null, Scalar::Float(0.5)],
            ],
        ),
    );
    let payload = build_table_payload(&TagAttrs::new(), &ctx).unwrap();

    assert_eq!(
        render_table(&payload),
        "| Region | revenue |\n\
         | --- | --- |\n\
         | north | 1200 |\n\
         |  | 0.5 |"
    );
}

#[test]
fn pipes_in_cells_are_escaped() {
    let ctx = RenderContext::new().with_source(
        "main",
        TableSource::new(
            vec![DataTableHeader::new("note")],
            vec![vec![Scalar::from("either|or")]],
        ),
    );
    let payload = build_table_payload(&TagAttrs::new(), &ctx).unwrap();
    assert!(render_table(&payload).contains("either\\|or"));
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn named_missing_source_fails_but_implicit_main_does_not() {
    let empty = RenderContext::new();

    let err = build_table_payload(&TagAttrs::new().with("source", "sales"), &empty).unwrap_err();
    assert_eq!(err.to_string(), "[table] source \"sales\" is not configured");

    let payload = build_table_payload(&TagAttrs::new(), &empty).unwrap();
    assert_eq!(render_table(&payload), "");
}

#[test]
fn unknown_column_names_the_offender() {
    let attrs = TagAttrs::new().with("columns", "a,ghost");
    let err = build_table_payload(&attrs, &sales_ctx()).unwrap_err();
    assert!(err.to_string().contains("\"ghost\""));
}
