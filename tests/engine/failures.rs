//! Integration tests for render aborts
//!
//! A failed render produces an error and nothing else; there is never a
//! partially substituted document.

use broadsheet_engine::{Engine, RenderError};
use broadsheet_foundation::{Scalar, TagKind};
use broadsheet_tags::{DataTableHeader, RenderContext, TableSource, TagError};

fn ctx() -> RenderContext {
    let headers = vec![DataTableHeader::new("region")];
    let rows = vec![vec![Scalar::from("north")]];
    RenderContext::new().with_source("main", TableSource::new(headers, rows))
}

#[test]
fn unsupported_tag_names_the_offender() {
    let err = Engine::new()
        .unwrap()
        .execute("before {{gauge source=\"main\"}} after", &ctx())
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::UnsupportedTag {
            name: "gauge".to_string(),
        }
    );
}

#[test]
fn missing_named_table_source_aborts() {
    let err = Engine::new()
        .unwrap()
        .execute("intro\n\n{{table source=\"ledger\"}}", &ctx())
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::Handler(TagError::new(
            TagKind::Table,
            "source \"ledger\" is not configured",
        ))
    );
}

#[test]
fn malformed_table_limit_aborts() {
    let err = Engine::new()
        .unwrap()
        .execute("{{table limit=\"lots\"}}", &ctx())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "[table] \"limit\" must be a non-negative integer, got \"lots\""
    );
}

#[test]
fn parse_failure_aborts_before_any_resolution() {
    let err = Engine::new()
        .unwrap()
        .execute("fine text {{table", &ctx())
        .unwrap_err();
    assert!(matches!(err, RenderError::Parse(_)));
    assert!(err.to_string().starts_with("template parse failed: parse error at 1:"));
}

#[test]
fn value_problems_do_not_abort() {
    // Content-level value failures render as cautions, not errors.
    let output = Engine::new()
        .unwrap()
        .execute("{{value source=\"missing\"}}", &ctx())
        .unwrap();
    assert!(output.rendered.contains("[!CAUTION]"));
    assert!(output.rendered.contains("source \"missing\" is not configured"));
}

#[test]
fn abort_yields_no_output_even_with_valid_tags_present() {
    let template = "{{value source=\"main\"}} then {{table source=\"absent\"}}";
    let result = Engine::new().unwrap().execute(template, &ctx());
    assert!(result.is_err());
}
