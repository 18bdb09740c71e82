//! Integration tests for template parsing
//!
//! Parses whole documents and checks node structure, spans, and error
//! positions.

use broadsheet_grammar::{TemplateNode, parse_template};

// =============================================================================
// Document Structure
// =============================================================================

#[test]
fn parses_a_report_document() {
    let source = "# Q3 Report\n\n\
                  {{table source=\"main\" columns=\"region,revenue\" limit=\"5\"}}\n\n\
                  Total: {{value source=\"main\" path=\".revenue[1]\"}}\n";
    let nodes = parse_template(source).unwrap();

    assert_eq!(nodes.len(), 5);
    assert!(matches!(&nodes[0], TemplateNode::Text(t, _) if t == "# Q3 Report\n\n"));

    let table = nodes[1].as_tag().unwrap();
    assert_eq!(table.name, "table");
    assert_eq!(table.attrs.get("source"), Some("main"));
    assert_eq!(table.attrs.get("columns"), Some("region,revenue"));
    assert_eq!(table.attrs.get("limit"), Some("5"));

    let value = nodes[3].as_tag().unwrap();
    assert_eq!(value.name, "value");
    assert_eq!(value.attrs.get("path"), Some(".revenue[1]"));
}

#[test]
fn attribute_order_is_source_order() {
    let nodes = parse_template("{{value row=\"2\" source=\"main\" column=\"x\"}}").unwrap();
    let names: Vec<&str> = nodes[0]
        .as_tag()
        .unwrap()
        .attrs
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["row", "source", "column"]);
}

#[test]
fn spans_slice_back_to_their_text() {
    let source = "intro {{table source=\"main\"}} outro";
    let nodes = parse_template(source).unwrap();
    for node in &nodes {
        let span = node.span();
        assert_eq!(span.text(source), &source[span.start..span.end]);
    }
    let tag = nodes[1].as_tag().unwrap();
    assert_eq!(tag.span.text(source), "{{table source=\"main\"}}");
}

#[test]
fn single_braces_stay_text() {
    let nodes = parse_template("json { \"a\": 1 } and a stray }}").unwrap();
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].as_tag().is_none());
}

// =============================================================================
// Escaped Attribute Values
// =============================================================================

#[test]
fn quoted_and_backslashed_values_unescape() {
    let nodes = parse_template(r#"{{value source="main" column="say \"hi\" \\ bye"}}"#).unwrap();
    let tag = nodes[0].as_tag().unwrap();
    assert_eq!(tag.attrs.get("column"), Some("say \"hi\" \\ bye"));
}

// =============================================================================
// Error Positions
// =============================================================================

#[test]
fn errors_carry_line_and_column() {
    let err = parse_template("line one\nline two {{value x}}").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("expected '='"));
    assert!(err.to_string().starts_with("parse error at 2:"));
}

#[test]
fn unterminated_tag_is_rejected() {
    let err = parse_template("before {{table source=\"main\"").unwrap_err();
    assert_eq!(err.message, "unterminated tag");
}

#[test]
fn duplicate_attributes_are_rejected() {
    let err = parse_template(r#"{{table source="a" source="b"}}"#).unwrap_err();
    assert_eq!(err.message, "duplicate attribute \"source\"");
}

#[test]
fn tags_must_stay_on_one_line() {
    let err = parse_template("{{table\n  source=\"main\"}}").unwrap_err();
    assert_eq!(err.message, "unexpected newline in tag");
}
