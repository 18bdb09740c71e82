//! Integration tests for attribute escaping
//!
//! Escaped values must survive a full emit-then-parse round trip.

use broadsheet_grammar::{escape_attribute, parse_template};

#[test]
fn escaping_matches_the_canonical_rules() {
    assert_eq!(escape_attribute(r#"a "b" c"#), r#"a \"b\" c"#);
    assert_eq!(escape_attribute(r"back\slash"), r"back\\slash");
    assert_eq!(escape_attribute(r#"\""#), r#"\\\""#);
}

#[test]
fn escaped_values_round_trip_through_the_parser() {
    for value in [
        "plain",
        "with \"quotes\"",
        r"with \ backslash",
        r#"both \" mixed \\ up"#,
        "",
    ] {
        let template = format!("{{{{value source=\"{}\"}}}}", escape_attribute(value));
        let nodes = parse_template(&template).unwrap();
        assert_eq!(
            nodes[0].as_tag().unwrap().attrs.get("source"),
            Some(value),
            "value {value:?} should round-trip"
        );
    }
}
