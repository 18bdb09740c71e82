//! Integration tests for tag introspection
//!
//! External tooling lists descriptors as JSON; the shape is a contract.

use broadsheet_foundation::TagKind;
use broadsheet_tags::{describe, descriptors};

#[test]
fn every_kind_has_a_descriptor() {
    let all = descriptors();
    assert_eq!(all.len(), 2);
    for descriptor in &all {
        assert!(TagKind::from_name(descriptor.name).is_some());
        assert!(!descriptor.description.is_empty());
        assert!(!descriptor.parameters.is_empty());
    }
}

#[test]
fn descriptor_json_uses_the_wire_shape() {
    let json = serde_json::to_value(descriptors()).unwrap();

    let table = &json[0];
    assert_eq!(table["name"], "table");
    let limit = table["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "limit")
        .unwrap();
    assert_eq!(limit["type"], "string | number");
    assert_eq!(limit["required"], false);
    assert_eq!(limit["default"], "10");

    let value = &json[1];
    let path = value["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "path")
        .unwrap();
    // Optional parameters without defaults omit the key entirely.
    assert!(path.get("default").is_none());
}

#[test]
fn descriptor_parameters_match_handler_attribute_names() {
    let table = describe(TagKind::Table);
    let names: Vec<_> = table.parameters.iter().map(|p| p.name).collect();
    assert_eq!(names, ["source", "limit", "from", "columns"]);

    let value = describe(TagKind::Value);
    let names: Vec<_> = value.parameters.iter().map(|p| p.name).collect();
    assert_eq!(names, ["source", "path", "row", "column"]);
}
