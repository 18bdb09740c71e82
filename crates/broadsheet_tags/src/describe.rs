//! Self-describing metadata for the supported tags.
//!
//! Editors surface these descriptors as authoring hints, so the text is
//! written for template authors, not for this crate's callers.

use broadsheet_foundation::TagKind;
use serde::Serialize;

/// Describes one tag parameter for authoring tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ParamDescriptor {
    /// The attribute name as written in a tag.
    pub name: &'static str,
    /// The accepted value shape, in authoring-facing terms.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Whether the attribute must be present.
    pub required: bool,
    /// The value used when the attribute is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    /// One-line usage hint.
    pub description: &'static str,
}

/// Describes one tag for authoring tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TagDescriptor {
    /// The tag name as written in a template.
    pub name: &'static str,
    /// One-line summary of what the tag inserts.
    pub description: &'static str,
    /// The tag's parameters, in documentation order.
    pub parameters: &'static [ParamDescriptor],
}

const TABLE_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor {
        name: "source",
        kind: "string",
        required: false,
        default: Some("main"),
        description: "The source key of the data to display. Default is \"main\".",
    },
    ParamDescriptor {
        name: "limit",
        kind: "string | number",
        required: false,
        default: Some("10"),
        description: "Maximum rows to display. Default is 10, capped at 100.",
    },
    ParamDescriptor {
        name: "from",
        kind: "string",
        required: false,
        default: Some("start"),
        description: "Slice origin: \"start\" or \"end\". Default is \"start\".",
    },
    ParamDescriptor {
        name: "columns",
        kind: "string",
        required: false,
        default: None,
        description: "Comma-separated column names or aliases to include. Default is all columns.",
    },
];

const VALUE_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor {
        name: "source",
        kind: "string",
        required: true,
        default: None,
        description: "The source key of the data. Default is main",
    },
    ParamDescriptor {
        name: "path",
        kind: "string",
        required: false,
        default: None,
        description: "Path to value, e.g. .revenue[1]. Mutually exclusive with row/column.",
    },
    ParamDescriptor {
        name: "row",
        kind: "string | number",
        required: false,
        default: None,
        description: "Row index (1-based). Default is 1.",
    },
    ParamDescriptor {
        name: "column",
        kind: "string | number",
        required: false,
        default: None,
        description: "Column name or index (1-based). Default is 1.",
    },
];

/// Returns the descriptor for one tag kind.
#[must_use]
pub fn describe(kind: TagKind) -> TagDescriptor {
    match kind {
        TagKind::Table => TagDescriptor {
            name: "table",
            description: "Inserts a data table for the specified source.",
            parameters: TABLE_PARAMS,
        },
        TagKind::Value => TagDescriptor {
            name: "value",
            description: "Inserts a single metric value from the specified source. \
                          Usually used inline.",
            parameters: VALUE_PARAMS,
        },
    }
}

/// Returns the descriptors for every supported tag, in [`TagKind::ALL`]
/// order.
#[must_use]
pub fn descriptors() -> Vec<TagDescriptor> {
    TagKind::ALL.iter().map(|kind| describe(*kind)).collect()
}
