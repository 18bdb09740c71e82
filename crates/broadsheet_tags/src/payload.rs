//! Dispatch between the supported tag handlers.

use broadsheet_foundation::TagKind;
use broadsheet_grammar::TagAttrs;
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::error::TagError;
use crate::table::{TablePayload, build_table_payload, render_table};
use crate::value::{ValuePayload, build_value_payload, render_value};

/// A prepared tag call: everything rendering needs, detached from the
/// context it was built from.
///
/// Serializes untagged so payload JSON mirrors the handler's own shape.
/// The value shape always carries `source`, so it must be tried before
/// the table shape silently swallows it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagPayload {
    /// A `value` tag call.
    Value(ValuePayload),
    /// A `table` tag call.
    Table(TablePayload),
}

impl TagPayload {
    /// The kind of tag this payload belongs to.
    #[must_use]
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Table(_) => TagKind::Table,
            Self::Value(_) => TagKind::Value,
        }
    }

    /// Renders the payload to its markdown text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Table(payload) => render_table(payload),
            Self::Value(payload) => render_value(payload),
        }
    }
}

/// Builds the payload for one tag call.
///
/// # Errors
///
/// Returns a [`TagError`] when the tag's attributes cannot be resolved
/// against the context. Value tags record problems in their payload
/// instead, so only table tags fail here.
pub fn build_payload(
    kind: TagKind,
    attrs: &TagAttrs,
    ctx: &RenderContext,
) -> Result<TagPayload, TagError> {
    match kind {
        TagKind::Table => Ok(TagPayload::Table(build_table_payload(attrs, ctx)?)),
        TagKind::Value => Ok(TagPayload::Value(build_value_payload(attrs, ctx))),
    }
}
