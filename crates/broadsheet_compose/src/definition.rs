//! Author-supplied tag definitions.

use std::collections::BTreeMap;

use broadsheet_foundation::{Scalar, TagKind};
use serde::{Deserialize, Serialize};

/// One data tag as authored: a document-unique id, a tag name, and the
/// tag's parameters.
///
/// The name is kept exactly as written; validation resolves it against
/// [`TagKind`] and rejects anything unsupported. Parameters are scalar
/// valued and schema-checked per kind by the contract validator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagDefinition {
    /// Id referenced by `[[TAG:<id>]]` placeholders in the document text.
    pub id: String,
    /// Tag name as written, e.g. `"table"`.
    pub name: String,
    /// Tag parameters, keyed by attribute name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Scalar>,
}

impl TagDefinition {
    /// Creates a definition with no parameters.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    /// Adds one parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Resolves the written name to a supported tag kind, if any.
    #[must_use]
    pub fn kind(&self) -> Option<TagKind> {
        TagKind::from_name(&self.name)
    }

    /// Looks up one parameter.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&Scalar> {
        self.params.get(key)
    }
}
