//! The read-only data context tags render against.

use std::collections::BTreeMap;

use broadsheet_foundation::Scalar;
use serde::{Deserialize, Serialize};

/// Describes one column of a table source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableHeader {
    /// Column name as it appears in the underlying data.
    pub name: String,
    /// Display name shown instead of `name` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Free-form column description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DataTableHeader {
    /// Creates a header with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            description: None,
        }
    }

    /// Builder method setting the display alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Builder method setting the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the display label: alias when present, name otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// One named table of data: column headers plus rows of scalars.
///
/// Rows may be ragged; handlers treat missing cells as null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSource {
    /// Column descriptions, in column order.
    pub headers: Vec<DataTableHeader>,
    /// Row data; each inner vector is one row, in column order.
    pub rows: Vec<Vec<Scalar>>,
}

impl TableSource {
    /// Creates a table source from headers and rows.
    #[must_use]
    pub fn new(headers: Vec<DataTableHeader>, rows: Vec<Vec<Scalar>>) -> Self {
        Self { headers, rows }
    }
}

/// Caller-owned data a render call reads from.
///
/// Tags address tables by source key; the engine and handlers only ever
/// read this.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Table sources by source key.
    #[serde(default)]
    pub table_sources: BTreeMap<String, TableSource>,
}

impl RenderContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method adding one table source.
    #[must_use]
    pub fn with_source(mut self, key: impl Into<String>, source: TableSource) -> Self {
        self.table_sources.insert(key.into(), source);
        self
    }

    /// Looks up a table source by key.
    #[must_use]
    pub fn source(&self, key: &str) -> Option<&TableSource> {
        self.table_sources.get(key)
    }
}
