//! Canonical tag syntax for Broadsheet templates.
//!
//! A compiled template is plain text interleaved with single-line tags of
//! the form `{{name attr="value" ...}}`. This crate provides:
//! - [`parse_template`] - Parses template text into [`TemplateNode`]s
//! - [`escape_attribute`] - The attribute-value escaping rule
//! - [`Span`] - Source location tracking for nodes and errors
//!
//! The grammar is deliberately tiny and fully deterministic: double-quoted
//! attribute values, `\\` and `\"` as the only escapes, no tag spanning
//! multiple lines.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod escape;
pub mod node;
pub mod parser;
pub mod span;

pub use error::ParseError;
pub use escape::escape_attribute;
pub use node::{TagAttr, TagAttrs, TagNode, TemplateNode};
pub use parser::{Parser, parse_template};
pub use span::Span;
