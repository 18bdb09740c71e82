//! Edit-time compilation of Broadsheet documents.
//!
//! A document arrives as free text carrying `[[TAG:<id>]]` placeholders,
//! plus a list of tag definitions. Compilation turns the pair into one
//! restricted template string:
//!
//! ```text
//! placeholders -> contracts -> canonical tags -> assembly -> final check
//! ```
//!
//! Every stage is a pure function over its input and fails fast with a
//! [`broadsheet_foundation::ValidationError`]; [`compile`] chains them and
//! surfaces the first failure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assemble;
pub mod canonical;
pub mod contract;
pub mod definition;
pub mod pipeline;
pub mod placeholder;
pub mod validate;

pub use assemble::assemble;
pub use canonical::{render_definition, render_definitions};
pub use contract::{ValidationOptions, canonical_source, validate_all, validate_definition};
pub use definition::TagDefinition;
pub use pipeline::{CompiledTemplate, compile};
pub use placeholder::{PlaceholderScan, scan_text, validate_placeholders};
pub use validate::validate_template;
