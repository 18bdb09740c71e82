//! Tag handlers for Broadsheet templates.
//!
//! Each supported tag kind has two halves:
//! - a payload builder, run during template expansion, that resolves
//!   attributes against the [`RenderContext`] into a self-contained payload
//! - a renderer, run later under the engine's concurrency cap, that turns
//!   the payload into Markdown text
//!
//! The `table` kind fails hard on structural mistakes ([`TagError`]); the
//! `value` kind never fails and renders its problems as caution blocks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod describe;
pub mod error;
pub mod markdown;
pub mod payload;
pub mod table;
pub mod value;

pub use context::{DataTableHeader, RenderContext, TableSource};
pub use describe::{ParamDescriptor, TagDescriptor, describe, descriptors};
pub use error::TagError;
pub use markdown::caution_block;
pub use payload::{TagPayload, build_payload};
pub use table::{TablePayload, build_table_payload, render_table};
pub use value::{ValuePayload, build_value_payload, render_value};
