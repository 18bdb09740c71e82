//! Render engine for Broadsheet.
//!
//! Executes a compiled template against runtime data in two phases. The
//! first phase parses the template and builds every tag payload
//! synchronously, registering each call in a [`Collector`] and leaving a
//! typed token in its place. The second phase resolves the collected
//! calls on a bounded thread pool and splices results back by token
//! index, so out-of-order completion cannot reorder the document.
//!
//! # Architecture
//!
//! ```text
//! "Intro {{table source="main"}} outro"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXPANSION       │  → [Text("Intro "), Tag(#0), Text(" outro")]
//! │ (single pass)   │    collector: [table payload]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESOLUTION      │  → results[0] = "| region | ... |"
//! │ (bounded pool)  │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SUBSTITUTION    │  → rendered text + tag metadata, document order
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`collector`] - Indexed registry of tag calls and the segment model
//! - [`render`] - The [`Engine`], its options, and its output types
//! - [`error`] - Runtime error type, distinct from edit-time validation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collector;
pub mod error;
pub mod render;
mod resolve;

pub use collector::{CollectedTag, Collector, Segment, TagToken};
pub use error::{RenderError, RenderResult};
pub use render::{DEFAULT_CONCURRENCY, Engine, RenderOptions, RenderOutput, RenderedTagMeta};
