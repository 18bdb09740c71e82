//! Broadsheet - Report template compiler and render engine
//!
//! This crate re-exports all layers of the Broadsheet system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: broadsheet_engine     — Two-phase render engine, bounded concurrency
//! Layer 2: broadsheet_compose    — Edit-time pipeline: validate, render, assemble
//!          broadsheet_tags       — Table and value tag handlers, introspection
//! Layer 1: broadsheet_grammar    — Template parser, spans, attribute escaping
//! Layer 0: broadsheet_foundation — Core types (Scalar, TagKind, ValidationError)
//! ```

pub use broadsheet_compose as compose;
pub use broadsheet_engine as engine;
pub use broadsheet_foundation as foundation;
pub use broadsheet_grammar as grammar;
pub use broadsheet_tags as tags;
