//! Integration tests for Layer 2: Tag Handlers
//!
//! Tests table and value rendering plus handler introspection.

mod introspection;
mod table_rendering;
