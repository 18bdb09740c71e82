//! Integration tests for Layer 1: Grammar
//!
//! Tests template parsing and attribute escaping through the public API.

mod escaping;
mod parsing;
