//! Cross-layer integration tests for Broadsheet
//!
//! Tests that verify correct interaction between multiple crates.
