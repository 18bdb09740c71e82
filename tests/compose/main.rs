//! Integration tests for Layer 2: Compose
//!
//! Tests the edit-time pipeline: placeholder scanning, parameter
//! contracts, canonical rendering, and full compilation.

mod pipeline;
