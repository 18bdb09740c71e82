//! Core types and the validation error taxonomy for Broadsheet.
//!
//! This crate provides:
//! - [`Scalar`] - The cell value type carried by table sources and tag params
//! - [`TagKind`] - The closed set of supported template tags
//! - [`ValidationError`] / [`ErrorCode`] - The edit-time error taxonomy
//! - [`ValidationResult`] - The uniform result type of every pipeline stage

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod scalar;
pub mod tag;

pub use error::{ErrorCode, PathSegment, ValidationError, ValidationResult};
pub use scalar::Scalar;
pub use tag::{MAIN_SOURCE_KEY, TagKind, is_valid_source_key};
