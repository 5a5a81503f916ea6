//! Core components of the `fmp-rs` normalization layer.
//!
//! This module contains the foundational building blocks shared by every stage:
//! - The primary [`FmpError`] type.
//! - The payload model: [`Record`], [`Payload`], [`FieldList`], [`Precision`].
//! - The per-cell [`ValueKind`] classification.

/// The primary error type (`FmpError`) for the crate.
pub mod error;
/// Shared data models used by every pipeline stage.
pub mod models;

#[cfg(feature = "dataframe")]
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::Payload`
pub use error::FmpError;
pub use models::{FieldList, Payload, Precision, Record, ValueKind};
