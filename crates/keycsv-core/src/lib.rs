// Rust guideline compliant 2026-02-06

//! keycsv Core Library
//!
//! This crate provides the foundational components for the keycsv tool suite:
//! - The credential record model (13 fixed fields + opaque trailing columns)
//! - The domain total order used for sorting and merge alignment
//! - Dataset loading, validation, and stable sorting
//! - Topical categorization of records
//! - Error types and result handling

pub mod category;
pub mod dataset;
pub mod error;
pub mod order;
pub mod record;

pub use category::{Category, Classifier, CATEGORIZED_HEADER};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use record::{Record, CLASS_INET, FIELD_COUNT};
