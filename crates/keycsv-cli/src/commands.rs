// Rust guideline compliant 2026-02-06

//! Command implementations for the keycsv CLI.

pub mod categorize;
pub mod merge;
