// Rust guideline compliant 2026-02-06

//! Implementation of the `keycsv categorize` command.
//!
//! Reads one credential export and writes it back with a trailing
//! `Category` column assigned per row.

use crate::terminal;
use anyhow::Result;
use keycsv_core::{Classifier, Dataset, CATEGORIZED_HEADER};
use std::path::{Path, PathBuf};

/// Appends a category column to a credential CSV export.
///
/// The output always carries the canonical 14-column header, whatever the
/// input header looked like.
///
/// # Arguments
///
/// * `input` - Path to the export file
/// * `output` - Optional output path (defaults to a sibling `<stem>-out.csv`)
///
/// # Returns
///
/// Ok if the categorized file was written.
///
/// # Errors
///
/// Returns an error if:
/// - The input file is missing or unreadable
/// - An input row is malformed
/// - The output file cannot be written
pub fn execute(input: String, output: Option<String>) -> Result<()> {
    let input_path = PathBuf::from(input);
    if !input_path.exists() {
        anyhow::bail!("Input file not found: {}", input_path.display());
    }
    let out_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(&input_path));

    let dataset = Dataset::read(&input_path)?;
    let classifier = Classifier::new();

    let mut writer = csv::Writer::from_path(&out_path)?;
    writer.write_record(CATEGORIZED_HEADER)?;
    for record in dataset.rows() {
        let category = classifier.classify(record);
        let mut fields = record.fields();
        fields.push(category.as_str());
        writer.write_record(&fields)?;
    }
    writer.flush()?;

    terminal::print_success(&format!(
        "Categorized {} rows into {}",
        dataset.len(),
        out_path.display()
    ));
    Ok(())
}

/// Default output path: `<stem>-out.csv` next to the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("categorized");
    input.with_file_name(format!("{stem}-out.csv"))
}
