// Rust guideline compliant 2026-02-06

//! Implementation of the `keycsv merge` command.
//!
//! Reads two credential exports, merge-joins them under the selected
//! conflict policy, and writes the merged export.

use crate::terminal;
use anyhow::Result;
use keycsv_core::{Dataset, Error};
use keycsv_merge::{ConsolePrompter, MergeEngine, NoPrompter, Palette, Policy, Prompter};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Merges two credential CSV exports.
///
/// # Arguments
///
/// * `left` - Path to the first export; its header seeds the output
/// * `right` - Path to the second export
/// * `policy` - Conflict policy for matched pairs
/// * `output` - Optional output path (defaults to `merged.csv` beside the
///   first export)
/// * `use_color` - Whether prompts and notices are colorized
///
/// # Returns
///
/// Ok on a completed merge, and also on an operator cancel (an abort, not a
/// failure).
///
/// # Errors
///
/// Returns an error if:
/// - An input file is missing or unreadable
/// - An input row is malformed
/// - The output file cannot be written
pub fn execute(
    left: String,
    right: String,
    policy: Policy,
    output: Option<String>,
    use_color: bool,
) -> Result<()> {
    let left_path = PathBuf::from(left);
    let right_path = PathBuf::from(right);
    if !left_path.exists() {
        anyhow::bail!("Input file not found: {}", left_path.display());
    }
    if !right_path.exists() {
        anyhow::bail!("Input file not found: {}", right_path.display());
    }
    let out_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(&left_path));

    let left = Dataset::read(&left_path)?;
    let right = Dataset::read(&right_path)?;
    for (path, dataset) in [(&left_path, &left), (&right_path, &right)] {
        if dataset.is_empty() {
            terminal::print_warning(&format!("{} has no data rows", path.display()));
        }
    }

    let palette = if use_color {
        Palette::ansi()
    } else {
        Palette::mono()
    };
    let mut prompter: Box<dyn Prompter> = match policy {
        Policy::Interactive | Policy::AskIfMissing => Box::new(ConsolePrompter::new(palette)),
        _ => Box::new(NoPrompter),
    };

    let engine = MergeEngine::new(left, right, policy);
    let out = File::create(&out_path)?;

    match engine.merge(out, prompter.as_mut()) {
        Ok(written) => {
            terminal::print_success(&format!(
                "Merged {} rows into {}",
                written,
                out_path.display()
            ));
            Ok(())
        }
        // The prompter already acknowledged the cancel; rows written before
        // it remain in the output file.
        Err(Error::Cancelled) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Default output path: `merged.csv` next to the first export.
fn default_output(left: &Path) -> PathBuf {
    left.with_file_name("merged.csv")
}
