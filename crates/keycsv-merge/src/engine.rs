// Rust guideline compliant 2026-02-06

//! Sorted merge-join over two credential datasets.
//!
//! Both datasets are stable-sorted under the domain order, then walked in
//! lock-step: the lesser record is emitted and its cursor advances, and
//! records the order ranks equal form a matched pair handed to the active
//! conflict policy. When one side runs out, the other side's tail is
//! appended without further comparison.

use crate::policy::{self, Policy};
use crate::prompt::Prompter;
use keycsv_core::{order, Dataset, Record, Result};
use std::cmp::Ordering;
use std::io::Write;

/// One merge run over two datasets.
///
/// The engine owns both datasets for the duration of the run; rows are
/// selected, never edited, and written exactly once.
pub struct MergeEngine {
    left: Dataset,
    right: Dataset,
    policy: Policy,
}

impl MergeEngine {
    /// Creates an engine over two datasets, sorting both.
    ///
    /// # Arguments
    ///
    /// * `left` - The first dataset; its header is copied to the output
    /// * `right` - The second dataset
    /// * `policy` - Conflict policy for matched pairs
    pub fn new(mut left: Dataset, mut right: Dataset, policy: Policy) -> Self {
        left.sort();
        right.sort();
        Self {
            left,
            right,
            policy,
        }
    }

    /// Runs the merge, writing CSV to `out`.
    ///
    /// The first dataset's header row is written before any data row. Output
    /// is flushed after every resolved pair, so an operator cancel leaves a
    /// valid file containing exactly the rows emitted before the cancel
    /// point.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination stream
    /// * `prompter` - Decision source for the interactive policies
    ///
    /// # Returns
    ///
    /// The number of data rows written.
    ///
    /// # Errors
    ///
    /// Returns `Error::Cancelled` if the operator aborts, or any write
    /// error.
    pub fn merge<W: Write>(&self, out: W, prompter: &mut dyn Prompter) -> Result<usize> {
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);
        writer.write_record(self.left.header())?;

        let a = self.left.rows();
        let b = self.right.rows();
        let mut i = 0;
        let mut j = 0;
        let mut written = 0;

        while i < a.len() && j < b.len() {
            match order::compare(&a[i], &b[j]) {
                Ordering::Less => {
                    emit(&mut writer, &a[i])?;
                    written += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    emit(&mut writer, &b[j])?;
                    written += 1;
                    j += 1;
                }
                Ordering::Equal => {
                    let survivors =
                        match policy::resolve(&a[i], &b[j], self.policy, prompter) {
                            Ok(survivors) => survivors,
                            Err(err) => {
                                // Keep everything emitted so far on disk.
                                let _ = writer.flush();
                                return Err(err);
                            }
                        };
                    for record in &survivors {
                        emit(&mut writer, record)?;
                        written += 1;
                    }
                    writer.flush()?;
                    i += 1;
                    j += 1;
                }
            }
        }

        // Tails have no counterpart on the exhausted side; append as-is.
        for record in &a[i..] {
            emit(&mut writer, record)?;
            written += 1;
        }
        for record in &b[j..] {
            emit(&mut writer, record)?;
            written += 1;
        }

        writer.flush()?;
        Ok(written)
    }
}

/// Writes one record as a CSV row.
fn emit<W: Write>(writer: &mut csv::Writer<W>, record: &Record) -> Result<()> {
    writer.write_record(record.fields())?;
    Ok(())
}
