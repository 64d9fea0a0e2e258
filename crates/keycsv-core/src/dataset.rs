// Rust guideline compliant 2026-02-06

//! Dataset loading and sorting for credential CSV exports.
//!
//! A dataset is one export file: a header row (held separately, never
//! compared or merged) followed by data rows parsed into [`Record`]s.

use crate::{order, Error, Record, Result};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

/// An in-memory credential dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Header row, copied verbatim to the output.
    header: StringRecord,
    /// Data rows in file order until [`Dataset::sort`] is called.
    rows: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from pre-built parts.
    ///
    /// # Arguments
    ///
    /// * `header` - The header row
    /// * `rows` - The data rows
    pub fn new(header: StringRecord, rows: Vec<Record>) -> Self {
        Self { header, rows }
    }

    /// Reads a dataset from a CSV file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the export file
    ///
    /// # Returns
    ///
    /// The parsed dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - The file has no header row
    /// - A data row has fewer than the required columns
    pub fn read(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
            .map_err(|err| match err {
                Error::EmptyFile(_) => Error::EmptyFile(path.display().to_string()),
                other => other,
            })
    }

    /// Reads a dataset from any CSV source.
    ///
    /// The reader is configured without header handling and with flexible
    /// row widths; the first row becomes the dataset header and every later
    /// row must carry at least the thirteen fixed columns. Extra trailing
    /// columns are preserved opaquely.
    ///
    /// # Arguments
    ///
    /// * `reader` - The CSV source
    ///
    /// # Returns
    ///
    /// The parsed dataset.
    ///
    /// # Errors
    ///
    /// Returns an error on IO failures, CSV syntax errors, a missing header
    /// row, or short data rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut header = None;
        let mut rows = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let raw = result?;
            if header.is_none() {
                header = Some(raw);
                continue;
            }
            rows.push(Record::from_row(&raw, idx + 1)?);
        }

        match header {
            Some(header) => Ok(Self { header, rows }),
            None => Err(Error::EmptyFile("<input>".to_string())),
        }
    }

    /// Sorts the data rows in place under the domain order.
    ///
    /// The sort is stable, so rows the order ranks equal keep their input
    /// order.
    pub fn sort(&mut self) {
        self.rows.sort_by(order::compare);
    }

    /// Returns the header row.
    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
