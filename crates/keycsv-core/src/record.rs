// Rust guideline compliant 2026-02-06

//! Credential record model for keychain CSV exports.

use crate::{Error, Result};
use csv::StringRecord;

/// Number of fixed columns in the export layout.
pub const FIELD_COUNT: usize = 13;

/// Class code identifying internet password items.
pub const CLASS_INET: &str = "inet";

/// A credential record is one data row of a keychain CSV export.
///
/// The thirteen named fields are positional and shared by every input and
/// output file. Any trailing columns beyond the fixed layout (for example a
/// `Category` column appended by the categorizer) are carried in `extra` and
/// written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Where the credential applies (URL or protocol endpoint).
    pub location: String,
    /// Account name.
    pub account: String,
    /// Stored secret. Never displayed unmasked.
    pub password: String,
    /// Display label.
    pub label: String,
    /// Free-form comment.
    pub comment: String,
    /// Creation timestamp, or empty when unknown.
    pub created: String,
    /// Last-modified timestamp, or empty when unknown.
    pub modified: String,
    /// Free-form classification hint.
    pub kind: String,
    /// Item type code (`note` for secure notes).
    pub type_code: String,
    /// Security domain.
    pub domain: String,
    /// Authentication type.
    pub auth_type: String,
    /// Item class (`inet`, `genp`, ...).
    pub class_code: String,
    /// Creator code.
    pub creator: String,
    /// Opaque trailing columns, passed through unexamined.
    pub extra: Vec<String>,
}

impl Record {
    /// Builds a Record from one CSV data row.
    ///
    /// # Arguments
    ///
    /// * `row` - The raw CSV row
    /// * `line` - 1-based line number, used in error reporting
    ///
    /// # Returns
    ///
    /// The parsed Record.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShortRow` if the row has fewer than the thirteen
    /// required columns.
    pub fn from_row(row: &StringRecord, line: usize) -> Result<Self> {
        if row.len() < FIELD_COUNT {
            return Err(Error::ShortRow {
                line,
                found: row.len(),
                expected: FIELD_COUNT,
            });
        }

        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();

        Ok(Self {
            location: field(0),
            account: field(1),
            password: field(2),
            label: field(3),
            comment: field(4),
            created: field(5),
            modified: field(6),
            kind: field(7),
            type_code: field(8),
            domain: field(9),
            auth_type: field(10),
            class_code: field(11),
            creator: field(12),
            extra: row.iter().skip(FIELD_COUNT).map(str::to_string).collect(),
        })
    }

    /// Returns the record's fields in output column order, trailing columns
    /// included.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.location.as_str(),
            self.account.as_str(),
            self.password.as_str(),
            self.label.as_str(),
            self.comment.as_str(),
            self.created.as_str(),
            self.modified.as_str(),
            self.kind.as_str(),
            self.type_code.as_str(),
            self.domain.as_str(),
            self.auth_type.as_str(),
            self.class_code.as_str(),
            self.creator.as_str(),
        ];
        fields.extend(self.extra.iter().map(String::as_str));
        fields
    }

    /// Returns true when the last-modified timestamp is unknown.
    pub fn modified_missing(&self) -> bool {
        self.modified.is_empty()
    }
}
