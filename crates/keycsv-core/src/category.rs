// Rust guideline compliant 2026-02-06

//! Topical categorization of credential records.
//!
//! Assigns each record to one of a small set of groups by inspecting its
//! kind, type, class, and location. Detection runs in priority order:
//! secure notes, then network credentials, then mail accounts, then anything
//! with a URL scheme, then the general fallback.

use crate::record::{Record, CLASS_INET};
use regex::Regex;

/// Canonical header row for categorized output, `Category` column included.
pub const CATEGORIZED_HEADER: [&str; 14] = [
    "Where", "Account", "Password", "Label", "Comment", "Created", "Modified", "Kind", "Type",
    "Domain", "AuthType", "Class", "Creator", "Category",
];

/// Topical group of a credential record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Secure notes.
    Notes,
    /// Network and transport credentials (Wi-Fi, file sharing, shells).
    Network,
    /// Mail accounts.
    Email,
    /// Anything else with a URL scheme.
    Internet,
    /// Fallback group.
    General,
}

impl Category {
    /// Returns the column value written for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Notes => "Notes",
            Category::Network => "Network",
            Category::Email => "EMail",
            Category::Internet => "Internet",
            Category::General => "General",
        }
    }
}

/// Regex-based record classifier.
///
/// The location patterns allow one leading character before the scheme so
/// exports that quote the field are still matched.
pub struct Classifier {
    secure_note_kind: Regex,
    network_kind: Regex,
    network_scheme: Regex,
    mail_scheme: Regex,
}

impl Classifier {
    /// Creates a classifier with the built-in detection patterns.
    pub fn new() -> Self {
        Self {
            secure_note_kind: Regex::new(r"(?i)secure\s+note").unwrap(),
            network_kind: Regex::new(r"(?i)network|802\.1|airport|handoff|sharing").unwrap(),
            network_scheme: Regex::new(r"(?i)^.?(afp|ftp|smb|ssh|teln|vnc)").unwrap(),
            mail_scheme: Regex::new(r"(?i)^.?(pop|smtp|imap|mail)").unwrap(),
        }
    }

    /// Classifies one record.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to classify
    ///
    /// # Returns
    ///
    /// The first matching category in priority order.
    pub fn classify(&self, record: &Record) -> Category {
        if self.secure_note_kind.is_match(&record.kind) || record.type_code == "note" {
            return Category::Notes;
        }
        if self.network_kind.is_match(&record.kind) || self.network_scheme.is_match(&record.location)
        {
            return Category::Network;
        }
        if record.class_code == CLASS_INET && self.mail_scheme.is_match(&record.location) {
            return Category::Email;
        }
        if record.location.contains("://") {
            return Category::Internet;
        }
        Category::General
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
