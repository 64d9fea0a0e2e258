// Rust guideline compliant 2026-02-06

//! Conflict-resolution policies for matched record pairs.

use crate::prompt::{Choice, Prompter};
use keycsv_core::{Error, Record, Result};

/// How a matched pair is resolved.
///
/// Exactly one policy is active for a merge run; it is dispatched once per
/// matched pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Keep both records unconditionally.
    KeepAll,
    /// Keep the first dataset's record unconditionally.
    Overwrite,
    /// Keep the most recently modified record, or both when either
    /// timestamp is missing.
    #[default]
    Newest,
    /// Like `Newest`, but defer to the operator when a timestamp is
    /// missing instead of silently keeping both.
    AskIfMissing,
    /// Defer every matched pair to the operator.
    Interactive,
}

/// Resolves a matched pair under `policy`.
///
/// # Arguments
///
/// * `left` - Record from the first dataset
/// * `right` - Record from the second dataset
/// * `policy` - The active policy
/// * `prompter` - Decision source for the interactive policies
///
/// # Returns
///
/// The surviving records, in emit order (zero, one, or two).
///
/// # Errors
///
/// Returns `Error::Cancelled` when the operator aborts the run, or any
/// prompt channel error.
pub fn resolve(
    left: &Record,
    right: &Record,
    policy: Policy,
    prompter: &mut dyn Prompter,
) -> Result<Vec<Record>> {
    match policy {
        Policy::KeepAll => Ok(vec![left.clone(), right.clone()]),
        Policy::Overwrite => Ok(vec![left.clone()]),
        Policy::Interactive => choose(left, right, prompter),
        Policy::AskIfMissing if timestamp_missing(left, right) => choose(left, right, prompter),
        Policy::AskIfMissing | Policy::Newest => Ok(newest(left, right)),
    }
}

/// True when either record's modification timestamp is unknown.
fn timestamp_missing(left: &Record, right: &Record) -> bool {
    left.modified_missing() || right.modified_missing()
}

/// Keeps the more recently modified record, or both when recency is
/// unknown. A record of unknown recency is never discarded silently.
fn newest(left: &Record, right: &Record) -> Vec<Record> {
    if timestamp_missing(left, right) {
        return vec![left.clone(), right.clone()];
    }
    if left.modified > right.modified {
        vec![left.clone()]
    } else {
        vec![right.clone()]
    }
}

/// Maps an operator choice onto the surviving records.
fn choose(left: &Record, right: &Record, prompter: &mut dyn Prompter) -> Result<Vec<Record>> {
    match prompter.choose(left, right)? {
        Choice::Left => Ok(vec![left.clone()]),
        Choice::Right => Ok(vec![right.clone()]),
        Choice::Both => Ok(vec![left.clone(), right.clone()]),
        Choice::Neither => Ok(Vec::new()),
        Choice::Cancel => Err(Error::Cancelled),
    }
}
