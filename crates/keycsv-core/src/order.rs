// Rust guideline compliant 2026-02-06

//! Total ordering over credential records.
//!
//! The same order drives both the per-dataset sort and the merge-join
//! alignment. Equality means "same logical credential": identity is defined
//! by where the credential applies and who it belongs to, never by the
//! stored secret, label, or timestamps.

use crate::record::{Record, CLASS_INET};
use std::cmp::Ordering;

/// Compares two records under the domain order.
///
/// Records of different classes order lexicographically by class. Within the
/// `inet` class the key is `(account, location, auth_type)`; within any other
/// class it is `(account, location)`.
///
/// # Arguments
///
/// * `a` - Left record
/// * `b` - Right record
///
/// # Returns
///
/// The ordering of `a` relative to `b`.
pub fn compare(a: &Record, b: &Record) -> Ordering {
    if a.class_code != b.class_code {
        return a.class_code.cmp(&b.class_code);
    }

    if a.class_code == CLASS_INET {
        return a
            .account
            .cmp(&b.account)
            .then_with(|| a.location.cmp(&b.location))
            .then_with(|| a.auth_type.cmp(&b.auth_type));
    }

    a.account
        .cmp(&b.account)
        .then_with(|| a.location.cmp(&b.location))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class_code: &str, account: &str, location: &str, auth_type: &str) -> Record {
        Record {
            class_code: class_code.to_string(),
            account: account.to_string(),
            location: location.to_string(),
            auth_type: auth_type.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_class_decides_first() {
        let a = record("genp", "zz", "zz", "");
        let b = record("inet", "aa", "aa", "");
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_inet_orders_by_account_location_auth_type() {
        let a = record("inet", "alice", "https://a.example", "form");
        let b = record("inet", "alice", "https://a.example", "http");
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_genp_ignores_auth_type() {
        let a = record("genp", "alice", "Wi-Fi", "form");
        let b = record("genp", "alice", "Wi-Fi", "http");
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_equality_ignores_secret_and_timestamps() {
        let mut a = record("inet", "alice", "https://a.example", "form");
        let mut b = a.clone();
        a.password = "old".to_string();
        b.password = "new".to_string();
        a.modified = "2020-01-01".to_string();
        b.modified = "2024-01-01".to_string();
        b.label = "Renamed".to_string();
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }
}
