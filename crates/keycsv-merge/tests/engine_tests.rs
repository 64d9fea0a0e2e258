// Rust guideline compliant 2026-02-06

//! Tests for the merge engine.

use csv::StringRecord;
use keycsv_core::{Dataset, Error, Record, Result, FIELD_COUNT};
use keycsv_merge::{Choice, MergeEngine, NoPrompter, Policy, Prompter};
use std::collections::VecDeque;

/// Prompter replaying a fixed script of choices.
struct Scripted {
    script: VecDeque<Choice>,
}

impl Scripted {
    fn new(choices: &[Choice]) -> Self {
        Self {
            script: choices.iter().copied().collect(),
        }
    }
}

impl Prompter for Scripted {
    fn choose(&mut self, _left: &Record, _right: &Record) -> Result<Choice> {
        Ok(self.script.pop_front().expect("script exhausted"))
    }
}

fn header() -> StringRecord {
    StringRecord::from(vec![
        "Where", "Account", "Password", "Label", "Comment", "Created", "Modified", "Kind", "Type",
        "Domain", "AuthType", "Class", "Creator",
    ])
}

fn record(account: &str, location: &str, password: &str, modified: &str) -> Record {
    Record {
        account: account.to_string(),
        location: location.to_string(),
        password: password.to_string(),
        modified: modified.to_string(),
        class_code: "inet".to_string(),
        ..Record::default()
    }
}

fn dataset(rows: Vec<Record>) -> Dataset {
    Dataset::new(header(), rows)
}

/// Runs a merge into memory and returns the engine result plus the parsed
/// output rows (header included).
fn run(
    left: Vec<Record>,
    right: Vec<Record>,
    policy: Policy,
    prompter: &mut dyn Prompter,
) -> (Result<usize>, Vec<Vec<String>>) {
    let engine = MergeEngine::new(dataset(left), dataset(right), policy);
    let mut buf = Vec::new();
    let outcome = engine.merge(&mut buf, prompter);
    (outcome, parse(&buf))
}

fn parse(buf: &[u8]) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(buf)
        .records()
        .map(|row| {
            row.expect("output is valid CSV")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Password column of every data row, in output order.
fn passwords(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().skip(1).map(|row| row[2].as_str()).collect()
}

#[test]
fn test_disjoint_single_rows_yield_header_then_both() {
    let x = record("alice", "https://a.example", "x", "");
    let y = record("bob", "https://b.example", "y", "");
    let (outcome, rows) = run(vec![x], vec![y], Policy::Newest, &mut NoPrompter);

    assert_eq!(outcome.unwrap(), 2);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "Where");
    assert_eq!(passwords(&rows), vec!["x", "y"]);
}

#[test]
fn test_unsorted_inputs_are_sorted_and_interleaved() {
    let a1 = record("alice", "https://a.example", "a1", "");
    let a3 = record("carol", "https://c.example", "a3", "");
    let b2 = record("bob", "https://b.example", "b2", "");
    // Left arrives out of order; the engine sorts before walking.
    let (outcome, rows) = run(
        vec![a3.clone(), a1.clone()],
        vec![b2],
        Policy::Newest,
        &mut NoPrompter,
    );

    assert_eq!(outcome.unwrap(), 3);
    assert_eq!(passwords(&rows), vec!["a1", "b2", "a3"]);
}

#[test]
fn test_newest_policy_keeps_only_more_recent() {
    let left = record("alice", "https://a.example", "old", "2020-01-01");
    let right = record("alice", "https://a.example", "new", "2021-01-01");
    let (outcome, rows) = run(vec![left], vec![right], Policy::Newest, &mut NoPrompter);

    assert_eq!(outcome.unwrap(), 1);
    assert_eq!(passwords(&rows), vec!["new"]);
}

#[test]
fn test_newest_policy_keeps_both_on_missing_timestamp() {
    let left = record("alice", "https://a.example", "old", "");
    let right = record("alice", "https://a.example", "new", "2021-01-01");
    let (outcome, rows) = run(vec![left], vec![right], Policy::Newest, &mut NoPrompter);

    assert_eq!(outcome.unwrap(), 2);
    assert_eq!(passwords(&rows), vec!["old", "new"]);
}

#[test]
fn test_overwrite_policy_keeps_left_only() {
    let left = record("alice", "https://a.example", "old", "2020-01-01");
    let right = record("alice", "https://a.example", "new", "2021-01-01");
    let (outcome, rows) = run(vec![left], vec![right], Policy::Overwrite, &mut NoPrompter);

    assert_eq!(outcome.unwrap(), 1);
    assert_eq!(passwords(&rows), vec!["old"]);
}

#[test]
fn test_keep_all_policy_keeps_both() {
    let left = record("alice", "https://a.example", "old", "2020-01-01");
    let right = record("alice", "https://a.example", "new", "2021-01-01");
    let (outcome, rows) = run(vec![left], vec![right], Policy::KeepAll, &mut NoPrompter);

    assert_eq!(outcome.unwrap(), 2);
    assert_eq!(passwords(&rows), vec!["old", "new"]);
}

#[test]
fn test_interactive_choices_drive_survivors() {
    let left = record("alice", "https://a.example", "left", "");
    let right = record("alice", "https://a.example", "right", "");
    let cases = [
        (Choice::Left, vec!["left"]),
        (Choice::Right, vec!["right"]),
        (Choice::Both, vec!["left", "right"]),
        (Choice::Neither, Vec::new()),
    ];
    for (choice, expected) in cases {
        let (outcome, rows) = run(
            vec![left.clone()],
            vec![right.clone()],
            Policy::Interactive,
            &mut Scripted::new(&[choice]),
        );
        assert_eq!(outcome.unwrap(), expected.len());
        assert_eq!(passwords(&rows), expected);
    }
}

#[test]
fn test_cancel_keeps_rows_emitted_before_the_cancel_point() {
    let solo = record("aaa", "https://solo.example", "solo", "");
    let p_left = record("bob", "https://b.example", "p-left", "");
    let p_right = record("bob", "https://b.example", "p-right", "");
    let q_left = record("carol", "https://c.example", "q-left", "");
    let q_right = record("carol", "https://c.example", "q-right", "");

    let (outcome, rows) = run(
        vec![solo, p_left, q_left],
        vec![p_right, q_right],
        Policy::Interactive,
        &mut Scripted::new(&[Choice::Both, Choice::Cancel]),
    );

    assert!(matches!(outcome.unwrap_err(), Error::Cancelled));
    // Everything before the canceled pair survived; nothing after it.
    assert_eq!(passwords(&rows), vec!["solo", "p-left", "p-right"]);
}

#[test]
fn test_duplicate_within_one_dataset_matches_once_then_tails() {
    let first = record("alice", "https://a.example", "first", "");
    let second = record("alice", "https://a.example", "second", "");
    let other = record("alice", "https://a.example", "other", "");

    let (outcome, rows) = run(
        vec![first, second],
        vec![other],
        Policy::KeepAll,
        &mut NoPrompter,
    );

    // The stable sort keeps `first` ahead of `second`; only `first` pairs
    // with the right-hand row, `second` flushes as tail.
    assert_eq!(outcome.unwrap(), 3);
    assert_eq!(passwords(&rows), vec!["first", "other", "second"]);
}

#[test]
fn test_header_is_copied_verbatim_from_left_dataset() {
    let mut left_header = header();
    left_header.push_field("Category");
    let left = Dataset::new(left_header, vec![]);
    let right = dataset(vec![record("alice", "https://a.example", "x", "")]);

    let engine = MergeEngine::new(left, right, Policy::Newest);
    let mut buf = Vec::new();
    engine.merge(&mut buf, &mut NoPrompter).unwrap();

    let rows = parse(&buf);
    assert_eq!(rows[0].len(), FIELD_COUNT + 1);
    assert_eq!(rows[0][FIELD_COUNT], "Category");
}

#[test]
fn test_trailing_columns_pass_through_the_merge() {
    let mut left_row = record("alice", "https://a.example", "x", "");
    left_row.extra = vec!["Internet".to_string()];
    let (outcome, rows) = run(vec![left_row], vec![], Policy::Newest, &mut NoPrompter);

    assert_eq!(outcome.unwrap(), 1);
    assert_eq!(rows[1].len(), FIELD_COUNT + 1);
    assert_eq!(rows[1][FIELD_COUNT], "Internet");
}
