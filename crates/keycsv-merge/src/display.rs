// Rust guideline compliant 2026-02-06

//! Side-by-side rendering of a matched record pair.
//!
//! Rendering is pure: it takes the two records and a [`Palette`] and returns
//! a string, so the comparison pane is testable without a terminal. Colors
//! are applied through an in-memory ANSI writer.

use keycsv_core::Record;
use std::io::Write;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Fixed mask appended to the retained password prefix.
const PASSWORD_MASK: &str = "********";

/// Number of password characters retained in the clear.
const PASSWORD_PREFIX: usize = 2;

/// Color assignments for the comparison pane.
///
/// A palette is a value, not ambient state; [`Palette::mono`] renders
/// without any escape sequences.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Color for rows where the two records differ.
    pub diff: Option<Color>,
    /// Color for the `NEWER` annotation.
    pub newer: Option<Color>,
    /// Color for operator-facing notices ("Keeping left", ...).
    pub notice: Option<Color>,
}

impl Palette {
    /// The standard terminal palette.
    pub fn ansi() -> Self {
        Self {
            diff: Some(Color::Red),
            newer: Some(Color::Green),
            notice: Some(Color::Yellow),
        }
    }

    /// A palette that produces plain text.
    pub fn mono() -> Self {
        Self {
            diff: None,
            newer: None,
            notice: None,
        }
    }
}

/// Masks a password for display.
///
/// At most the first two characters are retained; the remainder is replaced
/// by a fixed eight-character mask, whatever the original length.
///
/// # Arguments
///
/// * `password` - The raw secret
///
/// # Returns
///
/// The masked display form.
pub fn mask_password(password: &str) -> String {
    let prefix: String = password.chars().take(PASSWORD_PREFIX).collect();
    format!("{prefix}{PASSWORD_MASK}")
}

/// Wraps text in the ANSI sequence for `color`, or returns it unchanged when
/// the palette slot is unset.
pub fn paint(text: &str, color: Option<Color>) -> String {
    let Some(color) = color else {
        return text.to_string();
    };
    let mut buf = Ansi::new(Vec::new());
    let _ = buf.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = buf.write_all(text.as_bytes());
    let _ = buf.reset();
    String::from_utf8(buf.into_inner()).unwrap_or_else(|_| text.to_string())
}

/// One labelled row of the comparison pane.
struct PaneRow<'a> {
    label: &'a str,
    left: String,
    right: String,
    differs: bool,
}

/// Renders the side-by-side comparison pane for a matched pair.
///
/// The pane shows label, account, location, created, modified, and the
/// masked password, with a separating rule sized to the longest displayed
/// value on each side. Rows where the records differ are colorized with the
/// palette's diff color, and a `NEWER`/`OLDER` line is appended when both
/// modification timestamps are present and unequal.
///
/// # Arguments
///
/// * `left` - Record from the first dataset
/// * `right` - Record from the second dataset
/// * `palette` - Color assignments
///
/// # Returns
///
/// The rendered pane, newline-terminated.
pub fn render_comparison(left: &Record, right: &Record, palette: &Palette) -> String {
    let rows = [
        PaneRow {
            label: "    Name",
            left: left.label.clone(),
            right: right.label.clone(),
            differs: left.label != right.label,
        },
        PaneRow {
            label: " Account",
            left: left.account.clone(),
            right: right.account.clone(),
            differs: left.account != right.account,
        },
        PaneRow {
            label: "   Where",
            left: left.location.clone(),
            right: right.location.clone(),
            differs: left.location != right.location,
        },
        PaneRow {
            label: " Created",
            left: left.created.clone(),
            right: right.created.clone(),
            differs: left.created != right.created,
        },
        PaneRow {
            label: "Modified",
            left: left.modified.clone(),
            right: right.modified.clone(),
            differs: left.modified != right.modified,
        },
        PaneRow {
            label: "Password",
            left: mask_password(&left.password),
            right: mask_password(&right.password),
            differs: left.password != right.password,
        },
    ];

    let left_width = column_width(rows.iter().map(|row| row.left.as_str()));
    let right_width = column_width(rows.iter().map(|row| row.right.as_str()));

    let rule = format!(
        "---------|-{}|{}",
        "-".repeat(left_width),
        "-".repeat(right_width)
    );

    let mut pane = String::new();
    pane.push_str(&rule);
    pane.push('\n');
    for row in &rows {
        let line = format!(
            "{} | {}{}| {}",
            row.label,
            row.left,
            pad_after(&row.left, left_width),
            row.right
        );
        let color = if row.differs { palette.diff } else { None };
        pane.push_str(&paint(&line, color));
        pane.push('\n');
    }
    pane.push_str(&rule);
    pane.push('\n');

    if let Some(line) = recency_line(left, right, left_width, palette) {
        pane.push_str(&line);
        pane.push('\n');
    }

    pane
}

/// Builds the `NEWER`/`OLDER` annotation line, if any.
///
/// No annotation is produced when either timestamp is missing or when the
/// two are equal.
fn recency_line(
    left: &Record,
    right: &Record,
    left_width: usize,
    palette: &Palette,
) -> Option<String> {
    if left.modified_missing() || right.modified_missing() || left.modified == right.modified {
        return None;
    }

    let gap = " ".repeat(left_width.saturating_sub("NEWER".len()));
    if left.modified > right.modified {
        Some(format!(
            "         | {}{gap}| OLDER",
            paint("NEWER", palette.newer)
        ))
    } else {
        Some(format!(
            "         | OLDER{gap}| {}",
            paint("NEWER", palette.newer)
        ))
    }
}

/// Width of a pane column: longest displayed value plus one space.
fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|value| value.chars().count()).max().unwrap_or(0) + 1
}

/// Spaces needed after `value` to reach `width`.
fn pad_after(value: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(value.chars().count()))
}
