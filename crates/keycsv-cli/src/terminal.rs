// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the keycsv CLI.
//!
//! This module provides color support detection and colored status output.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    // Check NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    atty::is(atty::Stream::Stdout)
}

/// Prints a status message with a colored prefix.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a success message.
///
/// # Arguments
/// * `message` - The message to print
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}

/// Prints a warning message.
///
/// # Arguments
/// * `message` - The message to print
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}
