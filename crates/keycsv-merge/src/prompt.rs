// Rust guideline compliant 2026-02-06

//! Interactive resolution prompt.
//!
//! The prompt sits behind the [`Prompter`] trait so merge logic and tests
//! never depend on a real terminal. The console implementation renders the
//! comparison pane, then loops until the operator types a recognized choice.

use crate::display::{paint, render_comparison, Palette};
use keycsv_core::{Error, Record, Result};
use std::io::{BufRead, Write};

/// Operator decision for one matched pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Keep the record from the first dataset.
    Left,
    /// Keep the record from the second dataset.
    Right,
    /// Keep both records.
    Both,
    /// Keep neither record.
    Neither,
    /// Abort the entire merge run.
    Cancel,
}

impl Choice {
    /// Parses an input line into a choice.
    ///
    /// The first non-space character decides; anything unrecognized yields
    /// `None`, which callers answer by re-prompting.
    ///
    /// # Arguments
    ///
    /// * `input` - One line of operator input
    ///
    /// # Returns
    ///
    /// The selected choice, or `None` for unrecognized input.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim_start().chars().next()? {
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            'b' => Some(Self::Both),
            'n' => Some(Self::Neither),
            'c' => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Source of operator decisions for matched pairs.
pub trait Prompter {
    /// Asks for a decision on one matched pair.
    ///
    /// # Arguments
    ///
    /// * `left` - Record from the first dataset
    /// * `right` - Record from the second dataset
    ///
    /// # Returns
    ///
    /// The operator's choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the input or output channel fails.
    fn choose(&mut self, left: &Record, right: &Record) -> Result<Choice>;
}

/// Blocking console prompter reading from stdin.
pub struct ConsolePrompter {
    palette: Palette,
}

impl ConsolePrompter {
    /// Creates a console prompter.
    ///
    /// # Arguments
    ///
    /// * `palette` - Color assignments for the pane and notices
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Runs the prompt loop against explicit channels.
    ///
    /// Kept separate from [`Prompter::choose`] so tests can drive the loop
    /// with in-memory readers and writers.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    fn choose_from<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        left: &Record,
        right: &Record,
    ) -> Result<Choice> {
        output.write_all(render_comparison(left, right, &self.palette).as_bytes())?;

        loop {
            write!(output, "Choose ([l]eft/[r]ight/[b]oth/[n]one/[c]ancel): ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // Stdin closed under the prompt: treat as an operator abort.
                writeln!(output, "Canceled.")?;
                return Ok(Choice::Cancel);
            }

            if let Some(choice) = Choice::parse(&line) {
                self.announce(output, choice)?;
                return Ok(choice);
            }
        }
    }

    /// Echoes the accepted choice back to the operator.
    fn announce<W: Write>(&self, output: &mut W, choice: Choice) -> Result<()> {
        let notice = match choice {
            Choice::Left => "Keeping left",
            Choice::Right => "Keeping right",
            Choice::Both => "Keeping both",
            Choice::Neither => "Skipping both",
            Choice::Cancel => {
                writeln!(output, "Canceled.")?;
                return Ok(());
            }
        };
        writeln!(output, "{}", paint(notice, self.palette.notice))?;
        Ok(())
    }
}

impl Prompter for ConsolePrompter {
    fn choose(&mut self, left: &Record, right: &Record) -> Result<Choice> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut input = stdin.lock();
        let mut output = stdout.lock();
        self.choose_from(&mut input, &mut output, left, right)
    }
}

/// Prompter that always cancels.
///
/// Used when a non-interactive policy is active: the engine never consults
/// it, and if a defect ever routed a prompt here the run would abort instead
/// of hanging on stdin.
pub struct NoPrompter;

impl Prompter for NoPrompter {
    fn choose(&mut self, _left: &Record, _right: &Record) -> Result<Choice> {
        Err(Error::Cancelled)
    }
}
