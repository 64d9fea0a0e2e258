// Rust guideline compliant 2026-02-06

//! keycsv CLI Application
//!
//! Command-line interface for merging and categorizing keychain CSV exports.

use clap::Parser;
use keycsv_cli::{commands, should_use_color};
use keycsv_merge::Policy;

#[derive(Parser, Debug)]
#[command(
    name = "keycsv",
    version,
    about = "Merge and categorize keychain CSV exports",
    long_about = "keycsv reconciles two keychain CSV exports into one de-duplicated export, with selectable conflict handling for records that exist in both, and can assign a topical category to every record of an export.",
    after_help = "Examples:\n  keycsv merge old-export.csv new-export.csv\n  keycsv merge old-export.csv new-export.csv --interactive -o merged.csv\n  keycsv merge old-export.csv new-export.csv --keep\n  keycsv categorize merged.csv\n"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Merge two credential CSV exports into one de-duplicated export
    Merge {
        /// Path to the first CSV export
        left: String,

        /// Path to the second CSV export
        right: String,

        /// Keep all duplicates
        #[arg(short = 'k', long, group = "policy")]
        keep: bool,

        /// Overwrite: matched pairs keep the first export's record
        #[arg(short = 'O', long, group = "policy")]
        overwrite: bool,

        /// Ask what to do with each duplicate
        #[arg(short = 'i', long, group = "policy")]
        interactive: bool,

        /// Ask only when timestamps are missing
        #[arg(short = 'a', long, group = "policy")]
        ask: bool,

        /// Output file (default: merged.csv beside the first export)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Append a Category column to a credential CSV export
    Categorize {
        /// Path to the CSV export
        input: String,

        /// Output file (default: a sibling <stem>-out.csv)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

/// Maps the mutually exclusive policy flags onto a policy.
///
/// The default is keeping the most recent record of a matched pair, or both
/// when a timestamp is missing.
fn select_policy(keep: bool, overwrite: bool, interactive: bool, ask: bool) -> Policy {
    if keep {
        Policy::KeepAll
    } else if overwrite {
        Policy::Overwrite
    } else if interactive {
        Policy::Interactive
    } else if ask {
        Policy::AskIfMissing
    } else {
        Policy::Newest
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    match cli.command {
        Commands::Merge {
            left,
            right,
            keep,
            overwrite,
            interactive,
            ask,
            output,
        } => {
            let policy = select_policy(keep, overwrite, interactive, ask);
            commands::merge::execute(left, right, policy, output, use_color)?;
        }
        Commands::Categorize { input, output } => {
            commands::categorize::execute(input, output)?;
        }
    }

    Ok(())
}
