//! Command-line definition for `mjc`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level command line.
#[derive(Parser)]
#[command(name = "mjc")]
#[command(about = "MJ - judge mask-simulation submissions against the test-case battery")]
pub struct Cli {
    /// Increase verbosity (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Judge subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Judge a single submission
    JudgeOne {
        /// Path to the submission source file
        submission: PathBuf,
    },

    /// Judge every user under the submission root
    JudgeAll,
}
