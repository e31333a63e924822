//! `mjc` - the MJ judge command line.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_judge_all, handle_judge_one};
use error::Result;
use mj_config::{MjConfig, MjUserConfig};
use mj_judge::Engine;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let config = match &cli.config {
        Some(path) => MjConfig::from_user_config(MjUserConfig::from_file(path)?),
        None => MjConfig::default(),
    };
    let engine = Engine::new(config);

    let result = match cli.command {
        Commands::JudgeOne { submission } => {
            handle_judge_one(&engine, &submission, cli.verbose > 0)
        }
        Commands::JudgeAll => handle_judge_all(&engine),
    };

    if let Err(ref e) = result {
        tracing::error!("Error: {}", e);
    }
    result
}
