//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Resolve commands to the executables clivm would run.
#[derive(Parser)]
#[command(name = "clivm")]
#[command(about = "Find the executable a command name resolves to")]
#[command(version)]
pub struct Cli {
    /// Use this manifest instead of discovering clivm.toml files
    #[arg(short = 'c', long = "config", env = "CLIVM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
