use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vitals — service health checks
///
/// Runs independent diagnostic probes against subsystems and folds the
/// results into a single scored health report.
#[derive(Parser, Debug)]
#[command(name = "vitals")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all configured probes once and print the report
    #[command(alias = "c")]
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the probes the current configuration would run
    #[command(alias = "p")]
    Probes,
}
