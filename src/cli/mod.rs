//! Command-line interface for ShepScan
//!
//! Argument parsing with clap; one subcommand per operation. User-facing
//! text goes through [`Output`], diagnostics through `tracing` on stderr.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod commands;
mod output;

pub use output::Output;

/// ShepScan - scan cloned repositories for committed credentials
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "SHEPSCAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan an already-cloned repository for committed credentials
    Scan(commands::scan::ScanArgs),
    /// List the builtin secret detection patterns
    Patterns,
}

impl Cli {
    /// Install the tracing subscriber. `RUST_LOG` wins; otherwise the
    /// level follows the verbosity flags.
    pub fn init_logging(&self) {
        let default_level = if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);
        match &self.command {
            Commands::Scan(args) => commands::scan::execute(args, &output, self.config.as_deref()),
            Commands::Patterns => commands::patterns::execute(&output),
        }
    }
}
