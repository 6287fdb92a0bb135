//! CLI argument definitions using clap
//!
//! Commands:
//! - tankdb serve --config <path>
//! - tankdb config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tankdb - A validated in-memory fuel tank registry
#[derive(Parser, Debug)]
#[command(name = "tankdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the tankdb HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./tankdb.json")]
        config: PathBuf,
    },

    /// Print the effective configuration and exit
    Config {
        /// Path to configuration file
        #[arg(long, default_value = "./tankdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
