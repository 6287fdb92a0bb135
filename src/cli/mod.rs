//! CLI module for tankdb
//!
//! Provides the command-line interface:
//! - serve: Boot the HTTP server and enter the serving loop
//! - config: Print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{print_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
