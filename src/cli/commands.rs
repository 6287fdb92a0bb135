//! CLI command implementations
//!
//! The serve command loads configuration, builds the HTTP server, and blocks
//! on it until the process is terminated. All boot logic lives here, not in
//! main.rs.

use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config),
        Command::Config { config } => print_config(&config),
    }
}

/// Load configuration and serve HTTP until terminated
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = HttpServerConfig::load(config_path)?;
    Logger::info(
        "CONFIG_LOADED",
        &[
            ("addr", &config.socket_addr()),
            ("path", &config_path.display().to_string()),
        ],
    );

    let server = HttpServer::with_config(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Print the effective configuration as JSON
pub fn print_config(config_path: &Path) -> CliResult<()> {
    let config = HttpServerConfig::load(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
