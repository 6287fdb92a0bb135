//! CLI-specific error types
//!
//! Every CLI error terminates the process with a non-zero exit code.

use thiserror::Error;

use crate::http_server::config::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("TANK_CLI_CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),

    /// Runtime or server startup failure
    #[error("TANK_CLI_SERVER_ERROR: {0}")]
    Server(#[from] std::io::Error),

    /// Output serialization failure
    #[error("TANK_CLI_IO_ERROR: {0}")]
    Io(#[from] serde_json::Error),
}
