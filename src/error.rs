//! Error types for portsweep.
//!
//! Uses `thiserror` for ergonomic error definitions. Each concern gets its
//! own enum; `CliError` aggregates them at the command-line boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while parsing a port expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    #[error("invalid port format: expected range: '1-1024' or list: '80,443' (got {0:?})")]
    InvalidFormat(String),

    #[error("invalid port range: expected range between 1 and 65535 (got {0})")]
    InvalidRange(String),
}

/// Errors produced by the scan mode registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("invalid mode: {0:?}")]
    InvalidMode(String),
}

/// Errors that abort a scan before or during fan-out.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Port(#[from] PortError),

    #[error("scan worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Errors raised by the output collaborator.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("invalid format: {0:?}")]
    InvalidFormat(String),

    #[error("failed to render results: {0}")]
    Render(String),

    #[error("failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to settings files.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),
}

/// Top-level error for the command-line driver.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("export failed: {0}")]
    Output(#[from] OutputError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for port parsing.
pub type PortParseResult<T> = Result<T, PortError>;

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Result type alias for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
