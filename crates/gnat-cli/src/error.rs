//! Error handling for the GNAT CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Core structure error
    #[error("Core error: {0}")]
    Core(#[from] gnat_core::CoreError),

    /// Input/output format error
    #[error("Format error: {0}")]
    Format(#[from] gnat_io::IoError),

    /// Driver error
    #[error("Engine error: {0}")]
    Engine(#[from] gnat_engine::EngineError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command arguments
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// Generic error
    #[error("Error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl CliError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }
}
