//! Error types for the drishti command line

use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Drishti(#[from] drishti::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] drishti::ConfigLoadError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
