//! Error types for Drishti

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Drishti error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable polygon to rasterize
    #[error("Empty map: {0}")]
    EmptyMap(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted index is unreadable or incompatible
    #[error("Index format error: {0}")]
    IndexFormat(String),

    /// Recognition collaborator failed or returned an unexpected shape
    #[error("Recognition error: {0}")]
    Recognition(String),
}
