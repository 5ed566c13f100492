use std::io;

/// Errors that can occur during evalscope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Pattern error: {0}")]
    PatternError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for evalscope operations
pub type Result<T> = std::result::Result<T, Error>;
