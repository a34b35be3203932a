use std::io;

/// Errors that can occur during gpumark operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid target pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate target name: {0}")]
    DuplicateTarget(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for gpumark operations
pub type Result<T> = std::result::Result<T, Error>;
