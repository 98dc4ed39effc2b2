//! Error types for loading traveler entries and configuration.
//!
//! Estimation and aggregation never fail; only the surrounding I/O does.

use std::path::PathBuf;

/// Result type for fallible traveler-points operations
pub type TravelerResult<T> = Result<T, TravelerError>;

#[derive(Debug, thiserror::Error)]
pub enum TravelerError {
    /// Reading a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A traveler entry did not match the expected JSON shape.
    #[error("Invalid traveler JSON at '{path}': {message}")]
    Json { path: String, message: String },

    /// A configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A travel has no usable destination identifier.
    #[error("Travel #{index} has no place")]
    MissingPlace { index: usize },

    /// The entries API could not be reached or answered with an error.
    #[cfg(feature = "remote")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TravelerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TravelerError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for TravelerError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        TravelerError::Json {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}
