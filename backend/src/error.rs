//! Error types for dataset loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while locating or reading a source CSV file.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// None of the candidate paths exist.
    #[error("Data file not found (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DatasetError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatasetError::NotFound { .. })
    }
}

/// Errors raised while loading `second-earth.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
