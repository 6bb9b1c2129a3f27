//! Error types for view exports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing report files.
#[derive(Debug, Error)]
pub enum ViewError {
    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to open or create a report file.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
