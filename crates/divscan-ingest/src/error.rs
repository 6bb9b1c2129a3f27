//! Error types for dividend data ingestion.

use std::path::PathBuf;
use thiserror::Error;

use divscan_model::Category;

/// Errors raised while fetching a category's raw dataset text.
///
/// These never abort a full load: the loader logs them and stores an empty
/// record set for the affected category.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Data directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Dataset file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a dataset file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Network Errors ===
    /// HTTP request could not be completed.
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// Server answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    // === Source Errors ===
    /// An in-memory source holds no text for the category.
    #[error("no dataset available for category {category}")]
    MissingDataset { category: Category },
}

impl IngestError {
    /// Classifies an I/O error raised while opening `path`.
    pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
