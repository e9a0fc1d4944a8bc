//! Error types for AGS4 ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading AGS4 input.
///
/// Parsing itself is infallible; only file access can fail.
#[derive(Debug, Error)]
pub enum IngestError {
    /// AGS file not found.
    #[error("AGS file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
