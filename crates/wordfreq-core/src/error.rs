//! Error types for wordfreq-core.
//!
//! Only loading can fail; every later pipeline stage is a pure
//! transformation over in-memory text.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for wordfreq operations.
#[derive(Debug, Error)]
pub enum WordFreqError {
    /// The input path does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input exists but could not be opened or read as UTF-8 text.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordFreqError {
    /// The input path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            WordFreqError::FileNotFound { path } | WordFreqError::Io { path, .. } => path,
        }
    }
}

/// Result type alias for wordfreq operations.
pub type Result<T> = std::result::Result<T, WordFreqError>;
