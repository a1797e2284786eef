//! Error types for type-set loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading categorical definitions.
#[derive(Error, Debug)]
pub enum TypeSetError {
    /// The definition directory exists but could not be listed.
    #[error("Failed to read definition directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
