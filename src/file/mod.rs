//! Reading the input document and writing the synthetic copy.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Suffix appended to the input file stem to name the output.
pub const OUTPUT_SUFFIX: &str = "-synthetic";

/// Error type for the file boundary.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a UTF-8 JSON document.
pub async fn read_json(path: &Path) -> Result<Value, FileError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FileError::InputNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(FileError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    debug!("Read {} bytes from {}", content.len(), path.display());

    serde_json::from_str(&content).map_err(|source| FileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty-printed JSON, replacing any existing file.
pub async fn write_json(path: &Path, value: &Value) -> Result<(), FileError> {
    let content = serde_json::to_string_pretty(value).map_err(|source| FileError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tokio::fs::write(path, content)
        .await
        .map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// `<dir>/<stem>-synthetic.json` for an input at `<dir>/<stem>.<ext>`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.json"))
}
