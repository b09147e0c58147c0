//! Errors raised by score history stores.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score history at {path} is not a valid JSON array: {detail}")]
    Corrupt { path: PathBuf, detail: String },
    #[error("failed to encode score history: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("timed out waiting for lock on {path}")]
    Lock { path: PathBuf },
    #[error("invalid history record: {detail}")]
    InvalidRecord { detail: String },
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
