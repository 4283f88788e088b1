//! Errors from store operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or mutating a todo list
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Corrupt store at {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Index {index} out of range (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}
