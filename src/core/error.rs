//! Error taxonomy for store and task operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the task store and the mutators.
///
/// Every variant is handled at the interactive loop boundary and turned
/// into a user-facing message followed by another cycle; none of them
/// terminate the process.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The backing file does not exist yet.
    #[error("tasks file not found: {}", path.display())]
    FileNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The backing file exists but is not a JSON object of booleans.
    #[error("tasks file contains invalid data: {0}")]
    MalformedData(#[from] serde_json::Error),

    /// The supplied task name is empty or whitespace-only.
    #[error("task name must be a unique, non-empty string")]
    InvalidInput,

    /// The named task is not present in the collection.
    #[error("task not in tasks list: {name}")]
    NotFound {
        /// Normalized name that was looked up.
        name: String,
    },

    /// Any other failure while reading or writing the store.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
