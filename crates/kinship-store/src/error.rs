//! Store error types

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading a family dataset
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON or has the wrong shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A member is stored under a key that differs from its id
    #[error("Member stored under key '{key}' has id '{id}'")]
    KeyMismatch {
        /// Map key in the document
        key: String,
        /// Id inside the member record
        id: String,
    },

    /// Invalid field value
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
