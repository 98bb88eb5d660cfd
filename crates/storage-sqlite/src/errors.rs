//! Storage-specific error types for SQLite operations.
//!
//! This module wraps rusqlite and serde_json errors and converts them to
//! the database-agnostic error types defined in `fintrack_core`.

use thiserror::Error;

use fintrack_core::errors::{DatabaseError, Error};

/// Storage-specific errors, internal to this crate. They are converted to
/// `fintrack_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e))
            }
            StorageError::QueryFailed(rusqlite::Error::QueryReturnedNoRows) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Serialization(e) => Error::Database(DatabaseError::Internal(e.to_string())),
        }
    }
}
