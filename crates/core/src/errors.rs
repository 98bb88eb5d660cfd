//! Core error types for the Fintrack ledger.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors (from rusqlite, etc.) are converted to these types by the storage
//! layer. Draft validation is not represented here: validation outcomes are
//! returned as data (see [`crate::investments::ValidationReport`]), never as
//! an `Err`.

use thiserror::Error;

use crate::ledger::LedgerError;
use crate::notifications::NotificationError;
use crate::portability::PortabilityError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Ledger operation failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Notification operation failed: {0}")]
    Notification(#[from] NotificationError),

    #[error("Import/export failed: {0}")]
    Portability(#[from] PortabilityError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// Uses `String` for all error details, allowing the storage layer to
/// convert storage-specific errors into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
