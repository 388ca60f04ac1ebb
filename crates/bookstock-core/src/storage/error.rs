//! Store error handling
//!
//! Provides typed errors for store operations with descriptive messages
//! and recovery suggestions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create the directory holding the database file
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A table constraint rejected the write (e.g. duplicate id)
    #[error("Constraint violation: {0}")]
    Constraint(#[source] rusqlite::Error),

    /// Restocking would push the quantity past the integer range
    #[error("Quantity overflow for '{title}': {current} + {added} does not fit")]
    QuantityOverflow {
        title: String,
        current: i64,
        added: i64,
    },

    /// Any other SQLite error (file locked, disk failure, corrupt file)
    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        match error.sqlite_error_code() {
            Some(rusqlite::ErrorCode::ConstraintViolation) => StoreError::Constraint(error),
            _ => StoreError::Database(error),
        }
    }
}

impl StoreError {
    /// Check if this error came from a table constraint
    pub fn is_constraint(&self) -> bool {
        matches!(self, StoreError::Constraint(_))
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StoreError::Constraint(_) => {
                Some("Another book already uses that ID. Choose a different ID and try again.")
            }
            StoreError::QuantityOverflow { .. } => {
                Some("Enter a smaller quantity.")
            }
            StoreError::CreateDirectory { .. } => {
                Some("Check that the parent directory exists and you have write permissions.")
            }
            StoreError::Database(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::DatabaseBusy
                    || err.code == rusqlite::ErrorCode::DatabaseLocked =>
            {
                Some("The database file is in use by another program. Close it and try again.")
            }
            _ => None,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
