//! Custom error types for Pocket Ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every data-entry error is recoverable: the
//! caller reports the message and the in-memory state is left untouched.

use thiserror::Error;

/// The main error type for Pocket Ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount text could not be parsed as a decimal number
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Date text is not a real calendar date in YYYY-MM-DD form
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Category name was empty after normalization
    #[error("Category name cannot be empty")]
    EmptyName,

    /// Category already present in the registry for that type
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Budget ceiling below zero
    #[error("Budget amount cannot be negative: {0}")]
    NegativeAmount(String),

    /// Unexpected failure while applying an operation
    #[error("An error occurred: {0}")]
    OperationFailed(String),

    /// The data file exists but could not be read or parsed
    #[error("Data file corrupted or unreadable: {0}")]
    PersistenceCorrupt(String),

    /// The data file could not be written
    #[error("Could not save data to file: {0}")]
    PersistenceWriteFailed(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocket Ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
