//! Error types for Rollbook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RollbookError
pub type Result<T> = std::result::Result<T, RollbookError>;

/// Unified error type for Rollbook operations
#[derive(Debug, Error)]
pub enum RollbookError {
    // -------------------------------------------------------------------------
    // Record Store Errors
    // -------------------------------------------------------------------------
    #[error("Roll number {roll_no} already exists, use a unique roll number")]
    DuplicateKey { roll_no: i64 },

    #[error("No student with roll number {roll_no}")]
    NotFound { roll_no: i64 },

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be an integer, got {value:?}")]
    InvalidFormat { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RollbookError {
    /// Whether this error was raised by input validation (never reached the store)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RollbookError::MissingField(_)
                | RollbookError::InvalidFormat { .. }
                | RollbookError::OutOfRange { .. }
        )
    }
}
