//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

use crate::models::TransactionKind;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The persisted ledger file exists but cannot be trusted
    #[error("Ledger file {path} is corrupt: {reason}")]
    CorruptData { path: String, reason: String },

    /// A transaction references a category that does not exist for its kind
    #[error("Unknown {kind} category: {name}")]
    UnknownCategory { name: String, kind: TransactionKind },

    /// A category with the same name already exists for this kind
    #[error("{kind} category already exists: {name}")]
    DuplicateCategory { name: String, kind: TransactionKind },

    /// A budget was requested for something other than an expense category
    #[error("Invalid budget category: {0}")]
    InvalidCategory(String),

    /// Amounts must be positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code outside the supported set
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Month could not be parsed
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Other validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a corrupt data error for the given file
    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error is a rejected mutation (bad input, nothing changed)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory { .. }
                | Self::DuplicateCategory { .. }
                | Self::InvalidCategory(_)
                | Self::InvalidAmount(_)
                | Self::UnsupportedCurrency(_)
                | Self::InvalidDate(_)
                | Self::InvalidMonth(_)
                | Self::Validation(_)
        )
    }

    /// Check if this is a corrupt data error
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
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

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
