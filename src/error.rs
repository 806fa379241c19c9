//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{EntryValidationError, PatchError};

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Rejected user input (empty description, bad amount, unknown theme)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed import document; the ledger is left untouched
    #[error("Import error: {0}")]
    Import(String),

    /// The persistence slot could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

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

impl BudgetError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<EntryValidationError> for BudgetError {
    fn from(err: EntryValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PatchError> for BudgetError {
    fn from(err: PatchError) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
