//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// User input that cannot become an expense (bad amount or date)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Delete position outside the list
    #[error("Invalid index {index}: expected a number between 1 and {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The backing file exists but is not a valid list of expenses
    #[error("Cannot read {path}: {message}")]
    Parse { path: String, message: String },

    /// Spreadsheet export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a parse error for the given file
    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range delete
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if the backing file could not be parsed
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExpenseError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
