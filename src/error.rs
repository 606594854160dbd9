//! Error types for order composition.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for order processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Order file not found (-1)
    FileNotFound = -1,
    /// Order file could not be decoded (-3)
    ParseError = -3,
    /// Non-numeric form input (E100)
    InvalidNumber = 100,
    /// Zero or negative dimension/quantity (E101)
    NonPositive = 101,
    /// Order file failed validation (E102)
    ValidationFailed = 102,
    /// Line item id not present in the order (E200)
    ItemNotFound = 200,
}

/// Main error type for order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid numeric value for '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("'{field}' must be greater than zero, got {value}")]
    NonPositive { field: String, value: f64 },

    #[error("Validation failed: {}", .errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    #[error("Line item {id} not found")]
    ItemNotFound { id: u64 },

    #[error("Invalid order file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrderError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::FileNotFound { .. } => ErrorCode::FileNotFound,
            OrderError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            OrderError::NonPositive { .. } => ErrorCode::NonPositive,
            OrderError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            OrderError::ItemNotFound { .. } => ErrorCode::ItemNotFound,
            OrderError::Json(_) => ErrorCode::ParseError,
            OrderError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for order operations.
pub type Result<T> = std::result::Result<T, OrderError>;
