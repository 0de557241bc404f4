//! Custom error types for spendtrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Failures talking to the persistence API are
//! classified separately in [`ApiError`] so callers can tell an unreachable
//! server from one that rejected the request.

use thiserror::Error;

/// Failures raised by the remote sync gateway
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server could not be reached (connect, timeout, body read)
    #[error("API unreachable: {0}")]
    Unreachable(String),

    /// The server answered with a non-success status
    #[error("API rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The server answered successfully but the body had an unexpected shape
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Check if the server was never reached
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// Check if the server answered with a non-success status
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// The main error type for spendtrack operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Remote persistence API errors
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the persistence API
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendtrack operations
pub type SpendResult<T> = Result<T, SpendError>;
