//! # Record Errors
//!
//! Error taxonomy for record store operations.

use thiserror::Error;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// No record carries the requested id
    #[error("Student not found")]
    NotFound,

    /// One of name, age, grade, email is missing or falsy
    #[error("All fields are required")]
    MissingFields,

    /// A present field could not be used as given
    #[error("{message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// The store lock was poisoned by a panicking writer
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecordError {
    /// Build an `InvalidField` error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        RecordError::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Whether this error is caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RecordError::Internal(_))
    }
}
