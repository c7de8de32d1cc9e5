//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on contacts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone number, or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is not on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No record exists under the name
    #[error("Contact not found: {0}")]
    RecordNotFound(String),

    /// A command received the wrong number of arguments
    #[error("Command '{command}' expects {expected}")]
    ArgumentCount {
        command: String,
        expected: &'static str,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
