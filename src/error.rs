//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by contact book operations.
///
/// Every operation either succeeds or fails with exactly one of these kinds,
/// leaving the book as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Phone number failed validation
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Birthday is not a DD.MM.YYYY calendar date
    #[error("Invalid birthday format: {0}")]
    InvalidBirthdayFormat(String),

    /// Contact name is empty
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// Command received the wrong number of arguments
    #[error("Expected {expected} argument(s), got {got}")]
    InvalidArgumentCount { expected: usize, got: usize },

    /// No contact is stored under the given name
    #[error("Contact '{0}' doesn't exist")]
    ContactDoesNotExist(String),
}

impl From<ValidationError> for ContactError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::EmptyName,
            ValidationError::InvalidPhone(phone) => Self::InvalidPhone(phone),
            ValidationError::InvalidBirthday(text) => Self::InvalidBirthdayFormat(text),
        }
    }
}

/// Errors that can occur while loading or saving the book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid contact book
    #[error("Failed to parse contact book: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file was written by an incompatible format version
    #[error("Unsupported contact book version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
