//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when editing records and the book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Phone number is not ten numeric characters
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Birthday is not a date within the last hundred years
    #[error("Invalid birthday: {0}")]
    InvalidBirthday(String),

    /// Phone or record lookup miss
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ValidationError> for BookError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::InvalidPhone(phone) => BookError::InvalidPhone(phone),
            ValidationError::InvalidBirthday(reason) => BookError::InvalidBirthday(reason),
        }
    }
}

/// Errors that can occur while persisting the book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the snapshot failed
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<bincode::Error> for StorageError {
    fn from(e: bincode::Error) -> Self {
        StorageError::Encoding(e.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while opening the book at startup.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Building the seed records failed
    #[error("Seed data rejected: {0}")]
    Seed(#[from] BookError),

    /// Saving the freshly seeded book failed
    #[error("Could not store seeded book: {0}")]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with BootstrapError
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("Bob".to_string());
        assert_eq!(err.to_string(), "Not found: Bob");

        let err = BookError::InvalidPhone("abc".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: abc");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_PAGE_SIZE: Must be a positive number"
        );
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: BookError = ValidationError::InvalidPhone("12".to_string()).into();
        assert_eq!(err, BookError::InvalidPhone("12".to_string()));

        let err: BookError = ValidationError::InvalidBirthday("too old".to_string()).into();
        assert_eq!(err, BookError::InvalidBirthday("too old".to_string()));
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorageError = io.into();
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("denied"));
    }
}
