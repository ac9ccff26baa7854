//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not ten numeric characters.
    InvalidPhone(String),

    /// The provided birthday is not a date within the last hundred years.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(reason) => write!(f, "Invalid birthday: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
