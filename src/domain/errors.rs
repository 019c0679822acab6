//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    EmptyField(&'static str),

    /// A field exceeds its maximum length (in characters).
    TooLong { field: &'static str, max: usize },

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "Field '{}' is required", field),
            Self::TooLong { field, max } => {
                write!(f, "Field '{}' must be at most {} characters", field, max)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
