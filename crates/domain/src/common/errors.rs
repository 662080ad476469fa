//! Error types shared across the domain.
//!
//! This module provides the validation error used by value objects and the
//! unified [`DomainError`] wrapping every subdomain error.

use std::error::Error;
use std::fmt;

use crate::session::SessionError;

// =============================================================================
// ValidationError
// =============================================================================

/// Validation error variants for domain value objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    EmptyValue {
        /// The name of the field that was empty.
        field: String,
    },
    /// A value exceeded its maximum length.
    TooLong {
        /// The name of the field that was too long.
        field: String,
        /// The maximum allowed length.
        max: usize,
        /// The actual length that was provided.
        actual: usize,
    },
    /// A value had an invalid format.
    InvalidFormat {
        /// The name of the field with invalid format.
        field: String,
        /// Description of the expected format.
        expected: String,
    },
}

impl ValidationError {
    /// Returns the name of the field that caused the error.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyValue { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }

    /// Returns a human-readable error message.
    pub fn message(&self) -> String {
        match self {
            Self::EmptyValue { field } => {
                format!("'{}' must not be empty", field)
            }
            Self::TooLong { field, max, actual } => {
                format!(
                    "'{}' must be at most {} characters, but was {}",
                    field, max, actual
                )
            }
            Self::InvalidFormat { field, expected } => {
                format!("'{}' has invalid format: expected {}", field, expected)
            }
        }
    }

    /// Creates an empty value error.
    pub fn empty_value(field: impl Into<String>) -> Self {
        Self::EmptyValue {
            field: field.into(),
        }
    }

    /// Creates a too long error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for ValidationError {}

// =============================================================================
// DomainError
// =============================================================================

/// Domain-level error types.
///
/// This enum wraps all subdomain errors and provides a unified error type
/// for the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A validation error occurred.
    Validation(ValidationError),
    /// A session state machine error occurred.
    Session(SessionError),
}

impl DomainError {
    /// Returns true if this is a validation error.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a session error.
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::Session(_))
    }

    /// Returns the wrapped session error, if any.
    pub fn as_session_error(&self) -> Option<&SessionError> {
        match self {
            Self::Session(error) => Some(error),
            Self::Validation(_) => None,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(error) => write!(formatter, "Validation error: {}", error),
            Self::Session(error) => write!(formatter, "Session error: {}", error),
        }
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Session(error) => Some(error),
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<SessionError> for DomainError {
    fn from(error: SessionError) -> Self {
        Self::Session(error)
    }
}

// =============================================================================
// Tests
// =============================================================================
