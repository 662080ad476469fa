//! Error types for the workflow layer.
//!
//! This module provides the error type returned by every workflow, wrapping
//! domain errors together with storage-related failures.
//!
//! # Error Categories
//!
//! - [`WorkflowError::Domain`]: Wraps domain layer errors
//! - [`WorkflowError::NotFound`]: A record was not found in a store
//! - [`WorkflowError::Conflict`]: A record already exists
//! - [`WorkflowError::Store`]: A store operation failed
//!
//! # Examples
//!
//! ```
//! use pig_domain::session::SessionError;
//! use pig_workflow::errors::WorkflowError;
//!
//! let error = WorkflowError::from(SessionError::game_over());
//! assert_eq!(error.session_error(), Some(&SessionError::GameOver));
//!
//! let error = WorkflowError::conflict("slot canonical is taken");
//! assert!(error.is_conflict());
//! ```

use pig_domain::common::{DomainError, ValidationError};
use pig_domain::session::SessionError;
use std::error::Error;
use std::fmt;

// =============================================================================
// WorkflowError
// =============================================================================

/// Error types for workflow operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// A domain error occurred during workflow execution.
    Domain(DomainError),

    /// The requested record was not found.
    NotFound {
        /// The type of record that was not found (e.g., "Session").
        entity_type: String,
        /// The key used to look up the record.
        identifier: String,
    },

    /// A record already exists under the given key.
    Conflict {
        /// The reason for the conflict.
        reason: String,
    },

    /// A store operation failed.
    Store {
        /// The operation that failed (e.g., "create", "mutate").
        operation: String,
        /// Detailed error message.
        message: String,
    },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl WorkflowError {
    /// Creates a new `NotFound` error.
    #[must_use]
    pub fn not_found(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Creates a new `Conflict` error.
    #[must_use]
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    /// Creates a new `Store` error.
    #[must_use]
    pub fn store(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Predicates
// =============================================================================

impl WorkflowError {
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }

    /// Returns the session error this workflow was rejected with, if any.
    ///
    /// Callers branching on the game's rejection kinds (invalid face, no
    /// session, game over, not won, already completed) match on this.
    #[must_use]
    pub fn session_error(&self) -> Option<&SessionError> {
        match self {
            Self::Domain(error) => error.as_session_error(),
            _ => None,
        }
    }
}

// =============================================================================
// Display and Error
// =============================================================================

impl fmt::Display for WorkflowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(error) => write!(formatter, "{}", error),
            Self::NotFound {
                entity_type,
                identifier,
            } => write!(formatter, "{} not found: {}", entity_type, identifier),
            Self::Conflict { reason } => write!(formatter, "Conflict: {}", reason),
            Self::Store { operation, message } => {
                write!(formatter, "Store operation '{}' failed: {}", operation, message)
            }
        }
    }
}

impl Error for WorkflowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(error) => Some(error),
            _ => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<DomainError> for WorkflowError {
    fn from(error: DomainError) -> Self {
        Self::Domain(error)
    }
}

impl From<SessionError> for WorkflowError {
    fn from(error: SessionError) -> Self {
        Self::Domain(DomainError::from(error))
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(error: ValidationError) -> Self {
        Self::Domain(DomainError::from(error))
    }
}

// =============================================================================
// Tests
// =============================================================================
