//! Infrastructure error types.
//!
//! # Error Categories
//!
//! - [`InfraError::Configuration`]: an environment variable held an unusable value
//! - [`InfraError::Serialization`]: a record could not be encoded for export
//!
//! # Examples
//!
//! ```
//! use pig_infrastructure::errors::InfraError;
//!
//! let error = InfraError::configuration("PIG_DICE_SEED", "not a number");
//! assert!(error.is_configuration());
//! assert_eq!(error.to_string(), "Configuration error in PIG_DICE_SEED: not a number");
//! ```

use thiserror::Error;

// =============================================================================
// InfraError
// =============================================================================

/// Error types for infrastructure operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfraError {
    /// A configuration value was present but invalid.
    #[error("Configuration error in {key}: {message}")]
    Configuration {
        /// The offending configuration key.
        key: String,
        /// Detailed error message.
        message: String,
    },

    /// Serialization failed.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Detailed error message.
        message: String,
    },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl InfraError {
    #[must_use]
    pub fn configuration(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl InfraError {
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns the detailed message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message, .. } | Self::Serialization { message } => message,
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
