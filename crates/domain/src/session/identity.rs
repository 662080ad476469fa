use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::ValidationError;

/// Longest identity accepted, in characters.
pub const MAX_IDENTITY_LENGTH: usize = 128;

// =============================================================================
// PlayerIdentity
// =============================================================================

/// The authenticated identity a session is keyed by.
///
/// Identities are opaque, trimmed, non-empty strings supplied by the identity
/// provider. The core never interprets them beyond equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerIdentity(String);

impl PlayerIdentity {
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_value("player_identity"));
        }
        let length = trimmed.chars().count();
        if length > MAX_IDENTITY_LENGTH {
            return Err(ValidationError::too_long(
                "player_identity",
                MAX_IDENTITY_LENGTH,
                length,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Generates a fresh anonymous identity.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for PlayerIdentity {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::new(string)
    }
}

impl TryFrom<String> for PlayerIdentity {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerIdentity> for String {
    fn from(identity: PlayerIdentity) -> Self {
        identity.0
    }
}

// =============================================================================
// Tests
// =============================================================================
