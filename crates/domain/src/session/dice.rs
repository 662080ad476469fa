use std::fmt;

use serde::{Deserialize, Serialize};

use super::SessionError;

/// Lowest face of the die.
pub const MIN_FACE: u8 = 1;

/// Highest face of the die.
pub const MAX_FACE: u8 = 6;

/// The face that busts the current turn.
pub const BUST_FACE: u8 = 1;

// =============================================================================
// DieFace
// =============================================================================

/// A single six-sided die face, always within `1..=6`.
///
/// # Examples
///
/// ```
/// use pig_domain::session::DieFace;
///
/// let face = DieFace::new(4).unwrap();
/// assert_eq!(face.value(), 4);
/// assert!(!face.is_bust());
///
/// assert!(DieFace::new(0).is_err());
/// assert!(DieFace::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// Every face in ascending order.
    pub const ALL: [Self; 6] = [Self(1), Self(2), Self(3), Self(4), Self(5), Self(6)];

    pub fn new(value: u8) -> Result<Self, SessionError> {
        if !(MIN_FACE..=MAX_FACE).contains(&value) {
            return Err(SessionError::invalid_face(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.0 == BUST_FACE
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl TryFrom<u8> for DieFace {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

// =============================================================================
// Tests
// =============================================================================
