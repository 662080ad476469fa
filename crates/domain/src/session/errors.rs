//! Error types for the session state machine.
//!
//! Every variant is a synchronous validation rejection: an operation that
//! fails with one of these leaves the session untouched.

use std::error::Error;
use std::fmt;

use super::PlayerIdentity;

// =============================================================================
// SessionError
// =============================================================================

/// Error types for session operations.
///
/// # Examples
///
/// ```
/// use pig_domain::session::{PlayerIdentity, SessionError};
///
/// let identity = PlayerIdentity::new("alice").unwrap();
/// let error = SessionError::no_session(identity);
/// assert!(error.is_no_session());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A supplied die face was outside `1..=6`.
    InvalidFace {
        /// The rejected face value.
        face: u8,
    },
    /// The identity has no session yet.
    NoSession {
        /// The identity that was looked up.
        identity: PlayerIdentity,
    },
    /// The session has reached the target score; roll and hold are blocked.
    GameOver,
    /// Completion was requested before the session was won.
    NotWon,
    /// The won session has already been completed and awaits a reset.
    AlreadyCompleted,
}

impl SessionError {
    /// Creates an invalid face error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pig_domain::session::SessionError;
    ///
    /// let error = SessionError::invalid_face(7);
    /// assert!(error.is_invalid_face());
    /// ```
    #[must_use]
    pub const fn invalid_face(face: u8) -> Self {
        Self::InvalidFace { face }
    }

    /// Creates a no session error.
    #[must_use]
    pub fn no_session(identity: PlayerIdentity) -> Self {
        Self::NoSession { identity }
    }

    /// Creates a game over error.
    #[must_use]
    pub const fn game_over() -> Self {
        Self::GameOver
    }

    /// Creates a not won error.
    #[must_use]
    pub const fn not_won() -> Self {
        Self::NotWon
    }

    /// Creates an already completed error.
    #[must_use]
    pub const fn already_completed() -> Self {
        Self::AlreadyCompleted
    }

    #[must_use]
    pub const fn is_invalid_face(&self) -> bool {
        matches!(self, Self::InvalidFace { .. })
    }

    #[must_use]
    pub const fn is_no_session(&self) -> bool {
        matches!(self, Self::NoSession { .. })
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver)
    }

    #[must_use]
    pub const fn is_not_won(&self) -> bool {
        matches!(self, Self::NotWon)
    }

    #[must_use]
    pub const fn is_already_completed(&self) -> bool {
        matches!(self, Self::AlreadyCompleted)
    }

    /// Returns a human-readable error message.
    ///
    /// # Examples
    ///
    /// ```
    /// use pig_domain::session::SessionError;
    ///
    /// let error = SessionError::game_over();
    /// assert!(error.message().contains("over"));
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidFace { face } => {
                format!("Invalid die face {}: expected a value between 1 and 6", face)
            }
            Self::NoSession { identity } => {
                format!("No session exists for player {}", identity)
            }
            Self::GameOver => "The game is over; reset the session to play again".to_string(),
            Self::NotWon => "The game has not been won yet".to_string(),
            Self::AlreadyCompleted => {
                "The game has already been completed; reset the session first".to_string()
            }
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.message())
    }
}

impl Error for SessionError {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn alice() -> PlayerIdentity {
        PlayerIdentity::new("alice").unwrap()
    }

    // =========================================================================
    // Predicate Tests
    // =========================================================================

    mod predicates {
        use super::*;

        #[rstest]
        fn invalid_face() {
            let error = SessionError::invalid_face(0);
            assert!(error.is_invalid_face());
            assert!(!error.is_no_session());
        }

        #[rstest]
        fn no_session() {
            let error = SessionError::no_session(alice());
            assert!(error.is_no_session());
            assert!(!error.is_not_won());
        }

        #[rstest]
        fn not_won_is_distinct_from_no_session() {
            let error = SessionError::not_won();
            assert!(error.is_not_won());
            assert!(!error.is_no_session());
            assert_ne!(error, SessionError::no_session(alice()));
        }

        #[rstest]
        fn game_over() {
            assert!(SessionError::game_over().is_game_over());
            assert!(!SessionError::game_over().is_already_completed());
        }

        #[rstest]
        fn already_completed() {
            assert!(SessionError::already_completed().is_already_completed());
            assert!(!SessionError::already_completed().is_game_over());
        }
    }

    // =========================================================================
    // Message Tests
    // =========================================================================

    mod message {
        use super::*;

        #[rstest]
        fn invalid_face_message_contains_face() {
            let message = SessionError::invalid_face(9).message();
            assert!(message.contains('9'));
        }

        #[rstest]
        fn no_session_message_contains_identity() {
            let message = SessionError::no_session(alice()).message();
            assert!(message.contains("alice"));
        }

        #[rstest]
        fn display_for_all_variants() {
            let variants = vec![
                SessionError::invalid_face(7),
                SessionError::no_session(alice()),
                SessionError::game_over(),
                SessionError::not_won(),
                SessionError::already_completed(),
            ];

            for error in variants {
                assert_eq!(error.to_string(), error.message());
                assert!(!error.to_string().is_empty());
            }
        }
    }

    mod traits {
        use super::*;

        #[rstest]
        fn implements_error_trait() {
            let error: Box<dyn Error> = Box::new(SessionError::not_won());
            assert!(error.source().is_none());
        }
    }
}
