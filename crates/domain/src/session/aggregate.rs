//! Session aggregate root.
//!
//! This module provides the per-player [`Session`] record and its state
//! machine: roll, hold, complete and reset. Every transition is a pure
//! function returning a new `Session`; a rejected transition returns an error
//! and the original value is left as it was.

use serde::{Deserialize, Serialize};

use super::dice::{DieFace, BUST_FACE, MAX_FACE};
use super::errors::SessionError;
use crate::common::ValidationError;

/// Banked score at which a session is won.
pub const TARGET_SCORE: u64 = 50;

// =============================================================================
// Session
// =============================================================================

/// The complete game state of one player.
///
/// # Invariants
///
/// - `turn_score` is 0 immediately after a hold or a bust
/// - `game_over` implies `total_score >= TARGET_SCORE`
/// - `round` counts rolls and `turn` counts busts plus holds; both only grow
///   until a reset
/// - `games_played` only grows and survives resets
/// - `completed` implies `game_over`
///
/// # Examples
///
/// ```
/// use pig_domain::session::{DieFace, Session};
///
/// let session = Session::new()
///     .roll(DieFace::new(3).unwrap())
///     .and_then(|session| session.roll(DieFace::new(4).unwrap()))
///     .and_then(|session| session.hold())
///     .unwrap();
///
/// assert_eq!(session.total_score(), 7);
/// assert_eq!(session.turn_score(), 0);
/// assert_eq!(session.turn(), 1);
/// assert_eq!(session.round(), 2);
/// ```
///
/// Deserialization re-checks the invariants above, so a stored record that
/// no transition could have produced is rejected instead of loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    total_score: u64,
    turn_score: u64,
    last_roll: u8,
    round: u64,
    turn: u64,
    game_over: bool,
    games_played: u64,
    #[serde(default)]
    completed: bool,
}

impl Session {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Creates the all-zero session a player starts with.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_score: 0,
            turn_score: 0,
            last_roll: 0,
            round: 0,
            turn: 0,
            game_over: false,
            games_played: 0,
            completed: false,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    #[must_use]
    pub const fn total_score(&self) -> u64 {
        self.total_score
    }

    #[must_use]
    pub const fn turn_score(&self) -> u64 {
        self.turn_score
    }

    /// Returns the last face rolled, or 0 when nothing was rolled since the
    /// last hold or reset.
    #[must_use]
    pub const fn last_roll(&self) -> u8 {
        self.last_roll
    }

    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    #[must_use]
    pub const fn turn(&self) -> u64 {
        self.turn
    }

    #[must_use]
    pub const fn game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn games_played(&self) -> u64 {
        self.games_played
    }

    /// Returns true once a won session has been completed and not yet reset.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns true if the last roll busted the turn.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.last_face().is_some_and(|face| face.is_bust())
    }

    fn last_face(&self) -> Option<DieFace> {
        DieFace::new(self.last_roll).ok()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Applies a die roll.
    ///
    /// A bust discards the turn score and ends the turn; any other face adds
    /// to the turn score. Winning is never evaluated here.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] if the session is already won.
    pub fn roll(&self, face: DieFace) -> Result<Self, SessionError> {
        self.ensure_playable()?;

        let rolled = if face.is_bust() {
            Self {
                turn_score: 0,
                last_roll: face.value(),
                round: self.round.saturating_add(1),
                turn: self.turn.saturating_add(1),
                ..*self
            }
        } else {
            Self {
                turn_score: self.turn_score.saturating_add(u64::from(face.value())),
                last_roll: face.value(),
                round: self.round.saturating_add(1),
                ..*self
            }
        };
        Ok(rolled)
    }

    /// Banks the turn score and evaluates the win condition.
    ///
    /// Holding with a zero turn score is legal and still ends the turn. The
    /// banked total is not clamped at [`TARGET_SCORE`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] if the session is already won.
    pub fn hold(&self) -> Result<Self, SessionError> {
        self.ensure_playable()?;

        let total_score = self.total_score.saturating_add(self.turn_score);
        Ok(Self {
            total_score,
            turn_score: 0,
            last_roll: 0,
            turn: self.turn.saturating_add(1),
            game_over: total_score >= TARGET_SCORE,
            ..*self
        })
    }

    /// Records a won game against this player.
    ///
    /// The session stays won and blocked until it is reset.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotWon`] if the session is not won and
    /// [`SessionError::AlreadyCompleted`] if it was completed before.
    pub fn complete(&self) -> Result<Self, SessionError> {
        if !self.game_over {
            return Err(SessionError::not_won());
        }
        if self.completed {
            return Err(SessionError::already_completed());
        }
        Ok(Self {
            games_played: self.games_played.saturating_add(1),
            completed: true,
            ..*self
        })
    }

    /// Clears all per-game progress, keeping the lifetime `games_played`.
    ///
    /// Legal at any time, both mid-game and after a win.
    #[must_use]
    pub const fn reset(&self) -> Self {
        Self {
            games_played: self.games_played,
            ..Self::new()
        }
    }

    fn ensure_playable(&self) -> Result<(), SessionError> {
        if self.game_over {
            Err(SessionError::game_over())
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// SessionRecord
// =============================================================================

/// Unchecked wire form of a [`Session`].
#[derive(Deserialize)]
struct SessionRecord {
    total_score: u64,
    turn_score: u64,
    last_roll: u8,
    round: u64,
    turn: u64,
    game_over: bool,
    games_played: u64,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<SessionRecord> for Session {
    type Error = ValidationError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if record.last_roll > MAX_FACE {
            return Err(ValidationError::invalid_format("last_roll", "0 or a face in 1..=6"));
        }
        if record.game_over != (record.total_score >= TARGET_SCORE) {
            return Err(ValidationError::invalid_format(
                "game_over",
                "true exactly when total_score reaches the target",
            ));
        }
        if record.completed && !record.game_over {
            return Err(ValidationError::invalid_format(
                "completed",
                "false unless the game is over",
            ));
        }
        let turn_ended = record.last_roll == 0 || record.last_roll == BUST_FACE;
        if record.turn_score != 0 && (turn_ended || record.game_over) {
            return Err(ValidationError::invalid_format(
                "turn_score",
                "0 after a hold, a bust or a win",
            ));
        }

        Ok(Self {
            total_score: record.total_score,
            turn_score: record.turn_score,
            last_roll: record.last_roll,
            round: record.round,
            turn: record.turn,
            game_over: record.game_over,
            games_played: record.games_played,
            completed: record.completed,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================
