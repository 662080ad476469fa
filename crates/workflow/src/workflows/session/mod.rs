mod commands;
mod hold_turn;
mod reset_game;
mod roll_dice;

use pig_domain::session::{PlayerIdentity, Session, SessionError};

// Re-export command types
pub use commands::{HoldTurnCommand, ResetGameCommand, RollDiceCommand};

// Re-export workflow functions
pub use hold_turn::hold_turn;
pub use reset_game::reset_game;
pub use roll_dice::roll_dice;

/// Returns the stored session or rejects with `NoSession`.
pub(crate) fn require_session(
    identity: &PlayerIdentity,
    current: Option<&Session>,
) -> Result<Session, SessionError> {
    current
        .copied()
        .ok_or_else(|| SessionError::no_session(identity.clone()))
}
