use pig_domain::session::PlayerIdentity;

// =============================================================================
// RollDiceCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollDiceCommand {
    identity: PlayerIdentity,
    face: Option<u8>,
}

impl RollDiceCommand {
    /// Rolls with a face drawn from the dice roller.
    #[must_use]
    pub const fn new(identity: PlayerIdentity) -> Self {
        Self {
            identity,
            face: None,
        }
    }

    /// Rolls with an explicit face, bypassing the dice roller.
    ///
    /// The face is validated when the workflow runs.
    #[must_use]
    pub const fn with_face(identity: PlayerIdentity, face: u8) -> Self {
        Self {
            identity,
            face: Some(face),
        }
    }

    #[must_use]
    pub const fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }

    #[must_use]
    pub const fn face(&self) -> Option<u8> {
        self.face
    }

    pub(crate) fn into_parts(self) -> (PlayerIdentity, Option<u8>) {
        (self.identity, self.face)
    }
}

// =============================================================================
// HoldTurnCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldTurnCommand {
    identity: PlayerIdentity,
}

impl HoldTurnCommand {
    #[must_use]
    pub const fn new(identity: PlayerIdentity) -> Self {
        Self { identity }
    }

    #[must_use]
    pub const fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }
}

// =============================================================================
// ResetGameCommand
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetGameCommand {
    identity: PlayerIdentity,
}

impl ResetGameCommand {
    #[must_use]
    pub const fn new(identity: PlayerIdentity) -> Self {
        Self { identity }
    }

    #[must_use]
    pub const fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }
}
