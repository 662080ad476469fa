use std::sync::Arc;

use pig_domain::session::{PlayerIdentity, Session};
use pig_workflow::{
    AggregateStore, CompleteGameCommand, CompletionReceipt, DiceRoller, HoldTurnCommand,
    ResetGameCommand, RollDiceCommand, SessionStore, WorkflowResult, complete_game, hold_turn,
    reset_game, roll_dice, views,
};

use crate::statistics::StatsAggregator;

// =============================================================================
// GameEngine
// =============================================================================

/// Entry point for playing Pig.
///
/// Mutating calls act on the session of the identity they are given, which
/// the caller is trusted to have authenticated. Reads accept any identity.
pub struct GameEngine<S, A, R>
where
    S: SessionStore,
    A: AggregateStore,
    R: DiceRoller,
{
    sessions: Arc<S>,
    statistics: StatsAggregator<A>,
    dice: Arc<R>,
}

impl<S, A, R> Clone for GameEngine<S, A, R>
where
    S: SessionStore,
    A: AggregateStore,
    R: DiceRoller,
{
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            statistics: self.statistics.clone(),
            dice: Arc::clone(&self.dice),
        }
    }
}

impl<S, A, R> GameEngine<S, A, R>
where
    S: SessionStore,
    A: AggregateStore,
    R: DiceRoller,
{
    pub fn new(sessions: Arc<S>, statistics: StatsAggregator<A>, dice: Arc<R>) -> Self {
        Self {
            sessions,
            statistics,
            dice,
        }
    }

    pub const fn statistics(&self) -> &StatsAggregator<A> {
        &self.statistics
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Rolls a random face for the player.
    ///
    /// # Errors
    ///
    /// Fails with `GameOver` once the session is won.
    pub fn roll(&self, identity: &PlayerIdentity) -> WorkflowResult<Session> {
        self.apply_roll(RollDiceCommand::new(identity.clone()))
    }

    /// Rolls a chosen face, bypassing the dice.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidFace` outside `1..=6` and with `GameOver` once the
    /// session is won.
    pub fn roll_with_face(&self, identity: &PlayerIdentity, face: u8) -> WorkflowResult<Session> {
        self.apply_roll(RollDiceCommand::with_face(identity.clone(), face))
    }

    fn apply_roll(&self, command: RollDiceCommand) -> WorkflowResult<Session> {
        let identity = command.identity().clone();
        let session = roll_dice(&*self.sessions, &*self.dice)(command)?;
        tracing::debug!(
            identity = %identity,
            face = session.last_roll(),
            turn_score = session.turn_score(),
            bust = session.is_bust(),
            "rolled"
        );
        Ok(session)
    }

    /// Banks the turn score and checks for a win.
    ///
    /// # Errors
    ///
    /// Fails with `NoSession` before the first roll and with `GameOver` once
    /// the session is won.
    pub fn hold(&self, identity: &PlayerIdentity) -> WorkflowResult<Session> {
        let session = hold_turn(&*self.sessions)(HoldTurnCommand::new(identity.clone()))?;
        tracing::debug!(
            identity = %identity,
            total_score = session.total_score(),
            turn = session.turn(),
            "held"
        );
        if session.game_over() {
            tracing::info!(identity = %identity, total_score = session.total_score(), "game won");
        }
        Ok(session)
    }

    /// Records the won game for the player and globally.
    ///
    /// # Errors
    ///
    /// Fails with `NoSession`, `NotWon` or `AlreadyCompleted`; nothing is
    /// recorded in that case. A failed aggregate write is returned as is
    /// and the session keeps its pre-completion state.
    pub fn complete(&self, identity: &PlayerIdentity) -> WorkflowResult<CompletionReceipt> {
        let workflow = complete_game(&*self.sessions, |caller: &PlayerIdentity| {
            self.statistics.record_completion(caller)
        });
        let receipt = workflow(CompleteGameCommand::new(identity.clone()))?;
        tracing::info!(
            identity = %identity,
            games_played = receipt.session().games_played(),
            slot = %receipt.slot(),
            total_completions = receipt.aggregate().total_completions(),
            "game completed"
        );
        Ok(receipt)
    }

    /// Starts a fresh game, keeping the player's completion count.
    ///
    /// # Errors
    ///
    /// Fails with `NoSession` if the player never played.
    pub fn reset(&self, identity: &PlayerIdentity) -> WorkflowResult<Session> {
        let session = reset_game(&*self.sessions)(ResetGameCommand::new(identity.clone()))?;
        tracing::debug!(identity = %identity, games_played = session.games_played(), "reset");
        Ok(session)
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn session(&self, identity: &PlayerIdentity) -> Option<Session> {
        views::session(&*self.sessions, identity)
    }

    pub fn last_roll(&self, identity: &PlayerIdentity) -> u8 {
        views::last_roll(&*self.sessions, identity)
    }

    pub fn round(&self, identity: &PlayerIdentity) -> u64 {
        views::round(&*self.sessions, identity)
    }

    pub fn turn(&self, identity: &PlayerIdentity) -> u64 {
        views::turn(&*self.sessions, identity)
    }

    pub fn turn_score(&self, identity: &PlayerIdentity) -> u64 {
        views::turn_score(&*self.sessions, identity)
    }

    pub fn total_score(&self, identity: &PlayerIdentity) -> u64 {
        views::total_score(&*self.sessions, identity)
    }

    pub fn game_over(&self, identity: &PlayerIdentity) -> bool {
        views::game_over(&*self.sessions, identity)
    }

    pub fn user_completions(&self, identity: &PlayerIdentity) -> u64 {
        views::user_completions(&*self.sessions, identity)
    }

    /// Reads the canonical slot only; see [`StatsAggregator::discover_completions`].
    pub fn global_completions(&self) -> u64 {
        self.statistics.global_completions()
    }
}
