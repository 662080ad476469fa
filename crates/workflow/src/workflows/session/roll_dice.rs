use lambars::pipe;
use pig_domain::session::{DieFace, PlayerIdentity, Session};

use super::RollDiceCommand;
use crate::ports::{DiceRoller, SessionStore, WorkflowResult};

// =============================================================================
// Step 1: Resolve Face [IO]
// =============================================================================

fn resolve_face<R>(dice: &R, command: RollDiceCommand) -> WorkflowResult<(PlayerIdentity, DieFace)>
where
    R: DiceRoller,
{
    let (identity, face) = command.into_parts();
    let face = match face {
        Some(value) => DieFace::new(value)?,
        None => dice.roll_die(),
    };
    Ok((identity, face))
}

// =============================================================================
// Step 2: Apply Roll [Pure]
// =============================================================================

/// A missing session is created with all-zero defaults before the roll.
fn apply_roll(current: Option<&Session>, face: DieFace) -> WorkflowResult<Session> {
    let session = current.copied().unwrap_or_default();
    Ok(session.roll(face)?)
}

// =============================================================================
// RollDice Workflow
// =============================================================================

/// Rolls the die for a player, creating their session on first use.
///
/// Rejects with `InvalidFace` for an explicit face outside `1..=6` and with
/// `GameOver` once the session is won. A rejected roll changes nothing.
pub fn roll_dice<'a, S, R>(
    sessions: &'a S,
    dice: &'a R,
) -> impl Fn(RollDiceCommand) -> WorkflowResult<Session> + 'a
where
    S: SessionStore,
    R: DiceRoller,
{
    move |command| {
        pipe!(
            resolve_face(dice, command),
            |resolved: WorkflowResult<(PlayerIdentity, DieFace)>| {
                resolved.and_then(|(identity, face)| {
                    sessions.mutate(&identity, |current| apply_roll(current, face))
                })
            }
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
