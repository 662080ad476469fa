use pig_domain::session::{PlayerIdentity, Session};

use super::{HoldTurnCommand, require_session};
use crate::ports::{SessionStore, WorkflowResult};

fn apply_hold(identity: &PlayerIdentity, current: Option<&Session>) -> WorkflowResult<Session> {
    let session = require_session(identity, current)?;
    Ok(session.hold()?)
}

/// Banks the player's turn score and evaluates the win condition.
///
/// Unlike rolling, holding never creates a session: a player without one is
/// rejected with `NoSession`.
pub fn hold_turn<'a, S>(sessions: &'a S) -> impl Fn(HoldTurnCommand) -> WorkflowResult<Session> + 'a
where
    S: SessionStore,
{
    move |command| {
        let identity = command.identity();
        sessions.mutate(identity, |current| apply_hold(identity, current))
    }
}
