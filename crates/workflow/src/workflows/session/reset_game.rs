use pig_domain::session::{PlayerIdentity, Session};

use super::{ResetGameCommand, require_session};
use crate::ports::{SessionStore, WorkflowResult};

fn apply_reset(identity: &PlayerIdentity, current: Option<&Session>) -> WorkflowResult<Session> {
    Ok(require_session(identity, current)?.reset())
}

/// Clears a player's game progress, keeping their lifetime completions.
pub fn reset_game<'a, S>(
    sessions: &'a S,
) -> impl Fn(ResetGameCommand) -> WorkflowResult<Session> + 'a
where
    S: SessionStore,
{
    move |command| {
        let identity = command.identity();
        sessions.mutate(identity, |current| apply_reset(identity, current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::KeyedStore;
    use crate::workflows::test_support::{MockSessionStore, identity};
    use pig_domain::session::{DieFace, SessionError};
    use rstest::rstest;

    fn won_and_completed() -> Session {
        (0..9)
            .try_fold(Session::new(), |session, _| {
                session.roll(DieFace::new(6).unwrap())
            })
            .and_then(|session| session.hold())
            .and_then(|session| session.complete())
            .unwrap()
    }

    #[rstest]
    fn reset_without_session_is_rejected() {
        let sessions = MockSessionStore::new();
        let error = reset_game(&sessions)(ResetGameCommand::new(identity("alice"))).unwrap_err();
        assert!(error.session_error().is_some_and(SessionError::is_no_session));
    }

    #[rstest]
    fn reset_after_win_keeps_games_played() {
        let sessions = MockSessionStore::new();
        let alice = identity("alice");
        sessions.create(&alice, won_and_completed()).unwrap();

        let session = reset_game(&sessions)(ResetGameCommand::new(alice.clone())).unwrap();

        assert_eq!(session.total_score(), 0);
        assert!(!session.game_over());
        assert_eq!(session.games_played(), 1);
    }

    #[rstest]
    fn reset_twice_is_idempotent() {
        let sessions = MockSessionStore::new();
        let alice = identity("alice");
        sessions.create(&alice, won_and_completed()).unwrap();
        let reset = reset_game(&sessions);

        let once = reset(ResetGameCommand::new(alice.clone())).unwrap();
        let twice = reset(ResetGameCommand::new(alice.clone())).unwrap();

        assert_eq!(once, twice);
    }
}
