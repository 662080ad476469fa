//! Read-only views over the stores.
//!
//! Per-player reads accept any identity and fall back to the zero value when
//! that player has no session. None of them can fail.

use pig_domain::session::{PlayerIdentity, Session};
use pig_domain::statistics::{AggregatePlacement, AggregateSlot, CompletionAggregate};

use crate::ports::{AggregateStore, SessionStore};

// =============================================================================
// Session Views
// =============================================================================

/// Full snapshot of a player's session, if one exists.
pub fn session<S>(sessions: &S, identity: &PlayerIdentity) -> Option<Session>
where
    S: SessionStore,
{
    sessions.get(identity)
}

fn session_or_default<S>(sessions: &S, identity: &PlayerIdentity) -> Session
where
    S: SessionStore,
{
    session(sessions, identity).unwrap_or_default()
}

pub fn last_roll<S: SessionStore>(sessions: &S, identity: &PlayerIdentity) -> u8 {
    session_or_default(sessions, identity).last_roll()
}

pub fn round<S: SessionStore>(sessions: &S, identity: &PlayerIdentity) -> u64 {
    session_or_default(sessions, identity).round()
}

pub fn turn<S: SessionStore>(sessions: &S, identity: &PlayerIdentity) -> u64 {
    session_or_default(sessions, identity).turn()
}

pub fn turn_score<S: SessionStore>(sessions: &S, identity: &PlayerIdentity) -> u64 {
    session_or_default(sessions, identity).turn_score()
}

pub fn total_score<S: SessionStore>(sessions: &S, identity: &PlayerIdentity) -> u64 {
    session_or_default(sessions, identity).total_score()
}

pub fn game_over<S: SessionStore>(sessions: &S, identity: &PlayerIdentity) -> bool {
    session_or_default(sessions, identity).game_over()
}

/// Number of games the player has completed; survives resets.
pub fn user_completions<S: SessionStore>(sessions: &S, identity: &PlayerIdentity) -> u64 {
    session_or_default(sessions, identity).games_played()
}

// =============================================================================
// Aggregate Views
// =============================================================================

/// Global completion count as seen from the canonical slot only.
///
/// Counts parked at a player slot under
/// [`AggregatePlacement::DualLocation`] are not visible here; use
/// [`discover_completions`] for that.
pub fn global_completions<A>(aggregates: &A) -> u64
where
    A: AggregateStore,
{
    aggregates
        .get(&AggregateSlot::Canonical)
        .map_or(0, |aggregate| aggregate.total_completions())
}

/// Global completion count found by the same search `complete` writes with.
pub fn discover_completions<A>(
    aggregates: &A,
    placement: AggregatePlacement,
    caller: &PlayerIdentity,
) -> u64
where
    A: AggregateStore,
{
    let found = match placement {
        AggregatePlacement::Singleton => aggregates.get(&AggregateSlot::Canonical),
        AggregatePlacement::DualLocation => aggregates
            .get(&AggregateSlot::Canonical)
            .or_else(|| aggregates.get(&AggregateSlot::Player(caller.clone()))),
    };
    found.as_ref().map_or(0, CompletionAggregate::total_completions)
}

// =============================================================================
// Tests
// =============================================================================
