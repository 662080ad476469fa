use lambars::pipe;
use pig_domain::session::{PlayerIdentity, Session};
use pig_domain::statistics::{AggregatePlacement, AggregateSlot, CompletionAggregate};

use super::CompleteGameCommand;
use crate::errors::WorkflowError;
use crate::ports::{AggregateStore, SessionStore, WorkflowResult};
use crate::workflows::session::require_session;

// =============================================================================
// CompletionReceipt
// =============================================================================

/// Outcome of a successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReceipt {
    session: Session,
    slot: AggregateSlot,
    aggregate: CompletionAggregate,
}

impl CompletionReceipt {
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The slot the global count was recorded at.
    #[must_use]
    pub const fn slot(&self) -> &AggregateSlot {
        &self.slot
    }

    #[must_use]
    pub const fn aggregate(&self) -> &CompletionAggregate {
        &self.aggregate
    }
}

// =============================================================================
// Step 1: Complete Session [Pure]
// =============================================================================

fn apply_completion(identity: &PlayerIdentity, current: Option<&Session>) -> WorkflowResult<Session> {
    Ok(require_session(identity, current)?.complete()?)
}

// =============================================================================
// Step 2: Record Completion [IO]
// =============================================================================

fn increment_existing<A>(aggregates: &A, slot: AggregateSlot) -> WorkflowResult<(AggregateSlot, CompletionAggregate)>
where
    A: AggregateStore,
{
    let aggregate = aggregates.mutate(&slot, |current| {
        current
            .map(CompletionAggregate::incremented)
            .ok_or_else(|| WorkflowError::not_found("CompletionAggregate", slot.to_string()))
    })?;
    Ok((slot, aggregate))
}

fn increment_or_create<A>(aggregates: &A, slot: AggregateSlot) -> WorkflowResult<(AggregateSlot, CompletionAggregate)>
where
    A: AggregateStore,
{
    let aggregate = aggregates.mutate(&slot, |current| {
        Ok(current.map_or_else(CompletionAggregate::first, CompletionAggregate::incremented))
    })?;
    Ok((slot, aggregate))
}

/// Counts one completion in the global aggregate.
///
/// With [`AggregatePlacement::Singleton`] the canonical slot is incremented,
/// created with a count of 1 when absent. With
/// [`AggregatePlacement::DualLocation`] the canonical slot is used if it
/// exists, otherwise the caller's own slot, which is created on demand.
/// Returns the slot written and the updated aggregate.
pub fn record_completion<A>(
    aggregates: &A,
    placement: AggregatePlacement,
    caller: &PlayerIdentity,
) -> WorkflowResult<(AggregateSlot, CompletionAggregate)>
where
    A: AggregateStore,
{
    match placement {
        AggregatePlacement::Singleton => increment_or_create(aggregates, AggregateSlot::Canonical),
        AggregatePlacement::DualLocation => {
            if aggregates.exists(&AggregateSlot::Canonical) {
                increment_existing(aggregates, AggregateSlot::Canonical)
            } else {
                increment_or_create(aggregates, AggregateSlot::Player(caller.clone()))
            }
        }
    }
}

// =============================================================================
// Step 3: Restore Session [IO]
// =============================================================================

/// Puts the pre-completion session back after the aggregate rejected the
/// write, so the player can retry the completion.
fn restore_session<S>(
    sessions: &S,
    identity: &PlayerIdentity,
    previous: Option<Session>,
    completed: Session,
    error: WorkflowError,
) -> WorkflowError
where
    S: SessionStore,
{
    let Some(previous) = previous else {
        return error;
    };
    let restored = sessions.mutate(identity, |current| match current {
        Some(current) if *current == completed => Ok(previous),
        _ => Err(WorkflowError::conflict(format!(
            "session of {identity} changed while its completion was being recorded"
        ))),
    });
    match restored {
        Ok(_) => error,
        Err(restore_error) => WorkflowError::conflict(format!(
            "{error}; the completed session could not be restored: {restore_error}"
        )),
    }
}

// =============================================================================
// CompleteGame Workflow
// =============================================================================

/// Records a won game for the player and in the global aggregate.
///
/// `record` counts the completion globally, typically
/// [`record_completion`] bound to a store and placement. The session is
/// validated and updated first, so a rejected call (`NoSession`, `NotWon`,
/// `AlreadyCompleted`) never reaches the aggregate. If `record` fails, the
/// session is put back as it was and the error is returned.
pub fn complete_game<'a, S, F>(
    sessions: &'a S,
    record: F,
) -> impl Fn(CompleteGameCommand) -> WorkflowResult<CompletionReceipt> + 'a
where
    S: SessionStore,
    F: Fn(&PlayerIdentity) -> WorkflowResult<(AggregateSlot, CompletionAggregate)> + 'a,
{
    move |command| {
        let identity = command.identity();
        let mut previous = None;
        let session = sessions.mutate(identity, |current| {
            previous = current.copied();
            apply_completion(identity, current)
        })?;

        pipe!(
            record(identity),
            |recorded: WorkflowResult<(AggregateSlot, CompletionAggregate)>| {
                recorded.map_err(|error| {
                    restore_session(sessions, identity, previous, session, error)
                })
            },
            |recorded: WorkflowResult<(AggregateSlot, CompletionAggregate)>| {
                recorded.map(|(slot, aggregate)| CompletionReceipt {
                    session,
                    slot,
                    aggregate,
                })
            }
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
