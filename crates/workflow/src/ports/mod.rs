use std::fmt;
use std::hash::Hash;

use pig_domain::session::{DieFace, PlayerIdentity, Session};
use pig_domain::statistics::{AggregateSlot, CompletionAggregate};

// =============================================================================
// Type Aliases for Workflow Results
// =============================================================================

pub type WorkflowResult<T> = Result<T, crate::errors::WorkflowError>;

// =============================================================================
// KeyedStore
// =============================================================================

/// A keyed record store with atomic read-modify-write per key.
///
/// Implementations must apply [`mutate`](KeyedStore::mutate) atomically with
/// respect to every other operation on the same key: concurrent mutations
/// of one key are serialized and none is lost.
pub trait KeyedStore: Clone + Send + Sync + 'static {
    type Key: Clone + Eq + Hash + fmt::Display + Send + Sync + 'static;
    type Record: Clone + Send + Sync + 'static;

    fn exists(&self, key: &Self::Key) -> bool;

    fn get(&self, key: &Self::Key) -> Option<Self::Record>;

    /// Inserts a record under a free key.
    ///
    /// Fails with [`WorkflowError::Conflict`](crate::errors::WorkflowError::Conflict)
    /// if the key is taken; the existing record is left untouched.
    fn create(&self, key: &Self::Key, record: Self::Record) -> WorkflowResult<()>;

    /// Runs `mutation` against the current record (`None` when absent) while
    /// holding the key exclusively.
    ///
    /// `Ok` commits the returned record and hands it back. `Err` commits
    /// nothing.
    fn mutate<F>(&self, key: &Self::Key, mutation: F) -> WorkflowResult<Self::Record>
    where
        F: FnOnce(Option<&Self::Record>) -> WorkflowResult<Self::Record>;
}

// =============================================================================
// SessionStore / AggregateStore
// =============================================================================

/// Store of per-player sessions.
pub trait SessionStore: KeyedStore<Key = PlayerIdentity, Record = Session> {}

impl<T> SessionStore for T where T: KeyedStore<Key = PlayerIdentity, Record = Session> {}

/// Store of completion aggregates.
pub trait AggregateStore: KeyedStore<Key = AggregateSlot, Record = CompletionAggregate> {}

impl<T> AggregateStore for T where T: KeyedStore<Key = AggregateSlot, Record = CompletionAggregate> {}

// =============================================================================
// DiceRoller
// =============================================================================

/// Source of fair die rolls.
pub trait DiceRoller: Clone + Send + Sync + 'static {
    /// Draws one face, uniformly distributed over `1..=6`.
    fn roll_die(&self) -> DieFace;
}

// =============================================================================
// Tests
// =============================================================================
