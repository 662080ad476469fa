use lambars::typeclass::{Monoid, Semigroup};
use serde::{Deserialize, Serialize};

// =============================================================================
// CompletionAggregate
// =============================================================================

/// Global count of completed games across all players.
///
/// The count only grows; nothing ever resets it. Counts combine by
/// (saturating) addition, which makes the aggregate a [`Monoid`] with the
/// empty count as identity.
///
/// # Examples
///
/// ```
/// use lambars::typeclass::{Monoid, Semigroup};
/// use pig_domain::statistics::CompletionAggregate;
///
/// let aggregate = CompletionAggregate::first().incremented();
/// assert_eq!(aggregate.total_completions(), 2);
///
/// let merged = CompletionAggregate::combine_all([aggregate, CompletionAggregate::first()]);
/// assert_eq!(merged.total_completions(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CompletionAggregate {
    total_completions: u64,
}

impl CompletionAggregate {
    /// Creates an aggregate with no completions recorded.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_completions: 0,
        }
    }

    /// Creates an aggregate holding its first completion.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            total_completions: 1,
        }
    }

    #[must_use]
    pub const fn total_completions(&self) -> u64 {
        self.total_completions
    }

    /// Adds one completion.
    #[must_use]
    pub fn incremented(&self) -> Self {
        self.combine(Self::first())
    }
}

impl Semigroup for CompletionAggregate {
    /// Adds the two counts, saturating at `u64::MAX`.
    fn combine(self, other: Self) -> Self {
        Self {
            total_completions: self.total_completions.saturating_add(other.total_completions),
        }
    }
}

impl Monoid for CompletionAggregate {
    fn empty() -> Self {
        Self {
            total_completions: 0,
        }
    }
}
