use std::sync::Arc;

use pig_domain::session::PlayerIdentity;
use pig_domain::statistics::{
    AggregatePlacement, AggregateSlot, CompletionAggregate, ExecutionContext,
};
use pig_workflow::{
    AggregateStore, InitializeStatisticsCommand, WorkflowResult, initialize_statistics,
    record_completion, views,
};

// =============================================================================
// StatsAggregator
// =============================================================================

/// Owner of the global completion count.
///
/// The placement is fixed at construction and decides which slot every
/// write goes to.
pub struct StatsAggregator<A>
where
    A: AggregateStore,
{
    store: Arc<A>,
    placement: AggregatePlacement,
}

impl<A> Clone for StatsAggregator<A>
where
    A: AggregateStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            placement: self.placement,
        }
    }
}

impl<A> StatsAggregator<A>
where
    A: AggregateStore,
{
    pub fn new(store: Arc<A>, placement: AggregatePlacement) -> Self {
        Self { store, placement }
    }

    #[must_use]
    pub const fn placement(&self) -> AggregatePlacement {
        self.placement
    }

    /// Creates the empty aggregate if it is not there yet.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn initialize(
        &self,
        caller: &PlayerIdentity,
        context: ExecutionContext,
    ) -> WorkflowResult<(AggregateSlot, CompletionAggregate)> {
        let workflow = initialize_statistics(&*self.store, self.placement);
        let (slot, aggregate) =
            workflow(InitializeStatisticsCommand::new(caller.clone(), context))?;
        tracing::info!(
            caller = %caller,
            %slot,
            total_completions = aggregate.total_completions(),
            "statistics initialised"
        );
        Ok((slot, aggregate))
    }

    /// Counts one completion on behalf of `caller`.
    ///
    /// Only reachable through [`GameEngine::complete`](crate::GameEngine::complete),
    /// which has already checked and completed the caller's session.
    pub(crate) fn record_completion(
        &self,
        caller: &PlayerIdentity,
    ) -> WorkflowResult<(AggregateSlot, CompletionAggregate)> {
        let (slot, aggregate) = record_completion(&*self.store, self.placement, caller)?;
        tracing::debug!(
            caller = %caller,
            %slot,
            total_completions = aggregate.total_completions(),
            "completion recorded"
        );
        Ok((slot, aggregate))
    }

    /// Completions visible at the canonical slot.
    pub fn global_completions(&self) -> u64 {
        views::global_completions(&*self.store)
    }

    /// Completions found by the same search `record_completion` uses.
    pub fn discover_completions(&self, caller: &PlayerIdentity) -> u64 {
        views::discover_completions(&*self.store, self.placement, caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pig_infrastructure::adapters::InMemoryAggregateStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn alice() -> PlayerIdentity {
        PlayerIdentity::new("alice").unwrap()
    }

    fn aggregator(placement: AggregatePlacement) -> StatsAggregator<InMemoryAggregateStore> {
        StatsAggregator::new(Arc::new(InMemoryAggregateStore::new()), placement)
    }

    #[rstest]
    fn placement_is_fixed_at_construction() {
        assert_eq!(
            aggregator(AggregatePlacement::DualLocation).placement(),
            AggregatePlacement::DualLocation
        );
    }

    #[rstest]
    fn clones_share_the_store(alice: PlayerIdentity) {
        let original = aggregator(AggregatePlacement::Singleton);
        let clone = original.clone();

        clone.record_completion(&alice).unwrap();

        assert_eq!(original.global_completions(), 1);
    }

    #[rstest]
    fn restricted_initialisation_is_invisible_globally(alice: PlayerIdentity) {
        let stats = aggregator(AggregatePlacement::DualLocation);

        let (slot, _) = stats.initialize(&alice, ExecutionContext::Restricted).unwrap();
        stats.record_completion(&alice).unwrap();

        assert_eq!(slot, AggregateSlot::Player(alice.clone()));
        assert_eq!(stats.global_completions(), 0);
        assert_eq!(stats.discover_completions(&alice), 1);
    }

    #[rstest]
    fn singleton_keeps_everything_canonical(alice: PlayerIdentity) {
        let stats = aggregator(AggregatePlacement::Singleton);

        stats.initialize(&alice, ExecutionContext::Restricted).unwrap();
        stats.record_completion(&alice).unwrap();

        assert_eq!(stats.global_completions(), 1);
        assert_eq!(stats.discover_completions(&alice), 1);
    }
}
