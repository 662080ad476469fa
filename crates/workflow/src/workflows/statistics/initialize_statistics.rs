use pig_domain::statistics::{AggregatePlacement, AggregateSlot, CompletionAggregate};

use super::InitializeStatisticsCommand;
use crate::errors::WorkflowError;
use crate::ports::{AggregateStore, WorkflowResult};

/// Creates an empty global aggregate at the slot the placement assigns.
///
/// Running it again is harmless: an aggregate already present at the slot is
/// returned unchanged.
pub fn initialize_statistics<'a, A>(
    aggregates: &'a A,
    placement: AggregatePlacement,
) -> impl Fn(InitializeStatisticsCommand) -> WorkflowResult<(AggregateSlot, CompletionAggregate)> + 'a
where
    A: AggregateStore,
{
    move |command| {
        let slot = placement.initialization_slot(command.caller(), command.context());
        match aggregates.create(&slot, CompletionAggregate::empty()) {
            Ok(()) => Ok((slot, CompletionAggregate::empty())),
            Err(error) if error.is_conflict() => {
                let existing = aggregates.get(&slot).ok_or_else(|| {
                    WorkflowError::not_found("CompletionAggregate", slot.to_string())
                })?;
                Ok((slot, existing))
            }
            Err(error) => Err(error),
        }
    }
}
