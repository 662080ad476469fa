mod aggregate;
mod slot;

// Re-export aggregate
pub use aggregate::CompletionAggregate;

// Re-export slot and placement types
pub use slot::{AggregatePlacement, AggregateSlot, ExecutionContext};
