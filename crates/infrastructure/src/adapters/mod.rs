pub mod memory;
pub mod random;

// Re-export adapters for convenience
pub use memory::{InMemoryAggregateStore, InMemorySessionStore, InMemoryStore};
pub use random::{SeededDiceRoller, SystemDiceRoller};
