//! Workflow layer for the Pig dice game
//!
//! This crate defines the game's use cases as workflows over abstract
//! ports (traits). It contains no concrete storage or randomness; those
//! are supplied by the infrastructure layer.

pub mod errors;
pub mod ports;
pub mod workflows;

pub use errors::WorkflowError;
pub use ports::{AggregateStore, DiceRoller, KeyedStore, SessionStore, WorkflowResult};
pub use workflows::session::{
    HoldTurnCommand, ResetGameCommand, RollDiceCommand, hold_turn, reset_game, roll_dice,
};
pub use workflows::statistics::{
    CompleteGameCommand, CompletionReceipt, InitializeStatisticsCommand, complete_game,
    initialize_statistics, record_completion,
};
pub use workflows::views;
