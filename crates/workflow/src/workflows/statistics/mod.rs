mod commands;
mod complete_game;
mod initialize_statistics;

// Re-export command types
pub use commands::{CompleteGameCommand, InitializeStatisticsCommand};

// Re-export workflow functions
pub use complete_game::{CompletionReceipt, complete_game, record_completion};
pub use initialize_statistics::initialize_statistics;
