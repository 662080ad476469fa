//! Provider layer for the Pig dice game
//!
//! Facades that own the adapters behind `Arc`s and expose the game as a
//! small method API. Everything here is cloneable and can be shared across
//! threads.

pub mod engine;
pub mod statistics;

pub use engine::GameEngine;
pub use statistics::StatsAggregator;
