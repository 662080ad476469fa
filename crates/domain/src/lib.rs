//! Domain layer for the Pig dice game
//!
//! This crate contains the per-player session state machine, the dice
//! value type and the completion statistics record. All transitions are
//! implemented as pure functions that return new values; nothing here
//! performs I/O.

pub mod common;
pub mod session;
pub mod statistics;
