//! Simulation driver for the Pig dice game
//!
//! Plays scripted players against a shared [`pig_providers::GameEngine`]
//! and summarises the outcome.

pub mod settings;
pub mod simulation;
