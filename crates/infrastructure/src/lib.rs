//! Infrastructure layer for the Pig dice game
//!
//! This crate provides concrete implementations of the ports defined in
//! the workflow layer: an in-memory keyed store, dice rollers and the
//! environment-driven configuration.

pub mod adapters;
pub mod config;
pub mod errors;
