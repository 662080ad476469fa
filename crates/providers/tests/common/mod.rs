//! Shared engine fixtures for the provider integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pig_domain::session::PlayerIdentity;
use pig_domain::statistics::AggregatePlacement;
use pig_infrastructure::adapters::{InMemoryAggregateStore, InMemorySessionStore, SeededDiceRoller};
use pig_providers::{GameEngine, StatsAggregator};

pub type TestEngine = GameEngine<InMemorySessionStore, InMemoryAggregateStore, SeededDiceRoller>;

pub fn engine_with(placement: AggregatePlacement) -> TestEngine {
    GameEngine::new(
        Arc::new(InMemorySessionStore::new()),
        StatsAggregator::new(Arc::new(InMemoryAggregateStore::new()), placement),
        Arc::new(SeededDiceRoller::new(42)),
    )
}

pub fn player(name: &str) -> PlayerIdentity {
    PlayerIdentity::new(name).expect("valid test identity")
}

/// Drives a fresh session to exactly 54 banked points.
pub fn win(engine: &TestEngine, identity: &PlayerIdentity) {
    for _ in 0..9 {
        engine.roll_with_face(identity, 6).expect("roll");
    }
    let session = engine.hold(identity).expect("hold");
    assert!(session.game_over());
}
