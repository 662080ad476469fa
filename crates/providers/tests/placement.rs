//! Where the global completion count lives under each placement.

mod common;

use common::{engine_with, player, win};
use pig_domain::statistics::{AggregatePlacement, AggregateSlot, ExecutionContext};
use rstest::rstest;

// =============================================================================
// Singleton
// =============================================================================

#[rstest]
fn singleton_counts_every_player_in_one_place() {
    let engine = engine_with(AggregatePlacement::Singleton);
    let players = [player("alice"), player("bob"), player("carol")];

    for identity in &players {
        win(&engine, identity);
        let receipt = engine.complete(identity).unwrap();
        assert_eq!(receipt.slot(), &AggregateSlot::Canonical);
    }

    assert_eq!(engine.global_completions(), 3);
    for identity in &players {
        assert_eq!(engine.statistics().discover_completions(identity), 3);
    }
}

#[rstest]
fn singleton_initialisation_ignores_restricted_context() {
    let engine = engine_with(AggregatePlacement::Singleton);
    let alice = player("alice");

    let (slot, aggregate) = engine
        .statistics()
        .initialize(&alice, ExecutionContext::Restricted)
        .unwrap();

    assert_eq!(slot, AggregateSlot::Canonical);
    assert_eq!(aggregate.total_completions(), 0);
    assert_eq!(engine.global_completions(), 0);
}

// =============================================================================
// DualLocation
// =============================================================================

#[rstest]
fn dual_location_uses_canonical_slot_once_initialised() {
    let engine = engine_with(AggregatePlacement::DualLocation);
    let alice = player("alice");
    engine
        .statistics()
        .initialize(&alice, ExecutionContext::ModuleOwned)
        .unwrap();

    win(&engine, &alice);
    let receipt = engine.complete(&alice).unwrap();

    assert_eq!(receipt.slot(), &AggregateSlot::Canonical);
    assert_eq!(engine.global_completions(), 1);
}

#[rstest]
fn dual_location_without_canonical_parks_count_at_caller() {
    let engine = engine_with(AggregatePlacement::DualLocation);
    let alice = player("alice");

    win(&engine, &alice);
    let receipt = engine.complete(&alice).unwrap();

    assert_eq!(receipt.slot(), &AggregateSlot::Player(alice.clone()));
    assert_eq!(receipt.aggregate().total_completions(), 1);
    // The plain read only looks at the canonical slot.
    assert_eq!(engine.global_completions(), 0);
    assert_eq!(engine.statistics().discover_completions(&alice), 1);
}

#[rstest]
fn dual_location_restricted_initialisation_is_found_by_its_owner() {
    let engine = engine_with(AggregatePlacement::DualLocation);
    let alice = player("alice");
    let bob = player("bob");
    engine
        .statistics()
        .initialize(&alice, ExecutionContext::Restricted)
        .unwrap();

    win(&engine, &alice);
    engine.complete(&alice).unwrap();
    win(&engine, &bob);
    let receipt = engine.complete(&bob).unwrap();

    assert_eq!(engine.statistics().discover_completions(&alice), 1);
    assert_eq!(receipt.slot(), &AggregateSlot::Player(bob.clone()));
    assert_eq!(engine.statistics().discover_completions(&bob), 1);
    assert_eq!(engine.global_completions(), 0);
}

#[rstest]
fn initialisation_is_idempotent() {
    let engine = engine_with(AggregatePlacement::DualLocation);
    let alice = player("alice");
    let statistics = engine.statistics();
    statistics
        .initialize(&alice, ExecutionContext::ModuleOwned)
        .unwrap();
    win(&engine, &alice);
    engine.complete(&alice).unwrap();

    let (slot, aggregate) = statistics
        .initialize(&alice, ExecutionContext::ModuleOwned)
        .unwrap();

    assert!(slot.is_canonical());
    assert_eq!(aggregate.total_completions(), 1);
}
