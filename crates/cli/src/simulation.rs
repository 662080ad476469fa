//! Simulated players driving a shared engine.

use pig_domain::session::{PlayerIdentity, TARGET_SCORE};
use pig_domain::statistics::{AggregatePlacement, ExecutionContext};
use pig_providers::GameEngine;
use pig_workflow::{AggregateStore, DiceRoller, SessionStore, WorkflowResult};
use serde::Serialize;

use crate::settings::SimulationSettings;

// =============================================================================
// Summary Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub identity: String,
    pub games_played: u64,
    pub rolls: u64,
    pub busts: u64,
    pub holds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub placement: AggregatePlacement,
    pub hold_at: u64,
    pub players: Vec<PlayerSummary>,
    /// Count visible at the canonical slot.
    pub global_completions: u64,
    /// Count found through the completion search, from the first player's view.
    pub discovered_completions: u64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    rolls: u64,
    busts: u64,
    holds: u64,
}

// =============================================================================
// Strategy
// =============================================================================

/// Holds once the turn reaches the threshold or would already win the game.
const fn should_hold(turn_score: u64, total_score: u64, hold_at: u64) -> bool {
    turn_score >= hold_at || total_score.saturating_add(turn_score) >= TARGET_SCORE
}

fn play_game<S, A, R>(
    engine: &GameEngine<S, A, R>,
    identity: &PlayerIdentity,
    hold_at: u64,
    tally: &mut Tally,
) -> WorkflowResult<()>
where
    S: SessionStore,
    A: AggregateStore,
    R: DiceRoller,
{
    loop {
        let session = engine.roll(identity)?;
        tally.rolls += 1;
        if session.is_bust() {
            tally.busts += 1;
            continue;
        }
        if should_hold(session.turn_score(), session.total_score(), hold_at) {
            tally.holds += 1;
            if engine.hold(identity)?.game_over() {
                break;
            }
        }
    }
    engine.complete(identity)?;
    engine.reset(identity)?;
    Ok(())
}

// =============================================================================
// Simulation
// =============================================================================

/// Plays `games_per_player` full games for each identity, one player after
/// another, and reports the resulting counters.
///
/// # Errors
///
/// Propagates any rejected engine call.
pub fn simulate<S, A, R>(
    engine: &GameEngine<S, A, R>,
    identities: &[PlayerIdentity],
    settings: SimulationSettings,
) -> WorkflowResult<SimulationSummary>
where
    S: SessionStore,
    A: AggregateStore,
    R: DiceRoller,
{
    if let Some(first) = identities.first() {
        engine
            .statistics()
            .initialize(first, ExecutionContext::ModuleOwned)?;
    }

    let players = identities
        .iter()
        .map(|identity| -> WorkflowResult<PlayerSummary> {
            let mut tally = Tally::default();
            for game in 0..settings.games_per_player {
                play_game(engine, identity, settings.hold_at, &mut tally)?;
                tracing::debug!(identity = %identity, game, "simulated game finished");
            }
            Ok(PlayerSummary {
                identity: identity.to_string(),
                games_played: engine.user_completions(identity),
                rolls: tally.rolls,
                busts: tally.busts,
                holds: tally.holds,
            })
        })
        .collect::<WorkflowResult<Vec<_>>>()?;

    let discovered_completions = identities
        .first()
        .map_or(0, |first| engine.statistics().discover_completions(first));

    Ok(SimulationSummary {
        placement: engine.statistics().placement(),
        hold_at: settings.hold_at,
        players,
        global_completions: engine.global_completions(),
        discovered_completions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pig_infrastructure::adapters::{
        InMemoryAggregateStore, InMemorySessionStore, SeededDiceRoller,
    };
    use pig_providers::StatsAggregator;
    use rstest::rstest;
    use std::sync::Arc;

    type Engine = GameEngine<InMemorySessionStore, InMemoryAggregateStore, SeededDiceRoller>;

    fn engine(placement: AggregatePlacement, seed: u64) -> Engine {
        GameEngine::new(
            Arc::new(InMemorySessionStore::new()),
            StatsAggregator::new(Arc::new(InMemoryAggregateStore::new()), placement),
            Arc::new(SeededDiceRoller::new(seed)),
        )
    }

    fn identities(count: usize) -> Vec<PlayerIdentity> {
        (0..count)
            .map(|index| PlayerIdentity::new(format!("sim-{index}")).unwrap())
            .collect()
    }

    fn settings(games_per_player: u64, hold_at: u64) -> SimulationSettings {
        SimulationSettings {
            players: 0,
            games_per_player,
            hold_at,
        }
    }

    #[rstest]
    #[case(0, 20, false)]
    #[case(20, 0, true)]
    #[case(5, 45, true)]
    #[case(4, 45, false)]
    fn hold_strategy(#[case] turn: u64, #[case] total: u64, #[case] expected: bool) {
        assert_eq!(should_hold(turn, total, 20), expected);
    }

    #[rstest]
    #[case(AggregatePlacement::Singleton)]
    #[case(AggregatePlacement::DualLocation)]
    fn every_game_is_counted(#[case] placement: AggregatePlacement) {
        let engine = engine(placement, 3);
        let players = identities(3);

        let summary = simulate(&engine, &players, settings(2, 20)).unwrap();

        assert_eq!(summary.placement, placement);
        assert_eq!(summary.global_completions, 6);
        assert_eq!(summary.discovered_completions, 6);
        assert!(summary.players.iter().all(|player| player.games_played == 2));
        assert!(summary.players.iter().all(|player| player.rolls >= player.busts + player.holds));
    }

    #[rstest]
    fn sessions_end_reset() {
        let engine = engine(AggregatePlacement::Singleton, 5);
        let players = identities(1);

        simulate(&engine, &players, settings(1, 10)).unwrap();

        assert_eq!(engine.total_score(&players[0]), 0);
        assert!(!engine.game_over(&players[0]));
    }

    #[rstest]
    fn same_seed_gives_same_summary() {
        let players = identities(2);

        let first = simulate(&engine(AggregatePlacement::Singleton, 77), &players, settings(2, 20));
        let second = simulate(&engine(AggregatePlacement::Singleton, 77), &players, settings(2, 20));

        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[rstest]
    fn no_players_is_an_empty_summary() {
        let summary =
            simulate(&engine(AggregatePlacement::Singleton, 1), &[], settings(3, 20)).unwrap();

        assert!(summary.players.is_empty());
        assert_eq!(summary.global_completions, 0);
    }

    #[rstest]
    fn summary_serializes_placement_by_name() {
        let summary =
            simulate(&engine(AggregatePlacement::DualLocation, 1), &identities(1), settings(1, 20))
                .unwrap();

        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["placement"], "dual-location");
        assert_eq!(json["players"][0]["identity"], "sim-0");
    }
}
