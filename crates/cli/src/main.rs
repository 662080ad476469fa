use std::sync::Arc;

use pig_cli::settings::SimulationSettings;
use pig_cli::simulation::simulate;
use pig_domain::session::PlayerIdentity;
use pig_infrastructure::adapters::{
    InMemoryAggregateStore, InMemorySessionStore, SeededDiceRoller, SystemDiceRoller,
};
use pig_infrastructure::config::PigConfig;
use pig_providers::{GameEngine, StatsAggregator};
use pig_workflow::DiceRoller;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = PigConfig::from_env()?;
    let settings = SimulationSettings::from_env()?;
    tracing::info!(
        placement = %config.placement,
        dice_seed = ?config.dice_seed,
        players = settings.players,
        games_per_player = settings.games_per_player,
        hold_at = settings.hold_at,
        "Pig - starting simulation"
    );

    match config.dice_seed {
        Some(seed) => run(config, settings, SeededDiceRoller::new(seed)),
        None => run(config, settings, SystemDiceRoller::new()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pig_cli=info,pig_providers=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

/// Seeded runs get stable player names so their output can be compared.
fn player_identities(config: &PigConfig, count: usize) -> anyhow::Result<Vec<PlayerIdentity>> {
    (0..count)
        .map(|index| match config.dice_seed {
            Some(_) => PlayerIdentity::new(format!("player-{index}")).map_err(anyhow::Error::from),
            None => Ok(PlayerIdentity::generate()),
        })
        .collect()
}

fn run<R: DiceRoller>(config: PigConfig, settings: SimulationSettings, dice: R) -> anyhow::Result<()> {
    let sessions = Arc::new(InMemorySessionStore::new());
    let aggregates = Arc::new(InMemoryAggregateStore::new());
    let engine = GameEngine::new(
        Arc::clone(&sessions),
        StatsAggregator::new(Arc::clone(&aggregates), config.placement),
        Arc::new(dice),
    );

    let identities = player_identities(&config, settings.players)?;
    let summary = simulate(&engine, &identities, settings)
        .map_err(|error| anyhow::anyhow!("simulation failed: {error}"))?;

    tracing::info!(
        global_completions = summary.global_completions,
        discovered_completions = summary.discovered_completions,
        "simulation finished"
    );

    let report = serde_json::json!({
        "summary": serde_json::to_value(&summary)?,
        "sessions": sessions.export_json()?,
        "aggregates": aggregates.export_json()?,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
