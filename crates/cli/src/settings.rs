use std::env;

use pig_infrastructure::errors::InfraError;

pub const PLAYERS_KEY: &str = "PIG_PLAYERS";
pub const GAMES_PER_PLAYER_KEY: &str = "PIG_GAMES_PER_PLAYER";
pub const HOLD_AT_KEY: &str = "PIG_HOLD_AT";

// =============================================================================
// SimulationSettings
// =============================================================================

/// How many simulated players play how many games, and when they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    pub players: usize,
    pub games_per_player: u64,
    /// Turn score at which a simulated player banks.
    pub hold_at: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            players: 4,
            games_per_player: 3,
            hold_at: 20,
        }
    }
}

impl SimulationSettings {
    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] for a value that is not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] for a value that is not a
    /// non-negative integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InfraError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            players: parse_or(&lookup, PLAYERS_KEY, defaults.players)?,
            games_per_player: parse_or(&lookup, GAMES_PER_PLAYER_KEY, defaults.games_per_player)?,
            hold_at: parse_or(&lookup, HOLD_AT_KEY, defaults.hold_at)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, InfraError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|error| InfraError::configuration(key, format!("'{value}': {error}"))),
        None => Ok(default),
    }
}
