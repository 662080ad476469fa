//! Runtime configuration read from the environment.
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `PIG_AGGREGATE_PLACEMENT` | `singleton` or `dual-location` | `singleton` |
//! | `PIG_DICE_SEED` | seed for deterministic dice | unset (OS entropy) |

use std::env;

use pig_domain::statistics::AggregatePlacement;

use crate::errors::InfraError;

pub const AGGREGATE_PLACEMENT_KEY: &str = "PIG_AGGREGATE_PLACEMENT";
pub const DICE_SEED_KEY: &str = "PIG_DICE_SEED";

// =============================================================================
// PigConfig
// =============================================================================

/// Configuration for assembling a game engine.
///
/// # Examples
///
/// ```
/// use pig_domain::statistics::AggregatePlacement;
/// use pig_infrastructure::config::PigConfig;
///
/// let config = PigConfig::default()
///     .with_placement(AggregatePlacement::DualLocation)
///     .with_dice_seed(42);
///
/// assert_eq!(config.placement, AggregatePlacement::DualLocation);
/// assert_eq!(config.dice_seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PigConfig {
    /// Where the global completion aggregate lives.
    pub placement: AggregatePlacement,

    /// Seed for deterministic dice; `None` draws from OS entropy.
    pub dice_seed: Option<u64>,
}

// =============================================================================
// Builder Methods
// =============================================================================

impl PigConfig {
    #[must_use]
    pub const fn with_placement(mut self, placement: AggregatePlacement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub const fn with_dice_seed(mut self, seed: u64) -> Self {
        self.dice_seed = Some(seed);
        self
    }
}

// =============================================================================
// Loading
// =============================================================================

impl PigConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// Unset and blank variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InfraError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let placement = read(AGGREGATE_PLACEMENT_KEY)
            .map(|value| {
                value.parse::<AggregatePlacement>().map_err(|error| {
                    InfraError::configuration(AGGREGATE_PLACEMENT_KEY, error.to_string())
                })
            })
            .transpose()?
            .unwrap_or_default();

        let dice_seed = read(DICE_SEED_KEY)
            .map(|value| {
                value.trim().parse::<u64>().map_err(|error| {
                    InfraError::configuration(DICE_SEED_KEY, format!("'{value}': {error}"))
                })
            })
            .transpose()?;

        tracing::debug!(%placement, ?dice_seed, "configuration loaded");
        Ok(Self {
            placement,
            dice_seed,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<PigConfig, InfraError> {
        let variables: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        PigConfig::from_lookup(|key| variables.get(key).cloned())
    }

    mod defaults {
        use super::*;

        #[rstest]
        fn empty_environment_gives_default() {
            assert_eq!(load(&[]).unwrap(), PigConfig::default());
        }

        #[rstest]
        fn default_is_singleton_without_seed() {
            let config = PigConfig::default();

            assert_eq!(config.placement, AggregatePlacement::Singleton);
            assert_eq!(config.dice_seed, None);
        }

        #[rstest]
        fn blank_values_are_ignored() {
            let config = load(&[(AGGREGATE_PLACEMENT_KEY, "  "), (DICE_SEED_KEY, "")]).unwrap();

            assert_eq!(config, PigConfig::default());
        }
    }

    mod parsing {
        use super::*;

        #[rstest]
        #[case("singleton", AggregatePlacement::Singleton)]
        #[case("dual-location", AggregatePlacement::DualLocation)]
        #[case("LEGACY", AggregatePlacement::DualLocation)]
        fn reads_placement(#[case] raw: &str, #[case] expected: AggregatePlacement) {
            let config = load(&[(AGGREGATE_PLACEMENT_KEY, raw)]).unwrap();

            assert_eq!(config.placement, expected);
        }

        #[rstest]
        fn reads_seed() {
            let config = load(&[(DICE_SEED_KEY, " 1234 ")]).unwrap();

            assert_eq!(config.dice_seed, Some(1234));
        }

        #[rstest]
        #[case(AGGREGATE_PLACEMENT_KEY, "everywhere")]
        #[case(DICE_SEED_KEY, "-1")]
        #[case(DICE_SEED_KEY, "abc")]
        fn rejects_invalid_values(#[case] key: &str, #[case] raw: &str) {
            let error = load(&[(key, raw)]).unwrap_err();

            assert!(error.is_configuration());
            assert!(matches!(error, InfraError::Configuration { key: ref failed, .. } if failed == key));
        }
    }
}
