//! Where the global completion aggregate lives.
//!
//! The aggregate normally sits at a single canonical slot. Deployments that
//! need compatibility with the dual-location layout may also find it parked at
//! the slot of the player that initialised it; [`AggregatePlacement`] selects
//! which of the two layouts is in force.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ValidationError;
use crate::session::PlayerIdentity;

// =============================================================================
// AggregateSlot
// =============================================================================

/// Storage slot of a [`CompletionAggregate`](super::CompletionAggregate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AggregateSlot {
    /// The well-known module-owned slot.
    Canonical,
    /// The fallback slot owned by one player.
    Player(PlayerIdentity),
}

impl AggregateSlot {
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        matches!(self, Self::Canonical)
    }
}

impl fmt::Display for AggregateSlot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical => write!(formatter, "canonical"),
            Self::Player(identity) => write!(formatter, "player:{}", identity),
        }
    }
}

// =============================================================================
// AggregatePlacement
// =============================================================================

/// Layout of the global aggregate, fixed when the statistics service is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregatePlacement {
    /// The aggregate only ever lives at [`AggregateSlot::Canonical`].
    #[default]
    Singleton,
    /// Search the canonical slot first, then the caller's own slot, creating
    /// it at the caller's slot when neither exists.
    DualLocation,
}

impl AggregatePlacement {
    /// Returns the slot an initialisation by `caller` in `context` targets.
    ///
    /// # Examples
    ///
    /// ```
    /// use pig_domain::session::PlayerIdentity;
    /// use pig_domain::statistics::{AggregatePlacement, AggregateSlot, ExecutionContext};
    ///
    /// let caller = PlayerIdentity::new("alice").unwrap();
    ///
    /// let slot = AggregatePlacement::DualLocation
    ///     .initialization_slot(&caller, ExecutionContext::Restricted);
    /// assert_eq!(slot, AggregateSlot::Player(caller.clone()));
    ///
    /// let slot = AggregatePlacement::Singleton
    ///     .initialization_slot(&caller, ExecutionContext::Restricted);
    /// assert_eq!(slot, AggregateSlot::Canonical);
    /// ```
    #[must_use]
    pub fn initialization_slot(
        &self,
        caller: &PlayerIdentity,
        context: ExecutionContext,
    ) -> AggregateSlot {
        match (self, context) {
            (Self::DualLocation, ExecutionContext::Restricted) => {
                AggregateSlot::Player(caller.clone())
            }
            _ => AggregateSlot::Canonical,
        }
    }
}

impl fmt::Display for AggregatePlacement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Singleton => "singleton",
            Self::DualLocation => "dual-location",
        };
        write!(formatter, "{}", text)
    }
}

impl FromStr for AggregatePlacement {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().to_ascii_lowercase().as_str() {
            "singleton" => Ok(Self::Singleton),
            "dual-location" | "dual_location" | "dual" | "legacy" => Ok(Self::DualLocation),
            _ => Err(ValidationError::invalid_format(
                "aggregate_placement",
                "'singleton' or 'dual-location'",
            )),
        }
    }
}

// =============================================================================
// ExecutionContext
// =============================================================================

/// Context a statistics initialisation runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionContext {
    /// The module may write its own canonical slot.
    #[default]
    ModuleOwned,
    /// Only the caller's own slot is writable.
    Restricted,
}

// =============================================================================
// Tests
// =============================================================================
