//! Dice roller adapters.
//!
//! This module provides implementations of the [`DiceRoller`] port:
//!
//! - [`SystemDiceRoller`]: draws from the thread-local OS-seeded generator
//! - [`SeededDiceRoller`]: ChaCha20 stream from a fixed seed, for replayable
//!   simulations and tests
//!
//! # Examples
//!
//! ```
//! use pig_infrastructure::adapters::SeededDiceRoller;
//! use pig_workflow::DiceRoller;
//!
//! let first = SeededDiceRoller::new(7);
//! let second = SeededDiceRoller::new(7);
//! assert_eq!(first.roll_die(), second.roll_die());
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use pig_domain::session::DieFace;
use pig_workflow::DiceRoller;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn draw_face<G: Rng + ?Sized>(generator: &mut G) -> DieFace {
    DieFace::ALL[generator.gen_range(0..DieFace::ALL.len())]
}

// =============================================================================
// SystemDiceRoller
// =============================================================================

/// Fair die backed by [`rand::thread_rng`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDiceRoller;

impl SystemDiceRoller {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiceRoller for SystemDiceRoller {
    fn roll_die(&self) -> DieFace {
        draw_face(&mut rand::thread_rng())
    }
}

// =============================================================================
// SeededDiceRoller
// =============================================================================

/// Fair die with a reproducible sequence of faces.
///
/// Clones share one generator, so the sequence is consumed in call order
/// across all clones.
#[derive(Clone, Debug)]
pub struct SeededDiceRoller {
    seed: u64,
    generator: Arc<Mutex<ChaCha20Rng>>,
}

impl SeededDiceRoller {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            generator: Arc::new(Mutex::new(ChaCha20Rng::seed_from_u64(seed))),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceRoller for SeededDiceRoller {
    fn roll_die(&self) -> DieFace {
        draw_face(&mut *self.generator.lock())
    }
}

// =============================================================================
// Tests
// =============================================================================
