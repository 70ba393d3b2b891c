//! Games configuration.
//!
//! The driver is configured at startup by a `GamesConfig`:
//! - `seed`: fixes every random draw of a run
//! - `duel_die_sides`: the roll added to effectiveness in a duel
//! - `max_rounds`: optional cap on the number of duels a run may fight

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 2023;

/// Die size used when none is configured.
pub const DEFAULT_DIE_SIDES: usize = 10;

/// Complete games configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesConfig {
    /// Seed for the process-wide generator.
    pub seed: u64,

    /// Each duelist rolls `1..=duel_die_sides` on top of their effectiveness.
    pub duel_die_sides: usize,

    /// Stop the run after this many duels. `None` runs to a terminal state.
    pub max_rounds: Option<u32>,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            duel_die_sides: DEFAULT_DIE_SIDES,
            max_rounds: None,
        }
    }
}

impl GamesConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generator seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the duel die size.
    #[must_use]
    pub fn with_die_sides(mut self, sides: usize) -> Self {
        assert!(sides > 0, "Duel die must have at least 1 side");
        self.duel_die_sides = sides;
        self
    }

    /// Cap the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let config: Self = serde_json::from_str(json)?;
        if config.duel_die_sides == 0 {
            return Err(SetupError::InvalidConfig(
                "duel_die_sides must be positive".into(),
            ));
        }
        Ok(config)
    }
}
