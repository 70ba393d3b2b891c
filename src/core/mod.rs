//! Core engine types: RNG, configuration, errors.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState, UniformSource};
pub use config::{GamesConfig, DEFAULT_DIE_SIDES, DEFAULT_SEED};
pub use error::{GamesError, SetupError};
