//! Duels: picking contestants, fighting, and cascading eliminations.

mod pair;
mod engine;

pub use pair::DuelPair;
pub use engine::{DuelEngine, DuelOutcome, DuelReport};
