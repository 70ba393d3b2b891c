//! # district-games
//!
//! An elimination tournament among districts, run over a binary search
//! tree keyed by district id.
//!
//! ## Design Principles
//!
//! 1. **Reproducible**: Every random draw goes through one seeded
//!    generator that is injected at construction. Same input and seed,
//!    same run.
//!
//! 2. **Pre-order Is Observable**: Dueler selection walks the tree in
//!    pre-order and takes the first match. The tree is never rebalanced,
//!    so insertion order shapes every later selection.
//!
//! 3. **Single Owner**: A district lives in the staging list or in the
//!    tree, never both. A person lives in one population or in one duel
//!    pair, never both.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `people`: Persons and districts
//! - `registry`: Arena BST and the staging list
//! - `duel`: Dueler selection, duel resolution, cascade elimination
//! - `setup`: Reading districts and people from input
//! - `games`: The round-by-round driver

pub mod core;
pub mod people;
pub mod registry;
pub mod duel;
pub mod setup;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, GamesConfig, GamesError, SetupError, UniformSource};

pub use crate::people::{District, DistrictId, Parity, Person, PersonId};

pub use crate::registry::{DistrictRegistry, DistrictTree, NodeId, TreeNode};

pub use crate::duel::{DuelEngine, DuelOutcome, DuelPair, DuelReport};

pub use crate::setup::{Panem, PersonRecord};

pub use crate::games::{GamesSummary, HungerGames, Round, StopReason};
