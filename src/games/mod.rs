//! The games driver.
//!
//! `HungerGames` owns the duel engine and runs rounds until the games reach
//! a terminal state:
//! - every district has been eliminated
//! - no valid pair can be selected
//! - the configured round cap is hit

mod driver;

pub use driver::{GamesSummary, HungerGames, Round, StopReason};
