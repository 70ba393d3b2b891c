//! Error types.
//!
//! Registry misses are recoverable and reported as `GamesError`.
//! Malformed setup input is reported as `SetupError`.

use thiserror::Error;

use crate::people::{DistrictId, Person};

/// Errors raised by the registry and the duel engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GamesError {
    #[error("District {0} is not in the game")]
    DistrictNotFound(DistrictId),

    #[error("District {0} is not in the staging list")]
    NotStaged(DistrictId),

    /// A contestant's district left the games before they could go back.
    /// The contestant is handed back here.
    #[error("{0} has no district to return to")]
    Homeless(Box<Person>),
}

/// Errors raised while reading districts and people.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Invalid {field} '{token}'")]
    InvalidNumber { field: &'static str, token: String },

    #[error("Birth month {0} is outside 1-12")]
    InvalidBirthMonth(u32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
