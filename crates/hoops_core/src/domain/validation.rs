//! Validation module for domain construction
//!
//! Constructors fail fast with a [`ValidationError`] and never leave partial state.

use std::fmt;

/// Minimum age of a signable player
pub const MIN_PLAYER_AGE: i32 = 16;

/// Construction-time input errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Player younger than [`MIN_PLAYER_AGE`]
    InvalidAge(i32),

    /// Contract years must be > 0
    InvalidContractYears(i32),

    /// Day/year counters must be >= 0
    NegativeCounter { field: &'static str, value: i32 },

    /// G-League assignments must be for at least one day
    InvalidAssignmentDays(i32),

    /// Minutes played must be >= 0
    InvalidMinutes(i32),

    /// Required text field was empty
    EmptyField(&'static str),

    /// Unknown position code
    InvalidPosition(String),

    /// Amount could not be represented as money
    InvalidAmount(String),

    /// League configuration rejected
    InvalidConfig(String),

    /// Player id already on the roster
    DuplicatePlayer(String),

    /// Source and destination of a trade are the same team
    SameTeamTrade(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidAge(age) => {
                write!(f, "Invalid age: {}. Must be at least {}", age, MIN_PLAYER_AGE)
            }
            ValidationError::InvalidContractYears(years) => {
                write!(f, "Invalid contract length: {} years. Must be > 0", years)
            }
            ValidationError::NegativeCounter { field, value } => {
                write!(f, "Invalid {}: {}. Must be >= 0", field, value)
            }
            ValidationError::InvalidAssignmentDays(days) => {
                write!(f, "Invalid G-League assignment: {} days. Must be > 0", days)
            }
            ValidationError::InvalidMinutes(minutes) => {
                write!(f, "Invalid minutes: {}. Must be >= 0", minutes)
            }
            ValidationError::EmptyField(field) => write!(f, "{} cannot be empty", field),
            ValidationError::InvalidPosition(pos) => {
                write!(f, "Invalid position: {}. Expected one of PG, SG, SF, PF, C", pos)
            }
            ValidationError::InvalidAmount(raw) => write!(f, "Invalid amount: {}", raw),
            ValidationError::InvalidConfig(msg) => write!(f, "Invalid league config: {}", msg),
            ValidationError::DuplicatePlayer(id) => write!(f, "Player {} is already on the roster", id),
            ValidationError::SameTeamTrade(team) => {
                write!(f, "Cannot trade a player from {} to itself", team)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: i32) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::NegativeCounter { field, value })
}
