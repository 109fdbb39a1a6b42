use crate::domain::{Money, Position, ValidationError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeagueError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Salary cap exceeded: committing {requested} on top of {committed} exceeds cap {cap}")]
    CapExceeded { requested: Money, committed: Money, cap: Money },

    #[error("Roster full: at most {max} players allowed")]
    RosterFull { max: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {actor_id} ({role}) may not {action}")]
    Unauthorized { actor_id: String, role: String, action: String },

    #[error("Cannot build lineup: missing position {0}")]
    MissingPosition(Position),

    #[error("Roster was structurally modified during iteration")]
    ConcurrentModification,

    #[error("League source error: {0}")]
    Source(String),
}

impl LeagueError {
    /// Errors that are recorded in the audit ledger as rejected attempts.
    pub fn is_rejection(&self) -> bool {
        matches!(self, LeagueError::Unauthorized { .. } | LeagueError::NotFound(_))
    }

    /// Roster-full and cap failures.
    pub fn is_capacity(&self) -> bool {
        matches!(self, LeagueError::CapExceeded { .. } | LeagueError::RosterFull { .. })
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
