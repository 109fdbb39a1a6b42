//! # hoops_core - Basketball Roster Management
//!
//! This library manages a basketball team's roster under salary-cap and
//! positional constraints.
//!
//! ## Features
//! - Player variants (rookie, veteran, two-way) with fatigue-adjusted market value
//! - Per-team salary cap bookkeeping with fixed-point money
//! - Authorized sign / waive / trade transactions through one service
//! - Append-only SHA-256 hash-chained audit ledger with integrity verification
//! - Branch-and-bound starting-five optimizer

pub mod analytics;
pub mod audit;
pub mod collections;
pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod repo;
pub mod service;

pub use analytics::{rate_from_stats, Lineup, LineupOptimizer, Rating, StatLine};
pub use audit::{AuditAction, AuditEntry, AuditLog, InMemoryAuditLog, GENESIS_HASH};
pub use collections::{Cursor, Roster};
pub use config::LeagueConfig;
pub use domain::{
    Contract, ExperienceLevel, Money, Player, PlayerKind, Position, Role, RoleKind, SalaryCap,
    SalaryStrategy, Team, ValidationError,
};
pub use error::{LeagueError, Result};
pub use factory::{PlayerBuilder, PlayerFactory};
pub use repo::{InMemoryTeamRepository, TeamRepository};
pub use service::{ImportReport, JsonLeagueSource, LeagueSource, RosterImporter, TeamManagementService};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
