//! Read-only analysis over teams and source statistics.

pub mod lineup;
pub mod rating;

pub use lineup::{Lineup, LineupOptimizer};
pub use rating::{rate_from_stats, Rating, StatLine};
