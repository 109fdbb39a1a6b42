use std::collections::HashMap;
use std::fmt;

use super::validation::require_non_empty;
use super::{Money, Player, SalaryCap, ValidationError};
use crate::collections::{Iter, Roster};
use crate::error::{LeagueError, Result};

pub const DEFAULT_MAX_ROSTER_SIZE: usize = 20;

/// Team aggregate: roster, salary cap and per-player salary bookkeeping.
///
/// The ids on the roster always equal the keys of the salary map.
#[derive(Debug, Clone)]
pub struct Team {
    id: String,
    name: String,
    salary_cap: SalaryCap,
    roster: Roster<Player>,
    salary_by_id: HashMap<String, Money>,
    max_roster_size: usize,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, salary_cap: SalaryCap) -> Result<Self> {
        Self::with_roster_limit(id, name, salary_cap, DEFAULT_MAX_ROSTER_SIZE)
    }

    pub fn with_roster_limit(
        id: impl Into<String>,
        name: impl Into<String>,
        salary_cap: SalaryCap,
        max_roster_size: usize,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        require_non_empty("team id", &id)?;
        require_non_empty("team name", &name)?;
        if max_roster_size == 0 {
            return Err(ValidationError::InvalidConfig("max roster size must be > 0".to_string()).into());
        }

        Ok(Self {
            id,
            name,
            salary_cap,
            roster: Roster::new(),
            salary_by_id: HashMap::new(),
            max_roster_size,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary_cap(&self) -> &SalaryCap {
        &self.salary_cap
    }

    pub fn salary_cap_mut(&mut self) -> &mut SalaryCap {
        &mut self.salary_cap
    }

    pub fn roster(&self) -> &Roster<Player> {
        &self.roster
    }

    pub fn players(&self) -> Iter<'_, Player> {
        self.roster.iter()
    }

    pub fn roster_size(&self) -> usize {
        self.roster.len()
    }

    pub fn max_roster_size(&self) -> usize {
        self.max_roster_size
    }

    pub fn is_roster_full(&self) -> bool {
        self.roster.len() >= self.max_roster_size
    }

    pub fn add_player(&mut self, player: Player, annual_salary: Money) -> Result<()> {
        if self.is_roster_full() {
            return Err(LeagueError::RosterFull { max: self.max_roster_size });
        }
        if self.salary_by_id.contains_key(player.id()) {
            return Err(ValidationError::DuplicatePlayer(player.id().to_string()).into());
        }
        self.salary_by_id.insert(player.id().to_string(), annual_salary);
        self.roster.add_last(player);
        Ok(())
    }

    /// Returns the removed player, if it was on the roster.
    pub fn remove_player(&mut self, player_id: &str) -> Option<Player> {
        let removed = self.roster.remove_first_occurrence(|p| p.id() == player_id)?;
        self.salary_by_id.remove(player_id);
        Some(removed)
    }

    pub fn find_player_by_id(&self, player_id: &str) -> Option<&Player> {
        self.roster.find(|p| p.id() == player_id)
    }

    pub fn annual_salary_for(&self, player_id: &str) -> Result<Money> {
        self.salary_by_id
            .get(player_id)
            .copied()
            .ok_or_else(|| LeagueError::NotFound(format!("no salary tracked for player {}", player_id)))
    }

    pub fn total_committed_salaries(&self) -> Money {
        self.salary_by_id.values().fold(Money::zero(), |acc, m| acc.plus(*m))
    }

    /// Single-line state used for audit before/after snapshots.
    pub fn snapshot(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team[{} ({}) roster={} committed={} capRemaining={}]",
            self.name,
            self.id,
            self.roster.len(),
            self.salary_cap.committed(),
            self.salary_cap.remaining()
        )
    }
}
