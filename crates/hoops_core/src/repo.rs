//! Team persistence seam. The core only depends on the trait.

use std::collections::BTreeMap;

use crate::domain::Team;

pub trait TeamRepository {
    /// Inserts or replaces by team id.
    fn save(&mut self, team: Team);

    fn find_by_id(&self, team_id: &str) -> Option<Team>;

    fn find_all(&self) -> Vec<Team>;

    fn search(&self, predicate: &dyn Fn(&Team) -> bool) -> Vec<Team> {
        self.find_all().into_iter().filter(|t| predicate(t)).collect()
    }
}

/// Keyed in-memory store; `find_all` is ordered by team id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    store: BTreeMap<String, Team>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn save(&mut self, team: Team) {
        self.store.insert(team.id().to_string(), team);
    }

    fn find_by_id(&self, team_id: &str) -> Option<Team> {
        self.store.get(team_id).cloned()
    }

    fn find_all(&self) -> Vec<Team> {
        self.store.values().cloned().collect()
    }

    fn search(&self, predicate: &dyn Fn(&Team) -> bool) -> Vec<Team> {
        self.store.values().filter(|t| predicate(t)).cloned().collect()
    }
}
