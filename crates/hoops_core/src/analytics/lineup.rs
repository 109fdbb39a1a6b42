//! Best starting five under the one-player-per-position constraint
//!
//! Backtracking over PG, SG, SF, PF, C with branch-and-bound pruning. Each
//! position's candidates are sorted by descending market value, so the first
//! candidate of every unassigned position gives an admissible upper bound.

use std::cmp::Reverse;

use tracing::debug;

use crate::domain::{Player, Position, Team};
use crate::error::{LeagueError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    /// One player per position, in position order
    pub starters: Vec<Player>,
    pub score: i32,
    pub nodes_visited: u64,
    pub pruned: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineupOptimizer;

#[derive(Clone, Copy)]
struct Candidate<'a> {
    player: &'a Player,
    value: i32,
}

struct Search<'a> {
    by_position: Vec<Vec<Candidate<'a>>>,
    chosen: Vec<&'a Player>,
    best: Vec<&'a Player>,
    best_score: Option<i32>,
    nodes_visited: u64,
    pruned: u64,
}

impl LineupOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Pure with respect to the team. Ties keep the first lineup found in
    /// roster order.
    pub fn best_starting_five(&self, team: &Team) -> Result<Lineup> {
        let mut by_position: Vec<Vec<Candidate<'_>>> = Position::ALL.iter().map(|_| Vec::new()).collect();
        for player in team.players() {
            by_position[player.position().index()].push(Candidate { player, value: player.market_value() });
        }

        for position in Position::ALL {
            let candidates = &mut by_position[position.index()];
            if candidates.is_empty() {
                return Err(LeagueError::MissingPosition(position));
            }
            candidates.sort_by_key(|c| Reverse(c.value));
        }

        let mut search = Search {
            by_position,
            chosen: Vec::with_capacity(Position::ALL.len()),
            best: Vec::new(),
            best_score: None,
            nodes_visited: 0,
            pruned: 0,
        };
        search.descend(0, 0);

        let score = search.best_score.unwrap_or_default();
        debug!(
            team = team.id(),
            score,
            nodes = search.nodes_visited,
            pruned = search.pruned,
            "lineup search finished"
        );

        Ok(Lineup {
            starters: search.best.into_iter().cloned().collect(),
            score,
            nodes_visited: search.nodes_visited,
            pruned: search.pruned,
        })
    }
}

impl<'a> Search<'a> {
    fn descend(&mut self, depth: usize, score: i32) {
        self.nodes_visited += 1;

        if depth == self.by_position.len() {
            if self.best_score.map_or(true, |best| score > best) {
                self.best_score = Some(score);
                self.best = self.chosen.clone();
            }
            return;
        }

        let upper_bound = score + self.by_position[depth..].iter().map(|c| c[0].value).sum::<i32>();
        if let Some(best) = self.best_score {
            if upper_bound <= best {
                self.pruned += 1;
                return;
            }
        }

        for i in 0..self.by_position[depth].len() {
            let Candidate { player, value } = self.by_position[depth][i];
            self.chosen.push(player);
            self.descend(depth + 1, score + value);
            self.chosen.pop();
        }
    }
}
