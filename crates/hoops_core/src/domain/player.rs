//! Player model: shared attributes, fatigue dynamics and per-variant valuation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::{require_non_empty, MIN_PLAYER_AGE};
use super::ValidationError;

pub const MAX_ATTRIBUTE: i32 = 99;
pub const MAX_FATIGUE: u32 = 100;
/// Fatigue recovered per rest
pub const REST_RECOVERY: u32 = 20;
/// Rating points lost per fatigue point
pub const FATIGUE_PENALTY: f64 = 0.35;

/// Veterans lose value past this age
const VETERAN_PRIME_AGE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// Fixed lineup order
    pub const ALL: [Position; 5] = [Position::PG, Position::SG, Position::SF, Position::PF, Position::C];

    pub fn code(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Position::PG => 0,
            Position::SG => 1,
            Position::SF => 2,
            Position::PF => 3,
            Position::C => 4,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            _ => Err(ValidationError::InvalidPosition(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Rookie,
    Veteran,
    TwoWay,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceLevel::Rookie => f.pad("Rookie"),
            ExperienceLevel::Veteran => f.pad("Veteran"),
            ExperienceLevel::TwoWay => f.pad("Two-Way"),
        }
    }
}

/// Variant-only state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerKind {
    Rookie,
    Veteran { years_in_league: u32 },
    TwoWay { g_league_days_remaining: u32 },
}

impl PlayerKind {
    pub fn experience_level(&self) -> ExperienceLevel {
        match self {
            PlayerKind::Rookie => ExperienceLevel::Rookie,
            PlayerKind::Veteran { .. } => ExperienceLevel::Veteran,
            PlayerKind::TwoWay { .. } => ExperienceLevel::TwoWay,
        }
    }
}

/// A rostered (or signable) player. Identity is the player id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: String,
    name: String,
    position: Position,
    age: u32,
    offense: u32,
    defense: u32,
    /// 0..=100, higher = more tired
    fatigue: u32,
    kind: PlayerKind,
}

impl Player {
    /// Offense and defense are clamped into 0..=99; age below 16 is rejected.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        age: i32,
        offense: i32,
        defense: i32,
        kind: PlayerKind,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let name = name.into();
        require_non_empty("player id", &id)?;
        require_non_empty("player name", &name)?;
        if age < MIN_PLAYER_AGE {
            return Err(ValidationError::InvalidAge(age));
        }

        Ok(Self {
            id,
            name,
            position,
            age: age as u32,
            offense: clamp_attribute(offense),
            defense: clamp_attribute(defense),
            fatigue: 0,
            kind,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn offense(&self) -> u32 {
        self.offense
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn fatigue(&self) -> u32 {
        self.fatigue
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.kind.experience_level()
    }

    pub fn years_in_league(&self) -> Option<u32> {
        match self.kind {
            PlayerKind::Veteran { years_in_league } => Some(years_in_league),
            _ => None,
        }
    }

    pub fn g_league_days_remaining(&self) -> Option<u32> {
        match self.kind {
            PlayerKind::TwoWay { g_league_days_remaining } => Some(g_league_days_remaining),
            _ => None,
        }
    }

    /// Overall rating in 0..=99
    pub fn overall_rating(&self) -> u32 {
        (self.offense + self.defense) / 2
    }

    /// Overall rating minus the fatigue penalty, never below zero
    pub fn effective_rating(&self) -> f64 {
        let penalty = self.fatigue as f64 * FATIGUE_PENALTY;
        (self.overall_rating() as f64 - penalty).max(0.0)
    }

    /// +1 fatigue per 2 minutes, capped at 100
    pub fn apply_minutes(&mut self, minutes: i32) -> Result<(), ValidationError> {
        if minutes < 0 {
            return Err(ValidationError::InvalidMinutes(minutes));
        }
        self.fatigue = (self.fatigue + minutes as u32 / 2).min(MAX_FATIGUE);
        Ok(())
    }

    pub fn rest(&mut self) {
        self.fatigue = self.fatigue.saturating_sub(REST_RECOVERY);
    }

    /// Two-way players only. Returns the days left after the assignment.
    pub fn assign_to_g_league(&mut self, days: i32) -> Result<u32, ValidationError> {
        if days <= 0 {
            return Err(ValidationError::InvalidAssignmentDays(days));
        }
        match &mut self.kind {
            PlayerKind::TwoWay { g_league_days_remaining } => {
                *g_league_days_remaining = g_league_days_remaining.saturating_sub(days as u32);
                Ok(*g_league_days_remaining)
            }
            _ => Err(ValidationError::InvalidAssignmentDays(days)),
        }
    }

    /// Fatigue-adjusted valuation score used to rank players.
    pub fn market_value(&self) -> i32 {
        let effective = self.effective_rating();
        let raw = match self.kind {
            // upside bonus
            PlayerKind::Rookie => effective + 5.0,
            PlayerKind::Veteran { .. } => {
                let age_penalty = self.age.saturating_sub(VETERAN_PRIME_AGE) as f64;
                effective + 3.0 - age_penalty * 0.5
            }
            PlayerKind::TwoWay { g_league_days_remaining } => {
                let availability_penalty = if g_league_days_remaining > 0 { 2.0 } else { 0.0 };
                effective - availability_penalty
            }
        };
        round_half_up(raw)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, O:{} D:{} Fat:{})",
            self.name, self.id, self.position, self.offense, self.defense, self.fatigue
        )
    }
}

fn clamp_attribute(value: i32) -> u32 {
    value.clamp(0, MAX_ATTRIBUTE) as u32
}

/// Ties round toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rookie(offense: i32, defense: i32) -> Player {
        Player::new("p1", "Test Rookie", Position::SG, 20, offense, defense, PlayerKind::Rookie).unwrap()
    }

    #[test]
    fn test_underage_rejected() {
        let err = Player::new("p1", "Kid", Position::PG, 15, 50, 50, PlayerKind::Rookie).unwrap_err();
        assert_eq!(err, ValidationError::InvalidAge(15));
        assert!(Player::new("p1", "Kid", Position::PG, 16, 50, 50, PlayerKind::Rookie).is_ok());
    }

    #[test]
    fn test_empty_identity_rejected() {
        assert!(Player::new("", "Name", Position::PG, 20, 50, 50, PlayerKind::Rookie).is_err());
        assert!(Player::new("id", " ", Position::PG, 20, 50, 50, PlayerKind::Rookie).is_err());
    }

    #[test]
    fn test_attributes_clamped() {
        let p = rookie(150, -20);
        assert_eq!(p.offense(), 99);
        assert_eq!(p.defense(), 0);
        assert_eq!(p.overall_rating(), 49);
    }

    #[test]
    fn test_overall_rating_floors() {
        assert_eq!(rookie(80, 75).overall_rating(), 77);
    }

    #[test]
    fn test_fatigue_dynamics() {
        let mut p = rookie(80, 80);
        p.apply_minutes(35).unwrap();
        assert_eq!(p.fatigue(), 17);
        p.apply_minutes(300).unwrap();
        assert_eq!(p.fatigue(), 100);
        p.rest();
        assert_eq!(p.fatigue(), 80);
        for _ in 0..10 {
            p.rest();
        }
        assert_eq!(p.fatigue(), 0);

        assert_eq!(p.apply_minutes(-1), Err(ValidationError::InvalidMinutes(-1)));
    }

    #[test]
    fn test_effective_rating_penalty() {
        let mut p = rookie(80, 80);
        p.apply_minutes(40).unwrap(); // fatigue 20 -> penalty 7
        assert!((p.effective_rating() - 73.0).abs() < 1e-9);

        let mut weak = rookie(10, 10);
        weak.apply_minutes(200).unwrap(); // fatigue 100 -> penalty 35
        assert_eq!(weak.effective_rating(), 0.0);
    }

    #[test]
    fn test_market_value_by_variant() {
        let r = rookie(80, 80);
        assert_eq!(r.market_value(), 85);

        let young_vet = Player::new(
            "v1", "Vet", Position::C, 30, 80, 80,
            PlayerKind::Veteran { years_in_league: 8 },
        )
        .unwrap();
        assert_eq!(young_vet.market_value(), 83);

        // age 37 -> penalty 2.5 -> 80.5 rounds up to 81
        let old_vet = Player::new(
            "v2", "Old Vet", Position::C, 37, 80, 80,
            PlayerKind::Veteran { years_in_league: 15 },
        )
        .unwrap();
        assert_eq!(old_vet.market_value(), 81);

        let two_way = Player::new(
            "t1", "Two Way", Position::SF, 22, 80, 80,
            PlayerKind::TwoWay { g_league_days_remaining: 10 },
        )
        .unwrap();
        assert_eq!(two_way.market_value(), 78);

        let exhausted_two_way = Player::new(
            "t2", "Two Way", Position::SF, 22, 80, 80,
            PlayerKind::TwoWay { g_league_days_remaining: 0 },
        )
        .unwrap();
        assert_eq!(exhausted_two_way.market_value(), 80);
    }

    #[test]
    fn test_market_value_rounds_fatigue_fraction() {
        let mut p = rookie(80, 80);
        p.apply_minutes(2).unwrap(); // fatigue 1 -> 79.65 + 5 = 84.65
        assert_eq!(p.market_value(), 85);
        p.apply_minutes(4).unwrap(); // fatigue 3 -> 78.95 + 5 = 83.95
        assert_eq!(p.market_value(), 84);
    }

    #[test]
    fn test_g_league_assignment() {
        let mut p = Player::new(
            "t1", "Two Way", Position::SF, 22, 70, 70,
            PlayerKind::TwoWay { g_league_days_remaining: 10 },
        )
        .unwrap();
        assert_eq!(p.assign_to_g_league(4), Ok(6));
        assert_eq!(p.assign_to_g_league(50), Ok(0));
        assert_eq!(p.g_league_days_remaining(), Some(0));
        assert_eq!(p.assign_to_g_league(0), Err(ValidationError::InvalidAssignmentDays(0)));

        let mut r = rookie(70, 70);
        assert!(r.assign_to_g_league(3).is_err());
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("pg".parse::<Position>(), Ok(Position::PG));
        assert_eq!(" C ".parse::<Position>(), Ok(Position::C));
        assert!("GK".parse::<Position>().is_err());
        assert_eq!(Position::ALL.iter().map(|p| p.index()).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_identity_equality() {
        let a = rookie(80, 80);
        let mut b = rookie(20, 20);
        b.rest();
        assert_eq!(a, b);
    }
}
