//! Player builder and factory
//!
//! The builder collects a readable stepwise configuration; the factory turns it
//! into the requested player variant and validates the variant's counters.

use uuid::Uuid;

use crate::domain::validation::require_non_negative;
use crate::domain::{ExperienceLevel, Player, PlayerKind, Position, ValidationError};

#[derive(Debug, Clone)]
pub struct PlayerBuilder {
    player_id: String,
    name: String,
    position: Position,
    age: i32,
    offense: i32,
    defense: i32,
    years_in_league: i32,
    g_league_days_remaining: i32,
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self {
            player_id: Uuid::new_v4().to_string(),
            name: "Unknown".to_string(),
            position: Position::SG,
            age: 19,
            offense: 70,
            defense: 70,
            years_in_league: 0,
            g_league_days_remaining: 50,
        }
    }
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_id(mut self, id: impl Into<String>) -> Self {
        self.player_id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn offense(mut self, offense: i32) -> Self {
        self.offense = offense;
        self
    }

    pub fn defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    pub fn years_in_league(mut self, years: i32) -> Self {
        self.years_in_league = years;
        self
    }

    pub fn g_league_days_remaining(mut self, days: i32) -> Self {
        self.g_league_days_remaining = days;
        self
    }

    pub fn get_player_id(&self) -> &str {
        &self.player_id
    }
}

pub struct PlayerFactory;

impl PlayerFactory {
    pub fn create(level: ExperienceLevel, builder: &PlayerBuilder) -> Result<Player, ValidationError> {
        let kind = match level {
            ExperienceLevel::Rookie => PlayerKind::Rookie,
            ExperienceLevel::Veteran => PlayerKind::Veteran {
                years_in_league: require_non_negative("yearsInLeague", builder.years_in_league)?,
            },
            ExperienceLevel::TwoWay => PlayerKind::TwoWay {
                g_league_days_remaining: require_non_negative(
                    "gLeagueDaysRemaining",
                    builder.g_league_days_remaining,
                )?,
            },
        };

        Player::new(
            builder.player_id.clone(),
            builder.name.clone(),
            builder.position,
            builder.age,
            builder.offense,
            builder.defense,
            kind,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let player = PlayerFactory::create(ExperienceLevel::TwoWay, &PlayerBuilder::new()).unwrap();
        assert_eq!(player.name(), "Unknown");
        assert_eq!(player.position(), Position::SG);
        assert_eq!(player.age(), 19);
        assert_eq!(player.overall_rating(), 70);
        assert_eq!(player.g_league_days_remaining(), Some(50));
        assert!(Uuid::parse_str(player.id()).is_ok());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = PlayerBuilder::new();
        let b = PlayerBuilder::new();
        assert_ne!(a.get_player_id(), b.get_player_id());
    }

    #[test]
    fn test_creates_each_variant() {
        let builder = PlayerBuilder::new().player_id("x").name("X").years_in_league(4);

        let rookie = PlayerFactory::create(ExperienceLevel::Rookie, &builder).unwrap();
        assert_eq!(rookie.experience_level(), ExperienceLevel::Rookie);

        let veteran = PlayerFactory::create(ExperienceLevel::Veteran, &builder).unwrap();
        assert_eq!(veteran.years_in_league(), Some(4));

        let two_way = PlayerFactory::create(ExperienceLevel::TwoWay, &builder).unwrap();
        assert_eq!(two_way.experience_level(), ExperienceLevel::TwoWay);
    }

    #[test]
    fn test_negative_counters_rejected() {
        let builder = PlayerBuilder::new().years_in_league(-1).g_league_days_remaining(-3);
        assert!(matches!(
            PlayerFactory::create(ExperienceLevel::Veteran, &builder),
            Err(ValidationError::NegativeCounter { field: "yearsInLeague", value: -1 })
        ));
        assert!(matches!(
            PlayerFactory::create(ExperienceLevel::TwoWay, &builder),
            Err(ValidationError::NegativeCounter { field: "gLeagueDaysRemaining", value: -3 })
        ));
        // Rookies carry neither counter.
        assert!(PlayerFactory::create(ExperienceLevel::Rookie, &builder).is_ok());
    }

    #[test]
    fn test_underage_rejected() {
        let builder = PlayerBuilder::new().age(14);
        assert_eq!(
            PlayerFactory::create(ExperienceLevel::Rookie, &builder),
            Err(ValidationError::InvalidAge(14))
        );
    }
}
