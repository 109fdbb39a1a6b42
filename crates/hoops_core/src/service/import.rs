//! League import
//!
//! Pulls teams and rosters from a [`LeagueSource`] and drives them through the
//! regular service entry points, so every imported team and player is
//! authorized and audited like an interactive change. Ratings and salaries are
//! synthesized deterministically unless the source supplies per-game stats.

use std::cmp::max;
use std::fs;
use std::path::Path;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::TeamManagementService;
use crate::analytics::{rate_from_stats, StatLine};
use crate::audit::AuditLog;
use crate::config::LeagueConfig;
use crate::domain::{Contract, Money, Player, PlayerKind, Position, Role, SalaryCap, SalaryStrategy, Team};
use crate::error::{LeagueError, Result};
use crate::repo::TeamRepository;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTeam {
    pub id: i64,
    pub abbreviation: String,
    pub full_name: String,
    #[serde(default)]
    pub players: Vec<SourcePlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePlayer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Source position code such as "G", "F-C"
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub stats: Option<StatLine>,
}

impl SourcePlayer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Where league data comes from. Implementations own any I/O.
pub trait LeagueSource {
    fn fetch_teams(&self) -> Result<Vec<SourceTeam>>;

    fn fetch_players(&self, team: &SourceTeam) -> Result<Vec<SourcePlayer>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LeagueDocument {
    teams: Vec<SourceTeam>,
}

/// League snapshot read from a JSON document of the form
/// `{"teams": [{"id", "abbreviation", "full_name", "players": [...]}]}`.
#[derive(Debug, Clone, Default)]
pub struct JsonLeagueSource {
    document: LeagueDocument,
}

impl JsonLeagueSource {
    pub fn from_json(json: &str) -> Result<Self> {
        let document: LeagueDocument = serde_json::from_str(json)
            .map_err(|e| LeagueError::Source(format!("failed to parse league JSON: {}", e)))?;
        Ok(Self { document })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LeagueError::Source(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn team_count(&self) -> usize {
        self.document.teams.len()
    }
}

impl LeagueSource for JsonLeagueSource {
    fn fetch_teams(&self) -> Result<Vec<SourceTeam>> {
        Ok(self.document.teams.clone())
    }

    fn fetch_players(&self, team: &SourceTeam) -> Result<Vec<SourcePlayer>> {
        Ok(self
            .document
            .teams
            .iter()
            .find(|t| t.id == team.id)
            .map(|t| t.players.clone())
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub teams: usize,
    pub signed: usize,
    /// Annual salary exceeded the team's remaining cap
    pub skipped_cap: usize,
    /// Left over once the roster was full
    pub skipped_roster: usize,
    /// Records rejected on their own (bad name, duplicate id, ...)
    pub skipped_invalid: usize,
}

enum PlayerOutcome {
    Signed,
    OverCap,
}

/// Failures confined to one source record; anything else aborts the import.
fn is_record_error(err: &LeagueError) -> bool {
    matches!(
        err,
        LeagueError::Validation(_) | LeagueError::CapExceeded { .. } | LeagueError::RosterFull { .. }
    )
}

pub struct RosterImporter {
    config: LeagueConfig,
}

impl RosterImporter {
    pub fn new(config: LeagueConfig) -> Self {
        Self { config }
    }

    /// Registers every source team (replacing teams with the same id), then
    /// signs each roster in source order until the team is full.
    pub fn import_league<R, A, S>(
        &self,
        service: &mut TeamManagementService<R, A>,
        actor: &Role,
        source: &S,
    ) -> Result<ImportReport>
    where
        R: TeamRepository,
        A: AuditLog,
        S: LeagueSource + ?Sized,
    {
        let source_teams = source.fetch_teams()?;
        let mut report = ImportReport::default();

        for source_team in &source_teams {
            let team = Team::with_roster_limit(
                source_team.abbreviation.as_str(),
                source_team.full_name.as_str(),
                SalaryCap::new(self.config.import_salary_cap),
                self.config.max_roster_size,
            )?;
            service.register_team(actor, team);
            report.teams += 1;
        }

        let strategy = SalaryStrategy::Standard;
        for source_team in &source_teams {
            let team_id = source_team.abbreviation.as_str();
            let players = source.fetch_players(source_team)?;
            debug!(team = team_id, players = players.len(), "importing roster");

            for (i, source_player) in players.iter().enumerate() {
                let team = service.get_team(team_id)?;
                if team.is_roster_full() {
                    report.skipped_roster += players.len() - i;
                    break;
                }

                match self.import_player(service, actor, &team, source_player, &strategy) {
                    Ok(PlayerOutcome::Signed) => report.signed += 1,
                    Ok(PlayerOutcome::OverCap) => report.skipped_cap += 1,
                    Err(err) if is_record_error(&err) => {
                        warn!(team = team_id, source_id = source_player.id, "skipping source player: {}", err);
                        report.skipped_invalid += 1;
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        if report.skipped_cap > 0 || report.skipped_roster > 0 || report.skipped_invalid > 0 {
            warn!(
                skipped_cap = report.skipped_cap,
                skipped_roster = report.skipped_roster,
                skipped_invalid = report.skipped_invalid,
                "import skipped players"
            );
        }
        info!(teams = report.teams, signed = report.signed, "league import finished");
        Ok(report)
    }

    fn import_player<R, A>(
        &self,
        service: &mut TeamManagementService<R, A>,
        actor: &Role,
        team: &Team,
        source_player: &SourcePlayer,
        strategy: &SalaryStrategy,
    ) -> Result<PlayerOutcome>
    where
        R: TeamRepository,
        A: AuditLog,
    {
        let player = self.to_player(source_player)?;
        let contract =
            Contract::new(self.contract_total(&player), self.config.import_contract_years, Utc::now().date_naive())?;
        let annual = strategy.annual_salary(&player, &contract);
        if !team.salary_cap().remaining().gte(&annual) {
            debug!(team = team.id(), player = player.id(), annual = %annual, "skipping player over remaining cap");
            return Ok(PlayerOutcome::OverCap);
        }

        service.sign_player(actor, team.id(), player, &contract, strategy)?;
        Ok(PlayerOutcome::Signed)
    }

    /// Imported players are veterans; stats, when present, replace the
    /// synthesized ratings.
    pub fn to_player(&self, source: &SourcePlayer) -> Result<Player> {
        let name = source.full_name();
        let position = position_from_code(&source.position);

        let synthesized = (
            60 + (stable_hash(&name) % 40) as i32,
            55 + (stable_hash(&format!("{}d", name)) % 40) as i32,
        );
        let (offense, defense) = match source.stats.as_ref().and_then(rate_from_stats) {
            Some(rating) => (rating.offense, rating.defense),
            None => synthesized,
        };

        let age = 20 + (source.id.unsigned_abs() % 15) as i32;
        let years_in_league = max(1, age - 18) as u32;

        let player = Player::new(
            format!("api-{}", source.id),
            name,
            position,
            age,
            offense,
            defense,
            PlayerKind::Veteran { years_in_league },
        )?;
        Ok(player)
    }

    pub fn contract_total(&self, player: &Player) -> Money {
        let by_rating = Money::new(self.config.import_salary_per_rating_point.amount() * Decimal::from(player.overall_rating()));
        max(self.config.import_salary_floor, by_rating)
    }
}

/// Maps source position codes; anything unrecognized plays SG.
pub fn position_from_code(code: &str) -> Position {
    match code.trim() {
        "G" => Position::PG,
        "G-F" | "F-G" => Position::SG,
        "F" => Position::SF,
        "F-C" => Position::PF,
        "C" => Position::C,
        _ => Position::SG,
    }
}

/// 31-multiplier string hash over UTF-16 code units. Stable across runs and
/// platforms, unlike `std::hash`.
fn stable_hash(s: &str) -> u32 {
    s.encode_utf16().fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit))).unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_player(id: i64, position: &str) -> SourcePlayer {
        SourcePlayer {
            id,
            first_name: "Test".to_string(),
            last_name: format!("Player{}", id),
            position: position.to_string(),
            stats: None,
        }
    }

    #[test]
    fn test_position_mapping() {
        assert_eq!(position_from_code("G"), Position::PG);
        assert_eq!(position_from_code("G-F"), Position::SG);
        assert_eq!(position_from_code("F-G"), Position::SG);
        assert_eq!(position_from_code("F"), Position::SF);
        assert_eq!(position_from_code("F-C"), Position::PF);
        assert_eq!(position_from_code("C"), Position::C);
        assert_eq!(position_from_code(""), Position::SG);
        assert_eq!(position_from_code("C-F"), Position::SG);
    }

    #[test]
    fn test_stable_hash() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("a"), 97);
        assert_eq!(stable_hash("ab"), 97 * 31 + 98);
        assert_eq!(stable_hash("LeBron James"), stable_hash("LeBron James"));
    }

    #[test]
    fn test_synthesized_player_is_deterministic() {
        let importer = RosterImporter::new(LeagueConfig::default());
        let a = importer.to_player(&source_player(237, "F")).unwrap();
        let b = importer.to_player(&source_player(237, "F")).unwrap();

        assert_eq!(a.id(), "api-237");
        assert_eq!(a.name(), "Test Player237");
        assert_eq!(a.position(), Position::SF);
        assert_eq!((a.offense(), a.defense(), a.age()), (b.offense(), b.defense(), b.age()));
        assert_eq!(a.age(), 20 + 237 % 15);
        assert_eq!(a.years_in_league(), Some(a.age() - 18));
        assert!((60..100).contains(&a.offense()));
        assert!((55..95).contains(&a.defense()));
    }

    #[test]
    fn test_years_in_league_at_least_one() {
        let importer = RosterImporter::new(LeagueConfig::default());
        // id 15 -> age 20 -> two years; id 0 -> age 20 as well
        let p = importer.to_player(&source_player(0, "C")).unwrap();
        assert_eq!(p.age(), 20);
        assert_eq!(p.years_in_league(), Some(2));
    }

    #[test]
    fn test_stats_override_synthesized_ratings() {
        let importer = RosterImporter::new(LeagueConfig::default());
        let mut source = source_player(5, "G");
        source.stats = Some(StatLine { ppg: Some(10.0), spg: Some(1.0), ..Default::default() });

        let p = importer.to_player(&source).unwrap();
        assert_eq!(p.offense(), 72);
        assert_eq!(p.defense(), 56);
    }

    #[test]
    fn test_contract_total_floor() {
        let importer = RosterImporter::new(LeagueConfig::default());
        let weak = Player::new("w", "Weak", Position::C, 25, 0, 0, PlayerKind::Veteran { years_in_league: 3 }).unwrap();
        assert_eq!(importer.contract_total(&weak), Money::of(1_200_000.0));

        let strong = Player::new("s", "Strong", Position::C, 25, 80, 80, PlayerKind::Veteran { years_in_league: 3 }).unwrap();
        assert_eq!(importer.contract_total(&strong), Money::of(28_000_000.0));
    }

    #[test]
    fn test_json_source() {
        let json = r#"{"teams": [
            {"id": 1, "abbreviation": "ATL", "full_name": "Atlanta Hawks",
             "players": [{"id": 10, "first_name": "Trae", "last_name": "Young", "position": "G"}]},
            {"id": 2, "abbreviation": "BOS", "full_name": "Boston Celtics"}
        ]}"#;
        let source = JsonLeagueSource::from_json(json).unwrap();
        let teams = source.fetch_teams().unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(source.fetch_players(&teams[0]).unwrap().len(), 1);
        assert!(source.fetch_players(&teams[1]).unwrap().is_empty());

        assert!(matches!(JsonLeagueSource::from_json("{"), Err(LeagueError::Source(_))));
        assert!(matches!(
            JsonLeagueSource::from_path(Path::new("/nonexistent/league.json")),
            Err(LeagueError::Source(_))
        ));
    }
}
