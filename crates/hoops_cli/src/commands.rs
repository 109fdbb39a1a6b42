use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use hoops_core::{
    AuditLog, Contract, ExperienceLevel, InMemoryAuditLog, InMemoryTeamRepository, JsonLeagueSource, LeagueConfig,
    LineupOptimizer, Money, PlayerBuilder, PlayerFactory, Position, Role, RosterImporter, SalaryStrategy, Team,
    TeamManagementService,
};

type Service = TeamManagementService<InMemoryTeamRepository, InMemoryAuditLog>;

struct Signing {
    team: &'static str,
    id: &'static str,
    name: &'static str,
    position: Position,
    level: ExperienceLevel,
    age: i32,
    offense: i32,
    defense: i32,
    total: f64,
    years: i32,
}

const DEMO_TEAMS: [(&str, &str); 3] = [("LAL", "Lakers"), ("GSW", "Warriors"), ("BOS", "Celtics")];

#[allow(clippy::too_many_arguments)]
fn signing(
    team: &'static str,
    id: &'static str,
    name: &'static str,
    position: Position,
    level: ExperienceLevel,
    age: i32,
    offense: i32,
    defense: i32,
    total: f64,
    years: i32,
) -> Signing {
    Signing { team, id, name, position, level, age, offense, defense, total, years }
}

fn demo_signings() -> Vec<Signing> {
    use ExperienceLevel::{Rookie, TwoWay, Veteran};
    vec![
        signing("LAL", "lal-pg", "Marcus Hale", Position::PG, Veteran, 29, 84, 76, 90_000_000.0, 4),
        signing("LAL", "lal-sg", "Dario Voss", Position::SG, Veteran, 34, 80, 70, 30_000_000.0, 2),
        signing("LAL", "lal-sf", "Ty Okafor", Position::SF, Rookie, 20, 75, 72, 12_000_000.0, 3),
        signing("LAL", "lal-pf", "Ren Castillo", Position::PF, Veteran, 27, 74, 82, 60_000_000.0, 4),
        signing("LAL", "lal-c", "Big Jonas", Position::C, Veteran, 31, 70, 88, 45_000_000.0, 3),
        signing("LAL", "lal-sf2", "Eli Brandt", Position::SF, TwoWay, 22, 68, 66, 1_000_000.0, 1),
        signing("GSW", "gsw-pg", "Noah Quill", Position::PG, Veteran, 33, 88, 68, 100_000_000.0, 4),
        signing("GSW", "gsw-sg", "Kai Mercer", Position::SG, Rookie, 19, 72, 70, 10_000_000.0, 3),
        signing("GSW", "gsw-sf", "Lou Fenn", Position::SF, Veteran, 26, 78, 77, 40_000_000.0, 4),
        signing("GSW", "gsw-pf", "Sam Idris", Position::PF, Veteran, 30, 71, 79, 24_000_000.0, 3),
        signing("GSW", "gsw-c", "Otto Vale", Position::C, TwoWay, 23, 64, 75, 1_500_000.0, 1),
    ]
}

pub fn run_demo(config: &LeagueConfig) -> Result<InMemoryAuditLog> {
    let coach = Role::coach("u1", "Coach Carter");
    let assistant = Role::assistant_coach("u2", "Assistant Ace");
    let mut service: Service = TeamManagementService::new(InMemoryTeamRepository::new(), InMemoryAuditLog::new());

    for (id, name) in DEMO_TEAMS {
        let team = Team::with_roster_limit(id, name, config.new_salary_cap(), config.max_roster_size)?;
        service.register_team(&coach, team);
    }

    for s in demo_signings() {
        let builder = PlayerBuilder::new()
            .player_id(s.id)
            .name(s.name)
            .position(s.position)
            .age(s.age)
            .offense(s.offense)
            .defense(s.defense)
            .years_in_league((s.age - 19).max(0))
            .g_league_days_remaining(30);
        let player = PlayerFactory::create(s.level, &builder)?;
        let contract = Contract::builder().total_value(Money::try_of(s.total)?).years(s.years).build()?;
        let strategy = match s.level {
            ExperienceLevel::Rookie => config.rookie_scale(),
            _ => SalaryStrategy::Standard,
        };
        service
            .sign_player(&coach, s.team, player, &contract, &strategy)
            .with_context(|| format!("failed to sign {} to {}", s.id, s.team))?;
    }

    service.trade(&coach, "LAL", "BOS", "lal-sf2")?;

    // Rejected attempts are part of the trail.
    if let Err(err) = service.waive_player(&assistant, "GSW", "gsw-c") {
        println!("Expected rejection: {}", err);
    }
    if let Err(err) = service.waive_player(&coach, "BOS", "nobody") {
        println!("Expected rejection: {}", err);
    }

    print_rosters(&service);
    print_lineups(&service);
    let (_, ledger) = service.into_parts();
    print_audit(&ledger);
    Ok(ledger)
}

pub fn run_import(config: &LeagueConfig, file: &Path) -> Result<InMemoryAuditLog> {
    let source = JsonLeagueSource::from_path(file)?;
    println!("Importing {} teams from {}", source.team_count(), file.display());

    let coach = Role::coach("import", "League Import");
    let mut service: Service = TeamManagementService::new(InMemoryTeamRepository::new(), InMemoryAuditLog::new());
    let report = RosterImporter::new(config.clone()).import_league(&mut service, &coach, &source)?;

    println!("\nImport finished");
    println!("   Teams:          {}", report.teams);
    println!("   Signed:         {}", report.signed);
    println!("   Skipped (cap):  {}", report.skipped_cap);
    println!("   Skipped (full): {}", report.skipped_roster);
    println!("   Skipped (bad):  {}", report.skipped_invalid);

    print_rosters(&service);
    let (_, ledger) = service.into_parts();
    println!("\nLedger: {} entries, integrity {}", ledger.len(), verdict(ledger.verify_integrity()));
    Ok(ledger)
}

pub fn run_verify(path: &Path) -> Result<()> {
    let ledger = load_ledger(path)?;
    match ledger.first_invalid_index() {
        None => {
            println!("Ledger {} verified: {} entries", path.display(), ledger.len());
            Ok(())
        }
        Some(index) => bail!("Ledger {} is broken at entry {} of {}", path.display(), index, ledger.len()),
    }
}

pub fn write_ledger(ledger: &InMemoryAuditLog, path: &Path) -> Result<()> {
    let json = ledger.to_json()?;
    fs::write(path, json).with_context(|| format!("failed to write ledger {}", path.display()))?;
    println!("\nLedger saved to: {}", path.display());
    Ok(())
}

pub fn load_ledger(path: &Path) -> Result<InMemoryAuditLog> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read ledger {}", path.display()))?;
    let ledger = InMemoryAuditLog::from_json(&json).with_context(|| format!("invalid ledger JSON in {}", path.display()))?;
    Ok(ledger)
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "BROKEN"
    }
}

fn print_rosters(service: &Service) {
    for team in service.list_teams() {
        println!("\n{}", team);
        for player in team.players() {
            println!(
                "   {:<3} {:<24} {:<8} OVR {:>2}  value {:>3}  {}",
                player.position(),
                player.name(),
                player.experience_level(),
                player.overall_rating(),
                player.market_value(),
                team.annual_salary_for(player.id()).map(|m| m.to_string()).unwrap_or_default()
            );
        }
    }
}

fn print_lineups(service: &Service) {
    let optimizer = LineupOptimizer::new();
    println!("\nBest starting five");
    for team in service.list_teams() {
        match optimizer.best_starting_five(&team) {
            Ok(lineup) => {
                let names: Vec<&str> = lineup.starters.iter().map(|p| p.name()).collect();
                println!("   {} score {}: {}", team.id(), lineup.score, names.join(", "));
            }
            Err(err) => println!("   {} n/a: {}", team.id(), err),
        }
    }
}

fn print_audit(ledger: &InMemoryAuditLog) {
    println!("\nAudit trail");
    for entry in ledger.entries() {
        println!("   {}", entry);
    }
    println!("Integrity: {}", verdict(ledger.verify_integrity()));
}
