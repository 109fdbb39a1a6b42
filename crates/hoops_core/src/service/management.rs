//! Transactional orchestration with role-based authorization
//!
//! The only component allowed to mutate a team. Every attempt that reaches
//! authorization leaves exactly one ledger entry: the committed change, or a
//! rejection whose before and after snapshots are identical.
//!
//! Teams are loaded as copies and saved back once their own mutation has fully
//! succeeded. A trade touches two teams without a shared transaction: the
//! debited source team is saved before the destination is credited.

use tracing::{info, warn};

use crate::audit::{AuditAction, AuditEntry, AuditLog};
use crate::domain::{Contract, Player, Role, SalaryStrategy, Team, ValidationError};
use crate::error::{LeagueError, Result};
use crate::repo::TeamRepository;

/// Snapshot recorded as "before" when a team is registered
pub const NO_STATE: &str = "NONE";

pub struct TeamManagementService<R, A> {
    teams: R,
    audit: A,
}

impl<R: TeamRepository, A: AuditLog> TeamManagementService<R, A> {
    pub fn new(teams: R, audit: A) -> Self {
        Self { teams, audit }
    }

    pub fn list_teams(&self) -> Vec<Team> {
        self.teams.find_all()
    }

    pub fn get_team(&self, team_id: &str) -> Result<Team> {
        self.teams
            .find_by_id(team_id)
            .ok_or_else(|| LeagueError::NotFound(format!("team {}", team_id)))
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    pub fn teams(&self) -> &R {
        &self.teams
    }

    pub fn into_parts(self) -> (R, A) {
        (self.teams, self.audit)
    }

    /// Unconditional.
    pub fn register_team(&mut self, actor: &Role, team: Team) {
        let after = team.snapshot();
        info!(team = team.id(), actor = actor.id(), "registering team");
        self.teams.save(team);
        self.record(actor, AuditAction::RegisterTeam, NO_STATE, &after);
    }

    /// The cap is committed strictly before the roster insert; a cap failure
    /// propagates without a ledger entry.
    pub fn sign_player(
        &mut self,
        actor: &Role,
        team_id: &str,
        player: Player,
        contract: &Contract,
        strategy: &SalaryStrategy,
    ) -> Result<()> {
        let mut team = self.get_team(team_id)?;
        let before = team.snapshot();
        self.authorize(actor, AuditAction::SignPlayerRejected, &before, "sign players")?;

        let annual = strategy.annual_salary(&player, contract);
        let player_id = player.id().to_string();
        if let Err(err) = team.salary_cap_mut().commit(annual) {
            warn!(team = team_id, player = %player_id, "sign rejected by salary cap: {}", err);
            return Err(err);
        }
        if let Err(err) = team.add_player(player, annual) {
            warn!(team = team_id, player = %player_id, "sign failed: {}", err);
            return Err(err);
        }

        let after = team.snapshot();
        self.teams.save(team);
        self.record(actor, AuditAction::SignPlayer, &before, &after);
        info!(team = team_id, player = %player_id, annual = %annual, strategy = strategy.name(), "player signed");
        Ok(())
    }

    pub fn waive_player(&mut self, actor: &Role, team_id: &str, player_id: &str) -> Result<()> {
        let mut team = self.get_team(team_id)?;
        let before = team.snapshot();
        self.authorize(actor, AuditAction::WaivePlayerRejected, &before, "waive players")?;

        if team.find_player_by_id(player_id).is_none() {
            self.record(actor, AuditAction::WaivePlayerNotFound, &before, &before);
            warn!(team = team_id, player = player_id, "waive rejected: player not on roster");
            return Err(LeagueError::NotFound(format!("player {} on team {}", player_id, team_id)));
        }

        let annual = team.annual_salary_for(player_id)?;
        team.salary_cap_mut().uncommit(annual);
        team.remove_player(player_id);

        let after = team.snapshot();
        self.teams.save(team);
        self.record(actor, AuditAction::WaivePlayer, &before, &after);
        info!(team = team_id, player = player_id, released = %annual, "player waived");
        Ok(())
    }

    /// Moves a player and their annual salary between teams.
    ///
    /// Not atomic across teams: when the destination rejects the credit (cap or
    /// roster full) the source keeps its debit and no ledger entry is written.
    pub fn trade(&mut self, actor: &Role, from_team_id: &str, to_team_id: &str, player_id: &str) -> Result<()> {
        let mut from = self.get_team(from_team_id)?;
        let mut to = self.get_team(to_team_id)?;
        if from_team_id == to_team_id {
            return Err(ValidationError::SameTeamTrade(from_team_id.to_string()).into());
        }

        let before = format!("{} | {}", from.snapshot(), to.snapshot());
        self.authorize(actor, AuditAction::TradeRejected, &before, "execute trades")?;

        let annual = from.annual_salary_for(player_id).ok();
        let (Some(annual), Some(player)) = (annual, from.remove_player(player_id)) else {
            return Err(LeagueError::NotFound(format!("player {} on team {}", player_id, from_team_id)));
        };

        from.salary_cap_mut().uncommit(annual);
        self.teams.save(from.clone());

        if let Err(err) = to.salary_cap_mut().commit(annual).and_then(|_| to.add_player(player, annual)) {
            warn!(
                from = from_team_id,
                to = to_team_id,
                player = player_id,
                "trade credit failed after debit; source team keeps the debit: {}",
                err
            );
            return Err(err);
        }

        let after = format!("{} | {}", from.snapshot(), to.snapshot());
        self.teams.save(to);
        self.record(actor, AuditAction::TradePlayer, &before, &after);
        info!(from = from_team_id, to = to_team_id, player = player_id, salary = %annual, "trade completed");
        Ok(())
    }

    fn authorize(&mut self, actor: &Role, rejection: AuditAction, snapshot: &str, what: &str) -> Result<()> {
        if actor.can_mutate_roster() {
            return Ok(());
        }
        self.record(actor, rejection, snapshot, snapshot);
        warn!(actor = actor.id(), role = actor.role_name(), action = %rejection, "unauthorized attempt");
        Err(LeagueError::Unauthorized {
            actor_id: actor.id().to_string(),
            role: actor.role_name().to_string(),
            action: what.to_string(),
        })
    }

    fn record(&mut self, actor: &Role, action: AuditAction, before: &str, after: &str) {
        let entry = AuditEntry::new(actor, action, before, after, self.audit.tail_hash());
        self.audit.append(entry);
    }
}
