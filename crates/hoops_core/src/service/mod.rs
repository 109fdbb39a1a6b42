//! Roster mutations and league import

pub mod import;
pub mod management;

pub use import::{
    position_from_code, ImportReport, JsonLeagueSource, LeagueSource, RosterImporter, SourcePlayer, SourceTeam,
};
pub use management::{TeamManagementService, NO_STATE};
