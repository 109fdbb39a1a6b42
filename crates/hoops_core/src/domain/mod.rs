//! Domain model: money, contracts, salary cap, players, roles and teams.

pub mod contract;
pub mod money;
pub mod player;
pub mod role;
pub mod salary;
pub mod team;
pub mod validation;

pub use contract::{Contract, ContractBuilder};
pub use money::Money;
pub use player::{ExperienceLevel, Player, PlayerKind, Position};
pub use role::{Role, RoleKind};
pub use salary::{SalaryCap, SalaryStrategy};
pub use team::{Team, DEFAULT_MAX_ROSTER_SIZE};
pub use validation::ValidationError;
