use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of staff roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    Coach,
    AssistantCoach,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Coach => "Coach",
            RoleKind::AssistantCoach => "AssistantCoach",
        }
    }

    /// Only coaches may sign, waive or trade.
    pub fn can_mutate_roster(&self) -> bool {
        matches!(self, RoleKind::Coach)
    }
}

/// An acting staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: String,
    display_name: String,
    kind: RoleKind,
}

impl Role {
    pub fn coach(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self { id: id.into(), display_name: display_name.into(), kind: RoleKind::Coach }
    }

    pub fn assistant_coach(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self { id: id.into(), display_name: display_name.into(), kind: RoleKind::AssistantCoach }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn kind(&self) -> RoleKind {
        self.kind
    }

    pub fn role_name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn can_mutate_roster(&self) -> bool {
        self.kind.can_mutate_roster()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.role_name(), self.display_name, self.id)
    }
}
