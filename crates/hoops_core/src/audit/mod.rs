//! Tamper-evident audit trail of every attempted roster mutation.

pub mod entry;
pub mod ledger;

pub use entry::{sha256_hex, AuditEntry, SHORT_HASH_LEN};
pub use ledger::{AuditLog, InMemoryAuditLog, GENESIS_HASH};

use std::fmt;

/// Action names written to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditAction {
    RegisterTeam,
    SignPlayer,
    SignPlayerRejected,
    WaivePlayer,
    WaivePlayerRejected,
    WaivePlayerNotFound,
    TradePlayer,
    TradeRejected,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::RegisterTeam => "REGISTER_TEAM",
            AuditAction::SignPlayer => "SIGN_PLAYER",
            AuditAction::SignPlayerRejected => "SIGN_PLAYER_REJECTED",
            AuditAction::WaivePlayer => "WAIVE_PLAYER",
            AuditAction::WaivePlayerRejected => "WAIVE_PLAYER_REJECTED",
            AuditAction::WaivePlayerNotFound => "WAIVE_PLAYER_NOT_FOUND",
            AuditAction::TradePlayer => "TRADE_PLAYER",
            AuditAction::TradeRejected => "TRADE_REJECTED",
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AuditAction::SignPlayerRejected
                | AuditAction::WaivePlayerRejected
                | AuditAction::WaivePlayerNotFound
                | AuditAction::TradeRejected
        )
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AuditAction> for String {
    fn from(action: AuditAction) -> Self {
        action.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_names_match_suffix_convention() {
        let all = [
            AuditAction::RegisterTeam,
            AuditAction::SignPlayer,
            AuditAction::SignPlayerRejected,
            AuditAction::WaivePlayer,
            AuditAction::WaivePlayerRejected,
            AuditAction::WaivePlayerNotFound,
            AuditAction::TradePlayer,
            AuditAction::TradeRejected,
        ];
        for action in all {
            let by_name = action.as_str().ends_with("_REJECTED") || action.as_str().ends_with("_NOT_FOUND");
            assert_eq!(action.is_rejection(), by_name, "{}", action);
        }
    }
}
