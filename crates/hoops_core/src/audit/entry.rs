use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::domain::Role;

/// Hex characters shown when an entry is displayed
pub const SHORT_HASH_LEN: usize = 12;

/// One immutable, hash-linked ledger record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    actor_id: String,
    actor_role: String,
    action: String,
    before_state: String,
    after_state: String,
    timestamp: DateTime<Utc>,
    prev_hash: String,
    hash: String,
}

impl AuditEntry {
    /// Stamps the current time and links the entry to `prev_hash`.
    pub fn new(
        actor: &Role,
        action: impl Into<String>,
        before_state: impl Into<String>,
        after_state: impl Into<String>,
        prev_hash: impl Into<String>,
    ) -> Self {
        Self::at(actor, action, before_state, after_state, prev_hash, Utc::now())
    }

    pub fn at(
        actor: &Role,
        action: impl Into<String>,
        before_state: impl Into<String>,
        after_state: impl Into<String>,
        prev_hash: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let mut entry = Self {
            actor_id: actor.id().to_string(),
            actor_role: actor.role_name().to_string(),
            action: action.into(),
            before_state: before_state.into(),
            after_state: after_state.into(),
            timestamp,
            prev_hash: prev_hash.into(),
            hash: String::new(),
        };
        entry.hash = entry.compute_hash(&entry.prev_hash);
        entry
    }

    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    pub fn actor_role(&self) -> &str {
        &self.actor_role
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn before_state(&self) -> &str {
        &self.before_state
    }

    pub fn after_state(&self) -> &str {
        &self.after_state
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn prev_hash(&self) -> &str {
        &self.prev_hash
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Display only; verification always uses the full hash.
    pub fn short_hash(&self) -> &str {
        let end = SHORT_HASH_LEN.min(self.hash.len());
        self.hash.get(..end).unwrap_or(&self.hash)
    }

    pub fn is_rejection(&self) -> bool {
        self.action.ends_with("_REJECTED") || self.action.ends_with("_NOT_FOUND")
    }

    /// Recomputes the hash from the stored fields and `expected_prev`; the
    /// stored link must also point at `expected_prev`.
    pub fn verifies_against(&self, expected_prev: &str) -> bool {
        self.prev_hash == expected_prev && self.compute_hash(expected_prev) == self.hash
    }

    /// Each field is fed to SHA-256 behind its byte length, so text cannot
    /// shift from one field into its neighbour without changing the hash.
    fn compute_hash(&self, prev_hash: &str) -> String {
        let timestamp = self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true);
        let fields: [&str; 7] = [
            prev_hash,
            self.actor_id.as_str(),
            self.actor_role.as_str(),
            self.action.as_str(),
            self.before_state.as_str(),
            self.after_state.as_str(),
            timestamp.as_str(),
        ];

        let mut hasher = Sha256::new();
        for field in fields {
            hasher.update((field.len() as u64).to_be_bytes());
            hasher.update(field.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} action={} hash={}...",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.actor_role,
            self.actor_id,
            self.action,
            self.short_hash()
        )
    }
}

pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
