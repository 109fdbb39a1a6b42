//! Append-only hash-chained ledger
//!
//! Each entry's hash covers its predecessor's hash, so editing, removing,
//! inserting or reordering any stored entry breaks verification from that
//! point on.

use super::entry::AuditEntry;

/// Sentinel used as `prev_hash` of the first entry
pub const GENESIS_HASH: &str = "GENESIS";

/// Storage seam for the audit ledger
pub trait AuditLog {
    fn genesis_hash(&self) -> &str {
        GENESIS_HASH
    }

    /// Adds to the end only.
    fn append(&mut self, entry: AuditEntry);

    /// Snapshot in insertion order
    fn all(&self) -> Vec<AuditEntry>;

    /// Hash of the last entry, or genesis when empty
    fn tail_hash(&self) -> String;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the first entry that fails verification.
    fn first_invalid_index(&self) -> Option<usize> {
        let mut prev = self.genesis_hash().to_string();
        for (idx, entry) in self.all().iter().enumerate() {
            if !entry.verifies_against(&prev) {
                return Some(idx);
            }
            prev = entry.hash().to_string();
        }
        None
    }

    fn verify_integrity(&self) -> bool {
        self.first_invalid_index().is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    entries: Vec<AuditEntry>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates persisted entries as-is. Nothing is re-hashed, so tampering
    /// in storage shows up in [`AuditLog::verify_integrity`].
    pub fn from_entries(entries: Vec<AuditEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn rejections(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(|e| e.is_rejection())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<AuditEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }
}

impl AuditLog for InMemoryAuditLog {
    fn append(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    fn all(&self) -> Vec<AuditEntry> {
        self.entries.clone()
    }

    fn tail_hash(&self) -> String {
        self.entries
            .last()
            .map(|e| e.hash().to_string())
            .unwrap_or_else(|| GENESIS_HASH.to_string())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn first_invalid_index(&self) -> Option<usize> {
        let mut prev = GENESIS_HASH;
        for (idx, entry) in self.entries.iter().enumerate() {
            if !entry.verifies_against(prev) {
                tracing::debug!(index = idx, action = entry.action(), "audit chain broken");
                return Some(idx);
            }
            prev = entry.hash();
        }
        None
    }
}
