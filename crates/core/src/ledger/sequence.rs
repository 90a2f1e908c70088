//! Chronological sequencing of normalized entries.

use super::entry::LedgerEntry;

/// Orders entries ascending by timestamp with a deterministic tie-break.
///
/// Equal timestamps fall back to the fixed kind priority (invoice before
/// payment, see [`super::entry::RecordKind::sort_priority`]) and then to the
/// original insertion order, which the stable sort preserves. Repeated runs
/// over identical input therefore yield identical ledgers.
#[must_use]
pub fn sequence(mut entries: Vec<LedgerEntry>) -> Vec<LedgerEntry> {
    entries.sort_by_key(|e| (e.timestamp, e.kind.sort_priority()));
    entries
}
