//! Ledger domain types for the computation pipeline.

use chrono::{DateTime, Utc};
use khata_shared::types::{Money, PartyId, RecordId};
use serde::{Deserialize, Serialize};

use super::consistency::ConsistencyResult;
use super::entry::{LedgerEntry, RecordKind};
use crate::summary::LedgerSummary;

/// A trading party: customer or supplier.
///
/// `stored_current_balance` is owned by the record-writing side and is
/// read-only here; the engine only compares against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Party identity.
    pub id: PartyId,
    /// Display name.
    pub name: String,
    /// Balance carried forward before the earliest record.
    /// Positive means the party owes the business.
    pub opening_balance: Money,
    /// Authoritative balance maintained by the collaborators, used only
    /// for the consistency check.
    pub stored_current_balance: Option<Money>,
}

impl Party {
    /// Creates a party with a zero opening balance and no stored balance.
    #[must_use]
    pub fn new(id: PartyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            opening_balance: Money::ZERO,
            stored_current_balance: None,
        }
    }
}

/// An inclusive date window; an omitted bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// Inclusive lower bound.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound.
    pub to: Option<DateTime<Utc>>,
}

impl DateWindow {
    /// The window covering all of time.
    pub const UNBOUNDED: Self = Self {
        from: None,
        to: None,
    };

    /// Returns true if the timestamp falls inside the window.
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| timestamp >= from)
            && self.to.is_none_or(|to| timestamp <= to)
    }
}

/// Options for one ledger computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeOptions {
    /// Window the summary is restricted to. The ledger itself always
    /// covers the full history so running balances stay stable regardless
    /// of which subset is viewed.
    pub window: DateWindow,
}

/// A malformed record that was skipped rather than failing the computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordWarning {
    /// The skipped record.
    pub record_id: RecordId,
    /// Its kind.
    pub kind: RecordKind,
    /// Human-readable reason.
    pub reason: String,
}

/// The result of one ledger computation; a fresh, independently owned
/// value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerComputation {
    /// The opening balance the running balances were folded from.
    pub opening_balance: Money,
    /// Chronological entries with running balances stamped.
    pub ledger: Vec<LedgerEntry>,
    /// Aggregate totals over the (possibly windowed) entries.
    pub summary: LedgerSummary,
    /// Comparison against the stored balance, when one was supplied.
    pub consistency: Option<ConsistencyResult>,
    /// Malformed records skipped during adaptation.
    pub warnings: Vec<RecordWarning>,
    /// True when the caller could not fetch every record set.
    pub partial: bool,
}

impl LedgerComputation {
    /// The balance after the last entry, or the opening balance for an
    /// empty ledger.
    #[must_use]
    pub fn final_balance(&self) -> Money {
        self.ledger
            .last()
            .map_or(self.opening_balance, |entry| entry.balance_after)
    }
}
