//! Consistency check against the stored party balance.
//!
//! The record-writing side maintains its own `stored_current_balance` per
//! party, updated transactionally whenever a financial record is committed.
//! Comparing it with the engine's computed final balance flags drift (e.g.,
//! a collaborator failed to update the stored value) without ever failing
//! the computation.

use khata_shared::types::Money;
use serde::{Deserialize, Serialize};

/// Result of comparing the computed final balance with the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    /// True when the two balances agree exactly.
    pub matches: bool,
    /// `computed - stored`; zero when they agree.
    pub drift: Money,
}

/// Compares the computed final balance with the independently stored value.
///
/// A mismatch is a data-quality signal surfaced to the caller, never an
/// error.
#[must_use]
pub fn check(computed_final_balance: Money, stored_current_balance: Money) -> ConsistencyResult {
    let drift = computed_final_balance - stored_current_balance;
    ConsistencyResult {
        matches: drift.is_zero(),
        drift,
    }
}
