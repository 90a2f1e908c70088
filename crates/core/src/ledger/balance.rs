//! Running balance calculation.

use khata_shared::types::Money;

use super::entry::LedgerEntry;

/// Stamps each entry with the balance after it is applied.
///
/// A strict left fold seeded with the opening balance:
/// `balance_after[i] = balance_after[i-1] + balance_delta[i]`.
/// Pure and O(n); the input is not mutated, so the same entries can be
/// re-folded with a corrected opening balance without re-deriving them.
#[must_use]
pub fn with_running_balances(opening_balance: Money, entries: &[LedgerEntry]) -> Vec<LedgerEntry> {
    let mut balance = opening_balance;
    entries
        .iter()
        .map(|entry| {
            balance += entry.balance_delta;
            LedgerEntry {
                balance_after: balance,
                ..entry.clone()
            }
        })
        .collect()
}

/// The balance after the last entry, without materializing a stamped ledger.
#[must_use]
pub fn final_balance(opening_balance: Money, entries: &[LedgerEntry]) -> Money {
    opening_balance + entries.iter().map(|e| e.balance_delta).sum::<Money>()
}
