//! Summary data types.

use khata_shared::types::Money;
use serde::{Deserialize, Serialize};

use crate::ledger::types::DateWindow;

/// Aggregate totals over a (possibly windowed) set of ledger entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// The window the totals are restricted to.
    pub window: DateWindow,
    /// Number of entries inside the window.
    pub entry_count: usize,
    /// Gross total of sale invoices.
    pub total_sale: Money,
    /// Gross total of purchase bills.
    pub total_purchase: Money,
    /// Standalone payments received.
    pub total_payment_in: Money,
    /// Payments made.
    pub total_payment_out: Money,
    /// Gross total of expenses booked against the party.
    pub total_expense: Money,
    /// Net receivable: the sum of every balance delta in the window,
    /// independent of the opening balance.
    pub total_receivable: Money,
    /// All cash that moved into the business, across kinds.
    pub cash_in_total: Money,
    /// All cash that moved out of the business, across kinds.
    pub cash_out_total: Money,
}

impl LedgerSummary {
    /// An all-zero summary for the given window.
    #[must_use]
    pub fn empty(window: DateWindow) -> Self {
        Self {
            window,
            entry_count: 0,
            total_sale: Money::ZERO,
            total_purchase: Money::ZERO,
            total_payment_in: Money::ZERO,
            total_payment_out: Money::ZERO,
            total_expense: Money::ZERO,
            total_receivable: Money::ZERO,
            cash_in_total: Money::ZERO,
            cash_out_total: Money::ZERO,
        }
    }
}
