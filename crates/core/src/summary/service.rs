//! Summary generation service.

use crate::ledger::entry::{LedgerEntry, RecordKind};
use crate::ledger::types::DateWindow;

use super::types::LedgerSummary;

/// Service for deriving aggregate totals from a ledger.
pub struct Summarizer;

impl Summarizer {
    /// Reduces the windowed entries to their aggregate totals in one pass.
    ///
    /// The per-kind amounts come from the entries themselves, which were
    /// produced by the sign convention table, so `total_receivable` is
    /// always consistent with the running balance restricted to the same
    /// window.
    #[must_use]
    pub fn summarize(entries: &[LedgerEntry], window: DateWindow) -> LedgerSummary {
        let mut summary = LedgerSummary::empty(window);

        for entry in entries.iter().filter(|e| window.contains(e.timestamp)) {
            match entry.kind {
                RecordKind::SaleInvoice => summary.total_sale += entry.gross_amount,
                RecordKind::PurchaseBill => summary.total_purchase += entry.gross_amount,
                RecordKind::PaymentIn => summary.total_payment_in += entry.cash_in,
                RecordKind::PaymentOut => summary.total_payment_out += entry.cash_out,
                RecordKind::Expense => summary.total_expense += entry.gross_amount,
                // Credit notes show up in the receivable only; documents of
                // intent contribute nothing.
                RecordKind::CreditNote
                | RecordKind::Quotation
                | RecordKind::SaleOrder
                | RecordKind::PurchaseOrder
                | RecordKind::DeliveryChallan => {}
            }
            summary.total_receivable += entry.balance_delta;
            summary.cash_in_total += entry.cash_in;
            summary.cash_out_total += entry.cash_out;
            summary.entry_count += 1;
        }

        summary
    }
}
