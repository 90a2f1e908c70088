//! The sign convention table.
//!
//! This is the algorithmic heart of the engine. For each record kind,
//! `KindAmounts` carries the kind-specific monetary figures and the methods
//! below derive the signed balance contribution and the cash movement,
//! always from the business's point of view: positive delta means the party
//! owes more, negative means the party owes less (or the business owes them).
//!
//! Every consumer (adapters, summarizer) goes through this one table so the
//! signs cannot drift between call sites.

use khata_shared::types::Money;
use serde::{Deserialize, Serialize};

use crate::records::PaymentMode;

/// Kind-specific monetary figures for one record.
///
/// Missing monetary fields have already been read as zero by the adapters;
/// a single bad record must not blank the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindAmounts {
    /// Sale invoice figures.
    SaleInvoice {
        /// Invoice total.
        grand_total: Money,
        /// Portion received at invoice time.
        amount_received: Money,
    },
    /// Purchase bill figures.
    PurchaseBill {
        /// Bill total.
        grand_total: Money,
        /// Portion paid at bill time.
        amount_paid: Money,
    },
    /// Standalone payment received from the party.
    PaymentIn {
        /// Amount received.
        amount_received: Money,
    },
    /// Payment made to the party.
    PaymentOut {
        /// Amount paid.
        amount_paid: Money,
    },
    /// Credit note issued to the party.
    CreditNote {
        /// Credit total.
        grand_total: Money,
    },
    /// Expense booked against the party.
    Expense {
        /// Expense total.
        total_amount: Money,
        /// Cash portion settled immediately.
        received_amount: Money,
        /// How the expense was settled.
        mode: PaymentMode,
    },
    /// Document of intent (quotation, order, challan).
    NonFinancial {
        /// Document total, kept for the visible timeline only.
        document_total: Money,
    },
}

impl KindAmounts {
    /// Signed contribution to the party's running balance.
    ///
    /// - Sale invoice: the unreceived portion increases what the customer owes.
    /// - Purchase bill: the unpaid portion increases what the business owes.
    /// - Payment in: standalone collection, reduces the receivable.
    /// - Payment out: reduces what the business owes the party, which raises
    ///   the net receivable figure.
    /// - Credit note: reduces what the customer owes.
    /// - Expense on credit terms: the outstanding portion is owed by the party.
    /// - Anything non-financial: zero.
    #[must_use]
    pub fn balance_delta(&self) -> Money {
        match *self {
            Self::SaleInvoice {
                grand_total,
                amount_received,
            } => grand_total - amount_received,
            Self::PurchaseBill {
                grand_total,
                amount_paid,
            } => -(grand_total - amount_paid),
            Self::PaymentIn { amount_received } => -amount_received,
            Self::PaymentOut { amount_paid } => amount_paid,
            Self::CreditNote { grand_total } => -grand_total,
            Self::Expense {
                total_amount,
                received_amount,
                mode,
            } => {
                if mode.is_credit() {
                    total_amount - received_amount
                } else {
                    Money::ZERO
                }
            }
            Self::NonFinancial { .. } => Money::ZERO,
        }
    }

    /// Cash that moved into the business with this record.
    #[must_use]
    pub fn cash_in(&self) -> Money {
        match *self {
            Self::SaleInvoice {
                amount_received, ..
            }
            | Self::PaymentIn { amount_received } => amount_received,
            Self::PurchaseBill { .. }
            | Self::PaymentOut { .. }
            | Self::CreditNote { .. }
            | Self::Expense { .. }
            | Self::NonFinancial { .. } => Money::ZERO,
        }
    }

    /// Cash that moved out of the business with this record.
    #[must_use]
    pub fn cash_out(&self) -> Money {
        match *self {
            Self::PurchaseBill { amount_paid, .. } | Self::PaymentOut { amount_paid } => {
                amount_paid
            }
            Self::Expense {
                received_amount, ..
            } => received_amount,
            Self::SaleInvoice { .. }
            | Self::PaymentIn { .. }
            | Self::CreditNote { .. }
            | Self::NonFinancial { .. } => Money::ZERO,
        }
    }

    /// The record's gross amount (document total).
    #[must_use]
    pub fn gross_amount(&self) -> Money {
        match *self {
            Self::SaleInvoice { grand_total, .. }
            | Self::PurchaseBill { grand_total, .. }
            | Self::CreditNote { grand_total } => grand_total,
            Self::PaymentIn { amount_received } => amount_received,
            Self::PaymentOut { amount_paid } => amount_paid,
            Self::Expense { total_amount, .. } => total_amount,
            Self::NonFinancial { document_total } => document_total,
        }
    }
}
