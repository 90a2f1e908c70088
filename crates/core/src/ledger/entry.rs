//! Ledger entry domain types.

use chrono::{DateTime, Utc};
use khata_shared::types::{Money, RecordId};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// The closed set of record kinds the engine understands.
///
/// Replaces the free-text type strings the source records carry; adding a
/// kind is a compile-time-checked change because every dispatch site is an
/// exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Invoice issued to a customer.
    SaleInvoice,
    /// Cash collected from a party, standalone of any invoice.
    PaymentIn,
    /// Bill received from a supplier.
    PurchaseBill,
    /// Cash paid to a party.
    PaymentOut,
    /// Credit issued to a customer (returns, adjustments).
    CreditNote,
    /// Business expense booked against a party.
    Expense,
    /// Price quotation. Document of intent, never affects the balance.
    Quotation,
    /// Confirmed sale order. Document of intent.
    SaleOrder,
    /// Confirmed purchase order. Document of intent.
    PurchaseOrder,
    /// Delivery challan accompanying goods. Document of intent.
    DeliveryChallan,
}

impl RecordKind {
    /// Returns true if this kind represents a completed financial obligation.
    #[must_use]
    pub fn is_financial(self) -> bool {
        !matches!(
            self,
            Self::Quotation | Self::SaleOrder | Self::PurchaseOrder | Self::DeliveryChallan
        )
    }

    /// Fixed total order used as the tie-break for equal timestamps.
    ///
    /// Invoices sort before payments so a same-day invoice+payment pair
    /// applies the gross delta before the cash delta, never producing a
    /// transient negative balance.
    #[must_use]
    pub fn sort_priority(self) -> u8 {
        match self {
            Self::SaleInvoice => 0,
            Self::PaymentIn => 1,
            Self::PurchaseBill => 2,
            Self::PaymentOut => 3,
            Self::CreditNote => 4,
            Self::Expense => 5,
            Self::Quotation => 6,
            Self::SaleOrder => 7,
            Self::PurchaseOrder => 8,
            Self::DeliveryChallan => 9,
        }
    }

    /// Canonical tag for this kind.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::SaleInvoice => "sale_invoice",
            Self::PaymentIn => "payment_in",
            Self::PurchaseBill => "purchase_bill",
            Self::PaymentOut => "payment_out",
            Self::CreditNote => "credit_note",
            Self::Expense => "expense",
            Self::Quotation => "quotation",
            Self::SaleOrder => "sale_order",
            Self::PurchaseOrder => "purchase_order",
            Self::DeliveryChallan => "delivery_challan",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = LedgerError;

    /// Parses the free-text kind tags found on legacy rows.
    ///
    /// An unrecognized tag is fatal to the computation: silently assigning
    /// it a zero delta could hide real money.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sale" | "sale_invoice" | "invoice" => Ok(Self::SaleInvoice),
            "payment_in" | "receipt" => Ok(Self::PaymentIn),
            "purchase" | "purchase_bill" | "bill" => Ok(Self::PurchaseBill),
            "payment_out" => Ok(Self::PaymentOut),
            "credit_note" | "sale_return" => Ok(Self::CreditNote),
            "expense" => Ok(Self::Expense),
            "quotation" | "estimate" => Ok(Self::Quotation),
            "sale_order" => Ok(Self::SaleOrder),
            "purchase_order" => Ok(Self::PurchaseOrder),
            "delivery_challan" | "challan" => Ok(Self::DeliveryChallan),
            _ => Err(LedgerError::UnknownKind(s.to_string())),
        }
    }
}

/// One normalized, dated entry in a party's ledger.
///
/// Immutable value object created fresh on every computation; `balance_after`
/// is stamped by the running balance calculator, every other field comes
/// from the record adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The kind of record this entry was adapted from.
    pub kind: RecordKind,
    /// The source record.
    pub record_id: RecordId,
    /// Transaction timestamp.
    pub timestamp: DateTime<Utc>,
    /// Document reference number (e.g., invoice number), if any.
    pub reference_number: Option<String>,
    /// The record's gross amount (document total).
    pub gross_amount: Money,
    /// Cash that moved into the business with this record.
    pub cash_in: Money,
    /// Cash that moved out of the business with this record.
    pub cash_out: Money,
    /// Signed contribution to the running balance.
    /// Positive means the party owes more.
    pub balance_delta: Money,
    /// Running balance after this entry is applied.
    pub balance_after: Money,
}
