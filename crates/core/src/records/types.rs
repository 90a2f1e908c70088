//! Raw record shapes as they arrive from the source repositories.
//!
//! Monetary fields are optional: the source data is uneven and a missing
//! figure is read as zero rather than failing the whole computation. Only
//! identity fields (party, timestamp) are hard requirements.

use chrono::{DateTime, Utc};
use khata_shared::types::{Money, PartyId, RecordId};
use serde::{Deserialize, Serialize};

/// How an expense was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Paid in cash.
    #[default]
    Cash,
    /// Paid by cheque.
    Cheque,
    /// Paid by bank transfer / UPI.
    Online,
    /// Booked on credit terms against the party.
    Credit,
    /// Unrecognized mode; treated as non-credit.
    Other,
}

impl PaymentMode {
    /// Returns true if the mode leaves an outstanding amount on the party.
    #[must_use]
    pub fn is_credit(self) -> bool {
        matches!(self, Self::Credit)
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = std::convert::Infallible;

    /// Lenient parse of the free-text modes the source rows carry.
    /// Anything unrecognized is non-credit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "cash" => Self::Cash,
            "cheque" | "check" => Self::Cheque,
            "online" | "bank" | "upi" => Self::Online,
            "credit" => Self::Credit,
            _ => Self::Other,
        })
    }
}

/// Invoice issued to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleInvoice {
    /// Record identity.
    pub record_id: RecordId,
    /// The party invoiced.
    pub party_id: PartyId,
    /// Transaction timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Invoice number.
    pub reference_number: Option<String>,
    /// Invoice total.
    pub grand_total: Option<Money>,
    /// Amount received at invoice time.
    pub amount_received: Option<Money>,
}

/// Bill received from a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseBill {
    /// Record identity.
    pub record_id: RecordId,
    /// The supplier billed by.
    pub party_id: PartyId,
    /// Transaction timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Bill number.
    pub reference_number: Option<String>,
    /// Bill total.
    pub grand_total: Option<Money>,
    /// Amount paid at bill time.
    pub amount_paid: Option<Money>,
}

/// Standalone payment received from a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIn {
    /// Record identity.
    pub record_id: RecordId,
    /// The paying party.
    pub party_id: PartyId,
    /// Transaction timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Receipt number.
    pub reference_number: Option<String>,
    /// Amount received.
    pub amount_received: Option<Money>,
}

/// Payment made to a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOut {
    /// Record identity.
    pub record_id: RecordId,
    /// The party paid.
    pub party_id: PartyId,
    /// Transaction timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Voucher number.
    pub reference_number: Option<String>,
    /// Amount paid.
    pub amount_paid: Option<Money>,
}

/// Credit note issued to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditNote {
    /// Record identity.
    pub record_id: RecordId,
    /// The credited party.
    pub party_id: PartyId,
    /// Transaction timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Credit note number.
    pub reference_number: Option<String>,
    /// Credit total.
    pub grand_total: Option<Money>,
}

/// Business expense booked against a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Record identity.
    pub record_id: RecordId,
    /// The party the expense is booked against.
    pub party_id: PartyId,
    /// Transaction timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Expense voucher number.
    pub reference_number: Option<String>,
    /// Expense total.
    pub total_amount: Option<Money>,
    /// Cash portion settled immediately.
    pub received_amount: Option<Money>,
    /// How the expense was settled.
    pub payment_mode: PaymentMode,
}

/// Price quotation sent to a party. Document of intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    /// Record identity.
    pub record_id: RecordId,
    /// The quoted party.
    pub party_id: PartyId,
    /// Document timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Quotation number.
    pub reference_number: Option<String>,
    /// Quoted total, shown on the timeline only.
    pub total: Option<Money>,
}

/// Confirmed sale order. Document of intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrder {
    /// Record identity.
    pub record_id: RecordId,
    /// The ordering party.
    pub party_id: PartyId,
    /// Document timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Order number.
    pub reference_number: Option<String>,
    /// Order total, shown on the timeline only.
    pub total: Option<Money>,
}

/// Confirmed purchase order. Document of intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Record identity.
    pub record_id: RecordId,
    /// The supplier ordered from.
    pub party_id: PartyId,
    /// Document timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Order number.
    pub reference_number: Option<String>,
    /// Order total, shown on the timeline only.
    pub total: Option<Money>,
}

/// Delivery challan accompanying goods. Document of intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryChallan {
    /// Record identity.
    pub record_id: RecordId,
    /// The receiving party.
    pub party_id: PartyId,
    /// Document timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Challan number.
    pub reference_number: Option<String>,
    /// Goods value, shown on the timeline only.
    pub total: Option<Money>,
}

/// One party's raw record sets, fetched independently per kind.
///
/// A failed fetch leaves that kind's list empty and sets `partial`; the
/// engine still reconciles the kinds that succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBundle {
    /// Sale invoices.
    pub sales: Vec<SaleInvoice>,
    /// Purchase bills.
    pub purchases: Vec<PurchaseBill>,
    /// Standalone payments received.
    pub payments_in: Vec<PaymentIn>,
    /// Payments made.
    pub payments_out: Vec<PaymentOut>,
    /// Credit notes.
    pub credit_notes: Vec<CreditNote>,
    /// Expenses booked against the party.
    pub expenses: Vec<Expense>,
    /// Quotations.
    pub quotations: Vec<Quotation>,
    /// Sale orders.
    pub sale_orders: Vec<SaleOrder>,
    /// Purchase orders.
    pub purchase_orders: Vec<PurchaseOrder>,
    /// Delivery challans.
    pub challans: Vec<DeliveryChallan>,
    /// True when at least one source fetch failed and its list was left empty.
    pub partial: bool,
}

impl RecordBundle {
    /// Total number of raw records across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sales.len()
            + self.purchases.len()
            + self.payments_in.len()
            + self.payments_out.len()
            + self.credit_notes.len()
            + self.expenses.len()
            + self.quotations.len()
            + self.sale_orders.len()
            + self.purchase_orders.len()
            + self.challans.len()
    }

    /// Returns true if every list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
