//! Record adapters: one pure mapping function per source kind.
//!
//! Each adapter is total over well-formed input of its own kind and fails
//! with a [`AdapterError`] when a required identity field is absent. A
//! malformed record is never fatal to the computation; the pipeline skips
//! it and collects a warning.

use chrono::{DateTime, Utc};
use khata_shared::types::{Money, PartyId, RecordId};
use thiserror::Error;
use tracing::warn;

use crate::ledger::entry::{LedgerEntry, RecordKind};
use crate::ledger::normalize::KindAmounts;
use crate::ledger::types::RecordWarning;
use super::types::{
    CreditNote, DeliveryChallan, Expense, PaymentIn, PaymentOut, PurchaseBill, PurchaseOrder,
    Quotation, RecordBundle, SaleInvoice, SaleOrder,
};

/// A single record could not be adapted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The record carries no transaction timestamp.
    #[error("record {0} has no timestamp")]
    MissingTimestamp(RecordId),

    /// The record is not attached to a party.
    #[error("record {0} has no party")]
    MissingParty(RecordId),

    /// A financial record carries no monetary field at all.
    #[error("financial record {0} has no monetary fields")]
    NoMonetaryFields(RecordId),
}

/// Validates the identity fields every record must carry.
fn require_identity(
    record_id: RecordId,
    party_id: PartyId,
    timestamp: Option<DateTime<Utc>>,
) -> Result<DateTime<Utc>, AdapterError> {
    if party_id.is_nil() {
        return Err(AdapterError::MissingParty(record_id));
    }
    timestamp.ok_or(AdapterError::MissingTimestamp(record_id))
}

/// Builds the normalized entry from the sign convention table.
/// `balance_after` is stamped later by the running balance calculator.
fn entry_from(
    kind: RecordKind,
    record_id: RecordId,
    timestamp: DateTime<Utc>,
    reference_number: Option<String>,
    amounts: &KindAmounts,
) -> LedgerEntry {
    LedgerEntry {
        kind,
        record_id,
        timestamp,
        reference_number,
        gross_amount: amounts.gross_amount(),
        cash_in: amounts.cash_in(),
        cash_out: amounts.cash_out(),
        balance_delta: amounts.balance_delta(),
        balance_after: Money::ZERO,
    }
}

/// Adapts a sale invoice.
pub fn adapt_sale_invoice(raw: &SaleInvoice) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    if raw.grand_total.is_none() && raw.amount_received.is_none() {
        return Err(AdapterError::NoMonetaryFields(raw.record_id));
    }
    let amounts = KindAmounts::SaleInvoice {
        grand_total: raw.grand_total.unwrap_or_default(),
        amount_received: raw.amount_received.unwrap_or_default(),
    };
    Ok(entry_from(
        RecordKind::SaleInvoice,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts a purchase bill.
pub fn adapt_purchase_bill(raw: &PurchaseBill) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    if raw.grand_total.is_none() && raw.amount_paid.is_none() {
        return Err(AdapterError::NoMonetaryFields(raw.record_id));
    }
    let amounts = KindAmounts::PurchaseBill {
        grand_total: raw.grand_total.unwrap_or_default(),
        amount_paid: raw.amount_paid.unwrap_or_default(),
    };
    Ok(entry_from(
        RecordKind::PurchaseBill,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts a standalone payment received.
pub fn adapt_payment_in(raw: &PaymentIn) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    let amount_received = raw
        .amount_received
        .ok_or(AdapterError::NoMonetaryFields(raw.record_id))?;
    let amounts = KindAmounts::PaymentIn { amount_received };
    Ok(entry_from(
        RecordKind::PaymentIn,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts a payment made to a party.
pub fn adapt_payment_out(raw: &PaymentOut) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    let amount_paid = raw
        .amount_paid
        .ok_or(AdapterError::NoMonetaryFields(raw.record_id))?;
    let amounts = KindAmounts::PaymentOut { amount_paid };
    Ok(entry_from(
        RecordKind::PaymentOut,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts a credit note.
pub fn adapt_credit_note(raw: &CreditNote) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    let grand_total = raw
        .grand_total
        .ok_or(AdapterError::NoMonetaryFields(raw.record_id))?;
    let amounts = KindAmounts::CreditNote { grand_total };
    Ok(entry_from(
        RecordKind::CreditNote,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts an expense booked against a party.
pub fn adapt_expense(raw: &Expense) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    if raw.total_amount.is_none() && raw.received_amount.is_none() {
        return Err(AdapterError::NoMonetaryFields(raw.record_id));
    }
    let amounts = KindAmounts::Expense {
        total_amount: raw.total_amount.unwrap_or_default(),
        received_amount: raw.received_amount.unwrap_or_default(),
        mode: raw.payment_mode,
    };
    Ok(entry_from(
        RecordKind::Expense,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts a quotation. Timeline-only; never affects the balance.
pub fn adapt_quotation(raw: &Quotation) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    let amounts = KindAmounts::NonFinancial {
        document_total: raw.total.unwrap_or_default(),
    };
    Ok(entry_from(
        RecordKind::Quotation,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts a sale order. Timeline-only; never affects the balance.
pub fn adapt_sale_order(raw: &SaleOrder) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    let amounts = KindAmounts::NonFinancial {
        document_total: raw.total.unwrap_or_default(),
    };
    Ok(entry_from(
        RecordKind::SaleOrder,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts a purchase order. Timeline-only; never affects the balance.
pub fn adapt_purchase_order(raw: &PurchaseOrder) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    let amounts = KindAmounts::NonFinancial {
        document_total: raw.total.unwrap_or_default(),
    };
    Ok(entry_from(
        RecordKind::PurchaseOrder,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts a delivery challan. Timeline-only; never affects the balance.
pub fn adapt_delivery_challan(raw: &DeliveryChallan) -> Result<LedgerEntry, AdapterError> {
    let timestamp = require_identity(raw.record_id, raw.party_id, raw.timestamp)?;
    let amounts = KindAmounts::NonFinancial {
        document_total: raw.total.unwrap_or_default(),
    };
    Ok(entry_from(
        RecordKind::DeliveryChallan,
        raw.record_id,
        timestamp,
        raw.reference_number.clone(),
        &amounts,
    ))
}

/// Adapts every record in the bundle, skipping malformed records.
///
/// The concatenation order is fixed (sales, purchases, payments in,
/// payments out, credit notes, expenses, then the documents of intent) so
/// the stable sort downstream is deterministic for equal sort keys.
#[must_use]
pub fn adapt_bundle(bundle: &RecordBundle) -> (Vec<LedgerEntry>, Vec<RecordWarning>) {
    let mut entries = Vec::with_capacity(bundle.len());
    let mut warnings = Vec::new();

    let mut collect = |kind: RecordKind,
                       record_id: RecordId,
                       result: Result<LedgerEntry, AdapterError>| {
        match result {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                warn!(record = %record_id, kind = %kind, %err, "skipping malformed record");
                warnings.push(RecordWarning {
                    record_id,
                    kind,
                    reason: err.to_string(),
                });
            }
        }
    };

    for raw in &bundle.sales {
        collect(RecordKind::SaleInvoice, raw.record_id, adapt_sale_invoice(raw));
    }
    for raw in &bundle.purchases {
        collect(RecordKind::PurchaseBill, raw.record_id, adapt_purchase_bill(raw));
    }
    for raw in &bundle.payments_in {
        collect(RecordKind::PaymentIn, raw.record_id, adapt_payment_in(raw));
    }
    for raw in &bundle.payments_out {
        collect(RecordKind::PaymentOut, raw.record_id, adapt_payment_out(raw));
    }
    for raw in &bundle.credit_notes {
        collect(RecordKind::CreditNote, raw.record_id, adapt_credit_note(raw));
    }
    for raw in &bundle.expenses {
        collect(RecordKind::Expense, raw.record_id, adapt_expense(raw));
    }
    for raw in &bundle.quotations {
        collect(RecordKind::Quotation, raw.record_id, adapt_quotation(raw));
    }
    for raw in &bundle.sale_orders {
        collect(RecordKind::SaleOrder, raw.record_id, adapt_sale_order(raw));
    }
    for raw in &bundle.purchase_orders {
        collect(RecordKind::PurchaseOrder, raw.record_id, adapt_purchase_order(raw));
    }
    for raw in &bundle.challans {
        collect(RecordKind::DeliveryChallan, raw.record_id, adapt_delivery_challan(raw));
    }

    (entries, warnings)
}
