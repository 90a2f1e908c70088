//! Raw business record shapes and per-kind adapters.
//!
//! Each source kind (invoice, bill, payment, credit note, expense, and the
//! non-financial documents of intent) has its own raw shape and one pure
//! adapter that converts it into a normalized [`crate::ledger::LedgerEntry`].
//! The engine never creates, edits, or deletes these records; they arrive
//! already persisted and already validated from the caller's fetch layer.

pub mod adapt;
pub mod types;

pub use adapt::{
    AdapterError, adapt_bundle, adapt_credit_note, adapt_delivery_challan, adapt_expense,
    adapt_payment_in, adapt_payment_out, adapt_purchase_bill, adapt_purchase_order,
    adapt_quotation, adapt_sale_invoice, adapt_sale_order,
};
pub use types::{
    CreditNote, DeliveryChallan, Expense, PaymentIn, PaymentMode, PaymentOut, PurchaseBill,
    PurchaseOrder, Quotation, RecordBundle, SaleInvoice, SaleOrder,
};
