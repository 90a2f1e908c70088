//! Aggregate totals over a party's ledger.
//!
//! This module provides pure business logic for the summary figures the
//! statement screens display: category totals, money in / money out, and
//! the net receivable over an optional date window.

pub mod service;
pub mod types;


pub use service::Summarizer;
pub use types::LedgerSummary;
