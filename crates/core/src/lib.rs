//! Party ledger reconciliation engine for Khata.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It folds a party's raw business records into a chronological running balance
//! and windowed aggregate totals.
//!
//! # Modules
//!
//! - `records` - Raw record shapes and per-kind adapters
//! - `ledger` - Sign conventions, sequencing, running balances, pipeline service
//! - `summary` - Windowed aggregate totals

pub mod ledger;
pub mod records;
pub mod summary;
