//! Party ledger reconciliation logic.
//!
//! This module implements the core ledger functionality:
//! - Normalized ledger entries and the closed record-kind enum
//! - The sign convention table (signed balance contribution per kind)
//! - Chronological sequencing with a deterministic tie-break
//! - Running balance calculation (strict left fold)
//! - Consistency check against the stored party balance
//! - Error types for ledger operations
//! - The pipeline service tying the stages together

pub mod balance;
pub mod consistency;
pub mod entry;
pub mod error;
pub mod normalize;
pub mod sequence;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use balance::{final_balance, with_running_balances};
pub use consistency::{ConsistencyResult, check};
pub use entry::{LedgerEntry, RecordKind};
pub use error::LedgerError;
pub use normalize::KindAmounts;
pub use sequence::sequence;
pub use service::LedgerService;
pub use types::{ComputeOptions, DateWindow, LedgerComputation, Party, RecordWarning};
