//! Fatal error types for ledger computations.
//!
//! Malformed individual records are NOT here: they are dropped with a
//! collected warning (see [`crate::records::AdapterError`]). The variants
//! below abort the whole computation; the engine never presents a best
//! guess balance when it cannot account for all supplied records.

use thiserror::Error;

/// Errors that abort a ledger computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A record carries a kind tag the engine has no rule for. Silently
    /// assigning it a zero delta could hide real money.
    #[error("unknown record kind tag: {0}")]
    UnknownKind(String),

    /// No party resolved for the computation; caller error.
    #[error("no party resolved for ledger computation")]
    EmptyParty,
}

impl LedgerError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownKind(_) => "UNKNOWN_KIND",
            Self::EmptyParty => "EMPTY_PARTY",
        }
    }
}
