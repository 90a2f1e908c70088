//! The ledger computation pipeline.
//!
//! A pure function of (party, raw record snapshot, options) with no side
//! effects and no persisted intermediate state. The caller owns fetching
//! the record sets (concurrently, if it likes) and invokes the pipeline
//! once every fetch has settled or failed.

use tracing::debug;

use crate::records::adapt::adapt_bundle;
use crate::records::types::RecordBundle;
use crate::summary::Summarizer;

use super::balance::with_running_balances;
use super::consistency;
use super::error::LedgerError;
use super::sequence::sequence;
use super::types::{ComputeOptions, LedgerComputation, Party};

/// Service computing a party's ledger and summary.
pub struct LedgerService;

impl LedgerService {
    /// Runs the full reconciliation pipeline:
    /// adapt every raw record (malformed ones are skipped with a warning),
    /// order the combined stream chronologically, fold the running balance,
    /// summarize over the optional window, and compare against the stored
    /// balance when one is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::EmptyParty`] when no party is resolved. The
    /// engine never returns a partially-wrong balance: anything it cannot
    /// account for is either a collected warning (malformed record) or a
    /// typed failure.
    pub fn compute(
        party: &Party,
        records: &RecordBundle,
        options: &ComputeOptions,
    ) -> Result<LedgerComputation, LedgerError> {
        if party.id.is_nil() || party.name.trim().is_empty() {
            return Err(LedgerError::EmptyParty);
        }

        let (entries, warnings) = adapt_bundle(records);
        debug!(
            party = %party.id,
            records = records.len(),
            adapted = entries.len(),
            skipped = warnings.len(),
            "adapted record bundle"
        );

        let ledger = with_running_balances(party.opening_balance, &sequence(entries));
        let summary = Summarizer::summarize(&ledger, options.window);

        let final_balance = ledger
            .last()
            .map_or(party.opening_balance, |entry| entry.balance_after);
        let consistency = party
            .stored_current_balance
            .map(|stored| consistency::check(final_balance, stored));
        debug!(party = %party.id, %final_balance, "ledger computed");

        Ok(LedgerComputation {
            opening_balance: party.opening_balance,
            ledger,
            summary,
            consistency,
            warnings,
            partial: records.partial,
        })
    }
}
