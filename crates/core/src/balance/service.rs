//! Balance pipeline facade.

use super::aggregate::aggregate;
use super::filter::filter;
use super::query::BalanceQuery;
use super::range;
use super::types::BalanceReport;
use crate::ledger::{Account, AccountIndex, JournalEntry};
use crate::render::{self, RenderError};

/// Facade wiring resolver → filter → aggregator → formatter.
///
/// Every stage is a pure function of its inputs; the whole report is rebuilt
/// on each call. Callers re-run the pipeline whenever accounts, entries, or
/// the query change — there are no implicit recomputation triggers.
pub struct BalanceService;

impl BalanceService {
    /// Computes the aggregated report for a query.
    ///
    /// An empty ledger (no accounts or no entries) yields an empty report.
    #[must_use]
    pub fn report(
        accounts: &[Account],
        entries: &[JournalEntry],
        query: &BalanceQuery,
    ) -> BalanceReport {
        let Some(range) = range::resolve(accounts, entries, query) else {
            return BalanceReport::empty();
        };

        let index = AccountIndex::from_accounts(accounts);
        let admissible = filter(entries, &index, &range);
        aggregate(&admissible, &index)
    }

    /// Runs the full pipeline, returning both the structured report and the
    /// rendered text.
    ///
    /// The two outputs stay decoupled so the rendering format can be swapped
    /// without touching aggregation. `date_format` is the `chrono` format
    /// string used to display period bounds in the header.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if report encoding fails.
    pub fn run(
        accounts: &[Account],
        entries: &[JournalEntry],
        query: &BalanceQuery,
        date_format: &str,
    ) -> Result<(BalanceReport, String), RenderError> {
        let report = Self::report(accounts, entries, query);
        let rendered = render::render(&report, query, date_format)?;
        Ok((report, rendered))
    }
}
