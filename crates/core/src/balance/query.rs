//! Balance query model and lenient bound parsing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_shared::types::AccountNo;

/// Output format for a rendered balance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values, one record per row.
    Csv,
    /// Aligned plain-text table with a header row.
    Table,
}

/// A balance query: optional account/period bounds plus an output format.
///
/// `None` on a bound means "unbounded on that side"; the resolver substitutes
/// the ledger's own extremes. `None` for `format` suppresses rendering
/// entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceQuery {
    /// Lower account bound, inclusive.
    pub start_account: Option<AccountNo>,
    /// Upper account bound, inclusive.
    pub end_account: Option<AccountNo>,
    /// Lower period bound, inclusive.
    pub start_period: Option<NaiveDate>,
    /// Upper period bound, inclusive.
    pub end_period: Option<NaiveDate>,
    /// Selected output format, if any.
    pub format: Option<OutputFormat>,
}

impl BalanceQuery {
    /// Builds a query from raw user-supplied text fields.
    ///
    /// Unparseable or empty bounds are treated as unset rather than errors,
    /// so free-form input degrades to "unbounded" instead of failing.
    #[must_use]
    pub fn from_raw(
        start_account: &str,
        end_account: &str,
        start_period: &str,
        end_period: &str,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            start_account: parse_account(start_account),
            end_account: parse_account(end_account),
            start_period: parse_period(start_period),
            end_period: parse_period(end_period),
            format,
        }
    }
}

/// Leniently parses an account bound; invalid input means "unset".
#[must_use]
pub fn parse_account(raw: &str) -> Option<AccountNo> {
    raw.trim().parse().ok()
}

/// Leniently parses a period bound (`YYYY-MM-DD`); invalid input means "unset".
#[must_use]
pub fn parse_period(raw: &str) -> Option<NaiveDate> {
    raw.trim().parse().ok()
}
