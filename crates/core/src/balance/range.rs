//! Effective query-range resolution.

use chrono::NaiveDate;
use tally_shared::types::AccountNo;

use super::query::BalanceQuery;
use crate::ledger::{Account, JournalEntry};

/// The concrete bounds a query resolves to once ledger defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveRange {
    /// Lower account bound, inclusive.
    pub account_lo: AccountNo,
    /// Upper account bound, inclusive.
    pub account_hi: AccountNo,
    /// Lower period bound, inclusive.
    pub period_lo: NaiveDate,
    /// Upper period bound, inclusive.
    pub period_hi: NaiveDate,
}

impl EffectiveRange {
    /// Returns true if the account and period both fall within this range.
    ///
    /// All four bounds are inclusive.
    #[must_use]
    pub fn contains(&self, account: AccountNo, period: NaiveDate) -> bool {
        account >= self.account_lo
            && account <= self.account_hi
            && period >= self.period_lo
            && period <= self.period_hi
    }
}

/// Resolves unset query bounds against the ledger's own extremes.
///
/// Unset bounds default to the first/last *listed* account and entry period,
/// in the order the caller supplied them. Callers wanting numeric min/max
/// semantics sort their lists first.
///
/// Returns `None` when the ledger has no accounts or no entries; nothing can
/// be admissible then.
#[must_use]
pub fn resolve(
    accounts: &[Account],
    entries: &[JournalEntry],
    query: &BalanceQuery,
) -> Option<EffectiveRange> {
    let first_account = accounts.first()?;
    let last_account = accounts.last()?;
    let first_entry = entries.first()?;
    let last_entry = entries.last()?;

    Some(EffectiveRange {
        account_lo: query.start_account.unwrap_or(first_account.account),
        account_hi: query.end_account.unwrap_or(last_account.account),
        period_lo: query.start_period.unwrap_or(first_entry.period),
        period_hi: query.end_period.unwrap_or(last_entry.period),
    })
}
