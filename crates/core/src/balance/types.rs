//! Balance report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::AccountNo;

/// One aggregated row per account with at least one admissible entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// The account number.
    pub account: AccountNo,
    /// The account's descriptive label.
    pub description: String,
    /// Sum of debit amounts.
    pub debit: Decimal,
    /// Sum of credit amounts.
    pub credit: Decimal,
    /// Net balance (debit minus credit).
    pub balance: Decimal,
}

/// Debit/credit totals across all report rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
}

impl ReportTotals {
    /// Sums totals from a set of report rows.
    #[must_use]
    pub fn from_rows(rows: &[BalanceRow]) -> Self {
        Self {
            total_debit: rows.iter().map(|r| r.debit).sum(),
            total_credit: rows.iter().map(|r| r.credit).sum(),
        }
    }
}

/// An aggregated trial-balance report.
///
/// Rows are ordered by first encounter while scanning admissible entries.
/// The report is rebuilt fresh on every query; nothing persists across
/// queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// The aggregated rows.
    pub rows: Vec<BalanceRow>,
    /// Totals across rows.
    pub totals: ReportTotals,
}

impl BalanceReport {
    /// An empty report: no rows, zero totals.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the report has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(no: i64, debit: Decimal, credit: Decimal) -> BalanceRow {
        BalanceRow {
            account: AccountNo::new(no),
            description: format!("Account {no}"),
            debit,
            credit,
            balance: debit - credit,
        }
    }

    #[test]
    fn test_totals_from_rows() {
        let rows = vec![row(100, dec!(50), dec!(0)), row(200, dec!(0), dec!(30))];
        let totals = ReportTotals::from_rows(&rows);

        assert_eq!(totals.total_debit, dec!(50));
        assert_eq!(totals.total_credit, dec!(30));
    }

    #[test]
    fn test_totals_from_no_rows_are_zero() {
        let totals = ReportTotals::from_rows(&[]);
        assert_eq!(totals.total_debit, dec!(0));
        assert_eq!(totals.total_credit, dec!(0));
    }

    #[test]
    fn test_empty_report() {
        let report = BalanceReport::empty();
        assert!(report.is_empty());
        assert_eq!(report.totals, ReportTotals::default());
    }
}
