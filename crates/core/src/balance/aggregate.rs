//! Balance aggregation: grouping admissible entries into report rows.

use std::collections::HashMap;

use tally_shared::types::AccountNo;

use super::types::{BalanceReport, BalanceRow, ReportTotals};
use crate::ledger::{AccountIndex, JournalEntry};

/// Groups admissible entries by account and accumulates their sums.
///
/// Rows appear in the order accounts are first encountered, which keeps the
/// output deterministic for a given entry order. The balance accumulates the
/// per-entry `debit - credit` delta directly rather than being recomputed
/// from the running sums. Entries whose account is missing from the index
/// contribute nothing. Empty input yields an empty report.
#[must_use]
pub fn aggregate(entries: &[JournalEntry], index: &AccountIndex) -> BalanceReport {
    let mut rows: Vec<BalanceRow> = Vec::new();
    let mut row_for: HashMap<AccountNo, usize> = HashMap::new();

    for entry in entries {
        if let Some(&at) = row_for.get(&entry.account) {
            let row = &mut rows[at];
            row.debit += entry.debit;
            row.credit += entry.credit;
            row.balance += entry.net();
        } else if let Some(label) = index.label(entry.account) {
            row_for.insert(entry.account, rows.len());
            rows.push(BalanceRow {
                account: entry.account,
                description: label.to_string(),
                debit: entry.debit,
                credit: entry.credit,
                balance: entry.net(),
            });
        }
    }

    let totals = ReportTotals::from_rows(&rows);
    BalanceReport { rows, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::ledger::Account;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    fn entry(no: i64, day: u32, debit: Decimal, credit: Decimal) -> JournalEntry {
        JournalEntry {
            account: AccountNo::new(no),
            period: date(day),
            debit,
            credit,
        }
    }

    fn index() -> AccountIndex {
        AccountIndex::from_accounts(&[
            Account {
                account: AccountNo::new(100),
                label: "Cash".to_string(),
            },
            Account {
                account: AccountNo::new(200),
                label: "Sales".to_string(),
            },
        ])
    }

    #[test]
    fn test_single_entry_initializes_row() {
        let report = aggregate(&[entry(100, 1, dec!(50), dec!(0))], &index());

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.account, AccountNo::new(100));
        assert_eq!(row.description, "Cash");
        assert_eq!(row.debit, dec!(50));
        assert_eq!(row.credit, dec!(0));
        assert_eq!(row.balance, dec!(50));
    }

    #[test]
    fn test_repeat_entries_accumulate() {
        let entries = vec![
            entry(100, 1, dec!(50), dec!(0)),
            entry(100, 2, dec!(30), dec!(10)),
        ];
        let report = aggregate(&entries, &index());

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.debit, dec!(80));
        assert_eq!(row.credit, dec!(10));
        assert_eq!(row.balance, dec!(70));
    }

    #[test]
    fn test_rows_keep_first_encounter_order() {
        let entries = vec![
            entry(200, 1, dec!(0), dec!(50)),
            entry(100, 2, dec!(50), dec!(0)),
            entry(200, 3, dec!(0), dec!(25)),
        ];
        let report = aggregate(&entries, &index());

        let order: Vec<i64> = report
            .rows
            .iter()
            .map(|r| r.account.into_inner())
            .collect();
        assert_eq!(order, vec![200, 100]);
    }

    #[test]
    fn test_unknown_account_contributes_nothing() {
        let entries = vec![
            entry(100, 1, dec!(50), dec!(0)),
            entry(300, 2, dec!(10), dec!(0)),
        ];
        let report = aggregate(&entries, &index());

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.totals.total_debit, dec!(50));
    }

    #[test]
    fn test_totals_sum_across_rows() {
        let entries = vec![
            entry(100, 1, dec!(50), dec!(0)),
            entry(200, 2, dec!(0), dec!(50)),
            entry(100, 3, dec!(25), dec!(5)),
        ];
        let report = aggregate(&entries, &index());

        assert_eq!(report.totals.total_debit, dec!(75));
        assert_eq!(report.totals.total_credit, dec!(55));
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let report = aggregate(&[], &index());
        assert!(report.is_empty());
        assert_eq!(report.totals.total_debit, dec!(0));
        assert_eq!(report.totals.total_credit, dec!(0));
    }
}
