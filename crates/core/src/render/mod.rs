//! Report rendering.
//!
//! The rendered output is a descriptive header followed by the report body
//! in the selected format. The header always reflects the *user's* query —
//! `*` for unset account bounds, blank for unset periods — never the
//! resolved effective range; the two are deliberately distinct.

pub mod error;

mod csv;
mod table;

use chrono::NaiveDate;
use tally_shared::types::AccountNo;

use crate::balance::{BalanceQuery, BalanceReport, OutputFormat};

pub use error::RenderError;

/// Placeholder displayed for an unset account bound.
const UNSET_ACCOUNT: &str = "*";

/// Renders the report per the query's format selection.
///
/// `date_format` is the `chrono` format string used to display period
/// bounds; the renderer performs no calendar logic of its own.
///
/// # Errors
///
/// Returns `RenderError` if report encoding fails.
pub fn render(
    report: &BalanceReport,
    query: &BalanceQuery,
    date_format: &str,
) -> Result<String, RenderError> {
    render_with(report, query, |d| d.format(date_format).to_string())
}

/// Renders the report with a caller-supplied date display function.
///
/// When the query has no format set, the whole output is suppressed and an
/// empty string is returned, header included.
///
/// # Errors
///
/// Returns `RenderError` if report encoding fails.
pub fn render_with<F>(
    report: &BalanceReport,
    query: &BalanceQuery,
    date_display: F,
) -> Result<String, RenderError>
where
    F: Fn(NaiveDate) -> String,
{
    let Some(format) = query.format else {
        return Ok(String::new());
    };

    let body = match format {
        OutputFormat::Csv => csv::to_csv(report)?,
        OutputFormat::Table => table::to_table(report),
    };

    let mut out = header(report, query, &date_display);
    out.push('\n');
    out.push_str(&body);
    Ok(out)
}

/// Builds the two-line descriptive header: totals, then the displayed query.
fn header<F>(report: &BalanceReport, query: &BalanceQuery, date_display: &F) -> String
where
    F: Fn(NaiveDate) -> String,
{
    format!(
        "Total Debit: {} Total Credit: {}\nBalance from account {} to {} from period {} to {}",
        report.totals.total_debit,
        report.totals.total_credit,
        display_account(query.start_account),
        display_account(query.end_account),
        display_period(query.start_period, date_display),
        display_period(query.end_period, date_display),
    )
}

fn display_account(bound: Option<AccountNo>) -> String {
    bound.map_or_else(|| UNSET_ACCOUNT.to_string(), |a| a.to_string())
}

fn display_period<F>(bound: Option<NaiveDate>, date_display: &F) -> String
where
    F: Fn(NaiveDate) -> String,
{
    bound.map_or_else(String::new, date_display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_shared::types::AccountNo;

    use crate::balance::{BalanceRow, ReportTotals};

    fn report() -> BalanceReport {
        let rows = vec![BalanceRow {
            account: AccountNo::new(100),
            description: "Cash".to_string(),
            debit: dec!(50),
            credit: dec!(0),
            balance: dec!(50),
        }];
        let totals = ReportTotals::from_rows(&rows);
        BalanceReport { rows, totals }
    }

    #[test]
    fn test_no_format_suppresses_all_output() {
        let query = BalanceQuery::default();
        let out = render(&report(), &query, "%Y-%m-%d").unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_header_shows_placeholders_for_unset_bounds() {
        let query = BalanceQuery {
            format: Some(OutputFormat::Csv),
            ..BalanceQuery::default()
        };
        let out = render(&report(), &query, "%Y-%m-%d").unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Total Debit: 50 Total Credit: 0"));
        assert_eq!(
            lines.next(),
            Some("Balance from account * to * from period  to ")
        );
    }

    #[test]
    fn test_header_shows_user_bounds_not_effective_range() {
        let query = BalanceQuery {
            start_account: Some(AccountNo::new(100)),
            end_period: chrono::NaiveDate::from_ymd_opt(2023, 6, 30),
            format: Some(OutputFormat::Csv),
            ..BalanceQuery::default()
        };
        let out = render(&report(), &query, "%Y-%m-%d").unwrap();

        assert!(out.contains("Balance from account 100 to * from period  to 2023-06-30"));
    }

    #[test]
    fn test_render_with_custom_date_display() {
        let query = BalanceQuery {
            start_period: chrono::NaiveDate::from_ymd_opt(2023, 1, 31),
            format: Some(OutputFormat::Csv),
            ..BalanceQuery::default()
        };
        let out = render_with(&report(), &query, |d| d.format("%B %Y").to_string()).unwrap();

        assert!(out.contains("from period January 2023 to "));
    }

    #[test]
    fn test_header_respects_date_format() {
        let query = BalanceQuery {
            start_period: chrono::NaiveDate::from_ymd_opt(2023, 1, 31),
            format: Some(OutputFormat::Csv),
            ..BalanceQuery::default()
        };
        let out = render(&report(), &query, "%d/%m/%Y").unwrap();

        assert!(out.contains("from period 31/01/2023 to "));
    }
}
