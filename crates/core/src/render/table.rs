//! Plain-text table rendering.

use crate::balance::{BalanceReport, BalanceRow};

/// Column headers, in the same order as the CSV output.
const HEADERS: [&str; 5] = ["ACCOUNT", "DESCRIPTION", "DEBIT", "CREDIT", "BALANCE"];

/// Renders the report as an aligned plain-text table.
///
/// A header row comes first, then one line per balance row. The description
/// column aligns left; account and amount columns align right. Column widths
/// are computed from content.
pub(super) fn to_table(report: &BalanceReport) -> String {
    let rows: Vec<[String; 5]> = report.rows.iter().map(cells).collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let header = HEADERS.map(String::from);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(&header, &widths));
    for row in &rows {
        lines.push(format_line(row, &widths));
    }

    lines.join("\n")
}

fn cells(row: &BalanceRow) -> [String; 5] {
    [
        row.account.to_string(),
        row.description.clone(),
        row.debit.to_string(),
        row.credit.to_string(),
        row.balance.to_string(),
    ]
}

fn format_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    format!(
        "{:>aw$}  {:<dw$}  {:>dbw$}  {:>crw$}  {:>bw$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        cells[4],
        aw = widths[0],
        dw = widths[1],
        dbw = widths[2],
        crw = widths[3],
        bw = widths[4],
    )
}
