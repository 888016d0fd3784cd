//! CSV body encoding.

use super::error::RenderError;
use crate::balance::BalanceReport;

/// Encodes report rows as CSV records.
///
/// Column order is ACCOUNT, DESCRIPTION, DEBIT, CREDIT, BALANCE with no
/// header record; numeric fields render as plain numbers. Quoting of labels
/// containing separators is left to the `csv` writer.
pub(super) fn to_csv(report: &BalanceReport) -> Result<String, RenderError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    for row in &report.rows {
        writer.write_record([
            row.account.to_string(),
            row.description.clone(),
            row.debit.to_string(),
            row.credit.to_string(),
            row.balance.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| RenderError::Encode(e.to_string()))?;

    Ok(text.trim_end_matches('\n').to_string())
}
