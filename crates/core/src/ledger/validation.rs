//! Shape validation for untrusted ledger records.
//!
//! The balance pipeline assumes well-formed input; callers ingesting records
//! from outside the process (files, user uploads) validate them first and
//! fail fast instead of letting malformed amounts flow into sums.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_shared::types::AccountNo;
use thiserror::Error;

use super::types::JournalEntry;

/// Validation errors for ledger records.
#[derive(Debug, Error)]
pub enum LedgerValidationError {
    /// Entry debit amount is negative.
    #[error("Entry for account {account} on {period} has a negative debit: {amount}")]
    NegativeDebit {
        /// The account the entry is posted to.
        account: AccountNo,
        /// The entry's period.
        period: NaiveDate,
        /// The offending amount.
        amount: Decimal,
    },

    /// Entry credit amount is negative.
    #[error("Entry for account {account} on {period} has a negative credit: {amount}")]
    NegativeCredit {
        /// The account the entry is posted to.
        account: AccountNo,
        /// The entry's period.
        period: NaiveDate,
        /// The offending amount.
        amount: Decimal,
    },
}

/// Validates that journal entries carry well-formed amounts.
///
/// Debit and credit must both be non-negative. An empty entry list is valid;
/// it simply yields an empty report downstream.
///
/// # Errors
///
/// Returns an error describing the first malformed entry found.
pub fn validate_entries(entries: &[JournalEntry]) -> Result<(), LedgerValidationError> {
    for entry in entries {
        if entry.debit < Decimal::ZERO {
            return Err(LedgerValidationError::NegativeDebit {
                account: entry.account,
                period: entry.period,
                amount: entry.debit,
            });
        }
        if entry.credit < Decimal::ZERO {
            return Err(LedgerValidationError::NegativeCredit {
                account: entry.account,
                period: entry.period,
                amount: entry.credit,
            });
        }
    }

    Ok(())
}
