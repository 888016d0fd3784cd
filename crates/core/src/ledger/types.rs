//! Ledger domain types.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::AccountNo;

/// A chart-of-accounts entry: an account number and its descriptive label.
///
/// Serialized field names use the ledger wire casing (`ACCOUNT`, `LABEL`),
/// so exported account files round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Account {
    /// The account number.
    pub account: AccountNo,
    /// Descriptive label (e.g. "Cash").
    pub label: String,
}

/// A single journal entry posted against an account.
///
/// Debit and credit are both carried per entry; one side is normally zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct JournalEntry {
    /// The account this entry is posted to.
    pub account: AccountNo,
    /// The period (date) the entry falls in.
    pub period: NaiveDate,
    /// Debit amount (non-negative).
    pub debit: Decimal,
    /// Credit amount (non-negative).
    pub credit: Decimal,
}

impl JournalEntry {
    /// Net movement of this entry (debit minus credit).
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Label lookup built from the chart of accounts.
///
/// When an account number is defined more than once, the last definition
/// wins. Entries posted to accounts absent from the index are orphaned data
/// and never reach a report.
#[derive(Debug, Clone, Default)]
pub struct AccountIndex {
    labels: HashMap<AccountNo, String>,
}

impl AccountIndex {
    /// Builds the index from a list of accounts.
    #[must_use]
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let labels = accounts
            .iter()
            .map(|a| (a.account, a.label.clone()))
            .collect();
        Self { labels }
    }

    /// Returns true if the account number is known.
    #[must_use]
    pub fn contains(&self, account: AccountNo) -> bool {
        self.labels.contains_key(&account)
    }

    /// Returns the label for a known account.
    #[must_use]
    pub fn label(&self, account: AccountNo) -> Option<&str> {
        self.labels.get(&account).map(String::as_str)
    }

    /// Returns true if no accounts are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
