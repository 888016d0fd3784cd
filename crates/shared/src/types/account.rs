//! Typed account numbers for type-safe ledger references.
//!
//! Using a newtype prevents accidentally mixing account numbers with other
//! integers (row indices, amounts cast to integers, and so on).

use serde::{Deserialize, Serialize};

/// A general-ledger account number (e.g. 100 for Cash, 200 for Sales).
///
/// Account numbers are ordered, which is what account-range queries
/// compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNo(pub i64);

impl AccountNo {
    /// Creates an account number from a raw integer.
    #[must_use]
    pub const fn new(n: i64) -> Self {
        Self(n)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountNo {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for AccountNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountNo {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
