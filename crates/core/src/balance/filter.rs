//! Admissible-entry selection.

use super::range::EffectiveRange;
use crate::ledger::{AccountIndex, JournalEntry};

/// Selects the journal entries admissible under the resolved range.
///
/// An entry is admissible when its account is known to the index and both
/// its account and period fall inside the range. Input order is preserved;
/// the function is pure.
#[must_use]
pub fn filter(
    entries: &[JournalEntry],
    index: &AccountIndex,
    range: &EffectiveRange,
) -> Vec<JournalEntry> {
    entries
        .iter()
        .filter(|e| index.contains(e.account) && range.contains(e.account, e.period))
        .cloned()
        .collect()
}
