//! Derived selection totals.

use serde::Serialize;

use crate::selection::SelectionLedger;

/// Totals derived from the ledger, recomputed on every read.
///
/// `total_units >= distinct_lines` whenever the selection is non-empty
/// (quantities are positive on the documented paths), and both are zero
/// iff the ledger is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionTotals {
    /// Number of distinct lines.
    pub distinct_lines: usize,
    /// Sum of every line's quantity.
    pub total_units: i64,
}

impl SelectionTotals {
    /// Compute totals for the current ledger state.
    pub fn of(ledger: &SelectionLedger) -> Self {
        Self {
            distinct_lines: ledger.distinct_lines(),
            total_units: ledger.total_units(),
        }
    }
}
