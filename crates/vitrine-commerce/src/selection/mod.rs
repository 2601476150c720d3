//! Shopper selection module.
//!
//! Contains the selection ledger, unit-price resolution, and the derived
//! totals handed to the presentation layer.

mod ledger;
mod pricing;
mod totals;

pub use ledger::{SelectionKey, SelectionLedger, SelectionLine};
pub use pricing::resolve_display_price;
pub use totals::SelectionTotals;
