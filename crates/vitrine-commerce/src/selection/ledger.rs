//! The selection ledger and its line types.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Product;
use crate::ids::{ProductId, VariantId};
use crate::selection::pricing::resolve_display_price;
use crate::selection::totals::SelectionTotals;

/// Identity of a selection line: the product plus the chosen variant,
/// or no variant for a base-product selection.
///
/// A base-product line and a variant line for the same product are
/// always distinct; they never merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionKey {
    /// Product identifier.
    pub product_id: ProductId,
    /// Chosen variant, absent for a base-product selection.
    pub variant_id: Option<VariantId>,
}

impl SelectionKey {
    /// Create a selection key.
    pub fn new(product_id: ProductId, variant_id: Option<VariantId>) -> Self {
        Self {
            product_id,
            variant_id,
        }
    }

    fn matches(&self, product_id: &ProductId, variant_id: Option<&VariantId>) -> bool {
        &self.product_id == product_id && self.variant_id.as_ref() == variant_id
    }
}

/// One entry in the shopper's working selection.
///
/// Name, price, variant name, category, and image are snapshotted when
/// the line is created and never re-joined against live product data,
/// so the selection shows the prices it was made at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionLine {
    /// Line identity.
    pub key: SelectionKey,
    /// Product name at add-time.
    pub product_name: String,
    /// Resolved unit price display string at add-time.
    pub unit_price: String,
    /// Source category at add-time, if any.
    pub category: Option<String>,
    /// Chosen variant name at add-time, if it resolved.
    pub variant_name: Option<String>,
    /// First product image URL at add-time, if any.
    pub image_url: Option<String>,
    /// Number of units.
    pub quantity: i64,
}

impl SelectionLine {
    /// Get the product identifier.
    pub fn product_id(&self) -> &ProductId {
        &self.key.product_id
    }

    /// Get the chosen variant identifier, if any.
    pub fn variant_id(&self) -> Option<&VariantId> {
        self.key.variant_id.as_ref()
    }
}

/// The ordered, in-memory selection for one catalog view.
///
/// Lines keep insertion order; no re-sorting by name, price, or recency.
/// One view instance owns one ledger; nothing is persisted. All
/// operations are synchronous total functions: unknown identities are
/// silent no-ops, never errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionLedger {
    lines: Vec<SelectionLine>,
}

impl SelectionLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product/variant choice.
    ///
    /// An existing line with the same identity has its quantity
    /// incremented and its snapshots left untouched; otherwise a new
    /// line is appended with freshly resolved snapshots. A variant ID
    /// that matches nothing on the product still keys the line (the
    /// identity is what the caller asked for) but snapshots no variant
    /// name and falls back to the base price.
    ///
    /// Quantity is not validated here; zero or negative still
    /// creates/increments. `remove` and `update_quantity` are the
    /// documented paths to deletion.
    pub fn add(&mut self, product: &Product, variant_id: Option<&VariantId>, quantity: i64) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.key.matches(&product.id, variant_id))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            debug!(
                product_id = %product.id,
                quantity = line.quantity,
                "merged into existing selection line"
            );
            return;
        }

        let unit_price = resolve_display_price(product, variant_id);
        let variant_name = variant_id
            .and_then(|id| product.variant(id))
            .map(|v| v.name.clone());
        self.lines.push(SelectionLine {
            key: SelectionKey::new(product.id.clone(), variant_id.cloned()),
            product_name: product.name.clone(),
            unit_price,
            category: product.category.clone(),
            variant_name,
            image_url: product.first_image().map(|i| i.url.clone()),
            quantity,
        });
        debug!(product_id = %product.id, quantity, "appended selection line");
    }

    /// Remove the line with the exact identity. No-op if absent.
    pub fn remove(&mut self, product_id: &ProductId, variant_id: Option<&VariantId>) -> bool {
        let len_before = self.lines.len();
        self.lines
            .retain(|l| !l.key.matches(product_id, variant_id));
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(product_id = %product_id, "removed selection line");
        }
        removed
    }

    /// Set a line's quantity outright.
    ///
    /// A quantity of zero or below behaves exactly as `remove`. No-op
    /// if the line does not exist.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        variant_id: Option<&VariantId>,
        quantity: i64,
    ) -> bool {
        if quantity <= 0 {
            return self.remove(product_id, variant_id);
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.key.matches(product_id, variant_id))
        {
            line.quantity = quantity;
            debug!(product_id = %product_id, quantity, "updated selection line quantity");
            true
        } else {
            false
        }
    }

    /// Check whether a line with the exact identity exists.
    ///
    /// A base-product query returns false when only variant lines exist
    /// for that product, and vice versa.
    pub fn is_selected(&self, product_id: &ProductId, variant_id: Option<&VariantId>) -> bool {
        self.lines
            .iter()
            .any(|l| l.key.matches(product_id, variant_id))
    }

    /// Get the line with the exact identity, if any.
    pub fn line(
        &self,
        product_id: &ProductId,
        variant_id: Option<&VariantId>,
    ) -> Option<&SelectionLine> {
        self.lines
            .iter()
            .find(|l| l.key.matches(product_id, variant_id))
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[SelectionLine] {
        &self.lines
    }

    /// Check if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empty the ledger unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        debug!("cleared selection");
    }

    /// Number of distinct lines.
    pub fn distinct_lines(&self) -> usize {
        self.lines.len()
    }

    /// Sum of every line's quantity.
    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Both derived totals, recomputed fresh.
    pub fn totals(&self) -> SelectionTotals {
        SelectionTotals::of(self)
    }
}
