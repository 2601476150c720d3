//! Unit-price resolution for selection lines.

use crate::catalog::Product;
use crate::ids::VariantId;

/// Resolve the display price for a product and optional variant choice.
///
/// A variant that resolves prices as base plus its signed delta. With no
/// variant, or a variant ID that matches nothing on the product, the
/// merchant's pre-formatted display price wins when present, else the
/// base price is formatted.
///
/// Called once when a selection line is created; the result is
/// snapshotted into the line and never re-resolved, so an in-progress
/// selection keeps the price it was made at even if the catalog changes
/// mid-session.
pub fn resolve_display_price(product: &Product, variant_id: Option<&VariantId>) -> String {
    if let Some(variant) = variant_id.and_then(|id| product.variant(id)) {
        return product.price.offset(variant.price_delta).display();
    }
    match &product.display_price {
        Some(display) => display.clone(),
        None => product.price.display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductVariant;
    use crate::money::{Currency, Money};

    fn product_with_variant() -> Product {
        let mut product = Product::new("product-1", "Test Product", Money::new(100, Currency::USD));
        let mut variant = ProductVariant::new("variant-1", "product-1", "Size M");
        variant.price_delta = 10;
        product.add_variant(variant);
        product
    }

    #[test]
    fn test_variant_price_applies_delta() {
        let product = product_with_variant();
        let price = resolve_display_price(&product, Some(&VariantId::new("variant-1")));
        assert_eq!(price, "$110");
    }

    #[test]
    fn test_base_price_without_variant() {
        let product = product_with_variant();
        assert_eq!(resolve_display_price(&product, None), "$100");
    }

    #[test]
    fn test_display_price_takes_precedence() {
        let mut product = product_with_variant();
        product.display_price = Some("$99 (sale)".to_string());
        assert_eq!(resolve_display_price(&product, None), "$99 (sale)");
    }

    #[test]
    fn test_unresolved_variant_falls_back() {
        let product = product_with_variant();
        let price = resolve_display_price(&product, Some(&VariantId::new("variant-stale")));
        assert_eq!(price, "$100");
    }

    #[test]
    fn test_negative_delta() {
        let mut product = Product::new("product-1", "Test Product", Money::new(5000, Currency::IDR));
        let mut variant = ProductVariant::new("variant-1", "product-1", "Small");
        variant.price_delta = -500;
        product.add_variant(variant);

        let price = resolve_display_price(&product, Some(&VariantId::new("variant-1")));
        assert_eq!(price, "Rp4,500");
    }
}
