//! Provider payload boundary.
//!
//! The hosted backend delivers the published catalog and the merchant
//! profile as JSON. These functions are the only fallible edge of the
//! crate; everything past them operates on materialized data.

use serde::Deserialize;
use tracing::debug;

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::store::StoreProfile;

/// Raw store profile record as delivered by the provider.
#[derive(Debug, Deserialize)]
struct StoreRecord {
    name: String,
    #[serde(default)]
    whatsapp: Option<String>,
}

/// Parse a catalog payload into products.
///
/// The payload is expected to be already filtered to available products
/// and in display order; no filtering or sorting happens here.
pub fn parse_products(payload: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(payload)?;
    debug!(count = products.len(), "parsed catalog payload");
    Ok(products)
}

/// Parse a store profile payload, sanitizing the contact field.
pub fn parse_store(payload: &str) -> Result<StoreProfile, CatalogError> {
    let record: StoreRecord = serde_json::from_str(payload)?;
    Ok(StoreProfile::new(record.name, record.whatsapp.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::VariantId;

    #[test]
    fn test_parse_products() {
        let payload = r#"[
            {
                "id": "product-1",
                "name": "Test Product",
                "price": { "amount": 100, "currency": "USD" },
                "available": true,
                "category": "Apparel",
                "images": [
                    { "id": "img-1", "url": "https://cdn.example/one.jpg", "position": 0 }
                ],
                "variants": [
                    {
                        "id": "variant-1",
                        "product_id": "product-1",
                        "name": "Size M",
                        "price_delta": 10,
                        "stock": 5,
                        "available": true
                    }
                ]
            }
        ]"#;

        let products = parse_products(payload).unwrap();
        assert_eq!(products.len(), 1);

        let product = &products[0];
        assert_eq!(product.name, "Test Product");
        assert_eq!(product.price.amount, 100);
        let variant = product.variant(&VariantId::new("variant-1")).unwrap();
        assert_eq!(variant.price_delta, 10);
    }

    #[test]
    fn test_parse_products_rejects_malformed() {
        assert!(parse_products("not json").is_err());
        assert!(parse_products(r#"{"id": "not-a-list"}"#).is_err());
    }

    #[test]
    fn test_parse_store_sanitizes_contact() {
        let payload = r#"{ "name": "Test Store", "whatsapp": "+1 (234) 567-890" }"#;
        let store = parse_store(payload).unwrap();
        assert_eq!(store.name, "Test Store");
        assert_eq!(store.contact().map(|c| c.as_str()), Some("1234567890"));
    }

    #[test]
    fn test_parse_store_without_contact() {
        let store = parse_store(r#"{ "name": "Test Store" }"#).unwrap();
        assert!(store.contact().is_none());
    }
}
