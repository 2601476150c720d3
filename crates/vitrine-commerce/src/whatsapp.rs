//! WhatsApp order message and deep link composition.
//!
//! Both functions are pure over the ledger and store profile, so the
//! same selection always yields byte-identical output. The message
//! wording is user-visible contract; tests pin it.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing::debug;

use crate::selection::SelectionLedger;
use crate::store::StoreProfile;

/// Deep-link host for handing a shopper off to WhatsApp.
const DEEP_LINK_BASE: &str = "https://wa.me";

/// Inert anchor href used when the merchant has no contact configured.
const PLACEHOLDER_LINK: &str = "#";

/// Compose the order summary message for the current selection.
///
/// An empty selection yields a greeting naming the store with no
/// product list. Otherwise the greeting is followed by one numbered
/// line per selection line in ledger order,
/// `<i>. <name>[ - <variant>] (<price>)[ x<qty>]`, with the `x<qty>`
/// suffix only when the quantity exceeds one, then a closing question
/// about availability and payment.
pub fn compose_order_message(ledger: &SelectionLedger, store: &StoreProfile) -> String {
    if ledger.is_empty() {
        return format!("Hi {}! I'm interested in your products.", store.name);
    }

    let mut message = format!("Hi {}! I would like to order:\n\n", store.name);
    for (index, line) in ledger.lines().iter().enumerate() {
        message.push_str(&format!("{}. {}", index + 1, line.product_name));
        if let Some(variant_name) = &line.variant_name {
            message.push_str(&format!(" - {variant_name}"));
        }
        message.push_str(&format!(" ({})", line.unit_price));
        if line.quantity > 1 {
            message.push_str(&format!(" x{}", line.quantity));
        }
        message.push('\n');
    }
    message.push_str("\nAre these available? What payment methods do you accept?");

    debug!(lines = ledger.distinct_lines(), "composed order message");
    message
}

/// Build the `wa.me` deep link carrying the order message.
///
/// Returns an inert placeholder when the store has no contact. The
/// contact digits are used verbatim; sanitization happens when the
/// profile is built.
pub fn order_deep_link(ledger: &SelectionLedger, store: &StoreProfile) -> String {
    let Some(contact) = store.contact() else {
        return PLACEHOLDER_LINK.to_string();
    };

    let message = compose_order_message(ledger, store);
    let encoded = utf8_percent_encode(&message, NON_ALPHANUMERIC).to_string();
    format!("{DEEP_LINK_BASE}/{}?text={encoded}", contact.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductVariant};
    use crate::money::{Currency, Money};

    fn test_store() -> StoreProfile {
        StoreProfile::new("Test Store", Some("1234567890"))
    }

    fn test_product() -> Product {
        let mut product = Product::new("product-1", "Test Product", Money::new(100, Currency::USD));
        let mut variant = ProductVariant::new("variant-1", "product-1", "Size M");
        variant.price_delta = 10;
        product.add_variant(variant);
        product
    }

    #[test]
    fn test_empty_selection_greeting() {
        let ledger = SelectionLedger::new();
        let message = compose_order_message(&ledger, &test_store());
        assert_eq!(message, "Hi Test Store! I'm interested in your products.");
    }

    #[test]
    fn test_message_wording_is_stable() {
        let product = test_product();
        let mut ledger = SelectionLedger::new();
        ledger.add(&product, None, 2);
        ledger.add(&product, Some(&"variant-1".into()), 1);

        let message = compose_order_message(&ledger, &test_store());
        assert_eq!(
            message,
            "Hi Test Store! I would like to order:\n\n\
             1. Test Product ($100) x2\n\
             2. Test Product - Size M ($110)\n\
             \nAre these available? What payment methods do you accept?"
        );
    }

    #[test]
    fn test_quantity_suffix_only_above_one() {
        let product = test_product();
        let mut ledger = SelectionLedger::new();
        ledger.add(&product, None, 1);

        let message = compose_order_message(&ledger, &test_store());
        assert!(message.contains("1. Test Product ($100)"));
        assert!(!message.contains("x1"));
    }

    #[test]
    fn test_scenario_message_and_link() {
        let product = test_product();
        let mut ledger = SelectionLedger::new();
        ledger.add(&product, None, 2);
        let store = test_store();

        let message = compose_order_message(&ledger, &store);
        assert!(message.contains("Test Store"));
        assert!(message.contains("Test Product"));
        assert!(message.contains("x2"));

        let link = order_deep_link(&ledger, &store);
        assert!(link.starts_with("https://wa.me/1234567890"));
        assert!(link.contains("text="));
    }

    #[test]
    fn test_deep_link_is_fully_encoded() {
        let product = test_product();
        let mut ledger = SelectionLedger::new();
        ledger.add(&product, None, 2);

        let link = order_deep_link(&ledger, &test_store());
        let (_, query) = link.split_once("text=").unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('$'));
    }

    #[test]
    fn test_missing_contact_yields_placeholder() {
        let product = test_product();
        let mut ledger = SelectionLedger::new();
        ledger.add(&product, None, 1);

        let store = StoreProfile::new("Test Store", None);
        assert_eq!(order_deep_link(&ledger, &store), "#");
    }
}
