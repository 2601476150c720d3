//! Order-link demo.
//!
//! Plays the presentation layer's role against the domain crate: parse
//! a catalog payload and store profile, drive the selection ledger the
//! way card/modal handlers would, and print the message and deep link
//! the shopper would be handed off with.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vitrine_commerce::prelude::*;

const CATALOG_PAYLOAD: &str = r#"[
    {
        "id": "prod-espresso",
        "name": "Espresso Blend 250g",
        "price": { "amount": 95000, "currency": "IDR" },
        "available": true,
        "category": "Coffee Beans",
        "images": [
            { "id": "img-espresso", "url": "https://cdn.vitrine.example/espresso.jpg", "position": 0 }
        ],
        "variants": [
            {
                "id": "var-espresso-whole",
                "product_id": "prod-espresso",
                "name": "Whole Bean",
                "price_delta": 0,
                "stock": 24,
                "available": true
            },
            {
                "id": "var-espresso-ground",
                "product_id": "prod-espresso",
                "name": "Ground",
                "price_delta": 5000,
                "stock": 12,
                "available": true
            }
        ]
    },
    {
        "id": "prod-dripper",
        "name": "Ceramic Dripper",
        "price": { "amount": 120000, "currency": "IDR" },
        "available": true,
        "category": "Brew Gear",
        "images": [],
        "variants": []
    }
]"#;

const STORE_PAYLOAD: &str = r#"{ "name": "Kopi Vitrine", "whatsapp": "+62 812-3456-7890" }"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let products = parse_products(CATALOG_PAYLOAD)?;
    let store = parse_store(STORE_PAYLOAD)?;
    info!(products = products.len(), store = %store.name, "catalog loaded");

    let mut selection = SelectionLedger::new();
    selection.add(&products[0], Some(&"var-espresso-ground".into()), 2);
    selection.add(&products[1], None, 1);
    // Tapping the same card again merges into the existing line.
    selection.add(&products[1], None, 1);

    let totals = selection.totals();
    info!(
        lines = totals.distinct_lines,
        units = totals.total_units,
        "selection ready"
    );

    println!("{}", compose_order_message(&selection, &store));
    println!();
    println!("{}", order_deep_link(&selection, &store));

    Ok(())
}
