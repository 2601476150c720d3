//! Catalog, selection, and order-link domain logic for Vitrine storefronts.
//!
//! Vitrine merchants publish a catalog page; shoppers build a multi-item
//! selection and hand it off as a prefilled WhatsApp message. This crate
//! is that storefront's domain core:
//!
//! - **Catalog**: published products with priced variants and images,
//!   plus the provider payload boundary
//! - **Selection**: the in-memory ledger of chosen (product, variant)
//!   lines, unit-price resolution, and derived totals
//! - **WhatsApp**: deterministic order message and `wa.me` deep link
//!
//! The selection is a plain data structure with synchronous transition
//! functions, owned by exactly one catalog view and never persisted; a
//! thin adapter bridges it to whatever UI framework renders it.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//!
//! let products = parse_products(&catalog_payload)?;
//! let store = parse_store(&store_payload)?;
//!
//! let mut selection = SelectionLedger::new();
//! selection.add(&products[0], None, 2);
//!
//! let link = order_deep_link(&selection, &store);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod selection;
pub mod store;
pub mod whatsapp;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{parse_products, parse_store, Product, ProductImage, ProductVariant};

    // Store profile
    pub use crate::store::{ContactNumber, StoreProfile};

    // Selection
    pub use crate::selection::{
        resolve_display_price, SelectionKey, SelectionLedger, SelectionLine, SelectionTotals,
    };

    // WhatsApp handoff
    pub use crate::whatsapp::{compose_order_message, order_deep_link};
}
