//! Product catalog module.
//!
//! Contains the published catalog types and the provider payload boundary.

mod feed;
mod product;

pub use feed::{parse_products, parse_store};
pub use product::{Product, ProductImage, ProductVariant};
