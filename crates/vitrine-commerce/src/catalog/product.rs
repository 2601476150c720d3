//! Product, variant, and image types.

use crate::ids::{ImageId, ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A published product in the catalog.
///
/// Products arrive from the catalog provider already filtered to
/// available items and in display order; this type does no filtering
/// or sorting of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Base unit price.
    pub price: Money,
    /// Whether the product is available for selection.
    pub available: bool,
    /// Optional category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Pre-formatted display price. Takes precedence over the computed
    /// base-price display when present.
    #[serde(default)]
    pub display_price: Option<String>,
    /// Images in display order.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Priced variants in display order.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create a new product with no category, images, or variants.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            available: true,
            category: None,
            display_price: None,
            images: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Look up a variant of this product by ID.
    pub fn variant(&self, variant_id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == variant_id)
    }

    /// Check if this product has any variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Get the first image in display order, if any.
    pub fn first_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Add an image to this product.
    pub fn add_image(&mut self, image: ProductImage) {
        self.images.push(image);
    }

    /// Add a variant to this product.
    pub fn add_variant(&mut self, variant: ProductVariant) {
        self.variants.push(variant);
    }
}

/// A priced sub-option of a product (e.g., a size or color).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Owning product ID.
    pub product_id: ProductId,
    /// Variant name (e.g., "Size M").
    pub name: String,
    /// Signed delta applied to the product's base price, in the same
    /// currency units.
    #[serde(default)]
    pub price_delta: i64,
    /// Stock quantity.
    #[serde(default)]
    pub stock: i64,
    /// Whether the variant is available for selection.
    pub available: bool,
}

impl ProductVariant {
    /// Create a new variant with no price delta.
    pub fn new(
        id: impl Into<VariantId>,
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            name: name.into(),
            price_delta: 0,
            stock: 0,
            available: true,
        }
    }

    /// Check if this variant is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.available && self.stock > 0
    }
}

/// A product image reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    /// Unique image identifier.
    pub id: ImageId,
    /// URL of the image file.
    pub url: String,
    /// Sort order position.
    #[serde(default)]
    pub position: i32,
}

impl ProductImage {
    /// Create a new image reference.
    pub fn new(id: impl Into<ImageId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            position: 0,
        }
    }
}
