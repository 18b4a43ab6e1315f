//! Cart Line Model

use serde::{Deserialize, Serialize};

use super::Product;

/// One product entry in the shopping cart
///
/// Pricing and display fields are snapshotted from the product at add
/// time; catalog reconciliation adjusts `qty` only, so a later discount
/// edit does not reprice an existing line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    pub price: i64,
    pub discount: i64,
    pub image: String,
    pub category: String,
    /// Always >= 1
    pub qty: i64,
}

impl CartLine {
    /// Snapshot a catalog product into a new line with quantity 1
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            discount: product.discount,
            image: product.image.clone(),
            category: product.category.clone(),
            qty: 1,
        }
    }
}
