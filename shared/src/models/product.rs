//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// Everything except `stock` and `discount` is immutable after creation;
/// the admin editor only ever touches those two fields. Products are never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in whole currency units (COP)
    pub price: i64,
    /// Quantity available
    pub stock: i64,
    /// Discount in percentage (e.g., 10 = 10%); not range-checked
    pub discount: i64,
    /// Image path or URL, resolved by the rendering layer
    pub image: String,
    pub desc: Option<String>,
    /// Category name; expected to match the fixed set, not enforced here
    pub category: String,
}

/// Create product payload (admin "add product" form)
///
/// `name`, `price`, `category`, and `image` are required by the catalog
/// store; `stock` and `discount` default to 0 when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Option<i64>,
    pub stock: Option<i64>,
    pub discount: Option<i64>,
    pub image: String,
    pub desc: Option<String>,
}

impl ProductDraft {
    /// Reset every field to its empty state (the form's clear action)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
