//! Catalog Filter
//!
//! Combines a text query, an inclusive price range, and an optional
//! category into a predicate over the catalog. Filter state is plain data
//! owned by the storefront facade.

use serde::{Deserialize, Serialize};
use shared::models::Product;

/// Default inclusive price bounds
pub const DEFAULT_PRICE_RANGE: (i64, i64) = (0, 6_000_000);

/// Active filter state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Case-insensitive substring match against the product name
    pub query: String,
    /// Inclusive `[min, max]` price bounds
    pub price_range: (i64, i64),
    /// When set, restricts the listing to exactly this category
    pub category: Option<String>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            price_range: DEFAULT_PRICE_RANGE,
            category: None,
        }
    }
}

impl CatalogFilter {
    /// Whether a product passes the query, price, and category conditions
    pub fn matches(&self, product: &Product) -> bool {
        let query_ok = product
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let price_ok =
            product.price >= self.price_range.0 && product.price <= self.price_range.1;
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| product.category == c);

        query_ok && price_ok && category_ok
    }

    /// Restore query, price range, and category to their defaults at once
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Narrow the view to one product: its name as the query, its category
    /// selected
    pub fn focus(&mut self, product: &Product) {
        self.query = product.name.clone();
        self.category = Some(product.category.clone());
    }
}
