//! Attractiveness Ranking
//!
//! Heuristic presentation order used everywhere the catalog is listed:
//! high price times high stock, plus a flat per-percent discount bonus,
//! surfaces first. The exact linear formula and weight are load-bearing
//! for listing parity.

use shared::models::Product;

/// Per-percent weight of the discount bonus
const DISCOUNT_WEIGHT: i64 = 1000;

/// Attractiveness score: `price * stock + discount * 1000`
pub fn attractiveness(product: &Product) -> i64 {
    product.price * product.stock + product.discount * DISCOUNT_WEIGHT
}

/// Sort descending by attractiveness
///
/// The sort is stable: equal scores keep their catalog order.
pub fn sort_by_attractiveness(products: &mut [Product]) {
    products.sort_by_key(|p| std::cmp::Reverse(attractiveness(p)));
}
