//! Cart Engine
//!
//! Ordered cart lines with stock-aware quantity handling. The stock
//! ceiling is enforced over time by [`Cart::reconcile`], which the
//! storefront runs after every catalog mutation; `change_qty` on its own
//! only enforces the minimum of 1.

use shared::models::{CartLine, Product};

use crate::pricing;

/// The shopping cart: insertion-ordered lines, at most one per product
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines (the cart badge count)
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// Add one unit of a catalog product
    ///
    /// No-op when the product is out of stock. An existing line is bumped
    /// by one, capped at the current stock; otherwise a new line is
    /// appended with the product's pricing snapshotted.
    pub fn add(&mut self, product: &Product) {
        if product.stock <= 0 {
            tracing::debug!(product_id = product.id, "Add to cart ignored, no stock");
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.qty = (line.qty + 1).min(product.stock);
        } else {
            self.lines.push(CartLine::from_product(product));
        }
    }

    /// Remove a line unconditionally
    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Set a line's quantity, clamped to a minimum of 1
    ///
    /// No stock cap at this call site; reconciliation applies the ceiling
    /// after the next catalog change. Unknown ids are ignored.
    pub fn change_qty(&mut self, product_id: i64, qty: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.qty = qty.max(1);
        }
    }

    /// Re-validate every line against the current catalog
    ///
    /// Lines whose product vanished are dropped; surviving lines are
    /// clamped to the current stock, and dropped when that clamp reaches
    /// 0. Pricing snapshots are left untouched.
    pub fn reconcile(&mut self, catalog: &[Product]) {
        let before = self.lines.len();
        self.lines.retain_mut(|line| {
            let Some(product) = catalog.iter().find(|p| p.id == line.product_id) else {
                return false;
            };
            line.qty = line.qty.min(product.stock);
            line.qty >= 1
        });

        let dropped = before - self.lines.len();
        if dropped > 0 {
            tracing::debug!(dropped, "Cart lines dropped during reconciliation");
        }
    }

    /// Cart total over the snapshotted unit prices
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(|l| pricing::effective_unit_price(l.price, l.discount) * l.qty)
            .sum()
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
