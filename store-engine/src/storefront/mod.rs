//! Storefront facade - command surface and change notification
//!
//! This module handles:
//! - Visitor commands (cart, filters, checkout)
//! - Admin commands behind the session guard (add product, edit
//!   stock/discount)
//! - Explicit cart reconciliation after every catalog mutation
//! - Change notification to subscribers (via callback)
//!
//! # Command Flow
//!
//! ```text
//! command
//!     ├─ 1. Session guard (admin commands only)
//!     ├─ 2. Mutate the owning engine (catalog / cart / filter / session)
//!     ├─ 3. Persist (catalog mutations, inside the catalog store)
//!     ├─ 4. Reconcile the cart (catalog mutations)
//!     ├─ 5. Notify subscribers
//!     └─ 6. Return
//! ```
//!
//! Everything is synchronous and single-owner: each command completes its
//! state update, dependent recomputation, and notifications before the
//! next command can run.

use shared::models::{Product, ProductDraft};
use shared::StoreResult;
use std::path::Path;

use crate::cart::Cart;
use crate::catalog::{CatalogStorage, CatalogStore, StorageResult};
use crate::checkout;
use crate::filter::CatalogFilter;
use crate::ranking;
use crate::session::AdminSession;

/// Change notifications, fired synchronously after a command completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The catalog changed; the cart is already reconciled when this fires
    CatalogChanged,
    CartChanged,
    CartOpened,
    CartClosed,
    FilterChanged,
    SessionChanged,
}

/// Admin edit draft for one product's stock and discount
///
/// At most one product is editable at a time; opening a new edit replaces
/// the previous draft without saving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDraft {
    pub product_id: i64,
    pub stock: i64,
    pub discount: i64,
}

/// The storefront: owns the catalog, cart, filter, and session state for
/// one browsing session
pub struct Storefront {
    catalog: CatalogStore,
    cart: Cart,
    session: AdminSession,
    filter: CatalogFilter,
    cart_open: bool,
    editing: Option<EditDraft>,
    listeners: Vec<Box<dyn FnMut(&StoreEvent)>>,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("products", &self.catalog.products().len())
            .field("cart_lines", &self.cart.lines().len())
            .field("cart_open", &self.cart_open)
            .field("is_admin", &self.session.is_authenticated())
            .field("editing", &self.editing)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Storefront {
    /// Open the storefront over a catalog database path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let storage = CatalogStorage::open(path)?;
        Ok(Self::with_storage(storage))
    }

    /// Build over an already-open storage handle
    pub fn with_storage(storage: CatalogStorage) -> Self {
        Self {
            catalog: CatalogStore::open(storage),
            cart: Cart::new(),
            session: AdminSession::new(),
            filter: CatalogFilter::default(),
            cart_open: false,
            editing: None,
            listeners: Vec::new(),
        }
    }

    // ========== Subscription ==========

    /// Register a change listener, fired synchronously after each command
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Runs after every successful catalog mutation: reconcile the cart
    /// against the new catalog, then tell subscribers
    fn on_catalog_changed(&mut self) {
        self.cart.reconcile(self.catalog.products());
        self.notify(StoreEvent::CatalogChanged);
    }

    // ========== Views ==========

    /// The raw catalog, newest first
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// The home/category listing: filtered, then ranked by attractiveness
    pub fn visible_products(&self) -> Vec<Product> {
        let mut listing: Vec<Product> = self
            .catalog
            .products()
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect();
        ranking::sort_by_attractiveness(&mut listing);
        listing
    }

    /// The admin overview: the full catalog ranked, filters ignored
    pub fn ranked_products(&self) -> Vec<Product> {
        let mut listing = self.catalog.products().to_vec();
        ranking::sort_by_attractiveness(&mut listing);
        listing
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> i64 {
        self.cart.total()
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    // ========== Cart Commands ==========

    /// Add one unit of a product to the cart
    ///
    /// Unknown ids and exhausted stock are silent no-ops. A successful add
    /// opens the cart view.
    pub fn add_to_cart(&mut self, product_id: i64) {
        let Some(product) = self.catalog.find(product_id).cloned() else {
            tracing::debug!(product_id, "Add to cart ignored, unknown product");
            return;
        };
        if product.stock <= 0 {
            tracing::debug!(product_id, "Add to cart ignored, no stock");
            return;
        }

        self.cart.add(&product);
        self.cart_open = true;
        self.notify(StoreEvent::CartChanged);
        self.notify(StoreEvent::CartOpened);
    }

    pub fn remove_from_cart(&mut self, product_id: i64) {
        self.cart.remove(product_id);
        self.notify(StoreEvent::CartChanged);
    }

    /// Set a line's quantity (minimum 1; the stock ceiling is applied by
    /// reconciliation on the next catalog change)
    pub fn change_qty(&mut self, product_id: i64, qty: i64) {
        self.cart.change_qty(product_id, qty);
        self.notify(StoreEvent::CartChanged);
    }

    /// Empty the cart and close the drawer (the "Vaciar" action)
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.cart_open = false;
        self.notify(StoreEvent::CartChanged);
        self.notify(StoreEvent::CartClosed);
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
        self.notify(StoreEvent::CartOpened);
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
        self.notify(StoreEvent::CartClosed);
    }

    // ========== Checkout ==========

    /// The outbound order message; fails on an empty cart
    pub fn checkout_message(&self) -> StoreResult<String> {
        checkout::checkout_message(&self.cart)
    }

    /// The full wa.me handoff link for the current cart
    pub fn checkout_link(&self) -> StoreResult<String> {
        Ok(checkout::whatsapp_link(&self.checkout_message()?))
    }

    // ========== Filter Commands ==========

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.notify(StoreEvent::FilterChanged);
    }

    pub fn set_price_range(&mut self, min: i64, max: i64) {
        self.filter.price_range = (min, max);
        self.notify(StoreEvent::FilterChanged);
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.notify(StoreEvent::FilterChanged);
    }

    /// The "Ver todo" action: restore all filter defaults at once
    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.notify(StoreEvent::FilterChanged);
    }

    /// The "Ver" action: narrow the view to one product
    pub fn focus_product(&mut self, product_id: i64) {
        let Some(product) = self.catalog.find(product_id).cloned() else {
            return;
        };
        self.filter.focus(&product);
        self.notify(StoreEvent::FilterChanged);
    }

    // ========== Session Commands ==========

    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<()> {
        self.session.login(email, password)?;
        self.notify(StoreEvent::SessionChanged);
        Ok(())
    }

    /// Log out and discard any in-flight edit draft
    pub fn logout(&mut self) {
        self.session.logout();
        self.editing = None;
        self.notify(StoreEvent::SessionChanged);
    }

    // ========== Admin Commands ==========

    /// Add a product from the admin form; returns the updated catalog
    pub fn add_product(&mut self, draft: ProductDraft) -> StoreResult<&[Product]> {
        self.session.require_admin()?;
        self.catalog.add(draft)?;
        self.on_catalog_changed();
        Ok(self.catalog.products())
    }

    /// Replace a product's stock and discount (silent no-op on unknown id)
    pub fn update_stock_discount(
        &mut self,
        product_id: i64,
        stock: i64,
        discount: i64,
    ) -> StoreResult<()> {
        self.session.require_admin()?;
        self.catalog.update_stock_discount(product_id, stock, discount);
        self.on_catalog_changed();
        Ok(())
    }

    /// Begin editing a product's stock and discount
    ///
    /// Replaces any previous draft without saving it. Unknown ids leave
    /// the edit state untouched.
    pub fn open_edit(&mut self, product_id: i64) -> StoreResult<()> {
        self.session.require_admin()?;
        let Some(product) = self.catalog.find(product_id) else {
            tracing::debug!(product_id, "Edit requested for unknown product ignored");
            return Ok(());
        };
        self.editing = Some(EditDraft {
            product_id,
            stock: product.stock,
            discount: product.discount,
        });
        Ok(())
    }

    /// Update the stock on the open draft (form input)
    pub fn set_edit_stock(&mut self, stock: i64) {
        if let Some(draft) = &mut self.editing {
            draft.stock = stock;
        }
    }

    /// Update the discount on the open draft (form input)
    pub fn set_edit_discount(&mut self, discount: i64) {
        if let Some(draft) = &mut self.editing {
            draft.discount = discount;
        }
    }

    /// Discard the open draft
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Apply the open draft's stock and discount, then return to idle
    ///
    /// Saving with no open draft is a no-op.
    pub fn save_edit(&mut self) -> StoreResult<()> {
        self.session.require_admin()?;
        let Some(draft) = self.editing.take() else {
            return Ok(());
        };
        self.catalog
            .update_stock_discount(draft.product_id, draft.stock, draft.discount);
        self.on_catalog_changed();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
