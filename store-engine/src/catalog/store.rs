//! Catalog Store
//!
//! Owns the authoritative product list for the session. Hydrated once from
//! storage (or the built-in defaults) and written back after every
//! successful mutation.

use shared::models::{Product, ProductDraft};
use shared::{StoreError, StoreResult};

use super::defaults::default_products;
use super::storage::CatalogStorage;

/// Notice shown when the add-product form is incomplete
const ADD_PRODUCT_NOTICE: &str = "Completa: nombre, precio, categoría e imagen (ruta /img/xxx.webp o URL).";

/// The authoritative product list, persist-on-mutation
pub struct CatalogStore {
    products: Vec<Product>,
    storage: CatalogStorage,
}

impl CatalogStore {
    /// Hydrate from storage, falling back to the default catalog
    ///
    /// The hydrated list is written back immediately, so a fresh or
    /// corrupted database ends up holding the defaults.
    pub fn open(storage: CatalogStorage) -> Self {
        let products = match storage.load() {
            Some(products) => {
                tracing::info!(count = products.len(), "Catalog hydrated from storage");
                products
            }
            None => {
                tracing::info!("Catalog hydrated from built-in defaults");
                default_products()
            }
        };

        let store = Self { products, storage };
        store.persist();
        store
    }

    /// The product list in insertion order, newest first
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Add a new product from an admin draft
    ///
    /// `name`, `price`, `category`, and `image` are required; `stock` and
    /// `discount` default to 0. The new product is prepended so it shows
    /// first in the management views. Returns the assigned id.
    pub fn add(&mut self, draft: ProductDraft) -> StoreResult<i64> {
        if draft.name.is_empty()
            || draft.price.is_none()
            || draft.category.is_empty()
            || draft.image.is_empty()
        {
            return Err(StoreError::validation(ADD_PRODUCT_NOTICE));
        }

        let id = self.next_id();
        let product = Product {
            id,
            name: draft.name,
            price: draft.price.unwrap_or(0),
            stock: draft.stock.unwrap_or(0),
            discount: draft.discount.unwrap_or(0),
            image: draft.image,
            desc: draft.desc.filter(|d| !d.is_empty()),
            category: draft.category,
        };

        tracing::info!(product_id = id, name = %product.name, "Product added");
        self.products.insert(0, product);
        self.persist();
        Ok(id)
    }

    /// Replace only `stock` and `discount` on an existing product
    ///
    /// Unknown ids are a silent no-op: the editor only ever targets a
    /// dereferenced product, so this path is unreachable from the UI, but
    /// it must not fail.
    pub fn update_stock_discount(&mut self, id: i64, stock: i64, discount: i64) {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(product_id = id, "Stock/discount update for unknown product ignored");
            return;
        };

        product.stock = stock;
        product.discount = discount;
        tracing::info!(product_id = id, stock, discount, "Stock/discount updated");
        self.persist();
    }

    /// Next product id: `max(existing) + 1`, or 1 for an empty catalog
    fn next_id(&self) -> i64 {
        self.products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }

    /// Write the full list back to storage
    ///
    /// Failures are logged and swallowed; the in-memory catalog stays
    /// authoritative for the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.products) {
            tracing::error!(error = %e, "Failed to persist catalog");
        }
    }
}
