//! Buildify storefront engine
//!
//! Catalog state engine for a client-side storefront: an owned catalog
//! store persisted to an embedded key-value database, pure ranking and
//! filter functions, a stock-aware cart reconciled against every catalog
//! change, and a fixed-credential admin gate, all behind the
//! [`Storefront`] command facade.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod filter;
pub mod pricing;
pub mod ranking;
pub mod session;
pub mod storefront;

pub use cart::Cart;
pub use catalog::{CatalogStorage, CatalogStore, StorageError, StorageResult};
pub use filter::CatalogFilter;
pub use session::AdminSession;
pub use storefront::{EditDraft, StoreEvent, Storefront};
