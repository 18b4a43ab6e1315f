//! redb-based storage for the product catalog
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `catalog` | `buildify_products_v2` | `Vec<Product>` (JSON) | Full product list |
//!
//! The whole catalog is serialized under one fixed key; there is no
//! per-product row and no schema versioning beyond that key.
//!
//! # Degradation
//!
//! Reads never fail upward: a missing key, an undeserializable payload, or
//! any database-level read error yields `None`, and the caller falls back
//! to the built-in default catalog.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::Product;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table holding the serialized catalog: key = products key, value = JSON
const CATALOG_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("catalog");

/// The single storage key for the product list
pub const PRODUCTS_KEY: &str = "buildify_products_v2";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Catalog storage backed by redb
#[derive(Clone)]
pub struct CatalogStorage {
    db: Arc<Database>,
}

impl CatalogStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table up front so first reads see it
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CATALOG_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CATALOG_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load the persisted product list
    ///
    /// Returns `None` when nothing usable is stored; the failure reason is
    /// logged and never propagated.
    pub fn load(&self) -> Option<Vec<Product>> {
        let bytes = match self.read_raw() {
            Ok(bytes) => bytes?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted catalog");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(products) => Some(products),
            Err(e) => {
                tracing::warn!(error = %e, "Persisted catalog is malformed");
                None
            }
        }
    }

    /// Persist the full product list under the fixed key
    pub fn save(&self, products: &[Product]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(products)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CATALOG_TABLE)?;
            table.insert(PRODUCTS_KEY, bytes.as_slice())?;
        }
        write_txn.commit()?;

        tracing::debug!(count = products.len(), "Catalog persisted");
        Ok(())
    }

    /// Store raw bytes under the products key (corruption tests)
    #[cfg(test)]
    pub fn save_raw(&self, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CATALOG_TABLE)?;
            table.insert(PRODUCTS_KEY, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn read_raw(&self) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CATALOG_TABLE)?;
        Ok(table.get(PRODUCTS_KEY)?.map(|guard| guard.value().to_vec()))
    }
}
