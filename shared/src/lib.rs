//! Shared types for the Buildify storefront engine
//!
//! Common types used across crates: product and cart models, the fixed
//! category set, the image fallback reference, and the unified error type.

pub mod error;
pub mod models;

// Re-exports
pub use error::{StoreError, StoreResult};
pub use serde::{Deserialize, Serialize};
