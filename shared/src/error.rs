//! Unified error system for the storefront engine
//!
//! Every failure in this core degrades to a user-facing notice or a silent
//! no-op; none of these variants abort the session. Lookup misses are not
//! errors at all (callers treat them as no-ops), and storage corruption is
//! recovered by falling back to the built-in catalog.

use thiserror::Error;

/// Unified error type for storefront operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validation failed; the triggering operation did not mutate state
    #[error("{message}")]
    Validation { message: String },

    /// Operation requires an authenticated admin session
    #[error("Authentication required")]
    Unauthorized,

    /// Login rejected, wrong credential pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Resource not found
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Checkout attempted with an empty cart
    #[error("Cart is empty")]
    EmptyCart,
}

impl StoreError {
    // ========== Convenient constructors ==========

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    // ========== Error inspection methods ==========

    /// Get the user-facing notice for this error
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::Unauthorized => "Please login first".to_string(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::EmptyCart => "Cart is empty".to_string(),
        }
    }
}

/// Result type for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;
