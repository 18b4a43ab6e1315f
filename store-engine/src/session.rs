//! Admin Session Guard
//!
//! A binary authenticated/anonymous gate over the catalog-mutating
//! operations. Credentials are a fixed pair checked by exact equality;
//! there is no expiry and no hashing. This is a toy gate, not a security
//! boundary.

use shared::{StoreError, StoreResult};

/// Fixed admin credential pair
const ADMIN_EMAIL: &str = "admin@buildify.com";
const ADMIN_PASSWORD: &str = "12345";

/// Admin session state, anonymous until a successful login
#[derive(Debug, Default)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Authenticate with the fixed credential pair
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<()> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            self.authenticated = true;
            tracing::info!("Admin session opened");
            Ok(())
        } else {
            tracing::warn!("Admin login rejected");
            Err(StoreError::InvalidCredentials)
        }
    }

    /// Return to anonymous
    pub fn logout(&mut self) {
        self.authenticated = false;
        tracing::info!("Admin session closed");
    }

    /// Guard for catalog-mutating operations
    pub fn require_admin(&self) -> StoreResult<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(StoreError::Unauthorized)
        }
    }
}
