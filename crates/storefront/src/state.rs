//! Application state shared across handlers.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::sync::RwLock;

use tribal_hub_core::{Marketplace, StaffAccount, User, UserId, UserRole};

use crate::config::StorefrontConfig;
use crate::services::auth::{self, AuthError};
use crate::services::media::MediaStore;

/// Id of the host admin account.
pub const ADMIN_ID: &str = "host1";

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration, the marketplace and the media store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    market: RwLock<Marketplace>,
    media: MediaStore,
}

impl AppState {
    /// Create application state with the demo catalog loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the admin password cannot be hashed.
    pub fn new(config: StorefrontConfig) -> Result<Self, AuthError> {
        let market = Marketplace::seeded(admin_account(&config)?);
        Ok(Self::with_market(config, market))
    }

    /// Create application state around an existing marketplace.
    #[must_use]
    pub fn with_market(config: StorefrontConfig, market: Marketplace) -> Self {
        let media = MediaStore::new(config.media_capacity);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                market: RwLock::new(market),
                media,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The shared marketplace.
    ///
    /// Take the lock for one operation at a time and never hold it across
    /// an `.await`.
    #[must_use]
    pub fn market(&self) -> &RwLock<Marketplace> {
        &self.inner.market
    }

    /// Uploaded images.
    #[must_use]
    pub fn media(&self) -> &MediaStore {
        &self.inner.media
    }
}

/// Build the host admin account from configuration.
///
/// # Errors
///
/// Returns an error if the password cannot be hashed.
pub fn admin_account(config: &StorefrontConfig) -> Result<StaffAccount, AuthError> {
    Ok(StaffAccount {
        user: User::new(UserId::new(ADMIN_ID), "Super Admin", UserRole::Admin),
        username: config.admin.username.clone(),
        password_hash: auth::hash_password(config.admin.password.expose_secret())?,
        verified: true,
    })
}
