//! Per-visitor state kept in the session.
//!
//! The signed-in user, cart, language, pending passcode, checkout shipping
//! details and the admin's notification watermark all live here; the
//! marketplace itself is shared in [`crate::state::AppState`].

use tower_sessions::Session;

use tribal_hub_core::{Cart, Language};

/// Session keys.
pub mod keys {
    /// The signed-in [`tribal_hub_core::User`].
    pub const CURRENT_USER: &str = "current_user";

    /// The visitor's [`tribal_hub_core::Cart`].
    pub const CART: &str = "cart";

    /// Interface [`tribal_hub_core::Language`].
    pub const LANGUAGE: &str = "language";

    /// Pending passcode challenge for artisan login.
    pub const OTP: &str = "otp_challenge";

    /// Shipping details entered at checkout.
    pub const SHIPPING: &str = "checkout_shipping";

    /// Pending-order count the admin last dismissed.
    pub const PENDING_SEEN: &str = "pending_seen";
}

type SessionResult<T> = Result<T, tower_sessions::session::Error>;

/// The visitor's cart, empty if none was saved.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn load_cart(session: &Session) -> SessionResult<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Save the visitor's cart.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_cart(session: &Session, cart: &Cart) -> SessionResult<()> {
    session.insert(keys::CART, cart).await
}

/// The visitor's chosen language, or `default`.
pub async fn language(session: &Session, default: Language) -> Language {
    session
        .get::<Language>(keys::LANGUAGE)
        .await
        .ok()
        .flatten()
        .unwrap_or(default)
}

/// Remember the visitor's language.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn set_language(session: &Session, language: Language) -> SessionResult<()> {
    session.insert(keys::LANGUAGE, language).await
}

/// Pending-order count the admin last dismissed.
pub async fn pending_seen(session: &Session) -> usize {
    session
        .get::<usize>(keys::PENDING_SEEN)
        .await
        .ok()
        .flatten()
        .unwrap_or(0)
}

/// Record that the admin has seen `count` pending orders.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn set_pending_seen(session: &Session, count: usize) -> SessionResult<()> {
    session.insert(keys::PENDING_SEEN, count).await
}
