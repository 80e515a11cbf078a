//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                           - Home page
//! GET  /shop                       - Catalog with category filter and search
//! GET  /products/{id}              - Product detail
//! POST /products/{id}/reviews      - Add a review (signed in)
//! GET  /about                      - About page
//! POST /language                   - Switch interface language
//! GET  /media/{id}                 - Uploaded image
//!
//! # Cart & checkout
//! GET  /cart                       - Cart page
//! POST /cart/add                   - Add to cart (or buy now)
//! POST /cart/update                - Change a line's quantity
//! POST /cart/remove                - Remove a line
//! POST /cart/clear                 - Empty the cart
//! GET  /checkout/shipping          - Shipping form (customer)
//! POST /checkout/shipping          - Save shipping details
//! GET  /checkout/payment           - Payment form (customer)
//! POST /checkout/payment           - Pay and place the order
//! GET  /checkout/success           - Order confirmation
//! GET  /orders                     - My orders (customer)
//! POST /orders/{id}/cancel         - Cancel a pending order
//!
//! # Auth
//! GET  /login                      - Role selection
//! POST /login/demo                 - One-click customer or guest login
//! GET  /login/producer             - Artisan passcode login
//! POST /login/producer/send        - Send a passcode
//! POST /login/producer/resend      - Send a new passcode
//! POST /login/producer/verify      - Check the passcode
//! POST /login/producer/reset       - Start over with another number
//! GET  /login/staff                - Admin / team login
//! POST /login/staff                - Password login
//! GET  /register/producer          - Artisan registration
//! POST /register/producer          - Register an artisan (multipart)
//! GET  /register/team              - Team member registration
//! POST /register/team              - Register a team member
//! POST /logout                     - Sign out
//!
//! # Producer dashboard
//! GET  /producer                   - Listings and add-product form
//! POST /producer/draft             - Draft a description
//! POST /producer/products          - Publish a listing (multipart)
//! POST /producer/products/{id}/delete - Delete own listing
//!
//! # Admin dashboard
//! GET  /admin                      - Tabs: orders, bank, producers, team
//! POST /admin/orders/{id}/status   - Set an order's status (staff)
//! POST /admin/bank                 - Save payout account
//! POST /admin/team/{id}/verify     - Verify a team member
//! POST /admin/products/{id}/delete - Remove any listing
//! POST /admin/notifications/dismiss - Dismiss the new-order banner
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod form;
pub mod home;
pub mod media;
pub mod orders;
pub mod pages;
pub mod producer;
pub mod products;

use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRequestParts, Query},
    http::request::Parts,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;

use tribal_hub_core::i18n::{self, Translator};
use tribal_hub_core::{Language, User, UserRole};

use crate::middleware::{OptionalUser, form_rate_limiter, otp_rate_limiter};
use crate::models::session;
use crate::services::media::MAX_IMAGE_BYTES;
use crate::state::AppState;

/// Images per product upload.
const MAX_UPLOAD_FILES: usize = 6;

// =============================================================================
// Page layout
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct FlashQuery {
    error: Option<String>,
    notice: Option<String>,
}

/// Data the base layout needs on every page.
///
/// Flash messages arrive as translation keys in `?error=` / `?notice=`;
/// unknown keys are dropped.
#[derive(Debug, Clone)]
pub struct Layout {
    translator: Translator,
    pub user: Option<User>,
    pub cart_count: u32,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Pending orders the staff member has not dismissed yet.
    pub new_orders: usize,
    pub path: String,
}

impl Layout {
    /// Translate `key` into the visitor's language.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator.t(key)
    }

    #[must_use]
    pub const fn translator(&self) -> Translator {
        self.translator
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.translator.language()
    }

    /// Code of the visitor's language, for `<html lang>`.
    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.translator.language().code()
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn languages(&self) -> [Language; 3] {
        Language::ALL
    }

    fn has_role(&self, role: UserRole) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == role)
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_customer(&self) -> bool {
        self.has_role(UserRole::Customer)
    }

    #[must_use]
    pub fn is_producer(&self) -> bool {
        self.has_role(UserRole::Producer)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_staff())
    }

    /// Name shown in the navbar.
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }

    /// Whether the navbar link for `prefix` is the current page.
    #[must_use]
    pub fn is_active(&self, prefix: &str) -> bool {
        if prefix == "/" {
            self.path == "/"
        } else {
            self.path.starts_with(prefix)
        }
    }

    fn translate_flash(&self, key: Option<String>) -> Option<String> {
        key.filter(|k| i18n::has_key(k))
            .map(|k| self.translator.t(&k).to_string())
    }
}

impl FromRequestParts<AppState> for Layout {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let flash = Query::<FlashQuery>::try_from_uri(&parts.uri)
            .map(|Query(flash)| flash)
            .unwrap_or_default();
        let OptionalUser(user) = OptionalUser::from_request_parts(parts, state).await?;
        let default_language = state.config().default_language;

        let mut layout = Self {
            translator: Translator::new(default_language),
            user,
            cart_count: 0,
            error: None,
            notice: None,
            new_orders: 0,
            path: parts.uri.path().to_string(),
        };

        if let Some(session) = parts.extensions.get::<Session>() {
            layout.translator = Translator::new(session::language(session, default_language).await);
            layout.cart_count = session::load_cart(session)
                .await
                .map(|cart| cart.item_count())
                .unwrap_or(0);

            if layout.is_staff() {
                let pending = state.market().read().await.pending_order_count();
                let seen = session::pending_seen(session).await;
                if pending < seen {
                    // Orders were processed; lower the watermark so the next
                    // new order shows the banner again.
                    if let Err(e) = session::set_pending_seen(session, pending).await {
                        tracing::warn!(error = %e, "Failed to lower pending watermark");
                    }
                }
                layout.new_orders = pending.saturating_sub(seen);
            }
        }

        layout.error = layout.translate_flash(flash.error);
        layout.notice = layout.translate_flash(flash.notice);
        Ok(layout)
    }
}

// =============================================================================
// Redirect helpers
// =============================================================================

fn with_flash(path: &str, kind: &str, key: &str) -> Redirect {
    let separator = if path.contains('?') { '&' } else { '?' };
    Redirect::to(&format!(
        "{path}{separator}{kind}={}",
        urlencoding::encode(key)
    ))
}

/// Redirect to `path` showing the translated error `key`.
#[must_use]
pub fn redirect_error(path: &str, key: &str) -> Redirect {
    with_flash(path, "error", key)
}

/// Redirect to `path` showing the translated notice `key`.
#[must_use]
pub fn redirect_notice(path: &str, key: &str) -> Redirect {
    with_flash(path, "notice", key)
}

/// Only follow local redirect targets.
#[must_use]
pub fn safe_next(next: Option<&str>) -> &str {
    next.filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or("/")
}

// =============================================================================
// Routers
// =============================================================================

/// Create the cart and checkout routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show))
        .route("/cart/add", post(cart::add))
        .route("/cart/update", post(cart::update))
        .route("/cart/remove", post(cart::remove))
        .route("/cart/clear", post(cart::clear))
        .route(
            "/checkout/shipping",
            get(checkout::shipping_page).post(checkout::save_shipping),
        )
        .route(
            "/checkout/payment",
            get(checkout::payment_page).post(checkout::pay),
        )
        .route("/checkout/success", get(checkout::success))
        .route("/orders", get(orders::index))
        .route("/orders/{id}/cancel", post(orders::cancel))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    // One bucket shared by every passcode send and password attempt
    let limiter = otp_rate_limiter();

    Router::new()
        .route("/login", get(auth::login_page))
        .route("/login/demo", post(auth::demo_login))
        .route("/login/producer", get(auth::producer_login_page))
        .route(
            "/login/producer/send",
            post(auth::send_otp).layer(limiter.clone()),
        )
        .route(
            "/login/producer/resend",
            post(auth::resend_otp).layer(limiter.clone()),
        )
        .route("/login/producer/verify", post(auth::verify_otp))
        .route("/login/producer/reset", post(auth::reset_otp))
        .route(
            "/login/staff",
            get(auth::staff_login_page).merge(post(auth::staff_login).layer(limiter)),
        )
        .route(
            "/register/producer",
            get(auth::register_producer_page).post(auth::register_producer),
        )
        .route(
            "/register/team",
            get(auth::register_team_page).post(auth::register_team),
        )
        .route("/logout", post(auth::logout))
}

/// Create the producer dashboard routes router.
pub fn producer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(producer::dashboard))
        .route("/draft", post(producer::draft_description))
        .route("/products", post(producer::publish))
        .route("/products/{id}/delete", post(producer::delete))
}

/// Create the admin dashboard routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/orders/{id}/status", post(admin::update_status))
        .route("/bank", post(admin::save_bank))
        .route("/team/{id}/verify", post(admin::verify_team_member))
        .route("/products/{id}/delete", post(admin::delete_product))
        .route("/notifications/dismiss", post(admin::dismiss_notifications))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    let form_routes = Router::new()
        .merge(cart_routes())
        .route("/products/{id}/reviews", post(products::add_review))
        .layer(form_rate_limiter());

    Router::new()
        .route("/", get(home::home))
        .route("/shop", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/about", get(pages::about))
        .route("/language", post(pages::set_language))
        .route("/media/{id}", get(media::show))
        .merge(form_routes)
        .merge(auth_routes())
        .nest("/producer", producer_routes())
        .nest("/admin", admin_routes())
        // Multipart uploads: several images plus form fields
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES * MAX_UPLOAD_FILES))
        .fallback(pages::not_found)
}
