//! The in-memory marketplace.
//!
//! [`Marketplace`] owns everything visitors share: the catalog, the order
//! book, the artisan directory, staff accounts and the host payout account.
//! Each visitor's [`Cart`] lives in their session and is passed in by the
//! caller.
//!
//! Operations are plain synchronous mutations returning
//! `Result<_, MarketError>`. The web layer holds the lock around one call.

pub mod cart;
pub mod catalog;
pub mod directory;
pub mod orders;
pub mod seed;

pub use cart::{Cart, MAX_LINE_QUANTITY};
pub use catalog::{Catalog, CategoryFilter};
pub use directory::{Directory, PasswordVerifier};
pub use orders::OrderBook;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::models::{
    NewProducer, NewProduct, NewTeamMember, Order, PayoutAccount, Product, Review,
    ShippingDetails, StaffAccount, User,
};
use crate::types::{
    MobileNumber, OrderId, OrderStatus, PaymentMethod, Price, ProductId, ReviewId, UserId,
    UserRole,
};

/// Errors from marketplace operations.
///
/// Every variant maps to a translation key through
/// [`MarketError::message_key`] so the web layer can show it in the
/// visitor's language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("user not found: {0}")]
    UserNotFound(UserId),

    #[error("cart is empty")]
    EmptyCart,

    #[error("sign-in required")]
    NotSignedIn,

    /// Form validation failure; carries the translation key to show.
    #[error("invalid input: {0}")]
    Invalid(&'static str),

    #[error("only {available} of {title} left in stock")]
    OutOfStock { title: String, available: u32 },

    /// The actor lacks the named role.
    #[error("requires {0} role")]
    Forbidden(&'static str),

    #[error("mobile number already registered")]
    ContactTaken,

    #[error("mobile number not registered")]
    ContactNotRegistered,

    #[error("username already taken")]
    UsernameTaken,

    #[error("account awaiting verification")]
    AccountPending,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("order {0} can no longer be cancelled")]
    NotCancellable(OrderId),
}

impl MarketError {
    /// Translation key for the user-facing message.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::ProductNotFound(_) => "productNotFound",
            Self::OrderNotFound(_) => "orderNotFound",
            Self::UserNotFound(_) => "userNotFound",
            Self::EmptyCart => "emptyCart",
            Self::NotSignedIn => "loginRequired",
            Self::Invalid(key) => key,
            Self::OutOfStock { .. } => "outOfStock",
            Self::Forbidden(_) => "forbidden",
            Self::ContactTaken => "contactTaken",
            Self::ContactNotRegistered => "notRegistered",
            Self::UsernameTaken => "usernameTaken",
            Self::AccountPending => "accountPending",
            Self::InvalidCredentials => "invalidCredentials",
            Self::NotCancellable(_) => "notCancellable",
        }
    }

    /// Whether this is a missing-record error (404 in the web layer).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProductNotFound(_) | Self::OrderNotFound(_) | Self::UserNotFound(_)
        )
    }
}

/// Shorthand for marketplace results.
pub type Result<T> = std::result::Result<T, MarketError>;

/// Everything visitors share.
#[derive(Debug, Clone)]
pub struct Marketplace {
    catalog: Catalog,
    orders: OrderBook,
    directory: Directory,
    payout: Option<PayoutAccount>,
}

impl Marketplace {
    /// An empty marketplace run by `admin`.
    #[must_use]
    pub fn new(admin: StaffAccount) -> Self {
        Self {
            catalog: Catalog::default(),
            orders: OrderBook::default(),
            directory: Directory::new(admin, Vec::new()),
            payout: None,
        }
    }

    /// A marketplace pre-loaded with the demo artisans and listings.
    #[must_use]
    pub fn seeded(admin: StaffAccount) -> Self {
        Self {
            catalog: Catalog::from_products(seed::products()),
            orders: OrderBook::default(),
            directory: Directory::new(admin, seed::artisans()),
            payout: None,
        }
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The order book.
    #[must_use]
    pub const fn orders(&self) -> &OrderBook {
        &self.orders
    }

    /// Artisans and staff.
    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Look up a listing.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    // =========================================================================
    // Sign-in
    // =========================================================================

    /// One-click demo login.
    ///
    /// Guests get an anonymous user. Every other role, including a forged
    /// `admin`, signs in as the demo customer; artisans and staff have their
    /// own flows.
    #[must_use]
    pub fn demo_login(role: UserRole) -> User {
        match role {
            UserRole::Guest => User::new(UserId::new("guest"), "Guest", UserRole::Guest),
            UserRole::Customer | UserRole::Producer | UserRole::Admin | UserRole::TeamMember => {
                User::demo_customer()
            }
        }
    }

    /// Find the artisan an OTP login is for.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::ContactNotRegistered`] if no artisan has this
    /// mobile number.
    pub fn login_producer(&self, mobile: &MobileNumber) -> Result<User> {
        self.directory
            .find_artisan_by_contact(mobile)
            .cloned()
            .ok_or(MarketError::ContactNotRegistered)
    }

    /// Authenticate the admin or a team member.
    ///
    /// # Errors
    ///
    /// See [`Directory::login_with_password`].
    pub fn login_with_password(
        &self,
        username: &str,
        password: &str,
        verifier: &impl PasswordVerifier,
    ) -> Result<User> {
        self.directory
            .login_with_password(username, password, verifier)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Publish a listing for `seller`, newest first.
    ///
    /// Stock defaults to 1 when missing or zero.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] unless `seller` is a producer, and
    /// [`MarketError::Invalid`] when the title, a positive price or an image
    /// is missing.
    pub fn add_product(&mut self, seller: &User, listing: NewProduct) -> Result<ProductId> {
        if seller.role != UserRole::Producer {
            return Err(MarketError::Forbidden("producer"));
        }
        let title = listing.title.trim();
        let price = listing.price.filter(Price::is_listable);
        let images: Vec<String> = listing
            .images
            .into_iter()
            .filter(|img| !img.trim().is_empty())
            .collect();
        let (Some(price), false, false) = (price, title.is_empty(), images.is_empty()) else {
            return Err(MarketError::Invalid("fillFieldsErr"));
        };

        let product = Product {
            id: ProductId::generate(),
            seller_id: seller.id.clone(),
            title: title.to_string(),
            description: listing.description.trim().to_string(),
            price,
            category: listing.category,
            images,
            stock: listing.stock.filter(|s| *s > 0).unwrap_or(1),
            reviews: Vec::new(),
        };
        let id = product.id.clone();
        self.catalog.add(product);
        Ok(id)
    }

    /// Remove a listing.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::ProductNotFound`] for an unknown id and
    /// [`MarketError::Forbidden`] when a producer targets someone else's
    /// listing or the actor is neither a producer nor the admin.
    pub fn delete_product(&mut self, actor: &User, id: &ProductId) -> Result<Product> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| MarketError::ProductNotFound(id.clone()))?;
        let allowed = match actor.role {
            UserRole::Admin => true,
            UserRole::Producer => product.seller_id == actor.id,
            UserRole::Guest | UserRole::Customer | UserRole::TeamMember => false,
        };
        if !allowed {
            return Err(MarketError::Forbidden("producer"));
        }
        self.catalog
            .remove(id)
            .ok_or_else(|| MarketError::ProductNotFound(id.clone()))
    }

    /// Add a review to the front of a product's review list.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotSignedIn`] without an author (or for a
    /// guest), [`MarketError::ProductNotFound`] for an unknown product, and
    /// [`MarketError::Invalid`] for an empty comment.
    pub fn add_review(
        &mut self,
        author: Option<&User>,
        product_id: &ProductId,
        rating: u8,
        comment: &str,
        date: NaiveDate,
    ) -> Result<ReviewId> {
        let author = author
            .filter(|u| u.role != UserRole::Guest)
            .ok_or(MarketError::NotSignedIn)?;
        if comment.trim().is_empty() {
            return Err(MarketError::Invalid("fillFieldsErr"));
        }
        let product = self
            .catalog
            .get_mut(product_id)
            .ok_or_else(|| MarketError::ProductNotFound(product_id.clone()))?;

        let review = Review::new(author.id.clone(), author.name.clone(), rating, comment, date);
        let id = review.id.clone();
        product.reviews.insert(0, review);
        Ok(id)
    }

    // =========================================================================
    // Cart & orders
    // =========================================================================

    /// Snapshot a listing into `cart`, merging with an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::ProductNotFound`] for an unknown id.
    pub fn add_to_cart(&self, cart: &mut Cart, id: &ProductId, quantity: u32) -> Result<()> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| MarketError::ProductNotFound(id.clone()))?;
        cart.add_quantity(product.clone(), quantity);
        Ok(())
    }

    /// Turn `cart` into a pending order and empty it.
    ///
    /// Stock is checked and decremented for every line; on any error the
    /// cart and catalog are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotSignedIn`] without a customer,
    /// [`MarketError::Forbidden`] for non-customer roles,
    /// [`MarketError::EmptyCart`] for an empty cart and the errors of
    /// [`Catalog::reserve`].
    pub fn place_order(
        &mut self,
        customer: Option<&User>,
        cart: &mut Cart,
        shipping: ShippingDetails,
        payment: PaymentMethod,
        now: DateTime<Utc>,
    ) -> Result<OrderId> {
        let customer = customer.ok_or(MarketError::NotSignedIn)?;
        match customer.role {
            UserRole::Customer => {}
            UserRole::Guest => return Err(MarketError::NotSignedIn),
            UserRole::Producer | UserRole::Admin | UserRole::TeamMember => {
                return Err(MarketError::Forbidden("customer"));
            }
        }
        if cart.is_empty() {
            return Err(MarketError::EmptyCart);
        }
        self.catalog.reserve(cart.items())?;

        let total = cart.subtotal();
        let order = Order {
            id: OrderId::generate(),
            customer_id: customer.id.clone(),
            items: cart.take(),
            total,
            status: OrderStatus::Pending,
            placed_at: now,
            shipping: Some(shipping),
            payment_method: Some(payment),
        };
        let id = order.id.clone();
        self.orders.push(order);
        Ok(id)
    }

    /// Cancel one of the customer's own pending orders.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::OrderNotFound`] when the order does not exist
    /// or belongs to someone else, and [`MarketError::NotCancellable`] once
    /// it has left `pending`.
    pub fn cancel_order(&mut self, customer: &User, id: &OrderId) -> Result<()> {
        let order = self
            .orders
            .get(id)
            .filter(|o| o.customer_id == customer.id)
            .ok_or_else(|| MarketError::OrderNotFound(id.clone()))?;
        if !order.status.is_customer_cancellable() {
            return Err(MarketError::NotCancellable(id.clone()));
        }
        self.orders.set_status(id, OrderStatus::Cancelled)?;
        Ok(())
    }

    /// Set any status on any order. Returns the previous status.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] unless `actor` is staff, and
    /// [`MarketError::OrderNotFound`] for an unknown id.
    pub fn update_order_status(
        &mut self,
        actor: &User,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<OrderStatus> {
        if !actor.role.is_staff() {
            return Err(MarketError::Forbidden("admin"));
        }
        self.orders.set_status(id, status)
    }

    /// Orders waiting for the admin.
    #[must_use]
    pub fn pending_order_count(&self) -> usize {
        self.orders.count_with_status(OrderStatus::Pending)
    }

    // =========================================================================
    // Directory
    // =========================================================================

    /// Register an artisan. See [`Directory::register_producer`].
    ///
    /// # Errors
    ///
    /// Propagates directory validation errors.
    pub fn register_producer(&mut self, registration: NewProducer) -> Result<User> {
        self.directory.register_producer(registration)
    }

    /// Register an unverified team member.
    ///
    /// # Errors
    ///
    /// Propagates directory validation errors.
    pub fn register_team_member(&mut self, registration: NewTeamMember) -> Result<User> {
        self.directory.register_team_member(registration)
    }

    /// Let a team member sign in.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] unless `actor` is the admin, and
    /// [`MarketError::UserNotFound`] for an unknown id.
    pub fn verify_team_member(&mut self, actor: &User, id: &UserId) -> Result<()> {
        if actor.role != UserRole::Admin {
            return Err(MarketError::Forbidden("admin"));
        }
        self.directory.verify_team_member(id)
    }

    // =========================================================================
    // Payout account
    // =========================================================================

    /// The host payout account, once saved.
    #[must_use]
    pub const fn payout_account(&self) -> Option<&PayoutAccount> {
        self.payout.as_ref()
    }

    /// Validate and store the host payout account.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Forbidden`] unless `actor` is the admin, and
    /// [`MarketError::Invalid`] when a field fails validation.
    pub fn set_payout_account(
        &mut self,
        actor: &User,
        mut account: PayoutAccount,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if actor.role != UserRole::Admin {
            return Err(MarketError::Forbidden("admin"));
        }
        account.validate().map_err(MarketError::Invalid)?;
        account.updated_at = Some(now);
        self.payout = Some(account);
        Ok(())
    }
}
