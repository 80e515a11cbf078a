//! Cart route handlers.
//!
//! The cart lives in the visitor's session as a snapshot of the listings
//! that were added; prices are not refreshed until checkout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tribal_hub_core::{Cart, CartItem, ProductId, TaxRate};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::session::{load_cart, save_cart};
use crate::routes::{Layout, redirect_error, redirect_notice, safe_next};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub product_id: String,
    pub title: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.to_string(),
            title: item.product.title.clone(),
            image: item.product.cover_image().unwrap_or_default().to_string(),
            unit_price: item.product.price.to_string(),
            quantity: item.quantity,
            line_total: item.line_total().to_string(),
        }
    }
}

/// Cart totals shared by the cart and checkout pages.
#[derive(Debug, Clone)]
pub struct CartSummary {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: String,
    pub gst_label: String,
    pub gst: String,
    pub total: String,
}

impl CartSummary {
    #[must_use]
    pub fn new(cart: &Cart, gst: TaxRate) -> Self {
        Self {
            lines: cart.items().iter().map(CartLineView::from).collect(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal().to_string(),
            gst_label: gst.percent_label(),
            gst: cart.tax(gst).to_string(),
            total: cart.total(gst).to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub ui: Layout,
    pub cart: CartSummary,
}

/// Display the cart page.
#[instrument(skip(state, session, ui))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    ui: Layout,
) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    Ok(CartShowTemplate {
        cart: CartSummary::new(&cart, state.config().gst),
        ui,
    })
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
    /// Present when the "buy now" button was used.
    pub buy_now: Option<String>,
    /// Page to return to.
    pub next: Option<String>,
}

/// Add a product to the cart, or add it and go straight to checkout.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    let mut cart = load_cart(&session).await?;

    state
        .market()
        .read()
        .await
        .add_to_cart(&mut cart, &id, form.quantity.unwrap_or(1).max(1))?;
    save_cart(&session, &cart).await?;

    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(product_id = %id, items = cart.item_count(), "Added to cart");

    if form.buy_now.is_some() {
        return Ok(Redirect::to("/checkout/shipping"));
    }
    Ok(redirect_notice(
        safe_next(form.next.as_deref()),
        "addedToCart",
    ))
}

/// Update cart line form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: u32,
}

/// Change a line's quantity; zero removes it.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await?;
    if !cart.set_quantity(&ProductId::new(form.product_id), form.quantity) {
        return Ok(redirect_error("/cart", "productNotFound"));
    }
    save_cart(&session, &cart).await?;
    Ok(Redirect::to("/cart"))
}

/// Remove cart line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    let mut cart = load_cart(&session).await?;
    if cart.remove(&id) {
        save_cart(&session, &cart).await?;
        add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", id.as_str())]));
    }
    Ok(Redirect::to("/cart"))
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Redirect> {
    save_cart(&session, &Cart::new()).await?;
    Ok(Redirect::to("/cart"))
}
