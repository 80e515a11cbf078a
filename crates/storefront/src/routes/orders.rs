//! "My orders" route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::instrument;

use tribal_hub_core::{MarketError, Order, OrderId, TaxRate};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireCustomer;
use crate::routes::{Layout, redirect_error, redirect_notice};
use crate::state::AppState;

/// Order line display data.
#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub product_id: String,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Order display data shared by "my orders" and the admin dashboard.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub status: &'static str,
    pub placed_on: String,
    pub lines: Vec<OrderLineView>,
    pub unit_count: u32,
    pub total: String,
    pub gst: String,
    pub grand_total: String,
    pub shipping: String,
    pub payment_key: &'static str,
    pub cancellable: bool,
}

impl OrderView {
    #[must_use]
    pub fn new(order: &Order, gst: TaxRate) -> Self {
        Self {
            id: order.id.to_string(),
            status: order.status.as_str(),
            placed_on: order.placed_at.format("%Y-%m-%d").to_string(),
            lines: order
                .items
                .iter()
                .map(|item| OrderLineView {
                    product_id: item.product.id.to_string(),
                    title: item.product.title.clone(),
                    image: item.product.cover_image().unwrap_or_default().to_string(),
                    quantity: item.quantity,
                    line_total: item.line_total().to_string(),
                })
                .collect(),
            unit_count: order.unit_count(),
            total: order.total.to_string(),
            gst: order.tax(gst).to_string(),
            grand_total: order.grand_total(gst).to_string(),
            shipping: order
                .shipping
                .as_ref()
                .map(tribal_hub_core::ShippingDetails::summary)
                .unwrap_or_default(),
            payment_key: order.payment_method.map_or("", |m| m.label_key()),
            cancellable: order.status.is_customer_cancellable(),
        }
    }

    /// Whether the order is in `status`.
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }
}

/// My orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate {
    pub ui: Layout,
    pub orders: Vec<OrderView>,
}

/// Display the customer's orders, newest first.
#[instrument(skip(state, ui))]
pub async fn index(
    State(state): State<AppState>,
    RequireCustomer(user): RequireCustomer,
    ui: Layout,
) -> impl IntoResponse {
    let gst = state.config().gst;
    let orders = state
        .market()
        .read()
        .await
        .orders()
        .for_customer(&user.id)
        .map(|order| OrderView::new(order, gst))
        .collect();

    OrdersTemplate { ui, orders }
}

/// Cancel one of the customer's pending orders.
#[instrument(skip(state))]
pub async fn cancel(
    State(state): State<AppState>,
    RequireCustomer(user): RequireCustomer,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let id = OrderId::new(id);
    let result = state.market().write().await.cancel_order(&user, &id);

    match result {
        Ok(()) => {
            add_breadcrumb("order", "Cancelled order", Some(&[("order_id", id.as_str())]));
            tracing::info!(order_id = %id, customer_id = %user.id, "Order cancelled");
            Ok(redirect_notice("/orders", "orderCancelled"))
        }
        Err(e @ MarketError::NotCancellable(_)) => Ok(redirect_error("/orders", e.message_key())),
        Err(e) => Err(e.into()),
    }
}
