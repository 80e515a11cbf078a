//! Checkout route handlers: shipping, payment and confirmation.
//!
//! Payment is simulated. After the form validates, the handler waits for
//! the configured delay and then places the order.

use std::sync::LazyLock;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use chrono::{Days, Utc};
use regex::Regex;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tribal_hub_core::{MarketError, OrderId, PaymentMethod, ShippingDetails};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireCustomer;
use crate::models::session::{load_cart, save_cart};
use crate::models::session_keys;
use crate::routes::cart::CartSummary;
use crate::routes::{Layout, redirect_error};
use crate::state::AppState;

/// Earliest and latest delivery estimate, in days after placement.
const DELIVERY_DAYS: (u64, u64) = (5, 7);

/// Banks offered for net banking.
const NET_BANKS: [&str; 5] = [
    "State Bank of India",
    "HDFC Bank",
    "ICICI Bank",
    "Axis Bank",
    "Bank of Maharashtra",
];

static VPA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]{2,256}@[A-Za-z]{2,64}$").expect("Invalid regex"));

static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12,19}$").expect("Invalid regex"));

static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("Invalid regex"));

static CVV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("Invalid regex"));

// =============================================================================
// Shipping
// =============================================================================

/// Shipping page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/shipping.html")]
pub struct ShippingTemplate {
    pub ui: Layout,
    pub cart: CartSummary,
    pub shipping: ShippingDetails,
}

/// Display the shipping form.
#[instrument(skip(state, session, ui))]
pub async fn shipping_page(
    State(state): State<AppState>,
    RequireCustomer(user): RequireCustomer,
    session: Session,
    ui: Layout,
) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(redirect_error("/cart", "emptyCart").into_response());
    }

    let shipping = session
        .get::<ShippingDetails>(session_keys::SHIPPING)
        .await?
        .unwrap_or_else(|| ShippingDetails {
            full_name: user.name.clone(),
            phone: user.contact.as_ref().map(ToString::to_string).unwrap_or_default(),
            ..ShippingDetails::default()
        });

    Ok(ShippingTemplate {
        cart: CartSummary::new(&cart, state.config().gst),
        shipping,
        ui,
    }
    .into_response())
}

/// Shipping form data.
#[derive(Debug, Deserialize)]
pub struct ShippingForm {
    pub full_name: String,
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub pincode: String,
    pub phone: String,
    /// The "my details are correct" checkbox.
    pub confirm: Option<String>,
}

impl ShippingForm {
    /// Trimmed details, or `None` if a required field or the confirmation
    /// is missing.
    fn into_details(self) -> Option<ShippingDetails> {
        let details = ShippingDetails {
            full_name: self.full_name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
            phone: self.phone.trim().to_string(),
        };
        let complete = self.confirm.is_some()
            && [
                &details.full_name,
                &details.address,
                &details.pincode,
                &details.phone,
            ]
            .iter()
            .all(|field| !field.is_empty());
        complete.then_some(details)
    }
}

/// Save shipping details and continue to payment.
#[instrument(skip(session))]
pub async fn save_shipping(
    RequireCustomer(_user): RequireCustomer,
    session: Session,
    Form(form): Form<ShippingForm>,
) -> Result<Redirect> {
    let Some(details) = form.into_details() else {
        return Ok(redirect_error("/checkout/shipping", "fillFieldsErr"));
    };
    session.insert(session_keys::SHIPPING, &details).await?;
    Ok(Redirect::to("/checkout/payment"))
}

// =============================================================================
// Payment
// =============================================================================

/// Payment page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/payment.html")]
pub struct PaymentTemplate {
    pub ui: Layout,
    pub cart: CartSummary,
    pub shipping_summary: String,
    pub methods: [PaymentMethod; 4],
    pub banks: [&'static str; 5],
}

/// Display the payment form.
#[instrument(skip(state, session, ui))]
pub async fn payment_page(
    State(state): State<AppState>,
    RequireCustomer(_user): RequireCustomer,
    session: Session,
    ui: Layout,
) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(redirect_error("/cart", "emptyCart").into_response());
    }
    let Some(shipping) = session
        .get::<ShippingDetails>(session_keys::SHIPPING)
        .await?
    else {
        return Ok(Redirect::to("/checkout/shipping").into_response());
    };

    Ok(PaymentTemplate {
        cart: CartSummary::new(&cart, state.config().gst),
        shipping_summary: shipping.summary(),
        methods: PaymentMethod::ALL,
        banks: NET_BANKS,
        ui,
    }
    .into_response())
}

/// Payment form data. Only the fields of the chosen method are checked.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentForm {
    pub method: String,
    #[serde(default)]
    pub vpa: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cvv: String,
    #[serde(default)]
    pub bank: String,
}

impl PaymentForm {
    /// Validate the fields for the chosen method.
    ///
    /// Returns the translation key of the first problem.
    fn validate(&self) -> std::result::Result<PaymentMethod, &'static str> {
        let method: PaymentMethod = self.method.parse().map_err(|_| "fillFieldsErr")?;
        match method {
            PaymentMethod::Upi => {
                let vpa = self.vpa.trim();
                if vpa.is_empty() {
                    return Err("fillFieldsErr");
                }
                if !VPA_RE.is_match(vpa) {
                    return Err("invalidVpa");
                }
            }
            PaymentMethod::Card => {
                let number: String = self.card_number.split_whitespace().collect();
                let (expiry, cvv) = (self.expiry.trim(), self.cvv.trim());
                if number.is_empty() || expiry.is_empty() || cvv.is_empty() {
                    return Err("fillFieldsErr");
                }
                if !CARD_NUMBER_RE.is_match(&number)
                    || !EXPIRY_RE.is_match(expiry)
                    || !CVV_RE.is_match(cvv)
                {
                    return Err("invalidCard");
                }
            }
            PaymentMethod::NetBanking => {
                if !NET_BANKS.contains(&self.bank.trim()) {
                    return Err("fillFieldsErr");
                }
            }
            PaymentMethod::Cod => {}
        }
        Ok(method)
    }
}

/// Take the (simulated) payment and place the order.
#[instrument(skip(state, session, form), fields(method = %form.method))]
pub async fn pay(
    State(state): State<AppState>,
    RequireCustomer(user): RequireCustomer,
    session: Session,
    Form(form): Form<PaymentForm>,
) -> Result<Redirect> {
    let method = match form.validate() {
        Ok(method) => method,
        Err(key) => return Ok(redirect_error("/checkout/payment", key)),
    };
    let Some(shipping) = session
        .get::<ShippingDetails>(session_keys::SHIPPING)
        .await?
    else {
        return Ok(Redirect::to("/checkout/shipping"));
    };
    let mut cart = load_cart(&session).await?;

    // The gateway "processes" before the marketplace lock is taken
    tokio::time::sleep(state.config().payment_delay).await;

    let placed = state.market().write().await.place_order(
        Some(&user),
        &mut cart,
        shipping,
        method,
        Utc::now(),
    );

    match placed {
        Ok(order_id) => {
            save_cart(&session, &cart).await?;
            session.remove_value(session_keys::SHIPPING).await?;
            add_breadcrumb(
                "order",
                "Placed order",
                Some(&[("order_id", order_id.as_str()), ("method", method.as_str())]),
            );
            tracing::info!(order_id = %order_id, customer_id = %user.id, "Order placed");
            Ok(Redirect::to(&format!(
                "/checkout/success?order={}",
                urlencoding::encode(order_id.as_str())
            )))
        }
        Err(
            e @ (MarketError::EmptyCart
            | MarketError::OutOfStock { .. }
            | MarketError::ProductNotFound(_)),
        ) => {
            tracing::info!(error = %e, "Order rejected");
            Ok(redirect_error("/cart", e.message_key()))
        }
        Err(e) => Err(AppError::from(e)),
    }
}

// =============================================================================
// Confirmation
// =============================================================================

/// Success query parameters.
#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    pub order: String,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct SuccessTemplate {
    pub ui: Layout,
    pub order_id: String,
    pub total: String,
    pub payment_key: &'static str,
    pub delivery_from: String,
    pub delivery_to: String,
}

/// Display the order confirmation.
#[instrument(skip(state, ui))]
pub async fn success(
    State(state): State<AppState>,
    RequireCustomer(user): RequireCustomer,
    ui: Layout,
    Query(query): Query<SuccessQuery>,
) -> Result<impl IntoResponse> {
    let id = OrderId::new(query.order);
    let gst = state.config().gst;

    let market = state.market().read().await;
    let order = market
        .orders()
        .get(&id)
        .filter(|o| o.customer_id == user.id)
        .ok_or_else(|| MarketError::OrderNotFound(id.clone()))?;

    let date = order.placed_at.date_naive();
    let template = SuccessTemplate {
        order_id: order.id.to_string(),
        total: order.grand_total(gst).to_string(),
        payment_key: order
            .payment_method
            .map_or("paymentMethod", PaymentMethod::label_key),
        delivery_from: (date + Days::new(DELIVERY_DAYS.0)).format("%d %b").to_string(),
        delivery_to: (date + Days::new(DELIVERY_DAYS.1)).format("%d %b %Y").to_string(),
        ui,
    };
    drop(market);
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(method: &str) -> PaymentForm {
        PaymentForm {
            method: method.to_string(),
            ..PaymentForm::default()
        }
    }

    #[test]
    fn test_shipping_requires_fields_and_confirmation() {
        let form = || ShippingForm {
            full_name: " Priya Sharma ".to_string(),
            address: "12 MG Road".to_string(),
            city: String::new(),
            pincode: "411001".to_string(),
            phone: "9876500000".to_string(),
            confirm: Some("on".to_string()),
        };

        let details = form().into_details();
        assert_eq!(details.map(|d| d.full_name), Some("Priya Sharma".to_string()));

        let mut unconfirmed = form();
        unconfirmed.confirm = None;
        assert!(unconfirmed.into_details().is_none());

        let mut blank_phone = form();
        blank_phone.phone = "  ".to_string();
        assert!(blank_phone.into_details().is_none());
    }

    #[test]
    fn test_upi_requires_valid_vpa() {
        assert_eq!(payment("upi").validate(), Err("fillFieldsErr"));

        let mut form = payment("upi");
        form.vpa = "priya".to_string();
        assert_eq!(form.validate(), Err("invalidVpa"));

        form.vpa = "priya.sharma@okaxis".to_string();
        assert_eq!(form.validate(), Ok(PaymentMethod::Upi));
    }

    #[test]
    fn test_card_requires_all_fields() {
        let mut form = payment("card");
        form.card_number = "4111 1111 1111 1111".to_string();
        form.expiry = "12/29".to_string();
        assert_eq!(form.validate(), Err("fillFieldsErr"));

        form.cvv = "12".to_string();
        assert_eq!(form.validate(), Err("invalidCard"));

        form.cvv = "123".to_string();
        assert_eq!(form.validate(), Ok(PaymentMethod::Card));

        form.expiry = "13/29".to_string();
        assert_eq!(form.validate(), Err("invalidCard"));
    }

    #[test]
    fn test_cod_and_netbanking() {
        assert_eq!(payment("cod").validate(), Ok(PaymentMethod::Cod));
        assert_eq!(payment("netbanking").validate(), Err("fillFieldsErr"));

        let mut form = payment("netbanking");
        form.bank = "HDFC Bank".to_string();
        assert_eq!(form.validate(), Ok(PaymentMethod::NetBanking));

        assert_eq!(payment("bitcoin").validate(), Err("fillFieldsErr"));
    }
}
