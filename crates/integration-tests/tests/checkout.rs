//! Cart to order, end to end.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use tribal_hub_core::{MAX_LINE_QUANTITY, OrderId, OrderStatus, ProductId};
use tribal_hub_integration_tests::{TestApp, Upload};

const SHIPPING: [(&str, &str); 6] = [
    ("full_name", "Asha Devi"),
    ("address", "12 Station Road"),
    ("city", "Nagpur"),
    ("pincode", "440001"),
    ("phone", "9123456780"),
    ("confirm", "on"),
];

async fn stock_of(app: &TestApp, id: &str) -> u32 {
    app.state()
        .market()
        .read()
        .await
        .product(&ProductId::new(id))
        .map(|p| p.stock)
        .unwrap()
}

/// Add product `1` twice and pay cash on delivery; returns the order id.
async fn place_cod_order(app: &mut TestApp) -> String {
    assert_eq!(app.login_demo("customer").await.redirect_target(), "/");

    let added = app
        .post_form(
            "/cart/add",
            &[("product_id", "1"), ("quantity", "2"), ("next", "/shop")],
        )
        .await;
    assert_eq!(added.redirect_target(), "/shop?notice=addedToCart");

    let cart = app.get("/cart").await;
    assert_eq!(cart.status, StatusCode::OK);
    assert!(cart.body.contains("Madhubani Fish Painting"));

    let shipped = app.post_form("/checkout/shipping", &SHIPPING).await;
    assert_eq!(shipped.redirect_target(), "/checkout/payment");

    let paid = app.post_form("/checkout/payment", &[("method", "cod")]).await;
    let target = paid.redirect_target().to_string();
    let order_id = target
        .strip_prefix("/checkout/success?order=")
        .unwrap()
        .to_string();
    assert!(order_id.starts_with("ORD-"));
    order_id
}

#[tokio::test]
async fn test_cod_checkout_places_order_and_reserves_stock() {
    let mut app = TestApp::new();
    let before = stock_of(&app, "1").await;

    let order_id = place_cod_order(&mut app).await;

    let success = app
        .get(&format!("/checkout/success?order={order_id}"))
        .await;
    assert_eq!(success.status, StatusCode::OK);
    assert!(success.body.contains(&order_id));

    assert_eq!(stock_of(&app, "1").await, before - 2);

    // The cart is emptied by a successful order
    let cart = app.get("/cart").await;
    assert!(!cart.body.contains("Madhubani Fish Painting"));

    let orders = app.get("/orders").await;
    assert_eq!(orders.status, StatusCode::OK);
    assert!(orders.body.contains(&order_id));
}

#[tokio::test]
async fn test_order_shows_up_for_admin_and_status_can_change() {
    let mut customer = TestApp::new();
    let order_id = place_cod_order(&mut customer).await;

    let mut admin = customer.new_visitor("203.0.113.20");
    assert_eq!(admin.login_admin().await.redirect_target(), "/admin");

    let dashboard = admin.get("/admin").await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert!(dashboard.body.contains(&order_id));

    let updated = admin
        .post_form(
            &format!("/admin/orders/{order_id}/status"),
            &[("status", "shipped")],
        )
        .await;
    assert_eq!(
        updated.redirect_target(),
        "/admin?tab=orders&notice=statusUpdated"
    );

    let market = admin.state().market().read().await;
    let order = market.orders().get(&OrderId::new(order_id)).unwrap();
    assert_eq!(order.status, OrderStatus::Shipped);
}

#[tokio::test]
async fn test_customer_can_cancel_pending_order() {
    let mut app = TestApp::new();
    let order_id = place_cod_order(&mut app).await;

    let cancelled = app
        .post_form(&format!("/orders/{order_id}/cancel"), &[])
        .await;
    assert!(cancelled.redirect_target().starts_with("/orders"));

    let market = app.state().market().read().await;
    let order = market.orders().get(&OrderId::new(order_id)).unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
}

#[tokio::test]
async fn test_checkout_requires_shipping_confirmation() {
    let mut app = TestApp::new();
    assert_eq!(app.login_demo("customer").await.redirect_target(), "/");
    app.post_form("/cart/add", &[("product_id", "1")]).await;

    let incomplete = app
        .post_form("/checkout/shipping", &SHIPPING[..5])
        .await;
    assert_eq!(
        incomplete.redirect_target(),
        "/checkout/shipping?error=fillFieldsErr"
    );

    // Without saved shipping the payment page sends the customer back
    let payment = app.get("/checkout/payment").await;
    assert_eq!(payment.redirect_target(), "/checkout/shipping");
}

#[tokio::test]
async fn test_invalid_upi_id_is_rejected() {
    let mut app = TestApp::new();
    assert_eq!(app.login_demo("customer").await.redirect_target(), "/");
    app.post_form("/cart/add", &[("product_id", "1")]).await;
    app.post_form("/checkout/shipping", &SHIPPING).await;

    let paid = app
        .post_form(
            "/checkout/payment",
            &[("method", "upi"), ("vpa", "not a vpa")],
        )
        .await;
    assert_eq!(
        paid.redirect_target(),
        "/checkout/payment?error=invalidVpa"
    );
    assert!(app.state().market().read().await.orders().is_empty());
}

#[tokio::test]
async fn test_ordering_more_than_stock_is_rejected_at_payment() {
    let mut app = TestApp::new();
    let stock = stock_of(&app, "1").await;
    assert_eq!(app.login_demo("customer").await.redirect_target(), "/");

    let quantity = (stock + 1).to_string();
    app.post_form(
        "/cart/add",
        &[("product_id", "1"), ("quantity", quantity.as_str())],
    )
    .await;
    app.post_form("/checkout/shipping", &SHIPPING).await;

    let paid = app.post_form("/checkout/payment", &[("method", "cod")]).await;
    assert!(paid.redirect_target().starts_with("/cart?error="));

    // Nothing was reserved and the cart is kept for the customer to fix
    assert_eq!(stock_of(&app, "1").await, stock);
    assert!(app.state().market().read().await.orders().is_empty());
    let cart = app.get("/cart").await;
    assert!(cart.body.contains("Madhubani Fish Painting"));
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn test_cart_update_and_remove() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("product_id", "1")]).await;
    app.post_form("/cart/add", &[("product_id", "2")]).await;

    let updated = app
        .post_form("/cart/update", &[("product_id", "1"), ("quantity", "3")])
        .await;
    assert_eq!(updated.redirect_target(), "/cart");
    let cart = app.get("/cart").await;
    assert!(cart.body.contains(r#"value="3""#));

    let unknown = app
        .post_form("/cart/update", &[("product_id", "404"), ("quantity", "1")])
        .await;
    assert!(unknown.redirect_target().starts_with("/cart?error="));

    let removed = app
        .post_form("/cart/remove", &[("product_id", "2")])
        .await;
    assert_eq!(removed.redirect_target(), "/cart");
    let cart = app.get("/cart").await;
    assert!(cart.body.contains("Madhubani Fish Painting"));
    assert!(!cart.body.contains("Dhokra Brass Elephant"));

    // Zero empties the line as well
    app.post_form("/cart/update", &[("product_id", "1"), ("quantity", "0")])
        .await;
    let cart = app.get("/cart").await;
    assert!(!cart.body.contains("Madhubani Fish Painting"));
}

#[tokio::test]
async fn test_huge_cart_quantity_is_capped() {
    let mut app = TestApp::new();
    app.post_form("/cart/add", &[("product_id", "1")]).await;
    app.post_form("/cart/add", &[("product_id", "2")]).await;

    let max = u32::MAX.to_string();
    let updated = app
        .post_form(
            "/cart/update",
            &[("product_id", "1"), ("quantity", max.as_str())],
        )
        .await;
    assert_eq!(updated.redirect_target(), "/cart");

    // Every page still renders the navbar count
    let cart = app.get("/cart").await;
    assert_eq!(cart.status, StatusCode::OK);
    assert!(cart.body.contains(&format!(r#"value="{MAX_LINE_QUANTITY}""#)));
    assert_eq!(app.get("/").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_listing_price_above_cap_is_rejected() {
    let mut app = TestApp::new();
    app.login_producer("9876543210").await;

    let published = app
        .post_multipart(
            "/producer/products",
            &[
                ("title", "Priceless Mask"),
                ("price", "79228162514264337593543950335"),
            ],
            &[Upload::png("images")],
        )
        .await;
    assert_eq!(
        published.redirect_target(),
        "/producer?error=fillFieldsErr"
    );

    let market = app.state().market().read().await;
    assert!(
        !market
            .catalog()
            .all()
            .iter()
            .any(|p| p.title == "Priceless Mask")
    );
}

// =============================================================================
// New-order banner
// =============================================================================

const BANNER: &str = r#"class="banner banner-order""#;

#[tokio::test]
async fn test_new_order_banner_lifecycle() {
    let mut customer = TestApp::new();
    let mut admin = customer.new_visitor("203.0.113.50");
    admin.login_admin().await;
    assert!(!admin.get("/admin").await.body.contains(BANNER));

    let order_id = place_cod_order(&mut customer).await;
    let dashboard = admin.get("/admin").await;
    assert!(dashboard.body.contains(BANNER));
    // Shoppers never see it
    assert!(!customer.get("/").await.body.contains(BANNER));

    let dismissed = admin
        .post_form("/admin/notifications/dismiss", &[("next", "/admin")])
        .await;
    assert_eq!(dismissed.redirect_target(), "/admin");
    assert!(!admin.get("/admin").await.body.contains(BANNER));

    // Processing the order lowers the watermark on the next page view
    admin
        .post_form(
            &format!("/admin/orders/{order_id}/status"),
            &[("status", "shipped")],
        )
        .await;
    assert!(!admin.get("/admin?tab=orders").await.body.contains(BANNER));

    // so a single new order brings the banner back
    place_cod_order(&mut customer).await;
    assert!(admin.get("/admin").await.body.contains(BANNER));
}
