//! Sign-in flows and role gates.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use tribal_hub_core::{ProductId, UserRole};
use tribal_hub_integration_tests::{ADMIN_PASSWORD, TestApp, Upload, extract_between};

/// Passcode shown on the login page after a send.
fn demo_code(body: &str) -> String {
    tribal_hub_integration_tests::demo_code(body).unwrap()
}

async fn listed(app: &TestApp, id: &str) -> bool {
    app.state()
        .market()
        .read()
        .await
        .product(&ProductId::new(id))
        .is_some()
}

// =============================================================================
// Role gates
// =============================================================================

#[tokio::test]
async fn test_anonymous_visitor_is_sent_to_login() {
    let mut app = TestApp::new();

    for path in ["/orders", "/producer", "/admin", "/checkout/shipping"] {
        let response = app.get(path).await;
        assert_eq!(
            response.redirect_target(),
            "/login?error=loginRequired",
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_customer_cannot_open_dashboards() {
    let mut app = TestApp::new();
    assert_eq!(app.login_demo("customer").await.redirect_target(), "/");

    for path in ["/producer", "/admin"] {
        let response = app.get(path).await;
        assert_eq!(response.redirect_target(), "/?error=forbidden", "{path}");
    }

    let orders = app.get("/orders").await;
    assert_eq!(orders.status, StatusCode::OK);
}

#[tokio::test]
async fn test_demo_login_cannot_claim_admin() {
    let mut app = TestApp::new();
    assert_eq!(app.login_demo("admin").await.redirect_target(), "/");

    let admin = app.get("/admin").await;
    assert_eq!(admin.redirect_target(), "/?error=forbidden");
}

#[tokio::test]
async fn test_logout_signs_out() {
    let mut app = TestApp::new();
    app.login_demo("customer").await;

    let logout = app.post_form("/logout", &[]).await;
    assert_eq!(logout.redirect_target(), "/?notice=loggedOut");

    let orders = app.get("/orders").await;
    assert_eq!(orders.redirect_target(), "/login?error=loginRequired");
}

// =============================================================================
// Artisan passcode login
// =============================================================================

#[tokio::test]
async fn test_producer_passcode_login() {
    let mut app = TestApp::new();

    let sent = app
        .post_form("/login/producer/send", &[("mobile", "9876543210")])
        .await;
    assert_eq!(sent.redirect_target(), "/login/producer");

    let page = app.get("/login/producer").await;
    assert_eq!(page.status, StatusCode::OK);
    let code = demo_code(&page.body);
    assert_eq!(code.len(), 4);

    let verified = app
        .post_form("/login/producer/verify", &[("code", code.as_str())])
        .await;
    assert_eq!(verified.redirect_target(), "/producer");

    let dashboard = app.get("/producer").await;
    assert_eq!(dashboard.status, StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_passcode_is_rejected() {
    let mut app = TestApp::new();
    app.post_form("/login/producer/send", &[("mobile", "9876543211")])
        .await;

    let page = app.get("/login/producer").await;
    let code = demo_code(&page.body);
    let wrong = if code == "0000" { "1111" } else { "0000" };

    let verified = app
        .post_form("/login/producer/verify", &[("code", wrong)])
        .await;
    assert_eq!(
        verified.redirect_target(),
        "/login/producer?error=invalidOtp"
    );

    // The same challenge still accepts the right code
    let verified = app
        .post_form("/login/producer/verify", &[("code", code.as_str())])
        .await;
    assert_eq!(verified.redirect_target(), "/producer");
}

#[tokio::test]
async fn test_resend_keeps_wrong_guess_count() {
    let mut app = TestApp::new();
    app.post_form("/login/producer/send", &[("mobile", "9876543210")])
        .await;
    let code = demo_code(&app.get("/login/producer").await.body);
    let wrong = if code == "0000" { "1111" } else { "0000" };

    for _ in 0..4 {
        let verified = app
            .post_form("/login/producer/verify", &[("code", wrong)])
            .await;
        assert_eq!(
            verified.redirect_target(),
            "/login/producer?error=invalidOtp"
        );
    }

    let resent = app.post_form("/login/producer/resend", &[]).await;
    assert_eq!(resent.redirect_target(), "/login/producer");

    // The fifth wrong guess still locks the passcode after a resend
    let code = demo_code(&app.get("/login/producer").await.body);
    let wrong = if code == "0000" { "1111" } else { "0000" };
    let verified = app
        .post_form("/login/producer/verify", &[("code", wrong)])
        .await;
    assert_eq!(
        verified.redirect_target(),
        "/login/producer?error=otpExpired"
    );
}

#[tokio::test]
async fn test_passcode_for_unknown_number() {
    let mut app = TestApp::new();

    let unknown = app
        .post_form("/login/producer/send", &[("mobile", "9000000001")])
        .await;
    assert_eq!(
        unknown.redirect_target(),
        "/login/producer?error=notRegistered"
    );

    let malformed = app
        .post_form("/login/producer/send", &[("mobile", "12345")])
        .await;
    assert_eq!(
        malformed.redirect_target(),
        "/login/producer?error=invalidMobile"
    );
}

#[tokio::test]
async fn test_verify_without_a_passcode() {
    let mut app = TestApp::new();
    let verified = app
        .post_form("/login/producer/verify", &[("code", "1234")])
        .await;
    assert_eq!(
        verified.redirect_target(),
        "/login/producer?error=otpExpired"
    );
}

// =============================================================================
// Registration and staff login
// =============================================================================

#[tokio::test]
async fn test_wrong_staff_password() {
    let mut app = TestApp::new();
    let response = app.login_staff("TRIBALARTHUB", "not-the-password").await;
    assert_eq!(
        response.redirect_target(),
        "/login/staff?error=invalidCredentials"
    );

    assert_eq!(
        app.login_staff("TRIBALARTHUB", ADMIN_PASSWORD)
            .await
            .redirect_target(),
        "/admin"
    );
}

#[tokio::test]
async fn test_team_member_needs_verification() {
    let mut member = TestApp::new();

    let registered = member
        .post_form(
            "/register/team",
            &[
                ("name", "Kavita Rao"),
                ("username", "kavita"),
                ("password", "handloom-2024"),
                ("email", "kavita@example.com"),
                ("contact", "9988776655"),
            ],
        )
        .await;
    assert_eq!(
        registered.redirect_target(),
        "/login/staff?notice=teamRegistered"
    );

    let pending = member.login_staff("kavita", "handloom-2024").await;
    assert_eq!(
        pending.redirect_target(),
        "/login/staff?error=accountPending"
    );

    // The administrator verifies the account from the team tab
    let mut admin = member.new_visitor("203.0.113.30");
    admin.login_admin().await;
    let team = admin.get("/admin?tab=team").await;
    assert_eq!(team.status, StatusCode::OK);
    let member_id = extract_between(&team.body, "/admin/team/", "/verify").unwrap();
    let verify_path = format!("/admin/team/{member_id}/verify");
    let verified = admin.post_form(&verify_path, &[]).await;
    assert_eq!(
        verified.redirect_target(),
        "/admin?tab=team&notice=verified"
    );

    assert_eq!(
        member
            .login_staff("kavita", "handloom-2024")
            .await
            .redirect_target(),
        "/admin"
    );
    let dashboard = member.get("/admin").await;
    assert_eq!(dashboard.status, StatusCode::OK);
}

#[tokio::test]
async fn test_team_registration_validation() {
    let mut app = TestApp::new();

    let weak = app
        .post_form(
            "/register/team",
            &[("name", "Kavita"), ("username", "kavita"), ("password", "short")],
        )
        .await;
    assert_eq!(
        weak.redirect_target(),
        "/register/team?error=weakPassword"
    );

    let taken = app
        .post_form(
            "/register/team",
            &[
                ("name", "Impostor"),
                ("username", "TRIBALARTHUB"),
                ("password", "long-enough-password"),
            ],
        )
        .await;
    assert_eq!(
        taken.redirect_target(),
        "/register/team?error=usernameTaken"
    );
}

#[tokio::test]
async fn test_producer_registration_then_publish() {
    let mut app = TestApp::new();

    let registered = app
        .post_multipart(
            "/register/producer",
            &[
                ("name", "Sunita Bai"),
                ("address", "Dindori, Madhya Pradesh"),
                ("contact", "9812345670"),
                ("art_types", "paintings"),
            ],
            &[],
        )
        .await;
    assert_eq!(
        registered.redirect_target(),
        "/producer?notice=producerRegistered"
    );

    let artisan = {
        let market = app.state().market().read().await;
        market
            .directory()
            .artisans()
            .iter()
            .find(|a| a.name == "Sunita Bai")
            .cloned()
            .unwrap()
    };
    assert_eq!(artisan.role, UserRole::Producer);

    let published = app
        .post_multipart(
            "/producer/products",
            &[
                ("title", "Gond Peacock"),
                ("price", "1800"),
                ("stock", "3"),
                ("category", "paintings"),
                ("description", "Acrylic on canvas."),
            ],
            &[Upload::png("images")],
        )
        .await;
    assert_eq!(
        published.redirect_target(),
        "/producer?notice=productPublished"
    );

    let market = app.state().market().read().await;
    let listing = market.catalog().by_seller(&artisan.id).next().unwrap();
    assert_eq!(listing.title, "Gond Peacock");
    assert_eq!(listing.stock, 3);
    assert!(listing.images.first().unwrap().starts_with("/media/"));
}

#[tokio::test]
async fn test_duplicate_producer_contact_is_rejected() {
    let mut app = TestApp::new();
    let response = app
        .post_multipart(
            "/register/producer",
            &[
                ("name", "Someone Else"),
                ("address", "Ranchi"),
                ("contact", "9876543210"),
                ("art_types", "statues"),
            ],
            &[],
        )
        .await;
    assert_eq!(
        response.redirect_target(),
        "/register/producer?error=contactTaken"
    );
}

// =============================================================================
// Dashboards
// =============================================================================

#[tokio::test]
async fn test_admin_saves_bank_details() {
    let mut app = TestApp::new();
    assert_eq!(app.login_admin().await.redirect_target(), "/admin");

    let bad_ifsc = app
        .post_form(
            "/admin/bank",
            &[
                ("account_name", "Tribal Art Hub Trust"),
                ("bank_name", "State Bank of India"),
                ("account_number", "123456789012"),
                ("ifsc", "SBIN123"),
            ],
        )
        .await;
    assert_eq!(
        bad_ifsc.redirect_target(),
        "/admin?tab=bank&error=invalidIfsc"
    );
    assert!(
        app.state()
            .market()
            .read()
            .await
            .payout_account()
            .is_none()
    );

    let saved = app
        .post_form(
            "/admin/bank",
            &[
                ("account_name", "Tribal Art Hub Trust"),
                ("bank_name", "State Bank of India"),
                ("account_number", "123456789012"),
                ("ifsc", "sbin0001234"),
                ("upi", "tribalarthub@sbi"),
            ],
        )
        .await;
    assert_eq!(saved.redirect_target(), "/admin?tab=bank&notice=bankSaved");

    let market = app.state().market().read().await;
    let account = market.payout_account().unwrap();
    assert_eq!(account.ifsc, "SBIN0001234");
    assert_eq!(account.upi.as_deref(), Some("tribalarthub@sbi"));
}

#[tokio::test]
async fn test_bank_details_are_admin_only() {
    let mut app = TestApp::new();
    app.login_demo("customer").await;
    let response = app
        .post_form(
            "/admin/bank",
            &[
                ("account_name", "Someone"),
                ("bank_name", "Any Bank"),
                ("account_number", "123456789012"),
                ("ifsc", "SBIN0001234"),
            ],
        )
        .await;
    assert_eq!(response.redirect_target(), "/?error=forbidden");
}

#[tokio::test]
async fn test_producer_deletes_only_own_listing() {
    let mut app = TestApp::new();
    // 9876543210 is the artisan who sells products 2, 5 and 8
    assert_eq!(
        app.login_producer("9876543210").await.redirect_target(),
        "/producer"
    );

    let foreign = app.post_form("/producer/products/1/delete", &[]).await;
    assert_eq!(foreign.redirect_target(), "/producer?error=forbidden");
    assert!(listed(&app, "1").await);

    let own = app.post_form("/producer/products/2/delete", &[]).await;
    assert_eq!(own.redirect_target(), "/producer?notice=productDeleted");
    assert!(!listed(&app, "2").await);

    let again = app.post_form("/producer/products/2/delete", &[]).await;
    assert!(
        again
            .redirect_target()
            .starts_with("/producer?error=")
    );
}

#[tokio::test]
async fn test_admin_removes_any_listing() {
    let mut app = TestApp::new();
    app.login_admin().await;

    let removed = app.post_form("/admin/products/1/delete", &[]).await;
    assert_eq!(
        removed.redirect_target(),
        "/admin?tab=producers&notice=productDeleted"
    );
    assert!(!listed(&app, "1").await);

    let product = app.get("/products/1").await;
    assert_eq!(product.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_producer_drafts_description() {
    let mut app = TestApp::new();
    app.login_producer("9876543211").await;

    let drafted = app
        .post_multipart(
            "/producer/draft",
            &[
                ("title", "Gond Tree of Life"),
                ("price", "2200"),
                ("category", "paintings"),
            ],
            &[],
        )
        .await;
    assert_eq!(drafted.status, StatusCode::OK);
    assert!(
        drafted
            .body
            .contains("Gond Tree of Life is a handcrafted piece from our")
    );
    // The rest of the form is echoed back
    assert!(drafted.body.contains(r#"value="2200""#));

    let untitled = app
        .post_multipart("/producer/draft", &[("title", "  ")], &[])
        .await;
    assert_eq!(
        untitled.redirect_target(),
        "/producer?error=fillFieldsErr"
    );
}
