//! Integration tests for Tribal Art Hub.
//!
//! The storefront router is built in-process and driven with
//! `tower::ServiceExt::oneshot`, so no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tribal-hub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout` - Cart to order, then the order in both dashboards
//! - `auth` - Demo, passcode, staff and team sign-in
//! - `pages` - Health, language switching, About and the 404 page

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use tower::ServiceExt;

use tribal_hub_storefront::config::StorefrontConfig;
use tribal_hub_storefront::middleware::session::SESSION_COOKIE_NAME;
use tribal_hub_storefront::state::AppState;

/// Admin password used by every test app.
pub const ADMIN_PASSWORD: &str = "integration-secret";

/// Largest body a test will read.
const BODY_LIMIT: usize = 4 * 1024 * 1024;

/// A response reduced to what the tests assert on.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Assert a 303 redirect and return its target.
    ///
    /// # Panics
    ///
    /// Panics when the response is not a redirect.
    #[must_use]
    pub fn redirect_target(&self) -> &str {
        assert_eq!(
            self.status,
            StatusCode::SEE_OTHER,
            "expected redirect, got body: {}",
            self.body
        );
        self.location().expect("redirect without Location header")
    }
}

/// A file part of a multipart request.
#[derive(Debug, Clone, Copy)]
pub struct Upload<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

impl<'a> Upload<'a> {
    /// A small PNG-typed upload under `field`.
    #[must_use]
    pub const fn png(field: &'a str) -> Self {
        Self {
            field,
            file_name: "art.png",
            content_type: "image/png",
            bytes: b"\x89PNG\r\n\x1a\nnot really an image",
        }
    }
}

/// One browser session against a fresh storefront.
///
/// Keeps the session cookie between requests and sends a fixed
/// `X-Forwarded-For` so rate-limited routes can key the client.
pub struct TestApp {
    router: Router,
    state: AppState,
    cookie: Option<String>,
    client_ip: String,
}

impl TestApp {
    /// A storefront with the demo marketplace and no artificial delays.
    ///
    /// # Panics
    ///
    /// Panics if the admin password cannot be hashed.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(StorefrontConfig::for_testing(ADMIN_PASSWORD))
            .expect("test app state");
        let router = tribal_hub_storefront::app(state.clone());
        Self {
            router,
            state,
            cookie: None,
            client_ip: "203.0.113.10".to_string(),
        }
    }

    /// A second visitor on the same storefront, with its own cookies.
    #[must_use]
    pub fn new_visitor(&self, client_ip: &str) -> Self {
        Self {
            router: self.router.clone(),
            state: self.state.clone(),
            cookie: None,
            client_ip: client_ip.to_string(),
        }
    }

    /// Shared application state, for asserting on the marketplace directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request("GET", uri).body(Body::empty());
        self.send(request.expect("GET request")).await
    }

    /// Send a url-encoded form POST.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)));
        self.send(request.expect("POST request")).await
    }

    /// Send a multipart POST made of text fields and optional files.
    pub async fn post_multipart(
        &mut self,
        uri: &str,
        fields: &[(&str, &str)],
        files: &[Upload<'_>],
    ) -> TestResponse {
        const BOUNDARY: &str = "tribal-hub-test-boundary";
        let mut body: Vec<u8> = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        for file in files {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                    file.field, file.file_name, file.content_type
                )
                .as_bytes(),
            );
            body.extend_from_slice(file.bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let request = self
            .request("POST", uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body));
        self.send(request.expect("multipart request")).await
    }

    /// Sign in through the one-click demo login.
    pub async fn login_demo(&mut self, role: &str) -> TestResponse {
        self.post_form("/login/demo", &[("role", role)]).await
    }

    /// Sign in as the artisan registered under `mobile`, reading the
    /// passcode off the login page.
    ///
    /// # Panics
    ///
    /// Panics when no passcode is shown after the send.
    pub async fn login_producer(&mut self, mobile: &str) -> TestResponse {
        self.post_form("/login/producer/send", &[("mobile", mobile)])
            .await;
        let page = self.get("/login/producer").await;
        let code = demo_code(&page.body).expect("passcode on login page");
        self.post_form("/login/producer/verify", &[("code", code.as_str())])
            .await
    }

    /// Sign in with staff credentials.
    pub async fn login_staff(&mut self, username: &str, password: &str) -> TestResponse {
        self.post_form(
            "/login/staff",
            &[("username", username), ("password", password)],
        )
        .await
    }

    /// Sign in as the configured administrator.
    pub async fn login_admin(&mut self) -> TestResponse {
        let username = self.state.config().admin.username.clone();
        self.login_staff(&username, ADMIN_PASSWORD).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", &self.client_ip);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(value) = value.to_str() else { continue };
            let Some(pair) = value.split(';').next() else {
                continue;
            };
            if pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")) {
                self.cookie = Some(pair.to_string());
            }
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("response body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Passcode shown on the producer login page after a send.
#[must_use]
pub fn demo_code(body: &str) -> Option<String> {
    let line = extract_between(body, r#"<p class="demo-code">"#, "</p>")?;
    extract_between(line, "<strong>", "</strong>").map(str::to_string)
}

/// Text between `start` and the next `end` after it.
#[must_use]
pub fn extract_between<'a>(body: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = body.find(start)? + start.len();
    let rest = body.get(from..)?;
    let to = rest.find(end)?;
    rest.get(..to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_form() {
        assert_eq!(
            encode_form(&[("full_name", "Asha Devi"), ("next", "/shop?x=1")]),
            "full_name=Asha%20Devi&next=%2Fshop%3Fx%3D1"
        );
    }

    #[test]
    fn test_extract_between() {
        let body = r#"<p class="demo-code">Code: <strong>123456</strong></p>"#;
        assert_eq!(
            extract_between(body, "<strong>", "</strong>"),
            Some("123456")
        );
        assert_eq!(extract_between(body, "<em>", "</em>"), None);
    }

    #[test]
    fn test_demo_code() {
        let body = r#"<div><p class="demo-code">Code: <strong>4821</strong></p></div>"#;
        assert_eq!(demo_code(body).as_deref(), Some("4821"));
        assert_eq!(demo_code("<p>nothing</p>"), None);
    }
}
