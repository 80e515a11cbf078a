//! Authentication route handlers.
//!
//! Four ways in: one-click demo customer (or guest), artisan passcode
//! login by mobile number, admin/team password login, and registration for
//! artisans and team members.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, State},
    response::{IntoResponse, Redirect},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tribal_hub_core::i18n::{self, EXTRA_ART_TYPES};
use tribal_hub_core::{
    Category, Email, Language, MarketError, Marketplace, MobileNumber, NewProducer,
    NewTeamMember, User, UserRole,
};

use crate::error::{Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::session_keys;
use crate::routes::form::{MultipartForm, media_error_key};
use crate::routes::{Layout, redirect_error, redirect_notice};
use crate::services::auth::{self, Argon2Verifier, AuthError, OtpChallenge, OtpCheck};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Demo login form data.
#[derive(Debug, Deserialize)]
pub struct DemoLoginForm {
    pub role: String,
}

/// Passcode request form data.
#[derive(Debug, Deserialize)]
pub struct SendOtpForm {
    pub mobile: String,
}

/// Passcode entry form data.
#[derive(Debug, Deserialize)]
pub struct VerifyOtpForm {
    pub code: String,
}

/// Staff login form data.
#[derive(Deserialize)]
pub struct StaffLoginForm {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for StaffLoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaffLoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Team member registration form data.
#[derive(Deserialize)]
pub struct TeamRegisterForm {
    pub name: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
}

impl std::fmt::Debug for TeamRegisterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamRegisterForm")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Role selection page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ui: Layout,
}

/// Artisan passcode login template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/producer_login.html")]
pub struct ProducerLoginTemplate {
    pub ui: Layout,
    /// Masked number the passcode was sent to, once sent.
    pub sent_to: Option<String>,
    /// The passcode, shown in place of an SMS.
    pub demo_code: Option<String>,
    pub demo_numbers: Vec<String>,
}

/// Staff login template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/staff_login.html")]
pub struct StaffLoginTemplate {
    pub ui: Layout,
}

/// Craft checkbox option.
#[derive(Debug, Clone)]
pub struct ArtTypeOption {
    pub value: &'static str,
    pub label: String,
}

/// Artisan registration template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register_producer.html")]
pub struct RegisterProducerTemplate {
    pub ui: Layout,
    pub art_types: Vec<ArtTypeOption>,
}

/// Team member registration template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register_team.html")]
pub struct RegisterTeamTemplate {
    pub ui: Layout,
}

// =============================================================================
// Role selection & demo login
// =============================================================================

/// Display the role selection page.
#[instrument(skip(ui))]
pub async fn login_page(ui: Layout) -> impl IntoResponse {
    LoginTemplate { ui }
}

/// One-click login as the demo customer, or browse as a guest.
#[instrument(skip(session))]
pub async fn demo_login(session: Session, Form(form): Form<DemoLoginForm>) -> Result<Redirect> {
    let role = form.role.parse::<UserRole>().unwrap_or(UserRole::Guest);
    let user = Marketplace::demo_login(role);

    if user.role == UserRole::Guest {
        clear_current_user(&session).await?;
        clear_sentry_user();
        return Ok(Redirect::to("/"));
    }

    sign_in(&session, &user).await?;
    Ok(Redirect::to("/"))
}

async fn sign_in(session: &Session, user: &User) -> Result<()> {
    set_current_user(session, user).await?;
    set_sentry_user(&user.id, user.email.as_ref().map(Email::as_str));
    add_breadcrumb("auth", "Signed in", Some(&[("role", user.role.as_str())]));
    tracing::info!(user_id = %user.id, role = %user.role, "User signed in");
    Ok(())
}

/// Sign out and clear the cart.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    Ok(redirect_notice("/", "loggedOut"))
}

// =============================================================================
// Artisan passcode login
// =============================================================================

async fn current_challenge(session: &Session) -> Result<Option<OtpChallenge>> {
    Ok(session.get::<OtpChallenge>(session_keys::OTP).await?)
}

/// Display the passcode login: number entry, or code entry once sent.
#[instrument(skip(state, session, ui))]
pub async fn producer_login_page(
    State(state): State<AppState>,
    session: Session,
    ui: Layout,
) -> Result<impl IntoResponse> {
    let challenge = current_challenge(&session)
        .await?
        .filter(|c| !c.is_expired(Utc::now()));

    let demo_numbers = state
        .market()
        .read()
        .await
        .directory()
        .artisans()
        .iter()
        .filter_map(|artisan| artisan.contact.as_ref().map(ToString::to_string))
        .collect();

    Ok(ProducerLoginTemplate {
        sent_to: challenge.as_ref().map(|c| c.mobile.masked()),
        demo_code: challenge.map(|c| c.code),
        demo_numbers,
        ui,
    })
}

/// Issue a passcode to a registered artisan's number.
#[instrument(skip(state, session))]
pub async fn send_otp(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SendOtpForm>,
) -> Result<Redirect> {
    let Ok(mobile) = MobileNumber::parse(&form.mobile) else {
        return Ok(redirect_error("/login/producer", "invalidMobile"));
    };

    let registered = state.market().read().await.login_producer(&mobile);
    if let Err(e) = registered {
        tracing::info!(mobile = %mobile.masked(), "Passcode requested for unknown number");
        return Ok(redirect_error("/login/producer", e.message_key()));
    }

    issue_otp(&session, mobile).await?;
    Ok(Redirect::to("/login/producer"))
}

async fn issue_otp(session: &Session, mobile: MobileNumber) -> Result<()> {
    store_challenge(session, OtpChallenge::issue(mobile, Utc::now())).await
}

async fn store_challenge(session: &Session, challenge: OtpChallenge) -> Result<()> {
    tracing::info!(
        mobile = %challenge.mobile.masked(),
        attempts = challenge.attempts,
        "Passcode issued"
    );
    session.insert(session_keys::OTP, &challenge).await?;
    Ok(())
}

/// Send a fresh passcode to the same number.
///
/// Wrong guesses against the previous code still count toward the limit.
#[instrument(skip(session))]
pub async fn resend_otp(session: Session) -> Result<Redirect> {
    if let Some(challenge) = current_challenge(&session).await? {
        store_challenge(&session, challenge.reissue(Utc::now())).await?;
    }
    Ok(Redirect::to("/login/producer"))
}

/// Forget the pending passcode to enter another number.
#[instrument(skip(session))]
pub async fn reset_otp(session: Session) -> Result<Redirect> {
    session.remove_value(session_keys::OTP).await?;
    Ok(Redirect::to("/login/producer"))
}

/// Check the passcode and sign the artisan in.
#[instrument(skip(state, session, form))]
pub async fn verify_otp(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<VerifyOtpForm>,
) -> Result<Redirect> {
    let Some(mut challenge) = current_challenge(&session).await? else {
        return Ok(redirect_error("/login/producer", "otpExpired"));
    };

    match challenge.check(&form.code, Utc::now()) {
        OtpCheck::Valid => {
            session.remove_value(session_keys::OTP).await?;
            let artisan = state.market().read().await.login_producer(&challenge.mobile);
            match artisan {
                Ok(artisan) => {
                    sign_in(&session, &artisan).await?;
                    Ok(Redirect::to("/producer"))
                }
                Err(e) => Ok(redirect_error("/login/producer", e.message_key())),
            }
        }
        OtpCheck::Invalid => {
            session.insert(session_keys::OTP, &challenge).await?;
            Ok(redirect_error("/login/producer", "invalidOtp"))
        }
        OtpCheck::Expired => {
            session.remove_value(session_keys::OTP).await?;
            Ok(redirect_error("/login/producer", "otpExpired"))
        }
    }
}

// =============================================================================
// Staff login
// =============================================================================

/// Display the staff login form.
#[instrument(skip(ui))]
pub async fn staff_login_page(ui: Layout) -> impl IntoResponse {
    StaffLoginTemplate { ui }
}

/// Password login for the admin and verified team members.
#[instrument(skip(state, session))]
pub async fn staff_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<StaffLoginForm>,
) -> Result<Redirect> {
    let result = state.market().read().await.login_with_password(
        form.username.trim(),
        &form.password,
        &Argon2Verifier,
    );

    match result {
        Ok(user) => {
            sign_in(&session, &user).await?;
            Ok(Redirect::to("/admin"))
        }
        Err(e @ (MarketError::InvalidCredentials | MarketError::AccountPending)) => {
            tracing::info!(username = %form.username.trim(), error = %e, "Staff login rejected");
            Ok(redirect_error("/login/staff", e.message_key()))
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Registration
// =============================================================================

/// Display the artisan registration form.
#[instrument(skip(ui))]
pub async fn register_producer_page(ui: Layout) -> impl IntoResponse {
    let t = ui.translator();
    let art_types = Category::ALL
        .iter()
        .map(|c| c.as_str())
        .chain(EXTRA_ART_TYPES)
        .map(|value| ArtTypeOption {
            value,
            label: t.t(value).to_string(),
        })
        .collect();

    RegisterProducerTemplate { ui, art_types }
}

/// Register an artisan, with an optional photo, and sign them in.
///
/// Crafts are stored by their English label so shop names read the same
/// in every language.
#[instrument(skip(state, session, multipart))]
pub async fn register_producer(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<Redirect> {
    const BACK: &str = "/register/producer";

    let form = MultipartForm::read(multipart).await?;

    let Ok(contact) = MobileNumber::parse(&form.text("contact")) else {
        return Ok(redirect_error(BACK, "invalidMobile"));
    };
    let photo = match form.store_files("photo", state.media()).await {
        Ok(urls) => urls.into_iter().next(),
        Err(e) => return Ok(redirect_error(BACK, media_error_key(&e))),
    };

    let registration = NewProducer {
        name: form.text("name"),
        address: form.text("address"),
        contact,
        art_types: form
            .all("art_types")
            .iter()
            .map(|key| i18n::translate(key, Language::En).to_string())
            .collect(),
        other_art_type: Some(form.text("other_art_type")),
        photo,
    };

    let result = state.market().write().await.register_producer(registration);
    match result {
        Ok(artisan) => {
            tracing::info!(user_id = %artisan.id, shop = ?artisan.shop_name, "Artisan registered");
            sign_in(&session, &artisan).await?;
            Ok(redirect_notice("/producer", "producerRegistered"))
        }
        Err(e @ (MarketError::Invalid(_) | MarketError::ContactTaken)) => {
            Ok(redirect_error(BACK, e.message_key()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Display the team member registration form.
#[instrument(skip(ui))]
pub async fn register_team_page(ui: Layout) -> impl IntoResponse {
    RegisterTeamTemplate { ui }
}

/// Register an unverified team member.
#[instrument(skip(state))]
pub async fn register_team(
    State(state): State<AppState>,
    Form(form): Form<TeamRegisterForm>,
) -> Result<Redirect> {
    const BACK: &str = "/register/team";

    if form.name.trim().is_empty() || form.username.trim().is_empty() {
        return Ok(redirect_error(BACK, "fillFieldsErr"));
    }
    let email = match form.email.trim() {
        "" => None,
        email => match Email::parse(email) {
            Ok(email) => Some(email),
            Err(_) => return Ok(redirect_error(BACK, "invalidEmail")),
        },
    };
    let contact = match form.contact.trim() {
        "" => None,
        contact => match MobileNumber::parse(contact) {
            Ok(contact) => Some(contact),
            Err(_) => return Ok(redirect_error(BACK, "invalidMobile")),
        },
    };
    let password_hash = match auth::hash_new_password(&form.password) {
        Ok(hash) => hash,
        Err(AuthError::WeakPassword(_)) => return Ok(redirect_error(BACK, "weakPassword")),
        Err(e) => return Err(e.into()),
    };

    let result = state.market().write().await.register_team_member(NewTeamMember {
        name: form.name,
        username: form.username,
        password_hash,
        email,
        contact,
    });

    match result {
        Ok(member) => {
            tracing::info!(user_id = %member.id, "Team member registered, awaiting verification");
            Ok(redirect_notice("/login/staff", "teamRegistered"))
        }
        Err(e @ (MarketError::Invalid(_) | MarketError::UsernameTaken)) => {
            Ok(redirect_error(BACK, e.message_key()))
        }
        Err(e) => Err(e.into()),
    }
}
