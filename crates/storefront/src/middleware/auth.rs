//! Authentication extractors.
//!
//! The signed-in [`User`] is read from the session. Each role-gated page
//! takes one of the `Require*` extractors; a visitor who is not signed in
//! is sent to the login page and a visitor with the wrong role is sent home.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use tribal_hub_core::{User, UserRole};

use crate::models::session_keys;

/// Error returned when a page needs a user the visitor is not.
#[derive(Debug)]
pub enum AuthRejection {
    /// Not signed in: go to the login page.
    RedirectToLogin,
    /// Signed in with the wrong role: go home.
    Forbidden,
    /// No session layer on the route.
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login?error=loginRequired").into_response(),
            Self::Forbidden => Redirect::to("/?error=forbidden").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

async fn current_user(parts: &Parts) -> Result<Option<User>, AuthRejection> {
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(AuthRejection::Unauthorized)?;

    Ok(session
        .get::<User>(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
        .filter(|user| user.role != UserRole::Guest))
}

async fn require(parts: &Parts, allowed: impl Fn(UserRole) -> bool) -> Result<User, AuthRejection> {
    let user = current_user(parts)
        .await?
        .ok_or(AuthRejection::RedirectToLogin)?;
    if allowed(user.role) {
        Ok(user)
    } else {
        tracing::debug!(user_id = %user.id, role = %user.role, path = %parts.uri.path(), "Role gate rejected");
        Err(AuthRejection::Forbidden)
    }
}

/// Extractor for the signed-in user, if any.
///
/// Guest sessions count as signed out.
pub struct OptionalUser(pub Option<User>);

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_user(parts).await.ok().flatten()))
    }
}

macro_rules! role_extractor {
    ($(#[$meta:meta])* $name:ident, $allowed:expr) => {
        $(#[$meta])*
        pub struct $name(pub User);

        impl<S> FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = AuthRejection;

            async fn from_request_parts(
                parts: &mut Parts,
                _state: &S,
            ) -> Result<Self, Self::Rejection> {
                require(parts, $allowed).await.map(Self)
            }
        }
    };
}

role_extractor!(
    /// Any signed-in user.
    RequireUser,
    |_| true
);

role_extractor!(
    /// A signed-in customer.
    RequireCustomer,
    |role| role == UserRole::Customer
);

role_extractor!(
    /// A signed-in artisan.
    RequireProducer,
    |role| role == UserRole::Producer
);

role_extractor!(
    /// The host admin.
    RequireAdmin,
    |role| role == UserRole::Admin
);

role_extractor!(
    /// The admin or a verified team member.
    RequireStaff,
    UserRole::is_staff
);

/// Sign `user` in, replacing any previous user.
///
/// The session id is cycled to prevent fixation.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &User,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Sign out: drop the user, cart and checkout state.
///
/// The language choice survives.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<User>(session_keys::CURRENT_USER).await?;
    for key in [
        session_keys::CART,
        session_keys::SHIPPING,
        session_keys::OTP,
        session_keys::PENDING_SEEN,
    ] {
        session.remove_value(key).await?;
    }
    Ok(())
}
