//! Authentication service.
//!
//! Staff accounts sign in with an Argon2-hashed password; artisans sign in
//! with a one-time passcode sent to their registered mobile number. There is
//! no SMS gateway, so the passcode is shown on screen.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use tribal_hub_core::MobileNumber;
use tribal_hub_core::market::PasswordVerifier as MarketPasswordVerifier;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// How long an OTP stays valid.
const OTP_TTL_MINUTES: i64 = 5;

/// Wrong guesses allowed before the OTP is discarded.
const OTP_MAX_ATTEMPTS: u8 = 5;

// =========================================================================
// Passwords
// =========================================================================

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against an Argon2 hash.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

/// Validate a new team member password, then hash it.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` if the password is too short, and
/// `AuthError::PasswordHash` if hashing fails.
pub fn hash_new_password(password: &str) -> Result<String, AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    hash_password(password)
}

/// Argon2 verifier handed to the marketplace for staff logins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Verifier;

impl MarketPasswordVerifier for Argon2Verifier {
    fn verify(&self, password: &str, password_hash: &str) -> bool {
        verify_password(password, password_hash)
    }
}

// =========================================================================
// One-time passcodes
// =========================================================================

/// Generate a 4-digit passcode.
#[must_use]
pub fn generate_otp() -> String {
    let code: u16 = rand::rng().random_range(1000..10_000);
    code.to_string()
}

/// Outcome of checking a submitted passcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpCheck {
    /// Code matches; sign the artisan in.
    Valid,
    /// Wrong code; the challenge stays usable.
    Invalid,
    /// Too old or too many wrong guesses; a new code is needed.
    Expired,
}

/// A passcode issued to a mobile number, kept in the visitor's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    pub mobile: MobileNumber,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    #[serde(default)]
    pub attempts: u8,
}

impl OtpChallenge {
    /// Issue a fresh passcode for `mobile`.
    #[must_use]
    pub fn issue(mobile: MobileNumber, now: DateTime<Utc>) -> Self {
        Self {
            mobile,
            code: generate_otp(),
            issued_at: now,
            attempts: 0,
        }
    }

    /// A new passcode for the same number that keeps the wrong-guess count.
    #[must_use]
    pub fn reissue(&self, now: DateTime<Utc>) -> Self {
        Self {
            attempts: self.attempts,
            ..Self::issue(self.mobile.clone(), now)
        }
    }

    /// Whether the passcode is past its lifetime.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.issued_at > Duration::minutes(OTP_TTL_MINUTES)
    }

    /// Check a submitted code, counting wrong guesses.
    pub fn check(&mut self, submitted: &str, now: DateTime<Utc>) -> OtpCheck {
        if self.is_expired(now) || self.attempts >= OTP_MAX_ATTEMPTS {
            return OtpCheck::Expired;
        }
        if submitted.trim() == self.code {
            return OtpCheck::Valid;
        }
        self.attempts += 1;
        if self.attempts >= OTP_MAX_ATTEMPTS {
            OtpCheck::Expired
        } else {
            OtpCheck::Invalid
        }
    }
}
