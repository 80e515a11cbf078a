//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HUB_ADMIN_PASSWORD` - Host admin password (min 8 chars, not a placeholder)
//!
//! ## Optional
//! - `HUB_HOST` - Bind address (default: 127.0.0.1)
//! - `HUB_PORT` - Listen port (default: 3000)
//! - `HUB_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `HUB_ADMIN_USERNAME` - Host admin username (default: TRIBALARTHUB)
//! - `HUB_PAYMENT_DELAY_MS` - Simulated payment latency (default: 1500)
//! - `HUB_SAVE_DELAY_MS` - Simulated bank-details save latency (default: 1500)
//! - `HUB_GST_BPS` - GST rate in basis points (default: 500)
//! - `HUB_MEDIA_CAPACITY` - Uploaded images kept in memory (default: 512)
//! - `HUB_DEFAULT_LANGUAGE` - `en`, `hi` or `mr` (default: en)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use tribal_hub_core::{Language, TaxRate};

const MIN_PASSWORD_LENGTH: usize = 8;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 2.5;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL; `https` enables secure cookies
    pub base_url: String,
    /// Host admin credentials
    pub admin: AdminCredentials,
    /// How long the fake payment gateway takes
    pub payment_delay: Duration,
    /// How long saving bank details takes
    pub save_delay: Duration,
    /// GST shown on cart and orders
    pub gst: TaxRate,
    /// Maximum number of uploaded images held in memory
    pub media_capacity: u64,
    /// Language for visitors who have not picked one
    pub default_language: Language,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (production, staging, ...)
    pub sentry_environment: Option<String>,
}

/// Host admin login.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the admin password fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let admin = AdminCredentials {
            username: get_env_or_default("HUB_ADMIN_USERNAME", "TRIBALARTHUB"),
            password: get_validated_password("HUB_ADMIN_PASSWORD")?,
        };

        Ok(Self {
            host: parse_env_or_default("HUB_HOST", "127.0.0.1")?,
            port: parse_env_or_default("HUB_PORT", "3000")?,
            base_url: get_env_or_default("HUB_BASE_URL", "http://localhost:3000"),
            admin,
            payment_delay: Duration::from_millis(parse_env_or_default(
                "HUB_PAYMENT_DELAY_MS",
                "1500",
            )?),
            save_delay: Duration::from_millis(parse_env_or_default("HUB_SAVE_DELAY_MS", "1500")?),
            gst: TaxRate::from_bps(parse_env_or_default("HUB_GST_BPS", "500")?),
            media_capacity: parse_env_or_default("HUB_MEDIA_CAPACITY", "512")?,
            default_language: parse_env_or_default("HUB_DEFAULT_LANGUAGE", "en")?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration for tests and local tools: no delays, default rates.
    #[must_use]
    pub fn for_testing(admin_password: &str) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            admin: AdminCredentials {
                username: "TRIBALARTHUB".to_string(),
                password: SecretString::from(admin_password),
            },
            payment_delay: Duration::ZERO,
            save_delay: Duration::ZERO,
            gst: TaxRate::GST,
            media_capacity: 64,
            default_language: Language::En,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` flag.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a password is long enough, not a placeholder, and not a
/// single repeated pattern.
fn validate_password_strength(password: &str, var_name: &str) -> Result<(), ConfigError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    let lower = password.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(password);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}

/// Load and validate a password from environment.
fn get_validated_password(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_password_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_password_placeholder_rejected() {
        let result = validate_password_strength("changeme123", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_password_too_short() {
        assert!(validate_password_strength("T@1b", "TEST_VAR").is_err());
    }

    #[test]
    fn test_password_low_entropy() {
        let result = validate_password_strength("aaaaaaaaaaaa", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_demo_password_accepted() {
        assert!(validate_password_strength("Tribal@123", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::for_testing("Tribal@123");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
        assert!(!config.secure_cookies());
    }

    #[test]
    fn test_admin_debug_redacts_password() {
        let config = StorefrontConfig::for_testing("Super$ecretPw9");
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("TRIBALARTHUB"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("Super$ecretPw9"));
    }
}
