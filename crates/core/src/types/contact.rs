//! Contact details: mobile numbers and email addresses.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing contact details.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A mobile number must be exactly ten digits once formatting is stripped.
    #[error("mobile number must have exactly 10 digits (got {0})")]
    MobileLength(usize),
    /// The email has no @ or an empty side around it.
    #[error("invalid email address")]
    InvalidEmail,
}

/// A ten-digit Indian mobile number.
///
/// Spaces, dashes and other formatting are stripped before validation, so
/// `"98765 43210"` and `"9876543210"` parse to the same value. A leading
/// country code is not accepted.
///
/// ```
/// use tribal_hub_core::MobileNumber;
///
/// assert!(MobileNumber::parse("98765-43210").is_ok());
/// assert!(MobileNumber::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Required number of digits.
    pub const DIGITS: usize = 10;

    /// Parse a mobile number, ignoring non-digit characters.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MobileLength`] unless exactly ten digits remain.
    pub fn parse(s: &str) -> Result<Self, ContactError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.len() == Self::DIGITS {
            Ok(Self(digits))
        } else {
            Err(ContactError::MobileLength(digits.len()))
        }
    }

    /// The ten digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number with all but the last four digits hidden.
    #[must_use]
    pub fn masked(&self) -> String {
        let tail = self.0.get(Self::DIGITS - 4..).unwrap_or_default();
        format!("******{tail}")
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address with a minimal structural check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an email: trimmed, exactly one `@`, non-empty on both sides.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InvalidEmail`] if the structure is wrong.
    pub fn parse(s: &str) -> Result<Self, ContactError> {
        let s = s.trim();
        match s.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(s.to_owned()))
            }
            _ => Err(ContactError::InvalidEmail),
        }
    }

    /// The address as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_strips_formatting() {
        let mobile = MobileNumber::parse("98765 43210").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(mobile.as_str(), "9876543210");
    }

    #[test]
    fn test_mobile_wrong_length() {
        assert_eq!(
            MobileNumber::parse("987654321"),
            Err(ContactError::MobileLength(9))
        );
        assert_eq!(
            MobileNumber::parse("+91 9876543210"),
            Err(ContactError::MobileLength(12))
        );
    }

    #[test]
    fn test_mobile_masked() {
        let mobile = MobileNumber::parse("9876543210").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(mobile.masked(), "******3210");
    }

    #[test]
    fn test_email_parse() {
        assert!(Email::parse("sarah.j@tribalheritage.com").is_ok());
        assert_eq!(Email::parse("no-at"), Err(ContactError::InvalidEmail));
        assert_eq!(Email::parse("@x.com"), Err(ContactError::InvalidEmail));
        assert_eq!(Email::parse("a@"), Err(ContactError::InvalidEmail));
        assert_eq!(Email::parse("a@b@c"), Err(ContactError::InvalidEmail));
    }
}
