//! Host payout account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bank account the marketplace host is paid into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutAccount {
    pub account_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc: String,
    /// UPI virtual payment address, optional.
    pub upi: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PayoutAccount {
    /// Account number with all but the last four digits hidden.
    #[must_use]
    pub fn masked_account_number(&self) -> String {
        let chars: Vec<char> = self.account_number.chars().collect();
        let keep = chars.len().min(4);
        let hidden = chars.len() - keep;
        let tail: String = chars.iter().skip(hidden).collect();
        format!("{}{tail}", "•".repeat(hidden))
    }

    /// Check the required fields, normalizing the IFSC to upper case.
    ///
    /// # Errors
    ///
    /// Returns the translation key describing the first problem found.
    pub fn validate(&mut self) -> Result<(), &'static str> {
        self.account_name = self.account_name.trim().to_string();
        self.bank_name = self.bank_name.trim().to_string();
        self.account_number = self.account_number.trim().to_string();
        self.ifsc = self.ifsc.trim().to_uppercase();
        self.upi = self
            .upi
            .take()
            .map(|upi| upi.trim().to_string())
            .filter(|upi| !upi.is_empty());

        if self.account_name.is_empty()
            || self.bank_name.is_empty()
            || self.account_number.is_empty()
            || self.ifsc.is_empty()
        {
            return Err("fillFieldsErr");
        }
        if !(9..=18).contains(&self.account_number.len())
            || !self.account_number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err("invalidAccountNumber");
        }
        if !is_valid_ifsc(&self.ifsc) {
            return Err("invalidIfsc");
        }
        if self.upi.as_deref().is_some_and(|upi| !upi.contains('@')) {
            return Err("invalidVpa");
        }
        Ok(())
    }
}

/// Whether `code` looks like an IFSC: four letters, a zero, then six
/// letters or digits.
#[must_use]
pub fn is_valid_ifsc(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 11
        && bytes[..4].iter().all(u8::is_ascii_uppercase)
        && bytes[4] == b'0'
        && bytes[5..].iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_account_number() {
        let account = PayoutAccount {
            account_number: "001234567890".to_string(),
            ..PayoutAccount::default()
        };
        assert_eq!(account.masked_account_number(), "••••••••7890");
    }

    #[test]
    fn test_masked_short_number_is_visible() {
        let account = PayoutAccount {
            account_number: "123".to_string(),
            ..PayoutAccount::default()
        };
        assert_eq!(account.masked_account_number(), "123");
    }

    fn account() -> PayoutAccount {
        PayoutAccount {
            account_name: " Tribal Art Hub ".to_string(),
            bank_name: "State Bank of India".to_string(),
            account_number: "001234567890".to_string(),
            ifsc: "sbin0001234".to_string(),
            upi: Some("  ".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn test_validate_normalizes() {
        let mut account = account();
        assert_eq!(account.validate(), Ok(()));
        assert_eq!(account.ifsc, "SBIN0001234");
        assert_eq!(account.account_name, "Tribal Art Hub");
        assert_eq!(account.upi, None);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut missing = PayoutAccount {
            bank_name: String::new(),
            ..account()
        };
        assert_eq!(missing.validate(), Err("fillFieldsErr"));

        let mut bad_ifsc = PayoutAccount {
            ifsc: "SBIN1001234".to_string(),
            ..account()
        };
        assert_eq!(bad_ifsc.validate(), Err("invalidIfsc"));

        let mut bad_number = PayoutAccount {
            account_number: "12ab".to_string(),
            ..account()
        };
        assert_eq!(bad_number.validate(), Err("invalidAccountNumber"));

        let mut bad_vpa = PayoutAccount {
            upi: Some("tribalhub".to_string()),
            ..account()
        };
        assert_eq!(bad_vpa.validate(), Err("invalidVpa"));
    }

    #[test]
    fn test_ifsc_shape() {
        assert!(is_valid_ifsc("HDFC0ABC123"));
        assert!(!is_valid_ifsc("HDFC0ABC12"));
        assert!(!is_valid_ifsc("hdfc0abc123"));
    }
}
