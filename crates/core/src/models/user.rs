//! Users: customers, artisans and staff.

use serde::{Deserialize, Serialize};

use crate::types::{Email, MobileNumber, UserId, UserRole};

/// Avatar shown for artisans who registered without a photo.
pub const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=1000&auto=format&fit=crop";

/// A marketplace user.
///
/// Only the fields relevant to the role are filled in: artisans carry a
/// shop name, location, contact and art type; staff carry an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub shop_name: Option<String>,
    /// Postal address or region.
    pub location: Option<String>,
    pub contact: Option<MobileNumber>,
    /// Comma-separated crafts, e.g. `"Dhokra Art, Terracotta"`.
    pub art_type: Option<String>,
    pub email: Option<Email>,
}

impl User {
    /// A bare user with only id, name and role set.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            avatar: None,
            shop_name: None,
            location: None,
            contact: None,
            art_type: None,
            email: None,
        }
    }

    /// The demo customer used by the one-click customer login.
    #[must_use]
    pub fn demo_customer() -> Self {
        Self::new(UserId::new("c1"), "Priya Sharma", UserRole::Customer)
    }

    /// First letter of the name, for avatar placeholders.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Registration data for a new artisan.
#[derive(Debug, Clone)]
pub struct NewProducer {
    pub name: String,
    pub address: String,
    pub contact: MobileNumber,
    /// Crafts picked from the option list.
    pub art_types: Vec<String>,
    /// Free-text craft not in the list.
    pub other_art_type: Option<String>,
    pub photo: Option<String>,
}

impl NewProducer {
    /// All crafts joined with `", "`, the free-text one last.
    #[must_use]
    pub fn art_type(&self) -> String {
        let mut all: Vec<&str> = self
            .art_types
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        if let Some(other) = self.other_art_type.as_deref().map(str::trim)
            && !other.is_empty()
        {
            all.push(other);
        }
        all.join(", ")
    }

    /// Shop name derived from the artisan's name and first craft.
    #[must_use]
    pub fn shop_name(&self) -> String {
        let art_type = self.art_type();
        let first = art_type.split(',').next().unwrap_or_default().trim();
        format!("{}'s {first} Studio", self.name.trim())
    }
}

/// Registration data for a staff account.
#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub name: String,
    pub username: String,
    /// Already-hashed password; the core never sees plaintext at rest.
    pub password_hash: String,
    pub email: Option<Email>,
    pub contact: Option<MobileNumber>,
}

/// A password-authenticated account: the host admin or a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAccount {
    pub user: User,
    pub username: String,
    pub password_hash: String,
    /// Team members start unverified; the admin account is always verified.
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(types: &[&str], other: Option<&str>) -> NewProducer {
        NewProducer {
            name: "Meera Bai".to_string(),
            address: "Bhopal, Madhya Pradesh".to_string(),
            contact: MobileNumber::parse("9123456780").unwrap_or_else(|e| panic!("{e}")),
            art_types: types.iter().map(ToString::to_string).collect(),
            other_art_type: other.map(ToString::to_string),
            photo: None,
        }
    }

    #[test]
    fn test_art_type_joins_selected_and_other() {
        let reg = registration(&["Pottery", "Weaving"], Some("  Gond Art "));
        assert_eq!(reg.art_type(), "Pottery, Weaving, Gond Art");
    }

    #[test]
    fn test_shop_name_uses_first_art_type() {
        let reg = registration(&["Terracotta", "Jewelry"], None);
        assert_eq!(reg.shop_name(), "Meera Bai's Terracotta Studio");
    }

    #[test]
    fn test_blank_other_is_ignored() {
        let reg = registration(&["Pottery"], Some("   "));
        assert_eq!(reg.art_type(), "Pottery");
    }

    #[test]
    fn test_initial() {
        assert_eq!(User::demo_customer().initial(), "P");
    }
}
