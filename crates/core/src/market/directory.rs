//! Artisan directory and staff roster.

use crate::models::{NewProducer, NewTeamMember, StaffAccount, User, user::DEFAULT_AVATAR};
use crate::types::{MobileNumber, UserId, UserRole};

use super::MarketError;

/// Checks a plaintext password against a stored hash.
///
/// The storefront implements this with Argon2; tests use a plaintext
/// comparison.
pub trait PasswordVerifier {
    /// Whether `password` matches `password_hash`.
    fn verify(&self, password: &str, password_hash: &str) -> bool;
}

/// Registered artisans and staff accounts.
#[derive(Debug, Clone)]
pub struct Directory {
    /// Newest registration first.
    artisans: Vec<User>,
    /// The host admin account.
    admin: StaffAccount,
    /// In registration order.
    team: Vec<StaffAccount>,
}

impl Directory {
    /// A directory with the given host account and seed artisans.
    #[must_use]
    pub const fn new(admin: StaffAccount, artisans: Vec<User>) -> Self {
        Self {
            artisans,
            admin,
            team: Vec::new(),
        }
    }

    /// Every artisan, newest first.
    #[must_use]
    pub fn artisans(&self) -> &[User] {
        &self.artisans
    }

    /// Look up an artisan by id.
    #[must_use]
    pub fn artisan(&self, id: &UserId) -> Option<&User> {
        self.artisans.iter().find(|a| &a.id == id)
    }

    /// Look up an artisan by registered mobile number.
    #[must_use]
    pub fn find_artisan_by_contact(&self, mobile: &MobileNumber) -> Option<&User> {
        self.artisans
            .iter()
            .find(|a| a.contact.as_ref() == Some(mobile))
    }

    /// Register a new artisan and put them at the front of the directory.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::ContactTaken`] if the mobile number already
    /// belongs to an artisan, or [`MarketError::Invalid`] when a required
    /// field is blank.
    pub fn register_producer(&mut self, registration: NewProducer) -> Result<User, MarketError> {
        if registration.name.trim().is_empty() || registration.address.trim().is_empty() {
            return Err(MarketError::Invalid("fillFieldsErr"));
        }
        let art_type = registration.art_type();
        if art_type.is_empty() {
            return Err(MarketError::Invalid("fillFieldsErr"));
        }
        if self.find_artisan_by_contact(&registration.contact).is_some() {
            return Err(MarketError::ContactTaken);
        }

        let mut user = User::new(
            UserId::generate(),
            registration.name.trim(),
            UserRole::Producer,
        );
        user.shop_name = Some(registration.shop_name());
        user.location = Some(registration.address.trim().to_string());
        user.avatar = Some(
            registration
                .photo
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
        );
        user.art_type = Some(art_type);
        user.contact = Some(registration.contact);

        self.artisans.insert(0, user.clone());
        Ok(user)
    }

    /// Team members in registration order.
    pub fn team_members(&self) -> impl Iterator<Item = &StaffAccount> {
        self.team.iter()
    }

    /// Team members awaiting verification.
    #[must_use]
    pub fn pending_team_members(&self) -> usize {
        self.team.iter().filter(|m| !m.verified).count()
    }

    /// Register an unverified team member.
    ///
    /// The role is always `team_member` regardless of what was requested.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::UsernameTaken`] if the username is already in
    /// use (including the admin's), or [`MarketError::Invalid`] when the
    /// username or password is blank.
    pub fn register_team_member(
        &mut self,
        registration: NewTeamMember,
    ) -> Result<User, MarketError> {
        let username = registration.username.trim().to_string();
        if username.is_empty() || registration.password_hash.is_empty() {
            return Err(MarketError::Invalid("fillFieldsErr"));
        }
        if self.find_staff(&username).is_some() {
            return Err(MarketError::UsernameTaken);
        }

        let name = match registration.name.trim() {
            "" => "Team Member",
            name => name,
        };
        let generated = UserId::generate();
        let suffix = generated
            .as_str()
            .strip_prefix(UserId::PREFIX)
            .unwrap_or_default();
        let mut user = User::new(
            UserId::new(format!("tm-{suffix}")),
            name,
            UserRole::TeamMember,
        );
        user.email = registration.email;
        user.contact = registration.contact;

        self.team.push(StaffAccount {
            user: user.clone(),
            username,
            password_hash: registration.password_hash,
            verified: false,
        });
        Ok(user)
    }

    /// Mark a team member as verified so they can sign in.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::UserNotFound`] for an unknown id.
    pub fn verify_team_member(&mut self, id: &UserId) -> Result<(), MarketError> {
        let member = self
            .team
            .iter_mut()
            .find(|m| &m.user.id == id)
            .ok_or_else(|| MarketError::UserNotFound(id.clone()))?;
        member.verified = true;
        Ok(())
    }

    /// Look up a staff account (admin or team member) by username.
    #[must_use]
    pub fn find_staff(&self, username: &str) -> Option<&StaffAccount> {
        std::iter::once(&self.admin)
            .chain(self.team.iter())
            .find(|s| s.username == username)
    }

    /// Authenticate a staff account by username and password.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidCredentials`] when the username is
    /// unknown or the password does not match, and
    /// [`MarketError::AccountPending`] for a correct password on an account
    /// the admin has not verified yet.
    pub fn login_with_password(
        &self,
        username: &str,
        password: &str,
        verifier: &impl PasswordVerifier,
    ) -> Result<User, MarketError> {
        let account = self
            .find_staff(username.trim())
            .filter(|s| verifier.verify(password, &s.password_hash))
            .ok_or(MarketError::InvalidCredentials)?;
        if !account.verified {
            return Err(MarketError::AccountPending);
        }
        Ok(account.user.clone())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Stores passwords as-is; only for tests.
    pub(crate) struct PlainVerifier;

    impl PasswordVerifier for PlainVerifier {
        fn verify(&self, password: &str, password_hash: &str) -> bool {
            password == password_hash
        }
    }

    pub(crate) fn admin_account() -> StaffAccount {
        StaffAccount {
            user: User::new(UserId::new("host1"), "Super Admin", UserRole::Admin),
            username: "TRIBALARTHUB".to_string(),
            password_hash: "Tribal@123".to_string(),
            verified: true,
        }
    }

    fn mobile(s: &str) -> MobileNumber {
        MobileNumber::parse(s).unwrap_or_else(|e| panic!("{e}"))
    }

    fn producer(contact: &str) -> NewProducer {
        NewProducer {
            name: "Kamla Devi".to_string(),
            address: "Dindori, Madhya Pradesh".to_string(),
            contact: mobile(contact),
            art_types: vec!["Gond Painting".to_string()],
            other_art_type: None,
            photo: None,
        }
    }

    fn member(username: &str) -> NewTeamMember {
        NewTeamMember {
            name: "Anil".to_string(),
            username: username.to_string(),
            password_hash: "secret-pass".to_string(),
            email: None,
            contact: None,
        }
    }

    #[test]
    fn test_register_producer_prepends_with_shop_name() {
        let mut dir = Directory::new(admin_account(), Vec::new());
        let user = dir
            .register_producer(producer("9000000001"))
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(user.role, UserRole::Producer);
        assert_eq!(user.shop_name.as_deref(), Some("Kamla Devi's Gond Painting Studio"));
        assert_eq!(user.avatar.as_deref(), Some(DEFAULT_AVATAR));
        assert_eq!(dir.artisans().first(), Some(&user));
        assert_eq!(
            dir.find_artisan_by_contact(&mobile("9000000001")).map(|a| &a.id),
            Some(&user.id)
        );
    }

    #[test]
    fn test_register_producer_rejects_duplicate_contact() {
        let mut dir = Directory::new(admin_account(), Vec::new());
        assert!(dir.register_producer(producer("9000000001")).is_ok());
        assert_eq!(
            dir.register_producer(producer("9000000001")),
            Err(MarketError::ContactTaken)
        );
        assert_eq!(dir.artisans().len(), 1);
    }

    #[test]
    fn test_register_producer_requires_art_type() {
        let mut dir = Directory::new(admin_account(), Vec::new());
        let mut reg = producer("9000000002");
        reg.art_types.clear();
        assert_eq!(
            dir.register_producer(reg),
            Err(MarketError::Invalid("fillFieldsErr"))
        );
    }

    #[test]
    fn test_team_member_needs_verification() {
        let mut dir = Directory::new(admin_account(), Vec::new());
        let user = dir
            .register_team_member(member("anil"))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(user.role, UserRole::TeamMember);
        assert!(user.id.as_str().starts_with("tm-"));
        assert_eq!(dir.pending_team_members(), 1);

        assert_eq!(
            dir.login_with_password("anil", "secret-pass", &PlainVerifier),
            Err(MarketError::AccountPending)
        );

        assert!(dir.verify_team_member(&user.id).is_ok());
        let signed_in = dir
            .login_with_password("anil", "secret-pass", &PlainVerifier)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(signed_in.id, user.id);
    }

    #[test]
    fn test_wrong_password_is_invalid_credentials_even_when_pending() {
        let mut dir = Directory::new(admin_account(), Vec::new());
        assert!(dir.register_team_member(member("anil")).is_ok());
        assert_eq!(
            dir.login_with_password("anil", "nope", &PlainVerifier),
            Err(MarketError::InvalidCredentials)
        );
    }

    #[test]
    fn test_admin_login() {
        let dir = Directory::new(admin_account(), Vec::new());
        let admin = dir
            .login_with_password("TRIBALARTHUB", "Tribal@123", &PlainVerifier)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(
            dir.login_with_password("nobody", "x", &PlainVerifier),
            Err(MarketError::InvalidCredentials)
        );
    }

    #[test]
    fn test_team_member_cannot_take_admin_username() {
        let mut dir = Directory::new(admin_account(), Vec::new());
        assert_eq!(
            dir.register_team_member(member("TRIBALARTHUB")),
            Err(MarketError::UsernameTaken)
        );
    }

    #[test]
    fn test_verify_unknown_member() {
        let mut dir = Directory::new(admin_account(), Vec::new());
        assert!(matches!(
            dir.verify_team_member(&UserId::new("tm-missing")),
            Err(MarketError::UserNotFound(_))
        ));
    }
}
