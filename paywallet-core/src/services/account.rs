//! Account service - onboarding, profile management, user lookup

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{AccountLimits, User};
use crate::ports::Repository;

/// Risk score assigned to freshly registered accounts
const NEW_USER_RISK_SCORE: u8 = 30;

/// Maximum recipients returned by a directory search
const SEARCH_LIMIT: usize = 5;

/// Registration input collected during onboarding
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub device_info: Option<String>,
}

/// Account service for onboarding and profile management
pub struct AccountService {
    store: Arc<dyn Repository>,
    welcome_bonus: Decimal,
    default_limits: AccountLimits,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn Repository>,
        welcome_bonus: Decimal,
        default_limits: AccountLimits,
    ) -> Self {
        Self {
            store,
            welcome_bonus,
            default_limits,
        }
    }

    /// Create a wallet account for a newly authenticated identity
    ///
    /// Validates every field, stores handles lowercased, credits the welcome
    /// bonus and applies the configured starter limits. Duplicate usernames
    /// and emails surface as hard errors from the store.
    pub fn register(&self, req: RegisterRequest) -> Result<User> {
        User::validate_username(&req.username)?;
        User::validate_display_name(&req.display_name)?;
        User::validate_email(&req.email)?;

        let phone = req
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());
        if let Some(p) = phone {
            User::validate_phone_number(p)?;
        }

        let mut user = User::new(
            Uuid::new_v4(),
            &req.username,
            req.display_name.trim(),
            &req.email,
        );
        user.phone_number = phone.map(str::to_string);
        user.wallet_balance = self.welcome_bonus;
        user.risk_score = NEW_USER_RISK_SCORE;
        user.account_limits = self.default_limits.clone();
        // Demo-grade admin detection carried over from the original gate
        user.is_admin = user.email.contains("admin");
        user.last_login_at = Some(Utc::now());
        user.login_count = 1;
        user.device_info = Some(req.device_info.unwrap_or_else(|| "CLI".to_string()));

        self.store.add_user(&user)
    }

    /// Whether a username is still free (advisory; `register` re-checks)
    pub fn check_username(&self, username: &str) -> Result<bool> {
        User::validate_username(username)?;
        self.store.is_username_available(username)
    }

    /// Whether an email is still free (advisory; `register` re-checks)
    pub fn check_email(&self, email: &str) -> Result<bool> {
        User::validate_email(email)?;
        self.store.is_email_available(email)
    }

    /// Update display name and/or phone number
    pub fn update_profile(
        &self,
        user_id: Uuid,
        display_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Result<User> {
        let mut user = self
            .store
            .user_by_id(user_id)?
            .ok_or(crate::domain::result::Error::UserNotFound)?;

        if let Some(name) = display_name {
            User::validate_display_name(name)?;
            user.display_name = name.trim().to_string();
        }
        if let Some(phone) = phone_number {
            let trimmed = phone.trim();
            if trimmed.is_empty() {
                user.phone_number = None;
            } else {
                User::validate_phone_number(trimmed)?;
                user.phone_number = Some(trimmed.to_string());
            }
        }

        self.store.update_user(&user)
    }

    /// Resolve a user by username, falling back to email
    pub fn user_by_handle(&self, handle: &str) -> Result<Option<User>> {
        if let Some(user) = self.store.user_by_username(handle)? {
            return Ok(Some(user));
        }
        self.store.user_by_email(handle)
    }

    pub fn user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        self.store.user_by_id(user_id)
    }

    pub fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.store.user_by_email(email)
    }

    /// Bump login bookkeeping for a returning user
    pub fn record_login(&self, user_id: Uuid) -> Result<User> {
        self.store.record_login(user_id)
    }

    /// Recipient directory search over username, display name and email
    ///
    /// Excludes the searching user and inactive accounts; capped at five
    /// results like the recipient picker.
    pub fn search(&self, query: &str, exclude: Option<Uuid>) -> Result<Vec<User>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let users = self.store.users()?;
        Ok(users
            .into_iter()
            .filter(|u| Some(u.id) != exclude && u.is_active)
            .filter(|u| {
                u.username.to_lowercase().contains(&query)
                    || u.display_name.to_lowercase().contains(&query)
                    || u.email.to_lowercase().contains(&query)
            })
            .take(SEARCH_LIMIT)
            .collect())
    }

    /// All users (directory listing)
    pub fn users(&self) -> Result<Vec<User>> {
        self.store.users()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::domain::result::Error;
    use crate::domain::KycStatus;

    fn service() -> AccountService {
        AccountService::new(
            Arc::new(MemoryStore::seeded()),
            Decimal::new(100, 0),
            AccountLimits::default(),
        )
    }

    fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            display_name: "Test User".to_string(),
            email: email.to_string(),
            phone_number: None,
            device_info: None,
        }
    }

    #[test]
    fn test_register_applies_welcome_bonus_and_defaults() {
        let svc = service();
        let user = svc
            .register(register_request("newuser", "NewUser@Example.com"))
            .unwrap();

        assert_eq!(user.wallet_balance, Decimal::new(100, 0));
        assert_eq!(user.risk_score, NEW_USER_RISK_SCORE);
        assert_eq!(user.kyc_status, KycStatus::NotStarted);
        assert_eq!(user.email, "newuser@example.com");
        assert_eq!(user.login_count, 1);
        assert!(!user.is_admin);
    }

    #[test]
    fn test_register_rejects_bad_fields() {
        let svc = service();

        let mut req = register_request("ab", "ok@example.com");
        assert!(matches!(svc.register(req).unwrap_err(), Error::Validation(_)));

        req = register_request("validname", "not-an-email");
        assert!(matches!(svc.register(req).unwrap_err(), Error::Validation(_)));

        req = register_request("validname", "ok@example.com");
        req.phone_number = Some("call me maybe".to_string());
        assert!(matches!(svc.register(req).unwrap_err(), Error::Validation(_)));
    }

    #[test]
    fn test_register_duplicate_username_leaves_state_unchanged() {
        let svc = service();
        let before = svc.users().unwrap().len();

        let err = svc
            .register(register_request("johndoe", "someone-else@example.com"))
            .unwrap_err();
        assert!(matches!(err, Error::UsernameTaken));
        assert_eq!(svc.users().unwrap().len(), before);
    }

    #[test]
    fn test_register_email_with_admin_grants_admin() {
        let svc = service();
        let user = svc
            .register(register_request("opslead", "admin2@example.com"))
            .unwrap();
        assert!(user.is_admin);
    }

    #[test]
    fn test_search_excludes_self_and_caps_results() {
        let svc = service();
        let john = svc.user_by_handle("johndoe").unwrap().unwrap();

        let results = svc.search("o", Some(john.id)).unwrap();
        assert!(results.len() <= 5);
        assert!(results.iter().all(|u| u.id != john.id));
        assert!(results.iter().all(|u| u.is_active));
    }

    #[test]
    fn test_update_profile() {
        let svc = service();
        let john = svc.user_by_handle("johndoe").unwrap().unwrap();

        let updated = svc
            .update_profile(john.id, Some("Johnny Doe"), Some(""))
            .unwrap();
        assert_eq!(updated.display_name, "Johnny Doe");
        assert!(updated.phone_number.is_none());
    }
}
