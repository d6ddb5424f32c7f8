//! Admin service - portal login and account moderation

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::AdminCredentials;
use crate::domain::result::{Error, Result};
use crate::domain::{AccountLimits, AdminAction, KycStatus, User};
use crate::ports::Repository;

/// Admin service for the management portal
pub struct AdminService {
    store: Arc<dyn Repository>,
    credentials: AdminCredentials,
}

impl AdminService {
    pub fn new(store: Arc<dyn Repository>, credentials: AdminCredentials) -> Self {
        Self { store, credentials }
    }

    /// Authenticate against the configured demo credentials
    ///
    /// A plaintext compare against a single configured pair. This is a UI
    /// gate for the demo, not a security boundary. On success the admin
    /// account is looked up (or created if the store lacks one) and its
    /// login bookkeeping is bumped.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(Error::validation("Please enter both email and password"));
        }

        if !email.eq_ignore_ascii_case(&self.credentials.email)
            || password != self.credentials.password
        {
            return Err(Error::InvalidCredentials);
        }

        match self.store.user_by_email(&self.credentials.email)? {
            Some(user) => self.store.record_login(user.id),
            None => {
                let mut admin = User::new(
                    Uuid::new_v4(),
                    "admin",
                    "System Administrator",
                    &self.credentials.email,
                );
                admin.kyc_status = KycStatus::Verified;
                admin.is_admin = true;
                admin.risk_score = 0;
                admin.login_count = 1;
                admin.last_login_at = Some(chrono::Utc::now());
                admin.account_limits = AccountLimits::new(
                    Decimal::new(999_999, 0),
                    Decimal::new(999_999, 0),
                    Decimal::new(999_999, 0),
                );
                self.store.add_user(&admin)
            }
        }
    }

    /// Suspend an account. Admins are exempt: returns false, records nothing.
    pub fn suspend(&self, user_id: Uuid, reason: &str, admin: &User) -> Result<bool> {
        let reason = if reason.trim().is_empty() {
            "No reason provided"
        } else {
            reason.trim()
        };
        self.store
            .suspend_user(user_id, reason, admin.id, &admin.display_name)
    }

    /// Lift a suspension. Same admin exemption as `suspend`.
    pub fn activate(&self, user_id: Uuid, admin: &User) -> Result<bool> {
        self.store
            .activate_user(user_id, admin.id, &admin.display_name)
    }

    /// Replace a user's transaction limits
    pub fn update_limits(
        &self,
        user_id: Uuid,
        new_limits: AccountLimits,
        admin: &User,
    ) -> Result<bool> {
        self.store
            .update_limits(user_id, &new_limits, admin.id, &admin.display_name)
    }

    /// The audit feed, newest first, optionally capped
    pub fn actions(&self, limit: Option<usize>) -> Result<Vec<AdminAction>> {
        let mut actions = self.store.admin_actions()?;
        if let Some(limit) = limit {
            actions.truncate(limit);
        }
        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed::{ADMIN_ID, MIKE_ID};
    use crate::adapters::MemoryStore;

    fn credentials() -> AdminCredentials {
        AdminCredentials {
            email: "admin@paywallet.com".to_string(),
            password: "admin123".to_string(),
        }
    }

    fn setup() -> (Arc<MemoryStore>, AdminService) {
        let store = Arc::new(MemoryStore::seeded());
        let service = AdminService::new(store.clone(), credentials());
        (store, service)
    }

    fn uid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    #[test]
    fn test_login_with_valid_credentials() {
        let (store, service) = setup();
        let before = store.user_by_id(uid(ADMIN_ID)).unwrap().unwrap();

        let admin = service.login("admin@paywallet.com", "admin123").unwrap();
        assert!(admin.is_admin);
        assert_eq!(admin.login_count, before.login_count + 1);
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let (_, service) = setup();
        let err = service.login("admin@paywallet.com", "hunter2").unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let (_, service) = setup();
        let err = service.login("admin@paywallet.com", "").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_login_creates_admin_when_store_lacks_one() {
        let store = Arc::new(MemoryStore::new());
        let service = AdminService::new(store.clone(), credentials());

        let admin = service.login("admin@paywallet.com", "admin123").unwrap();
        assert!(admin.is_admin);
        assert_eq!(admin.display_name, "System Administrator");
        assert_eq!(store.users().unwrap().len(), 1);
    }

    #[test]
    fn test_suspend_and_activate_through_service() {
        let (store, service) = setup();
        let admin = service.login("admin@paywallet.com", "admin123").unwrap();

        assert!(service.suspend(uid(MIKE_ID), "", &admin).unwrap());
        let mike = store.user_by_id(uid(MIKE_ID)).unwrap().unwrap();
        assert_eq!(mike.suspension_reason.as_deref(), Some("No reason provided"));

        assert!(service.activate(uid(MIKE_ID), &admin).unwrap());
        assert!(store.user_by_id(uid(MIKE_ID)).unwrap().unwrap().is_active);
    }

    #[test]
    fn test_actions_limit() {
        let (_, service) = setup();
        let actions = service.actions(Some(2)).unwrap();
        assert_eq!(actions.len(), 2);
        // Newest first
        assert!(actions[0].created_at >= actions[1].created_at);
    }
}
