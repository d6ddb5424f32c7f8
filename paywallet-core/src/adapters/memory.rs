//! In-memory store adapter
//!
//! Process-wide mutable state behind a single mutex: plain vectors with
//! linear scans, discarded when the process exits. Composite operations
//! (transfer, KYC review, suspension) run start to finish under one lock
//! guard, so no partial state is ever observable.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::adapters::seed;
use crate::domain::result::{Error, Result};
use crate::domain::{
    AccountLimits, AdminAction, AdminActionKind, DocumentStatus, DocumentType, KycDocument,
    KycStatus, Transaction, User, WalletTransaction,
};
use crate::ports::Repository;

#[derive(Debug, Default)]
struct StoreInner {
    users: Vec<User>,
    transactions: Vec<Transaction>,
    wallet_transactions: Vec<WalletTransaction>,
    kyc_documents: Vec<KycDocument>,
    admin_actions: Vec<AdminAction>,
}

/// Volatile store backing the whole application
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Create a store populated with the demo fixture dataset
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().expect("fresh store lock");
            inner.users = seed::seed_users();
            inner.transactions = seed::seed_transactions();
            inner.wallet_transactions = seed::seed_wallet_transactions();
            inner.kyc_documents = seed::seed_kyc_documents();
            inner.admin_actions = seed::seed_admin_actions();
        }
        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|e| Error::store(format!("lock poisoned: {}", e)))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MemoryStore {
    // === Users ===

    fn add_user(&self, user: &User) -> Result<User> {
        let mut inner = self.lock()?;

        let username = user.username.to_lowercase();
        let email = user.email.to_lowercase();
        if inner
            .users
            .iter()
            .any(|u| u.username.to_lowercase() == username)
        {
            return Err(Error::UsernameTaken);
        }
        if inner.users.iter().any(|u| u.email.to_lowercase() == email) {
            return Err(Error::EmailTaken);
        }

        inner.users.push(user.clone());
        Ok(user.clone())
    }

    fn users(&self) -> Result<Vec<User>> {
        Ok(self.lock()?.users.clone())
    }

    fn user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.lock()?.users.iter().find(|u| u.id == id).cloned())
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>> {
        let username = username.to_lowercase();
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|u| u.username.to_lowercase() == username)
            .cloned())
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_lowercase();
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|u| u.email.to_lowercase() == email)
            .cloned())
    }

    fn update_user(&self, user: &User) -> Result<User> {
        let mut inner = self.lock()?;
        let slot = inner
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(Error::UserNotFound)?;
        let mut updated = user.clone();
        updated.updated_at = Utc::now();
        *slot = updated.clone();
        Ok(updated)
    }

    fn is_username_available(&self, username: &str) -> Result<bool> {
        let username = username.to_lowercase();
        Ok(!self
            .lock()?
            .users
            .iter()
            .any(|u| u.username.to_lowercase() == username))
    }

    fn is_email_available(&self, email: &str) -> Result<bool> {
        let email = email.to_lowercase();
        Ok(!self
            .lock()?
            .users
            .iter()
            .any(|u| u.email.to_lowercase() == email))
    }

    fn adjust_balance(&self, user_id: Uuid, delta: Decimal) -> Result<User> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(Error::UserNotFound)?;

        let new_balance = user.wallet_balance + delta;
        if new_balance < Decimal::ZERO {
            return Err(Error::InsufficientBalance);
        }
        user.wallet_balance = new_balance;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    fn record_login(&self, user_id: Uuid) -> Result<User> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(Error::UserNotFound)?;
        user.last_login_at = Some(Utc::now());
        user.login_count += 1;
        Ok(user.clone())
    }

    // === Transactions ===

    fn add_transaction(&self, tx: &Transaction) -> Result<()> {
        self.lock()?.transactions.push(tx.clone());
        Ok(())
    }

    fn transactions(&self) -> Result<Vec<Transaction>> {
        let mut txs = self.lock()?.transactions.clone();
        txs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(txs)
    }

    fn transactions_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        let mut txs: Vec<Transaction> = self
            .lock()?
            .transactions
            .iter()
            .filter(|tx| tx.involves(user_id))
            .cloned()
            .collect();
        txs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(txs)
    }

    // === Wallet transactions ===

    fn add_wallet_transaction(&self, wt: &WalletTransaction) -> Result<()> {
        self.lock()?.wallet_transactions.push(wt.clone());
        Ok(())
    }

    fn wallet_transactions(&self) -> Result<Vec<WalletTransaction>> {
        let mut wts = self.lock()?.wallet_transactions.clone();
        wts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(wts)
    }

    fn wallet_transactions_for_user(&self, user_id: Uuid) -> Result<Vec<WalletTransaction>> {
        let mut wts: Vec<WalletTransaction> = self
            .lock()?
            .wallet_transactions
            .iter()
            .filter(|wt| wt.user_id == user_id)
            .cloned()
            .collect();
        wts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(wts)
    }

    fn wallet_transaction_by_fingerprint(
        &self,
        fingerprint: &str,
    ) -> Result<Option<WalletTransaction>> {
        Ok(self
            .lock()?
            .wallet_transactions
            .iter()
            .find(|wt| wt.fingerprint().as_deref() == Some(fingerprint))
            .cloned())
    }

    // === KYC documents ===

    fn kyc_documents(&self) -> Result<Vec<KycDocument>> {
        let mut docs = self.lock()?.kyc_documents.clone();
        docs.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(docs)
    }

    fn kyc_documents_for_user(&self, user_id: Uuid) -> Result<Vec<KycDocument>> {
        let mut docs: Vec<KycDocument> = self
            .lock()?
            .kyc_documents
            .iter()
            .filter(|doc| doc.user_id == user_id)
            .cloned()
            .collect();
        docs.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(docs)
    }

    // === Admin actions ===

    fn admin_actions(&self) -> Result<Vec<AdminAction>> {
        let mut actions = self.lock()?.admin_actions.clone();
        actions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(actions)
    }

    // === Composite operations ===

    fn execute_transfer(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        amount: Decimal,
        description: &str,
    ) -> Result<Transaction> {
        if sender_id == receiver_id {
            return Err(Error::SelfTransfer);
        }

        let mut inner = self.lock()?;

        let sender = inner
            .users
            .iter()
            .find(|u| u.id == sender_id)
            .cloned()
            .ok_or(Error::UserNotFound)?;
        let receiver = inner
            .users
            .iter()
            .find(|u| u.id == receiver_id)
            .cloned()
            .ok_or(Error::UserNotFound)?;

        if sender.wallet_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        if !sender.is_active || !receiver.is_active {
            return Err(Error::AccountInactive);
        }

        let tx = Transaction::transfer(&sender, &receiver, amount, description);
        inner.transactions.push(tx.clone());

        let now = Utc::now();
        for user in inner.users.iter_mut() {
            if user.id == sender_id {
                user.wallet_balance -= amount;
                user.updated_at = now;
            } else if user.id == receiver_id {
                user.wallet_balance += amount;
                user.updated_at = now;
            }
        }

        Ok(tx)
    }

    fn submit_kyc(
        &self,
        user_id: Uuid,
        document_type: DocumentType,
        document_number: &str,
        document_url: Option<&str>,
    ) -> Result<KycDocument> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(Error::UserNotFound)?;

        let url = document_url.map(str::to_string).unwrap_or_else(|| {
            format!(
                "https://example.com/docs/{}_{}.jpg",
                document_type.as_str(),
                user.username
            )
        });

        let now = Utc::now();
        user.kyc_status = KycStatus::Pending;
        user.kyc_document_type = Some(document_type);
        user.kyc_document_number = Some(document_number.to_string());
        user.kyc_document_url = Some(url.clone());
        user.kyc_submitted_at = Some(now);
        user.kyc_rejection_reason = None;
        user.updated_at = now;

        let mut doc = KycDocument::pending(
            user_id,
            document_type,
            url,
            Some(document_number.to_string()),
        );
        doc.uploaded_at = now;
        inner.kyc_documents.push(doc.clone());

        Ok(doc)
    }

    fn approve_kyc(&self, user_id: Uuid, admin_id: Uuid, admin_name: &str) -> Result<bool> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(Error::UserNotFound)?;

        if user.kyc_status != KycStatus::Pending {
            return Ok(false);
        }

        let now = Utc::now();
        if let Some(u) = inner.users.iter_mut().find(|u| u.id == user_id) {
            u.kyc_status = KycStatus::Verified;
            u.kyc_verified_at = Some(now);
            u.kyc_verified_by = Some(admin_id);
            u.updated_at = now;
        }

        for doc in inner
            .kyc_documents
            .iter_mut()
            .filter(|d| d.user_id == user_id && d.status == DocumentStatus::Pending)
        {
            doc.status = DocumentStatus::Approved;
            doc.reviewed_at = Some(now);
            doc.reviewed_by = Some(admin_id);
        }

        inner.admin_actions.push(AdminAction::new(
            admin_id,
            admin_name,
            AdminActionKind::KycApprove,
            user_id,
            &user.display_name,
            "KYC verification approved",
            json!({ "documentType": user.kyc_document_type }),
        ));

        Ok(true)
    }

    fn reject_kyc(
        &self,
        user_id: Uuid,
        reason: &str,
        admin_id: Uuid,
        admin_name: &str,
    ) -> Result<bool> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(Error::UserNotFound)?;

        if user.kyc_status != KycStatus::Pending {
            return Ok(false);
        }

        let now = Utc::now();
        if let Some(u) = inner.users.iter_mut().find(|u| u.id == user_id) {
            u.kyc_status = KycStatus::Rejected;
            u.kyc_rejection_reason = Some(reason.to_string());
            u.updated_at = now;
        }

        for doc in inner
            .kyc_documents
            .iter_mut()
            .filter(|d| d.user_id == user_id && d.status == DocumentStatus::Pending)
        {
            doc.status = DocumentStatus::Rejected;
            doc.rejection_reason = Some(reason.to_string());
            doc.reviewed_at = Some(now);
            doc.reviewed_by = Some(admin_id);
        }

        inner.admin_actions.push(AdminAction::new(
            admin_id,
            admin_name,
            AdminActionKind::KycReject,
            user_id,
            &user.display_name,
            format!("KYC verification rejected: {}", reason),
            json!({ "reason": reason, "documentType": user.kyc_document_type }),
        ));

        Ok(true)
    }

    fn suspend_user(
        &self,
        user_id: Uuid,
        reason: &str,
        admin_id: Uuid,
        admin_name: &str,
    ) -> Result<bool> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(Error::UserNotFound)?;

        // Admins are exempt from suspension
        if user.is_admin {
            return Ok(false);
        }

        let now = Utc::now();
        if let Some(u) = inner.users.iter_mut().find(|u| u.id == user_id) {
            u.is_suspended = true;
            u.suspension_reason = Some(reason.to_string());
            u.suspended_by = Some(admin_id);
            u.suspended_at = Some(now);
            u.is_active = false;
            u.updated_at = now;
        }

        inner.admin_actions.push(AdminAction::new(
            admin_id,
            admin_name,
            AdminActionKind::UserSuspend,
            user_id,
            &user.display_name,
            format!("User suspended: {}", reason),
            json!({ "reason": reason }),
        ));

        Ok(true)
    }

    fn activate_user(&self, user_id: Uuid, admin_id: Uuid, admin_name: &str) -> Result<bool> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(Error::UserNotFound)?;

        if user.is_admin {
            return Ok(false);
        }

        let now = Utc::now();
        if let Some(u) = inner.users.iter_mut().find(|u| u.id == user_id) {
            u.is_suspended = false;
            u.suspension_reason = None;
            u.suspended_by = None;
            u.suspended_at = None;
            u.is_active = true;
            u.updated_at = now;
        }

        inner.admin_actions.push(AdminAction::new(
            admin_id,
            admin_name,
            AdminActionKind::UserActivate,
            user_id,
            &user.display_name,
            "User account activated",
            json!({}),
        ));

        Ok(true)
    }

    fn update_limits(
        &self,
        user_id: Uuid,
        new_limits: &AccountLimits,
        admin_id: Uuid,
        admin_name: &str,
    ) -> Result<bool> {
        let mut inner = self.lock()?;
        let user = inner
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(Error::UserNotFound)?;

        let old_limits = user.account_limits.clone();
        let now = Utc::now();
        if let Some(u) = inner.users.iter_mut().find(|u| u.id == user_id) {
            u.account_limits = new_limits.clone();
            u.updated_at = now;
        }

        inner.admin_actions.push(AdminAction::new(
            admin_id,
            admin_name,
            AdminActionKind::LimitChange,
            user_id,
            &user.display_name,
            "Transaction limits updated",
            json!({ "oldLimits": old_limits, "newLimits": new_limits }),
        ));

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FundingKind, PaymentMethod};

    fn store_with(users: Vec<User>) -> MemoryStore {
        let store = MemoryStore::new();
        for user in users {
            store.add_user(&user).unwrap();
        }
        store
    }

    fn test_user(username: &str, balance: i64) -> User {
        let mut user = User::new(
            Uuid::new_v4(),
            username,
            format!("{} Display", username),
            format!("{}@example.com", username),
        );
        user.wallet_balance = Decimal::new(balance, 2);
        user
    }

    #[test]
    fn test_add_user_rejects_duplicate_username() {
        let store = store_with(vec![test_user("johndoe", 0)]);

        let mut dup = test_user("JohnDoe", 0);
        dup.email = "different@example.com".to_string();
        let err = store.add_user(&dup).unwrap_err();
        assert!(matches!(err, Error::UsernameTaken));
        assert_eq!(store.users().unwrap().len(), 1);
    }

    #[test]
    fn test_add_user_rejects_duplicate_email() {
        let store = store_with(vec![test_user("johndoe", 0)]);

        let mut dup = test_user("janedoe", 0);
        dup.email = "JOHNDOE@example.com".to_string();
        let err = store.add_user(&dup).unwrap_err();
        assert!(matches!(err, Error::EmailTaken));
    }

    #[test]
    fn test_transfer_conserves_total_balance() {
        let sender = test_user("sender", 12_500);
        let receiver = test_user("receiver", 5_000);
        let (sender_id, receiver_id) = (sender.id, receiver.id);
        let store = store_with(vec![sender, receiver]);

        let tx = store
            .execute_transfer(sender_id, receiver_id, Decimal::new(2_500, 2), "Lunch")
            .unwrap();
        assert_eq!(tx.amount, Decimal::new(2_500, 2));

        let sender_after = store.user_by_id(sender_id).unwrap().unwrap();
        let receiver_after = store.user_by_id(receiver_id).unwrap().unwrap();
        assert_eq!(sender_after.wallet_balance, Decimal::new(10_000, 2));
        assert_eq!(receiver_after.wallet_balance, Decimal::new(7_500, 2));
        assert_eq!(
            sender_after.wallet_balance + receiver_after.wallet_balance,
            Decimal::new(17_500, 2)
        );
    }

    #[test]
    fn test_transfer_insufficient_balance_leaves_state_untouched() {
        let sender = test_user("sender", 5_000); // $50.00
        let receiver = test_user("receiver", 0);
        let (sender_id, receiver_id) = (sender.id, receiver.id);
        let store = store_with(vec![sender, receiver]);

        let err = store
            .execute_transfer(sender_id, receiver_id, Decimal::new(10_000, 2), "Too much")
            .unwrap_err();
        assert!(matches!(err, Error::InsufficientBalance));

        assert!(store.transactions().unwrap().is_empty());
        let sender_after = store.user_by_id(sender_id).unwrap().unwrap();
        assert_eq!(sender_after.wallet_balance, Decimal::new(5_000, 2));
    }

    #[test]
    fn test_transfer_to_inactive_account_fails() {
        let sender = test_user("sender", 10_000);
        let mut receiver = test_user("receiver", 0);
        receiver.is_active = false;
        let (sender_id, receiver_id) = (sender.id, receiver.id);
        let store = store_with(vec![sender, receiver]);

        let err = store
            .execute_transfer(sender_id, receiver_id, Decimal::new(1_000, 2), "Nope")
            .unwrap_err();
        assert!(matches!(err, Error::AccountInactive));
        assert!(store.transactions().unwrap().is_empty());
    }

    #[test]
    fn test_adjust_balance_refuses_negative_result() {
        let user = test_user("johndoe", 5_000);
        let user_id = user.id;
        let store = store_with(vec![user]);

        let err = store
            .adjust_balance(user_id, Decimal::new(-10_000, 2))
            .unwrap_err();
        assert!(matches!(err, Error::InsufficientBalance));
        assert_eq!(
            store.user_by_id(user_id).unwrap().unwrap().wallet_balance,
            Decimal::new(5_000, 2)
        );
    }

    #[test]
    fn test_approve_kyc_requires_pending_state() {
        let user = test_user("johndoe", 0);
        let user_id = user.id;
        let admin_id = Uuid::new_v4();
        let store = store_with(vec![user]);

        // not_started: no-op, nothing logged
        let approved = store.approve_kyc(user_id, admin_id, "Admin User").unwrap();
        assert!(!approved);
        assert!(store.admin_actions().unwrap().is_empty());

        store
            .submit_kyc(user_id, DocumentType::Passport, "P123456789", None)
            .unwrap();
        let approved = store.approve_kyc(user_id, admin_id, "Admin User").unwrap();
        assert!(approved);

        let user = store.user_by_id(user_id).unwrap().unwrap();
        assert_eq!(user.kyc_status, KycStatus::Verified);
        assert_eq!(user.kyc_verified_by, Some(admin_id));

        // Document cascade happened in the same operation
        let docs = store.kyc_documents_for_user(user_id).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].status, DocumentStatus::Approved);
        assert_eq!(docs[0].reviewed_by, Some(admin_id));

        let actions = store.admin_actions().unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].kind, AdminActionKind::KycApprove);
    }

    #[test]
    fn test_reject_kyc_cascades_reason() {
        let user = test_user("emilydavis", 0);
        let user_id = user.id;
        let admin_id = Uuid::new_v4();
        let store = store_with(vec![user]);

        store
            .submit_kyc(user_id, DocumentType::DriversLicense, "DL123456789", None)
            .unwrap();
        let rejected = store
            .reject_kyc(user_id, "Document image quality too poor", admin_id, "Admin User")
            .unwrap();
        assert!(rejected);

        let user = store.user_by_id(user_id).unwrap().unwrap();
        assert_eq!(user.kyc_status, KycStatus::Rejected);
        assert_eq!(
            user.kyc_rejection_reason.as_deref(),
            Some("Document image quality too poor")
        );

        let docs = store.kyc_documents_for_user(user_id).unwrap();
        assert_eq!(docs[0].status, DocumentStatus::Rejected);
        assert_eq!(
            docs[0].rejection_reason.as_deref(),
            Some("Document image quality too poor")
        );

        // A second review of the now-rejected submission is a no-op
        let approved = store.approve_kyc(user_id, admin_id, "Admin User").unwrap();
        assert!(!approved);
    }

    #[test]
    fn test_suspend_admin_is_noop() {
        let mut admin = test_user("admin", 0);
        admin.is_admin = true;
        let admin_id = admin.id;
        let store = store_with(vec![admin]);

        let suspended = store
            .suspend_user(admin_id, "Testing", Uuid::new_v4(), "Other Admin")
            .unwrap();
        assert!(!suspended);

        let admin = store.user_by_id(admin_id).unwrap().unwrap();
        assert!(!admin.is_suspended);
        assert!(admin.is_active);
        assert!(store.admin_actions().unwrap().is_empty());
    }

    #[test]
    fn test_suspend_and_activate_round_trip() {
        let user = test_user("mikejohnson", 0);
        let user_id = user.id;
        let admin_id = Uuid::new_v4();
        let store = store_with(vec![user]);

        assert!(store
            .suspend_user(user_id, "Fraud review", admin_id, "Admin User")
            .unwrap());
        let user = store.user_by_id(user_id).unwrap().unwrap();
        assert!(user.is_suspended);
        assert!(!user.is_active);
        assert_eq!(user.suspension_reason.as_deref(), Some("Fraud review"));
        assert_eq!(user.suspended_by, Some(admin_id));

        assert!(store.activate_user(user_id, admin_id, "Admin User").unwrap());
        let user = store.user_by_id(user_id).unwrap().unwrap();
        assert!(!user.is_suspended);
        assert!(user.is_active);
        assert!(user.suspension_reason.is_none());
        assert!(user.suspended_at.is_none());

        let actions = store.admin_actions().unwrap();
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn test_update_limits_records_old_and_new() {
        let user = test_user("johndoe", 0);
        let user_id = user.id;
        let store = store_with(vec![user]);

        let new_limits = AccountLimits::new(
            Decimal::new(5_000, 0),
            Decimal::new(50_000, 0),
            Decimal::new(2_000, 0),
        );
        assert!(store
            .update_limits(user_id, &new_limits, Uuid::new_v4(), "Admin User")
            .unwrap());

        let user = store.user_by_id(user_id).unwrap().unwrap();
        assert_eq!(user.account_limits, new_limits);

        let actions = store.admin_actions().unwrap();
        assert_eq!(actions[0].kind, AdminActionKind::LimitChange);
        assert!(actions[0].metadata.get("oldLimits").is_some());
        assert!(actions[0].metadata.get("newLimits").is_some());
    }

    #[test]
    fn test_wallet_transaction_fingerprint_lookup() {
        let user = test_user("johndoe", 0);
        let user_id = user.id;
        let store = store_with(vec![user]);

        let wt = WalletTransaction::completed(
            user_id,
            Decimal::new(50_000, 2),
            FundingKind::AddMoney,
            PaymentMethod::CreditCard,
            Some("ext_123456".to_string()),
        );
        let fp = wt.fingerprint().unwrap();
        store.add_wallet_transaction(&wt).unwrap();

        let found = store.wallet_transaction_by_fingerprint(&fp).unwrap();
        assert_eq!(found.map(|f| f.id), Some(wt.id));
        assert!(store
            .wallet_transaction_by_fingerprint("0000000000000000")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_seeded_store_matches_fixture_shape() {
        let store = MemoryStore::seeded();
        assert_eq!(store.users().unwrap().len(), 6);
        assert_eq!(store.transactions().unwrap().len(), 3);
        assert_eq!(store.wallet_transactions().unwrap().len(), 2);
        assert_eq!(store.kyc_documents().unwrap().len(), 4);
        assert_eq!(store.admin_actions().unwrap().len(), 4);
    }
}
