//! Repository port - store abstraction

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{
    AccountLimits, AdminAction, DocumentType, KycDocument, Transaction, User, WalletTransaction,
};

/// Store abstraction
///
/// This trait defines all store operations. Implementations (adapters)
/// provide the actual storage logic. Composite operations (transfer, KYC
/// review, suspension) are part of the port so an adapter can make each of
/// them a single atomic unit rather than a sequence of independent writes.
pub trait Repository: Send + Sync {
    // === Users ===

    /// Add a new user. Fails with `UsernameTaken`/`EmailTaken` when the
    /// handle or email is already registered (case-insensitive).
    fn add_user(&self, user: &User) -> Result<User>;

    /// Get all users
    fn users(&self) -> Result<Vec<User>>;

    /// Get user by ID
    fn user_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Get user by username (case-insensitive)
    fn user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Get user by email (case-insensitive)
    fn user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Replace an existing user row
    fn update_user(&self, user: &User) -> Result<User>;

    /// Whether no user holds this username (case-insensitive)
    fn is_username_available(&self, username: &str) -> Result<bool>;

    /// Whether no user holds this email (case-insensitive)
    fn is_email_available(&self, email: &str) -> Result<bool>;

    /// Apply a balance delta. Refuses deltas that would take the balance
    /// negative, leaving the row untouched.
    fn adjust_balance(&self, user_id: Uuid, delta: Decimal) -> Result<User>;

    /// Bump login bookkeeping (last login time, login count)
    fn record_login(&self, user_id: Uuid) -> Result<User>;

    // === Transactions ===

    /// Add a transfer record
    fn add_transaction(&self, tx: &Transaction) -> Result<()>;

    /// All transfer records, newest first
    fn transactions(&self) -> Result<Vec<Transaction>>;

    /// Transfers the user participates in (either side), newest first
    fn transactions_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>>;

    // === Wallet transactions ===

    /// Add a funding record
    fn add_wallet_transaction(&self, wt: &WalletTransaction) -> Result<()>;

    /// All funding records, newest first
    fn wallet_transactions(&self) -> Result<Vec<WalletTransaction>>;

    /// Funding records for a user, newest first
    fn wallet_transactions_for_user(&self, user_id: Uuid) -> Result<Vec<WalletTransaction>>;

    /// Look up a funding record by dedup fingerprint
    fn wallet_transaction_by_fingerprint(
        &self,
        fingerprint: &str,
    ) -> Result<Option<WalletTransaction>>;

    // === KYC documents ===

    /// All documents, newest upload first
    fn kyc_documents(&self) -> Result<Vec<KycDocument>>;

    /// Documents for a user, newest upload first
    fn kyc_documents_for_user(&self, user_id: Uuid) -> Result<Vec<KycDocument>>;

    // === Admin actions ===

    /// All audit entries, newest first
    fn admin_actions(&self) -> Result<Vec<AdminAction>>;

    // === Composite operations (each atomic within the store) ===

    /// Move money between two users: verify both exist and are active and
    /// the sender covers the amount, create the completed transfer record
    /// with denormalized names, then debit and credit - all as one unit.
    fn execute_transfer(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        amount: Decimal,
        description: &str,
    ) -> Result<Transaction>;

    /// Mark the user's KYC as pending and file the pending document row
    fn submit_kyc(
        &self,
        user_id: Uuid,
        document_type: DocumentType,
        document_number: &str,
        document_url: Option<&str>,
    ) -> Result<KycDocument>;

    /// Approve a pending KYC submission: verify the user, cascade pending
    /// documents to approved, and append the audit entry. Returns false
    /// (and records nothing) when the user is not in the pending state.
    fn approve_kyc(&self, user_id: Uuid, admin_id: Uuid, admin_name: &str) -> Result<bool>;

    /// Reject a pending KYC submission with a reason; same no-op contract
    /// as approval for users not in the pending state.
    fn reject_kyc(
        &self,
        user_id: Uuid,
        reason: &str,
        admin_id: Uuid,
        admin_name: &str,
    ) -> Result<bool>;

    /// Suspend a user. Admins are exempt: returns false and records nothing.
    fn suspend_user(
        &self,
        user_id: Uuid,
        reason: &str,
        admin_id: Uuid,
        admin_name: &str,
    ) -> Result<bool>;

    /// Lift a suspension. Admins are exempt as with `suspend_user`.
    fn activate_user(&self, user_id: Uuid, admin_id: Uuid, admin_name: &str) -> Result<bool>;

    /// Replace a user's transaction limits and record old/new in the audit
    /// entry metadata.
    fn update_limits(
        &self,
        user_id: Uuid,
        new_limits: &AccountLimits,
        admin_id: Uuid,
        admin_name: &str,
    ) -> Result<bool>;
}
