//! Transfer service - peer-to-peer money movement

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::{Error, OperationResult, Result};
use crate::domain::{Transaction, TransactionKind, TransactionStatus};
use crate::ports::Repository;

/// Transfer service for sending and requesting money
pub struct TransferService {
    store: Arc<dyn Repository>,
}

impl TransferService {
    pub fn new(store: Arc<dyn Repository>) -> Self {
        Self { store }
    }

    /// Send money from one user to another
    ///
    /// Failures come back as data (`success == false` with a display-ready
    /// message) rather than errors. Beyond the store's own checks, the
    /// sender's single-transaction and daily limits are enforced here.
    pub fn transfer(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        amount: Decimal,
        description: Option<&str>,
    ) -> OperationResult<Transaction> {
        self.transfer_inner(sender_id, receiver_id, amount, description)
            .into()
    }

    fn transfer_inner(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }

        let sender = self
            .store
            .user_by_id(sender_id)?
            .ok_or(Error::UserNotFound)?;

        if amount > sender.account_limits.single_transaction_limit {
            return Err(Error::SingleLimitExceeded);
        }
        let spent_today = self.spent_today(sender_id)?;
        if spent_today + amount > sender.account_limits.daily_transaction_limit {
            return Err(Error::DailyLimitExceeded);
        }

        self.store.execute_transfer(
            sender_id,
            receiver_id,
            amount,
            description.unwrap_or("Money transfer"),
        )
    }

    /// Sum of the sender's completed outgoing transfers today
    fn spent_today(&self, user_id: Uuid) -> Result<Decimal> {
        let today = Utc::now().date_naive();
        let total = self
            .store
            .transactions_for_user(user_id)?
            .iter()
            .filter(|tx| {
                tx.sender_id == user_id
                    && tx.kind == TransactionKind::Transfer
                    && tx.status == TransactionStatus::Completed
                    && tx.created_at.date_naive() == today
            })
            .map(|tx| tx.amount)
            .sum();
        Ok(total)
    }

    /// Ask another user for money
    ///
    /// Only validated and acknowledged; nothing is persisted and no balance
    /// moves. A real implementation would deliver a notification here.
    pub fn request(
        &self,
        requester_id: Uuid,
        payer_id: Uuid,
        amount: Decimal,
        note: Option<&str>,
    ) -> OperationResult<MoneyRequest> {
        self.request_inner(requester_id, payer_id, amount, note).into()
    }

    fn request_inner(
        &self,
        requester_id: Uuid,
        payer_id: Uuid,
        amount: Decimal,
        note: Option<&str>,
    ) -> Result<MoneyRequest> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        if requester_id == payer_id {
            return Err(Error::SelfTransfer);
        }

        let requester = self
            .store
            .user_by_id(requester_id)?
            .ok_or(Error::UserNotFound)?;
        let payer = self.store.user_by_id(payer_id)?.ok_or(Error::UserNotFound)?;
        if !requester.is_active || !payer.is_active {
            return Err(Error::AccountInactive);
        }

        Ok(MoneyRequest {
            id: Uuid::new_v4(),
            requester_id,
            requester_name: requester.display_name,
            payer_id,
            payer_name: payer.display_name,
            amount,
            note: note.map(str::to_string),
            created_at: Utc::now(),
        })
    }

    /// Transfers the user participates in, newest first
    pub fn transactions_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        self.store.transactions_for_user(user_id)
    }
}

/// Acknowledgement of a money request
#[derive(Debug, Clone, Serialize)]
pub struct MoneyRequest {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub requester_name: String,
    pub payer_id: Uuid,
    pub payer_name: String,
    pub amount: Decimal,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed::{ALEX_ID, JOHN_ID, MIKE_ID, SARAH_ID};
    use crate::adapters::MemoryStore;

    fn setup() -> (Arc<MemoryStore>, TransferService) {
        let store = Arc::new(MemoryStore::seeded());
        let service = TransferService::new(store.clone());
        (store, service)
    }

    fn uid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    #[test]
    fn test_transfer_success_conserves_balances() {
        let (store, service) = setup();
        let john = store.user_by_id(uid(JOHN_ID)).unwrap().unwrap();
        let sarah = store.user_by_id(uid(SARAH_ID)).unwrap().unwrap();
        let total_before = john.wallet_balance + sarah.wallet_balance;

        let result = service.transfer(
            john.id,
            sarah.id,
            Decimal::new(2_500, 2),
            Some("Lunch split"),
        );
        assert!(result.success, "{:?}", result.error);
        let tx = result.data.unwrap();
        assert_eq!(tx.sender_username.as_deref(), Some("johndoe"));
        assert_eq!(tx.status, TransactionStatus::Completed);

        let john_after = store.user_by_id(john.id).unwrap().unwrap();
        let sarah_after = store.user_by_id(sarah.id).unwrap().unwrap();
        assert_eq!(
            john_after.wallet_balance + sarah_after.wallet_balance,
            total_before
        );
    }

    #[test]
    fn test_transfer_insufficient_balance_message() {
        let (store, service) = setup();
        // Alex holds $75.50 with a $100 single limit
        let alex = store.user_by_id(uid(ALEX_ID)).unwrap().unwrap();

        let result = service.transfer(alex.id, uid(JOHN_ID), Decimal::new(9_000, 2), None);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Insufficient balance"));

        let alex_after = store.user_by_id(alex.id).unwrap().unwrap();
        assert_eq!(alex_after.wallet_balance, alex.wallet_balance);
    }

    #[test]
    fn test_transfer_rejects_nonpositive_amount() {
        let (_, service) = setup();
        let result = service.transfer(uid(JOHN_ID), uid(SARAH_ID), Decimal::ZERO, None);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Please enter a valid amount"));
    }

    #[test]
    fn test_transfer_enforces_single_limit() {
        let (_, service) = setup();
        // Mike's single-transaction limit is $500; he holds $2,100
        let result = service.transfer(uid(MIKE_ID), uid(JOHN_ID), Decimal::new(60_000, 2), None);
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Amount exceeds single transaction limit")
        );
    }

    #[test]
    fn test_transfer_enforces_daily_limit() {
        let (_, service) = setup();
        // Mike's daily limit is $1,000 and single limit $500: two $450
        // transfers pass, the third breaches the daily cap.
        for _ in 0..2 {
            let result =
                service.transfer(uid(MIKE_ID), uid(JOHN_ID), Decimal::new(45_000, 2), None);
            assert!(result.success, "{:?}", result.error);
        }
        let result = service.transfer(uid(MIKE_ID), uid(JOHN_ID), Decimal::new(45_000, 2), None);
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Daily transaction limit exceeded")
        );
    }

    #[test]
    fn test_transfer_to_suspended_account_fails() {
        let (store, service) = setup();
        store
            .suspend_user(uid(SARAH_ID), "Test", uid(JOHN_ID), "Admin User")
            .unwrap();

        let result = service.transfer(uid(JOHN_ID), uid(SARAH_ID), Decimal::new(1_000, 2), None);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Account is inactive"));
    }

    #[test]
    fn test_transfer_unknown_user() {
        let (_, service) = setup();
        let result = service.transfer(uid(JOHN_ID), Uuid::new_v4(), Decimal::ONE, None);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("User not found"));
    }

    #[test]
    fn test_request_is_not_persisted() {
        let (store, service) = setup();
        let before = store.transactions().unwrap().len();

        let result = service.request(
            uid(JOHN_ID),
            uid(SARAH_ID),
            Decimal::new(3_000, 2),
            Some("Concert tickets"),
        );
        assert!(result.success);
        let request = result.data.unwrap();
        assert_eq!(request.payer_name, "Sarah Wilson");

        assert_eq!(store.transactions().unwrap().len(), before);
    }
}
