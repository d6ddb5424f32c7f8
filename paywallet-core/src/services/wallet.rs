//! Wallet service - funding the wallet and withdrawing from it

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::{Error, OperationResult, Result};
use crate::domain::{FundingKind, PaymentMethod, WalletTransaction};
use crate::ports::Repository;

/// Top-up bounds from the add-money flow
const MIN_TOP_UP: Decimal = Decimal::ONE;
const MAX_TOP_UP: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Wallet service for deposits and withdrawals
pub struct WalletService {
    store: Arc<dyn Repository>,
}

impl WalletService {
    pub fn new(store: Arc<dyn Repository>) -> Self {
        Self { store }
    }

    /// Add money to a wallet from a simulated external payment
    ///
    /// Enforces the $1.00 minimum and $10,000 maximum per top-up. When the
    /// payment carries an external reference, a repeated confirmation of the
    /// same payment is rejected by fingerprint and the balance is credited
    /// only once.
    pub fn add_money(
        &self,
        user_id: Uuid,
        amount: Decimal,
        payment_method: PaymentMethod,
        external_transaction_id: Option<String>,
    ) -> OperationResult<WalletTransaction> {
        self.add_money_inner(user_id, amount, payment_method, external_transaction_id)
            .into()
    }

    fn add_money_inner(
        &self,
        user_id: Uuid,
        amount: Decimal,
        payment_method: PaymentMethod,
        external_transaction_id: Option<String>,
    ) -> Result<WalletTransaction> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        if amount < MIN_TOP_UP {
            return Err(Error::BelowMinimumTopUp);
        }
        if amount > MAX_TOP_UP {
            return Err(Error::AboveMaximumTopUp);
        }

        // The user must exist before anything is recorded
        self.store
            .user_by_id(user_id)?
            .ok_or(Error::UserNotFound)?;

        let wt = WalletTransaction::completed(
            user_id,
            amount,
            FundingKind::AddMoney,
            payment_method,
            external_transaction_id,
        );
        if let Some(fingerprint) = wt.fingerprint() {
            if self
                .store
                .wallet_transaction_by_fingerprint(&fingerprint)?
                .is_some()
            {
                return Err(Error::DuplicateFunding);
            }
        }

        self.store.add_wallet_transaction(&wt)?;
        self.store.adjust_balance(user_id, amount)?;
        Ok(wt)
    }

    /// Withdraw money from a wallet
    ///
    /// The debit happens first and refuses to take the balance negative, so
    /// a refused withdrawal leaves no funding record behind.
    pub fn withdraw(
        &self,
        user_id: Uuid,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> OperationResult<WalletTransaction> {
        self.withdraw_inner(user_id, amount, payment_method).into()
    }

    fn withdraw_inner(
        &self,
        user_id: Uuid,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<WalletTransaction> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }

        self.store.adjust_balance(user_id, -amount)?;

        let wt = WalletTransaction::completed(
            user_id,
            amount,
            FundingKind::Withdraw,
            payment_method,
            None,
        );
        self.store.add_wallet_transaction(&wt)?;
        Ok(wt)
    }

    /// Funding history for a user, newest first
    pub fn wallet_transactions_for_user(&self, user_id: Uuid) -> Result<Vec<WalletTransaction>> {
        self.store.wallet_transactions_for_user(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed::{ALEX_ID, JOHN_ID};
    use crate::adapters::MemoryStore;

    fn setup() -> (Arc<MemoryStore>, WalletService) {
        let store = Arc::new(MemoryStore::seeded());
        let service = WalletService::new(store.clone());
        (store, service)
    }

    fn uid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    #[test]
    fn test_add_money_credits_balance() {
        let (store, service) = setup();
        let before = store.user_by_id(uid(JOHN_ID)).unwrap().unwrap().wallet_balance;

        let result = service.add_money(
            uid(JOHN_ID),
            Decimal::new(25_000, 2), // $250.00
            PaymentMethod::CreditCard,
            Some("ext_555001".to_string()),
        );
        assert!(result.success, "{:?}", result.error);

        let after = store.user_by_id(uid(JOHN_ID)).unwrap().unwrap().wallet_balance;
        assert_eq!(after, before + Decimal::new(25_000, 2));
    }

    #[test]
    fn test_add_money_bounds() {
        let (_, service) = setup();

        let result = service.add_money(uid(JOHN_ID), Decimal::ZERO, PaymentMethod::CreditCard, None);
        assert_eq!(result.error.as_deref(), Some("Please enter a valid amount"));

        let result = service.add_money(
            uid(JOHN_ID),
            Decimal::new(50, 2), // $0.50
            PaymentMethod::CreditCard,
            None,
        );
        assert_eq!(result.error.as_deref(), Some("Minimum amount is $1.00"));

        let result = service.add_money(
            uid(JOHN_ID),
            Decimal::new(1_000_001, 2), // $10,000.01
            PaymentMethod::CreditCard,
            None,
        );
        assert_eq!(result.error.as_deref(), Some("Maximum amount is $10,000"));
    }

    #[test]
    fn test_add_money_duplicate_confirmation_rejected() {
        let (store, service) = setup();
        let before = store.user_by_id(uid(JOHN_ID)).unwrap().unwrap().wallet_balance;

        let first = service.add_money(
            uid(JOHN_ID),
            Decimal::new(10_000, 2),
            PaymentMethod::BankTransfer,
            Some("ext_dup_001".to_string()),
        );
        assert!(first.success);

        let second = service.add_money(
            uid(JOHN_ID),
            Decimal::new(10_000, 2),
            PaymentMethod::BankTransfer,
            Some("ext_dup_001".to_string()),
        );
        assert!(!second.success);
        assert_eq!(
            second.error.as_deref(),
            Some("Duplicate payment confirmation")
        );

        // Credited exactly once
        let after = store.user_by_id(uid(JOHN_ID)).unwrap().unwrap().wallet_balance;
        assert_eq!(after, before + Decimal::new(10_000, 2));
    }

    #[test]
    fn test_withdraw_refuses_overdraft() {
        let (store, service) = setup();
        // Alex holds $75.50
        let result = service.withdraw(
            uid(ALEX_ID),
            Decimal::new(10_000, 2), // $100.00
            PaymentMethod::BankTransfer,
        );
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Insufficient balance"));

        // No funding record left behind
        let records = store.wallet_transactions_for_user(uid(ALEX_ID)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_withdraw_debits_balance() {
        let (store, service) = setup();
        let before = store.user_by_id(uid(JOHN_ID)).unwrap().unwrap().wallet_balance;

        let result = service.withdraw(
            uid(JOHN_ID),
            Decimal::new(5_000, 2), // $50.00
            PaymentMethod::BankTransfer,
        );
        assert!(result.success);
        assert_eq!(result.data.unwrap().kind, FundingKind::Withdraw);

        let after = store.user_by_id(uid(JOHN_ID)).unwrap().unwrap().wallet_balance;
        assert_eq!(after, before - Decimal::new(5_000, 2));
    }
}
