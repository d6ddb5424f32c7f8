//! Wallet funding domain model (top-ups and withdrawals)
//!
//! Funding events are structurally independent from peer-to-peer
//! transactions; the history service reconciles the two shapes at read time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "credit_card" => Some(PaymentMethod::CreditCard),
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingKind {
    AddMoney,
    Withdraw,
}

impl FundingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingKind::AddMoney => "add_money",
            FundingKind::Withdraw => "withdraw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingStatus {
    Pending,
    Completed,
    Failed,
}

impl FundingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingStatus::Pending => "pending",
            FundingStatus::Completed => "completed",
            FundingStatus::Failed => "failed",
        }
    }
}

/// A deposit or withdrawal against a user's wallet balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub kind: FundingKind,
    pub payment_method: Option<PaymentMethod>,
    /// Reference from the simulated external payment processor
    pub external_transaction_id: Option<String>,
    pub status: FundingStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl WalletTransaction {
    /// Create a completed funding event
    pub fn completed(
        user_id: Uuid,
        amount: Decimal,
        kind: FundingKind,
        payment_method: PaymentMethod,
        external_transaction_id: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            kind,
            payment_method: Some(payment_method),
            external_transaction_id,
            status: FundingStatus::Completed,
            created_at: now,
            completed_at: Some(now),
        }
    }

    /// Dedup fingerprint for externally confirmed funding events
    ///
    /// Hashes user, kind, payment method and the external reference. Two
    /// confirmations of the same external payment collide here and the
    /// second is rejected. Events without an external reference have no
    /// fingerprint.
    pub fn fingerprint(&self) -> Option<String> {
        let external_id = self.external_transaction_id.as_deref()?;
        let method = self
            .payment_method
            .map(|m| m.as_str())
            .unwrap_or("unknown");
        let fingerprint_str = format!(
            "{}|{}|{}|{}",
            self.user_id,
            self.kind.as_str(),
            method,
            external_id
        );

        let mut hasher = Sha256::new();
        hasher.update(fingerprint_str.as_bytes());
        let result = hasher.finalize();
        Some(hex::encode(&result[..8])) // 16 hex chars
    }
}

// Small hex encoder for fingerprints
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_requires_external_id() {
        let user_id = Uuid::new_v4();
        let mut wt = WalletTransaction::completed(
            user_id,
            Decimal::new(50_000, 2),
            FundingKind::AddMoney,
            PaymentMethod::CreditCard,
            None,
        );
        assert!(wt.fingerprint().is_none());

        wt.external_transaction_id = Some("ext_123456".to_string());
        let fp = wt.fingerprint().unwrap();
        assert_eq!(fp.len(), 16);
    }

    #[test]
    fn test_fingerprint_stable_across_records() {
        let user_id = Uuid::new_v4();
        let a = WalletTransaction::completed(
            user_id,
            Decimal::new(50_000, 2),
            FundingKind::AddMoney,
            PaymentMethod::CreditCard,
            Some("ext_123456".to_string()),
        );
        let b = WalletTransaction::completed(
            user_id,
            Decimal::new(25_000, 2),
            FundingKind::AddMoney,
            PaymentMethod::CreditCard,
            Some("ext_123456".to_string()),
        );
        // Same external confirmation, same fingerprint, regardless of amount
        assert_eq!(a.fingerprint(), b.fingerprint());

        let other = WalletTransaction::completed(
            user_id,
            Decimal::new(50_000, 2),
            FundingKind::AddMoney,
            PaymentMethod::CreditCard,
            Some("ext_999999".to_string()),
        );
        assert_ne!(a.fingerprint(), other.fingerprint());
    }
}
