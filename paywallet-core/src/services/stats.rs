//! Stats service - platform summary for the admin overview

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{KycStatus, TransactionStatus};
use crate::ports::Repository;

/// Risk score above which a user counts as high risk
const HIGH_RISK_THRESHOLD: u8 = 50;

/// Stats service for platform summaries
pub struct StatsService {
    store: Arc<dyn Repository>,
}

impl StatsService {
    pub fn new(store: Arc<dyn Repository>) -> Self {
        Self { store }
    }

    /// Compute the platform summary from current store contents
    pub fn get_stats(&self) -> Result<PlatformStats> {
        let users = self.store.users()?;
        let transactions = self.store.transactions()?;

        let completed: Vec<_> = transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .collect();
        let total_volume = completed.iter().map(|t| t.amount).sum();

        let average_risk_score = if users.is_empty() {
            0.0
        } else {
            users.iter().map(|u| u.risk_score as f64).sum::<f64>() / users.len() as f64
        };

        Ok(PlatformStats {
            total_users: users.len() as i64,
            active_users: users
                .iter()
                .filter(|u| u.is_active && !u.is_suspended)
                .count() as i64,
            suspended_users: users.iter().filter(|u| u.is_suspended).count() as i64,
            verified_users: users
                .iter()
                .filter(|u| u.kyc_status == KycStatus::Verified)
                .count() as i64,
            pending_kyc: users
                .iter()
                .filter(|u| u.kyc_status == KycStatus::Pending)
                .count() as i64,
            rejected_kyc: users
                .iter()
                .filter(|u| u.kyc_status == KycStatus::Rejected)
                .count() as i64,
            not_started_kyc: users
                .iter()
                .filter(|u| u.kyc_status == KycStatus::NotStarted)
                .count() as i64,
            total_transactions: transactions.len() as i64,
            completed_transactions: completed.len() as i64,
            total_volume,
            average_risk_score,
            high_risk_users: users
                .iter()
                .filter(|u| u.risk_score > HIGH_RISK_THRESHOLD)
                .count() as i64,
        })
    }
}

/// Platform summary shown on the admin overview
#[derive(Debug, Serialize)]
pub struct PlatformStats {
    pub total_users: i64,
    pub active_users: i64,
    pub suspended_users: i64,
    pub verified_users: i64,
    pub pending_kyc: i64,
    pub rejected_kyc: i64,
    pub not_started_kyc: i64,
    pub total_transactions: i64,
    pub completed_transactions: i64,
    pub total_volume: Decimal,
    pub average_risk_score: f64,
    pub high_risk_users: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[test]
    fn test_stats_over_seeded_store() {
        let service = StatsService::new(Arc::new(MemoryStore::seeded()));
        let stats = service.get_stats().unwrap();

        assert_eq!(stats.total_users, 6);
        assert_eq!(stats.active_users, 6);
        assert_eq!(stats.suspended_users, 0);
        assert_eq!(stats.verified_users, 3); // john, sarah, admin
        assert_eq!(stats.pending_kyc, 1); // mike
        assert_eq!(stats.rejected_kyc, 1); // emily
        assert_eq!(stats.not_started_kyc, 1); // alex
        assert_eq!(stats.total_transactions, 3);
        assert_eq!(stats.completed_transactions, 2);
        // $50.00 + $250.00 completed volume
        assert_eq!(stats.total_volume, Decimal::new(30_000, 2));
        assert_eq!(stats.high_risk_users, 1); // alex at 60
    }

    #[test]
    fn test_stats_over_empty_store() {
        let service = StatsService::new(Arc::new(MemoryStore::new()));
        let stats = service.get_stats().unwrap();

        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.average_risk_score, 0.0);
        assert_eq!(stats.total_volume, Decimal::ZERO);
    }
}
