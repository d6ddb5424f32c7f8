//! History service - unified activity view
//!
//! Transfers and funding events live in two structurally different tables;
//! this service reconciles both shapes into one feed at read time, signed
//! relative to the viewing user.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{FundingKind, Transaction, TransactionKind, WalletTransaction};
use crate::ports::Repository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    Transfers,
    Wallet,
}

impl HistoryFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(HistoryFilter::All),
            "transfers" => Some(HistoryFilter::Transfers),
            "wallet" => Some(HistoryFilter::Wallet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// One row of the unified activity feed
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub description: String,
    pub counterparty: Option<String>,
    pub amount: Decimal,
    pub direction: Direction,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Amount signed by direction (outgoing negative)
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Incoming => self.amount,
            Direction::Outgoing => -self.amount,
        }
    }

    fn from_transfer(tx: &Transaction, viewer_id: Uuid) -> Self {
        let is_sender = tx.sender_id == viewer_id;
        let counterparty = if is_sender {
            tx.receiver_name
                .clone()
                .or_else(|| tx.receiver_username.clone())
        } else {
            tx.sender_name.clone().or_else(|| tx.sender_username.clone())
        };
        let description = match (&counterparty, is_sender) {
            (Some(name), true) => format!("Sent to {}", name),
            (Some(name), false) => format!("Received from {}", name),
            (None, true) => "Sent".to_string(),
            (None, false) => "Received".to_string(),
        };

        Self {
            id: tx.id,
            kind: tx.kind,
            description,
            counterparty,
            amount: tx.amount,
            direction: if is_sender {
                Direction::Outgoing
            } else {
                Direction::Incoming
            },
            status: tx.status.as_str().to_string(),
            created_at: tx.created_at,
        }
    }

    fn from_funding(wt: &WalletTransaction) -> Self {
        let (kind, description, direction) = match wt.kind {
            FundingKind::AddMoney => (
                TransactionKind::AddMoney,
                "Added money to wallet".to_string(),
                Direction::Incoming,
            ),
            FundingKind::Withdraw => (
                TransactionKind::Withdraw,
                "Withdrew money".to_string(),
                Direction::Outgoing,
            ),
        };

        Self {
            id: wt.id,
            kind,
            description,
            counterparty: None,
            amount: wt.amount,
            direction,
            status: wt.status.as_str().to_string(),
            created_at: wt.created_at,
        }
    }
}

/// History service producing the merged feed
pub struct HistoryService {
    store: Arc<dyn Repository>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn Repository>) -> Self {
        Self { store }
    }

    /// Activity feed for a user, newest first
    pub fn entries(&self, user_id: Uuid, filter: HistoryFilter) -> Result<Vec<HistoryEntry>> {
        let mut entries = Vec::new();

        if filter != HistoryFilter::Wallet {
            for tx in self.store.transactions_for_user(user_id)? {
                entries.push(HistoryEntry::from_transfer(&tx, user_id));
            }
        }
        if filter != HistoryFilter::Transfers {
            for wt in self.store.wallet_transactions_for_user(user_id)? {
                entries.push(HistoryEntry::from_funding(&wt));
            }
        }

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    /// The user's most recent activity (dashboard preview)
    pub fn recent(&self, user_id: Uuid, limit: usize) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.entries(user_id, HistoryFilter::All)?;
        entries.truncate(limit);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed::JOHN_ID;
    use crate::adapters::MemoryStore;

    fn setup() -> HistoryService {
        HistoryService::new(Arc::new(MemoryStore::seeded()))
    }

    fn uid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    #[test]
    fn test_entries_merge_both_shapes_newest_first() {
        let service = setup();
        let entries = service.entries(uid(JOHN_ID), HistoryFilter::All).unwrap();

        // John: 3 transfers + 1 top-up in the fixture
        assert_eq!(entries.len(), 4);
        for pair in entries.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert!(entries.iter().any(|e| e.kind == TransactionKind::AddMoney));
    }

    #[test]
    fn test_direction_is_viewer_relative() {
        let service = setup();
        let entries = service.entries(uid(JOHN_ID), HistoryFilter::Transfers).unwrap();

        let sent = entries
            .iter()
            .find(|e| e.description.starts_with("Sent to"))
            .unwrap();
        assert_eq!(sent.direction, Direction::Outgoing);
        assert!(sent.signed_amount() < Decimal::ZERO);

        let received = entries
            .iter()
            .find(|e| e.description.starts_with("Received from"))
            .unwrap();
        assert_eq!(received.direction, Direction::Incoming);
        assert!(received.signed_amount() > Decimal::ZERO);
    }

    #[test]
    fn test_filters() {
        let service = setup();
        let transfers = service.entries(uid(JOHN_ID), HistoryFilter::Transfers).unwrap();
        assert!(transfers
            .iter()
            .all(|e| e.kind == TransactionKind::Transfer));

        let wallet = service.entries(uid(JOHN_ID), HistoryFilter::Wallet).unwrap();
        assert!(wallet.iter().all(|e| e.kind != TransactionKind::Transfer));
        assert_eq!(wallet.len(), 1);
    }

    #[test]
    fn test_recent_caps_results() {
        let service = setup();
        let recent = service.recent(uid(JOHN_ID), 2).unwrap();
        assert_eq!(recent.len(), 2);
    }
}
