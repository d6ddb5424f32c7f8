//! Peer-to-peer transaction domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Transfer,
    AddMoney,
    Withdraw,
}

/// A transfer event between two users
///
/// Sender and receiver display names and usernames are denormalized at
/// creation time; the record is never re-resolved against the user table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub amount: Decimal,
    pub description: String,
    pub status: TransactionStatus,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub sender_name: Option<String>,
    pub receiver_name: Option<String>,
    pub sender_username: Option<String>,
    pub receiver_username: Option<String>,
}

impl Transaction {
    /// Create a completed transfer between two users, denormalizing names
    pub fn transfer(
        sender: &User,
        receiver: &User,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            sender_id: sender.id,
            receiver_id: receiver.id,
            amount,
            description: description.into(),
            status: TransactionStatus::Completed,
            kind: TransactionKind::Transfer,
            created_at: now,
            completed_at: Some(now),
            sender_name: Some(sender.display_name.clone()),
            receiver_name: Some(receiver.display_name.clone()),
            sender_username: Some(sender.username.clone()),
            receiver_username: Some(receiver.username.clone()),
        }
    }

    /// Whether the given user is a party to this transaction
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }
}
