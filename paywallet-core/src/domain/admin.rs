//! Admin action audit records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminActionKind {
    KycApprove,
    KycReject,
    UserSuspend,
    UserActivate,
    LimitChange,
    ManualTransaction,
}

impl AdminActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminActionKind::KycApprove => "kyc_approve",
            AdminActionKind::KycReject => "kyc_reject",
            AdminActionKind::UserSuspend => "user_suspend",
            AdminActionKind::UserActivate => "user_activate",
            AdminActionKind::LimitChange => "limit_change",
            AdminActionKind::ManualTransaction => "manual_transaction",
        }
    }
}

/// Append-only audit entry recorded alongside admin operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAction {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub admin_name: String,
    pub kind: AdminActionKind,
    pub target_user_id: Uuid,
    pub target_user_name: String,
    pub details: String,
    pub metadata: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl AdminAction {
    pub fn new(
        admin_id: Uuid,
        admin_name: impl Into<String>,
        kind: AdminActionKind,
        target_user_id: Uuid,
        target_user_name: impl Into<String>,
        details: impl Into<String>,
        metadata: JsonValue,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            admin_id,
            admin_name: admin_name.into(),
            kind,
            target_user_id,
            target_user_name: target_user_name.into(),
            details: details.into(),
            metadata,
            created_at: Utc::now(),
        }
    }
}
