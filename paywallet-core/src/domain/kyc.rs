//! KYC document domain model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::DocumentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }
}

/// A single uploaded identity document
///
/// Reviewed independently of the owning user's `kyc_status`; the store's
/// review operations keep the two in step within one operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycDocument {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type: DocumentType,
    pub document_url: String,
    pub document_number: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub status: DocumentStatus,
    pub rejection_reason: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<Uuid>,
}

impl KycDocument {
    /// Create a pending document for a user
    pub fn pending(
        user_id: Uuid,
        document_type: DocumentType,
        document_url: impl Into<String>,
        document_number: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            document_type,
            document_url: document_url.into(),
            document_number,
            expiry_date: None,
            status: DocumentStatus::Pending,
            rejection_reason: None,
            uploaded_at: Utc::now(),
            reviewed_at: None,
            reviewed_by: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_document() {
        let user_id = Uuid::new_v4();
        let doc = KycDocument::pending(
            user_id,
            DocumentType::Passport,
            "https://example.com/docs/passport.jpg",
            Some("P123456789".to_string()),
        );
        assert_eq!(doc.status, DocumentStatus::Pending);
        assert!(doc.reviewed_at.is_none());
        assert!(doc.reviewed_by.is_none());
    }
}
