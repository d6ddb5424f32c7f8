//! KYC service - identity verification workflow

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{DocumentType, KycDocument, KycStatus, User};
use crate::ports::Repository;

/// KYC service for submissions and admin review
pub struct KycService {
    store: Arc<dyn Repository>,
}

impl KycService {
    pub fn new(store: Arc<dyn Repository>) -> Self {
        Self { store }
    }

    /// Submit identity documents for verification
    ///
    /// Moves the user to pending and files the pending document row in one
    /// store operation. Resubmission after a rejection is allowed.
    pub fn submit(
        &self,
        user_id: Uuid,
        document_type: DocumentType,
        document_number: &str,
        document_url: Option<&str>,
    ) -> Result<KycDocument> {
        if document_number.trim().is_empty() {
            return Err(Error::validation("Please fill in all KYC fields"));
        }
        self.store
            .submit_kyc(user_id, document_type, document_number.trim(), document_url)
    }

    /// Approve a pending submission
    ///
    /// Returns false without recording anything when the user is not
    /// pending (double review, already verified, already rejected).
    pub fn approve(&self, user_id: Uuid, admin: &User) -> Result<bool> {
        self.store
            .approve_kyc(user_id, admin.id, &admin.display_name)
    }

    /// Reject a pending submission with a reason; same no-op contract as
    /// `approve` for users not in the pending state.
    pub fn reject(&self, user_id: Uuid, reason: &str, admin: &User) -> Result<bool> {
        let reason = if reason.trim().is_empty() {
            "No reason provided"
        } else {
            reason.trim()
        };
        self.store
            .reject_kyc(user_id, reason, admin.id, &admin.display_name)
    }

    /// Documents uploaded by a user, newest first
    pub fn documents_for_user(&self, user_id: Uuid) -> Result<Vec<KycDocument>> {
        self.store.kyc_documents_for_user(user_id)
    }

    /// All documents, newest first
    pub fn documents(&self) -> Result<Vec<KycDocument>> {
        self.store.kyc_documents()
    }

    /// Users awaiting review
    pub fn pending_reviews(&self) -> Result<Vec<User>> {
        let users = self.store.users()?;
        Ok(users
            .into_iter()
            .filter(|u| u.kyc_status == KycStatus::Pending)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed::{ADMIN_ID, ALEX_ID, JOHN_ID, MIKE_ID};
    use crate::adapters::MemoryStore;
    use crate::domain::DocumentStatus;

    fn setup() -> (Arc<MemoryStore>, KycService) {
        let store = Arc::new(MemoryStore::seeded());
        let service = KycService::new(store.clone());
        (store, service)
    }

    fn uid(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    fn admin(store: &MemoryStore) -> User {
        store.user_by_id(uid(ADMIN_ID)).unwrap().unwrap()
    }

    #[test]
    fn test_submit_requires_document_number() {
        let (_, service) = setup();
        let err = service
            .submit(uid(ALEX_ID), DocumentType::Passport, "  ", None)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_submit_then_approve_flow() {
        let (store, service) = setup();
        let admin = admin(&store);

        let doc = service
            .submit(uid(ALEX_ID), DocumentType::NationalId, "NID4455", None)
            .unwrap();
        assert_eq!(doc.status, DocumentStatus::Pending);

        let user = store.user_by_id(uid(ALEX_ID)).unwrap().unwrap();
        assert_eq!(user.kyc_status, KycStatus::Pending);
        assert_eq!(user.kyc_document_type, Some(DocumentType::NationalId));

        assert!(service.approve(uid(ALEX_ID), &admin).unwrap());
        let user = store.user_by_id(uid(ALEX_ID)).unwrap().unwrap();
        assert_eq!(user.kyc_status, KycStatus::Verified);

        let docs = service.documents_for_user(uid(ALEX_ID)).unwrap();
        assert_eq!(docs[0].status, DocumentStatus::Approved);
    }

    #[test]
    fn test_approve_non_pending_is_noop() {
        let (store, service) = setup();
        let admin = admin(&store);
        let actions_before = store.admin_actions().unwrap().len();

        // John is already verified
        assert!(!service.approve(uid(JOHN_ID), &admin).unwrap());
        assert_eq!(store.admin_actions().unwrap().len(), actions_before);
    }

    #[test]
    fn test_reject_defaults_reason() {
        let (store, service) = setup();
        let admin = admin(&store);

        assert!(service.reject(uid(MIKE_ID), "   ", &admin).unwrap());
        let user = store.user_by_id(uid(MIKE_ID)).unwrap().unwrap();
        assert_eq!(user.kyc_status, KycStatus::Rejected);
        assert_eq!(
            user.kyc_rejection_reason.as_deref(),
            Some("No reason provided")
        );
    }

    #[test]
    fn test_pending_reviews_lists_pending_users() {
        let (_, service) = setup();
        let pending = service.pending_reviews().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].username, "mikejohnson");
    }
}
