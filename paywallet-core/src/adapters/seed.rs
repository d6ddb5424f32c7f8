//! Demo fixture dataset
//!
//! Generates the sample users, transfers, funding events, KYC documents and
//! audit entries the store is seeded with. IDs and timestamps are fixed so
//! every process starts from the same state.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{
    AccountLimits, AdminAction, AdminActionKind, DocumentStatus, DocumentType, FundingKind,
    FundingStatus, KycDocument, KycStatus, PaymentMethod, Transaction, TransactionKind,
    TransactionStatus, User, WalletTransaction,
};

pub const JOHN_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const SARAH_ID: &str = "22222222-2222-2222-2222-222222222222";
pub const MIKE_ID: &str = "33333333-3333-3333-3333-333333333333";
pub const EMILY_ID: &str = "44444444-4444-4444-4444-444444444444";
pub const ALEX_ID: &str = "55555555-5555-5555-5555-555555555555";
pub const ADMIN_ID: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa";

fn uid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Generate the demo users
pub fn seed_users() -> Vec<User> {
    let mut john = User::new(uid(JOHN_ID), "johndoe", "John Doe", "john@example.com");
    john.phone_number = Some("+1234567890".to_string());
    john.wallet_balance = Decimal::new(125_075, 2); // $1,250.75
    john.kyc_status = KycStatus::Verified;
    john.kyc_document_type = Some(DocumentType::Passport);
    john.kyc_document_number = Some("P123456789".to_string());
    john.kyc_verified_at = Some(ts(2024, 1, 10, 10, 0, 0));
    john.kyc_verified_by = Some(uid(ADMIN_ID));
    john.last_login_at = Some(ts(2024, 1, 16, 8, 30, 0));
    john.login_count = 45;
    john.device_info = Some("iPhone 15 Pro".to_string());
    john.ip_address = Some("192.168.1.100".to_string());
    john.risk_score = 15;
    john.account_limits = AccountLimits::new(
        Decimal::new(5_000, 0),
        Decimal::new(50_000, 0),
        Decimal::new(2_000, 0),
    );
    john.created_at = ts(2024, 1, 1, 0, 0, 0);
    john.updated_at = ts(2024, 1, 10, 10, 0, 0);

    let mut sarah = User::new(uid(SARAH_ID), "sarahwilson", "Sarah Wilson", "sarah@example.com");
    sarah.phone_number = Some("+1234567891".to_string());
    sarah.wallet_balance = Decimal::new(85_025, 2); // $850.25
    sarah.kyc_status = KycStatus::Verified;
    sarah.kyc_document_type = Some(DocumentType::DriversLicense);
    sarah.kyc_document_number = Some("DL987654321".to_string());
    sarah.kyc_verified_at = Some(ts(2024, 1, 8, 14, 30, 0));
    sarah.kyc_verified_by = Some(uid(ADMIN_ID));
    sarah.last_login_at = Some(ts(2024, 1, 15, 19, 45, 0));
    sarah.login_count = 32;
    sarah.device_info = Some("Samsung Galaxy S24".to_string());
    sarah.ip_address = Some("192.168.1.101".to_string());
    sarah.risk_score = 8;
    sarah.account_limits = AccountLimits::new(
        Decimal::new(3_000, 0),
        Decimal::new(30_000, 0),
        Decimal::new(1_500, 0),
    );
    sarah.created_at = ts(2024, 1, 2, 0, 0, 0);
    sarah.updated_at = ts(2024, 1, 8, 14, 30, 0);

    let mut mike = User::new(uid(MIKE_ID), "mikejohnson", "Mike Johnson", "mike@example.com");
    mike.phone_number = Some("+1234567892".to_string());
    mike.wallet_balance = Decimal::new(210_000, 2); // $2,100.00
    mike.kyc_status = KycStatus::Pending;
    mike.kyc_document_type = Some(DocumentType::Passport);
    mike.kyc_document_number = Some("P987654321".to_string());
    mike.kyc_submitted_at = Some(ts(2024, 1, 15, 9, 0, 0));
    mike.last_login_at = Some(ts(2024, 1, 16, 12, 15, 0));
    mike.login_count = 12;
    mike.device_info = Some("MacBook Pro".to_string());
    mike.ip_address = Some("192.168.1.102".to_string());
    mike.risk_score = 25;
    mike.account_limits = AccountLimits::new(
        Decimal::new(1_000, 0),
        Decimal::new(10_000, 0),
        Decimal::new(500, 0),
    );
    mike.created_at = ts(2024, 1, 3, 0, 0, 0);
    mike.updated_at = ts(2024, 1, 15, 9, 0, 0);

    let mut emily = User::new(uid(EMILY_ID), "emilydavis", "Emily Davis", "emily@example.com");
    emily.phone_number = Some("+1234567894".to_string());
    emily.wallet_balance = Decimal::new(15_000, 2); // $150.00
    emily.kyc_status = KycStatus::Rejected;
    emily.kyc_document_type = Some(DocumentType::DriversLicense);
    emily.kyc_document_number = Some("DL123456789".to_string());
    emily.kyc_submitted_at = Some(ts(2024, 1, 12, 16, 0, 0));
    emily.kyc_rejection_reason = Some("Document image quality too poor".to_string());
    emily.last_login_at = Some(ts(2024, 1, 14, 10, 20, 0));
    emily.login_count = 8;
    emily.device_info = Some("iPad Air".to_string());
    emily.ip_address = Some("192.168.1.103".to_string());
    emily.risk_score = 45;
    emily.account_limits = AccountLimits::new(
        Decimal::new(500, 0),
        Decimal::new(5_000, 0),
        Decimal::new(200, 0),
    );
    emily.created_at = ts(2024, 1, 5, 0, 0, 0);
    emily.updated_at = ts(2024, 1, 12, 16, 30, 0);

    let mut alex = User::new(uid(ALEX_ID), "alexbrown", "Alex Brown", "alex@example.com");
    alex.phone_number = Some("+1234567895".to_string());
    alex.wallet_balance = Decimal::new(7_550, 2); // $75.50
    alex.kyc_status = KycStatus::NotStarted;
    alex.last_login_at = Some(ts(2024, 1, 16, 7, 0, 0));
    alex.login_count = 3;
    alex.device_info = Some("Google Pixel 8".to_string());
    alex.ip_address = Some("192.168.1.104".to_string());
    alex.risk_score = 60;
    alex.account_limits = AccountLimits::new(
        Decimal::new(200, 0),
        Decimal::new(2_000, 0),
        Decimal::new(100, 0),
    );
    alex.created_at = ts(2024, 1, 14, 0, 0, 0);
    alex.updated_at = ts(2024, 1, 14, 0, 0, 0);

    let mut admin = User::new(uid(ADMIN_ID), "admin", "Admin User", "admin@paywallet.com");
    admin.phone_number = Some("+1234567893".to_string());
    admin.wallet_balance = Decimal::ZERO;
    admin.kyc_status = KycStatus::Verified;
    admin.last_login_at = Some(ts(2024, 1, 16, 9, 0, 0));
    admin.login_count = 156;
    admin.device_info = Some("MacBook Pro Admin".to_string());
    admin.ip_address = Some("10.0.0.1".to_string());
    admin.risk_score = 0;
    admin.account_limits = AccountLimits::new(
        Decimal::new(100_000, 0),
        Decimal::new(1_000_000, 0),
        Decimal::new(50_000, 0),
    );
    admin.is_admin = true;
    admin.created_at = ts(2024, 1, 1, 0, 0, 0);
    admin.updated_at = ts(2024, 1, 1, 0, 0, 0);

    vec![john, sarah, mike, emily, alex, admin]
}

/// Generate the demo transfer records
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: uid("d1d1d1d1-d1d1-d1d1-d1d1-d1d1d1d1d1d1"),
            sender_id: uid(JOHN_ID),
            receiver_id: uid(SARAH_ID),
            amount: Decimal::new(5_000, 2), // $50.00
            description: "Coffee payment".to_string(),
            status: TransactionStatus::Completed,
            kind: TransactionKind::Transfer,
            created_at: ts(2024, 1, 14, 15, 45, 0),
            completed_at: Some(ts(2024, 1, 14, 15, 45, 30)),
            sender_name: Some("John Doe".to_string()),
            receiver_name: Some("Sarah Wilson".to_string()),
            sender_username: Some("johndoe".to_string()),
            receiver_username: Some("sarahwilson".to_string()),
        },
        Transaction {
            id: uid("d2d2d2d2-d2d2-d2d2-d2d2-d2d2d2d2d2d2"),
            sender_id: uid(SARAH_ID),
            receiver_id: uid(JOHN_ID),
            amount: Decimal::new(25_000, 2), // $250.00
            description: "Payment for dinner".to_string(),
            status: TransactionStatus::Completed,
            kind: TransactionKind::Transfer,
            created_at: ts(2024, 1, 15, 10, 30, 0),
            completed_at: Some(ts(2024, 1, 15, 10, 30, 15)),
            sender_name: Some("Sarah Wilson".to_string()),
            receiver_name: Some("John Doe".to_string()),
            sender_username: Some("sarahwilson".to_string()),
            receiver_username: Some("johndoe".to_string()),
        },
        Transaction {
            id: uid("d3d3d3d3-d3d3-d3d3-d3d3-d3d3d3d3d3d3"),
            sender_id: uid(MIKE_ID),
            receiver_id: uid(JOHN_ID),
            amount: Decimal::new(10_000, 2), // $100.00
            description: "Freelance work payment".to_string(),
            status: TransactionStatus::Pending,
            kind: TransactionKind::Transfer,
            created_at: ts(2024, 1, 16, 8, 0, 0),
            completed_at: None,
            sender_name: Some("Mike Johnson".to_string()),
            receiver_name: Some("John Doe".to_string()),
            sender_username: Some("mikejohnson".to_string()),
            receiver_username: Some("johndoe".to_string()),
        },
    ]
}

/// Generate the demo funding events
pub fn seed_wallet_transactions() -> Vec<WalletTransaction> {
    vec![
        WalletTransaction {
            id: uid("e1e1e1e1-e1e1-e1e1-e1e1-e1e1e1e1e1e1"),
            user_id: uid(JOHN_ID),
            amount: Decimal::new(50_000, 2), // $500.00
            kind: FundingKind::AddMoney,
            payment_method: Some(PaymentMethod::CreditCard),
            external_transaction_id: Some("ext_123456".to_string()),
            status: FundingStatus::Completed,
            created_at: ts(2024, 1, 13, 9, 15, 0),
            completed_at: Some(ts(2024, 1, 13, 9, 15, 30)),
        },
        WalletTransaction {
            id: uid("e2e2e2e2-e2e2-e2e2-e2e2-e2e2e2e2e2e2"),
            user_id: uid(SARAH_ID),
            amount: Decimal::new(20_000, 2), // $200.00
            kind: FundingKind::AddMoney,
            payment_method: Some(PaymentMethod::BankTransfer),
            external_transaction_id: Some("ext_789012".to_string()),
            status: FundingStatus::Completed,
            created_at: ts(2024, 1, 12, 14, 20, 0),
            completed_at: Some(ts(2024, 1, 12, 14, 22, 0)),
        },
    ]
}

/// Generate the demo KYC documents
pub fn seed_kyc_documents() -> Vec<KycDocument> {
    vec![
        KycDocument {
            id: uid("c1c1c1c1-c1c1-c1c1-c1c1-c1c1c1c1c1c1"),
            user_id: uid(JOHN_ID),
            document_type: DocumentType::Passport,
            document_url: "https://example.com/docs/passport_johndoe.jpg".to_string(),
            document_number: Some("P123456789".to_string()),
            expiry_date: NaiveDate::from_ymd_opt(2030, 12, 31),
            status: DocumentStatus::Approved,
            rejection_reason: None,
            uploaded_at: ts(2024, 1, 9, 15, 0, 0),
            reviewed_at: Some(ts(2024, 1, 10, 10, 0, 0)),
            reviewed_by: Some(uid(ADMIN_ID)),
        },
        KycDocument {
            id: uid("c2c2c2c2-c2c2-c2c2-c2c2-c2c2c2c2c2c2"),
            user_id: uid(SARAH_ID),
            document_type: DocumentType::DriversLicense,
            document_url: "https://example.com/docs/license_sarahwilson.jpg".to_string(),
            document_number: Some("DL987654321".to_string()),
            expiry_date: NaiveDate::from_ymd_opt(2028, 6, 15),
            status: DocumentStatus::Approved,
            rejection_reason: None,
            uploaded_at: ts(2024, 1, 7, 12, 0, 0),
            reviewed_at: Some(ts(2024, 1, 8, 14, 30, 0)),
            reviewed_by: Some(uid(ADMIN_ID)),
        },
        KycDocument {
            id: uid("c3c3c3c3-c3c3-c3c3-c3c3-c3c3c3c3c3c3"),
            user_id: uid(MIKE_ID),
            document_type: DocumentType::Passport,
            document_url: "https://example.com/docs/passport_mikejohnson.jpg".to_string(),
            document_number: Some("P987654321".to_string()),
            expiry_date: NaiveDate::from_ymd_opt(2029, 3, 20),
            status: DocumentStatus::Pending,
            rejection_reason: None,
            uploaded_at: ts(2024, 1, 15, 9, 0, 0),
            reviewed_at: None,
            reviewed_by: None,
        },
        KycDocument {
            id: uid("c4c4c4c4-c4c4-c4c4-c4c4-c4c4c4c4c4c4"),
            user_id: uid(EMILY_ID),
            document_type: DocumentType::DriversLicense,
            document_url: "https://example.com/docs/license_emilydavis.jpg".to_string(),
            document_number: Some("DL123456789".to_string()),
            expiry_date: NaiveDate::from_ymd_opt(2027, 11, 10),
            status: DocumentStatus::Rejected,
            rejection_reason: Some(
                "Document image quality too poor, please resubmit with clearer image".to_string(),
            ),
            uploaded_at: ts(2024, 1, 12, 16, 0, 0),
            reviewed_at: Some(ts(2024, 1, 12, 16, 30, 0)),
            reviewed_by: Some(uid(ADMIN_ID)),
        },
    ]
}

/// Generate the demo audit entries
pub fn seed_admin_actions() -> Vec<AdminAction> {
    vec![
        AdminAction {
            id: uid("f1f1f1f1-f1f1-f1f1-f1f1-f1f1f1f1f1f1"),
            admin_id: uid(ADMIN_ID),
            admin_name: "Admin User".to_string(),
            kind: AdminActionKind::KycApprove,
            target_user_id: uid(JOHN_ID),
            target_user_name: "John Doe".to_string(),
            details: "KYC approved - Passport verification successful".to_string(),
            metadata: json!({ "documentType": "passport", "documentNumber": "P123456789" }),
            created_at: ts(2024, 1, 10, 10, 0, 0),
        },
        AdminAction {
            id: uid("f2f2f2f2-f2f2-f2f2-f2f2-f2f2f2f2f2f2"),
            admin_id: uid(ADMIN_ID),
            admin_name: "Admin User".to_string(),
            kind: AdminActionKind::KycApprove,
            target_user_id: uid(SARAH_ID),
            target_user_name: "Sarah Wilson".to_string(),
            details: "KYC approved - Drivers license verification successful".to_string(),
            metadata: json!({ "documentType": "drivers_license", "documentNumber": "DL987654321" }),
            created_at: ts(2024, 1, 8, 14, 30, 0),
        },
        AdminAction {
            id: uid("f3f3f3f3-f3f3-f3f3-f3f3-f3f3f3f3f3f3"),
            admin_id: uid(ADMIN_ID),
            admin_name: "Admin User".to_string(),
            kind: AdminActionKind::KycReject,
            target_user_id: uid(EMILY_ID),
            target_user_name: "Emily Davis".to_string(),
            details: "KYC rejected - Document image quality too poor".to_string(),
            metadata: json!({
                "documentType": "drivers_license",
                "rejectionReason": "Document image quality too poor"
            }),
            created_at: ts(2024, 1, 12, 16, 30, 0),
        },
        AdminAction {
            id: uid("f4f4f4f4-f4f4-f4f4-f4f4-f4f4f4f4f4f4"),
            admin_id: uid(ADMIN_ID),
            admin_name: "Admin User".to_string(),
            kind: AdminActionKind::LimitChange,
            target_user_id: uid(MIKE_ID),
            target_user_name: "Mike Johnson".to_string(),
            details: "Reduced transaction limits due to pending KYC".to_string(),
            metadata: json!({
                "oldLimits": { "dailyTransactionLimit": 5000, "singleTransactionLimit": 2000 },
                "newLimits": { "dailyTransactionLimit": 1000, "singleTransactionLimit": 500 }
            }),
            created_at: ts(2024, 1, 15, 10, 0, 0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users_are_consistent() {
        let users = seed_users();
        assert_eq!(users.len(), 6);

        // Handles are unique
        let mut usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        usernames.sort();
        usernames.dedup();
        assert_eq!(usernames.len(), 6);

        // Exactly one admin, with a zero balance
        let admins: Vec<&User> = users.iter().filter(|u| u.is_admin).collect();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].email, "admin@paywallet.com");
        assert_eq!(admins[0].wallet_balance, Decimal::ZERO);
    }

    #[test]
    fn test_seed_references_resolve() {
        let users = seed_users();
        let ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();

        for tx in seed_transactions() {
            assert!(ids.contains(&tx.sender_id));
            assert!(ids.contains(&tx.receiver_id));
        }
        for wt in seed_wallet_transactions() {
            assert!(ids.contains(&wt.user_id));
        }
        for doc in seed_kyc_documents() {
            assert!(ids.contains(&doc.user_id));
        }
        for action in seed_admin_actions() {
            assert!(ids.contains(&action.target_user_id));
            assert!(ids.contains(&action.admin_id));
        }
    }

    #[test]
    fn test_pending_kyc_user_has_pending_document() {
        let users = seed_users();
        let mike = users.iter().find(|u| u.username == "mikejohnson").unwrap();
        assert_eq!(mike.kyc_status, KycStatus::Pending);

        let docs = seed_kyc_documents();
        let mike_docs: Vec<&KycDocument> =
            docs.iter().filter(|d| d.user_id == mike.id).collect();
        assert_eq!(mike_docs.len(), 1);
        assert_eq!(mike_docs[0].status, DocumentStatus::Pending);
    }
}
