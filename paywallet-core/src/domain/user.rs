//! User domain model

use chrono::{DateTime, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::{Error, Result};

/// KYC verification state of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    NotStarted,
    Pending,
    Verified,
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotStarted => "not_started",
            KycStatus::Pending => "pending",
            KycStatus::Verified => "verified",
            KycStatus::Rejected => "rejected",
        }
    }
}

/// Identity document kind accepted for KYC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Passport,
    DriversLicense,
    NationalId,
    UtilityBill,
    BankStatement,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Passport => "passport",
            DocumentType::DriversLicense => "drivers_license",
            DocumentType::NationalId => "national_id",
            DocumentType::UtilityBill => "utility_bill",
            DocumentType::BankStatement => "bank_statement",
            DocumentType::Other => "other",
        }
    }

    /// Parse from the snake_case wire form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "passport" => Some(DocumentType::Passport),
            "drivers_license" => Some(DocumentType::DriversLicense),
            "national_id" => Some(DocumentType::NationalId),
            "utility_bill" => Some(DocumentType::UtilityBill),
            "bank_statement" => Some(DocumentType::BankStatement),
            "other" => Some(DocumentType::Other),
            _ => None,
        }
    }
}

/// Per-user transaction limits, adjustable by admins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLimits {
    pub daily_transaction_limit: Decimal,
    pub monthly_transaction_limit: Decimal,
    pub single_transaction_limit: Decimal,
}

impl AccountLimits {
    pub fn new(daily: Decimal, monthly: Decimal, single: Decimal) -> Self {
        Self {
            daily_transaction_limit: daily,
            monthly_transaction_limit: monthly,
            single_transaction_limit: single,
        }
    }
}

impl Default for AccountLimits {
    fn default() -> Self {
        // Limits granted to freshly registered accounts
        Self::new(
            Decimal::new(1_000, 0),
            Decimal::new(10_000, 0),
            Decimal::new(500, 0),
        )
    }
}

/// A wallet user: identity, balance, KYC state, risk and moderation flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique handle, stored lowercase
    pub username: String,
    pub display_name: String,
    /// Unique, stored lowercase
    pub email: String,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub wallet_balance: Decimal,

    pub kyc_status: KycStatus,
    pub kyc_document_type: Option<DocumentType>,
    pub kyc_document_number: Option<String>,
    pub kyc_document_url: Option<String>,
    pub kyc_submitted_at: Option<DateTime<Utc>>,
    pub kyc_verified_at: Option<DateTime<Utc>>,
    pub kyc_rejection_reason: Option<String>,
    /// Admin who verified
    pub kyc_verified_by: Option<Uuid>,

    pub last_login_at: Option<DateTime<Utc>>,
    pub login_count: u32,
    pub device_info: Option<String>,
    pub ip_address: Option<String>,
    /// 0-100, higher = more risky. Static, no computed derivation.
    pub risk_score: u8,
    pub account_limits: AccountLimits,

    pub is_admin: bool,
    pub is_active: bool,
    pub is_suspended: bool,
    pub suspension_reason: Option<String>,
    pub suspended_by: Option<Uuid>,
    pub suspended_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with required fields; everything else defaults
    pub fn new(
        id: Uuid,
        username: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: username.into().to_lowercase(),
            display_name: display_name.into(),
            email: email.into().to_lowercase(),
            phone_number: None,
            avatar_url: None,
            wallet_balance: Decimal::ZERO,
            kyc_status: KycStatus::NotStarted,
            kyc_document_type: None,
            kyc_document_number: None,
            kyc_document_url: None,
            kyc_submitted_at: None,
            kyc_verified_at: None,
            kyc_rejection_reason: None,
            kyc_verified_by: None,
            last_login_at: None,
            login_count: 0,
            device_info: None,
            ip_address: None,
            risk_score: 0,
            account_limits: AccountLimits::default(),
            is_admin: false,
            is_active: true,
            is_suspended: false,
            suspension_reason: None,
            suspended_by: None,
            suspended_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate a username: 3-20 chars, letters/digits/underscores only
    pub fn validate_username(username: &str) -> Result<()> {
        if username.is_empty() {
            return Err(Error::validation("Username is required"));
        }
        if username.len() < 3 {
            return Err(Error::validation("Username must be at least 3 characters"));
        }
        if username.len() > 20 {
            return Err(Error::validation("Username must be less than 20 characters"));
        }
        let re = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
        if !re.is_match(username) {
            return Err(Error::validation(
                "Username can only contain letters, numbers, and underscores",
            ));
        }
        Ok(())
    }

    /// Validate a display name: non-empty, at least 2 chars
    pub fn validate_display_name(display_name: &str) -> Result<()> {
        let trimmed = display_name.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("Display name is required"));
        }
        if trimmed.len() < 2 {
            return Err(Error::validation(
                "Display name must be at least 2 characters",
            ));
        }
        Ok(())
    }

    /// Validate an email address
    pub fn validate_email(email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(Error::validation("Email is required"));
        }
        let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
        if !re.is_match(email) {
            return Err(Error::validation("Please enter a valid email address"));
        }
        Ok(())
    }

    /// Validate a phone number (optional field; validated only when present)
    pub fn validate_phone_number(phone: &str) -> Result<()> {
        let re = Regex::new(r"^\+?[\d\s\-()]+$").unwrap();
        if !re.is_match(phone) {
            return Err(Error::validation("Please enter a valid phone number"));
        }
        Ok(())
    }

    /// Whether the user can participate in money movement
    pub fn is_operational(&self) -> bool {
        self.is_active && !self.is_suspended
    }
}
