//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod admin;
mod funding;
mod kyc;
mod transaction;
mod user;
pub mod result;

pub use admin::{AdminAction, AdminActionKind};
pub use funding::{FundingKind, FundingStatus, PaymentMethod, WalletTransaction};
pub use kyc::{DocumentStatus, KycDocument};
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
pub use user::{AccountLimits, DocumentType, KycStatus, User};
