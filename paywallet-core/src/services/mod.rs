//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod account;
mod admin;
mod history;
mod kyc;
pub mod logging;
mod stats;
mod transfer;
mod wallet;

pub use account::{AccountService, RegisterRequest};
pub use admin::AdminService;
pub use history::{Direction, HistoryEntry, HistoryFilter, HistoryService};
pub use kyc::KycService;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use stats::{PlatformStats, StatsService};
pub use transfer::{MoneyRequest, TransferService};
pub use wallet::WalletService;
