//! PayWallet Core - Business logic for the peer-to-peer wallet demo
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Transaction, etc.)
//! - **ports**: Trait definitions for external dependencies (Repository, AuthProvider)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory store, mock auth, seed data)
//!
//! All state is an in-memory store seeded at context creation; nothing is
//! persisted and every process starts from the same demo dataset.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::MemoryStore;
use config::Config;
use ports::Repository;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{
    AccountLimits, AdminAction, KycDocument, KycStatus, Transaction, User, WalletTransaction,
};

/// Main context for PayWallet operations
///
/// This is the primary entry point for all business logic. It holds the
/// store, configuration, and all services.
pub struct PaywalletContext {
    pub config: Config,
    pub store: Arc<MemoryStore>,
    pub account_service: AccountService,
    pub transfer_service: TransferService,
    pub wallet_service: WalletService,
    pub kyc_service: KycService,
    pub admin_service: AdminService,
    pub history_service: HistoryService,
    pub stats_service: StatsService,
}

impl PaywalletContext {
    /// Create a new PayWallet context with the seeded demo store
    pub fn new(paywallet_dir: &Path) -> Result<Self> {
        let config = Config::load(paywallet_dir)?;
        Ok(Self::with_store(config, Arc::new(MemoryStore::seeded())))
    }

    /// Create a context over an explicit store (tests, empty stores)
    pub fn with_store(config: Config, store: Arc<MemoryStore>) -> Self {
        let repository: Arc<dyn Repository> = store.clone();

        let account_service = AccountService::new(
            Arc::clone(&repository),
            config.welcome_bonus,
            config.default_limits.clone(),
        );
        let transfer_service = TransferService::new(Arc::clone(&repository));
        let wallet_service = WalletService::new(Arc::clone(&repository));
        let kyc_service = KycService::new(Arc::clone(&repository));
        let admin_service =
            AdminService::new(Arc::clone(&repository), config.admin_credentials());
        let history_service = HistoryService::new(Arc::clone(&repository));
        let stats_service = StatsService::new(Arc::clone(&repository));

        Self {
            config,
            store,
            account_service,
            transfer_service,
            wallet_service,
            kyc_service,
            admin_service,
            history_service,
            stats_service,
        }
    }
}
