//! CLI command implementations

pub mod admin;
pub mod history;
pub mod kyc;
pub mod profile;
pub mod register;
pub mod request;
pub mod send;
pub mod session;
pub mod status;
pub mod topup;
pub mod users;
pub mod withdraw;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use paywallet_core::services::{EntryPoint, LogEvent, LoggingService};
use paywallet_core::{PaywalletContext, User};
use rust_decimal::Decimal;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger(entry_point: EntryPoint) -> Option<LoggingService> {
    Some(LoggingService::new(entry_point, env!("CARGO_PKG_VERSION")))
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the paywallet directory from environment or default
pub fn get_paywallet_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PAYWALLET_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".paywallet")
    }
}

/// Get or create a paywallet context
///
/// Every invocation starts from the seeded demo store; wallet state never
/// outlives the process.
pub fn get_context() -> Result<PaywalletContext> {
    let paywallet_dir = get_paywallet_dir();

    std::fs::create_dir_all(&paywallet_dir)
        .with_context(|| format!("Failed to create paywallet directory: {:?}", paywallet_dir))?;

    PaywalletContext::new(&paywallet_dir).context("Failed to initialize paywallet context")
}

/// Resolve a user by username or email, or fail with a friendly message
pub fn resolve_user(ctx: &PaywalletContext, handle: &str) -> Result<User> {
    match ctx.account_service.user_by_handle(handle)? {
        Some(user) => Ok(user),
        None => bail!("User '{}' not found", handle),
    }
}

/// Parse a dollar amount from the command line
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let cleaned = raw.trim().trim_start_matches('$');
    cleaned
        .parse::<Decimal>()
        .map_err(|_| anyhow::anyhow!("Invalid amount: {}", raw))
}
