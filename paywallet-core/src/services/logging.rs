//! Logging service - structured event logging
//!
//! Privacy-safe session event log: no balances, amounts, descriptions or
//! other user data are ever recorded, only event names and command/screen
//! context. Entries live in memory and vanish with the process, like every
//! other piece of state here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique ID based on timestamp + counter
fn generate_id() -> u64 {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    // Lower 48 bits of timestamp, upper 16 bits of counter
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    (timestamp << 16) | counter
}

/// Current unix timestamp in milliseconds
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Cli,
    Session,
}

impl EntryPoint {
    fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Cli => "cli",
            EntryPoint::Session => "session",
        }
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            screen: None,
            error_message: None,
            error_details: None,
        }
    }

    /// Set the command context (for CLI events)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the screen context (for interactive session events)
    pub fn with_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(screen.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Set error details (additional context)
    pub fn with_error_details(mut self, details: impl Into<String>) -> Self {
        self.error_details = Some(details.into());
        self
    }
}

/// A recorded log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: i64,
    pub entry_point: String,
    pub app_version: String,
    pub platform: String,
    pub event: String,
    pub command: Option<String>,
    pub screen: Option<String>,
    pub error_message: Option<String>,
    pub error_details: Option<String>,
}

/// Service for structured event logging
pub struct LoggingService {
    entries: Mutex<Vec<LogEntry>>,
    entry_point: EntryPoint,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    /// Create a new logging service
    pub fn new(entry_point: EntryPoint, app_version: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            entry_point,
            app_version: app_version.into(),
            platform: detect_platform(),
        }
    }

    /// Log an event
    ///
    /// Entry point, app version and platform are filled in from the service
    /// configuration.
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| Error::store(format!("log lock poisoned: {}", e)))?;

        entries.push(LogEntry {
            id: generate_id(),
            timestamp: now_ms(),
            entry_point: self.entry_point.as_str().to_string(),
            app_version: self.app_version.clone(),
            platform: self.platform.to_string(),
            event: event.event,
            command: event.command,
            screen: event.screen,
            error_message: event.error_message,
            error_details: event.error_details,
        });
        Ok(())
    }

    /// Log a simple event with just a name
    pub fn log_event(&self, event: &str) -> Result<()> {
        self.log(LogEvent::new(event))
    }

    /// Log a CLI command execution
    pub fn log_command(&self, command: &str) -> Result<()> {
        self.log(LogEvent::new("command_executed").with_command(command))
    }

    /// Log a screen navigation in the interactive session
    pub fn log_screen(&self, screen: &str) -> Result<()> {
        self.log(LogEvent::new("screen_opened").with_screen(screen))
    }

    /// Log an error
    pub fn log_error(&self, event: &str, message: &str, details: Option<&str>) -> Result<()> {
        let mut log_event = LogEvent::new(event).with_error(message);
        if let Some(d) = details {
            log_event = log_event.with_error_details(d);
        }
        self.log(log_event)
    }

    /// The most recent entries, up to the given limit
    pub fn get_recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| Error::store(format!("log lock poisoned: {}", e)))?;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    /// The most recent entries carrying errors
    pub fn get_errors(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| Error::store(format!("log lock poisoned: {}", e)))?;
        Ok(entries
            .iter()
            .rev()
            .filter(|e| e.error_message.is_some())
            .take(limit)
            .cloned()
            .collect())
    }

    /// Total number of recorded entries
    pub fn count(&self) -> Result<u64> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| Error::store(format!("log lock poisoned: {}", e)))?;
        Ok(entries.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        let service = LoggingService::new(EntryPoint::Cli, "1.0.0");

        service.log_event("test_event").unwrap();

        let entries = service.get_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, "test_event");
        assert_eq!(entries[0].entry_point, "cli");
        assert_eq!(entries[0].app_version, "1.0.0");
    }

    #[test]
    fn test_log_with_context() {
        let service = LoggingService::new(EntryPoint::Session, "2.0.0");

        service
            .log(
                LogEvent::new("transfer_completed")
                    .with_screen("send_money")
                    .with_command("send"),
            )
            .unwrap();

        let entries = service.get_recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, "transfer_completed");
        assert_eq!(entries[0].screen, Some("send_money".to_string()));
        assert_eq!(entries[0].command, Some("send".to_string()));
        assert_eq!(entries[0].entry_point, "session");
    }

    #[test]
    fn test_log_error_and_filter() {
        let service = LoggingService::new(EntryPoint::Cli, "1.0.0");

        service.log_event("plain_event").unwrap();
        service
            .log_error("transfer_failed", "Insufficient balance", Some("send flow"))
            .unwrap();

        let errors = service.get_errors(10).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].event, "transfer_failed");
        assert_eq!(
            errors[0].error_message,
            Some("Insufficient balance".to_string())
        );
        assert_eq!(errors[0].error_details, Some("send flow".to_string()));
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let service = LoggingService::new(EntryPoint::Cli, "1.0.0");
        service.log_event("first").unwrap();
        service.log_event("second").unwrap();
        service.log_event("third").unwrap();

        let entries = service.get_recent(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].event, "third");
        assert_eq!(entries[1].event, "second");
    }
}
