//! Configuration management
//!
//! Settings live in `settings.json` under the paywallet directory:
//! ```json
//! {
//!   "app": { "adminEmail": "...", "adminPassword": "...", "welcomeBonus": "100" }
//! }
//! ```
//! Only the demo gate credentials, the welcome bonus and the starter limits
//! are configurable; wallet state itself is never persisted.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::AccountLimits;

const DEFAULT_ADMIN_EMAIL: &str = "admin@paywallet.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Demo credential pair for the admin portal gate
///
/// Compared in plaintext. A UI gate for the demo, not a security boundary.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    admin_email: Option<String>,
    #[serde(default)]
    admin_password: Option<String>,
    #[serde(default)]
    welcome_bonus: Option<Decimal>,
    #[serde(default)]
    default_limits: Option<AccountLimits>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// PayWallet configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub admin_email: String,
    pub admin_password: String,
    pub welcome_bonus: Decimal,
    pub default_limits: AccountLimits,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            welcome_bonus: Decimal::new(100, 0),
            default_limits: AccountLimits::default(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the paywallet directory
    ///
    /// A missing or malformed settings file falls back to defaults; the
    /// demo should never refuse to start over configuration.
    pub fn load(paywallet_dir: &Path) -> Result<Self> {
        let settings_path = paywallet_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let defaults = Config::default();
        Ok(Self {
            admin_email: raw
                .app
                .admin_email
                .clone()
                .unwrap_or(defaults.admin_email),
            admin_password: raw
                .app
                .admin_password
                .clone()
                .unwrap_or(defaults.admin_password),
            welcome_bonus: raw.app.welcome_bonus.unwrap_or(defaults.welcome_bonus),
            default_limits: raw
                .app
                .default_limits
                .clone()
                .unwrap_or(defaults.default_limits),
            _raw_settings: raw,
        })
    }

    /// Save config to the paywallet directory
    /// Preserves settings that this view doesn't manage
    pub fn save(&self, paywallet_dir: &Path) -> Result<()> {
        let settings_path = paywallet_dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.admin_email = Some(self.admin_email.clone());
        settings.app.admin_password = Some(self.admin_password.clone());
        settings.app.welcome_bonus = Some(self.welcome_bonus);
        settings.app.default_limits = Some(self.default_limits.clone());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// The admin portal gate credentials
    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials {
            email: self.admin_email.clone(),
            password: self.admin_password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.admin_email, "admin@paywallet.com");
        assert_eq!(config.admin_password, "admin123");
        assert_eq!(config.welcome_bonus, Decimal::new(100, 0));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let mut config = Config::load(dir.path()).unwrap();
        config.welcome_bonus = Decimal::new(250, 0);
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.welcome_bonus, Decimal::new(250, 0));
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.admin_email, "admin@paywallet.com");
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "app": { "theme": "dark" } }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(content.contains("theme"));
    }
}
