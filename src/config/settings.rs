//! Application settings loaded from `config.toml` and the environment.
//!
//! Every section is optional. A missing file yields the defaults, which run the
//! catalog in local mode against a SQLite file under `data/`. Environment
//! variables (typically from `.env`) override the file:
//!
//! | Variable                 | Setting                 |
//! |--------------------------|-------------------------|
//! | `DATABASE_URL`           | `local.database_url`    |
//! | `FIRESTORE_PROJECT_ID`   | `remote.project_id`     |
//! | `FIRESTORE_API_KEY`      | `remote.api_key`        |
//! | `FIRESTORE_BASE_URL`     | `remote.base_url`       |
//! | `CATALOG_ADMIN_PASSCODE` | `admin.passcode`        |

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default local database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/jewel_catalog.sqlite?mode=rwc";

/// Firestore REST endpoint
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

/// Values shipped in sample configs that mean "not configured"
const PLACEHOLDERS: [&str; 2] = ["YOUR_API_KEY", "YOUR_PROJECT_ID"];

/// Whole config.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// On-device store
    pub local: LocalSettings,
    /// Hosted document store
    pub remote: RemoteSettings,
    /// Admin passcode gate
    pub admin: AdminSettings,
}

/// Local store settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalSettings {
    /// `SeaORM` connection string
    pub database_url: String,
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

/// Remote document store settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Firestore project id
    pub project_id: Option<String>,
    /// Web API key
    pub api_key: Option<String>,
    /// REST base URL, overridable for the emulator
    pub base_url: String,
    /// Transport timeout per request
    pub timeout_secs: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            project_id: None,
            api_key: None,
            base_url: DEFAULT_FIRESTORE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl RemoteSettings {
    /// Whether credentials are present and not placeholders.
    ///
    /// This is the single "remote available" decision; it is made once when the
    /// catalog is built.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let usable = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .is_some_and(|v| !v.is_empty() && !PLACEHOLDERS.contains(&v))
        };
        usable(&self.project_id) && usable(&self.api_key)
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Static passcode gate for admin screens
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// Passcode; `None` keeps the admin gate locked
    pub passcode: Option<String>,
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    /// Returns `Error::Config` when the TOML is malformed.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })
    }

    /// Applies overrides from a variable lookup (the environment in production).
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("DATABASE_URL") {
            self.local.database_url = url;
        }
        if let Some(project_id) = lookup("FIRESTORE_PROJECT_ID") {
            self.remote.project_id = Some(project_id);
        }
        if let Some(api_key) = lookup("FIRESTORE_API_KEY") {
            self.remote.api_key = Some(api_key);
        }
        if let Some(base_url) = lookup("FIRESTORE_BASE_URL") {
            self.remote.base_url = base_url;
        }
        if let Some(passcode) = lookup("CATALOG_ADMIN_PASSCODE") {
            self.admin.passcode = Some(passcode);
        }
        self
    }
}

/// Loads settings from a TOML file (if it exists) and applies environment overrides.
///
/// # Errors
/// Returns `Error::Config` if the file exists but cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let settings = if path.exists() {
        tracing::debug!("Loading settings from {:?}", path);
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read config file {path:?}: {e}"),
        })?;
        Settings::from_toml(&contents)?
    } else {
        tracing::info!("No config file at {:?}, using defaults", path);
        Settings::default()
    };

    Ok(settings.with_overrides(|key| std::env::var(key).ok()))
}

/// Loads settings from the default location (./config.toml)
///
/// # Errors
/// See [`load_settings`].
pub fn load_default_settings() -> Result<Settings> {
    load_settings("config.toml")
}
