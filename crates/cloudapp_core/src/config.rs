//! Runtime configuration.
//!
//! # Responsibility
//! - Resolve storage, endpoint and logging settings from defaults,
//!   environment variables and explicit overrides, in that order.
//!
//! # Invariants
//! - Blank environment values are ignored.
//! - Resolution never fails; validation happens where values are used.

use crate::logging::default_log_level;
use crate::net::quote_source::DEFAULT_QUOTE_ENDPOINT;
use crate::service::note_store::NOTES_KEY;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "CLOUDAPP_DB_PATH";
pub const ENV_NOTES_KEY: &str = "CLOUDAPP_NOTES_KEY";
pub const ENV_QUOTE_URL: &str = "CLOUDAPP_QUOTE_URL";
pub const ENV_LOG_LEVEL: &str = "CLOUDAPP_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "CLOUDAPP_LOG_DIR";

const APP_DIR_NAME: &str = "cloudapp";
const DB_FILE_NAME: &str = "cloudapp.sqlite3";

/// Effective application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file holding the slot table.
    pub db_path: PathBuf,
    /// Slot key for the notes array.
    pub notes_key: String,
    /// Random-quote GET endpoint.
    pub quote_endpoint: String,
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

/// Explicit values that win over defaults and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub notes_key: Option<String>,
    pub quote_endpoint: Option<String>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let base = app_data_dir();
        Self {
            db_path: base.join(DB_FILE_NAME),
            notes_key: NOTES_KEY.to_string(),
            quote_endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: base.join("logs"),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(value) = non_blank(ENV_DB_PATH) {
            config.db_path = PathBuf::from(value);
        }
        if let Some(value) = non_blank(ENV_NOTES_KEY) {
            config.notes_key = value;
        }
        if let Some(value) = non_blank(ENV_QUOTE_URL) {
            config.quote_endpoint = value;
        }
        if let Some(value) = non_blank(ENV_LOG_LEVEL) {
            config.log_level = value;
        }
        if let Some(value) = non_blank(ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(value);
        }
        config
    }

    /// Applies explicit overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(value) = overrides.db_path {
            self.db_path = value;
        }
        if let Some(value) = overrides.notes_key {
            self.notes_key = value;
        }
        if let Some(value) = overrides.quote_endpoint {
            self.quote_endpoint = value;
        }
        if let Some(value) = overrides.log_level {
            self.log_level = value;
        }
        if let Some(value) = overrides.log_dir {
            self.log_dir = value;
        }
        self
    }
}

fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigOverrides, ENV_DB_PATH, ENV_LOG_LEVEL, ENV_QUOTE_URL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_quotable_and_notes_slot() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.quote_endpoint, "https://api.quotable.io/random");
        assert_eq!(config.notes_key, "cloudapp_notes");
        assert!(config.db_path.ends_with("cloudapp/cloudapp.sqlite3"));
    }

    #[test]
    fn env_values_override_defaults_and_blank_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DB_PATH, "/tmp/notes.db"),
            (ENV_QUOTE_URL, "   "),
            (ENV_LOG_LEVEL, " warn "),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/tmp/notes.db"));
        assert_eq!(config.quote_endpoint, "https://api.quotable.io/random");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn overrides_win_over_env() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_DB_PATH, "/tmp/env.db")]))
            .with_overrides(ConfigOverrides {
                db_path: Some(PathBuf::from("/tmp/flag.db")),
                ..ConfigOverrides::default()
            });
        assert_eq!(config.db_path, PathBuf::from("/tmp/flag.db"));
    }
}
