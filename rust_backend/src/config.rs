//! Configuration file support.
//!
//! This module reads store and query settings from a TOML file:
//!
//! ```toml
//! [store]
//! type = "json"          # "json" | "local"
//!
//! [json]
//! directory = "./schedule"
//!
//! [query]
//! arrival_window_minutes = 5
//! ```

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::factory::StoreType;
use crate::db::store::StoreError;

/// Environment variable overriding `[store] type`.
pub const STORE_TYPE_ENV: &str = "SCHEDULE_STORE";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub store: StoreSettings,
    #[serde(default)]
    pub json: JsonStoreSettings,
    #[serde(default)]
    pub query: QuerySettings,
}

/// Store type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "type")]
    pub store_type: String,
}

/// JSON file store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonStoreSettings {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

/// Temporal query settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySettings {
    #[serde(default = "default_arrival_window_minutes")]
    pub arrival_window_minutes: i64,
}

fn default_directory() -> PathBuf {
    PathBuf::from("./schedule")
}

fn default_arrival_window_minutes() -> i64 {
    5
}

impl Default for JsonStoreSettings {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            arrival_window_minutes: default_arrival_window_minutes(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            store: StoreSettings {
                store_type: StoreType::Json.to_string(),
            },
            json: JsonStoreSettings::default(),
            query: QuerySettings::default(),
        }
    }
}

impl ScheduleConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ScheduleConfig)` if successful
    /// * `Err(StoreError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, StoreError> {
        toml::from_str(content).map_err(|e| {
            StoreError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `schedule.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, StoreError> {
        let search_paths = [
            PathBuf::from("schedule.toml"),
            PathBuf::from("rust_backend/schedule.toml"),
            PathBuf::from("../schedule.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::ConfigurationError(
            "No schedule.toml found in standard locations".to_string(),
        ))
    }

    /// Store type as written in the file.
    pub fn store_type(&self) -> Result<StoreType, StoreError> {
        self.store.store_type.parse().map_err(|e| {
            StoreError::ConfigurationError(format!("Invalid store type: {}", e))
        })
    }

    /// Store type after applying the `SCHEDULE_STORE` override.
    pub fn resolved_store_type(&self) -> Result<StoreType, StoreError> {
        self.store_type_with_override(std::env::var(STORE_TYPE_ENV).ok().as_deref())
    }

    /// Store type, with `value` taking precedence over the file when set.
    ///
    /// An unknown override is an error, not a fallback to the file setting.
    pub fn store_type_with_override(&self, value: Option<&str>) -> Result<StoreType, StoreError> {
        match value {
            Some(value) => value.parse().map_err(|e| {
                StoreError::ConfigurationError(format!("Invalid {}: {}", STORE_TYPE_ENV, e))
            }),
            None => self.store_type(),
        }
    }

    /// Width of the "arriving now" window.
    pub fn arrival_window(&self) -> Result<Duration, StoreError> {
        if self.query.arrival_window_minutes <= 0 {
            return Err(StoreError::ConfigurationError(format!(
                "query.arrival_window_minutes must be positive, got {}",
                self.query.arrival_window_minutes
            )));
        }
        Ok(Duration::minutes(self.query.arrival_window_minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_config() {
        let toml = r#"
[store]
type = "json"

[json]
directory = "/var/lib/schedule"

[query]
arrival_window_minutes = 10
"#;

        let config = ScheduleConfig::from_toml(toml).unwrap();
        assert_eq!(config.store_type().unwrap(), StoreType::Json);
        assert_eq!(config.json.directory, PathBuf::from("/var/lib/schedule"));
        assert_eq!(config.arrival_window().unwrap(), Duration::minutes(10));
    }

    #[test]
    fn test_parse_local_config_uses_defaults() {
        let toml = r#"
[store]
type = "LOCAL"
"#;

        let config = ScheduleConfig::from_toml(toml).unwrap();
        assert_eq!(config.store_type().unwrap(), StoreType::Local);
        assert_eq!(config.json.directory, PathBuf::from("./schedule"));
        assert_eq!(config.arrival_window().unwrap(), Duration::minutes(5));
    }

    #[test]
    fn test_store_section_is_required() {
        let result = ScheduleConfig::from_toml("[query]\narrival_window_minutes = 5\n");
        assert!(matches!(result, Err(StoreError::ConfigurationError(_))));
    }

    #[test]
    fn test_unknown_store_type() {
        let config = ScheduleConfig::from_toml("[store]\ntype = \"postgres\"\n").unwrap();
        assert!(config.store_type().is_err());
    }

    #[test]
    fn test_non_positive_window_rejected() {
        let config =
            ScheduleConfig::from_toml("[store]\ntype = \"local\"\n[query]\narrival_window_minutes = 0\n")
                .unwrap();
        assert!(config.arrival_window().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("schedule.toml");
        std::fs::write(&path, "[store]\ntype = \"local\"\n").unwrap();

        let config = ScheduleConfig::from_file(&path).unwrap();
        assert_eq!(config.store_type().unwrap(), StoreType::Local);

        assert!(ScheduleConfig::from_file(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_store_type_override() {
        let config = ScheduleConfig::from_toml("[store]\ntype = \"json\"\n").unwrap();

        assert_eq!(config.store_type_with_override(None).unwrap(), StoreType::Json);
        assert_eq!(
            config.store_type_with_override(Some("memory")).unwrap(),
            StoreType::Local
        );

        let err = config.store_type_with_override(Some("postgres")).unwrap_err();
        assert!(matches!(err, StoreError::ConfigurationError(_)));
        assert!(err.to_string().contains("SCHEDULE_STORE"));
    }

    #[test]
    fn test_default_config() {
        let config = ScheduleConfig::default();
        assert_eq!(config.store_type().unwrap(), StoreType::Json);
        assert_eq!(config.arrival_window().unwrap(), Duration::minutes(5));
    }
}
