//! Configuration schema types
//!
//! This module defines the configuration structure for Mailroom.

use serde::{Deserialize, Serialize};

/// Backing technology for the primary and backup stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON document on disk
    #[default]
    Json,
    /// In-process map, optionally seeded from a JSON document
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Json => write!(f, "json"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Main Mailroom configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MailroomConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Data store settings
    #[serde(default)]
    pub data_store: DataStoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MailroomConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.data_store.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (transfers run against an in-memory copy of the selected store)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Data store configuration
///
/// `data_store_type` is the store selector read by the transfer service:
/// the exact value `"Backup"` routes transfers through the backup store,
/// anything else through the primary store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataStoreConfig {
    /// Store selector (`DataStoreType`)
    #[serde(default, alias = "DataStoreType")]
    pub data_store_type: Option<String>,

    /// Backing technology shared by both stores
    #[serde(default)]
    pub backend: StoreBackend,

    /// Primary store document path
    #[serde(default)]
    pub primary_path: Option<String>,

    /// Backup store document path
    #[serde(default)]
    pub backup_path: Option<String>,
}

impl DataStoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.data_store_type.is_none() {
            return Err("data_store.data_store_type is required".to_string());
        }

        if self.backend == StoreBackend::Json {
            if blank(&self.primary_path) {
                return Err(
                    "data_store.primary_path is required when backend = 'json'".to_string()
                );
            }
            if blank(&self.backup_path) {
                return Err(
                    "data_store.backup_path is required when backend = 'json'".to_string()
                );
            }
        }

        Ok(())
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "/var/log/mailroom".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
