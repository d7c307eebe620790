//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{MailroomConfig, StoreBackend};
use crate::domain::errors::MailroomError;
use crate::domain::result::Result;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MailroomConfig
/// 4. Applies environment variable overrides (MAILROOM_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`MailroomError::Configuration`] if any step fails.
///
/// # Examples
///
/// ```no_run
/// use mailroom::config::loader::load_config;
///
/// let config = load_config("mailroom.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MailroomConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MailroomError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MailroomError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;

    tracing::debug!(
        path = %path.display(),
        data_store_type = ?config.data_store.data_store_type,
        backend = %config.data_store.backend,
        "Configuration loaded"
    );

    Ok(config)
}

/// Parses configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file read.
pub fn parse_config(contents: &str) -> Result<MailroomConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: MailroomConfig = toml::from_str(&contents)
        .map_err(|e| MailroomError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MailroomError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Matches either a `${VAR}` placeholder (group 1) or a `#` comment running
/// to the end of the line
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)#.*$|\$\{([A-Z_][A-Z0-9_]*)\}")
            .expect("placeholder pattern is a valid regex")
    })
}

/// Replaces `${VAR}` placeholders with environment values
///
/// Text after a `#` is left as written, so commented-out settings may
/// reference variables that are not set.
///
/// # Errors
///
/// Returns a configuration error naming every unset variable.
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut missing = BTreeSet::new();

    let substituted = placeholder_pattern().replace_all(input, |caps: &Captures<'_>| {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            return caps[0].to_string();
        };
        std::env::var(name).unwrap_or_else(|_| {
            missing.insert(name.to_string());
            String::new()
        })
    });

    if !missing.is_empty() {
        let names: Vec<String> = missing.into_iter().collect();
        return Err(MailroomError::Configuration(format!(
            "Missing required environment variables: {}",
            names.join(", ")
        )));
    }

    Ok(substituted.into_owned())
}

/// Applies environment variable overrides using MAILROOM_* prefix
///
/// Environment variables follow the pattern: MAILROOM_<SECTION>_<KEY>,
/// e.g. MAILROOM_DATA_STORE_TYPE, MAILROOM_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut MailroomConfig) -> Result<()> {
    if let Ok(val) = std::env::var("MAILROOM_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("MAILROOM_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    if let Ok(val) = std::env::var("MAILROOM_DATA_STORE_TYPE") {
        config.data_store.data_store_type = Some(val);
    }
    if let Ok(val) = std::env::var("MAILROOM_DATA_STORE_BACKEND") {
        config.data_store.backend = match val.to_lowercase().as_str() {
            "json" => StoreBackend::Json,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(MailroomError::Configuration(format!(
                    "Invalid MAILROOM_DATA_STORE_BACKEND '{other}'. Must be one of: json, memory"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("MAILROOM_DATA_STORE_PRIMARY_PATH") {
        config.data_store.primary_path = Some(val);
    }
    if let Ok(val) = std::env::var("MAILROOM_DATA_STORE_BACKUP_PATH") {
        config.data_store.backup_path = Some(val);
    }

    if let Ok(val) = std::env::var("MAILROOM_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MAILROOM_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
