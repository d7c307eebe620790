//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables hold ENV_MUTEX so they do not
//! interfere with each other.

use mailroom::config::{load_config, ConfigurationSource, StoreBackend, DATA_STORE_TYPE_KEY};
use mailroom::core::transfer::{DataStoreKind, TransferSettings};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    let guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    guard
}

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("MAILROOM_APPLICATION_LOG_LEVEL");
    std::env::remove_var("MAILROOM_APPLICATION_DRY_RUN");
    std::env::remove_var("MAILROOM_DATA_STORE_TYPE");
    std::env::remove_var("MAILROOM_DATA_STORE_BACKEND");
    std::env::remove_var("MAILROOM_DATA_STORE_PRIMARY_PATH");
    std::env::remove_var("MAILROOM_DATA_STORE_BACKUP_PATH");
    std::env::remove_var("MAILROOM_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("TEST_MAILROOM_DATA_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = true

[data_store]
data_store_type = "Backup"
backend = "json"
primary_path = "/srv/mail/primary.json"
backup_path = "/srv/mail/backup.json"

[logging]
local_enabled = true
local_path = "/tmp/mailroom"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);

    assert_eq!(config.data_store.data_store_type.as_deref(), Some("Backup"));
    assert_eq!(config.data_store.backend, StoreBackend::Json);
    assert_eq!(
        config.data_store.primary_path.as_deref(),
        Some("/srv/mail/primary.json")
    );
    assert_eq!(
        config.data_store.backup_path.as_deref(),
        Some("/srv/mail/backup.json")
    );

    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/mailroom");
    assert_eq!(config.logging.local_rotation, "hourly");

    assert_eq!(
        TransferSettings::from_source(&config).unwrap().data_store_kind,
        DataStoreKind::Backup
    );
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
data_store_type = "Primary"
backend = "memory"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.data_store.primary_path, None);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_pascal_case_selector_key_is_accepted() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
DataStoreType = "Backup"
backend = "memory"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(
        config.get_string(DATA_STORE_TYPE_KEY).as_deref(),
        Some("Backup")
    );
}

#[test]
fn test_selector_match_is_case_sensitive() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
data_store_type = "backup"
backend = "memory"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(
        TransferSettings::from_source(&config).unwrap().data_store_kind,
        DataStoreKind::Primary
    );
}

#[test]
fn test_env_overrides() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[application]
log_level = "info"

[data_store]
data_store_type = "Primary"
backend = "json"
primary_path = "primary.json"
backup_path = "backup.json"
"#,
    );

    std::env::set_var("MAILROOM_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("MAILROOM_APPLICATION_DRY_RUN", "true");
    std::env::set_var("MAILROOM_DATA_STORE_TYPE", "Backup");
    std::env::set_var("MAILROOM_DATA_STORE_BACKUP_PATH", "other-backup.json");

    let result = load_config(temp_file.path());
    cleanup_env_vars();
    let config = result.unwrap();

    assert_eq!(config.application.log_level, "trace");
    assert!(config.application.dry_run);
    assert_eq!(config.data_store.data_store_type.as_deref(), Some("Backup"));
    assert_eq!(config.data_store.primary_path.as_deref(), Some("primary.json"));
    assert_eq!(
        config.data_store.backup_path.as_deref(),
        Some("other-backup.json")
    );
}

#[test]
fn test_env_override_supplies_missing_selector() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
backend = "memory"
"#,
    );

    std::env::set_var("MAILROOM_DATA_STORE_TYPE", "Backup");
    let result = load_config(temp_file.path());
    cleanup_env_vars();

    assert_eq!(
        result.unwrap().data_store.data_store_type.as_deref(),
        Some("Backup")
    );
}

#[test]
fn test_invalid_backend_override() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
data_store_type = "Primary"
backend = "memory"
"#,
    );

    std::env::set_var("MAILROOM_DATA_STORE_BACKEND", "sqlite");
    let result = load_config(temp_file.path());
    cleanup_env_vars();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("MAILROOM_DATA_STORE_BACKEND"));
}

#[test]
fn test_env_var_substitution() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
data_store_type = "Primary"
backend = "json"
primary_path = "${TEST_MAILROOM_DATA_DIR}/primary.json"
backup_path = "${TEST_MAILROOM_DATA_DIR}/backup.json"
"#,
    );

    std::env::set_var("TEST_MAILROOM_DATA_DIR", "/data/mail");
    let result = load_config(temp_file.path());
    cleanup_env_vars();
    let config = result.unwrap();

    assert_eq!(
        config.data_store.primary_path.as_deref(),
        Some("/data/mail/primary.json")
    );
    assert_eq!(
        config.data_store.backup_path.as_deref(),
        Some("/data/mail/backup.json")
    );
}

#[test]
fn test_missing_env_var_substitution() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
data_store_type = "Primary"
backend = "json"
primary_path = "${TEST_MAILROOM_DATA_DIR}/primary.json"
backup_path = "backup.json"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_MAILROOM_DATA_DIR"));
}

#[test]
fn test_missing_selector_is_rejected() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
backend = "memory"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("data_store_type"));
}

#[test]
fn test_json_backend_requires_paths() {
    let _env = lock_env();
    let temp_file = write_config(
        r#"
[data_store]
data_store_type = "Primary"
backend = "json"
primary_path = "primary.json"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("backup_path"));
}

#[test]
fn test_invalid_toml() {
    let _env = lock_env();
    let temp_file = write_config("[data_store\nbackend = ");

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_config_file_not_found() {
    let _env = lock_env();
    let err = load_config("/nonexistent/mailroom.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
