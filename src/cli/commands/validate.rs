//! Validate config command implementation

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_OK};
use crate::config::load_config;
use crate::config::schema::StoreBackend;
use crate::core::transfer::TransferSettings;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let settings = match TransferSettings::from_source(&config) {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!(
            "  Data Store Type: {} ({} store)",
            config.data_store.data_store_type.as_deref().unwrap_or(""),
            settings.data_store_kind
        );
        println!("  Backend: {}", config.data_store.backend);
        if config.data_store.backend == StoreBackend::Json {
            println!(
                "  Primary Path: {}",
                config.data_store.primary_path.as_deref().unwrap_or("")
            );
            println!(
                "  Backup Path: {}",
                config.data_store.backup_path.as_deref().unwrap_or("")
            );
        }
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();

        Ok(EXIT_OK)
    }
}
