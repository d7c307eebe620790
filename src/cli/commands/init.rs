//! Init command implementation
//!
//! Generates a sample configuration file.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mailroom.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point primary_path and backup_path at your container documents");
                println!("  2. Set data_store_type to \"Backup\" to route through the backup store");
                println!("  3. Validate configuration: mailroom validate-config");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    pub(crate) fn sample_config() -> &'static str {
        r#"# Mailroom Configuration File

[application]
# trace, debug, info, warn, error
log_level = "info"
# Run transfers against an in-memory copy of the stores
dry_run = false

[data_store]
# "Backup" (exact, case-sensitive) reads and writes through the backup store.
# Any other value uses the primary store.
data_store_type = "Primary"
# json or memory
backend = "json"
primary_path = "data/primary.json"
backup_path = "data/backup.json"

[logging]
local_enabled = false
local_path = "logs"
# daily, hourly, never
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_is_valid() {
        let config = parse_config(InitArgs::sample_config()).unwrap();
        assert_eq!(config.data_store.data_store_type.as_deref(), Some("Primary"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("mailroom.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), EXIT_CONFIG_ERROR);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().unwrap(), EXIT_OK);
        assert!(fs::read_to_string(&output).unwrap().contains("[data_store]"));
    }
}
