//! Configuration management for Mailroom.
//!
//! Mailroom uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MAILROOM_*` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [data_store]
//! # "Backup" routes transfers through the backup store; any other value
//! # uses the primary store
//! data_store_type = "Primary"
//! backend = "json"
//! primary_path = "data/primary.json"
//! backup_path = "${MAILROOM_BACKUP_PATH}"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mailroom::config::{load_config, ConfigurationSource, DATA_STORE_TYPE_KEY};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mailroom.toml")?;
//! println!("Selector: {:?}", config.get_string(DATA_STORE_TYPE_KEY));
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod source;

pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, DataStoreConfig, LoggingConfig, MailroomConfig, StoreBackend};
pub use source::{ConfigurationSource, DATA_STORE_TYPE_KEY};
