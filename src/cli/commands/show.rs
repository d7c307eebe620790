//! Show command implementation
//!
//! Prints a mail container as held by the store the transfer service would use.

use crate::adapters::store::create_data_stores;
use crate::cli::{EXIT_CONFIG_ERROR, EXIT_DENIED, EXIT_OK};
use crate::config::load_config;
use crate::core::transfer::MailTransferService;
use crate::domain::MailContainerNumber;
use clap::Args;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Mail container number
    pub number: String,

    /// Print the container as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let number = MailContainerNumber::new(self.number.as_str()).map_err(anyhow::Error::msg)?;
        let stores = create_data_stores(&config.data_store)?;
        let service = MailTransferService::from_stores(&config, &stores)?;
        let store = service.selected_store();

        let Some(container) = store.get_mail_container(&number)? else {
            println!("❓ Mail container {number} not found in {} store", store.store_name());
            return Ok(EXIT_DENIED);
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&container)?);
            return Ok(EXIT_OK);
        }

        println!("📦 Mail container {}", container.mail_container_number);
        println!("  Store: {}", store.store_name());
        println!("  Allowed Mail Types: {}", container.allowed_mail_type);
        println!("  Capacity: {}", container.capacity);
        println!("  Status: {}", container.status);

        Ok(EXIT_OK)
    }
}
