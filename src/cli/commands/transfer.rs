//! Transfer command implementation
//!
//! Runs a single mail transfer against the configured data store.

use crate::adapters::store::factory::seeded_memory_store;
use crate::adapters::store::{create_data_stores, DataStores, MailContainerStore};
use crate::cli::{EXIT_CONFIG_ERROR, EXIT_DENIED, EXIT_OK};
use crate::config::schema::StoreBackend;
use crate::config::{load_config, MailroomConfig};
use crate::core::transfer::MailTransferService;
use crate::domain::{MailContainerNumber, MailType, MakeMailTransferRequest};
use anyhow::Context;
use clap::Args;
use std::sync::Arc;

/// Arguments for the transfer command
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Source mail container number
    #[arg(long)]
    pub from: String,

    /// Number of mail items to transfer
    #[arg(long, allow_negative_numbers = true)]
    pub items: i32,

    /// Mail type (standard-letter, large-letter, small-parcel)
    #[arg(long)]
    pub mail_type: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Evaluate and apply the transfer in memory only
    #[arg(long)]
    pub dry_run: bool,
}

impl TransferArgs {
    /// Execute the transfer command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let request = self.build_request()?;
        let dry_run = self.dry_run || config.application.dry_run;
        let stores = build_stores(&config, dry_run)?;

        let service = match MailTransferService::from_stores(&config, &stores) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        tracing::info!(
            mail_container_number = %request.source_mail_container_number,
            items = request.number_of_mail_items,
            mail_type = %request.mail_type,
            data_store = %service.data_store_kind(),
            dry_run,
            "Starting mail transfer"
        );

        let result = service
            .make_mail_transfer(&request)
            .context("Mail transfer failed")?;

        if self.json {
            println!("{}", serde_json::to_string(&result)?);
        } else if result.success() {
            println!(
                "✅ Transferred {} {} item(s) from {} via {} store{}",
                request.number_of_mail_items,
                request.mail_type,
                request.source_mail_container_number,
                service.data_store_kind(),
                if dry_run { " (dry run)" } else { "" }
            );
        } else {
            println!(
                "⛔ Transfer of {} {} item(s) from {} was not permitted",
                request.number_of_mail_items,
                request.mail_type,
                request.source_mail_container_number
            );
        }

        Ok(if result.success() { EXIT_OK } else { EXIT_DENIED })
    }

    fn build_request(&self) -> anyhow::Result<MakeMailTransferRequest> {
        let number = MailContainerNumber::new(self.from.as_str())
            .map_err(anyhow::Error::msg)
            .context("Invalid --from")?;
        let mail_type: MailType = self.mail_type.parse().context("Invalid --mail-type")?;

        Ok(MakeMailTransferRequest::new(number, self.items, mail_type))
    }
}

/// Stores for the transfer, swapped for in-memory copies on a dry run
fn build_stores(config: &MailroomConfig, dry_run: bool) -> anyhow::Result<DataStores> {
    if !dry_run || config.data_store.backend == StoreBackend::Memory {
        return Ok(create_data_stores(&config.data_store)?);
    }

    let copy = |name: &str, path: &Option<String>| -> anyhow::Result<Arc<dyn MailContainerStore>> {
        let path = path
            .as_deref()
            .with_context(|| format!("{name} store path is not configured"))?;
        Ok(Arc::new(seeded_memory_store(name, path)?))
    };

    Ok(DataStores {
        primary: copy("primary", &config.data_store.primary_path)?,
        backup: copy("backup", &config.data_store.backup_path)?,
    })
}
