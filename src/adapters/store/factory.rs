//! Mail container store factory
//!
//! Builds the primary and backup stores from configuration.

use super::json_file::JsonFileMailContainerStore;
use super::memory::InMemoryMailContainerStore;
use super::traits::MailContainerStore;
use crate::config::schema::{DataStoreConfig, StoreBackend};
use crate::domain::{MailroomError, Result};
use std::sync::Arc;

pub const PRIMARY_STORE_NAME: &str = "primary";
pub const BACKUP_STORE_NAME: &str = "backup";

/// The two interchangeable stores a transfer service chooses between
#[derive(Clone)]
pub struct DataStores {
    pub primary: Arc<dyn MailContainerStore>,
    pub backup: Arc<dyn MailContainerStore>,
}

/// Create both data stores based on the configuration
///
/// # Errors
///
/// Returns an error if a JSON backend is missing a path, or if a memory
/// backend's seed document cannot be loaded.
pub fn create_data_stores(config: &DataStoreConfig) -> Result<DataStores> {
    let primary = create_store(
        config.backend,
        PRIMARY_STORE_NAME,
        config.primary_path.as_deref(),
    )?;
    let backup = create_store(
        config.backend,
        BACKUP_STORE_NAME,
        config.backup_path.as_deref(),
    )?;

    Ok(DataStores { primary, backup })
}

fn create_store(
    backend: StoreBackend,
    name: &str,
    path: Option<&str>,
) -> Result<Arc<dyn MailContainerStore>> {
    match backend {
        StoreBackend::Json => {
            let path = path.ok_or_else(|| {
                MailroomError::Configuration(format!(
                    "{name} store path is required for the json backend"
                ))
            })?;

            tracing::info!(store = name, path = path, "Creating JSON file store");
            Ok(Arc::new(JsonFileMailContainerStore::new(name, path)))
        }
        StoreBackend::Memory => {
            let store = match path {
                Some(path) => seeded_memory_store(name, path)?,
                None => InMemoryMailContainerStore::new(name),
            };

            tracing::info!(store = name, seed = ?path, "Creating in-memory store");
            Ok(Arc::new(store))
        }
    }
}

/// In-memory store holding a copy of a JSON document's containers
///
/// Writes stay in memory; the document on disk is never modified.
pub fn seeded_memory_store(name: &str, path: &str) -> Result<InMemoryMailContainerStore> {
    let containers = JsonFileMailContainerStore::new(name, path).load_all()?;
    Ok(InMemoryMailContainerStore::with_containers(name, containers))
}
