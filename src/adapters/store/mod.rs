//! Mail container data stores
//!
//! A trait-based abstraction over the primary and backup stores, plus the
//! JSON file and in-memory implementations used by the CLI.

pub mod factory;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use factory::{create_data_stores, DataStores, BACKUP_STORE_NAME, PRIMARY_STORE_NAME};
pub use json_file::JsonFileMailContainerStore;
pub use memory::InMemoryMailContainerStore;
pub use traits::MailContainerStore;
