//! Mail transfer coordination
//!
//! - [`selection`] - Resolves the configured store selector into a [`DataStoreKind`]
//! - [`service`] - [`MailTransferService`], which runs one transfer end to end
//!
//! # Example
//!
//! ```rust,no_run
//! use mailroom::adapters::store::create_data_stores;
//! use mailroom::config::load_config;
//! use mailroom::core::transfer::MailTransferService;
//! use mailroom::domain::{MailContainerNumber, MailType, MakeMailTransferRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mailroom.toml")?;
//! let stores = create_data_stores(&config.data_store)?;
//! let service = MailTransferService::from_stores(&config, &stores)?;
//!
//! let request = MakeMailTransferRequest::new(
//!     MailContainerNumber::new("MC-1")?,
//!     3,
//!     MailType::LargeLetter,
//! );
//! let result = service.make_mail_transfer(&request)?;
//! println!("Transfer succeeded: {}", result.success());
//! # Ok(())
//! # }
//! ```

pub mod selection;
pub mod service;

pub use selection::{DataStoreKind, TransferSettings, DATA_STORE_TYPE_BACKUP_VALUE};
pub use service::MailTransferService;
