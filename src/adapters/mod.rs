//! External system integrations for Mailroom.
//!
//! - [`store`] - Mail container data stores (trait, JSON file, in-memory)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate storage technology from
//! the transfer core and enable testing with recording implementations.
//!
//! ```rust,no_run
//! use mailroom::adapters::store::{create_data_stores, MailContainerStore};
//! use mailroom::config::load_config;
//! use mailroom::domain::MailContainerNumber;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mailroom.toml")?;
//! let stores = create_data_stores(&config.data_store)?;
//! let container = stores
//!     .primary
//!     .get_mail_container(&MailContainerNumber::new("MC-1")?)?;
//! # let _ = container;
//! # Ok(())
//! # }
//! ```

pub mod store;
