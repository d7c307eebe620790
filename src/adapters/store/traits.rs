//! Mail container store abstraction
//!
//! This module defines the capability every mail container data store
//! (primary or backup) must provide. The transfer core depends only on this
//! trait, never on a storage technology.

use crate::domain::ids::MailContainerNumber;
use crate::domain::{MailContainer, Result};

/// Mail container data store
pub trait MailContainerStore: Send + Sync {
    /// Fetch a mail container by number
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(MailContainer))` if found, `Ok(None)` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read for reasons other than
    /// "not found".
    fn get_mail_container(&self, number: &MailContainerNumber) -> Result<Option<MailContainer>>;

    /// Persist a mail container
    ///
    /// The write is all-or-nothing: on error the stored container is left as
    /// it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_mail_container(&self, container: &MailContainer) -> Result<()>;

    /// Human-readable store name used in logs and errors
    fn store_name(&self) -> &str;
}
