//! Data store selection
//!
//! The store selector is a plain configuration string. It is resolved once,
//! at service construction, into a [`DataStoreKind`].

use crate::config::{ConfigurationSource, DATA_STORE_TYPE_KEY};
use crate::domain::{MailroomError, Result};
use serde::Serialize;
use std::fmt;

/// Selector value that routes transfers through the backup store
pub const DATA_STORE_TYPE_BACKUP_VALUE: &str = "Backup";

/// Which of the two injected stores serves reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataStoreKind {
    Primary,
    Backup,
}

impl DataStoreKind {
    /// Resolves a selector string
    ///
    /// Exactly `"Backup"` (case-sensitive, no trimming) selects the backup
    /// store; every other value selects the primary store.
    ///
    /// ```
    /// use mailroom::core::transfer::DataStoreKind;
    ///
    /// assert_eq!(DataStoreKind::from_selector("Backup"), DataStoreKind::Backup);
    /// assert_eq!(DataStoreKind::from_selector("backup"), DataStoreKind::Primary);
    /// assert_eq!(DataStoreKind::from_selector(""), DataStoreKind::Primary);
    /// ```
    pub fn from_selector(selector: &str) -> Self {
        if selector == DATA_STORE_TYPE_BACKUP_VALUE {
            DataStoreKind::Backup
        } else {
            DataStoreKind::Primary
        }
    }
}

impl fmt::Display for DataStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataStoreKind::Primary => write!(f, "primary"),
            DataStoreKind::Backup => write!(f, "backup"),
        }
    }
}

/// Startup settings of a transfer service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSettings {
    pub data_store_kind: DataStoreKind,
}

impl TransferSettings {
    pub fn new(data_store_kind: DataStoreKind) -> Self {
        Self { data_store_kind }
    }

    /// Reads the store selector from `source`
    ///
    /// # Errors
    ///
    /// Returns [`MailroomError::Configuration`] if the `DataStoreType` key is
    /// not configured.
    pub fn from_source(source: &dyn ConfigurationSource) -> Result<Self> {
        let selector = source.get_string(DATA_STORE_TYPE_KEY).ok_or_else(|| {
            MailroomError::Configuration(format!(
                "Missing required configuration key '{DATA_STORE_TYPE_KEY}'"
            ))
        })?;

        Ok(Self::new(DataStoreKind::from_selector(&selector)))
    }
}
