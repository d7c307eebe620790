//! JSON file mail container store
//!
//! Keeps every container in a single JSON document:
//!
//! ```json
//! {
//!   "containers": [
//!     {
//!       "mail_container_number": "MC-1",
//!       "allowed_mail_type": ["LargeLetter"],
//!       "capacity": 10,
//!       "status": "Operational"
//!     }
//!   ]
//! }
//! ```
//!
//! Updates rewrite the whole document into a sibling temporary file and
//! rename it over the original, so a failed write never leaves a partial
//! document behind.

use super::traits::MailContainerStore;
use crate::domain::ids::MailContainerNumber;
use crate::domain::{MailContainer, Result, StoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// On-disk document layout
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContainerDocument {
    #[serde(default)]
    pub containers: Vec<MailContainer>,
}

/// JSON file implementation of [`MailContainerStore`]
#[derive(Debug)]
pub struct JsonFileMailContainerStore {
    name: String,
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileMailContainerStore {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every container in the document
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadFailed`] if the file cannot be read and
    /// [`StoreError::Corrupted`] if it is not a valid document.
    pub fn load_all(&self) -> Result<Vec<MailContainer>> {
        Ok(self.read_document()?.containers)
    }

    /// Write a fresh document holding `containers`
    pub fn save_all(&self, containers: Vec<MailContainer>) -> Result<()> {
        self.write_document(&ContainerDocument { containers })
    }

    fn read_document(&self) -> Result<ContainerDocument> {
        let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadFailed {
            store: self.name.clone(),
            message: format!("{}: {e}", self.path.display()),
        })?;

        let document = serde_json::from_str(&contents).map_err(|e| StoreError::Corrupted {
            store: self.name.clone(),
            message: format!("{}: {e}", self.path.display()),
        })?;

        Ok(document)
    }

    fn write_document(&self, document: &ContainerDocument) -> Result<()> {
        let write_failed = |message: String| StoreError::WriteFailed {
            store: self.name.clone(),
            message,
        };

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| write_failed(format!("failed to encode document: {e}")))?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)
            .map_err(|e| write_failed(format!("{}: {e}", tmp_path.display())))?;

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_failed(format!("{}: {e}", self.path.display())).into());
        }

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl MailContainerStore for JsonFileMailContainerStore {
    fn get_mail_container(&self, number: &MailContainerNumber) -> Result<Option<MailContainer>> {
        let document = self.read_document()?;
        Ok(document
            .containers
            .into_iter()
            .find(|c| &c.mail_container_number == number))
    }

    fn update_mail_container(&self, container: &MailContainer) -> Result<()> {
        let _guard = self.write_lock.lock().map_err(|e| StoreError::WriteFailed {
            store: self.name.clone(),
            message: format!("store lock poisoned: {e}"),
        })?;

        let mut document = self.read_document()?;
        let slot = document
            .containers
            .iter_mut()
            .find(|c| c.mail_container_number == container.mail_container_number)
            .ok_or_else(|| StoreError::ContainerNotFound {
                store: self.name.clone(),
                number: container.mail_container_number.to_string(),
            })?;
        *slot = container.clone();

        self.write_document(&document)?;

        tracing::debug!(
            store = %self.name,
            path = %self.path.display(),
            mail_container_number = %container.mail_container_number,
            capacity = container.capacity,
            "Mail container written"
        );

        Ok(())
    }

    fn store_name(&self) -> &str {
        &self.name
    }
}
