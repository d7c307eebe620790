//! In-memory mail container store
//!
//! Holds containers in a mutex-guarded map. Used for dry runs and tests.

use super::traits::MailContainerStore;
use crate::domain::ids::MailContainerNumber;
use crate::domain::{MailContainer, MailroomError, Result, StoreError};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory implementation of [`MailContainerStore`]
#[derive(Debug)]
pub struct InMemoryMailContainerStore {
    name: String,
    containers: Mutex<BTreeMap<MailContainerNumber, MailContainer>>,
}

impl InMemoryMailContainerStore {
    /// Create an empty store
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            containers: Mutex::new(BTreeMap::new()),
        }
    }

    /// Create a store pre-populated with `containers`
    pub fn with_containers(
        name: impl Into<String>,
        containers: impl IntoIterator<Item = MailContainer>,
    ) -> Self {
        let map = containers
            .into_iter()
            .map(|c| (c.mail_container_number.clone(), c))
            .collect();
        Self {
            name: name.into(),
            containers: Mutex::new(map),
        }
    }

    /// Insert or replace a container without the update semantics
    pub fn insert(&self, container: MailContainer) -> Result<()> {
        self.lock()?
            .insert(container.mail_container_number.clone(), container);
        Ok(())
    }

    /// Copy of every held container, ordered by number
    pub fn snapshot(&self) -> Result<Vec<MailContainer>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<MailContainerNumber, MailContainer>>> {
        self.containers.lock().map_err(|e| {
            MailroomError::Store(StoreError::ReadFailed {
                store: self.name.clone(),
                message: format!("store lock poisoned: {e}"),
            })
        })
    }
}

impl MailContainerStore for InMemoryMailContainerStore {
    fn get_mail_container(&self, number: &MailContainerNumber) -> Result<Option<MailContainer>> {
        Ok(self.lock()?.get(number).cloned())
    }

    fn update_mail_container(&self, container: &MailContainer) -> Result<()> {
        let mut containers = self.lock()?;
        match containers.get_mut(&container.mail_container_number) {
            Some(slot) => {
                *slot = container.clone();
                Ok(())
            }
            None => Err(StoreError::ContainerNotFound {
                store: self.name.clone(),
                number: container.mail_container_number.to_string(),
            }
            .into()),
        }
    }

    fn store_name(&self) -> &str {
        &self.name
    }
}
