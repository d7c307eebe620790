//! Mail transfer service - orchestrates a single transfer
//!
//! Picks the configured store, fetches the source container, asks the
//! validator and, on success, writes the reduced capacity back through the
//! same store.

use super::selection::{DataStoreKind, TransferSettings};
use crate::adapters::store::{DataStores, MailContainerStore};
use crate::config::ConfigurationSource;
use crate::core::validation::{MailTransferValidator, TransferValidator};
use crate::domain::{MailroomError, MakeMailTransferRequest, MakeMailTransferResult, Result};
use std::sync::Arc;

/// Mail transfer service
pub struct MailTransferService {
    settings: TransferSettings,
    backup_store: Arc<dyn MailContainerStore>,
    primary_store: Arc<dyn MailContainerStore>,
    validator: Arc<dyn TransferValidator>,
}

impl MailTransferService {
    /// Create a new transfer service
    ///
    /// The store selector is read from `config` here, once, and never again.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the selector key is missing.
    pub fn new(
        config: &dyn ConfigurationSource,
        backup_store: Arc<dyn MailContainerStore>,
        primary_store: Arc<dyn MailContainerStore>,
        validator: Arc<dyn TransferValidator>,
    ) -> Result<Self> {
        let settings = TransferSettings::from_source(config)?;
        Ok(Self::with_settings(
            settings,
            backup_store,
            primary_store,
            validator,
        ))
    }

    /// Create a transfer service from already resolved settings
    pub fn with_settings(
        settings: TransferSettings,
        backup_store: Arc<dyn MailContainerStore>,
        primary_store: Arc<dyn MailContainerStore>,
        validator: Arc<dyn TransferValidator>,
    ) -> Self {
        tracing::info!(
            data_store = %settings.data_store_kind,
            backup_store = backup_store.store_name(),
            primary_store = primary_store.store_name(),
            "Mail transfer service created"
        );

        Self {
            settings,
            backup_store,
            primary_store,
            validator,
        }
    }

    /// Create a transfer service over factory-built stores with the default
    /// validation rules
    pub fn from_stores(config: &dyn ConfigurationSource, stores: &DataStores) -> Result<Self> {
        Self::new(
            config,
            stores.backup.clone(),
            stores.primary.clone(),
            Arc::new(MailTransferValidator::new()),
        )
    }

    pub fn data_store_kind(&self) -> DataStoreKind {
        self.settings.data_store_kind
    }

    /// The store serving both reads and writes
    pub fn selected_store(&self) -> &dyn MailContainerStore {
        match self.settings.data_store_kind {
            DataStoreKind::Backup => self.backup_store.as_ref(),
            DataStoreKind::Primary => self.primary_store.as_ref(),
        }
    }

    /// Execute a transfer
    ///
    /// A denied transfer is `Ok` with `success() == false` and leaves the
    /// store untouched. A permitted transfer subtracts the requested items
    /// from the container's capacity and persists it.
    ///
    /// Only the large-letter rule bounds capacity, so standard-letter and
    /// small-parcel transfers can drive it below zero.
    ///
    /// # Errors
    ///
    /// Store read and write failures are returned unchanged; nothing is
    /// retried. A subtraction that would overflow `i32` is
    /// [`MailroomError::InvalidArgument`] and nothing is written.
    pub fn make_mail_transfer(
        &self,
        request: &MakeMailTransferRequest,
    ) -> Result<MakeMailTransferResult> {
        let store = self.selected_store();

        let container = store.get_mail_container(&request.source_mail_container_number)?;
        let permitted = self.validator.validate(request, container.as_ref());

        let mut container = match (permitted, container) {
            (true, Some(container)) => container,
            (true, None) => {
                tracing::warn!(
                    mail_container_number = %request.source_mail_container_number,
                    store = store.store_name(),
                    "Validator permitted a transfer from a missing mail container"
                );
                return Ok(self.outcome(request, false));
            }
            (false, _) => return Ok(self.outcome(request, false)),
        };

        let capacity_before = container.capacity;
        container.capacity = capacity_before
            .checked_sub(request.number_of_mail_items)
            .ok_or_else(|| {
                MailroomError::InvalidArgument(format!(
                    "Transferring {} item(s) out of mail container {} overflows its capacity {}",
                    request.number_of_mail_items,
                    container.mail_container_number,
                    capacity_before
                ))
            })?;
        store.update_mail_container(&container)?;

        tracing::debug!(
            mail_container_number = %container.mail_container_number,
            store = store.store_name(),
            capacity_before,
            capacity_after = container.capacity,
            "Mail container capacity updated"
        );

        Ok(self.outcome(request, true))
    }

    fn outcome(&self, request: &MakeMailTransferRequest, success: bool) -> MakeMailTransferResult {
        crate::log_transfer_outcome!(request, self.settings.data_store_kind, success);
        MakeMailTransferResult::new(success)
    }
}
