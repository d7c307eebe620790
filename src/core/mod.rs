//! Core business logic for Mailroom.
//!
//! # Modules
//!
//! - [`validation`] - Pure transfer validation rules
//! - [`transfer`] - Store selection and transfer orchestration
//!
//! # Transfer Workflow
//!
//! 1. **Select store**: primary or backup, resolved once from configuration
//! 2. **Fetch**: read the source container from the selected store
//! 3. **Validate**: apply the mail type rules to (request, container)
//! 4. **Apply**: on success, subtract the items from the container's capacity
//! 5. **Persist**: write the container back through the same store

pub mod transfer;
pub mod validation;
