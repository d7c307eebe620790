//! Domain models and types for Mailroom.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`MailContainerNumber`])
//! - **Domain models** ([`MailContainer`], [`AllowedMailType`], [`MailContainerStatus`])
//! - **Transfer types** ([`MailType`], [`MakeMailTransferRequest`], [`MakeMailTransferResult`])
//! - **Error types** ([`MailroomError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use mailroom::domain::{
//!     AllowedMailType, MailContainer, MailContainerNumber, MailType, MakeMailTransferRequest,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let container = MailContainer::builder()
//!     .mail_container_number("MC-1")?
//!     .allowed_mail_type(AllowedMailType::LARGE_LETTER | AllowedMailType::SMALL_PARCEL)
//!     .capacity(10)
//!     .build()?;
//!
//! let request = MakeMailTransferRequest::new(
//!     MailContainerNumber::new("MC-1")?,
//!     4,
//!     "large-letter".parse::<MailType>()?,
//! );
//! # let _ = (container, request);
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod errors;
pub mod ids;
pub mod result;
pub mod transfer;

pub use container::{AllowedMailType, MailContainer, MailContainerBuilder, MailContainerStatus};
pub use errors::{MailroomError, StoreError};
pub use ids::MailContainerNumber;
pub use result::Result;
pub use transfer::{MailType, MakeMailTransferRequest, MakeMailTransferResult};
