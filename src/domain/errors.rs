//! Domain error types
//!
//! This module defines the error hierarchy for Mailroom.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Mailroom error type
///
/// This is the primary error type used throughout the application.
/// A denied transfer is not an error: it is reported through
/// [`MakeMailTransferResult`](crate::domain::MakeMailTransferResult).
#[derive(Debug, Error)]
pub enum MailroomError {
    /// Configuration-related errors (missing selector key, invalid TOML, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller supplied a value outside the accepted domain
    /// (unknown mail type code, unknown allowed-type bits)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Data store failures, propagated unchanged from the store
    #[error("Data store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Mail container store errors
///
/// Raised by [`MailContainerStore`](crate::adapters::store::MailContainerStore)
/// implementations. A container that simply does not exist on read is
/// `Ok(None)`, not an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading from the store failed
    #[error("Failed to read from store '{store}': {message}")]
    ReadFailed { store: String, message: String },

    /// Writing to the store failed
    #[error("Failed to write to store '{store}': {message}")]
    WriteFailed { store: String, message: String },

    /// Stored data could not be decoded
    #[error("Store '{store}' holds corrupted data: {message}")]
    Corrupted { store: String, message: String },

    /// An update targeted a container the store does not hold
    #[error("Mail container not found in store '{store}': {number}")]
    ContainerNotFound { store: String, number: String },
}

impl From<std::io::Error> for MailroomError {
    fn from(err: std::io::Error) -> Self {
        MailroomError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MailroomError {
    fn from(err: serde_json::Error) -> Self {
        MailroomError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MailroomError {
    fn from(err: toml::de::Error) -> Self {
        MailroomError::Configuration(format!("TOML parse error: {err}"))
    }
}
