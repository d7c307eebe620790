//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Human-readable console output
//! - Optional JSON audit file of transfer outcomes, with rotation
//! - Level from configuration, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use mailroom::logging::init_logging;
//! use mailroom::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard, AUDIT_TARGET};

/// Log the outcome of a transfer attempt to the audit target
///
/// # Example
///
/// ```no_run
/// use mailroom::log_transfer_outcome;
/// use mailroom::core::transfer::DataStoreKind;
/// use mailroom::domain::{MailContainerNumber, MailType, MakeMailTransferRequest};
///
/// let request = MakeMailTransferRequest::new(
///     MailContainerNumber::new("MC-1").unwrap(),
///     3,
///     MailType::SmallParcel,
/// );
/// log_transfer_outcome!(&request, DataStoreKind::Primary, true);
/// ```
#[macro_export]
macro_rules! log_transfer_outcome {
    ($request:expr, $store:expr, $success:expr) => {
        tracing::info!(
            target: $crate::logging::AUDIT_TARGET,
            mail_container_number = %$request.source_mail_container_number,
            mail_type = %$request.mail_type,
            items = $request.number_of_mail_items,
            data_store = %$store,
            success = $success,
            "Mail transfer evaluated"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use mailroom::log_error_with_context;
/// use mailroom::domain::MailroomError;
///
/// let error = MailroomError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            target: $crate::logging::AUDIT_TARGET,
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
