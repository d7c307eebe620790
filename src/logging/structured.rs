//! Structured logging setup using tracing
//!
//! Two layers share one registry:
//! - a console layer on stderr for everything under `mailroom`, at the
//!   configured level unless `RUST_LOG` says otherwise
//! - an optional transfer audit file, one flat JSON object per line, that
//!   only receives events sent to [`AUDIT_TARGET`]

use crate::config::LoggingConfig;
use crate::domain::{MailroomError, Result};
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Target carried by transfer outcomes and command failures
pub const AUDIT_TARGET: &str = "mailroom::audit";

/// File name (or rotation prefix) of the audit log
const AUDIT_FILE_PREFIX: &str = "transfers.log";

/// Keeps the audit file writer alive; drop it last so buffered lines are flushed
pub struct LoggingGuard {
    _audit_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber
///
/// The audit file is written under `config.local_path` only when
/// `config.local_enabled` is set.
///
/// # Errors
///
/// Returns [`MailroomError::Configuration`] for an unknown level or an
/// uncreatable log directory, and [`MailroomError::Other`] when a subscriber
/// is already installed.
///
/// # Example
///
/// ```no_run
/// use mailroom::logging::init_logging;
/// use mailroom::config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// let _guard = init_logging("info", &config).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(log_level_str)?;

    let (audit, audit_guard) = if config.local_enabled {
        let (layer, guard) = audit_layer(config)?;
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer(level))
        .with(audit)
        .try_init()
        .map_err(|e| MailroomError::Other(format!("Failed to install log subscriber: {e}")))?;

    tracing::debug!(
        audit_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _audit_guard: audit_guard,
    })
}

fn console_layer<S>(level: Level) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mailroom={level}")));

    tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter)
}

fn audit_layer<S>(config: &LoggingConfig) -> Result<(impl Layer<S>, WorkerGuard)>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        MailroomError::Configuration(format!(
            "Failed to create log directory {}: {}",
            config.local_path, e
        ))
    })?;

    let appender = RollingFileAppender::new(
        parse_rotation(&config.local_rotation),
        &config.local_path,
        AUDIT_FILE_PREFIX,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_target(false)
        .with_writer(writer)
        .with_filter(Targets::new().with_target(AUDIT_TARGET, Level::INFO));

    Ok((layer, guard))
}

fn parse_log_level(level_str: &str) -> Result<Level> {
    level_str.parse::<Level>().map_err(|_| {
        MailroomError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))
    })
}

fn parse_rotation(rotation: &str) -> Rotation {
    match rotation {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
