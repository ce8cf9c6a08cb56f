//! Logging setup using tracing
//!
//! Every event is written to the configured log file as one line in the
//! `<timestamp> - <LEVEL> - <message>` layout, appended to whatever the file
//! already holds. Warnings and errors are echoed to stderr.
//!
//! The subscriber is installed as the default for the current thread only and
//! removed again when the returned [`LoggingGuard`] is dropped.

use crate::domain::{ExporterError, Result};
use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Timestamp layout of a log line, e.g. `2024-06-01 12:00:00,123`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Guard that must be kept alive for the duration of the run
///
/// Dropping it uninstalls the subscriber, then flushes and closes the log file.
pub struct LoggingGuard {
    _default: DefaultGuard,
    _file_guard: WorkerGuard,
}

/// Event formatter producing `<timestamp> - <LEVEL> - <message>`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(
            writer,
            "{} - {} - ",
            now.format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize logging for one run
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
/// * `log_file` - File to append log lines to; parent directories are created
///
/// # Returns
///
/// A `LoggingGuard` that must be kept alive for the duration of the run
///
/// # Example
///
/// ```no_run
/// use svcdeps::logging::init_logging;
///
/// let _guard = init_logging("info", "service_dependency.log").expect("Failed to initialize logging");
/// tracing::info!("Run started");
/// ```
pub fn init_logging(log_level_str: &str, log_file: impl AsRef<Path>) -> Result<LoggingGuard> {
    let log_file = log_file.as_ref();
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("svcdeps={log_level}")));

    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ExporterError::Configuration(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            ExporterError::Configuration(format!(
                "Failed to open log file {}: {}",
                log_file.display(),
                e
            ))
        })?;
    let (non_blocking, file_guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(env_filter);

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::WARN);

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer);
    let default_guard = tracing::subscriber::set_default(subscriber);

    tracing::debug!(
        log_file = %log_file.display(),
        level = %log_level,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _default: default_guard,
        _file_guard: file_guard,
    })
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ExporterError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
