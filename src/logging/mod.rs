//! Logging and observability
//!
//! This module provides:
//! - Plain-text log lines in the `<timestamp> - <LEVEL> - <message>` layout
//! - Configurable log levels, overridable through `RUST_LOG`
//! - Append-mode file logging that is flushed when the run ends
//!
//! # Example
//!
//! ```no_run
//! use svcdeps::logging::init_logging;
//!
//! let _guard = init_logging("info", "service_dependency.log").expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LineFormat, LoggingGuard};

/// Log a failed pipeline stage
///
/// # Example
///
/// ```no_run
/// use svcdeps::log_stage_failure;
/// use svcdeps::domain::ExporterError;
///
/// let error = ExporterError::Export("disk full".to_string());
/// log_stage_failure!("export", &error);
/// ```
#[macro_export]
macro_rules! log_stage_failure {
    ($stage:expr, $error:expr) => {
        tracing::error!(stage = %$stage, "An error occurred: {}", $error);
    };
}

/// Log the completion of an export run
///
/// # Example
///
/// ```no_run
/// use svcdeps::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_secs(2));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}
