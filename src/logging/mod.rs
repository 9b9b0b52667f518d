//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON file logs with rotation
//! - Level taken from configuration, overridable with `RUST_LOG`

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export operation
///
/// # Example
///
/// ```no_run
/// use asset_export::log_export_start;
///
/// log_export_start!("My Project", "TFPascalVoc");
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($project:expr, $format:expr) => {
        tracing::info!(
            project = %$project,
            format = %$format,
            "Starting export"
        );
    };
}

/// Log the completion of an export operation
///
/// # Example
///
/// ```no_run
/// use asset_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_millis(350));
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
