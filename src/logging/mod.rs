//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logging with rotation
//! - Helper macros for masking run events
//!
//! # Example
//!
//! ```no_run
//! use tabmask::logging::init_logging;
//! use tabmask::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::warn!(header = "Ghost", "Column not found");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a masking run
///
/// # Example
///
/// ```no_run
/// use tabmask::log_masking_start;
///
/// let run_id = uuid::Uuid::new_v4();
/// log_masking_start!(run_id, 3, 1200);
/// ```
#[macro_export]
macro_rules! log_masking_start {
    ($run_id:expr, $columns:expr, $rows:expr) => {
        tracing::info!(
            run_id = %$run_id,
            columns = $columns,
            rows = $rows,
            "Starting masking run"
        );
    };
}

/// Log the completion of a masking run
///
/// # Example
///
/// ```no_run
/// use tabmask::log_masking_complete;
/// use std::time::Duration;
///
/// let run_id = uuid::Uuid::new_v4();
/// log_masking_complete!(run_id, 3, Duration::from_millis(40));
/// ```
#[macro_export]
macro_rules! log_masking_complete {
    ($run_id:expr, $columns:expr, $duration:expr) => {
        tracing::info!(
            run_id = %$run_id,
            columns = $columns,
            duration_ms = $duration.as_millis() as u64,
            "Masking run completed"
        );
    };
}

/// Log a selected column that is not in the table
///
/// # Example
///
/// ```no_run
/// use tabmask::log_column_skipped;
///
/// log_column_skipped!("Ghost Column");
/// ```
#[macro_export]
macro_rules! log_column_skipped {
    ($header:expr) => {
        tracing::warn!(header = %$header, "Selected column not found, skipping");
    };
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        let run_id = uuid::Uuid::new_v4();
        crate::log_masking_start!(run_id, 2usize, 10usize);
        crate::log_masking_complete!(run_id, 2usize, Duration::from_millis(5));
        crate::log_column_skipped!("Ghost");
    }
}
