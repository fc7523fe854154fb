//! # MPR Telemetry
//!
//! Structured logging and Prometheus metrics for the registry ledger.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mpr_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // logs and metrics are now being collected
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MPR_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `MPR_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |
//! | `MPR_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `MPR_SERVICE_NAME` | `mpr-node` | Service name in startup logs |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    gather_metrics, register_metrics, HistogramTimer, CASES_REPORTED, COMMANDS_COMMITTED,
    COMMANDS_REJECTED, COMMAND_DURATION, EVENTS_PUBLISHED, JOURNAL_HEIGHT,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    Subscriber(String),

    /// Metric registration or encoding failed.
    #[error("Prometheus metrics error: {0}")]
    Metrics(String),

    /// Invalid filter directive or setting.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install the log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
