//! Prometheus metrics for the registry ledger.
//!
//! All metrics follow the naming convention: `mpr_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, CounterVec, Encoder, Gauge, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // EXECUTOR METRICS
    // =========================================================================

    /// Committed transactions by command
    pub static ref COMMANDS_COMMITTED: CounterVec = CounterVec::new(
        Opts::new("mpr_ledger_commands_committed_total", "Transactions committed to the journal"),
        &["command"]
    ).expect("metric creation failed");

    /// Rejected transactions by command and error kind
    pub static ref COMMANDS_REJECTED: CounterVec = CounterVec::new(
        Opts::new("mpr_ledger_commands_rejected_total", "Transactions rejected without state change"),
        &["command", "kind"]
    ).expect("metric creation failed");

    /// Journal height (last committed sequence)
    pub static ref JOURNAL_HEIGHT: Gauge = Gauge::new(
        "mpr_ledger_journal_height",
        "Sequence number of the last committed transaction"
    ).expect("metric creation failed");

    /// Command execution duration
    pub static ref COMMAND_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "mpr_ledger_command_duration_seconds",
            "Time spent applying a single command"
        ).buckets(exponential_buckets(0.00001, 2.0, 15).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // DOMAIN METRICS
    // =========================================================================

    /// Cases reported by division
    pub static ref CASES_REPORTED: CounterVec = CounterVec::new(
        Opts::new("mpr_cases_reported_total", "Cases filed per division"),
        &["division"]
    ).expect("metric creation failed");

    /// Events published on the bus
    pub static ref EVENTS_PUBLISHED: CounterVec = CounterVec::new(
        Opts::new("mpr_eventbus_events_published_total", "Events published after commit"),
        &["topic"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; metrics already registered are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(COMMANDS_COMMITTED.clone()),
        Box::new(COMMANDS_REJECTED.clone()),
        Box::new(JOURNAL_HEIGHT.clone()),
        Box::new(COMMAND_DURATION.clone()),
        Box::new(CASES_REPORTED.clone()),
        Box::new(EVENTS_PUBLISHED.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::Metrics(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all registered metrics in Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::Metrics(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}
