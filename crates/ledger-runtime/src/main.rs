//! # Missing-Person Registry Node
//!
//! Runs the ledger until Ctrl+C.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (`MPR_LOG_LEVEL`, `MPR_JSON_LOGS`)
//! 2. Load configuration from the environment and validate it
//! 3. Build genesis and start the executor
//! 4. Wait for Ctrl+C, then shut down gracefully

use anyhow::{Context, Result};
use tracing::{debug, info};

use ledger_runtime::{LedgerConfig, LedgerRuntime};
use mpr_telemetry::{gather_metrics, init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_telemetry(&telemetry).context("failed to initialize telemetry")?;
    info!(service = %telemetry.service_name, "Starting missing-person registry node");

    let config = LedgerConfig::from_env().context("failed to load configuration")?;
    config.validate()?;
    info!(
        owner = %config.genesis.owner,
        fee = %config.genesis.appointment_fee,
        queue = config.executor.command_queue_capacity,
        "Configuration loaded"
    );

    let runtime = LedgerRuntime::start(config)?;
    let handle = runtime.handle();

    info!("Ledger is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    info!(height = handle.journal_height(), "Shutting down");
    runtime.shutdown().await;

    match gather_metrics() {
        Ok(metrics) => debug!("Final metrics:\n{}", metrics),
        Err(e) => debug!("Metrics unavailable: {}", e),
    }

    info!("Shutdown complete");
    Ok(())
}
