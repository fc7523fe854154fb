//! # Ledger Runtime
//!
//! Hosts the three registry subsystems on one globally ordered ledger.
//! The `mpr-node` binary in `main.rs` is a thin shell around this library.
//!
//! ## Architecture
//!
//! ```text
//!   LedgerHandle ──submit──→ [command queue] ──→ LedgerExecutor (single writer)
//!        │                                             │
//!        │◀──────────── watch: Arc<LedgerState> ───────┤
//!        │                                             │
//!        └──subscribe──→ InMemoryEventBus ◀──publish───┘
//! ```
//!
//! - **Total order**: one executor task applies transactions one at a time.
//! - **Atomicity**: each transaction runs on a private copy of the state;
//!   the copy replaces the committed state only on success. Copies share
//!   structure, so their cost does not grow with history.
//! - **Snapshot reads**: queries read the last committed `Arc<LedgerState>`.
//!
//! ## Startup Sequence
//!
//! 1. Load and validate `LedgerConfig`
//! 2. Build genesis state
//! 3. Spawn the executor (publishes `GenesisInitialized`)
//! 4. Hand out `LedgerHandle`s

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod accounts;
pub mod adapters;
pub mod clock;
pub mod commands;
pub mod config;
pub mod errors;
mod executor;
pub mod genesis;
pub mod handle;
pub mod state;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::executor::LedgerExecutor;
use crate::genesis::GenesisBuilder;
use shared_bus::InMemoryEventBus;

// Re-export main types
pub use accounts::BalanceBook;
pub use commands::{Command, CommandOutput, Receipt, Transaction};
pub use config::{ConfigError, ExecutorConfig, LedgerConfig};
pub use errors::{LedgerError, RuntimeError};
pub use genesis::{GenesisConfig, GenesisError};
pub use handle::LedgerHandle;
pub use state::{Journal, LedgerState};

/// A running ledger.
pub struct LedgerRuntime {
    /// Client handle template.
    handle: LedgerHandle,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Executor task.
    executor: JoinHandle<()>,
}

impl LedgerRuntime {
    /// Build genesis and start the executor on the system clock.
    ///
    /// Must be called from within a tokio runtime; the executor is spawned
    /// onto it.
    pub fn start(config: LedgerConfig) -> Result<Self, RuntimeError> {
        let bus = Arc::new(InMemoryEventBus::with_capacity(
            config.executor.event_channel_capacity,
        ));
        Self::start_with(config, Arc::new(SystemClock), bus)
    }

    /// Start with an explicit clock and event bus.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_with(
        config: LedgerConfig,
        clock: Arc<dyn Clock>,
        bus: Arc<InMemoryEventBus>,
    ) -> Result<Self, RuntimeError> {
        config.validate()?;
        if !config.funds_bookings() {
            warn!(
                fee = %config.genesis.appointment_fee,
                "No genesis allocations; bookings will fail with InsufficientFunds until MPR_GENESIS_ALLOCATIONS funds reporters"
            );
        }
        let state = Arc::new(GenesisBuilder::new(config.genesis).build(clock.now())?);
        info!(
            owner = %state.identity().owner(),
            funded_accounts = state.balances().funded_accounts(),
            genesis_timestamp = state.genesis_timestamp(),
            "Genesis state built"
        );

        let (commands_tx, commands_rx) = mpsc::channel(config.executor.command_queue_capacity);
        let (snapshots_tx, snapshots_rx) = watch::channel(Arc::clone(&state));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let executor = LedgerExecutor::new(
            state,
            commands_rx,
            snapshots_tx,
            Arc::clone(&bus),
            clock,
            shutdown_rx,
        );
        let executor = tokio::spawn(executor.run());

        Ok(Self {
            handle: LedgerHandle::new(commands_tx, snapshots_rx, bus),
            shutdown_tx,
            executor,
        })
    }

    /// A new client handle.
    #[must_use]
    pub fn handle(&self) -> LedgerHandle {
        self.handle.clone()
    }

    /// Stop the executor and wait for it to exit.
    ///
    /// Handles stay usable for queries against the last committed state;
    /// submissions fail with `Unavailable`.
    pub async fn shutdown(self) {
        info!("Initiating ledger shutdown");
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.executor.await {
            error!("Ledger executor task failed: {}", e);
        }
    }
}
