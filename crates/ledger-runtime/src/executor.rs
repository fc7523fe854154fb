//! # Transaction Executor
//!
//! The single writer. Owns the committed state, applies one transaction at
//! a time in arrival order and publishes the result.
//!
//! ## Commit Protocol
//!
//! ```text
//! request ──→ draft of committed state ──→ execute on the draft
//!                                          │
//!                  ┌──── Err ──────────────┤
//!                  │                       │ Ok
//!                  ▼                       ▼
//!          draft discarded         draft becomes committed state
//!          reply Err               snapshot published
//!                                  events published
//!                                  reply Ok(receipt)
//! ```
//!
//! Readers hold `Arc` snapshots, so they never wait on the writer and never
//! see a half-applied transaction. The draft shares structure with the
//! committed state; only the paths a command touches are copied.

use crate::clock::Clock;
use crate::commands::{Receipt, Transaction};
use crate::errors::LedgerError;
use crate::state::LedgerState;
use mpr_telemetry::{
    time_histogram, CASES_REPORTED, COMMANDS_COMMITTED, COMMANDS_REJECTED, COMMAND_DURATION,
    EVENTS_PUBLISHED, JOURNAL_HEIGHT,
};
use shared_bus::{EventPublisher, InMemoryEventBus, LedgerEvent};
use shared_types::CallContext;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

/// A queued transaction and where to send its outcome.
pub(crate) struct Request {
    pub(crate) transaction: Transaction,
    pub(crate) reply: oneshot::Sender<Result<Receipt, LedgerError>>,
}

/// Single-writer executor task.
pub(crate) struct LedgerExecutor {
    state: Arc<LedgerState>,
    requests: mpsc::Receiver<Request>,
    snapshots: watch::Sender<Arc<LedgerState>>,
    bus: Arc<InMemoryEventBus>,
    clock: Arc<dyn Clock>,
    shutdown: watch::Receiver<bool>,
}

impl LedgerExecutor {
    pub(crate) fn new(
        state: Arc<LedgerState>,
        requests: mpsc::Receiver<Request>,
        snapshots: watch::Sender<Arc<LedgerState>>,
        bus: Arc<InMemoryEventBus>,
        clock: Arc<dyn Clock>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            state,
            requests,
            snapshots,
            bus,
            clock,
            shutdown,
        }
    }

    /// Run until shutdown is signalled or every handle is dropped.
    ///
    /// Requests still queued at shutdown are dropped; their submitters see
    /// `Unavailable`.
    pub(crate) async fn run(mut self) {
        info!(
            owner = %self.state.identity().owner(),
            fee = %self.state.appointments().appointment_fee(),
            "Ledger executor started"
        );
        let genesis = self.state.genesis_event();
        self.publish(vec![genesis]).await;

        loop {
            tokio::select! {
                biased;
                changed = self.shutdown.changed() => {
                    if changed.is_err() || *self.shutdown.borrow() {
                        break;
                    }
                }
                request = self.requests.recv() => match request {
                    Some(request) => self.handle(request).await,
                    None => break,
                },
            }
        }

        self.requests.close();
        info!(
            height = self.state.journal().height(),
            "Ledger executor stopped"
        );
    }

    async fn handle(&mut self, request: Request) {
        let Request { transaction, reply } = request;
        let command = transaction.command.name();
        let _timer = time_histogram!(COMMAND_DURATION);

        let ctx = CallContext {
            tx_id: transaction.tx_id,
            caller: transaction.caller,
            timestamp: self.clock.now(),
            value: transaction.value,
        };

        let mut draft = LedgerState::clone(&self.state);
        let outcome = match draft.execute(&ctx, &transaction.command) {
            Ok(applied) => {
                self.state = Arc::new(draft);
                self.snapshots.send_replace(Arc::clone(&self.state));

                COMMANDS_COMMITTED.with_label_values(&[command]).inc();
                JOURNAL_HEIGHT.set(applied.receipt.sequence as f64);
                info!(
                    sequence = applied.receipt.sequence,
                    command,
                    caller = %ctx.caller,
                    "Transaction committed"
                );

                self.publish(applied.events).await;
                Ok(applied.receipt)
            }
            Err(e) => {
                COMMANDS_REJECTED
                    .with_label_values(&[command, e.kind().as_str()])
                    .inc();
                debug!(command, caller = %ctx.caller, error = %e, "Transaction rejected");
                Err(e)
            }
        };

        if reply.send(outcome).is_err() {
            warn!(tx_id = %transaction.tx_id, "Submitter went away before the reply");
        }
    }

    async fn publish(&self, events: Vec<LedgerEvent>) {
        for event in events {
            if let LedgerEvent::CaseReported { division, .. } = &event {
                CASES_REPORTED.with_label_values(&[division.name()]).inc();
            }
            EVENTS_PUBLISHED
                .with_label_values(&[event.topic().as_str()])
                .inc();
            self.bus.publish(event).await;
        }
    }
}
