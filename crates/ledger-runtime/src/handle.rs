//! # Ledger Handle
//!
//! Cloneable client of a running ledger. Commands go through the executor
//! queue; queries read the latest committed snapshot and never block on
//! the writer.

use crate::commands::{Command, Receipt, Transaction};
use crate::errors::LedgerError;
use crate::executor::Request;
use crate::state::LedgerState;
use mpr_01_identity_registry::{InvestigatorSummary, User};
use mpr_02_case_registry::{Case, DivisionRanking, NewCase};
use mpr_03_appointment_ledger::{Appointment, BookingRequest};
use shared_bus::{EventFilter, EventStream, InMemoryEventBus, Subscription};
use shared_types::{Address, Amount, CaseId, CaseStatus, Division, Role};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};

/// Client handle to the ledger.
#[derive(Clone)]
pub struct LedgerHandle {
    commands: mpsc::Sender<Request>,
    snapshots: watch::Receiver<Arc<LedgerState>>,
    bus: Arc<InMemoryEventBus>,
}

impl LedgerHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<Request>,
        snapshots: watch::Receiver<Arc<LedgerState>>,
        bus: Arc<InMemoryEventBus>,
    ) -> Self {
        Self {
            commands,
            snapshots,
            bus,
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Queue a transaction and wait for its outcome.
    ///
    /// # Errors
    ///
    /// The rejection from the ledger, or `Unavailable` if the executor is
    /// gone. An `Unavailable` transaction was not applied.
    pub async fn submit(&self, transaction: Transaction) -> Result<Receipt, LedgerError> {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(Request { transaction, reply })
            .await
            .map_err(|_| LedgerError::Unavailable)?;
        outcome.await.map_err(|_| LedgerError::Unavailable)?
    }

    /// Register `caller` with `role`.
    pub async fn register(
        &self,
        caller: Address,
        national_id: &str,
        name: &str,
        role: Role,
    ) -> Result<Receipt, LedgerError> {
        self.submit(Transaction::new(
            caller,
            Command::Register {
                national_id: national_id.to_string(),
                name: name.to_string(),
                role,
            },
        ))
        .await
    }

    /// File a missing-person report.
    pub async fn add_case(&self, caller: Address, case: NewCase) -> Result<Receipt, LedgerError> {
        self.submit(Transaction::new(caller, Command::AddCase(case)))
            .await
    }

    /// Assign `investigator` to `case_id`.
    pub async fn assign_investigator(
        &self,
        caller: Address,
        case_id: CaseId,
        investigator: Address,
    ) -> Result<Receipt, LedgerError> {
        self.submit(Transaction::new(
            caller,
            Command::AssignInvestigator {
                case_id,
                investigator,
            },
        ))
        .await
    }

    /// Move `case_id` to `status`.
    pub async fn update_status(
        &self,
        caller: Address,
        case_id: CaseId,
        status: CaseStatus,
    ) -> Result<Receipt, LedgerError> {
        self.submit(Transaction::new(
            caller,
            Command::UpdateStatus { case_id, status },
        ))
        .await
    }

    /// Book an appointment, paying `payment` to the registry owner.
    pub async fn book_appointment(
        &self,
        caller: Address,
        request: BookingRequest,
        payment: Amount,
    ) -> Result<Receipt, LedgerError> {
        self.submit(Transaction::new(caller, Command::BookAppointment(request)).with_value(payment))
            .await
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Latest committed state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LedgerState> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Registered user record.
    pub fn get_user(&self, identity: &Address) -> Result<User, LedgerError> {
        Ok(self.snapshot().identity().get_user(identity)?.clone())
    }

    /// Returns true if `identity` is an Admin.
    #[must_use]
    pub fn is_admin(&self, identity: &Address) -> bool {
        self.snapshot().identity().is_admin(identity)
    }

    /// Returns true if `identity` is a Reporter.
    #[must_use]
    pub fn is_reporter(&self, identity: &Address) -> bool {
        self.snapshot().identity().is_reporter(identity)
    }

    /// Returns true if `identity` is an Investigator.
    #[must_use]
    pub fn is_investigator(&self, identity: &Address) -> bool {
        self.snapshot().identity().is_investigator(identity)
    }

    /// Investigators in registration order.
    #[must_use]
    pub fn list_investigators(&self) -> Vec<InvestigatorSummary> {
        self.snapshot().identity().list_investigators()
    }

    /// Registry owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.snapshot().identity().owner()
    }

    /// Case record.
    pub fn get_case(&self, case_id: CaseId) -> Result<Case, LedgerError> {
        Ok(self.snapshot().cases().get_case(case_id)?.clone())
    }

    /// Case ids in `division`, in creation order.
    #[must_use]
    pub fn filter_by_division(&self, division: Division) -> Vec<CaseId> {
        self.snapshot()
            .cases()
            .filter_by_division(division)
            .iter()
            .copied()
            .collect()
    }

    /// Divisions sorted by case count.
    #[must_use]
    pub fn rank_divisions(&self, ascending: bool) -> DivisionRanking {
        self.snapshot().cases().rank_divisions(ascending)
    }

    /// Number of cases filed.
    #[must_use]
    pub fn case_count(&self) -> u64 {
        self.snapshot().cases().case_count()
    }

    /// Fee required per booking.
    #[must_use]
    pub fn appointment_fee(&self) -> Amount {
        self.snapshot().appointments().appointment_fee()
    }

    /// Appointments with `investigator`, in booking order.
    #[must_use]
    pub fn get_appointments(&self, investigator: &Address) -> Vec<Appointment> {
        self.snapshot()
            .appointments()
            .get_appointments(investigator)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Appointments for `case_id`, in booking order.
    #[must_use]
    pub fn get_appointments_by_case(&self, case_id: CaseId) -> Vec<Appointment> {
        self.snapshot()
            .appointments()
            .get_appointments_by_case(case_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Balance of `account`.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.snapshot().balances().balance_of(account)
    }

    /// Journal entry at `sequence`.
    #[must_use]
    pub fn receipt(&self, sequence: u64) -> Option<Receipt> {
        self.snapshot().journal().get(sequence).cloned()
    }

    /// Number of committed transactions.
    #[must_use]
    pub fn journal_height(&self) -> u64 {
        self.snapshot().journal().height()
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Subscribe to events committed from now on.
    #[must_use]
    pub fn subscribe(&self, filter: EventFilter) -> Subscription {
        self.bus.subscribe(filter)
    }

    /// Events committed from now on, as a `Stream`.
    #[must_use]
    pub fn event_stream(&self, filter: EventFilter) -> EventStream {
        self.bus.event_stream(filter)
    }
}
