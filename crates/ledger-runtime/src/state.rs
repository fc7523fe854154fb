//! # Ledger State
//!
//! The aggregate of all three subsystems plus balances and the journal.
//! One value of this type is one consistent, committed point in the global
//! order.
//!
//! ## Atomicity
//!
//! `execute` mutates in place and may leave partial writes behind when it
//! fails. Callers run it on a private copy and discard the copy on error;
//! see the executor.
//!
//! Every collection underneath is an `im` persistent structure, so that
//! copy costs the same whether the ledger holds ten cases or ten million.
//! The journal is written last, after every fallible step.

use crate::accounts::BalanceBook;
use crate::adapters::{CaseView, IdentityView};
use crate::commands::{Command, CommandOutput, Receipt};
use crate::errors::LedgerError;
use mpr_01_identity_registry::{IdentityRegistry, IdentityRegistryApi};
use mpr_02_case_registry::CaseRegistry;
use mpr_03_appointment_ledger::AppointmentLedger;
use shared_bus::LedgerEvent;
use im::Vector;
use shared_types::{CallContext, Timestamp};

/// Append-only record of committed transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    receipts: Vector<Receipt>,
}

impl Journal {
    /// Number of committed transactions.
    #[must_use]
    pub fn height(&self) -> u64 {
        self.receipts.len() as u64
    }

    /// Receipt at `sequence` (1-based).
    #[must_use]
    pub fn get(&self, sequence: u64) -> Option<&Receipt> {
        let index = usize::try_from(sequence.checked_sub(1)?).ok()?;
        self.receipts.get(index)
    }

    /// Receipts in commit order.
    pub fn iter(&self) -> impl Iterator<Item = &Receipt> + '_ {
        self.receipts.iter()
    }

    /// Most recent receipt.
    #[must_use]
    pub fn last(&self) -> Option<&Receipt> {
        self.receipts.last()
    }

    fn append(&mut self, receipt: Receipt) {
        self.receipts.push_back(receipt);
    }
}

/// What a successful `execute` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Journal entry of the transaction.
    pub receipt: Receipt,
    /// Events to publish after commit, in order.
    pub events: Vec<LedgerEvent>,
}

/// Complete ledger state.
#[derive(Debug, Clone)]
pub struct LedgerState {
    identity: IdentityRegistry,
    cases: CaseRegistry,
    appointments: AppointmentLedger,
    balances: BalanceBook,
    journal: Journal,
    genesis_timestamp: Timestamp,
}

impl LedgerState {
    pub(crate) fn from_genesis(
        identity: IdentityRegistry,
        cases: CaseRegistry,
        appointments: AppointmentLedger,
        balances: BalanceBook,
        genesis_timestamp: Timestamp,
    ) -> Self {
        Self {
            identity,
            cases,
            appointments,
            balances,
            journal: Journal::default(),
            genesis_timestamp,
        }
    }

    /// Identity registry.
    #[must_use]
    pub fn identity(&self) -> &IdentityRegistry {
        &self.identity
    }

    /// Case registry.
    #[must_use]
    pub fn cases(&self) -> &CaseRegistry {
        &self.cases
    }

    /// Appointment ledger.
    #[must_use]
    pub fn appointments(&self) -> &AppointmentLedger {
        &self.appointments
    }

    /// Account balances.
    #[must_use]
    pub fn balances(&self) -> &BalanceBook {
        &self.balances
    }

    /// Committed transactions.
    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Timestamp genesis was built with.
    #[must_use]
    pub fn genesis_timestamp(&self) -> Timestamp {
        self.genesis_timestamp
    }

    /// Genesis announcement for the event bus.
    #[must_use]
    pub fn genesis_event(&self) -> LedgerEvent {
        LedgerEvent::GenesisInitialized {
            owner: self.identity.owner(),
            appointment_fee: self.appointments.appointment_fee(),
            funded_accounts: self.balances.funded_accounts(),
        }
    }

    /// Apply `command` under `ctx` and append its receipt to the journal.
    ///
    /// # Errors
    ///
    /// - `ValueNotAccepted` if a non-payable command carries value.
    /// - Any subsystem rejection, unchanged.
    pub fn execute(
        &mut self,
        ctx: &CallContext,
        command: &Command,
    ) -> Result<Applied, LedgerError> {
        if ctx.carries_value() && !command.is_payable() {
            return Err(LedgerError::ValueNotAccepted {
                command: command.name(),
                value: ctx.value,
            });
        }

        let sequence = self.journal.height() + 1;
        let mut events = Vec::with_capacity(2);

        let output = match command {
            Command::Register {
                national_id,
                name,
                role,
            } => {
                IdentityRegistryApi::register(&mut self.identity, ctx, national_id, name, *role)?;
                events.push(LedgerEvent::UserRegistered {
                    sequence,
                    address: ctx.caller,
                    role: *role,
                });
                CommandOutput::Registered
            }
            Command::AddCase(draft) => {
                let case_id =
                    self.cases
                        .add_case(&IdentityView(&self.identity), ctx, draft.clone())?;
                let division = self.cases.get_case(case_id)?.division;
                events.push(LedgerEvent::CaseReported {
                    sequence,
                    case_id,
                    division,
                    reporter: ctx.caller,
                });
                CommandOutput::CaseAdded { case_id }
            }
            Command::AssignInvestigator {
                case_id,
                investigator,
            } => {
                self.cases.assign_investigator(
                    &IdentityView(&self.identity),
                    ctx,
                    *case_id,
                    *investigator,
                )?;
                events.push(LedgerEvent::InvestigatorAssigned {
                    sequence,
                    case_id: *case_id,
                    investigator: *investigator,
                });
                CommandOutput::InvestigatorAssigned
            }
            Command::UpdateStatus { case_id, status } => {
                self.cases.update_status(
                    &IdentityView(&self.identity),
                    ctx,
                    *case_id,
                    *status,
                )?;
                events.push(LedgerEvent::CaseStatusUpdated {
                    sequence,
                    case_id: *case_id,
                    status: *status,
                });
                CommandOutput::StatusUpdated
            }
            Command::BookAppointment(request) => {
                let Self {
                    identity,
                    cases,
                    appointments,
                    balances,
                    ..
                } = self;
                let appointment_id = appointments.book_appointment(
                    &IdentityView(identity),
                    &CaseView(cases),
                    balances,
                    ctx,
                    *request,
                )?;
                events.push(LedgerEvent::FeeTransferred {
                    sequence,
                    from: ctx.caller,
                    to: identity.owner(),
                    amount: ctx.value,
                });
                events.push(LedgerEvent::AppointmentBooked {
                    sequence,
                    appointment_id,
                    case_id: request.case_id,
                    investigator: request.investigator,
                    scheduled_at: request.scheduled_at,
                });
                CommandOutput::AppointmentBooked { appointment_id }
            }
        };

        let receipt = Receipt {
            sequence,
            tx_id: ctx.tx_id,
            caller: ctx.caller,
            timestamp: ctx.timestamp,
            value: ctx.value,
            command: command.name().to_string(),
            output,
        };
        self.journal.append(receipt.clone());

        Ok(Applied { receipt, events })
    }
}
