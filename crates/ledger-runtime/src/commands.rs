//! # Transactions and Receipts
//!
//! A `Transaction` is what a client submits; a `Receipt` is what the
//! journal keeps once it commits.

use mpr_02_case_registry::NewCase;
use mpr_03_appointment_ledger::BookingRequest;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, AppointmentId, CaseId, CaseStatus, Role, Timestamp};
use uuid::Uuid;

/// State-changing commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Register the caller.
    Register {
        /// National id of the caller.
        national_id: String,
        /// Display name.
        name: String,
        /// Self-declared role.
        role: Role,
    },
    /// File a missing-person report.
    AddCase(NewCase),
    /// Assign an investigator to a case.
    AssignInvestigator {
        /// Target case.
        case_id: CaseId,
        /// Investigator to assign.
        investigator: Address,
    },
    /// Change a case's status.
    UpdateStatus {
        /// Target case.
        case_id: CaseId,
        /// Requested status.
        status: CaseStatus,
    },
    /// Book an appointment; the transaction value is the payment.
    BookAppointment(BookingRequest),
}

impl Command {
    /// Stable name, used as a metric label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Register { .. } => "register",
            Self::AddCase(_) => "add_case",
            Self::AssignInvestigator { .. } => "assign_investigator",
            Self::UpdateStatus { .. } => "update_status",
            Self::BookAppointment(_) => "book_appointment",
        }
    }

    /// Only bookings may carry value.
    #[must_use]
    pub fn is_payable(&self) -> bool {
        matches!(self, Self::BookAppointment(_))
    }
}

/// A command addressed by an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Client-side identifier, echoed in the receipt.
    pub tx_id: Uuid,
    /// Acting identity, supplied by the session layer.
    pub caller: Address,
    /// Value moved from the caller as part of the command.
    pub value: Amount,
    /// The command.
    pub command: Command,
}

impl Transaction {
    /// Transaction with no attached value.
    #[must_use]
    pub fn new(caller: Address, command: Command) -> Self {
        Self {
            tx_id: Uuid::new_v4(),
            caller,
            value: Amount::zero(),
            command,
        }
    }

    /// Attach a value.
    #[must_use]
    pub fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }
}

/// Result of a committed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutput {
    /// Caller registered.
    Registered,
    /// Case filed under this id.
    CaseAdded {
        /// New case id.
        case_id: CaseId,
    },
    /// Investigator assigned.
    InvestigatorAssigned,
    /// Status changed.
    StatusUpdated,
    /// Appointment booked under this id.
    AppointmentBooked {
        /// New appointment id.
        appointment_id: AppointmentId,
    },
}

impl CommandOutput {
    /// Case id allocated by an `AddCase` command.
    #[must_use]
    pub fn case_id(&self) -> Option<CaseId> {
        match self {
            Self::CaseAdded { case_id } => Some(*case_id),
            _ => None,
        }
    }

    /// Appointment id allocated by a `BookAppointment` command.
    #[must_use]
    pub fn appointment_id(&self) -> Option<AppointmentId> {
        match self {
            Self::AppointmentBooked { appointment_id } => Some(*appointment_id),
            _ => None,
        }
    }
}

/// Journal entry of a committed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Position in the global order, from 1.
    pub sequence: u64,
    /// Identifier of the committed transaction.
    pub tx_id: Uuid,
    /// Acting identity.
    pub caller: Address,
    /// Commit timestamp.
    pub timestamp: Timestamp,
    /// Value moved.
    pub value: Amount,
    /// Command name.
    pub command: String,
    /// Command result.
    pub output: CommandOutput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_booking_is_payable() {
        let booking = Command::BookAppointment(BookingRequest {
            case_id: 1,
            investigator: Address::ZERO,
            scheduled_at: 0,
        });
        let status = Command::UpdateStatus {
            case_id: 1,
            status: CaseStatus::Found,
        };
        assert!(booking.is_payable());
        assert!(!status.is_payable());
        assert_eq!(status.name(), "update_status");
    }

    #[test]
    fn test_transaction_defaults_to_zero_value() {
        let tx = Transaction::new(
            Address::ZERO,
            Command::Register {
                national_id: "1".into(),
                name: "A".into(),
                role: Role::Admin,
            },
        );
        assert!(tx.value.is_zero());
        assert!(tx.with_value(Amount::one()).value == Amount::one());
    }

    #[test]
    fn test_output_accessors() {
        assert_eq!(CommandOutput::CaseAdded { case_id: 4 }.case_id(), Some(4));
        assert_eq!(CommandOutput::Registered.case_id(), None);
        assert_eq!(
            CommandOutput::AppointmentBooked { appointment_id: 2 }.appointment_id(),
            Some(2)
        );
    }

    #[test]
    fn test_command_json_shape() {
        let command = Command::AssignInvestigator {
            case_id: 3,
            investigator: Address::ZERO,
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["AssignInvestigator"]["case_id"], 3);

        let back: Command = serde_json::from_value(json).unwrap();
        assert_eq!(back, command);
    }
}
