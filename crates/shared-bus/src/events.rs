//! # Ledger Events
//!
//! Every event type that flows through the shared bus. Each one describes
//! a state change that has already been committed.

use serde::{Deserialize, Serialize};
use shared_types::{
    Address, Amount, AppointmentId, CaseId, CaseStatus, Division, Role, Timestamp,
};

/// Events published by the transaction executor after a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    // =========================================================================
    // RUNTIME
    // =========================================================================
    /// Genesis state was installed. Always journal sequence 0.
    GenesisInitialized {
        /// Registry owner and fee payee.
        owner: Address,
        /// Configured appointment fee.
        appointment_fee: Amount,
        /// Number of funded accounts.
        funded_accounts: usize,
    },

    // =========================================================================
    // SUBSYSTEM 1: IDENTITY REGISTRY
    // =========================================================================
    /// An identity registered.
    UserRegistered {
        /// Journal sequence of the committing transaction.
        sequence: u64,
        /// Registered identity.
        address: Address,
        /// Role chosen at registration.
        role: Role,
    },

    // =========================================================================
    // SUBSYSTEM 2: CASE REGISTRY
    // =========================================================================
    /// A new case was filed.
    CaseReported {
        /// Journal sequence of the committing transaction.
        sequence: u64,
        /// New case id.
        case_id: CaseId,
        /// Division the case was indexed under.
        division: Division,
        /// Reporting identity.
        reporter: Address,
    },

    /// An investigator was assigned to a case.
    InvestigatorAssigned {
        /// Journal sequence of the committing transaction.
        sequence: u64,
        /// Updated case.
        case_id: CaseId,
        /// Assigned investigator.
        investigator: Address,
    },

    /// A case changed status.
    CaseStatusUpdated {
        /// Journal sequence of the committing transaction.
        sequence: u64,
        /// Updated case.
        case_id: CaseId,
        /// New status.
        status: CaseStatus,
    },

    // =========================================================================
    // SUBSYSTEM 3: APPOINTMENT LEDGER
    // =========================================================================
    /// An appointment was booked.
    AppointmentBooked {
        /// Journal sequence of the committing transaction.
        sequence: u64,
        /// New appointment id.
        appointment_id: AppointmentId,
        /// Case the appointment is about.
        case_id: CaseId,
        /// Investigator to meet.
        investigator: Address,
        /// Requested meeting time.
        scheduled_at: Timestamp,
    },

    /// Value moved between ledger accounts as part of a booking.
    FeeTransferred {
        /// Journal sequence of the committing transaction.
        sequence: u64,
        /// Paying account.
        from: Address,
        /// Receiving account.
        to: Address,
        /// Amount moved.
        amount: Amount,
    },
}

impl LedgerEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::GenesisInitialized { .. } => EventTopic::Ledger,
            Self::UserRegistered { .. } => EventTopic::Identity,
            Self::CaseReported { .. }
            | Self::InvestigatorAssigned { .. }
            | Self::CaseStatusUpdated { .. } => EventTopic::Cases,
            Self::AppointmentBooked { .. } => EventTopic::Appointments,
            Self::FeeTransferred { .. } => EventTopic::Payments,
        }
    }

    /// Get the originating subsystem ID (0 for the runtime).
    #[must_use]
    pub fn source_subsystem(&self) -> u8 {
        match self {
            Self::GenesisInitialized { .. } => 0,
            Self::UserRegistered { .. } => 1,
            Self::CaseReported { .. }
            | Self::InvestigatorAssigned { .. }
            | Self::CaseStatusUpdated { .. } => 2,
            Self::AppointmentBooked { .. } | Self::FeeTransferred { .. } => 3,
        }
    }

    /// Journal sequence of the transaction that produced this event.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        match self {
            Self::GenesisInitialized { .. } => 0,
            Self::UserRegistered { sequence, .. }
            | Self::CaseReported { sequence, .. }
            | Self::InvestigatorAssigned { sequence, .. }
            | Self::CaseStatusUpdated { sequence, .. }
            | Self::AppointmentBooked { sequence, .. }
            | Self::FeeTransferred { sequence, .. } => *sequence,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Runtime lifecycle events.
    Ledger,
    /// Subsystem 1 events.
    Identity,
    /// Subsystem 2 events.
    Cases,
    /// Subsystem 3 booking events.
    Appointments,
    /// Value transfers.
    Payments,
    /// All events (no filtering).
    All,
}

impl EventTopic {
    /// Lowercase label, used in metrics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ledger => "ledger",
            Self::Identity => "identity",
            Self::Cases => "cases",
            Self::Appointments => "appointments",
            Self::Payments => "payments",
            Self::All => "all",
        }
    }
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Source subsystems to include. Empty means all sources.
    pub source_subsystems: Vec<u8>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            source_subsystems: Vec::new(),
        }
    }

    /// Create a filter for events from specific subsystems.
    #[must_use]
    pub fn from_subsystems(subsystems: Vec<u8>) -> Self {
        Self {
            topics: Vec::new(),
            source_subsystems: subsystems,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &LedgerEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let source_match = self.source_subsystems.is_empty()
            || self.source_subsystems.contains(&event.source_subsystem());

        topic_match && source_match
    }
}
