use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, AppointmentId, CaseId, Timestamp};

/// A booked meeting between a reporter and an investigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Appointment id, dense from 1.
    pub id: AppointmentId,
    /// Case the meeting is about.
    pub case_id: CaseId,
    /// Identity that booked and paid.
    pub reporter: Address,
    /// Investigator the meeting is with.
    pub investigator: Address,
    /// Requested meeting time.
    pub scheduled_at: Timestamp,
    /// Amount transferred to the payee at booking.
    pub fee_paid: Amount,
    /// Commit time of the booking.
    pub booked_at: Timestamp,
}

/// Command payload of `book_appointment`. The payment travels in the
/// call context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Case the meeting is about.
    pub case_id: CaseId,
    /// Investigator to meet.
    pub investigator: Address,
    /// Requested meeting time.
    pub scheduled_at: Timestamp,
}
