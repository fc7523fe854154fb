//! # Appointment Ledger
//!
//! Append-only appointment store with two lookup indices. Booking
//! validates, transfers, then writes; the write step cannot fail.

use super::entities::{Appointment, BookingRequest};
use super::errors::AppointmentError;
use crate::ports::outbound::{CaseGateway, IdentityGateway, PaymentGateway};
use im::{HashMap, Vector};
use shared_types::{Address, Amount, AppointmentId, CallContext, CaseId};

/// Appointment bookings with fee collection.
#[derive(Debug, Clone)]
pub struct AppointmentLedger {
    fee: Amount,
    /// `appointments[i]` holds appointment id `i + 1`.
    appointments: Vector<Appointment>,
    by_investigator: HashMap<Address, Vector<AppointmentId>>,
    by_case: HashMap<CaseId, Vector<AppointmentId>>,
}

impl AppointmentLedger {
    /// Create an empty ledger charging `fee` per booking.
    #[must_use]
    pub fn new(fee: Amount) -> Self {
        Self {
            fee,
            appointments: Vector::new(),
            by_investigator: HashMap::new(),
            by_case: HashMap::new(),
        }
    }

    /// Fee required per booking.
    #[must_use]
    pub fn appointment_fee(&self) -> Amount {
        self.fee
    }

    /// Book a meeting and forward the attached payment (`ctx.value`) to
    /// the identity registry owner.
    ///
    /// Check order: reporter role, case existence, payment against fee,
    /// then the transfer itself.
    pub fn book_appointment<I, C, P>(
        &mut self,
        identity: &I,
        cases: &C,
        payments: &mut P,
        ctx: &CallContext,
        request: BookingRequest,
    ) -> Result<AppointmentId, AppointmentError>
    where
        I: IdentityGateway + ?Sized,
        C: CaseGateway + ?Sized,
        P: PaymentGateway + ?Sized,
    {
        if !identity.is_reporter(&ctx.caller) {
            return Err(AppointmentError::Unauthorized(ctx.caller));
        }
        if !cases.case_exists(request.case_id) {
            return Err(AppointmentError::CaseNotFound(request.case_id));
        }
        if ctx.value < self.fee {
            return Err(AppointmentError::InsufficientPayment {
                required: self.fee,
                offered: ctx.value,
            });
        }

        payments.transfer(ctx.caller, identity.owner(), ctx.value)?;

        let id = self.appointment_count() + 1;
        self.appointments.push_back(Appointment {
            id,
            case_id: request.case_id,
            reporter: ctx.caller,
            investigator: request.investigator,
            scheduled_at: request.scheduled_at,
            fee_paid: ctx.value,
            booked_at: ctx.timestamp,
        });
        self.by_investigator
            .entry(request.investigator)
            .or_insert_with(Vector::new)
            .push_back(id);
        self.by_case
            .entry(request.case_id)
            .or_insert_with(Vector::new)
            .push_back(id);
        Ok(id)
    }

    /// Appointments with `investigator`, in booking order.
    #[must_use]
    pub fn get_appointments(&self, investigator: &Address) -> Vec<&Appointment> {
        self.resolve(self.by_investigator.get(investigator))
    }

    /// Appointments about `case_id`, in booking order.
    #[must_use]
    pub fn get_appointments_by_case(&self, case_id: CaseId) -> Vec<&Appointment> {
        self.resolve(self.by_case.get(&case_id))
    }

    /// Look up a single appointment.
    #[must_use]
    pub fn appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        id.checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.appointments.get(i))
    }

    /// Number of appointments booked so far.
    #[must_use]
    pub fn appointment_count(&self) -> u64 {
        self.appointments.len() as u64
    }

    fn resolve(&self, ids: Option<&Vector<AppointmentId>>) -> Vec<&Appointment> {
        ids.map(|ids| ids.iter().filter_map(|id| self.appointment(*id)).collect())
            .unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================
