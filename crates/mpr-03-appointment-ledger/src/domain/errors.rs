//! # Appointment Errors
//!
//! Booking rejections and the payment failures they wrap.

use shared_types::{Address, Amount, CaseId, Classify, ErrorKind};
use thiserror::Error;

/// Errors raised while booking an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentError {
    /// Caller is not a registered reporter.
    #[error("caller {0} is not a registered Reporter")]
    Unauthorized(Address),

    /// Referenced case does not exist.
    #[error("case not found: {0}")]
    CaseNotFound(CaseId),

    /// Attached payment is below the appointment fee.
    #[error("insufficient payment: required {required}, offered {offered}")]
    InsufficientPayment {
        /// Configured fee.
        required: Amount,
        /// Value attached to the call.
        offered: Amount,
    },

    /// Fee transfer failed.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// Errors raised by a `PaymentGateway`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Payer balance below the transfer amount.
    #[error("insufficient funds in {account}: required {required}, available {available}")]
    InsufficientFunds {
        /// Debited account.
        account: Address,
        /// Amount to move.
        required: Amount,
        /// Current balance.
        available: Amount,
    },

    /// Crediting would overflow the payee balance.
    #[error("balance overflow crediting {0}")]
    Overflow(Address),
}

impl Classify for PaymentError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            Self::Overflow(_) => ErrorKind::InvalidState,
        }
    }
}

impl Classify for AppointmentError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::CaseNotFound(_) => ErrorKind::NotFound,
            Self::InsufficientPayment { .. } => ErrorKind::InsufficientPayment,
            Self::Payment(e) => e.kind(),
        }
    }
}
