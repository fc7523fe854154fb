//! # Runtime Errors

use crate::config::ConfigError;
use crate::genesis::GenesisError;
use mpr_01_identity_registry::IdentityError;
use mpr_02_case_registry::CaseError;
use mpr_03_appointment_ledger::AppointmentError;
use shared_types::{Amount, Classify, ErrorKind};
use thiserror::Error;

/// Why a submitted transaction was not committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Rejected by the identity registry.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Rejected by the case registry.
    #[error(transparent)]
    Case(#[from] CaseError),

    /// Rejected by the appointment ledger.
    #[error(transparent)]
    Appointment(#[from] AppointmentError),

    /// Value attached to a command that does not accept it.
    #[error("{command} does not accept value (attached {value})")]
    ValueNotAccepted {
        /// Command name.
        command: &'static str,
        /// Attached value.
        value: Amount,
    },

    /// Executor stopped; the transaction was not applied.
    #[error("ledger executor unavailable")]
    Unavailable,
}

impl Classify for LedgerError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Identity(e) => e.kind(),
            Self::Case(e) => e.kind(),
            Self::Appointment(e) => e.kind(),
            Self::ValueNotAccepted { .. } => ErrorKind::InvalidInput,
            Self::Unavailable => ErrorKind::Unavailable,
        }
    }
}

impl LedgerError {
    /// Shorthand for [`Classify::kind`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        Classify::kind(self)
    }
}

/// Startup failures.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Genesis state could not be built.
    #[error(transparent)]
    Genesis(#[from] GenesisError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Address;

    #[test]
    fn test_kind_passes_through() {
        let err: LedgerError = CaseError::NotFound(9).into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "case not found: 9");

        let err: LedgerError = IdentityError::AlreadyRegistered(Address::ZERO).into();
        assert_eq!(err.kind(), ErrorKind::AlreadyRegistered);
    }

    #[test]
    fn test_runtime_kinds() {
        assert_eq!(LedgerError::Unavailable.kind(), ErrorKind::Unavailable);
        let err = LedgerError::ValueNotAccepted {
            command: "register",
            value: Amount::from(3u8),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "register does not accept value (attached 3)");
    }
}
