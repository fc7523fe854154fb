//! # Case Errors
//!
//! Rejections raised by case commands. Every variant maps to exactly one
//! `ErrorKind`.

use shared_types::{Address, CaseId, CaseStatus, Classify, ErrorKind, Role};
use thiserror::Error;

/// Errors raised by the case registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// Caller lacks the role the command requires.
    #[error("caller {caller} is not a registered {required}")]
    Unauthorized {
        /// Acting identity.
        caller: Address,
        /// Role the command requires.
        required: Role,
    },

    /// No case with this id.
    #[error("case not found: {0}")]
    NotFound(CaseId),

    /// Target identity is not a registered investigator.
    #[error("investigator not registered: {0}")]
    InvestigatorNotFound(Address),

    /// Case already has an investigator.
    #[error("case {case_id} already assigned to {investigator}")]
    AlreadyAssigned {
        /// Target case.
        case_id: CaseId,
        /// Investigator already on the case.
        investigator: Address,
    },

    /// Case is no longer Missing.
    #[error("case {case_id} is closed (status {status})")]
    CaseClosed {
        /// Target case.
        case_id: CaseId,
        /// Current status.
        status: CaseStatus,
    },

    /// Transition other than Missing to Found.
    #[error("illegal status transition for case {case_id}: {from} -> {to}")]
    IllegalTransition {
        /// Target case.
        case_id: CaseId,
        /// Current status.
        from: CaseStatus,
        /// Requested status.
        to: CaseStatus,
    },

    /// Report failed field validation.
    #[error("invalid case input: {0}")]
    InvalidInput(String),
}

impl Classify for CaseError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::NotFound(_) | Self::InvestigatorNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyAssigned { .. } | Self::CaseClosed { .. } | Self::IllegalTransition { .. } => {
                ErrorKind::InvalidState
            }
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}
