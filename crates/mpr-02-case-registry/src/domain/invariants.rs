//! # Case Invariants
//!
//! Input bounds and the status state machine. Pure checks, no mutation.

use super::entities::NewCase;
use super::errors::CaseError;
use shared_types::{CaseId, CaseStatus, Division};

/// Accepted input ranges.
pub mod limits {
    /// Youngest accepted age in years.
    pub const MIN_AGE: u16 = 1;
    /// Oldest accepted age in years.
    pub const MAX_AGE: u16 = 120;
    /// Shortest accepted height in centimetres.
    pub const MIN_HEIGHT_CM: u16 = 50;
    /// Tallest accepted height in centimetres.
    pub const MAX_HEIGHT_CM: u16 = 250;
}

/// Validate a submitted report and resolve its division code.
pub fn validate_new_case(draft: &NewCase) -> Result<Division, CaseError> {
    if draft.name.trim().is_empty() {
        return Err(CaseError::InvalidInput("name must not be blank".into()));
    }
    if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&draft.age) {
        return Err(CaseError::InvalidInput(format!(
            "age {} outside {}..={}",
            draft.age,
            limits::MIN_AGE,
            limits::MAX_AGE
        )));
    }
    if !(limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM).contains(&draft.height) {
        return Err(CaseError::InvalidInput(format!(
            "height {} cm outside {}..={}",
            draft.height,
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM
        )));
    }
    Division::try_from(draft.division).map_err(|e| CaseError::InvalidInput(e.to_string()))
}

/// Only Missing → Found is legal.
pub fn check_status_transition(
    case_id: CaseId,
    from: CaseStatus,
    to: CaseStatus,
) -> Result<(), CaseError> {
    match (from, to) {
        (CaseStatus::Missing, CaseStatus::Found) => Ok(()),
        _ => Err(CaseError::IllegalTransition { case_id, from, to }),
    }
}
