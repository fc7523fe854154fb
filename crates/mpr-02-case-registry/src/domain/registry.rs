//! # Case Registry
//!
//! Case records addressed by dense ids plus the division index. Every
//! command validates fully before its first write.

use super::division_index::{DivisionIndex, DivisionRanking};
use super::entities::{Case, NewCase};
use super::errors::CaseError;
use super::invariants::{check_status_transition, validate_new_case};
use crate::ports::outbound::IdentityGateway;
use im::Vector;
use shared_types::{Address, CallContext, CaseId, CaseStatus, Division, Role};

/// Registry of missing-person cases.
///
/// Cloning is cheap: records and index buckets are persistent vectors.
#[derive(Debug, Clone, Default)]
pub struct CaseRegistry {
    /// `cases[i]` holds case id `i + 1`.
    cases: Vector<Case>,
    index: DivisionIndex,
}

impl CaseRegistry {
    /// Create an empty registry. The first case gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// File a new report. Caller must be a Reporter.
    ///
    /// Returns the new case id.
    pub fn add_case<G: IdentityGateway + ?Sized>(
        &mut self,
        identity: &G,
        ctx: &CallContext,
        draft: NewCase,
    ) -> Result<CaseId, CaseError> {
        if !identity.is_reporter(&ctx.caller) {
            return Err(CaseError::Unauthorized {
                caller: ctx.caller,
                required: Role::Reporter,
            });
        }
        let division = validate_new_case(&draft)?;

        let id = self.next_case_id();
        self.cases.push_back(Case {
            id,
            name: draft.name,
            age: draft.age,
            height: draft.height,
            description: draft.description,
            division,
            relative_contact: draft.relative_contact,
            status: CaseStatus::Missing,
            investigator: None,
            reporter: ctx.caller,
            reported_at: ctx.timestamp,
        });
        self.index.record(division, id);
        Ok(id)
    }

    /// Look up a case by id.
    pub fn get_case(&self, case_id: CaseId) -> Result<&Case, CaseError> {
        Self::slot(case_id)
            .and_then(|i| self.cases.get(i))
            .ok_or(CaseError::NotFound(case_id))
    }

    /// Assign an investigator to an open, unassigned case. Admin only.
    pub fn assign_investigator<G: IdentityGateway + ?Sized>(
        &mut self,
        identity: &G,
        ctx: &CallContext,
        case_id: CaseId,
        investigator: Address,
    ) -> Result<(), CaseError> {
        Self::require_admin(identity, ctx)?;
        let case = self.get_case(case_id)?;
        if let Some(current) = case.investigator {
            return Err(CaseError::AlreadyAssigned {
                case_id,
                investigator: current,
            });
        }
        if !case.is_missing() {
            return Err(CaseError::CaseClosed {
                case_id,
                status: case.status,
            });
        }
        if !identity.is_investigator(&investigator) {
            return Err(CaseError::InvestigatorNotFound(investigator));
        }

        self.case_mut(case_id)?.investigator = Some(investigator);
        Ok(())
    }

    /// Move a case to `new_status`. Admin only; Missing → Found is the
    /// only legal transition.
    pub fn update_status<G: IdentityGateway + ?Sized>(
        &mut self,
        identity: &G,
        ctx: &CallContext,
        case_id: CaseId,
        new_status: CaseStatus,
    ) -> Result<(), CaseError> {
        Self::require_admin(identity, ctx)?;
        let current = self.get_case(case_id)?.status;
        check_status_transition(case_id, current, new_status)?;

        self.case_mut(case_id)?.status = new_status;
        Ok(())
    }

    /// Ids of cases reported in `division`, in creation order.
    #[must_use]
    pub fn filter_by_division(&self, division: Division) -> &Vector<CaseId> {
        self.index.filter(division)
    }

    /// Cases reported in `division`, in creation order.
    pub fn cases_in_division(&self, division: Division) -> impl Iterator<Item = &Case> + '_ {
        self.index
            .filter(division)
            .iter()
            .filter_map(move |id| self.get_case(*id).ok())
    }

    /// All divisions with their case counts, ranked.
    #[must_use]
    pub fn rank_divisions(&self, ascending: bool) -> DivisionRanking {
        self.index.rank(ascending)
    }

    /// Number of cases filed so far.
    #[must_use]
    pub fn case_count(&self) -> u64 {
        self.cases.len() as u64
    }

    /// The id the next accepted report will receive.
    #[must_use]
    pub fn next_case_id(&self) -> CaseId {
        self.case_count() + 1
    }

    /// Does a case with this id exist?
    #[must_use]
    pub fn case_exists(&self, case_id: CaseId) -> bool {
        self.get_case(case_id).is_ok()
    }

    /// Read-only view of the division index.
    #[must_use]
    pub fn division_index(&self) -> &DivisionIndex {
        &self.index
    }

    fn require_admin<G: IdentityGateway + ?Sized>(
        identity: &G,
        ctx: &CallContext,
    ) -> Result<(), CaseError> {
        if identity.is_admin(&ctx.caller) {
            Ok(())
        } else {
            Err(CaseError::Unauthorized {
                caller: ctx.caller,
                required: Role::Admin,
            })
        }
    }

    fn slot(case_id: CaseId) -> Option<usize> {
        case_id.checked_sub(1).and_then(|i| usize::try_from(i).ok())
    }

    fn case_mut(&mut self, case_id: CaseId) -> Result<&mut Case, CaseError> {
        Self::slot(case_id)
            .and_then(|i| self.cases.get_mut(i))
            .ok_or(CaseError::NotFound(case_id))
    }
}

// =============================================================================
// TESTS
// =============================================================================
