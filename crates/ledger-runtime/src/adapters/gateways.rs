//! # Gateway Views
//!
//! Subsystems never reference each other directly; the runtime lends them
//! borrowed views of their neighbours for the duration of one command.

use mpr_01_identity_registry::IdentityRegistry;
use mpr_02_case_registry::CaseRegistry;
use shared_types::{Address, CaseId};

/// Identity lookups backed by the identity registry.
#[derive(Debug, Clone, Copy)]
pub struct IdentityView<'a>(pub &'a IdentityRegistry);

impl mpr_02_case_registry::ports::IdentityGateway for IdentityView<'_> {
    fn is_admin(&self, identity: &Address) -> bool {
        self.0.is_admin(identity)
    }

    fn is_reporter(&self, identity: &Address) -> bool {
        self.0.is_reporter(identity)
    }

    fn is_investigator(&self, identity: &Address) -> bool {
        self.0.is_investigator(identity)
    }
}

impl mpr_03_appointment_ledger::ports::IdentityGateway for IdentityView<'_> {
    fn is_reporter(&self, identity: &Address) -> bool {
        self.0.is_reporter(identity)
    }

    fn owner(&self) -> Address {
        self.0.owner()
    }
}

/// Case lookups backed by the case registry.
#[derive(Debug, Clone, Copy)]
pub struct CaseView<'a>(pub &'a CaseRegistry);

impl mpr_03_appointment_ledger::ports::CaseGateway for CaseView<'_> {
    fn case_exists(&self, case_id: CaseId) -> bool {
        self.0.case_exists(case_id)
    }
}
