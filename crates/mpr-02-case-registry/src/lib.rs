//! # MPR-02 Case Registry - Missing-Person Case Subsystem
//!
//! **Subsystem ID:** 2
//! **Dependency Level:** 1 (authorizes against Subsystem 1)
//!
//! ## Purpose
//!
//! Stores missing-person case records, drives their two one-way
//! transitions (investigator assignment, Missing → Found) and maintains the
//! division index used for search and ranking.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Case ids dense, first id 1, never reused | `domain/registry.rs` - `add_case()` |
//! | INVARIANT-2 | Age 1-120, height 50-250 cm, division code 0-7 | `domain/invariants.rs` - `validate_new_case()` |
//! | INVARIANT-3 | Investigator assigned at most once, only while Missing | `domain/registry.rs` - `assign_investigator()` |
//! | INVARIANT-4 | Status moves Missing → Found only, once | `domain/invariants.rs` - `check_status_transition()` |
//! | INVARIANT-5 | Division index updated in the same step as creation | `domain/registry.rs` - `add_case()` |
//! | INVARIANT-6 | Rejected commands leave the registry untouched | validate-then-write in every command |
//!
//! ## Authorization
//!
//! | Command | Required Role | Enforcement |
//! |---------|---------------|-------------|
//! | `add_case` | Reporter | `domain/registry.rs` |
//! | `assign_investigator` | Admin | `domain/registry.rs` |
//! | `update_status` | Admin | `domain/registry.rs` |
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 1 (Identity) | `IdentityGateway` | Role predicates |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod domain;
pub mod ports;

// Re-export main types
pub use domain::division_index::{DivisionIndex, DivisionRanking};
pub use domain::entities::{Case, NewCase, Urgency};
pub use domain::errors::CaseError;
pub use domain::registry::CaseRegistry;
pub use ports::outbound::IdentityGateway;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::division_index::{DivisionIndex, DivisionRanking};
    pub use crate::domain::entities::{Case, NewCase, Urgency};
    pub use crate::domain::errors::CaseError;
    pub use crate::domain::invariants::{limits, validate_new_case};
    pub use crate::domain::registry::CaseRegistry;
    pub use crate::ports::outbound::IdentityGateway;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Case Registry";
