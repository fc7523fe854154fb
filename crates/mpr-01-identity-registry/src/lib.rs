//! # MPR-01 Identity Registry - Identity & Role Subsystem
//!
//! **Subsystem ID:** 1
//! **Dependency Level:** 0 (leaf, no outbound ports)
//!
//! ## Purpose
//!
//! Registers identities with a national id, display name and role, and is
//! the single source of truth for the role predicates the case registry and
//! the appointment ledger authorize against. It also records the registry
//! owner, the administrative payee of appointment fees.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | One record per identity | `domain/registry.rs` - `register()` |
//! | INVARIANT-2 | Role immutable after registration | no update path exists |
//! | INVARIANT-3 | Investigators listed in registration order | `domain/registry.rs` - `investigators` |
//! | INVARIANT-4 | Owner fixed at initialization | `domain/registry.rs` - `new()` |
//!
//! ## Trust Model
//!
//! The role is supplied by the registering caller. There is no approval
//! step; any identity may register itself as `Admin`.
//!
//! ## Usage Example
//!
//! ```
//! use mpr_01_identity_registry::prelude::*;
//! use shared_types::{Address, Role};
//!
//! let owner = Address::new([0xB0; 20]);
//! let mut registry = IdentityRegistry::new(owner);
//!
//! let reporter = Address::new([0xA0; 20]);
//! registry.register(reporter, "1990123456", "Rahim", Role::Reporter).unwrap();
//!
//! assert!(registry.is_reporter(&reporter));
//! assert!(!registry.is_admin(&reporter));
//! assert_eq!(registry.owner(), owner);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod domain;
pub mod ports;

// Re-export main types
pub use domain::entities::{InvestigatorSummary, User};
pub use domain::errors::IdentityError;
pub use domain::registry::IdentityRegistry;
pub use ports::inbound::IdentityRegistryApi;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::{InvestigatorSummary, User};
    pub use crate::domain::errors::IdentityError;
    pub use crate::domain::registry::IdentityRegistry;
    pub use crate::ports::inbound::IdentityRegistryApi;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Identity Registry";
