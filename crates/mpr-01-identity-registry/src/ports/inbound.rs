//! # Driving Ports (API - Inbound)
//!
//! The public API of the identity registry. The ledger runtime drives
//! `register` inside a transaction; the queries are served from snapshots.

use crate::domain::entities::{InvestigatorSummary, User};
use crate::domain::errors::IdentityError;
use crate::domain::registry::IdentityRegistry;
use shared_types::{Address, CallContext, Role};

/// Primary API of the identity registry.
pub trait IdentityRegistryApi {
    // === Commands ===

    /// Register the calling identity.
    ///
    /// # Errors
    ///
    /// `AlreadyRegistered` or `InvalidInput`; nothing is written on error.
    fn register(
        &mut self,
        ctx: &CallContext,
        national_id: &str,
        name: &str,
        role: Role,
    ) -> Result<(), IdentityError>;

    // === Queries ===

    /// Look up a user.
    ///
    /// # Errors
    ///
    /// `NotFound` if unregistered.
    fn get_user(&self, identity: &Address) -> Result<User, IdentityError>;

    /// Admin predicate; false for unregistered identities.
    fn is_admin(&self, identity: &Address) -> bool;

    /// Reporter predicate; false for unregistered identities.
    fn is_reporter(&self, identity: &Address) -> bool;

    /// All investigators in registration order.
    fn list_investigators(&self) -> Vec<InvestigatorSummary>;

    /// The registry owner.
    fn owner(&self) -> Address;
}

impl IdentityRegistryApi for IdentityRegistry {
    fn register(
        &mut self,
        ctx: &CallContext,
        national_id: &str,
        name: &str,
        role: Role,
    ) -> Result<(), IdentityError> {
        IdentityRegistry::register(self, ctx.caller, national_id, name, role)
    }

    fn get_user(&self, identity: &Address) -> Result<User, IdentityError> {
        IdentityRegistry::get_user(self, identity).cloned()
    }

    fn is_admin(&self, identity: &Address) -> bool {
        IdentityRegistry::is_admin(self, identity)
    }

    fn is_reporter(&self, identity: &Address) -> bool {
        IdentityRegistry::is_reporter(self, identity)
    }

    fn list_investigators(&self) -> Vec<InvestigatorSummary> {
        IdentityRegistry::list_investigators(self)
    }

    fn owner(&self) -> Address {
        IdentityRegistry::owner(self)
    }
}
