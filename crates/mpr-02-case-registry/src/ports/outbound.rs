//! # Outbound Ports (Driven Side)
//!
//! What the case registry needs from the identity subsystem.

use shared_types::Address;

/// Read-only role lookups against the identity registry.
///
/// Implemented by the runtime over its committed identity state.
pub trait IdentityGateway {
    /// Is `identity` registered with the Admin role?
    fn is_admin(&self, identity: &Address) -> bool;

    /// Is `identity` registered with the Reporter role?
    fn is_reporter(&self, identity: &Address) -> bool;

    /// Is `identity` registered with the Investigator role?
    fn is_investigator(&self, identity: &Address) -> bool;
}
