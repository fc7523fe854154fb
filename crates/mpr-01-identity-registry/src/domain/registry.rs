//! # Identity Registry
//!
//! Owns user records and answers role predicates.

use super::entities::{InvestigatorSummary, User};
use super::errors::IdentityError;
use im::{HashMap, Vector};
use shared_types::{Address, Role};

/// Registry of identities and their roles.
///
/// Backed by persistent collections: a clone shares storage with the
/// original and only touched paths are copied on write.
#[derive(Debug, Clone)]
pub struct IdentityRegistry {
    /// Administrative identity that initialized the registry.
    owner: Address,
    /// Records by address.
    users: HashMap<Address, User>,
    /// Investigator addresses in registration order.
    investigators: Vector<Address>,
}

impl IdentityRegistry {
    /// Create an empty registry owned by `owner`.
    ///
    /// The owner is not registered implicitly; it registers like anyone else.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            users: HashMap::new(),
            investigators: Vector::new(),
        }
    }

    /// Register `identity` with the given details.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if `identity` already has a record.
    /// - `InvalidInput` if the national id or name is blank.
    pub fn register(
        &mut self,
        identity: Address,
        national_id: &str,
        name: &str,
        role: Role,
    ) -> Result<(), IdentityError> {
        if self.users.contains_key(&identity) {
            return Err(IdentityError::AlreadyRegistered(identity));
        }
        let national_id = national_id.trim();
        let name = name.trim();
        if national_id.is_empty() {
            return Err(IdentityError::InvalidInput(
                "national id must not be empty".to_string(),
            ));
        }
        if name.is_empty() {
            return Err(IdentityError::InvalidInput(
                "name must not be empty".to_string(),
            ));
        }

        // All checks passed; the writes below cannot fail.
        if role == Role::Investigator {
            self.investigators.push_back(identity);
        }
        self.users.insert(
            identity,
            User {
                address: identity,
                national_id: national_id.to_string(),
                name: name.to_string(),
                role,
            },
        );
        Ok(())
    }

    /// Look up a registered identity.
    ///
    /// # Errors
    ///
    /// `NotFound` if `identity` is unregistered.
    pub fn get_user(&self, identity: &Address) -> Result<&User, IdentityError> {
        self.users
            .get(identity)
            .ok_or(IdentityError::NotFound(*identity))
    }

    /// Role of `identity`, if registered.
    #[must_use]
    pub fn role_of(&self, identity: &Address) -> Option<Role> {
        self.users.get(identity).map(|u| u.role)
    }

    /// Returns true if `identity` is registered as `Admin`.
    #[must_use]
    pub fn is_admin(&self, identity: &Address) -> bool {
        self.role_of(identity) == Some(Role::Admin)
    }

    /// Returns true if `identity` is registered as `Reporter`.
    #[must_use]
    pub fn is_reporter(&self, identity: &Address) -> bool {
        self.role_of(identity) == Some(Role::Reporter)
    }

    /// Returns true if `identity` is registered as `Investigator`.
    #[must_use]
    pub fn is_investigator(&self, identity: &Address) -> bool {
        self.role_of(identity) == Some(Role::Investigator)
    }

    /// All investigators in registration order.
    #[must_use]
    pub fn list_investigators(&self) -> Vec<InvestigatorSummary> {
        self.investigators
            .iter()
            .filter_map(|addr| self.users.get(addr))
            .map(InvestigatorSummary::from)
            .collect()
    }

    /// The registry owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Number of registered identities.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
