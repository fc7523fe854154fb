//! # Identity Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, Role};

/// A registered identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Wallet address; unique and immutable.
    pub address: Address,
    /// National identity number as entered at registration.
    pub national_id: String,
    /// Display name.
    pub name: String,
    /// Role chosen at registration; never updated.
    pub role: Role,
}

impl User {
    /// Returns true if the user holds `role`.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// Public view of an investigator, as listed to reporters and admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigatorSummary {
    /// Investigator's wallet address.
    pub address: Address,
    /// Investigator's display name.
    pub name: String,
}

impl From<&User> for InvestigatorSummary {
    fn from(user: &User) -> Self {
        Self {
            address: user.address,
            name: user.name.clone(),
        }
    }
}
