//! # Call Context
//!
//! The explicit, already-authenticated session every command is executed
//! under.
//!
//! ## Security Properties
//!
//! - **Context Authority**: `caller` is the sole source of truth for the
//!   acting identity. Command payloads MUST NOT duplicate it.
//! - **Commit Time**: `timestamp` is stamped by the executor at commit, never
//!   by the submitter.
//! - **Value Transfer**: `value` is the amount the caller attached; only
//!   payable commands may carry a non-zero value.

use crate::entities::{Address, Amount, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context a single command is executed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Identifier of the enclosing transaction.
    pub tx_id: Uuid,
    /// Authenticated caller identity.
    pub caller: Address,
    /// Commit timestamp assigned by the executor.
    pub timestamp: Timestamp,
    /// Value attached to the call.
    pub value: Amount,
}

impl CallContext {
    /// Context with no attached value.
    #[must_use]
    pub fn new(caller: Address, timestamp: Timestamp) -> Self {
        Self {
            tx_id: Uuid::new_v4(),
            caller,
            timestamp,
            value: Amount::zero(),
        }
    }

    /// Attach a value to the call.
    #[must_use]
    pub fn with_value(mut self, value: Amount) -> Self {
        self.value = value;
        self
    }

    /// Returns true if the caller attached a non-zero value.
    #[must_use]
    pub fn carries_value(&self) -> bool {
        !self.value.is_zero()
    }
}
