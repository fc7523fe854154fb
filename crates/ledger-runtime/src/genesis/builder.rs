//! # Genesis State Builder
//!
//! Validates the genesis configuration and produces the initial
//! [`LedgerState`].

use crate::accounts::BalanceBook;
use crate::state::LedgerState;
use mpr_01_identity_registry::IdentityRegistry;
use mpr_02_case_registry::CaseRegistry;
use mpr_03_appointment_ledger::{AppointmentLedger, DEFAULT_APPOINTMENT_FEE};
use shared_types::{Address, Amount, Timestamp};
use std::collections::HashSet;
use thiserror::Error;

/// Genesis creation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    /// Owner is the zero address.
    #[error("Genesis owner must not be the zero address")]
    ZeroOwner,

    /// Same account allocated twice.
    #[error("Duplicate genesis allocation for {0}")]
    DuplicateAllocation(Address),

    /// Allocations sum past the amount range.
    #[error("Genesis allocations overflow the supply")]
    SupplyOverflow,
}

/// Genesis configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisConfig {
    /// Identity registry owner and fee payee.
    pub owner: Address,

    /// Fee charged per booking.
    pub appointment_fee: Amount,

    /// Initial balances.
    pub allocations: Vec<(Address, Amount)>,

    /// Genesis timestamp (Unix seconds).
    /// If None, the runtime clock supplies it.
    pub timestamp: Option<Timestamp>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            owner: Address::ZERO,
            appointment_fee: Amount::from(DEFAULT_APPOINTMENT_FEE),
            allocations: Vec::new(),
            timestamp: None,
        }
    }
}

impl GenesisConfig {
    /// Development configuration: `owner` set, everything else default.
    #[must_use]
    pub fn devnet(owner: Address) -> Self {
        Self {
            owner,
            ..Default::default()
        }
    }

    /// Add an initial balance.
    #[must_use]
    pub fn with_allocation(mut self, account: Address, amount: Amount) -> Self {
        self.allocations.push((account, amount));
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.owner.is_zero() {
            return Err(GenesisError::ZeroOwner);
        }

        let mut seen = HashSet::with_capacity(self.allocations.len());
        let mut supply = Amount::zero();
        for (account, amount) in &self.allocations {
            if !seen.insert(*account) {
                return Err(GenesisError::DuplicateAllocation(*account));
            }
            supply = supply
                .checked_add(*amount)
                .ok_or(GenesisError::SupplyOverflow)?;
        }

        Ok(())
    }
}

/// Builder for the initial ledger state.
pub struct GenesisBuilder {
    config: GenesisConfig,
}

impl GenesisBuilder {
    /// Create a new genesis builder with configuration.
    pub fn new(config: GenesisConfig) -> Self {
        Self { config }
    }

    /// Build the genesis state. `fallback_timestamp` is used when the
    /// configuration does not pin one.
    pub fn build(self, fallback_timestamp: Timestamp) -> Result<LedgerState, GenesisError> {
        self.config.validate()?;

        let mut balances = BalanceBook::new();
        for (account, amount) in &self.config.allocations {
            balances
                .credit(*account, *amount)
                .map_err(|_| GenesisError::SupplyOverflow)?;
        }

        Ok(LedgerState::from_genesis(
            IdentityRegistry::new(self.config.owner),
            CaseRegistry::new(),
            AppointmentLedger::new(self.config.appointment_fee),
            balances,
            self.config.timestamp.unwrap_or(fallback_timestamp),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::new([b; 20])
    }

    #[test]
    fn test_default_fee() {
        let config = GenesisConfig::default();
        assert_eq!(
            config.appointment_fee,
            Amount::from(10_000_000_000_000_000u64)
        );
        assert!(config.allocations.is_empty());
    }

    #[test]
    fn test_zero_owner_rejected() {
        let result = GenesisBuilder::new(GenesisConfig::default()).build(0);
        assert_eq!(result.err(), Some(GenesisError::ZeroOwner));
    }

    #[test]
    fn test_duplicate_allocation_rejected() {
        let config = GenesisConfig::devnet(addr(1))
            .with_allocation(addr(2), Amount::from(5u8))
            .with_allocation(addr(2), Amount::from(5u8));
        assert_eq!(
            config.validate(),
            Err(GenesisError::DuplicateAllocation(addr(2)))
        );
    }

    #[test]
    fn test_overflowing_allocations_rejected() {
        let config = GenesisConfig::devnet(addr(1))
            .with_allocation(addr(2), Amount::MAX)
            .with_allocation(addr(3), Amount::one());
        assert_eq!(config.validate(), Err(GenesisError::SupplyOverflow));
    }

    #[test]
    fn test_build_funds_accounts() {
        let config = GenesisConfig::devnet(addr(1))
            .with_allocation(addr(2), Amount::from(700u32))
            .with_allocation(addr(3), Amount::from(300u32));
        let state = GenesisBuilder::new(config).build(1_700_000_000).unwrap();

        assert_eq!(state.balances().balance_of(&addr(2)), Amount::from(700u32));
        assert_eq!(state.balances().total_supply(), Amount::from(1000u32));
        assert_eq!(state.identity().owner(), addr(1));
        assert_eq!(state.journal().height(), 0);
        assert_eq!(state.genesis_timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_pinned_timestamp_wins() {
        let config = GenesisConfig {
            timestamp: Some(42),
            ..GenesisConfig::devnet(addr(1))
        };
        let state = GenesisBuilder::new(config).build(99).unwrap();
        assert_eq!(state.genesis_timestamp(), 42);
    }
}
