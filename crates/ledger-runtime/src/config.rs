//! # Ledger Configuration
//!
//! Genesis parameters and executor limits, with environment overrides.
//!
//! ## Environment Variables
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `MPR_OWNER` | Registry owner and fee payee (hex address) | none, required |
//! | `MPR_APPOINTMENT_FEE` | Fee per booking, decimal base units | `10000000000000000` |
//! | `MPR_GENESIS_ALLOCATIONS` | `0xaddr=amount,...` initial balances | empty, see below |
//! | `MPR_GENESIS_TIMESTAMP` | Pinned genesis time (Unix seconds) | clock |
//! | `MPR_COMMAND_QUEUE_CAPACITY` | Pending transactions before submitters wait | `1024` |
//! | `MPR_EVENT_CHANNEL_CAPACITY` | Events buffered per subscriber | `1000` |
//!
//! Balances exist only from genesis allocations; nothing mints value later.
//! With a non-zero fee and no allocations every `book_appointment` fails
//! with `InsufficientFunds`. Reporters who will book must be funded here.

use crate::genesis::GenesisConfig;
use shared_types::{Address, Amount};
use std::env;
use thiserror::Error;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Genesis configuration.
    pub genesis: GenesisConfig,
    /// Executor configuration.
    pub executor: ExecutorConfig,
}

/// Executor queue sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Transactions queued before `submit` waits for room.
    pub command_queue_capacity: usize,
    /// Events buffered per subscriber before it lags.
    pub event_channel_capacity: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            command_queue_capacity: 1024,
            event_channel_capacity: shared_bus::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No owner configured.
    #[error("Registry owner is not set. Set MPR_OWNER to a non-zero address.")]
    ZeroOwner,

    /// A variable could not be parsed.
    #[error("Invalid value for {var} ({value:?}): {reason}")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
        /// Parse failure.
        reason: String,
    },

    /// A queue capacity of zero.
    #[error("{0} must be greater than zero")]
    ZeroCapacity(&'static str),
}

impl LedgerConfig {
    /// Defaults overridden from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("MPR_OWNER") {
            config.genesis.owner = parse_address("MPR_OWNER", &raw)?;
        }
        if let Some(raw) = lookup("MPR_APPOINTMENT_FEE") {
            config.genesis.appointment_fee = parse_amount("MPR_APPOINTMENT_FEE", &raw)?;
        }
        if let Some(raw) = lookup("MPR_GENESIS_ALLOCATIONS") {
            config.genesis.allocations = parse_allocations(&raw)?;
        }
        if let Some(raw) = lookup("MPR_GENESIS_TIMESTAMP") {
            let ts = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                invalid("MPR_GENESIS_TIMESTAMP", &raw, e.to_string())
            })?;
            config.genesis.timestamp = Some(ts);
        }
        if let Some(raw) = lookup("MPR_COMMAND_QUEUE_CAPACITY") {
            config.executor.command_queue_capacity =
                parse_capacity("MPR_COMMAND_QUEUE_CAPACITY", &raw)?;
        }
        if let Some(raw) = lookup("MPR_EVENT_CHANNEL_CAPACITY") {
            config.executor.event_channel_capacity =
                parse_capacity("MPR_EVENT_CHANNEL_CAPACITY", &raw)?;
        }

        Ok(config)
    }

    /// Can any booking pay its fee under this genesis?
    ///
    /// False when the fee is non-zero and no account is funded.
    #[must_use]
    pub fn funds_bookings(&self) -> bool {
        self.genesis.appointment_fee.is_zero()
            || self
                .genesis
                .allocations
                .iter()
                .any(|(_, amount)| !amount.is_zero())
    }

    /// Reject configurations the runtime cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.genesis.owner.is_zero() {
            return Err(ConfigError::ZeroOwner);
        }
        if self.executor.command_queue_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("command_queue_capacity"));
        }
        if self.executor.event_channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("event_channel_capacity"));
        }
        Ok(())
    }
}

fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_address(var: &'static str, raw: &str) -> Result<Address, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|e: shared_types::AddressParseError| invalid(var, raw, e.to_string()))
}

fn parse_amount(var: &'static str, raw: &str) -> Result<Amount, ConfigError> {
    Amount::from_dec_str(raw.trim()).map_err(|e| invalid(var, raw, format!("{e:?}")))
}

fn parse_capacity(var: &'static str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(var, raw, e.to_string()))
}

/// `0xaddr=amount` pairs separated by commas. Blank entries are skipped.
fn parse_allocations(raw: &str) -> Result<Vec<(Address, Amount)>, ConfigError> {
    const VAR: &str = "MPR_GENESIS_ALLOCATIONS";

    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (account, amount) = entry
                .split_once('=')
                .ok_or_else(|| invalid(VAR, entry, "expected address=amount"))?;
            Ok((parse_address(VAR, account)?, parse_amount(VAR, amount)?))
        })
        .collect()
}
