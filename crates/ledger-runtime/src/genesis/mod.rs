//! # Genesis Module
//!
//! Builds the ledger state the executor starts from.
//!
//! ## Genesis Properties
//!
//! - Owner: the administrative identity that receives appointment fees
//! - Journal height: 0
//! - No identities, cases or appointments
//! - Balances: the configured allocations, nothing else
//!
//! Genesis is not a journal entry. Its announcement on the event bus
//! carries sequence 0; the first committed transaction is sequence 1.

pub mod builder;

pub use builder::{GenesisBuilder, GenesisConfig, GenesisError};
