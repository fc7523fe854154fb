//! # Ports Layer
//!
//! Outbound dependencies of the appointment ledger.

pub mod outbound;

pub use outbound::*;
