//! # Port Adapters
//!
//! Read-only views over committed subsystem state that implement the
//! outbound ports of the case registry and the appointment ledger.

pub mod gateways;

pub use gateways::{CaseView, IdentityView};
