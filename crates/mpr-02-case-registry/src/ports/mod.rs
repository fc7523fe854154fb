//! # Ports Layer
//!
//! Outbound dependencies of the case registry.

pub mod outbound;

pub use outbound::*;
