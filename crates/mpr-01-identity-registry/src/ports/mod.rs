//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Ports (Inbound)**: `IdentityRegistryApi`
//! - **Driven Ports (Outbound)**: none, this subsystem is a leaf.

pub mod inbound;

pub use inbound::*;
