//! # Shared Types Crate
//!
//! This crate contains the domain primitives, the per-call context and the
//! error taxonomy shared by every registry subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Context-Only Identity**: Commands never carry a `caller` field in their
//!   payload; the `CallContext` supplied by the executor is authoritative.
//! - **Stable Wire Codes**: `Role`, `Division` and `CaseStatus` keep the small
//!   integer encoding the client already speaks.

pub mod entities;
pub mod envelope;
pub mod errors;

pub use entities::*;
pub use envelope::CallContext;
pub use errors::*;
