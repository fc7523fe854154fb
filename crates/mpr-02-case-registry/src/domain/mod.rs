//! # Domain Layer (Inner Hexagon)
//!
//! Pure case bookkeeping. NO I/O, NO async.
//! Role checks go through the `IdentityGateway` port only.

pub mod division_index;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod registry;

pub use division_index::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use registry::*;
