//! # Domain Layer
//!
//! Booking records and the escrow rule. Balances live behind
//! `PaymentGateway`.

pub mod entities;
pub mod errors;
pub mod ledger;

pub use entities::*;
pub use errors::*;
pub use ledger::*;
