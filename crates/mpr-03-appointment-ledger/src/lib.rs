//! # MPR-03 Appointment Ledger - Booking & Fee Escrow Subsystem
//!
//! **Subsystem ID:** 3
//! **Dependency Level:** 2 (authorizes against Subsystem 1, checks Subsystem 2)
//!
//! ## Purpose
//!
//! Books meetings between a reporter and an investigator about a case and
//! collects the appointment fee, forwarding the whole payment to the
//! identity registry owner.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Appointment ids dense, first id 1, never reused | `domain/ledger.rs` - `book_appointment()` |
//! | INVARIANT-2 | Payment at least the configured fee | `domain/ledger.rs` - `book_appointment()` |
//! | INVARIANT-3 | Referenced case exists at booking time | `ports/outbound.rs` - `CaseGateway` |
//! | INVARIANT-4 | Transfer and record write commit together | transfer is the last fallible step |
//! | INVARIANT-5 | Appointments immutable once written | no update path exists |
//!
//! ## Escrow Flow
//!
//! ```text
//! reporter ──[payment ≥ fee]──→ book_appointment
//!                                   │
//!                                   ├─ PaymentGateway::transfer(reporter → owner, payment)
//!                                   └─ append Appointment, index by investigator and case
//! ```
//!
//! The payment gateway is handed a scratch copy of the balances by the
//! runtime, so a failure anywhere in the command discards the transfer.
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 1 (Identity) | `IdentityGateway` | Reporter check, fee payee |
//! | 2 (Cases) | `CaseGateway` | Case existence |
//! | Runtime | `PaymentGateway` | Balance transfer |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod domain;
pub mod ports;

// Re-export main types
pub use domain::entities::{Appointment, BookingRequest};
pub use domain::errors::{AppointmentError, PaymentError};
pub use domain::ledger::AppointmentLedger;
pub use ports::outbound::{CaseGateway, IdentityGateway, PaymentGateway};

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::{Appointment, BookingRequest};
    pub use crate::domain::errors::{AppointmentError, PaymentError};
    pub use crate::domain::ledger::AppointmentLedger;
    pub use crate::ports::outbound::{CaseGateway, IdentityGateway, PaymentGateway};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 3;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Appointment Ledger";

/// Fee charged per booking unless configured otherwise (0.01 in 18-decimal
/// base units).
pub const DEFAULT_APPOINTMENT_FEE: u128 = 10_000_000_000_000_000;
