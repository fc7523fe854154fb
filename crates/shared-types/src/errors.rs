//! # Error Types
//!
//! Defines the error taxonomy shared by every subsystem and the parse errors
//! of the primitives in `entities`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coarse classification of a rejected command.
///
/// Subsystem errors carry detailed variants; the external collaborator only
/// needs the kind plus the `Display` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Role predicate failed for the caller.
    Unauthorized,
    /// Referenced identity, case or appointment does not exist.
    NotFound,
    /// Requested transition violates the lifecycle.
    InvalidState,
    /// Value out of its declared bounds.
    InvalidInput,
    /// Attached payment below the appointment fee.
    InsufficientPayment,
    /// Identity already has a record.
    AlreadyRegistered,
    /// Caller's ledger balance cannot cover the transfer.
    InsufficientFunds,
    /// The transaction executor is not running.
    Unavailable,
}

impl ErrorKind {
    /// Stable snake_case label, used for metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidState => "invalid_state",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::InsufficientPayment => "insufficient_payment",
            ErrorKind::AlreadyRegistered => "already_registered",
            ErrorKind::InsufficientFunds => "insufficient_funds",
            ErrorKind::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can be mapped onto the shared taxonomy.
pub trait Classify {
    /// The kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// Failure to parse an `Address` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// Input is not valid hex.
    #[error("invalid hex address: {0}")]
    InvalidHex(String),

    /// Input decoded to the wrong number of bytes.
    #[error("address must be 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// Failure to decode a wire code or a name into an enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Numeric code outside the enum's range.
    #[error("invalid {kind} code: {code}")]
    InvalidCode { kind: &'static str, code: u8 },

    /// Name does not match any variant.
    #[error("unknown {kind} name: {name}")]
    UnknownName { kind: &'static str, name: String },
}
