//! # Identity Errors
//!
//! Rejections raised by the identity registry, classified for callers.

use shared_types::{Address, Classify, ErrorKind};
use thiserror::Error;

/// Errors raised by the identity registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Identity already holds a registration.
    #[error("identity already registered: {0}")]
    AlreadyRegistered(Address),

    /// Identity has no registration.
    #[error("identity not registered: {0}")]
    NotFound(Address),

    /// Blank or malformed registration field.
    #[error("invalid registration: {0}")]
    InvalidInput(String),
}

impl Classify for IdentityError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyRegistered(_) => ErrorKind::AlreadyRegistered,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}
