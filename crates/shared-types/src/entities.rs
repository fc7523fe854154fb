//! # Core Domain Entities
//!
//! Defines the primitives every registry subsystem speaks.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `Role`
//! - **Cases**: `CaseId`, `Division`, `CaseStatus`
//! - **Value**: `Amount`, `Timestamp`, `AppointmentId`

use crate::errors::{AddressParseError, CodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// Ledger value (wei-style integer amount).
pub type Amount = U256;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Case identifier. Dense, the first issued value is 1.
pub type CaseId = u64;

/// Appointment identifier. Dense, the first issued value is 1.
pub type AppointmentId = u64;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 20-byte Ethereum-style account address.
///
/// Identities are opaque to the core; the wallet layer supplies them
/// already authenticated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        <[u8; 20]>::try_from(slice).ok().map(Self)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Full lowercase hex form with `0x` prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes).ok_or(AddressParseError::InvalidLength(bytes.len()))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

/// Role of a registered identity. Wire codes: Admin = 0, Reporter = 1,
/// Investigator = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Role {
    /// Administrators assign investigators and close cases.
    Admin = 0,
    /// Reporters file cases and book appointments.
    Reporter = 1,
    /// Investigators are assigned to cases.
    Investigator = 2,
}

impl Role {
    /// Every role in code order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Reporter, Role::Investigator];

    /// Wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Reporter => "Reporter",
            Role::Investigator => "Investigator",
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = CodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(CodeError::InvalidCode { kind: "role", code })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// CLUSTER B: CASES
// =============================================================================

/// One of the eight fixed geographic divisions used to classify cases.
///
/// The declaration order is the enum order used for wire codes and for
/// breaking ties in division rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Division {
    Dhaka = 0,
    Chittagong = 1,
    Rajshahi = 2,
    Khulna = 3,
    Barisal = 4,
    Sylhet = 5,
    Rangpur = 6,
    Mymensingh = 7,
}

impl Division {
    /// Number of divisions.
    pub const COUNT: usize = 8;

    /// Every division in enum order.
    pub const ALL: [Division; Self::COUNT] = [
        Division::Dhaka,
        Division::Chittagong,
        Division::Rajshahi,
        Division::Khulna,
        Division::Barisal,
        Division::Sylhet,
        Division::Rangpur,
        Division::Mymensingh,
    ];

    /// Wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Position in `Division::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Division::Dhaka => "Dhaka",
            Division::Chittagong => "Chittagong",
            Division::Rajshahi => "Rajshahi",
            Division::Khulna => "Khulna",
            Division::Barisal => "Barisal",
            Division::Sylhet => "Sylhet",
            Division::Rangpur => "Rangpur",
            Division::Mymensingh => "Mymensingh",
        }
    }
}

impl TryFrom<u8> for Division {
    type Error = CodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(CodeError::InvalidCode {
                kind: "division",
                code,
            })
    }
}

/// Case-insensitive lookup by name, e.g. `"dhaka"`.
impl FromStr for Division {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CodeError::UnknownName {
                kind: "division",
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle status of a case. Wire codes: Missing = 0, Found = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CaseStatus {
    Missing = 0,
    Found = 1,
}

impl CaseStatus {
    /// Wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CaseStatus {
    type Error = CodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CaseStatus::Missing),
            1 => Ok(CaseStatus::Found),
            _ => Err(CodeError::InvalidCode {
                kind: "status",
                code,
            }),
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Missing => f.write_str("Missing"),
            CaseStatus::Found => f.write_str("Found"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
