//! # Outbound Ports (Driven Side)

use crate::domain::errors::PaymentError;
use shared_types::{Address, Amount, CaseId};

/// Identity lookups needed for booking.
pub trait IdentityGateway {
    /// Is `identity` registered with the Reporter role?
    fn is_reporter(&self, identity: &Address) -> bool;

    /// Payee of appointment fees.
    fn owner(&self) -> Address;
}

/// Case lookups needed for booking.
pub trait CaseGateway {
    /// Does a case with this id exist?
    fn case_exists(&self, case_id: CaseId) -> bool;
}

/// Value movement between ledger accounts.
///
/// A transfer either moves the full amount or changes nothing.
pub trait PaymentGateway {
    /// Move `amount` from `from` to `to`.
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), PaymentError>;
}
