//! # Balance Book
//!
//! Ledger account balances. Funded once at genesis; afterwards value only
//! moves through `transfer`, so the total supply never changes.

use im::HashMap;
use mpr_03_appointment_ledger::domain::PaymentError;
use mpr_03_appointment_ledger::ports::PaymentGateway;
use shared_types::{Address, Amount};

/// Balances of every ledger account. Unknown accounts hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceBook {
    balances: HashMap<Address, Amount>,
}

impl BalanceBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `amount` into `account`. Genesis only.
    pub(crate) fn credit(&mut self, account: Address, amount: Amount) -> Result<(), PaymentError> {
        let current = self.balance_of(&account);
        let next = current
            .checked_add(amount)
            .ok_or(PaymentError::Overflow(account))?;
        self.balances.insert(account, next);
        Ok(())
    }

    /// Balance of `account`.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Sum of all balances.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.balances
            .values()
            .fold(Amount::zero(), |acc, b| acc.saturating_add(*b))
    }

    /// Number of accounts with a non-zero balance.
    #[must_use]
    pub fn funded_accounts(&self) -> usize {
        self.balances.values().filter(|b| !b.is_zero()).count()
    }
}

impl PaymentGateway for BalanceBook {
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), PaymentError> {
        let available = self.balance_of(&from);
        let debited = available
            .checked_sub(amount)
            .ok_or(PaymentError::InsufficientFunds {
                account: from,
                required: amount,
                available,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(PaymentError::Overflow(to))?;

        self.balances.insert(from, debited);
        self.balances.insert(to, credited);
        Ok(())
    }
}
