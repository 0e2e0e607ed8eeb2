//! Earnings ledger — accumulated proceeds per account.
//!
//! Balances accrue from settlement splits, listing fees, and unsolicited
//! incoming value. They only leave through withdrawal, which zeroes the
//! full balance atomically before any funds are pushed out — never
//! partially. A withdrawal that fails downstream restores the exact
//! pre-invocation balance through [`EarningsStore::restore`].

use std::collections::HashMap;

use curio_types::{AccountId, MarketError, Result};
use rust_decimal::Decimal;

/// Store interface for per-account earnings.
///
/// The marketplace is generic over this trait so tests can substitute
/// instrumented stores and assert exact before/after snapshots.
pub trait EarningsStore {
    /// Add `amount` to the account's balance.
    fn credit(&mut self, account: AccountId, amount: Decimal);

    /// Current balance; zero for accounts never credited.
    fn balance(&self, account: AccountId) -> Decimal;

    /// Zero the account's balance and return what it held.
    ///
    /// # Errors
    /// Returns `NoProceeds` if the balance is zero. The zero-before-send
    /// ordering is the caller's defense against reentrant
    /// double-withdrawal: a recursive call sees an already-zeroed balance.
    fn take_all(&mut self, account: AccountId) -> Result<Decimal>;

    /// Re-credit a balance zeroed by [`take_all`](Self::take_all) after a
    /// failed downstream push. Compensation only.
    fn restore(&mut self, account: AccountId, amount: Decimal) {
        self.credit(account, amount);
    }

    /// Remove `amount` from the account's balance.
    ///
    /// Settlement rollback only — committed balances are never decremented
    /// except through withdrawal.
    ///
    /// # Errors
    /// Returns `BalanceUnderflow` if the balance is short.
    fn debit(&mut self, account: AccountId, amount: Decimal) -> Result<()>;
}

/// In-memory earnings ledger. The source of truth for accumulated
/// proceeds per account.
#[derive(Debug, Default)]
pub struct EarningsLedger {
    balances: HashMap<AccountId, Decimal>,
}

impl EarningsLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    /// Sum of all outstanding balances. Used by conservation checks.
    #[must_use]
    pub fn total_outstanding(&self) -> Decimal {
        self.balances.values().copied().sum()
    }
}

impl EarningsStore for EarningsLedger {
    fn credit(&mut self, account: AccountId, amount: Decimal) {
        *self.balances.entry(account).or_default() += amount;
    }

    fn balance(&self, account: AccountId) -> Decimal {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn take_all(&mut self, account: AccountId) -> Result<Decimal> {
        match self.balances.remove(&account) {
            Some(amount) if amount > Decimal::ZERO => Ok(amount),
            _ => Err(MarketError::NoProceeds),
        }
    }

    fn debit(&mut self, account: AccountId, amount: Decimal) -> Result<()> {
        let balance = self.balances.entry(account).or_default();
        if *balance < amount {
            return Err(MarketError::BalanceUnderflow {
                available: *balance,
                requested: amount,
            });
        }
        *balance -= amount;
        Ok(())
    }
}
