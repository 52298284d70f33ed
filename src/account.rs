//! ENFORCED ACCOUNT TYPE
//!
//! This is the single source of truth for balance mutation.
//! ALL balance changes MUST go through `debit` / `credit`.
//!
//! # Enforcement Strategy:
//! 1. Fields are PRIVATE - no direct access
//! 2. All mutations return Result - errors are explicit
//! 3. Version auto-increments - audit trail
//! 4. checked arithmetic - overflow protection
//!
//! # Locking
//! The account itself carries no lock. Its exclusive lock lives in the
//! store's [`AccountSlot`](crate::store::AccountSlot) and the transfer
//! coordinator is the only code path allowed to take two of them at once.
//! Callers must hold that lock before invoking either mutation; this type
//! is the innermost critical section.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core_types::AccountId;

/// Errors raised by the account invariant guard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Balance would overflow")]
    Overflow,
}

/// A balance-holding account
///
/// # Invariants (ENFORCED by private fields):
/// - `balance >= 0` at every observable quiescent point
/// - A debit that would go negative is rejected before mutation
/// - Version increments on every successful mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
    version: u64,
}

impl Account {
    /// Create an account with an opening balance.
    ///
    /// The store validates that the opening balance is non-negative before
    /// calling this; the debug assert catches internal misuse.
    pub(crate) fn new(id: AccountId, balance: Decimal) -> Self {
        debug_assert!(!balance.is_sign_negative());
        Self {
            id,
            balance,
            version: 0,
        }
    }

    /// Account identifier (immutable after creation)
    #[inline]
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Current balance (read-only)
    #[inline]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Mutation counter, incremented on every successful debit/credit
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Remove funds from the account.
    ///
    /// # Errors
    /// - [`AccountError::NonPositiveAmount`] if `amount <= 0`
    /// - [`AccountError::InsufficientBalance`] if `balance < amount`
    pub fn debit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::NonPositiveAmount);
        }
        if self.balance < amount {
            return Err(AccountError::InsufficientBalance);
        }
        self.balance -= amount;
        self.version = self.version.wrapping_add(1);
        Ok(())
    }

    /// Add funds to the account.
    ///
    /// # Errors
    /// - [`AccountError::NonPositiveAmount`] if `amount <= 0`
    /// - [`AccountError::Overflow`] if the balance cannot represent the sum
    pub fn credit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::NonPositiveAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;
        self.version = self.version.wrapping_add(1);
        Ok(())
    }

    /// Roll the balance back to a previously captured snapshot.
    ///
    /// Only the coordinator's persistence-failure path may call this, while
    /// still holding the account's exclusive lock.
    pub(crate) fn restore(&mut self, snapshot: Decimal) {
        self.balance = snapshot;
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn credit_increases_balance_and_version() {
        let mut acct = Account::new(1, dec("100.0"));
        acct.credit(dec("50.5")).unwrap();
        assert_eq!(acct.balance(), dec("150.5"));
        assert_eq!(acct.version(), 1);
    }

    #[test]
    fn debit_decreases_balance() {
        let mut acct = Account::new(1, dec("100.0"));
        acct.debit(dec("40.0")).unwrap();
        assert_eq!(acct.balance(), dec("60.0"));
    }

    #[test]
    fn debit_entire_balance_is_allowed() {
        let mut acct = Account::new(1, dec("100.0"));
        acct.debit(dec("100.0")).unwrap();
        assert_eq!(acct.balance(), Decimal::ZERO);
    }

    #[test]
    fn debit_rejects_insufficient_balance() {
        let mut acct = Account::new(1, dec("50.0"));
        let err = acct.debit(dec("100.0")).unwrap_err();
        assert_eq!(err, AccountError::InsufficientBalance);
        // Mutation rejected before it occurs
        assert_eq!(acct.balance(), dec("50.0"));
        assert_eq!(acct.version(), 0);
    }

    #[test]
    fn debit_rejects_non_positive_amounts() {
        let mut acct = Account::new(1, dec("50.0"));
        assert_eq!(
            acct.debit(Decimal::ZERO).unwrap_err(),
            AccountError::NonPositiveAmount
        );
        assert_eq!(
            acct.debit(dec("-1.0")).unwrap_err(),
            AccountError::NonPositiveAmount
        );
        assert_eq!(acct.balance(), dec("50.0"));
    }

    #[test]
    fn credit_rejects_non_positive_amounts() {
        let mut acct = Account::new(1, dec("50.0"));
        assert_eq!(
            acct.credit(Decimal::ZERO).unwrap_err(),
            AccountError::NonPositiveAmount
        );
        assert_eq!(acct.balance(), dec("50.0"));
    }

    #[test]
    fn restore_rolls_back_to_snapshot() {
        let mut acct = Account::new(1, dec("100.0"));
        let snapshot = acct.balance();
        acct.debit(dec("30.0")).unwrap();
        acct.restore(snapshot);
        assert_eq!(acct.balance(), dec("100.0"));
    }

    #[test]
    fn repeated_decimal_arithmetic_has_no_drift() {
        // 0.1 added ten times must be exactly 1.0 - the reason balances are
        // Decimal and not f64
        let mut acct = Account::new(1, Decimal::ZERO);
        for _ in 0..10 {
            acct.credit(dec("0.1")).unwrap();
        }
        assert_eq!(acct.balance(), dec("1.0"));
    }
}
