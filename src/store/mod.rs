//! Storage collaborators
//!
//! The transfer coordinator never talks to a backend directly; it is wired
//! with trait objects for the account store, the audit ledger and the
//! optional notifier. The in-memory backend in [`memory`] is the default
//! wiring; tests inject counting/failing variants of the same traits.

pub mod memory;
pub mod notifier;

pub use memory::{InMemoryAccountStore, InMemoryLedger};
pub use notifier::LoggingNotifier;

use std::sync::{Arc, Mutex, MutexGuard};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::Account;
use crate::core_types::AccountId;
use crate::transfer::types::{NewTransfer, Transfer};

/// Storage backend failure
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("storage rejected write: {0}")]
    WriteRejected(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// An account plus its exclusive lock.
///
/// The slot is the lock handle the coordinator acquires in canonical order.
/// `lock` is crate-private: no call site outside this crate can take two
/// account locks, so the ascending-id protocol cannot be violated elsewhere.
pub struct AccountSlot {
    id: AccountId,
    inner: Mutex<Account>,
}

impl AccountSlot {
    pub(crate) fn new(account: Account) -> Self {
        Self {
            id: account.id(),
            inner: Mutex::new(account),
        }
    }

    /// Account identifier, readable without taking the lock
    #[inline]
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Acquire the account's exclusive lock (blocking).
    pub(crate) fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock().expect("account lock poisoned")
    }

    /// Copy of the current account state, taken under the lock.
    pub fn snapshot(&self) -> Account {
        self.lock().clone()
    }
}

/// Account persistence: load by id, create, and atomically save a pair.
pub trait AccountStore: Send + Sync {
    /// Open a new account with the given non-negative balance.
    fn create(&self, initial_balance: Decimal) -> Result<Account, StoreError>;

    /// Resolve an account id to its slot, or `None` if unknown.
    fn find(&self, id: AccountId) -> Result<Option<Arc<AccountSlot>>, StoreError>;

    /// Durably save two mutated accounts as one atomic unit.
    ///
    /// Either both rows are committed or neither is. The coordinator calls
    /// this while holding both account locks so a concurrent transfer can
    /// never observe one side of a half-saved pair.
    fn save_both(&self, first: &Account, second: &Account) -> Result<(), StoreError>;
}

/// Append-only record of completed transfers.
///
/// Used for audit, not for balance computation.
pub trait TransferLedger: Send + Sync {
    /// Append a completed transfer; the ledger assigns the id.
    fn append(&self, entry: NewTransfer) -> Result<Transfer, StoreError>;

    /// All recorded transfers, in append order.
    fn list(&self) -> Vec<Transfer>;
}

/// Best-effort notification channel.
///
/// Implementations swallow or log their own failures; a notification
/// outcome never affects the transfer that triggered it.
pub trait Notifier: Send + Sync {
    fn notify(&self, account: AccountId, message: &str);
}
