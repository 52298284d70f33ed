//! In-memory storage backend
//!
//! Live account state is held in slots (the working set the coordinator
//! locks); committed rows live in a separate table written only by
//! `save_both`. The split mirrors a database-backed store: a crash between
//! mutation and save loses nothing that was committed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use rust_decimal::Decimal;

use super::{AccountSlot, AccountStore, StoreError, TransferLedger};
use crate::account::Account;
use crate::core_types::AccountId;
use crate::transfer::types::{NewTransfer, Transfer};

/// In-memory account store
pub struct InMemoryAccountStore {
    slots: DashMap<AccountId, Arc<AccountSlot>>,
    committed: RwLock<HashMap<AccountId, Decimal>>,
    next_id: AtomicU64,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
            committed: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Last committed balance for an account, as a real backend would
    /// report it after a restart.
    pub fn committed_balance(&self, id: AccountId) -> Option<Decimal> {
        self.committed
            .read()
            .expect("committed rows lock poisoned")
            .get(&id)
            .copied()
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, initial_balance: Decimal) -> Result<Account, StoreError> {
        if initial_balance.is_sign_negative() {
            return Err(StoreError::WriteRejected(format!(
                "negative opening balance: {}",
                initial_balance
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let account = Account::new(id, initial_balance);

        self.committed
            .write()
            .expect("committed rows lock poisoned")
            .insert(id, initial_balance);
        self.slots
            .insert(id, Arc::new(AccountSlot::new(account.clone())));

        Ok(account)
    }

    fn find(&self, id: AccountId) -> Result<Option<Arc<AccountSlot>>, StoreError> {
        Ok(self.slots.get(&id).map(|entry| entry.value().clone()))
    }

    fn save_both(&self, first: &Account, second: &Account) -> Result<(), StoreError> {
        // One write guard over the row table = the transaction boundary.
        let mut rows = self
            .committed
            .write()
            .expect("committed rows lock poisoned");

        for account in [first, second] {
            if !rows.contains_key(&account.id()) {
                return Err(StoreError::WriteRejected(format!(
                    "unknown account: {}",
                    account.id()
                )));
            }
        }

        rows.insert(first.id(), first.balance());
        rows.insert(second.id(), second.balance());
        Ok(())
    }
}

/// In-memory append-only transfer ledger
pub struct InMemoryLedger {
    entries: RwLock<Vec<Transfer>>,
    next_id: AtomicU64,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferLedger for InMemoryLedger {
    fn append(&self, entry: NewTransfer) -> Result<Transfer, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = entry.into_record(id);
        self.entries
            .write()
            .expect("ledger lock poisoned")
            .push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Vec<Transfer> {
        self.entries
            .read()
            .expect("ledger lock poisoned")
            .clone()
    }
}
