//! Transfer Coordinator
//!
//! The single call site that takes two account locks. Validation runs
//! first (no store access on bad input), then both locks are acquired in
//! ascending-id order, the debit/credit pair and the durable save happen
//! inside that critical section, and the ledger append and notifications
//! follow after release.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use super::error::TransferError;
use super::types::{NewTransfer, Transfer};
use crate::core_types::AccountId;
use crate::store::{AccountSlot, AccountStore, Notifier, TransferLedger};

/// Transfer Coordinator - owns the collaborators and the locking protocol
pub struct TransferCoordinator {
    store: Arc<dyn AccountStore>,
    ledger: Arc<dyn TransferLedger>,
    /// Best-effort side channel; absent in deployments without delivery
    notifier: Option<Arc<dyn Notifier>>,
}

impl TransferCoordinator {
    pub fn new(
        store: Arc<dyn AccountStore>,
        ledger: Arc<dyn TransferLedger>,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Self {
        Self {
            store,
            ledger,
            notifier,
        }
    }

    /// Move `amount` from one account to another.
    ///
    /// On success exactly one debit, one credit, one persisted balance
    /// pair and one ledger entry have happened, plus up to two
    /// notifications. On any error before the durability step, no side
    /// effects remain. See [`TransferError::LedgerWriteFailed`] for the
    /// one partial-success case.
    pub fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<Transfer, TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }
        // Self-transfer is rejected outright: the two-lock path below must
        // never see equal ids, or it would lock the same mutex twice.
        if from == to {
            return Err(TransferError::SameAccount);
        }

        let source_slot = self
            .resolve(from)?
            .ok_or(TransferError::AccountNotFound(from))?;
        let dest_slot = self
            .resolve(to)?
            .ok_or(TransferError::AccountNotFound(to))?;

        // Canonical order: smaller id first, independent of direction.
        let (first, second) = if source_slot.id() < dest_slot.id() {
            (&source_slot, &dest_slot)
        } else {
            (&dest_slot, &source_slot)
        };

        let mut first_guard = first.lock();
        let mut second_guard = second.lock();

        let (source, dest) = if first_guard.id() == from {
            (&mut *first_guard, &mut *second_guard)
        } else {
            (&mut *second_guard, &mut *first_guard)
        };

        let source_before = source.balance();
        let dest_before = dest.balance();

        source.debit(amount)?;
        if let Err(e) = dest.credit(amount) {
            source.restore(source_before);
            return Err(e.into());
        }

        // Both rows commit as one unit, still inside the critical section.
        if let Err(e) = self.store.save_both(source, dest) {
            source.restore(source_before);
            dest.restore(dest_before);
            warn!(from, to, %amount, "balance save failed, mutation rolled back: {}", e);
            return Err(TransferError::PersistenceFailed(e.to_string()));
        }

        drop(second_guard);
        drop(first_guard);

        let entry = NewTransfer::new(from, to, amount, Utc::now());
        let record = match self.ledger.append(entry) {
            Ok(record) => record,
            Err(e) => {
                // The money has moved; only the audit record is missing.
                error!(from, to, %amount, "ledger append failed after commit: {}", e);
                return Err(TransferError::LedgerWriteFailed(e.to_string()));
            }
        };

        if let Some(notifier) = &self.notifier {
            notifier.notify(from, &format!("Transferred {} to account {}", amount, to));
            notifier.notify(to, &format!("Received {} from account {}", amount, from));
        }

        info!(transfer_id = record.id, from, to, %amount, "transfer committed");
        Ok(record)
    }

    fn resolve(&self, id: AccountId) -> Result<Option<Arc<AccountSlot>>, TransferError> {
        self.store
            .find(id)
            .map_err(|e| TransferError::StoreUnavailable(e.to_string()))
    }
}
