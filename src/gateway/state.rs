//! Shared gateway state

use std::sync::Arc;

use crate::store::{AccountStore, TransferLedger};
use crate::transfer::TransferCoordinator;

/// Application state shared across handlers
pub struct AppState {
    pub coordinator: Arc<TransferCoordinator>,
    pub store: Arc<dyn AccountStore>,
    pub ledger: Arc<dyn TransferLedger>,
}

impl AppState {
    pub fn new(
        coordinator: Arc<TransferCoordinator>,
        store: Arc<dyn AccountStore>,
        ledger: Arc<dyn TransferLedger>,
    ) -> Self {
        Self {
            coordinator,
            store,
            ledger,
        }
    }
}
