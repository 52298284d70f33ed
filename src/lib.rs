//! transferd - Concurrent Funds Transfer Service
//!
//! Moves funds between accounts without corrupting balances, deadlocking
//! or losing the audit trail.
//!
//! # Modules
//!
//! - [`core_types`] - Core type aliases (AccountId, TransferId)
//! - [`money`] - Format-validated decimal amounts at the API boundary
//! - [`account`] - The account entity and its balance invariant guard
//! - [`store`] - Collaborator traits + in-memory backend
//! - [`transfer`] - The transfer coordinator (lock ordering, atomicity)
//! - [`gateway`] - Axum HTTP surface
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - Rolling-file tracing setup

pub mod account;
pub mod config;
pub mod core_types;
pub mod gateway;
pub mod logging;
pub mod money;
pub mod store;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountError};
pub use core_types::{AccountId, TransferId};
pub use money::StrictDecimal;
pub use store::{
    AccountSlot, AccountStore, InMemoryAccountStore, InMemoryLedger, LoggingNotifier, Notifier,
    StoreError, TransferLedger,
};
pub use transfer::{NewTransfer, Transfer, TransferCoordinator, TransferError};
