//! Funds Transfer Core
//!
//! Moves money between two accounts under per-account exclusive locks.
//!
//! # Lock-ordering protocol
//!
//! Both account locks are always acquired in ascending account-id order,
//! regardless of transfer direction. Two concurrent transfers over the same
//! pair therefore never acquire the locks in opposite orders, which rules
//! out circular wait - the only deadlock-avoidance mechanism this design
//! needs.
//!
//! # Atomicity
//!
//! Debit, credit and the pair-save run inside one critical section (both
//! locks held). The ledger append happens after release; its failure is
//! surfaced as a distinct error because at that point the funds have
//! already moved.

pub mod coordinator;
pub mod error;
pub mod types;


pub use coordinator::TransferCoordinator;
pub use error::TransferError;
pub use types::{NewTransfer, Transfer};
