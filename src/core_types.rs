//! Core types used throughout the system
//!
//! These are fundamental type aliases used by all modules.
//! They provide semantic meaning and enable future type evolution.

/// Account ID - globally unique identifier for an account.
///
/// # Constraints:
/// - **Immutable**: Once assigned at creation, NEVER changes
/// - **Sequential**: Assigned contiguously by the account store (1, 2, 3, ...)
///
/// The canonical lock order is ascending `AccountId`: any code path that
/// locks two accounts must lock the smaller id first.
pub type AccountId = u64;

/// Transfer ID - unique identifier for a completed transfer.
///
/// Assigned by the ledger on append, never reused.
pub type TransferId = u64;
