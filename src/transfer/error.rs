//! Transfer Error Types
//!
//! Every failure mode is a distinct, identifiable kind. Error codes and
//! HTTP status suggestions keep API responses consistent.

use thiserror::Error;

use crate::account::AccountError;
use crate::core_types::AccountId;

/// Transfer error taxonomy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    // === Validation Errors (rejected before any account access) ===
    #[error("Transfer amount must be positive")]
    InvalidAmount,

    #[error("Source and destination accounts are the same")]
    SameAccount,

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    // === Mutation Errors (detected under both account locks, no side effects) ===
    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Credit would overflow destination balance")]
    Overflow,

    // === Durability Errors ===
    /// The balance pair could not be saved. The in-memory mutation has been
    /// rolled back; no observer sees the failed transfer.
    #[error("Could not persist account balances: {0}")]
    PersistenceFailed(String),

    /// Partial success: balances moved and were persisted, but the audit
    /// record failed. Callers reconcile the ledger - they must NOT retry
    /// the transfer, which would move the funds twice.
    #[error("Transfer applied but audit record failed: {0}")]
    LedgerWriteFailed(String),

    // === System Errors ===
    #[error("Account store unavailable: {0}")]
    StoreUnavailable(String),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            TransferError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            TransferError::Overflow => "OVERFLOW",
            TransferError::PersistenceFailed(_) => "PERSISTENCE_FAILED",
            TransferError::LedgerWriteFailed(_) => "LEDGER_WRITE_FAILED",
            TransferError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount | TransferError::SameAccount => 400,
            TransferError::AccountNotFound(_) => 404,
            TransferError::InsufficientBalance | TransferError::Overflow => 422,
            TransferError::PersistenceFailed(_) | TransferError::LedgerWriteFailed(_) => 500,
            TransferError::StoreUnavailable(_) => 503,
        }
    }
}

impl From<AccountError> for TransferError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::NonPositiveAmount => TransferError::InvalidAmount,
            AccountError::InsufficientBalance => TransferError::InsufficientBalance,
            AccountError::Overflow => TransferError::Overflow,
        }
    }
}
