//! API request/response types
//!
//! All amounts cross the wire as strings (see [`StrictDecimal`]); all
//! responses share the `{code, msg, data}` envelope.

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::core_types::AccountId;
use crate::money::StrictDecimal;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: "OK" for success, a stable error code otherwise
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: "OK".to_string(),
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: &str, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code: code.to_string(),
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    /// String to avoid float precision issues in JSON
    pub amount: StrictDecimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub initial_balance: StrictDecimal,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Account state as exposed over the API
#[derive(Debug, Serialize)]
pub struct AccountData {
    pub id: AccountId,
    pub balance: StrictDecimal,
    pub version: u64,
}

impl From<Account> for AccountData {
    fn from(account: Account) -> Self {
        Self {
            id: account.id(),
            balance: account.balance().into(),
            version: account.version(),
        }
    }
}

/// Health check response data
#[derive(Debug, Serialize)]
pub struct HealthData {
    pub timestamp_ms: u64,
    pub version: &'static str,
    pub git_hash: &'static str,
}
