//! HTTP handlers
//!
//! Thin request/response mapping around the transfer core. The coordinator
//! blocks on account locks, so it runs on the blocking pool instead of the
//! async runtime.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::state::AppState;
use super::types::{
    AccountData, ApiResponse, CreateAccountRequest, HealthData, TransferRequest,
};
use crate::core_types::AccountId;
use crate::store::StoreError;
use crate::transfer::{Transfer, TransferError};

type ApiError = (StatusCode, Json<ApiResponse<()>>);

fn transfer_error(err: &TransferError) -> ApiError {
    let status = StatusCode::from_u16(err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ApiResponse::<()>::error(err.code(), err.to_string())))
}

fn store_error(err: &StoreError) -> ApiError {
    let (status, code) = match err {
        StoreError::WriteRejected(_) => (StatusCode::BAD_REQUEST, "WRITE_REJECTED"),
        StoreError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE"),
    };
    (status, Json(ApiResponse::<()>::error(code, err.to_string())))
}

fn internal_error(msg: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL_ERROR", msg)),
    )
}

/// Execute a transfer
///
/// POST /api/v1/transfers
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<ApiResponse<Transfer>>, ApiError> {
    let coordinator = state.coordinator.clone();
    let from = req.from_account_id;
    let to = req.to_account_id;
    let amount = req.amount.inner();

    let result = tokio::task::spawn_blocking(move || coordinator.transfer(from, to, amount))
        .await
        .map_err(|e| internal_error(format!("transfer task panicked: {}", e)))?;

    match result {
        Ok(record) => Ok(Json(ApiResponse::success(record))),
        Err(e) => Err(transfer_error(&e)),
    }
}

/// List all recorded transfers, in append order
///
/// GET /api/v1/transfers
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<Transfer>>> {
    Json(ApiResponse::success(state.ledger.list()))
}

/// Open a new account
///
/// POST /api/v1/accounts
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AccountData>>), ApiError> {
    match state.store.create(req.initial_balance.inner()) {
        Ok(account) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(account.into())),
        )),
        Err(e) => Err(store_error(&e)),
    }
}

/// Query an account's current state
///
/// GET /api/v1/accounts/{id}
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<AccountId>,
) -> Result<Json<ApiResponse<AccountData>>, ApiError> {
    match state.store.find(id) {
        Ok(Some(slot)) => Ok(Json(ApiResponse::success(slot.snapshot().into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error(
                "ACCOUNT_NOT_FOUND",
                format!("Account not found: {}", id),
            )),
        )),
        Err(e) => Err(store_error(&e)),
    }
}

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health() -> Json<ApiResponse<HealthData>> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(ApiResponse::success(HealthData {
        timestamp_ms,
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
    }))
}
