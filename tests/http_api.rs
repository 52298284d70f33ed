//! Black-box API tests
//!
//! Drive the real router in-process, no sockets, via tower's `oneshot`.

use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use transferd::gateway::{self, AppState};
use transferd::store::{AccountStore, InMemoryAccountStore, InMemoryLedger, TransferLedger};
use transferd::transfer::TransferCoordinator;

fn test_router() -> Router {
    let store: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
    let ledger: Arc<dyn TransferLedger> = Arc::new(InMemoryLedger::new());
    let coordinator = Arc::new(TransferCoordinator::new(store.clone(), ledger.clone(), None));
    gateway::router(Arc::new(AppState::new(coordinator, store, ledger)))
}

async fn call(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(v) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create_account(router: &Router, balance: &str) -> u64 {
    let (status, body) = call(
        router,
        "POST",
        "/api/v1/accounts",
        Some(json!({ "initial_balance": balance })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_u64().unwrap()
}

async fn balance_of(router: &Router, id: u64) -> Decimal {
    let (status, body) = call(router, "GET", &format!("/api/v1/accounts/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    Decimal::from_str(body["data"]["balance"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let router = test_router();
    let (status, body) = call(&router, "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "OK");
    assert!(body["data"]["timestamp_ms"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn transfer_happy_path() {
    let router = test_router();
    let a = create_account(&router, "1000.0").await;
    let b = create_account(&router, "500.0").await;

    let (status, body) = call(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": a,
            "to_account_id": b,
            "amount": "200.0"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "OK");
    assert_eq!(body["data"]["from_account"].as_u64().unwrap(), a);
    assert_eq!(body["data"]["to_account"].as_u64().unwrap(), b);

    assert_eq!(balance_of(&router, a).await, Decimal::from_str("800.0").unwrap());
    assert_eq!(balance_of(&router, b).await, Decimal::from_str("700.0").unwrap());

    let (status, body) = call(&router, "GET", "/api/v1/transfers", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        Decimal::from_str(entries[0]["amount"].as_str().unwrap()).unwrap(),
        Decimal::from_str("200.0").unwrap()
    );
}

#[tokio::test]
async fn negative_amount_is_bad_request() {
    let router = test_router();
    let a = create_account(&router, "1000.0").await;
    let b = create_account(&router, "500.0").await;

    let (status, body) = call(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": a,
            "to_account_id": b,
            "amount": "-100.0"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_AMOUNT");
    // Balances untouched
    assert_eq!(balance_of(&router, a).await, Decimal::from_str("1000.0").unwrap());
}

#[tokio::test]
async fn self_transfer_is_bad_request() {
    let router = test_router();
    let a = create_account(&router, "1000.0").await;

    let (status, body) = call(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": a,
            "to_account_id": a,
            "amount": "10.0"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "SAME_ACCOUNT");
}

#[tokio::test]
async fn unknown_account_is_not_found() {
    let router = test_router();
    let b = create_account(&router, "500.0").await;

    let (status, body) = call(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": 999,
            "to_account_id": b,
            "amount": "100.0"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ACCOUNT_NOT_FOUND");

    let (status, _) = call(&router, "GET", "/api/v1/accounts/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn insufficient_balance_is_unprocessable() {
    let router = test_router();
    let a = create_account(&router, "50.0").await;
    let b = create_account(&router, "500.0").await;

    let (status, body) = call(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": a,
            "to_account_id": b,
            "amount": "100.0"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INSUFFICIENT_BALANCE");
    assert_eq!(balance_of(&router, a).await, Decimal::from_str("50.0").unwrap());
    assert_eq!(balance_of(&router, b).await, Decimal::from_str("500.0").unwrap());
}

#[tokio::test]
async fn json_number_amount_is_rejected_at_decode() {
    let router = test_router();
    let a = create_account(&router, "1000.0").await;
    let b = create_account(&router, "500.0").await;

    // Amounts must be strings; binary floats never enter the system
    let (status, _) = call(
        &router,
        "POST",
        "/api/v1/transfers",
        Some(json!({
            "from_account_id": a,
            "to_account_id": b,
            "amount": 100.5
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(balance_of(&router, a).await, Decimal::from_str("1000.0").unwrap());
}

#[tokio::test]
async fn negative_opening_balance_is_rejected() {
    let router = test_router();
    let (status, body) = call(
        &router,
        "POST",
        "/api/v1/accounts",
        Some(json!({ "initial_balance": "-5.0" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "WRITE_REJECTED");
}
