//! HTTP gateway
//!
//! Thin plumbing: route table, request decoding, status mapping. All
//! engineering content lives in [`crate::transfer`].

pub mod handlers;
pub mod state;
pub mod types;

pub use state::AppState;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::GatewayConfig;

/// Build the API router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/accounts", post(handlers::create_account))
        .route("/api/v1/accounts/{id}", get(handlers::get_account))
        .route(
            "/api/v1/transfers",
            post(handlers::create_transfer).get(handlers::list_transfers),
        )
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn serve(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("gateway listening on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
