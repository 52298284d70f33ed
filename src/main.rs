//! transferd - Concurrent Funds Transfer Service
//!
//! Entry point: load config, init logging, wire the in-memory backend into
//! the transfer coordinator, serve the gateway.

use std::sync::Arc;

use transferd::config::AppConfig;
use transferd::gateway::{self, AppState};
use transferd::logging::init_logging;
use transferd::store::{
    AccountStore, InMemoryAccountStore, InMemoryLedger, LoggingNotifier, Notifier, TransferLedger,
};
use transferd::transfer::TransferCoordinator;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _guard = init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git = env!("GIT_HASH"),
        env = %env,
        "transferd starting"
    );

    let store: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
    let ledger: Arc<dyn TransferLedger> = Arc::new(InMemoryLedger::new());
    let notifier: Arc<dyn Notifier> = Arc::new(LoggingNotifier);

    let coordinator = Arc::new(TransferCoordinator::new(
        store.clone(),
        ledger.clone(),
        Some(notifier),
    ));

    let state = Arc::new(AppState::new(coordinator, store, ledger));
    gateway::serve(&config.gateway, state).await
}
