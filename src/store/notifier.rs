//! Log-backed notifier
//!
//! Delivery target for account holders is out of scope here; the service
//! records the notification in the structured log instead. Failures cannot
//! occur, which matches the contract: a notification never affects the
//! transfer that triggered it.

use tracing::info;

use super::Notifier;
use crate::core_types::AccountId;

pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&self, account: AccountId, message: &str) {
        info!(account_id = account, "notification: {}", message);
    }
}
