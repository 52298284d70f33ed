//! Transfer record types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core_types::{AccountId, TransferId};

/// A completed transfer, as recorded in the ledger.
///
/// Created once, immutable, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: TransferId,
    pub from_account: AccountId,
    pub to_account: AccountId,
    pub amount: Decimal,
    /// Wall-clock completion time, stamped after both mutations succeeded
    pub executed_at: DateTime<Utc>,
}

/// A transfer awaiting its ledger id.
///
/// The coordinator constructs this after the balance pair is durably saved;
/// the ledger assigns the id on append.
#[derive(Debug, Clone)]
pub struct NewTransfer {
    pub from_account: AccountId,
    pub to_account: AccountId,
    pub amount: Decimal,
    pub executed_at: DateTime<Utc>,
}

impl NewTransfer {
    pub fn new(
        from_account: AccountId,
        to_account: AccountId,
        amount: Decimal,
        executed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            from_account,
            to_account,
            amount,
            executed_at,
        }
    }

    pub fn into_record(self, id: TransferId) -> Transfer {
        Transfer {
            id,
            from_account: self.from_account,
            to_account: self.to_account,
            amount: self.amount,
            executed_at: self.executed_at,
        }
    }
}
