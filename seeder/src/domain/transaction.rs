//! The transaction that triggers registry seeding.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use uuid::Uuid;

use super::model::LOAD_REGISTRIES_TYPE;

/// A `LoadRegistries` transaction submitted to the ledger.
///
/// The seeder treats it as an opaque trigger; its identifier only tags the
/// tracing span of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadRegistries {
    transaction_id: Uuid,
    timestamp: DateTime<Utc>,
}

impl LoadRegistries {
    /// Create a transaction stamped with the clock's current time.
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            timestamp: clock.utc(),
        }
    }

    /// Rebuild a transaction from an existing identifier and timestamp.
    #[must_use]
    pub const fn from_parts(transaction_id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            transaction_id,
            timestamp,
        }
    }

    /// Qualified type name of the transaction.
    #[must_use]
    pub const fn qualified_type(&self) -> &'static str {
        LOAD_REGISTRIES_TYPE
    }

    /// Transaction identifier.
    #[must_use]
    pub const fn transaction_id(&self) -> Uuid {
        self.transaction_id
    }

    /// Time the transaction was submitted.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
