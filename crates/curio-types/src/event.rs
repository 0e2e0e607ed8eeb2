//! Events emitted by marketplace operations.
//!
//! Events exist for external indexing only. Internal state never reads
//! them back: deleting the whole event log changes nothing about which
//! operations succeed or fail.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, AssetKey, CollectionId, SaleId};

/// One marketplace event, emitted on every committed mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A listing was created, or its price updated (`update` re-emits
    /// with the new price).
    Listed {
        seller: AccountId,
        key: AssetKey,
        price: Decimal,
    },
    /// A purchase settled: payment split, listing removed, asset moved.
    Bought {
        sale_id: SaleId,
        buyer: AccountId,
        key: AssetKey,
        price: Decimal,
    },
    /// The seller cancelled their listing.
    Cancelled { seller: AccountId, key: AssetKey },
    /// A collection was approved for display (write-once).
    Approved {
        by: AccountId,
        collection: CollectionId,
    },
}

/// An event together with the wall-clock time it was committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub at: DateTime<Utc>,
    pub event: MarketEvent,
}

impl EventRecord {
    #[must_use]
    pub fn now(event: MarketEvent) -> Self {
        Self {
            at: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AssetId;

    #[test]
    fn event_serde_roundtrip() {
        let event = MarketEvent::Listed {
            seller: AccountId::new(),
            key: AssetKey::new(CollectionId::new(), AssetId(3)),
            price: Decimal::new(100, 0),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: MarketEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn record_carries_timestamp() {
        let before = Utc::now();
        let record = EventRecord::now(MarketEvent::Approved {
            by: AccountId::new(),
            collection: CollectionId::new(),
        });
        assert!(record.at >= before);
        assert!(record.at <= Utc::now());
    }
}
