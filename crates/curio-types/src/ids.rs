//! Globally unique identifiers used throughout Curio.
//!
//! Caller-facing identities use UUIDv7 for time-ordered lexicographic
//! sorting. `AssetId` is the token index assigned by the external asset
//! registry and is opaque to this system.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Unique identifier for a caller / account (seller, buyer, platform owner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CollectionId
// ---------------------------------------------------------------------------

/// Unique identifier for an asset collection in the external registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CollectionId(pub Uuid);

impl CollectionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for CollectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AssetId
// ---------------------------------------------------------------------------

/// Token index of a single asset within a collection.
///
/// Assigned by the external asset registry; Curio never mints these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AssetKey
// ---------------------------------------------------------------------------

/// The `(collection, asset)` pair every listing is keyed by.
///
/// At most one active listing exists per key at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AssetKey {
    pub collection: CollectionId,
    pub asset: AssetId,
}

impl AssetKey {
    #[must_use]
    pub fn new(collection: CollectionId, asset: AssetId) -> Self {
        Self { collection, asset }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.asset)
    }
}

// ---------------------------------------------------------------------------
// SaleId
// ---------------------------------------------------------------------------

/// Unique identifier for one completed sale, carried on `Bought` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SaleId(pub Uuid);

impl SaleId {
    /// Deterministic `SaleId` from the marketplace's sale sequence number.
    ///
    /// Replaying the same invocation history yields the same `SaleId`s, so
    /// external indexers can reconcile across restarts.
    #[must_use]
    pub fn deterministic(sequence: u64) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"curio:sale_id:v1:");
        hasher.update(sequence.to_le_bytes());
        let hash = hasher.finalize();
        let bytes: [u8; 16] = hash[..16].try_into().expect("SHA-256 produces 32 bytes");
        Self(Uuid::from_bytes(bytes))
    }
}

impl fmt::Display for SaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sale:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_uniqueness() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn account_id_ordering() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert!(a < b);
    }

    #[test]
    fn asset_key_display() {
        let key = AssetKey::new(CollectionId::from_bytes([0u8; 16]), AssetId(7));
        assert!(key.to_string().ends_with("/asset:7"));
    }

    #[test]
    fn sale_id_deterministic() {
        let a = SaleId::deterministic(0);
        let b = SaleId::deterministic(0);
        assert_eq!(a, b);
        let c = SaleId::deterministic(1);
        assert_ne!(a, c);
    }

    #[test]
    fn serde_roundtrips() {
        let account = AccountId::new();
        let json = serde_json::to_string(&account).unwrap();
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(account, back);

        let key = AssetKey::new(CollectionId::new(), AssetId(42));
        let json = serde_json::to_string(&key).unwrap();
        let back: AssetKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
    }
}
