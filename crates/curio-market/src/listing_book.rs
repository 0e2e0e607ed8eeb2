//! The listing registry — keyed store of active listings.
//!
//! Enforces the structural half of the one-active-listing-per-asset
//! invariant: the map holds at most one record per [`AssetKey`], and only
//! records with a strictly positive price ever enter it. The behavioral
//! half (ownership and fee preconditions) lives in the marketplace facade.

use std::collections::HashMap;

use curio_types::{AssetKey, Listing};
use rust_decimal::Decimal;

/// Store interface for active listings.
///
/// The marketplace is generic over this trait so tests can substitute
/// instrumented stores and assert exact before/after snapshots.
pub trait ListingStore {
    /// The listing stored under `key`, if any.
    fn get(&self, key: &AssetKey) -> Option<&Listing>;

    /// Store a listing under `key`, replacing any previous record.
    fn insert(&mut self, key: AssetKey, listing: Listing);

    /// Mutate the price in place, leaving the seller untouched.
    /// Returns `false` if no listing exists for `key`.
    fn update_price(&mut self, key: &AssetKey, price: Decimal) -> bool;

    /// Remove and return the listing under `key`.
    fn remove(&mut self, key: &AssetKey) -> Option<Listing>;

    /// Whether an active listing exists for `key`. Absence and a
    /// zero-price record are equivalent ("not listed").
    fn is_active(&self, key: &AssetKey) -> bool {
        self.get(key).is_some_and(Listing::is_active)
    }
}

/// In-memory listing registry.
#[derive(Debug, Default)]
pub struct ListingBook {
    listings: HashMap<AssetKey, Listing>,
}

impl ListingBook {
    /// Create a new empty book.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listings: HashMap::new(),
        }
    }

    /// Number of stored listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the book holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingStore for ListingBook {
    fn get(&self, key: &AssetKey) -> Option<&Listing> {
        self.listings.get(key)
    }

    fn insert(&mut self, key: AssetKey, listing: Listing) {
        self.listings.insert(key, listing);
    }

    fn update_price(&mut self, key: &AssetKey, price: Decimal) -> bool {
        match self.listings.get_mut(key) {
            Some(listing) => {
                listing.price = price;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, key: &AssetKey) -> Option<Listing> {
        self.listings.remove(key)
    }
}
