//! The listing model: a fixed-price offer to sell one identified asset.
//!
//! A listing is "active" iff its price is strictly positive. Price zero is
//! a reserved sentinel equivalent to "not listed" — it can never be stored
//! through the public surface, which rejects non-positive prices up front.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// A fixed-price offer for a single asset.
///
/// Created by `list`, price-mutated by `update`, destroyed by `buy` or
/// `cancel`. The seller field is set once at creation and never reset by
/// an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Asking price. Strictly positive for any stored listing.
    pub price: Decimal,
    /// The account that created the listing.
    pub seller: AccountId,
}

impl Listing {
    #[must_use]
    pub fn new(price: Decimal, seller: AccountId) -> Self {
        Self { price, seller }
    }

    /// Whether this listing is active (`price > 0`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.price > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_price_is_active() {
        let listing = Listing::new(Decimal::new(100, 0), AccountId::new());
        assert!(listing.is_active());
    }

    #[test]
    fn zero_price_is_inactive() {
        let listing = Listing::new(Decimal::ZERO, AccountId::new());
        assert!(!listing.is_active());
    }

    #[test]
    fn listing_serde_roundtrip() {
        let listing = Listing::new(Decimal::new(2500, 2), AccountId::new());
        let json = serde_json::to_string(&listing).unwrap();
        let back: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing, back);
    }
}
