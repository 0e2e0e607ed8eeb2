//! Configuration for a marketplace instance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Marketplace configuration.
///
/// `owner` is fixed at construction and never changes. `list_fee` is the
/// only mutable field, settable through the owner-only `set_list_fee`
/// operation. The platform fee percentage is a compile-time constant
/// ([`crate::constants::PLATFORM_FEE_PERCENT`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// The platform owner: receives listing fees and the platform share
    /// of every sale.
    pub owner: AccountId,
    /// The identity the marketplace presents to the external asset
    /// registry when checking transfer approval.
    pub operator: AccountId,
    /// Fee charged on every `list` and `update` call. Non-negative.
    pub list_fee: Decimal,
}

impl MarketConfig {
    /// Create a configuration with a zero listing fee.
    #[must_use]
    pub fn new(owner: AccountId, operator: AccountId) -> Self {
        Self {
            owner,
            operator,
            list_fee: Decimal::ZERO,
        }
    }

    /// Set the listing fee at construction time.
    #[must_use]
    pub fn with_list_fee(mut self, list_fee: Decimal) -> Self {
        self.list_fee = list_fee;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fee_is_zero() {
        let cfg = MarketConfig::new(AccountId::new(), AccountId::new());
        assert_eq!(cfg.list_fee, Decimal::ZERO);
    }

    #[test]
    fn with_list_fee_sets_fee() {
        let cfg = MarketConfig::new(AccountId::new(), AccountId::new())
            .with_list_fee(Decimal::ONE);
        assert_eq!(cfg.list_fee, Decimal::ONE);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = MarketConfig::new(AccountId::new(), AccountId::new())
            .with_list_fee(Decimal::new(5, 1));
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MarketConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.owner, back.owner);
        assert_eq!(cfg.operator, back.operator);
        assert_eq!(cfg.list_fee, back.list_fee);
    }
}
