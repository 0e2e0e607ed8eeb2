//! Proceeds split for a settled purchase.
//!
//! The payment is divided between seller and platform owner with
//! floor division on each share. Any sub-unit remainder accrues to
//! nobody — a documented rounding-down policy, not a bug. The invariant
//! `seller_share + owner_share <= payment` always holds.

use curio_types::constants::{PERCENT_DENOMINATOR, PLATFORM_FEE_PERCENT};
use rust_decimal::Decimal;

/// The two credits produced by one settled payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProceedsSplit {
    /// `floor(payment * 98 / 100)` — credited to the seller.
    pub seller_share: Decimal,
    /// `floor(payment * 2 / 100)` — credited to the platform owner.
    pub owner_share: Decimal,
}

impl ProceedsSplit {
    /// Sum of both shares. At most the payment that produced them.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.seller_share + self.owner_share
    }
}

/// Compute the seller/owner split for a payment.
#[must_use]
pub fn split_payment(payment: Decimal) -> ProceedsSplit {
    let denominator = Decimal::from(PERCENT_DENOMINATOR);
    let owner_percent = Decimal::from(PLATFORM_FEE_PERCENT);
    let seller_percent = Decimal::from(PERCENT_DENOMINATOR - PLATFORM_FEE_PERCENT);

    ProceedsSplit {
        seller_share: (payment * seller_percent / denominator).floor(),
        owner_share: (payment * owner_percent / denominator).floor(),
    }
}
