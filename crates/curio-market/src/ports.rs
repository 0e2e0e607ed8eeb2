//! Ports to the external collaborators.
//!
//! The asset registry exclusively owns asset-ownership records; Curio only
//! queries and requests transfers, never writes them directly. The funds
//! outlet is the substrate's value-transfer primitive with explicit
//! success/failure signaling. Both are trait seams so tests can substitute
//! in-memory fakes (see the `testkit` module).

use curio_types::{AccountId, AssetKey, Result};
use rust_decimal::Decimal;

/// The external asset registry: who owns what, and moving that ownership.
pub trait AssetRegistry {
    /// Current owner of the asset, or `None` if the registry has no such
    /// asset.
    fn owner_of(&self, key: &AssetKey) -> Option<AccountId>;

    /// Whether `operator` has been granted transfer approval for this
    /// asset.
    fn is_approved_for_transfer(&self, key: &AssetKey, operator: AccountId) -> bool;

    /// Move the asset from `from` to `to`.
    ///
    /// # Errors
    /// Fails with `TransferFailed` if `from` is not the current owner or
    /// the operator lacks approval.
    fn transfer(&mut self, key: &AssetKey, from: AccountId, to: AccountId) -> Result<()>;
}

/// The substrate's outgoing value-transfer primitive.
pub trait FundsOutlet {
    /// Push `amount` to `to`.
    ///
    /// # Errors
    /// Fails with `TransferFailed` if the push is rejected downstream.
    fn push(&mut self, to: AccountId, amount: Decimal) -> Result<()>;
}
