//! In-memory fakes for the external collaborators.
//!
//! Only compiled for tests or with the `test-helpers` feature enabled.
//! The fakes model the collaborator contracts exactly: the registry
//! rejects transfers from a non-owner, and approval is cleared when an
//! asset changes hands.

use std::collections::HashMap;

use curio_ledger::ReentryGuard;
use curio_types::{AccountId, AssetKey, MarketError, Result};
use rust_decimal::Decimal;

use crate::ports::{AssetRegistry, FundsOutlet};

/// In-memory asset registry fake.
#[derive(Debug, Default)]
pub struct MemoryAssetRegistry {
    owners: HashMap<AssetKey, AccountId>,
    approvals: HashMap<AssetKey, AccountId>,
    refuse_transfers: bool,
}

impl MemoryAssetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an asset with an owner.
    pub fn put(&mut self, key: AssetKey, owner: AccountId) {
        self.owners.insert(key, owner);
    }

    /// Grant `operator` transfer approval for an asset.
    pub fn set_approval(&mut self, key: AssetKey, operator: AccountId) {
        self.approvals.insert(key, operator);
    }

    /// Make every subsequent `transfer` call fail.
    pub fn set_refuse_transfers(&mut self, refuse: bool) {
        self.refuse_transfers = refuse;
    }
}

impl AssetRegistry for MemoryAssetRegistry {
    fn owner_of(&self, key: &AssetKey) -> Option<AccountId> {
        self.owners.get(key).copied()
    }

    fn is_approved_for_transfer(&self, key: &AssetKey, operator: AccountId) -> bool {
        self.approvals.get(key) == Some(&operator)
    }

    fn transfer(&mut self, key: &AssetKey, from: AccountId, to: AccountId) -> Result<()> {
        if self.refuse_transfers {
            return Err(MarketError::TransferFailed {
                reason: format!("registry refused transfer of {key}"),
            });
        }
        match self.owners.get(key) {
            Some(owner) if *owner == from => {
                self.owners.insert(*key, to);
                // Per-asset approval does not survive an ownership change.
                self.approvals.remove(key);
                Ok(())
            }
            _ => Err(MarketError::TransferFailed {
                reason: format!("{from} does not own {key}"),
            }),
        }
    }
}

/// Registry wrapper that probes the reentry guard from inside `transfer`,
/// simulating a callback into the marketplace mid-settlement.
///
/// The guard is wired after construction, once the owning marketplace
/// exists: `market.registry_mut().set_guard(market.reentry_guard())`.
#[derive(Debug)]
pub struct ReentryProbeRegistry {
    inner: MemoryAssetRegistry,
    guard: Option<ReentryGuard>,
    /// Outcome of each reentry attempt observed during `transfer`.
    pub observed: Vec<Result<()>>,
}

impl ReentryProbeRegistry {
    #[must_use]
    pub fn new(inner: MemoryAssetRegistry) -> Self {
        Self {
            inner,
            guard: None,
            observed: Vec::new(),
        }
    }

    pub fn set_guard(&mut self, guard: ReentryGuard) {
        self.guard = Some(guard);
    }
}

impl AssetRegistry for ReentryProbeRegistry {
    fn owner_of(&self, key: &AssetKey) -> Option<AccountId> {
        self.inner.owner_of(key)
    }

    fn is_approved_for_transfer(&self, key: &AssetKey, operator: AccountId) -> bool {
        self.inner.is_approved_for_transfer(key, operator)
    }

    fn transfer(&mut self, key: &AssetKey, from: AccountId, to: AccountId) -> Result<()> {
        if let Some(guard) = &self.guard {
            let attempt = guard.try_enter().map(|_span| ());
            self.observed.push(attempt);
        }
        self.inner.transfer(key, from, to)
    }
}

/// Funds outlet that records every successful push.
#[derive(Debug, Default)]
pub struct RecordingFunds {
    pub pushes: Vec<(AccountId, Decimal)>,
}

impl RecordingFunds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total value pushed out so far.
    #[must_use]
    pub fn total_pushed(&self) -> Decimal {
        self.pushes.iter().map(|(_, amount)| *amount).sum()
    }
}

impl FundsOutlet for RecordingFunds {
    fn push(&mut self, to: AccountId, amount: Decimal) -> Result<()> {
        self.pushes.push((to, amount));
        Ok(())
    }
}

/// Funds outlet that rejects every push.
#[derive(Debug, Default)]
pub struct FailingFunds;

impl FundsOutlet for FailingFunds {
    fn push(&mut self, _to: AccountId, _amount: Decimal) -> Result<()> {
        Err(MarketError::TransferFailed {
            reason: "funds outlet rejected push".into(),
        })
    }
}
