//! The marketplace facade: every public operation as one atomic
//! invocation.
//!
//! Each operation validates every precondition before its first mutation,
//! commits its internal state changes, and only then calls an external
//! collaborator (checks-effects-interactions ordering). The host process
//! has no substrate-level transaction rollback, so the two operations
//! that mutate state ahead of an external call — `buy` and `withdraw` —
//! carry an explicit compensation path restoring the exact
//! pre-invocation state when the external call fails.
//!
//! The reentry guard wraps `buy`, `cancel`, `update`, and `withdraw`:
//! every operation that mutates shared ledger state either before or
//! after an external call.

use curio_ledger::{EarningsLedger, EarningsStore, ReentryGuard};
use curio_types::constants::PLATFORM_FEE_PERCENT;
use curio_types::{
    AccountId, AssetKey, CollectionId, EventRecord, Listing, MarketConfig, MarketError,
    MarketEvent, Result, SaleId,
};
use rust_decimal::Decimal;

use crate::approvals::ApprovalSet;
use crate::listing_book::{ListingBook, ListingStore};
use crate::ports::{AssetRegistry, FundsOutlet};
use crate::split::split_payment;

/// A marketplace instance: listing registry, earnings ledger, approval
/// flags, reentry guard, and the two external collaborators.
///
/// The marketplace exclusively owns its stores; callers only reach them
/// through the operations below.
pub struct Marketplace<R, F, L = ListingBook, E = EarningsLedger> {
    config: MarketConfig,
    listings: L,
    earnings: E,
    approvals: ApprovalSet,
    guard: ReentryGuard,
    registry: R,
    funds: F,
    events: Vec<EventRecord>,
    sale_sequence: u64,
}

impl<R, F> Marketplace<R, F>
where
    R: AssetRegistry,
    F: FundsOutlet,
{
    /// Create a marketplace with the default in-memory stores.
    pub fn new(config: MarketConfig, registry: R, funds: F) -> Self {
        Self::with_stores(config, registry, funds, ListingBook::new(), EarningsLedger::new())
    }
}

impl<R, F, L, E> Marketplace<R, F, L, E>
where
    R: AssetRegistry,
    F: FundsOutlet,
    L: ListingStore,
    E: EarningsStore,
{
    /// Create a marketplace over caller-supplied stores.
    pub fn with_stores(config: MarketConfig, registry: R, funds: F, listings: L, earnings: E) -> Self {
        Self {
            config,
            listings,
            earnings,
            approvals: ApprovalSet::new(),
            guard: ReentryGuard::new(),
            registry,
            funds,
            events: Vec::new(),
            sale_sequence: 0,
        }
    }

    // =====================================================================
    // Listing registry operations
    // =====================================================================

    /// Register an asset for sale at a fixed price.
    ///
    /// The full `fee_paid` (not just the required fee) is credited to the
    /// platform owner's earnings.
    ///
    /// # Errors
    /// `PriceInvalid`, `AlreadyListed`, `NotOwner`, `InsufficientFunds`,
    /// `NotApproved` — checked in that order; a failure leaves no state
    /// change behind.
    pub fn list(
        &mut self,
        key: AssetKey,
        price: Decimal,
        fee_paid: Decimal,
        caller: AccountId,
    ) -> Result<()> {
        self.check_price(price)?;
        if self.listings.is_active(&key) {
            return Err(MarketError::AlreadyListed(key));
        }
        self.check_asset_owner(&key, caller)?;
        self.check_fee(fee_paid)?;
        if !self.registry.is_approved_for_transfer(&key, self.config.operator) {
            return Err(MarketError::NotApproved(key));
        }

        self.earnings.credit(self.config.owner, fee_paid);
        self.listings.insert(key, Listing::new(price, caller));

        tracing::info!(%key, %price, seller = %caller, "listing created");
        self.record(MarketEvent::Listed {
            seller: caller,
            key,
            price,
        });
        Ok(())
    }

    /// Change the price of an existing listing. The seller field is not
    /// reset. Re-emits a `Listed` event with the new price.
    ///
    /// # Errors
    /// `PriceInvalid`, `NotListed`, `NotOwner`, `InsufficientFunds`, or
    /// `ReentrantCall` when re-entered.
    pub fn update(
        &mut self,
        key: AssetKey,
        new_price: Decimal,
        fee_paid: Decimal,
        caller: AccountId,
    ) -> Result<()> {
        let _span = self.guard.try_enter()?;

        self.check_price(new_price)?;
        if !self.listings.is_active(&key) {
            return Err(MarketError::NotListed(key));
        }
        self.check_asset_owner(&key, caller)?;
        self.check_fee(fee_paid)?;

        self.earnings.credit(self.config.owner, fee_paid);
        self.listings.update_price(&key, new_price);

        tracing::info!(%key, price = %new_price, seller = %caller, "listing updated");
        self.record(MarketEvent::Listed {
            seller: caller,
            key,
            price: new_price,
        });
        Ok(())
    }

    /// Remove a listing. Ownership is re-verified against the external
    /// registry, not the stored seller: the asset can change hands
    /// out-of-band, and a stale seller must not keep control of the
    /// listing.
    ///
    /// # Errors
    /// `NotListed`, `NotOwner`, or `ReentrantCall` when re-entered.
    pub fn cancel(&mut self, key: AssetKey, caller: AccountId) -> Result<()> {
        let _span = self.guard.try_enter()?;

        if !self.listings.is_active(&key) {
            return Err(MarketError::NotListed(key));
        }
        self.check_asset_owner(&key, caller)?;

        self.listings.remove(&key);

        tracing::info!(%key, seller = %caller, "listing cancelled");
        self.record(MarketEvent::Cancelled {
            seller: caller,
            key,
        });
        Ok(())
    }

    // =====================================================================
    // Settlement
    // =====================================================================

    /// Purchase a listed asset.
    ///
    /// 1. The listing must exist and the payment meet its price.
    /// 2. The payment is split: seller gets `floor(payment * 98 / 100)`,
    ///    the platform owner gets `floor(payment * 2 / 100)`; both shares
    ///    accumulate onto prior earnings.
    /// 3. The listing is removed **before** the external transfer, so the
    ///    state that gates re-entry is already cleared when control
    ///    leaves this system.
    /// 4. The asset registry moves ownership from seller to buyer. On
    ///    failure, the listing and both credits are restored and the
    ///    whole invocation fails.
    ///
    /// # Errors
    /// `NotListed`, `PriceNotMet`, `TransferFailed`, or `ReentrantCall`
    /// when re-entered.
    pub fn buy(&mut self, key: AssetKey, payment: Decimal, caller: AccountId) -> Result<SaleId> {
        let _span = self.guard.try_enter()?;

        let listing = self
            .listings
            .get(&key)
            .copied()
            .filter(Listing::is_active)
            .ok_or(MarketError::NotListed(key))?;
        if payment < listing.price {
            return Err(MarketError::PriceNotMet {
                key,
                offered: payment,
                asked: listing.price,
            });
        }

        let split = split_payment(payment);
        self.earnings.credit(listing.seller, split.seller_share);
        self.earnings.credit(self.config.owner, split.owner_share);
        self.listings.remove(&key);

        if let Err(err) = self.registry.transfer(&key, listing.seller, caller) {
            // Compensation: restore the exact pre-invocation state.
            self.listings.insert(key, listing);
            self.earnings.debit(listing.seller, split.seller_share)?;
            self.earnings.debit(self.config.owner, split.owner_share)?;
            tracing::warn!(%key, buyer = %caller, %err, "asset transfer failed; settlement rolled back");
            return Err(err);
        }

        let sale_id = SaleId::deterministic(self.sale_sequence);
        self.sale_sequence += 1;

        tracing::info!(
            %sale_id,
            %key,
            buyer = %caller,
            seller = %listing.seller,
            price = %listing.price,
            "sale settled"
        );
        self.record(MarketEvent::Bought {
            sale_id,
            buyer: caller,
            key,
            price: listing.price,
        });
        Ok(sale_id)
    }

    // =====================================================================
    // Withdrawal
    // =====================================================================

    /// Withdraw the caller's full accumulated earnings.
    ///
    /// The balance is zeroed before the push: a recursive call arriving
    /// mid-withdrawal sees zero and gets `NoProceeds`. A failed push
    /// restores the balance, so funds are never lost.
    ///
    /// # Errors
    /// `NoProceeds`, `TransferFailed`, or `ReentrantCall` when re-entered.
    pub fn withdraw(&mut self, caller: AccountId) -> Result<Decimal> {
        let _span = self.guard.try_enter()?;

        let amount = self.earnings.take_all(caller)?;
        if let Err(err) = self.funds.push(caller, amount) {
            self.earnings.restore(caller, amount);
            tracing::warn!(account = %caller, %amount, %err, "funds push failed; balance restored");
            return Err(err);
        }

        tracing::info!(account = %caller, %amount, "withdrawal complete");
        Ok(amount)
    }

    // =====================================================================
    // Collection approval & configuration
    // =====================================================================

    /// Mark a collection approved for display. Write-once; purely
    /// informational.
    ///
    /// # Errors
    /// `AlreadyApproved` if the flag is already set.
    pub fn approve(&mut self, collection: CollectionId, caller: AccountId) -> Result<()> {
        self.approvals.approve(collection)?;

        tracing::info!(%collection, by = %caller, "collection approved");
        self.record(MarketEvent::Approved {
            by: caller,
            collection,
        });
        Ok(())
    }

    /// Set the listing fee. Owner-only.
    ///
    /// # Errors
    /// `NotOwner` for any other caller; `PriceInvalid` for a negative fee.
    pub fn set_list_fee(&mut self, new_fee: Decimal, caller: AccountId) -> Result<()> {
        if caller != self.config.owner {
            return Err(MarketError::NotOwner);
        }
        if new_fee < Decimal::ZERO {
            return Err(MarketError::PriceInvalid { price: new_fee });
        }
        self.config.list_fee = new_fee;
        tracing::info!(fee = %new_fee, "listing fee updated");
        Ok(())
    }

    /// Route an unsolicited incoming transfer to the platform owner's
    /// earnings. Non-positive amounts are ignored.
    pub fn receive_unsolicited(&mut self, amount: Decimal) {
        if amount > Decimal::ZERO {
            self.earnings.credit(self.config.owner, amount);
            tracing::debug!(%amount, "unsolicited transfer routed to owner");
        }
    }

    // =====================================================================
    // Read accessors
    // =====================================================================

    /// The stored listing for `key`, if one exists.
    pub fn listing(&self, key: &AssetKey) -> Option<&Listing> {
        self.listings.get(key)
    }

    /// Accumulated earnings for an account.
    pub fn earnings(&self, account: AccountId) -> Decimal {
        self.earnings.balance(account)
    }

    /// Whether a collection carries the display-approval flag.
    pub fn is_collection_approved(&self, collection: CollectionId) -> bool {
        self.approvals.is_approved(collection)
    }

    /// The current listing fee.
    pub fn list_fee(&self) -> Decimal {
        self.config.list_fee
    }

    /// The constant platform share, in whole percent.
    pub fn platform_fee_percent(&self) -> u32 {
        PLATFORM_FEE_PERCENT
    }

    /// The platform owner.
    pub fn owner(&self) -> AccountId {
        self.config.owner
    }

    /// Drain the emitted events. For external indexing only.
    pub fn take_events(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.events)
    }

    /// Handle to the reentry guard, for wiring collaborators that call
    /// back into this marketplace.
    pub fn reentry_guard(&self) -> ReentryGuard {
        self.guard.clone()
    }

    /// The asset registry collaborator.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access to the asset registry collaborator.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// The funds outlet collaborator.
    pub fn funds(&self) -> &F {
        &self.funds
    }

    /// The earnings store.
    pub fn earnings_store(&self) -> &E {
        &self.earnings
    }

    // =====================================================================
    // Shared precondition checks
    // =====================================================================

    fn check_price(&self, price: Decimal) -> Result<()> {
        if price <= Decimal::ZERO {
            return Err(MarketError::PriceInvalid { price });
        }
        Ok(())
    }

    fn check_fee(&self, fee_paid: Decimal) -> Result<()> {
        if fee_paid < self.config.list_fee {
            return Err(MarketError::InsufficientFunds {
                paid: fee_paid,
                required: self.config.list_fee,
            });
        }
        Ok(())
    }

    /// Re-verify asset ownership against the external registry. Ownership
    /// is never cached: it can change out-of-band, and a stale owner must
    /// not manipulate a listing.
    fn check_asset_owner(&self, key: &AssetKey, caller: AccountId) -> Result<()> {
        match self.registry.owner_of(key) {
            Some(owner) if owner == caller => Ok(()),
            _ => Err(MarketError::NotOwner),
        }
    }

    fn record(&mut self, event: MarketEvent) {
        self.events.push(EventRecord::now(event));
    }
}
