//! # curio-market
//!
//! The listing registry, settlement engine, and marketplace facade for
//! the **Curio** fixed-price marketplace ledger.
//!
//! ## Architecture
//!
//! 1. **ListingBook**: keyed store of active listings, one per asset
//! 2. **ApprovalSet**: write-once collection display flags
//! 3. **split_payment**: the floor-division seller/owner proceeds split
//! 4. **Ports**: [`AssetRegistry`] and [`FundsOutlet`] trait seams to the
//!    external collaborators
//! 5. **Marketplace**: orchestrates list / update / cancel / buy /
//!    withdraw / approve as single atomic invocations under the reentry
//!    guard
//!
//! ## Settlement flow
//!
//! ```text
//! buy -> guard.try_enter() -> checks -> credit earnings
//!     -> remove listing -> AssetRegistry::transfer -> Bought event
//! ```
//!
//! The listing is removed **before** the external transfer: state that
//! gates re-entry is cleared before control leaves this system.

pub mod approvals;
pub mod listing_book;
pub mod marketplace;
pub mod ports;
pub mod split;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testkit;

pub use approvals::ApprovalSet;
pub use listing_book::{ListingBook, ListingStore};
pub use marketplace::Marketplace;
pub use ports::{AssetRegistry, FundsOutlet};
pub use split::{ProceedsSplit, split_payment};
