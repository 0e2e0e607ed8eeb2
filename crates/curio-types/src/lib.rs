//! # curio-types
//!
//! Shared types, errors, and configuration for the **Curio** fixed-price
//! marketplace ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`CollectionId`], [`AssetId`], [`AssetKey`], [`SaleId`]
//! - **Listing model**: [`Listing`]
//! - **Events**: [`MarketEvent`], [`EventRecord`]
//! - **Configuration**: [`MarketConfig`]
//! - **Errors**: [`MarketError`] with `CUR_ERR_` prefix codes
//! - **Constants**: platform fee percentage and friends

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod listing;

// Re-export all primary types at crate root for ergonomic imports:
//   use curio_types::{AccountId, AssetKey, Listing, MarketError, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use listing::*;

// Constants are accessed via `curio_types::constants::FOO`
// (not re-exported to avoid name collisions).
