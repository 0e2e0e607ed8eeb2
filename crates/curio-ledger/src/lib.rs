//! # curio-ledger
//!
//! The earnings ledger and the reentry guard for the Curio marketplace.
//!
//! ## Architecture
//!
//! - [`EarningsLedger`]: accumulated proceeds per account, behind the
//!   [`EarningsStore`] trait. Credited by settlement splits and listing
//!   fees; only decremented by pull-based withdrawal, which zeroes the
//!   full balance before any funds leave the system.
//! - [`ReentryGuard`]: call-scoped mutual exclusion wrapping every
//!   operation that mutates shared ledger state around an external call.
//!
//! The withdrawal path is the highest-risk surface for fund-duplication
//! bugs; both pieces here exist to keep it safe.

pub mod earnings;
pub mod reentry;

pub use earnings::{EarningsLedger, EarningsStore};
pub use reentry::{ReentryGuard, ReentrySpan};
