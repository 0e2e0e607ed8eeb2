//! Error types for the Curio marketplace ledger.
//!
//! All errors use the `CUR_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Validation errors
//! - 2xx: State-conflict errors
//! - 3xx: Authorization errors
//! - 4xx: Settlement errors
//! - 5xx: External-call errors
//! - 6xx: Concurrency errors
//! - 9xx: General / internal errors
//!
//! Every error aborts the entire invocation: a failed operation leaves no
//! observable side effects behind.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AssetKey, CollectionId};

/// Central error enum for all Curio operations.
#[derive(Debug, Error)]
pub enum MarketError {
    // =================================================================
    // Validation Errors (1xx)
    // =================================================================
    /// The listing price is not strictly positive (zero is a reserved
    /// sentinel meaning "not listed").
    #[error("CUR_ERR_100: Invalid listing price: {price}")]
    PriceInvalid { price: Decimal },

    /// The fee paid with a list/update call is below the configured fee.
    #[error("CUR_ERR_101: Insufficient funds: paid {paid}, required {required}")]
    InsufficientFunds { paid: Decimal, required: Decimal },

    // =================================================================
    // State-Conflict Errors (2xx)
    // =================================================================
    /// An active listing already exists for this asset.
    #[error("CUR_ERR_200: Asset already listed: {0}")]
    AlreadyListed(AssetKey),

    /// No active listing exists for this asset.
    #[error("CUR_ERR_201: Asset not listed: {0}")]
    NotListed(AssetKey),

    /// The collection has already been approved (write-once flag).
    #[error("CUR_ERR_202: Collection already approved: {0}")]
    AlreadyApproved(CollectionId),

    // =================================================================
    // Authorization Errors (3xx)
    // =================================================================
    /// The caller does not own the asset (or, for owner-only operations,
    /// is not the platform owner).
    #[error("CUR_ERR_300: Caller is not the owner")]
    NotOwner,

    /// The asset registry has not granted the marketplace transfer
    /// approval for this asset.
    #[error("CUR_ERR_301: Marketplace not approved to transfer: {0}")]
    NotApproved(AssetKey),

    // =================================================================
    // Settlement Errors (4xx)
    // =================================================================
    /// The payment does not meet the listing's asking price.
    #[error("CUR_ERR_400: Price not met for {key}: offered {offered}, asked {asked}")]
    PriceNotMet {
        key: AssetKey,
        offered: Decimal,
        asked: Decimal,
    },

    /// The caller has no accumulated earnings to withdraw.
    #[error("CUR_ERR_401: No proceeds to withdraw")]
    NoProceeds,

    // =================================================================
    // External-Call Errors (5xx)
    // =================================================================
    /// An external collaborator (asset transfer or funds push) failed.
    /// All state changes of the invocation are rolled back.
    #[error("CUR_ERR_500: External transfer failed: {reason}")]
    TransferFailed { reason: String },

    // =================================================================
    // Concurrency Errors (6xx)
    // =================================================================
    /// A guarded operation was re-entered while already executing.
    #[error("CUR_ERR_600: Reentrant call blocked")]
    ReentrantCall,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// A ledger debit would produce a negative balance. Only reachable
    /// through the settlement rollback path; indicates a bookkeeping bug.
    #[error("CUR_ERR_900: Balance underflow: have {available}, debit {requested}")]
    BalanceUnderflow {
        available: Decimal,
        requested: Decimal,
    },

    /// Unrecoverable internal error.
    #[error("CUR_ERR_901: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let key = AssetKey::new(CollectionId::new(), crate::AssetId(1));
        let err = MarketError::AlreadyListed(key);
        let msg = format!("{err}");
        assert!(msg.starts_with("CUR_ERR_200"), "Got: {msg}");
    }

    #[test]
    fn price_not_met_display() {
        let err = MarketError::PriceNotMet {
            key: AssetKey::new(CollectionId::new(), crate::AssetId(9)),
            offered: Decimal::new(50, 0),
            asked: Decimal::new(100, 0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("CUR_ERR_400"));
        assert!(msg.contains("50"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn all_errors_have_cur_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(MarketError::PriceInvalid {
                price: Decimal::ZERO,
            }),
            Box::new(MarketError::NotOwner),
            Box::new(MarketError::NoProceeds),
            Box::new(MarketError::ReentrantCall),
            Box::new(MarketError::TransferFailed {
                reason: "test".into(),
            }),
            Box::new(MarketError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("CUR_ERR_"),
                "Error missing CUR_ERR_ prefix: {msg}"
            );
        }
    }
}
