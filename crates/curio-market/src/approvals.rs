//! Collection approval flags.
//!
//! Write-once per collection; purely informational for external display.
//! Nothing in the settlement path reads these flags.

use std::collections::HashSet;

use curio_types::{CollectionId, MarketError, Result};

/// Set of collections marked "approved" for display.
#[derive(Debug, Default)]
pub struct ApprovalSet {
    approved: HashSet<CollectionId>,
}

impl ApprovalSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            approved: HashSet::new(),
        }
    }

    /// Mark a collection approved.
    ///
    /// # Errors
    /// Returns `AlreadyApproved` if the flag is already set.
    pub fn approve(&mut self, collection: CollectionId) -> Result<()> {
        if !self.approved.insert(collection) {
            return Err(MarketError::AlreadyApproved(collection));
        }
        Ok(())
    }

    /// Whether the collection has been approved.
    #[must_use]
    pub fn is_approved(&self, collection: CollectionId) -> bool {
        self.approved.contains(&collection)
    }

    /// Number of approved collections.
    #[must_use]
    pub fn count(&self) -> usize {
        self.approved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_then_check() {
        let mut set = ApprovalSet::new();
        let collection = CollectionId::new();
        assert!(!set.is_approved(collection));

        set.approve(collection).unwrap();
        assert!(set.is_approved(collection));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn reapproval_always_fails() {
        let mut set = ApprovalSet::new();
        let collection = CollectionId::new();
        set.approve(collection).unwrap();

        let err = set.approve(collection).unwrap_err();
        assert!(matches!(err, MarketError::AlreadyApproved(c) if c == collection));
        // No other state changed.
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn approvals_are_per_collection() {
        let mut set = ApprovalSet::new();
        let a = CollectionId::new();
        let b = CollectionId::new();
        set.approve(a).unwrap();
        assert!(set.is_approved(a));
        assert!(!set.is_approved(b));
    }
}
