//! Call-scoped reentry guard.
//!
//! Within a single invocation, an external call (the asset transfer, the
//! funds push) can trigger a callback into this same system before the
//! outer invocation finishes. The guard is the sole synchronization
//! primitive: a non-reentrant mutex scoped to one top-level invocation.
//! It never blocks — a second entry while held fails immediately with
//! `ReentrantCall`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use curio_types::{MarketError, Result};

/// Cloneable handle over one shared entry flag.
///
/// Clones share the flag, so a collaborator holding a clone observes the
/// same held/released state as the marketplace that created it. This is
/// how a callback arriving mid-operation gets rejected.
#[derive(Debug, Clone, Default)]
pub struct ReentryGuard {
    held: Arc<AtomicBool>,
}

impl ReentryGuard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            held: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Acquire the guard for the duration of the returned span.
    ///
    /// The span releases on drop, so every exit path — success, expected
    /// failure via `?`, or unwind — releases the guard.
    ///
    /// # Errors
    /// Returns `ReentrantCall` if the guard is already held.
    pub fn try_enter(&self) -> Result<ReentrySpan> {
        if self.held.swap(true, Ordering::Acquire) {
            tracing::warn!("reentrant call blocked");
            return Err(MarketError::ReentrantCall);
        }
        Ok(ReentrySpan {
            held: Arc::clone(&self.held),
        })
    }

    /// Whether a guarded operation is currently executing.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// RAII span for one guarded invocation. Dropping it releases the guard.
#[derive(Debug)]
pub struct ReentrySpan {
    held: Arc<AtomicBool>,
}

impl Drop for ReentrySpan {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_release() {
        let guard = ReentryGuard::new();
        assert!(!guard.is_held());
        {
            let _span = guard.try_enter().unwrap();
            assert!(guard.is_held());
        }
        assert!(!guard.is_held());
    }

    #[test]
    fn second_enter_blocked() {
        let guard = ReentryGuard::new();
        let _span = guard.try_enter().unwrap();
        let err = guard.try_enter().unwrap_err();
        assert!(matches!(err, MarketError::ReentrantCall));
    }

    #[test]
    fn clones_share_state() {
        let guard = ReentryGuard::new();
        let handle = guard.clone();
        let _span = guard.try_enter().unwrap();
        assert!(handle.is_held());
        assert!(matches!(
            handle.try_enter().unwrap_err(),
            MarketError::ReentrantCall
        ));
    }

    #[test]
    fn released_on_error_path() {
        let guard = ReentryGuard::new();
        let failing_op = |g: &ReentryGuard| -> Result<()> {
            let _span = g.try_enter()?;
            Err(MarketError::NoProceeds)
        };
        assert!(failing_op(&guard).is_err());
        // The span dropped with the early return; the guard must be free.
        assert!(guard.try_enter().is_ok());
    }

    #[test]
    fn released_on_unwind() {
        let guard = ReentryGuard::new();
        let handle = guard.clone();
        let result = std::panic::catch_unwind(move || {
            let _span = handle.try_enter().unwrap();
            panic!("boom");
        });
        assert!(result.is_err());
        assert!(!guard.is_held());
    }
}
