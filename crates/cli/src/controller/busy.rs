// Path: crates/cli/src/controller/busy.rs

//! The single "operation in progress" slot, plus a counter of reads in
//! flight that only feeds the activity indicator.

use hlink_types::app::ActionKind;
use hlink_types::error::ActionError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Records which action, if any, is in flight. At most one at a time.
#[derive(Debug, Clone, Default)]
pub struct BusySlot {
    inner: Arc<Mutex<Option<ActionKind>>>,
}

impl BusySlot {
    /// Creates an idle slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the slot for `kind`, or reports the action already holding it.
    /// The slot is released when the returned guard is dropped.
    pub fn try_acquire(&self, kind: ActionKind) -> Result<BusyGuard, ActionError> {
        let mut slot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(holder) = *slot {
            return Err(ActionError::Busy(holder));
        }
        *slot = Some(kind);
        tracing::debug!(target: "controller", action = %kind, "busy");
        Ok(BusyGuard { slot: self.clone() })
    }

    /// The action in flight.
    pub fn current(&self) -> Option<ActionKind> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether any action is in flight.
    pub fn is_busy(&self) -> bool {
        self.current().is_some()
    }
}

/// RAII guard that frees the slot on drop, including on early return.
#[derive(Debug)]
pub struct BusyGuard {
    slot: BusySlot,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let mut slot = self
            .slot
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(kind) = slot.take() {
            tracing::debug!(target: "controller", action = %kind, "idle");
        }
    }
}

/// Counts reads in flight. Never blocks anything.
#[derive(Debug, Clone, Default)]
pub struct ReadTracker {
    in_flight: Arc<AtomicUsize>,
}

impl ReadTracker {
    /// Marks one read as started until the guard drops.
    pub fn begin(&self) -> ReadGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        ReadGuard {
            tracker: self.clone(),
        }
    }

    /// Whether any read is in flight.
    pub fn is_active(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}

/// Ends one read on drop.
#[derive(Debug)]
pub struct ReadGuard {
    tracker: ReadTracker,
}

impl Drop for ReadGuard {
    fn drop(&mut self) {
        self.tracker.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_reads_keep_the_tracker_active() {
        let reads = ReadTracker::default();
        let first = reads.begin();
        let second = reads.begin();
        drop(first);
        assert!(reads.is_active());
        drop(second);
        assert!(!reads.is_active());
    }

    #[test]
    fn second_acquire_is_rejected_until_release() {
        let slot = BusySlot::new();
        let guard = slot.try_acquire(ActionKind::Mint).unwrap();
        assert_eq!(slot.current(), Some(ActionKind::Mint));

        let err = slot.try_acquire(ActionKind::Release).unwrap_err();
        assert!(matches!(err, ActionError::Busy(ActionKind::Mint)));

        drop(guard);
        assert!(!slot.is_busy());
        let _again = slot.try_acquire(ActionKind::Release).unwrap();
        assert_eq!(slot.current(), Some(ActionKind::Release));
    }
}
