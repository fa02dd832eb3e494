// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pull based change tracking. See [`RevisionTracker`] for details.

use std::{cell::Cell, rc::Rc};

use super::Tracker;

/// A monotonic revision number that is bumped once per write, and a count of reads.
///
/// Clones share the same counters, so the usual pattern is:
/// 1. Create a [`RevisionTracker`] and hand a clone of it to the queue with
///    [`crate::RingQueue::with_tracker`].
/// 2. Observers remember the [`Self::revision`] they last computed against.
/// 3. Later, [`Self::is_stale`] tells them whether the queue was written since.
///
/// ```
/// use tracked_queue::{RevisionTracker, RingQueue};
///
/// let tracker = RevisionTracker::default();
/// let mut queue = RingQueue::with_tracker(3, tracker.clone())?;
///
/// let seen = tracker.revision();
/// assert!(!tracker.is_stale(seen));
///
/// queue.append([1, 2, 3, 4]);
/// assert!(tracker.is_stale(seen));
/// assert_eq!(tracker.revision(), seen + 1);
/// # Ok::<(), tracked_queue::RingQueueError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct RevisionTracker {
    inner: Rc<RevisionCells>,
}

#[derive(Debug, Default)]
struct RevisionCells {
    revision: Cell<u64>,
    read_count: Cell<u64>,
}

impl RevisionTracker {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// The number of writes seen so far.
    #[must_use]
    pub fn revision(&self) -> u64 { self.inner.revision.get() }

    /// The number of reads seen so far.
    #[must_use]
    pub fn read_count(&self) -> u64 { self.inner.read_count.get() }

    /// Has anything been written since `since` was taken from [`Self::revision`]?
    #[must_use]
    pub fn is_stale(&self, since: u64) -> bool { self.revision() > since }
}

impl Tracker for RevisionTracker {
    fn mark_read(&self) {
        let cell = &self.inner.read_count;
        cell.set(cell.get().wrapping_add(1));
    }

    fn mark_written(&self) {
        let cell = &self.inner.revision;
        cell.set(cell.get().wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_counters() {
        let tracker = RevisionTracker::new();
        let observer = tracker.clone();

        tracker.mark_written();
        tracker.mark_read();
        tracker.mark_read();

        assert_eq!(observer.revision(), 1);
        assert_eq!(observer.read_count(), 2);
    }

    #[test]
    fn test_is_stale() {
        let tracker = RevisionTracker::new();
        let seen = tracker.revision();
        tracker.mark_read();
        assert!(!tracker.is_stale(seen));
        tracker.mark_written();
        assert!(tracker.is_stale(seen));
        assert!(!tracker.is_stale(tracker.revision()));
    }
}
