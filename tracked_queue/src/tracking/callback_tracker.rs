// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Push based change tracking. See [`CallbackTracker`] for details.

use std::fmt::{Debug, Formatter};

use super::Tracker;

pub type TrackerCallback = Box<dyn Fn()>;

/// A pair of optional callbacks, one fired on every read and one on every write. This
/// is the shape an embedding reactive framework usually hands out: "consume" and
/// "dirty" hooks for a single tracked cell.
///
/// Callbacks run synchronously, inside the queue method that triggered them. They must
/// not touch the queue themselves (the borrow checker prevents it in safe code anyway).
///
/// ```
/// use std::{cell::Cell, rc::Rc};
/// use tracked_queue::{CallbackTracker, RingQueue};
///
/// let dirty = Rc::new(Cell::new(0));
/// let tracker = CallbackTracker::default().on_write({
///     let dirty = dirty.clone();
///     move || dirty.set(dirty.get() + 1)
/// });
///
/// let mut queue = RingQueue::with_tracker(2, tracker)?;
/// queue.push_back("a");
/// queue.append(["b", "c", "d"]);
/// assert_eq!(dirty.get(), 2);
/// # Ok::<(), tracked_queue::RingQueueError>(())
/// ```
#[derive(Default)]
pub struct CallbackTracker {
    on_read: Option<TrackerCallback>,
    on_write: Option<TrackerCallback>,
}

impl CallbackTracker {
    #[must_use]
    pub fn new(on_read: impl Fn() + 'static, on_write: impl Fn() + 'static) -> Self {
        Self {
            on_read: Some(Box::new(on_read)),
            on_write: Some(Box::new(on_write)),
        }
    }

    #[must_use]
    pub fn on_read(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_read = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_write(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_write = Some(Box::new(callback));
        self
    }
}

impl Debug for CallbackTracker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackTracker")
            .field("on_read", &self.on_read.is_some())
            .field("on_write", &self.on_write.is_some())
            .finish()
    }
}

impl Tracker for CallbackTracker {
    fn mark_read(&self) {
        if let Some(callback) = &self.on_read {
            callback();
        }
    }

    fn mark_written(&self) {
        if let Some(callback) = &self.on_write {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_callbacks_fire_in_order() {
        let log = Rc::new(RefCell::new(Vec::<&'static str>::new()));
        let tracker = CallbackTracker::new(
            {
                let log = log.clone();
                move || log.borrow_mut().push("read")
            },
            {
                let log = log.clone();
                move || log.borrow_mut().push("write")
            },
        );

        tracker.mark_written();
        tracker.mark_read();
        tracker.mark_written();

        assert_eq!(*log.borrow(), vec!["write", "read", "write"]);
    }

    #[test]
    fn test_missing_callbacks_are_skipped() {
        let tracker = CallbackTracker::default();
        tracker.mark_read();
        tracker.mark_written();
        assert_eq!(
            format!("{tracker:?}"),
            "CallbackTracker { on_read: false, on_write: false }"
        );
    }
}
