// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use super::RingQueue;
use crate::Tracker;

/// Borrowing iterator over a [`RingQueue`], front to back. Create one with
/// [`RingQueue::iter`], or by using `&queue` in a `for` loop.
///
/// The queue can't be mutated while this iterator is alive, so there is no difference
/// between walking a snapshot and walking the live queue.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RingQueueIter<'a, T, K: Tracker> {
    queue: &'a RingQueue<T, K>,
    /// Logical index of the next item from the front.
    front_index: usize,
    /// Logical index one past the next item from the back.
    back_index: usize,
}

impl<'a, T, K: Tracker> RingQueueIter<'a, T, K> {
    /// Does not mark the queue's tracker. [`RingQueue::iter`] does that.
    pub(crate) fn new(queue: &'a RingQueue<T, K>) -> Self {
        Self {
            queue,
            front_index: 0,
            back_index: queue.len_impl(),
        }
    }
}

impl<'a, T, K: Tracker> Iterator for RingQueueIter<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front_index >= self.back_index {
            return None;
        }
        let item = self.queue.get_impl(self.front_index);
        self.front_index += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back_index.saturating_sub(self.front_index);
        (remaining, Some(remaining))
    }
}

impl<T, K: Tracker> DoubleEndedIterator for RingQueueIter<'_, T, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front_index >= self.back_index {
            return None;
        }
        self.back_index -= 1;
        self.queue.get_impl(self.back_index)
    }
}

impl<T, K: Tracker> ExactSizeIterator for RingQueueIter<'_, T, K> {}

impl<T, K: Tracker> FusedIterator for RingQueueIter<'_, T, K> {}

#[cfg(test)]
mod tests {
    use crate::{RevisionTracker, RingQueue, assert_eq2};

    #[test]
    fn test_iterator_empty() {
        let queue = RingQueue::<u8>::new(4).unwrap();
        let mut iter = queue.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iterator_after_wrapping() {
        let mut queue = RingQueue::new(3).unwrap();
        queue.append(["a", "b", "c", "d", "e"]);

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&"c"));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&"d"));
        assert_eq!(iter.next(), Some(&"e"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iterator_from_both_ends() {
        let mut queue = RingQueue::new(4).unwrap();
        queue.push_back(2);
        queue.push_back(3);
        queue.push_front(1);
        queue.push_front(0);

        let reversed: Vec<_> = queue.iter().rev().copied().collect();
        assert_eq2!(reversed, vec![3, 2, 1, 0]);

        let mut iter = queue.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let queue = RingQueue::of([1, 2, 3]).unwrap();
        let mut sum = 0;
        for it in &queue {
            sum += it;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_creating_iterator_is_one_read() {
        let tracker = RevisionTracker::new();
        let queue = RingQueue::of_with_tracker([1, 2, 3, 4], tracker.clone()).unwrap();

        let iter = queue.iter();
        assert_eq!(tracker.read_count(), 1);

        // Walking it does not mark any more reads.
        assert_eq!(iter.count(), 4);
        assert_eq!(tracker.read_count(), 1);
    }
}
