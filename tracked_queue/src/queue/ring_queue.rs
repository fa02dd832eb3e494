// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering,
          fmt::{Debug, Display, Formatter}};

use super::{RingQueueError, RingQueueIter};
use crate::{InlineVec, Tracker, Untracked, join_fmt, wrapping_dec, wrapping_inc,
            wrapping_offset};

/// A fixed capacity, double ended queue backed by a ring buffer.
///
/// Pushing onto either end of a full queue evicts the element at the *opposite* end,
/// and returns it. Popping from an empty queue returns [`None`]. Every operation except
/// [`Self::range`] and construction is total.
///
/// # Type Parameters
///
/// * `T`: The type of elements stored in the queue. It can itself be an [`Option`]; an
///   element that is `None` is still an element.
/// * `K`: The [`Tracker`] that is told about reads and writes. Defaults to
///   [`Untracked`].
///
/// # Fields
///
/// * `storage`: A boxed slice of `Option<T>` with `capacity + 1` slots. The spare slot
///   means `head == tail` only when the queue is empty, so two cursors are enough to
///   tell "empty" from "full". The [`Option`] is the occupancy bit for each slot.
/// * `head`: The index of the next slot to write when pushing onto the back, ie, one
///   past the back element.
/// * `tail`: The index of the front element.
/// * `tracker`: The change tracking hook.
///
/// # Modules
///
/// * `constructor`: [`Self::new`], [`Self::of`] and their tracked variants.
/// * `size`: Read only access to the state of the queue.
/// * `mutator`: Push and pop at both ends, and [`Self::clear`].
/// * `bulk`: [`Self::append`], [`Self::prepend`], and [`Self::map`].
///
/// # Examples
///
/// ```
/// use tracked_queue::RingQueue;
///
/// let mut queue = RingQueue::new(3)?;
///
/// assert_eq!(queue.push_back(1), None);
/// assert_eq!(queue.push_back(2), None);
/// assert_eq!(queue.push_front(0), None);
/// assert!(queue.is_full());
///
/// // Full, so pushing to the back evicts the front.
/// assert_eq!(queue.push_back(3), Some(0));
/// assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
///
/// assert_eq!(queue.pop_front(), Some(1));
/// assert_eq!(queue.len(), 2);
/// # Ok::<(), tracked_queue::RingQueueError>(())
/// ```
pub struct RingQueue<T, K: Tracker = Untracked> {
    storage: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    tracker: K,
}

mod constructor {
    use super::{RingQueue, RingQueueError, Tracker, Untracked};

    impl<T> RingQueue<T> {
        /// Create an empty, untracked queue that can hold `capacity` elements.
        ///
        /// # Errors
        ///
        /// Returns [`RingQueueError::InvalidCapacity`] if `capacity` is `0` or larger than
        /// [`Self::max_capacity`].
        pub fn new(capacity: usize) -> Result<Self, RingQueueError> {
            Self::with_tracker(capacity, Untracked)
        }

        /// Create an untracked queue whose capacity is the number of `items`, holding
        /// `items` in the same order (the first item is the [`Self::front`]).
        ///
        /// ```
        /// use tracked_queue::RingQueue;
        ///
        /// let queue = RingQueue::of([1, 2, 3])?;
        /// assert_eq!(queue.capacity(), 3);
        /// assert_eq!(queue.get(0), Some(&1));
        /// assert_eq!(queue.get(2), Some(&3));
        /// # Ok::<(), tracked_queue::RingQueueError>(())
        /// ```
        ///
        /// # Errors
        ///
        /// Returns [`RingQueueError::InvalidCapacity`] if `items` is empty, since that
        /// asks for a queue of capacity `0`.
        pub fn of<I>(items: I) -> Result<Self, RingQueueError>
        where
            I: IntoIterator<Item = T>,
            I::IntoIter: ExactSizeIterator,
        {
            Self::of_with_tracker(items, Untracked)
        }

        /// The largest capacity a queue of `T` can be created with. The storage has one
        /// slot more than the capacity, and a single allocation can't be larger than
        /// [`isize::MAX`] bytes.
        ///
        /// ```
        /// use tracked_queue::RingQueue;
        ///
        /// assert_eq!(RingQueue::<u8>::max_capacity(), isize::MAX as usize / 2 - 1);
        /// assert!(RingQueue::<u8>::new(usize::MAX).is_err());
        /// ```
        #[must_use]
        pub fn max_capacity() -> usize {
            let slot_size = std::mem::size_of::<Option<T>>().max(1);
            isize::MAX.unsigned_abs() / slot_size - 1
        }
    }

    impl<T, K: Tracker> RingQueue<T, K> {
        /// Same as [`RingQueue::new`], with the given `tracker`. Construction does not
        /// mark the tracker.
        ///
        /// # Errors
        ///
        /// Returns [`RingQueueError::InvalidCapacity`] if `capacity` is `0` or larger than
        /// [`RingQueue::max_capacity`].
        pub fn with_tracker(capacity: usize, tracker: K) -> Result<Self, RingQueueError> {
            let max = RingQueue::<T>::max_capacity();
            let slot_count = match capacity.checked_add(1) {
                Some(slot_count) if (1..=max).contains(&capacity) => slot_count,
                _ => return Err(RingQueueError::InvalidCapacity { capacity, max }),
            };
            tracing::debug!(capacity, "RingQueue created");
            Ok(Self::allocate(slot_count, tracker))
        }

        /// Same as [`RingQueue::of`], with the given `tracker`. Construction does not
        /// mark the tracker.
        ///
        /// # Errors
        ///
        /// Returns [`RingQueueError::InvalidCapacity`] if `items` is empty.
        pub fn of_with_tracker<I>(items: I, tracker: K) -> Result<Self, RingQueueError>
        where
            I: IntoIterator<Item = T>,
            I::IntoIter: ExactSizeIterator,
        {
            let iter = items.into_iter();
            let mut queue = Self::with_tracker(iter.len(), tracker)?;
            for item in iter {
                let _unused: Option<T> = queue.push_back_impl(item);
            }
            Ok(queue)
        }

        /// `slot_count` is the capacity plus the spare slot, so it must be at least `2`.
        pub(super) fn allocate(slot_count: usize, tracker: K) -> Self {
            debug_assert!(slot_count >= 2);
            let storage: Box<[Option<T>]> =
                std::iter::repeat_with(|| None).take(slot_count).collect();
            Self {
                storage,
                head: 0,
                tail: 0,
                tracker,
            }
        }
    }
}

mod size {
    use super::{InlineVec, Ordering, RingQueue, RingQueueError, RingQueueIter, Tracker,
                wrapping_offset};

    impl<T, K: Tracker> RingQueue<T, K> {
        /// The number of elements this queue can hold. It never changes, so this is not
        /// a tracked read.
        #[must_use]
        pub fn capacity(&self) -> usize { self.storage.len() - 1 }

        /// The tracking handle this queue reports to.
        #[must_use]
        pub fn tracker(&self) -> &K { &self.tracker }

        /// The number of elements in the queue.
        #[doc(alias = "size")]
        #[must_use]
        pub fn len(&self) -> usize {
            self.tracker.mark_read();
            self.len_impl()
        }

        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.tracker.mark_read();
            self.head == self.tail
        }

        #[must_use]
        pub fn is_full(&self) -> bool {
            self.tracker.mark_read();
            self.len_impl() == self.capacity()
        }

        /// The element at the front of the queue. That is, the oldest element pushed
        /// onto the back that has not been popped or evicted, or the newest element
        /// pushed onto the front.
        #[must_use]
        pub fn front(&self) -> Option<&T> {
            self.tracker.mark_read();
            self.get_impl(0)
        }

        /// The element at the back of the queue. That is, the newest element pushed onto
        /// the back that has not been popped or evicted.
        #[must_use]
        pub fn back(&self) -> Option<&T> {
            self.tracker.mark_read();
            self.len_impl()
                .checked_sub(1)
                .and_then(|last_index| self.get_impl(last_index))
        }

        /// The element at the zero based logical `index`, counted from the front.
        /// Returns [`None`] if `index` is out of bounds.
        #[doc(alias = "at")]
        #[must_use]
        pub fn get(&self, index: usize) -> Option<&T> {
            self.tracker.mark_read();
            self.get_impl(index)
        }

        /// The elements in the half open logical range `from..to`.
        ///
        /// ```
        /// use tracked_queue::RingQueue;
        ///
        /// let queue = RingQueue::of([1, 2, 3])?;
        /// assert_eq!(queue.range(0, 3)?.as_slice(), &[&1, &2, &3]);
        /// assert_eq!(queue.range(1, 2)?.as_slice(), &[&2]);
        /// assert!(queue.range(0, 0).is_err());
        /// # Ok::<(), tracked_queue::RingQueueError>(())
        /// ```
        ///
        /// # Errors
        ///
        /// Returns a range error (see [`RingQueueError::is_range_error`]) if the queue is
        /// empty, if `from > to`, if `from == to`, if `from >= len`, or if `to > len`.
        pub fn range(&self, from: usize, to: usize) -> Result<InlineVec<&T>, RingQueueError> {
            self.tracker.mark_read();
            let len = self.len_impl();

            if len == 0 {
                return Err(RingQueueError::RangeOnEmptyQueue);
            }
            if from > to {
                return Err(RingQueueError::RangeInverted { from, to });
            }
            if from == to {
                return Err(RingQueueError::RangeEmptySpan { from, to });
            }
            if from >= len {
                return Err(RingQueueError::RangeFromOutOfBounds { from, len });
            }
            // `to >= 1` holds here, since `from < to`.
            if to > len {
                return Err(RingQueueError::RangeToOutOfBounds { to, len });
            }

            Ok((from..to).filter_map(|index| self.get_impl(index)).collect())
        }

        /// Does the queue hold an element equal to `value`? This is `O(N)`.
        #[doc(alias = "includes")]
        #[must_use]
        pub fn contains(&self, value: &T) -> bool
        where
            T: PartialEq,
        {
            self.tracker.mark_read();
            RingQueueIter::new(self).any(|item| item == value)
        }

        /// Untracked [`Self::len`].
        pub(crate) fn len_impl(&self) -> usize {
            let modulus = self.storage.len();
            match self.head.cmp(&self.tail) {
                Ordering::Equal => 0,
                Ordering::Greater => self.head - self.tail,
                Ordering::Less => self.head + (modulus - self.tail),
            }
        }

        /// Untracked [`Self::get`].
        pub(crate) fn get_impl(&self, index: usize) -> Option<&T> {
            if index >= self.len_impl() {
                return None;
            }
            let actual_index = wrapping_offset(self.tail, index, self.storage.len());
            self.storage.get(actual_index).and_then(Option::as_ref)
        }

        /// A broken invariant here is a defect in this module, not a caller error.
        pub(super) fn debug_assert_invariants(&self) {
            let modulus = self.storage.len();
            debug_assert!(
                self.head < modulus && self.tail < modulus,
                "unreachable: cursor out of bounds, head: {}, tail: {}, slots: {}",
                self.head,
                self.tail,
                modulus
            );
            debug_assert!(
                self.storage.get(self.head).is_some_and(Option::is_none),
                "unreachable: the slot at head {} is occupied",
                self.head
            );
        }
    }
}

mod mutator {
    use super::{RingQueue, Tracker, wrapping_dec, wrapping_inc};

    impl<T, K: Tracker> RingQueue<T, K> {
        /// Push `value` onto the back of the queue. If the queue was full, the front
        /// element is evicted to make room, and returned.
        ///
        /// This only writes, it never marks a read.
        pub fn push_back(&mut self, value: T) -> Option<T> {
            self.tracker.mark_written();
            self.push_back_impl(value)
        }

        /// Push `value` onto the front of the queue. If the queue was full, the back
        /// element is evicted to make room, and returned.
        ///
        /// This only writes, it never marks a read.
        pub fn push_front(&mut self, value: T) -> Option<T> {
            self.tracker.mark_written();
            self.push_front_impl(value)
        }

        /// Remove the back element, if any.
        pub fn pop_back(&mut self) -> Option<T> {
            self.tracker.mark_written();

            if self.head == self.tail {
                return None;
            }

            let next_head = wrapping_dec(self.head, self.storage.len());
            let popped = self.storage[next_head].take();
            self.head = next_head;

            self.debug_assert_invariants();
            popped
        }

        /// Remove the front element, if any.
        pub fn pop_front(&mut self) -> Option<T> {
            self.tracker.mark_written();

            if self.head == self.tail {
                return None;
            }

            let current_tail = self.tail;
            let popped = self.storage[current_tail].take();
            self.tail = wrapping_inc(current_tail, self.storage.len());

            self.debug_assert_invariants();
            popped
        }

        /// Drop all the elements. The capacity remains the same, and so does the
        /// allocation. This is `O(capacity)`.
        pub fn clear(&mut self) {
            self.tracker.mark_written();
            self.storage.iter_mut().for_each(|slot| *slot = None);
            self.head = 0;
            self.tail = 0;
            tracing::debug!(capacity = self.capacity(), "RingQueue cleared");
        }

        /// Untracked [`Self::push_back`]. Returns [`Some`] only if an element was
        /// evicted, even if that element is itself an empty [`Option`].
        pub(super) fn push_back_impl(&mut self, value: T) -> Option<T> {
            let modulus = self.storage.len();
            let current_head = self.head;
            let next_head = wrapping_inc(current_head, modulus);

            self.storage[current_head] = Some(value);
            self.head = next_head;

            // The write caught up with the front. Evict it.
            let popped = if next_head == self.tail {
                let current_tail = self.tail;
                self.tail = wrapping_inc(current_tail, modulus);
                self.storage[current_tail].take()
            } else {
                None
            };

            self.debug_assert_invariants();
            popped
        }

        /// Untracked [`Self::push_front`]. Returns [`Some`] only if an element was
        /// evicted, even if that element is itself an empty [`Option`].
        pub(super) fn push_front_impl(&mut self, value: T) -> Option<T> {
            let modulus = self.storage.len();
            let next_tail = wrapping_dec(self.tail, modulus);

            // The front would run into the back. Evict the back first.
            let popped = if next_tail == self.head {
                let next_head = wrapping_dec(self.head, modulus);
                self.head = next_head;
                self.storage[next_head].take()
            } else {
                None
            };

            self.storage[next_tail] = Some(value);
            self.tail = next_tail;

            self.debug_assert_invariants();
            popped
        }
    }
}

mod bulk {
    use super::{InlineVec, RingQueue, RingQueueIter, Tracker};

    impl<T, K: Tracker> RingQueue<T, K> {
        /// Push each of `values` onto the back, in order. Returns every evicted element,
        /// oldest eviction first (which is also their front to back order in the queue).
        ///
        /// The tracker is marked written once, for the whole batch.
        pub fn append(&mut self, values: impl IntoIterator<Item = T>) -> InlineVec<T> {
            self.tracker.mark_written();

            let popped: InlineVec<T> = values
                .into_iter()
                .filter_map(|value| self.push_back_impl(value))
                .collect();

            tracing::trace!(evicted = popped.len(), "RingQueue append");
            popped
        }

        /// Push `values` onto the front so that afterwards the queue starts with
        /// `values` in their given order, followed by whatever of the old contents
        /// survived.
        ///
        /// Returns the evicted elements in the front to back order they had in the queue.
        /// For example, with a queue `(1, 2, 3)` of capacity `3`, `prepend([4, 5, 6])`
        /// leaves the queue as `(4, 5, 6)` and returns `[1, 2, 3]`.
        ///
        /// The tracker is marked written once, for the whole batch.
        pub fn prepend<I>(&mut self, values: I) -> InlineVec<T>
        where
            I: IntoIterator<Item = T>,
            I::IntoIter: DoubleEndedIterator,
        {
            self.tracker.mark_written();

            let mut popped: InlineVec<T> = values
                .into_iter()
                .rev()
                .filter_map(|value| self.push_front_impl(value))
                .collect();
            // Evictions come off the back, so they were collected back to front.
            popped.reverse();

            tracing::trace!(evicted = popped.len(), "RingQueue prepend");
            popped
        }

        /// Create a new queue, with the same capacity, by applying `f` to each element
        /// front to back. The result has the same length, front, back, etc. but not
        /// necessarily the same layout in its backing storage.
        ///
        /// This is one tracked read of `self`. The new queue gets a fresh
        /// `K::default()` tracker, which is not marked.
        #[must_use]
        pub fn map<U, F>(&self, f: F) -> RingQueue<U, K>
        where
            F: FnMut(&T) -> U,
            K: Default,
        {
            self.map_with_tracker(K::default(), f)
        }

        /// Same as [`Self::map`], but the new queue reports to `tracker`.
        #[must_use]
        pub fn map_with_tracker<U, K2, F>(&self, tracker: K2, mut f: F) -> RingQueue<U, K2>
        where
            K2: Tracker,
            F: FnMut(&T) -> U,
        {
            self.tracker.mark_read();

            let mut result = RingQueue::allocate(self.storage.len(), tracker);
            for item in RingQueueIter::new(self) {
                // Never evicts, since `self.len() <= self.capacity()`.
                let _unused: Option<U> = result.push_back_impl(f(item));
            }
            result
        }
    }

    impl<T, K: Tracker> Extend<T> for RingQueue<T, K> {
        /// Same as [`RingQueue::append`], discarding the evicted elements.
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            let _unused: InlineVec<T> = self.append(iter);
        }
    }
}

impl<T, K: Tracker> RingQueue<T, K> {
    /// Iterate the elements front to back. Starting the iteration is one tracked read.
    pub fn iter(&self) -> RingQueueIter<'_, T, K> {
        self.tracker.mark_read();
        RingQueueIter::new(self)
    }
}

/// This implementation allows the queue to be used in a for loop directly.
impl<'a, T, K: Tracker> IntoIterator for &'a RingQueue<T, K> {
    type Item = &'a T;
    type IntoIter = RingQueueIter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Renders `RingQueue(e0, e1, ..., en)` front to back, or `RingQueue()` when empty. Since
/// every element is included, the output may be very long. This is a tracked read. A
/// failed write to `f` is returned as is.
impl<T: Display, K: Tracker> Display for RingQueue<T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.tracker.mark_read();
        write!(f, "RingQueue(")?;
        join_fmt!(
            fmt: f,
            from: RingQueueIter::new(self),
            each: item,
            delim: ", ",
            format: "{item}"
        );
        write!(f, ")")
    }
}

/// Shows the logical contents, not the backing storage. This is not a tracked read.
impl<T: Debug, K: Tracker> Debug for RingQueue<T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let items: InlineVec<&T> = RingQueueIter::new(self).collect();
        f.debug_struct("RingQueue")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("items", &items)
            .field("tracker", &self.tracker)
            .finish()
    }
}

/// Two queues are equal when they hold equal elements in the same front to back order.
/// Capacity, storage layout, and trackers are not compared. This is one tracked read of
/// each queue.
impl<T: PartialEq, K: Tracker, K2: Tracker> PartialEq<RingQueue<T, K2>> for RingQueue<T, K> {
    fn eq(&self, other: &RingQueue<T, K2>) -> bool {
        self.tracker.mark_read();
        other.tracker.mark_read();
        self.len_impl() == other.len_impl()
            && RingQueueIter::new(self).eq(RingQueueIter::new(other))
    }
}

impl<T: Eq, K: Tracker> Eq for RingQueue<T, K> {}
