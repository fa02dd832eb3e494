// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # tracked_queue
//!
//! A fixed capacity, double ended queue backed by a contiguous ring buffer.
//!
//! - Push and pop at both ends in `O(1)`. When the queue is full, pushing onto one end
//!   silently evicts the element at the *opposite* end, and hands it back to the caller.
//! - Random access by logical index in `O(1)`, and range extraction in `O(k)`.
//! - Bulk [`RingQueue::append`] and [`RingQueue::prepend`] which report every evicted
//!   value, in the order those values had inside the queue.
//! - [`RingQueue::map`] to derive a new queue of the same capacity.
//!
//! ## Change tracking
//!
//! Every queue owns a [`Tracker`] handle, which is told when the queue is read and when
//! it is written. This is how an embedding reactive system (a UI that re-renders, a cache
//! that needs invalidation, etc.) finds out that derived views are stale. There are three
//! trackers in this crate:
//!
//! | Tracker             | Style       | Use it when                                   |
//! | :------------------ | :---------- | :-------------------------------------------- |
//! | [`Untracked`]       | none        | you only want the data structure (default)    |
//! | [`RevisionTracker`] | pull based  | observers poll a revision number              |
//! | [`CallbackTracker`] | push based  | observers want a callback on every read/write |
//!
//! Each public read marks the tracker as read exactly once, and each public mutation
//! marks it as written exactly once, no matter how many slots it touches. Pushes never
//! mark a read, so they are safe to issue while an observer is recomputing.
//!
//! ## Example
//!
//! ```
//! use tracked_queue::RingQueue;
//!
//! let mut queue = RingQueue::<i32>::new(4)?;
//! for it in 1..=6 {
//!     queue.push_back(it);
//! }
//!
//! assert_eq!(queue.front(), Some(&3));
//! assert_eq!(queue.back(), Some(&6));
//! assert_eq!(queue.to_string(), "RingQueue(3, 4, 5, 6)");
//!
//! let popped = queue.prepend([10, 20]);
//! assert_eq!(popped.as_slice(), &[5, 6]);
//! assert_eq!(queue.to_string(), "RingQueue(10, 20, 3, 4)");
//! # Ok::<(), tracked_queue::RingQueueError>(())
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod common;
pub mod log;
pub mod queue;
pub mod tracking;

// Re-export.
pub use common::*;
pub use log::*;
pub use queue::*;
pub use tracking::*;
