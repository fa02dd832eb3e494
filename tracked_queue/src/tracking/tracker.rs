// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

/// The hook that an embedding reactive system gives a [`crate::RingQueue`], so that it
/// can find out when the queue's contents were observed and when they changed.
///
/// The queue upholds this contract:
/// - [`Tracker::mark_read`] is called once per externally visible read (`len`, `get`,
///   `front`, `back`, `is_empty`, `is_full`, `range`, `contains`, starting an
///   iteration, and `Display`). Internal helper calls never mark.
/// - Comparing two queues with `==` or `!=` is one read of each of them.
/// - `capacity` and `Debug` are not reads. The capacity never changes, and `Debug` is
///   for developers.
/// - [`Tracker::mark_written`] is called once per public mutation (`push_*`, `pop_*`,
///   `append`, `prepend`, `clear`), regardless of how many slots it touches.
/// - A push never marks a read.
///
/// Both methods take `&self` because reads on the queue take `&self`. Implementations
/// use interior mutability, and are not expected to be [`Sync`]; the queue is single
/// threaded.
///
/// There are three implementations of this trait:
/// - [`Untracked`] which does nothing.
/// - [`crate::RevisionTracker`] which is pull based (a revision counter).
/// - [`crate::CallbackTracker`] which is push based (a pair of callbacks).
pub trait Tracker: Debug {
    fn mark_read(&self);

    fn mark_written(&self);
}

/// The default [`Tracker`]. It is zero sized, so an untracked queue pays nothing for the
/// hook.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Untracked;

impl Tracker for Untracked {
    fn mark_read(&self) {}

    fn mark_written(&self) {}
}
