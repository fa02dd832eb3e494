// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Library level errors (eg: [`crate::RingQueueError`]) are concrete enums so callers
//! can match on them. Application level code (logging setup, the `tq_ops_perf` binary)
//! uses [`CommonResult`] so any of those errors can be propagated with `?` and rendered
//! by the [miette] report handler.

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`crate::RingQueueError`] and any other type of error that
///   implements [`miette::Diagnostic`].
///
/// # Example
///
/// ```
/// use tracked_queue::{CommonResult, RingQueue};
///
/// fn make_history() -> CommonResult<RingQueue<u8>> {
///     let mut queue = RingQueue::new(2)?;
///     queue.append([1, 2, 3]);
///     Ok(queue)
/// }
///
/// assert_eq!(make_history().unwrap().len(), 2);
/// ```
pub type CommonResult<T> = miette::Result<T>;
