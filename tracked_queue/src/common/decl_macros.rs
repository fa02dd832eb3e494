// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq`!] macro, so that failing assertions on
/// queue contents render a colored diff.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A decl macro that generates code to measure the performance of the block that it
/// surrounds.
///
/// # Returns
///
/// If you use `timed!($expr)` then it will return a tuple of `($expr, duration)`.
///
/// # Example
///
/// ```
/// use tracked_queue::{RingQueue, timed};
///
/// let (popped, _duration) = timed!({
///     let mut queue = RingQueue::<u32>::new(8).unwrap();
///     queue.append(0..100)
/// });
/// assert_eq!(popped.len(), 92);
/// ```
#[macro_export]
macro_rules! timed {
    ($block:block) => {{
        let start = std::time::Instant::now();
        let retval = $block;
        let duration = start.elapsed();
        (retval, duration)
    }};
}

/// This macro receives a [`std::fmt::Formatter`] (or anything else that implements
/// [`std::fmt::Write`]) and writes each item of an iterable into it, separated by a
/// delimiter, without allocating anything. The first failed write is returned with `?`,
/// so this can only be used in a function that returns [`std::fmt::Result`].
///
/// # Arguments
///
/// - `fmt` is anything that implements [`std::fmt::Write`].
/// - `from` is anything that implements [`IntoIterator`]. It is consumed.
/// - `each` is the identifier for each item in the collection.
/// - `delim` is the delimiter to insert between items.
/// - `format` is the format to apply to each item. This is whatever you would pass to
///   [format!] or [write!].
#[macro_export]
macro_rules! join_fmt {
    (
        fmt: $fmt:expr,
        from: $collection:expr,
        each: $item:ident,
        delim: $delim:expr,
        format: $($format:tt)*
    ) => {{
        #[allow(unused_imports)]
        use std::fmt::Write;
        let mut iter = ::std::iter::IntoIterator::into_iter($collection);
        // First item.
        if let Some($item) = iter.next() {
            write!($fmt, $($format)*)?;
        }
        // Rest of the items.
        for $item in iter {
            write!($fmt, "{}", $delim)?;
            write!($fmt, $($format)*)?;
        }
    }};
}
