// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors from [`crate::RingQueue`]. See [`RingQueueError`] for details.

/// Errors from constructing a [`crate::RingQueue`] or from asking it for a range.
///
/// Every other queue operation is total: an out of bounds [`crate::RingQueue::get`] or
/// a pop on an empty queue yields [`None`], not an error.
///
/// | Variant                  | Raised by                      | Cause                          |
/// | :----------------------- | :----------------------------- | :----------------------------- |
/// | [`InvalidCapacity`]      | `new`, `with_tracker`, `of`    | capacity is `0` or too big     |
/// | [`RangeOnEmptyQueue`]    | `range`                        | the queue has no elements      |
/// | [`RangeInverted`]        | `range`                        | `from > to`                    |
/// | [`RangeEmptySpan`]       | `range`                        | `from == to`                   |
/// | [`RangeFromOutOfBounds`] | `range`                        | `from >= len`                  |
/// | [`RangeToOutOfBounds`]   | `range`                        | `to > len`                     |
///
/// [`InvalidCapacity`]: Self::InvalidCapacity
/// [`RangeOnEmptyQueue`]: Self::RangeOnEmptyQueue
/// [`RangeInverted`]: Self::RangeInverted
/// [`RangeEmptySpan`]: Self::RangeEmptySpan
/// [`RangeFromOutOfBounds`]: Self::RangeFromOutOfBounds
/// [`RangeToOutOfBounds`]: Self::RangeToOutOfBounds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum RingQueueError {
    #[error("RingQueue: requires a capacity in 1..={max}, but was {capacity}")]
    #[diagnostic(
        code(tracked_queue::invalid_capacity),
        help(
            "A queue must be able to hold at least one element. It also needs one spare \
             slot, and all of its slots must fit in a single allocation."
        )
    )]
    InvalidCapacity { capacity: usize, max: usize },

    #[error("RingQueue: range: cannot get a range when the queue is empty")]
    #[diagnostic(
        code(tracked_queue::range::empty_queue),
        help("Check `is_empty()` before asking for a range.")
    )]
    RangeOnEmptyQueue,

    #[error(
        "RingQueue: range: 'from' must be less than 'to', but 'from' was {from} and 'to' \
         was {to}"
    )]
    #[diagnostic(code(tracked_queue::range::inverted))]
    RangeInverted { from: usize, to: usize },

    #[error("RingQueue: range: 'from' and 'to' were both {from}, which selects nothing")]
    #[diagnostic(
        code(tracked_queue::range::empty_span),
        help("The range is half open, so 'to' must be at least 'from + 1'.")
    )]
    RangeEmptySpan { from: usize, to: usize },

    #[error("RingQueue: range: 'from' must be in 0 < {len}, but was {from}")]
    #[diagnostic(code(tracked_queue::range::from_out_of_bounds))]
    RangeFromOutOfBounds { from: usize, len: usize },

    #[error("RingQueue: range: 'to' must be in 1 <= {len}, but was {to}")]
    #[diagnostic(code(tracked_queue::range::to_out_of_bounds))]
    RangeToOutOfBounds { to: usize, len: usize },
}

impl RingQueueError {
    /// Is this one of the errors returned by [`crate::RingQueue::range`]?
    #[must_use]
    pub fn is_range_error(&self) -> bool { !matches!(self, Self::InvalidCapacity { .. }) }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RingQueueError::InvalidCapacity { capacity: 0, max: 9 }.to_string(),
            "RingQueue: requires a capacity in 1..=9, but was 0"
        );
        assert_eq!(
            RingQueueError::InvalidCapacity {
                capacity: usize::MAX,
                max: 9
            }
            .to_string(),
            format!("RingQueue: requires a capacity in 1..=9, but was {}", usize::MAX)
        );
        assert_eq!(
            RingQueueError::RangeInverted { from: 3, to: 1 }.to_string(),
            "RingQueue: range: 'from' must be less than 'to', but 'from' was 3 and 'to' \
             was 1"
        );
        assert_eq!(
            RingQueueError::RangeToOutOfBounds { to: 9, len: 4 }.to_string(),
            "RingQueue: range: 'to' must be in 1 <= 4, but was 9"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let code = RingQueueError::InvalidCapacity { capacity: 0, max: 9 }
            .code()
            .map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("tracked_queue::invalid_capacity"));

        let code = RingQueueError::RangeOnEmptyQueue.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("tracked_queue::range::empty_queue"));
    }

    #[test]
    fn test_is_range_error() {
        assert!(!RingQueueError::InvalidCapacity { capacity: 0, max: 9 }.is_range_error());
        assert!(RingQueueError::RangeOnEmptyQueue.is_range_error());
        assert!(RingQueueError::RangeEmptySpan { from: 0, to: 0 }.is_range_error());
    }
}
