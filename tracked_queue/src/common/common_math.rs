// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor arithmetic for ring buffers. A cursor is an index into backing storage of
//! length `modulus`, and moving it past either end wraps it around to the other end.

/// Move a cursor forward by one slot, wrapping from `modulus - 1` back to `0`.
///
/// ```
/// use tracked_queue::wrapping_inc;
/// assert_eq!(wrapping_inc(0, 5), 1);
/// assert_eq!(wrapping_inc(4, 5), 0);
/// ```
#[must_use]
pub fn wrapping_inc(cursor: usize, modulus: usize) -> usize {
    debug_assert!(cursor < modulus);
    (cursor + 1) % modulus
}

/// Move a cursor backward by one slot, wrapping from `0` to `modulus - 1`. This never
/// underflows, unlike `cursor - 1`.
///
/// ```
/// use tracked_queue::wrapping_dec;
/// assert_eq!(wrapping_dec(3, 5), 2);
/// assert_eq!(wrapping_dec(0, 5), 4);
/// ```
#[must_use]
pub fn wrapping_dec(cursor: usize, modulus: usize) -> usize {
    debug_assert!(cursor < modulus);
    (cursor + modulus - 1) % modulus
}

/// Map a logical offset from `start` onto a physical slot.
#[must_use]
pub fn wrapping_offset(start: usize, offset: usize, modulus: usize) -> usize {
    (start + offset) % modulus
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 2 => 1)]
    #[test_case(1, 2 => 0)]
    #[test_case(3, 5 => 4)]
    #[test_case(4, 5 => 0)]
    fn test_wrapping_inc(cursor: usize, modulus: usize) -> usize {
        wrapping_inc(cursor, modulus)
    }

    #[test_case(0, 2 => 1)]
    #[test_case(1, 2 => 0)]
    #[test_case(0, 5 => 4)]
    #[test_case(4, 5 => 3)]
    fn test_wrapping_dec(cursor: usize, modulus: usize) -> usize {
        wrapping_dec(cursor, modulus)
    }

    #[test]
    fn test_inc_then_dec_is_identity() {
        for modulus in 1..6 {
            for cursor in 0..modulus {
                assert_eq!(wrapping_dec(wrapping_inc(cursor, modulus), modulus), cursor);
            }
        }
    }

    #[test]
    fn test_wrapping_offset() {
        assert_eq!(wrapping_offset(3, 0, 5), 3);
        assert_eq!(wrapping_offset(3, 2, 5), 0);
        assert_eq!(wrapping_offset(4, 4, 5), 3);
    }
}
