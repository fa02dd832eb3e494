// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::Cell, rc::Rc};

use test_case::test_case;
use tracked_queue::{CallbackTracker, RevisionTracker, RingQueue, RingQueueError, assert_eq2};

fn contents<T: Clone>(queue: &RingQueue<T>) -> Vec<T> { queue.iter().cloned().collect() }

#[test_case(1, 1)]
#[test_case(5, 0)]
#[test_case(5, 3)]
#[test_case(5, 5)]
#[test_case(64, 63)]
fn test_pushes_within_capacity_never_evict(capacity: usize, pushes: usize) {
    let mut queue = RingQueue::new(capacity).unwrap();
    for it in 0..pushes {
        assert_eq!(queue.push_back(it), None);
    }
    assert_eq!(queue.len(), pushes);
    assert_eq!(queue.front(), if pushes == 0 { None } else { Some(&0) });
    assert_eq!(queue.back(), pushes.checked_sub(1).as_ref());
}

#[test_case(1, 10)]
#[test_case(3, 4)]
#[test_case(4, 100)]
#[test_case(7, 29)]
fn test_each_push_past_capacity_evicts_exactly_one(capacity: usize, pushes: usize) {
    let mut back = RingQueue::new(capacity).unwrap();
    let mut front = RingQueue::new(capacity).unwrap();

    for it in 0..pushes {
        let evicted_back = back.push_back(it);
        let evicted_front = front.push_front(it);
        if it < capacity {
            assert_eq!(evicted_back, None);
            assert_eq!(evicted_front, None);
        } else {
            // Oldest value at the opposite end.
            assert_eq!(evicted_back, Some(it - capacity));
            assert_eq!(evicted_front, Some(it - capacity));
        }
        assert!(back.len() <= capacity);
        assert!(front.len() <= capacity);
    }

    assert_eq!(back.front(), Some(&(pushes - capacity)));
    assert_eq!(back.back(), Some(&(pushes - 1)));
    assert_eq!(front.front(), Some(&(pushes - 1)));
    assert_eq!(front.back(), Some(&(pushes - capacity)));
}

#[test]
fn test_get_agrees_with_full_range() {
    let mut queue = RingQueue::new(5).unwrap();
    queue.append(0..13);
    queue.push_front(100);
    queue.pop_back();

    let len = queue.len();
    let range = queue.range(0, len).unwrap();
    assert_eq!(range.len(), len);
    for index in 0..len {
        assert_eq!(queue.get(index), Some(range[index]));
    }
}

#[test]
fn test_append_then_pop_front_is_fifo() {
    let mut queue = RingQueue::new(6).unwrap();
    queue.push_back('z');
    queue.pop_front();
    let popped = queue.append(['a', 'b', 'c', 'd']);
    assert!(popped.is_empty());

    let mut drained = vec![];
    for _ in 0..queue.len() {
        drained.push(queue.pop_front().unwrap());
    }
    assert_eq2!(drained, vec!['a', 'b', 'c', 'd']);
    assert!(queue.is_empty());
}

#[test]
fn test_prepend_keeps_values_and_evictions_in_order() {
    let mut queue = RingQueue::of([1, 2, 3]).unwrap();
    let popped = queue.prepend([4, 5, 6]);
    assert_eq2!(contents(&queue), vec![4, 5, 6]);
    assert_eq2!(popped.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_capacity_four_six_pushes() {
    let mut queue = RingQueue::new(4).unwrap();
    for it in 1..=6 {
        queue.push_back(it);
    }
    assert_eq!(queue.front(), Some(&3));
    assert_eq!(queue.back(), Some(&6));
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.pop_back(), Some(6));
    assert_eq2!(contents(&queue), vec![3, 4, 5]);
}

#[test_case(0, 0)]
#[test_case(1, 1)]
#[test_case(3, 3)]
fn test_empty_span_is_rejected_even_when_not_empty(from: usize, to: usize) {
    let queue = RingQueue::of([1, 2, 3, 4]).unwrap();
    let error = queue.range(from, to).unwrap_err();
    assert_eq!(error, RingQueueError::RangeEmptySpan { from, to });
    assert!(error.is_range_error());
}

#[test]
fn test_contains_none_payload() {
    let queue = RingQueue::of([Some(1), None, Some(2)]).unwrap();
    assert!(queue.contains(&None));

    let fresh = RingQueue::<Option<i32>>::new(3).unwrap();
    assert!(!fresh.contains(&None));
}

#[test]
fn test_map_uses_logical_order() {
    let mut queue = RingQueue::new(3).unwrap();
    queue.append(["a", "b", "c", "d", "e"]);
    queue.push_front("z");
    let mapped = queue.map(|it| it.to_uppercase());
    assert_eq2!(contents(&mapped), vec!["Z", "C", "D"]);
    assert_eq!(mapped.capacity(), 3);
}

#[test]
fn test_clear_resets_reads_after_wrapping() {
    let mut queue = RingQueue::new(2).unwrap();
    queue.append(0..9);
    queue.prepend([42, 43, 44]);
    queue.clear();
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);
    assert_eq!(queue.get(0), None);
    assert_eq!(queue.to_string(), "RingQueue()");
}

#[test]
fn test_callback_tracker_sees_reads_and_writes() {
    let reads = Rc::new(Cell::new(0_u32));
    let writes = Rc::new(Cell::new(0_u32));

    let tracker = CallbackTracker::default()
        .on_read({
            let reads = reads.clone();
            move || reads.set(reads.get() + 1)
        })
        .on_write({
            let writes = writes.clone();
            move || writes.set(writes.get() + 1)
        });

    let mut queue = RingQueue::with_tracker(2, tracker).unwrap();
    queue.push_back(1);
    queue.push_back(2);
    queue.push_back(3);
    assert_eq!(reads.get(), 0);
    assert_eq!(writes.get(), 3);

    assert_eq!(queue.front(), Some(&2));
    assert_eq!(queue.to_string(), "RingQueue(2, 3)");
    assert_eq!(reads.get(), 2);
    assert_eq!(writes.get(), 3);
}

#[test]
fn test_revision_tracker_staleness() {
    let tracker = RevisionTracker::new();
    let mut queue = RingQueue::<u8, _>::with_tracker(3, tracker.clone()).unwrap();

    let seen = tracker.revision();
    assert_eq!(queue.len(), 0);
    assert!(queue.range(0, 1).is_err());
    assert!(!tracker.is_stale(seen));

    queue.prepend(std::iter::empty());
    assert!(tracker.is_stale(seen));
}
