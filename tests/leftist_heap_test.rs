// lazydata - Integration tests for the leftist heap
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Heap-order and leftist invariants under inserts, merges, and deletes.

use lazydata::LeftistHeap;

/// Walk the whole tree checking heap order, the leftist property, and the
/// stored-rank definition (`rank = right-spine length`).
fn check_invariants<E: Ord>(heap: &LeftistHeap<E>) {
    if let LeftistHeap::Node(node) = heap {
        assert!(node.left.rank() >= node.right.rank());
        assert_eq!(node.rank, node.right.rank() + 1);
        for child in [&node.left, &node.right] {
            if let LeftistHeap::Node(c) = child {
                assert!(node.value <= c.value);
            }
        }
        check_invariants(&node.left);
        check_invariants(&node.right);
    }
}

// =============================================================================
// Sortedness
// =============================================================================

#[test]
fn test_delete_min_yields_sorted_order() {
    let values = [23, 4, 42, 8, 15, 16, 16, 1, 0, 99, 7];
    let heap: LeftistHeap<i32> = values.iter().copied().collect();
    let mut sorted = values.to_vec();
    sorted.sort();
    assert_eq!(heap.to_sorted_vec(), sorted);
}

#[test]
fn test_sorted_and_reverse_sorted_inserts() {
    let ascending: LeftistHeap<i32> = (0..200).collect();
    let descending: LeftistHeap<i32> = (0..200).rev().collect();
    let expected: Vec<i32> = (0..200).collect();
    assert_eq!(ascending.to_sorted_vec(), expected);
    assert_eq!(descending.to_sorted_vec(), expected);
}

// =============================================================================
// Invariants (white-box)
// =============================================================================

#[test]
fn test_invariants_hold_under_inserts_and_deletes() {
    let mut heap = LeftistHeap::new();
    for i in [13, 2, 8, 21, 1, 34, 5, 3, 55, 1] {
        heap = heap.insert(i);
        check_invariants(&heap);
    }
    while let Ok(rest) = heap.delete_min() {
        check_invariants(&rest);
        heap = rest;
    }
}

#[test]
fn test_invariants_hold_under_merge() {
    let a: LeftistHeap<i32> = [9, 1, 7, 3].into_iter().collect();
    let b: LeftistHeap<i32> = [8, 2, 6, 4].into_iter().collect();
    let merged = a.merge(&b);
    check_invariants(&merged);
    assert_eq!(merged.to_sorted_vec(), vec![1, 2, 3, 4, 6, 7, 8, 9]);
}

// =============================================================================
// Persistence and errors
// =============================================================================

#[test]
fn test_merge_preserves_operands() {
    let a = LeftistHeap::of(&[3, 1]);
    let b = LeftistHeap::of(&[2]);
    let _ = a.merge(&b);
    assert_eq!(a.to_sorted_vec(), vec![1, 3]);
    assert_eq!(b.to_sorted_vec(), vec![2]);
}

#[test]
fn test_empty_operations_fail() {
    let empty: LeftistHeap<i32> = LeftistHeap::new();
    assert!(empty.find_min().is_err());
    assert!(empty.delete_min().is_err());
}

#[test]
fn test_find_min_is_nondestructive() {
    let heap = LeftistHeap::of(&[2, 1, 3]);
    assert_eq!(heap.find_min(), Ok(&1));
    assert_eq!(heap.find_min(), Ok(&1));
    assert_eq!(heap.size(), 3);
}
