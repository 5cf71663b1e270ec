// lazydata - Integration tests for the eager/lazy list pair
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Cross-module tests for `ConsList` and `LazyList`: conversion
//! equivalences, memoization transparency, and persistence of old handles.

use std::cell::Cell;
use std::rc::Rc;

use lazydata::{ConsList, LazyList};

// =============================================================================
// ConsList / LazyList equivalence
// =============================================================================

#[test]
fn test_to_lazy_round_trip() {
    let list = ConsList::from_slice(&[1, 2, 3, 4, 5]);
    assert_eq!(list.to_lazy().to_vec(), list.to_vec());
}

#[test]
fn test_reverse_lazy_matches_eager_reverse() {
    let list = ConsList::from_slice(&[1, 2, 3, 4, 5]);
    let mut expected = list.to_vec();
    expected.reverse();
    assert_eq!(list.reverse_lazy().to_vec(), expected);
}

#[test]
fn test_lazy_to_cons_list_round_trip() {
    let lazy = LazyList::from_slice(&["a", "b", "c"]);
    assert_eq!(lazy.to_cons_list().to_vec(), vec!["a", "b", "c"]);
}

#[test]
fn test_to_lazy_builds_cells_on_demand() {
    // A cell wrapped by to_lazy constructs exactly the next cell when
    // forced; taking two elements leaves the rest of the spine untouched.
    let list = ConsList::from_slice(&[1, 2, 3, 4, 5]);
    let lazy = list.to_lazy();
    let prefix: Vec<i32> = lazy.iter().take(2).collect();
    assert_eq!(prefix, vec![1, 2]);
    assert!(lazy.is_realized());
    let after_two = lazy.tail().unwrap().tail().unwrap();
    assert!(!after_two.is_realized());
}

// =============================================================================
// Memoization transparency
// =============================================================================

#[test]
fn test_shared_cell_forces_once() {
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    let mut next = 0;
    let source: LazyList<i32> = LazyList::from_fn(move || {
        counter.set(counter.get() + 1);
        next += 1;
        if next <= 3 { Some(next) } else { None }
    });

    let first = source.clone();
    let second = source.clone();
    assert_eq!(first.to_vec(), vec![1, 2, 3]);
    let after_first = calls.get();
    assert_eq!(second.to_vec(), vec![1, 2, 3]);
    // The second traversal reused every memoized cell.
    assert_eq!(calls.get(), after_first);
}

#[test]
fn test_mapped_views_share_source_forcing() {
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    let mut next = 0;
    let source: LazyList<i32> = LazyList::from_fn(move || {
        counter.set(counter.get() + 1);
        next += 1;
        if next <= 4 { Some(next) } else { None }
    });

    let doubled = source.map(|v| v * 2);
    let tripled = source.map(|v| v * 3);
    assert_eq!(doubled.to_vec(), vec![2, 4, 6, 8]);
    assert_eq!(tripled.to_vec(), vec![3, 6, 9, 12]);
    // Both derived lists forced each source cell exactly once between them.
    assert_eq!(calls.get(), 5);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_cons_list_persistence() {
    let base = ConsList::from_slice(&[1, 2, 3]);
    let snapshots = [
        base.cons(0),
        base.reverse(),
        base.filter(|v| v % 2 == 1),
        base.update(0, 9).unwrap(),
        base.concat(&ConsList::from_slice(&[4])),
    ];
    // Every derived handle left the original untouched.
    assert_eq!(base.to_vec(), vec![1, 2, 3]);
    assert_eq!(snapshots[0].to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(snapshots[4].to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_lazy_list_persistence() {
    let base = LazyList::from_slice(&[1, 2, 3]);
    let extended = base.cons(0);
    let mapped = base.map(|v| v * 10);
    assert_eq!(base.to_vec(), vec![1, 2, 3]);
    assert_eq!(extended.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(mapped.to_vec(), vec![10, 20, 30]);
    assert_eq!(base.to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Laziness of operators across the boundary
// =============================================================================

#[test]
fn test_concat_over_infinite_left_prefix() {
    let mut n = 0;
    let naturals = LazyList::from_fn(move || {
        n += 1;
        Some(n)
    });
    let joined = &naturals + &LazyList::from_slice(&[0]);
    // The concatenation itself forced nothing unbounded.
    let prefix: Vec<i32> = joined.iter().take(4).collect();
    assert_eq!(prefix, vec![1, 2, 3, 4]);
}

#[test]
fn test_filter_on_infinite_list() {
    let mut n = 0;
    let naturals = LazyList::from_fn(move || {
        n += 1;
        Some(n)
    });
    let multiples_of_three = naturals.filter(|v| v % 3 == 0);
    let prefix: Vec<i32> = multiples_of_three.iter().take(3).collect();
    assert_eq!(prefix, vec![3, 6, 9]);
}
