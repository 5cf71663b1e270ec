// lazydata - Leftist heap (mergeable min-priority queue)
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! A persistent min-heap supporting O(log n) merge.
//!
//! Two invariants hold at every node, both maintained by construction:
//!
//! - heap order: the node's value is `<=` every descendant value;
//! - leftist property: `rank(left) >= rank(right)`, where a node's rank is
//!   the length of its right spine (`rank(Empty) = 0`).
//!
//! The leftist property keeps the right spine logarithmically short, and
//! every operation walks only right spines: `insert` is a merge with a
//! singleton, `delete_min` a merge of the root's children. `size` recurses
//! over the whole tree and is O(n); no count is cached.

use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A persistent mergeable min-heap.
pub enum LeftistHeap<E> {
    Empty,
    Node(Rc<HeapNode<E>>),
}

/// An interior node. Fields are public for white-box inspection of the rank
/// invariants.
#[derive(Debug)]
pub struct HeapNode<E> {
    pub rank: usize,
    pub value: E,
    pub left: LeftistHeap<E>,
    pub right: LeftistHeap<E>,
}

impl<E> LeftistHeap<E> {
    /// The empty heap.
    pub fn new() -> Self {
        LeftistHeap::Empty
    }

    /// A one-element heap.
    pub fn singleton(value: E) -> Self {
        LeftistHeap::Node(Rc::new(HeapNode {
            rank: 1,
            value,
            left: LeftistHeap::Empty,
            right: LeftistHeap::Empty,
        }))
    }

    /// Length of the right spine. O(1) - stored on every node.
    pub fn rank(&self) -> usize {
        match self {
            LeftistHeap::Empty => 0,
            LeftistHeap::Node(node) => node.rank,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LeftistHeap::Empty)
    }

    /// Number of elements, by full traversal. O(n), not cached.
    pub fn size(&self) -> usize {
        match self {
            LeftistHeap::Empty => 0,
            LeftistHeap::Node(node) => 1 + node.left.size() + node.right.size(),
        }
    }

    /// The smallest element, or `EmptyStructure`. O(1).
    pub fn find_min(&self) -> Result<&E> {
        match self {
            LeftistHeap::Empty => Err(Error::empty("find_min")),
            LeftistHeap::Node(node) => Ok(&node.value),
        }
    }
}

impl<E: Ord + Clone> LeftistHeap<E> {
    /// Merge two heaps. O(log n): the recursion descends right spines only.
    ///
    /// The smaller root wins (ties go to `self`); it keeps its left child
    /// and takes the merge of its right child with the losing heap as the
    /// new right, then the children are swapped if needed to restore the
    /// leftist property.
    pub fn merge(&self, other: &LeftistHeap<E>) -> LeftistHeap<E> {
        match (self, other) {
            (LeftistHeap::Empty, _) => other.clone(),
            (_, LeftistHeap::Empty) => self.clone(),
            (LeftistHeap::Node(a), LeftistHeap::Node(b)) => {
                if a.value <= b.value {
                    Self::make_node(a.value.clone(), a.left.clone(), a.right.merge(other))
                } else {
                    Self::make_node(b.value.clone(), b.left.clone(), self.merge(&b.right))
                }
            }
        }
    }

    /// Insert by merging with a singleton. O(log n).
    pub fn insert(&self, value: E) -> LeftistHeap<E> {
        LeftistHeap::singleton(value).merge(self)
    }

    /// Remove the smallest element by merging the root's children, or
    /// `EmptyStructure`. O(log n).
    pub fn delete_min(&self) -> Result<LeftistHeap<E>> {
        match self {
            LeftistHeap::Empty => Err(Error::empty("delete_min")),
            LeftistHeap::Node(node) => Ok(node.left.merge(&node.right)),
        }
    }

    /// Build a heap by inserting every value.
    pub fn of(values: &[E]) -> Self {
        let mut heap = LeftistHeap::Empty;
        for value in values {
            heap = heap.insert(value.clone());
        }
        heap
    }

    /// Drain into ascending order by repeated `delete_min`. O(n log n).
    pub fn to_sorted_vec(&self) -> Vec<E> {
        let mut out = Vec::new();
        let mut heap = self.clone();
        while let LeftistHeap::Node(node) = heap {
            out.push(node.value.clone());
            heap = node.left.merge(&node.right);
        }
        out
    }

    /// Re-form a node from a value and two merged subtrees: the larger-rank
    /// child goes left, and the rank is one more than the smaller child's.
    fn make_node(value: E, left: LeftistHeap<E>, right: LeftistHeap<E>) -> LeftistHeap<E> {
        if left.rank() >= right.rank() {
            LeftistHeap::Node(Rc::new(HeapNode {
                rank: right.rank() + 1,
                value,
                left,
                right,
            }))
        } else {
            LeftistHeap::Node(Rc::new(HeapNode {
                rank: left.rank() + 1,
                value,
                left: right,
                right: left,
            }))
        }
    }
}

impl<E> Clone for LeftistHeap<E> {
    fn clone(&self) -> Self {
        match self {
            LeftistHeap::Empty => LeftistHeap::Empty,
            LeftistHeap::Node(node) => LeftistHeap::Node(Rc::clone(node)),
        }
    }
}

impl<E> Default for LeftistHeap<E> {
    fn default() -> Self {
        LeftistHeap::Empty
    }
}

impl<E: Ord + Clone> FromIterator<E> for LeftistHeap<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut heap = LeftistHeap::Empty;
        for value in iter {
            heap = heap.insert(value);
        }
        heap
    }
}

impl<E: fmt::Debug> fmt::Debug for LeftistHeap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeftistHeap::Empty => write!(f, "LeftistHeap::Empty"),
            LeftistHeap::Node(node) => f
                .debug_struct("LeftistHeap::Node")
                .field("rank", &node.rank)
                .field("value", &node.value)
                .field("left", &node.left)
                .field("right", &node.right)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors() {
        let heap: LeftistHeap<i32> = LeftistHeap::new();
        assert_eq!(heap.find_min(), Err(Error::empty("find_min")));
        assert!(heap.delete_min().is_err());
        assert!(heap.is_empty());
        assert_eq!(heap.size(), 0);
    }

    #[test]
    fn test_insert_and_find_min() {
        let heap = LeftistHeap::of(&[5, 1, 3]);
        assert_eq!(heap.find_min(), Ok(&1));
        assert_eq!(heap.size(), 3);
    }

    #[test]
    fn test_delete_min_sorts() {
        let heap = LeftistHeap::of(&[4, 1, 3, 2, 5]);
        assert_eq!(heap.to_sorted_vec(), vec![1, 2, 3, 4, 5]);
        // The source handle is untouched.
        assert_eq!(heap.size(), 5);
    }

    #[test]
    fn test_merge() {
        let a = LeftistHeap::of(&[1, 5, 9]);
        let b = LeftistHeap::of(&[2, 4, 8]);
        let merged = a.merge(&b);
        assert_eq!(merged.to_sorted_vec(), vec![1, 2, 4, 5, 8, 9]);
        assert_eq!(a.size(), 3);
        assert_eq!(b.size(), 3);
    }

    #[test]
    fn test_duplicates() {
        let heap = LeftistHeap::of(&[2, 1, 2, 1]);
        assert_eq!(heap.to_sorted_vec(), vec![1, 1, 2, 2]);
    }

    fn check_leftist<E: Ord>(heap: &LeftistHeap<E>) {
        if let LeftistHeap::Node(node) = heap {
            assert!(node.left.rank() >= node.right.rank());
            assert_eq!(node.rank, node.right.rank() + 1);
            if let LeftistHeap::Node(child) = &node.left {
                assert!(node.value <= child.value);
            }
            if let LeftistHeap::Node(child) = &node.right {
                assert!(node.value <= child.value);
            }
            check_leftist(&node.left);
            check_leftist(&node.right);
        }
    }

    #[test]
    fn test_rank_invariant() {
        let mut heap = LeftistHeap::new();
        for i in [7, 3, 9, 1, 8, 2, 6, 4, 5, 0] {
            heap = heap.insert(i);
            check_leftist(&heap);
        }
        while let Ok(rest) = heap.delete_min() {
            check_leftist(&rest);
            heap = rest;
        }
    }
}
