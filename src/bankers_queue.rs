// lazydata - Banker's queue over a lazy front and an eager back
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! An amortized O(1) FIFO queue built from the two list types: the front is
//! a [`LazyList`] in forward order, the back an eager [`ConsList`] in
//! reverse-of-insertion order.
//!
//! The balance invariant `rs <= ls` (back never longer than front) is
//! restored after every operation by [`rebalance`]: when the back outgrows
//! the front, the back is reversed once and appended lazily behind the
//! front. Each element pays for at most one such reversal over its lifetime,
//! which is the credit argument behind the amortized O(1) bound - a single
//! `uncons` may still trigger an O(n) reversal.
//!
//! `uncons` returns a deferred "maybe" result rather than an error, so hot
//! paths can pop without pre-checking emptiness.
//!
//! [`rebalance`]: BankersQueue::rebalance

use std::fmt;

use crate::cons_list::ConsList;
use crate::lazy_list::{LazyList, Strict};
use crate::need::Need;

/// A persistent FIFO queue with amortized O(1) `snoc` and `uncons`.
#[derive(Clone)]
pub struct BankersQueue<A> {
    /// Length of `left`.
    ls: usize,
    /// Front of the queue, forward order, lazy.
    left: LazyList<A>,
    /// Length of `right`.
    rs: usize,
    /// Back of the queue, reverse-of-insertion order, eager.
    right: ConsList<A>,
}

impl<A: Clone + 'static> BankersQueue<A> {
    /// The empty queue.
    pub fn new() -> Self {
        BankersQueue {
            ls: 0,
            left: LazyList::nil(),
            rs: 0,
            right: ConsList::Nil,
        }
    }

    /// Queue containing the list's elements in order. The front is wrapped
    /// lazily cell by cell, so nothing beyond the spine walk for `len` is
    /// done eagerly.
    pub fn from_cons_list(list: &ConsList<A>) -> Self {
        BankersQueue {
            ls: list.len(),
            left: list.to_lazy(),
            rs: 0,
            right: ConsList::Nil,
        }
    }

    /// Push an element onto the back. Amortized O(1).
    pub fn snoc(&self, value: A) -> Self {
        Self::rebalance(self.ls, self.left.clone(), self.rs + 1, self.right.cons(value))
    }

    /// Bulk-push a batch that is already in reverse order (newest first),
    /// exactly as the back list stores it.
    pub fn snoc_reversed(&self, batch: &ConsList<A>) -> Self {
        Self::rebalance(
            self.ls,
            self.left.clone(),
            self.rs + batch.len(),
            batch.concat(&self.right),
        )
    }

    /// Pop the front as a deferred computation.
    ///
    /// Forcing the result forces exactly the first cell of the front:
    /// `None` means the queue is empty; otherwise the element is paired with
    /// the rebalanced remainder.
    pub fn uncons(&self) -> Need<Option<(A, BankersQueue<A>)>> {
        let ls = self.ls;
        let rs = self.rs;
        let right = self.right.clone();
        self.left.thunk().map(move |strict| match strict {
            Strict::Nil => None,
            Strict::Cons { head, tail } => {
                Some((head, Self::rebalance(ls - 1, (*tail).clone(), rs, right)))
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.ls == 0
    }

    /// Total number of elements. O(1) - both sides keep counts.
    pub fn len(&self) -> usize {
        self.ls + self.rs
    }

    /// Length of the lazy front (white-box view for the balance invariant).
    pub fn front_len(&self) -> usize {
        self.ls
    }

    /// Length of the eager back (white-box view for the balance invariant).
    pub fn back_len(&self) -> usize {
        self.rs
    }

    /// Force the whole queue into a `Vec` in pop order.
    pub fn to_vec(&self) -> Vec<A> {
        let mut out = self.left.to_vec();
        out.extend(self.right.reverse().iter().cloned());
        out
    }

    /// Restore `rs <= ls`: when the back outgrows the front, reverse it once
    /// (eagerly) and append it lazily behind the front.
    fn rebalance(ls: usize, left: LazyList<A>, rs: usize, right: ConsList<A>) -> Self {
        if rs <= ls {
            BankersQueue {
                ls,
                left,
                rs,
                right,
            }
        } else {
            BankersQueue {
                ls: ls + rs,
                left: left.concat(&right.reverse_lazy()),
                rs: 0,
                right: ConsList::Nil,
            }
        }
    }
}

impl<A: Clone + 'static> Default for BankersQueue<A> {
    fn default() -> Self {
        BankersQueue::new()
    }
}

/// Equality is by forced content in pop order, not internal balance.
impl<A: PartialEq + Clone + 'static> PartialEq for BankersQueue<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.to_vec() == other.to_vec()
    }
}

impl<A: Eq + Clone + 'static> Eq for BankersQueue<A> {}

impl<A: fmt::Debug + Clone + 'static> fmt::Debug for BankersQueue<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankersQueue")
            .field("ls", &self.ls)
            .field("left", &self.left)
            .field("rs", &self.rs)
            .field("right", &self.right)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut queue: BankersQueue<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some((value, rest)) = queue.uncons().force() {
            out.push(value);
            queue = rest;
        }
        out
    }

    #[test]
    fn test_fifo_order() {
        let queue = BankersQueue::new().snoc(1).snoc(2).snoc(3);
        assert_eq!(drain(queue), vec![1, 2, 3]);
    }

    #[test]
    fn test_uncons_empty_is_none() {
        let queue: BankersQueue<i32> = BankersQueue::new();
        assert!(queue.uncons().force().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_balance_invariant() {
        let mut queue = BankersQueue::new();
        for i in 0..100 {
            queue = queue.snoc(i);
            assert!(queue.back_len() <= queue.front_len());
        }
        while let Some((_, rest)) = queue.uncons().force() {
            assert!(rest.back_len() <= rest.front_len());
            queue = rest;
        }
    }

    #[test]
    fn test_snoc_reversed() {
        let queue = BankersQueue::new().snoc(1);
        // Batch in reverse order: 4 is the newest element.
        let batch = ConsList::from_slice(&[4, 3, 2]);
        let queue = queue.snoc_reversed(&batch);
        assert_eq!(queue.len(), 4);
        assert!(queue.back_len() <= queue.front_len());
        assert_eq!(drain(queue), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_cons_list() {
        let list = ConsList::from_slice(&[1, 2, 3]);
        let queue = BankersQueue::from_cons_list(&list);
        assert_eq!(queue.len(), 3);
        assert_eq!(drain(queue), vec![1, 2, 3]);
    }

    #[test]
    fn test_persistence() {
        let queue = BankersQueue::new().snoc(1).snoc(2);
        let longer = queue.snoc(3);
        assert_eq!(queue.to_vec(), vec![1, 2]);
        assert_eq!(longer.to_vec(), vec![1, 2, 3]);
        // Popping one handle does not disturb the other.
        let (head, _) = queue.uncons().force().unwrap();
        assert_eq!(head, 1);
        assert_eq!(longer.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_uncons_is_deferred() {
        let queue = BankersQueue::new().snoc(1).snoc(2);
        let pending = queue.uncons();
        assert!(!pending.is_realized());
        let (value, rest) = pending.force().unwrap();
        assert_eq!(value, 1);
        assert_eq!(rest.to_vec(), vec![2]);
    }
}
