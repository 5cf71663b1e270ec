// lazydata - Eager persistent cons list
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! A finite, fully materialized persistent singly linked list.
//!
//! `cons` is O(1) and shares the entire tail with the source list; everything
//! that walks the spine (`len`, `reverse`, folds, `contains`) is O(n).
//! Concatenation rebuilds the left operand onto the right, so it is O(n) in
//! the left length.
//!
//! Two operations bridge to the lazy side: [`to_lazy`](ConsList::to_lazy)
//! wraps each cell in a deferred computation (forcing one produced cell
//! builds exactly the next), and [`reverse_lazy`](ConsList::reverse_lazy)
//! reverses eagerly but returns a [`LazyList`] whose cells are already
//! forced. The banker's queue relies on both.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::lazy_list::LazyList;
use crate::need::Need;

/// An eager immutable singly linked list.
pub enum ConsList<V> {
    /// The empty list.
    Nil,
    /// A cell holding one element and the rest of the list.
    Cons(Rc<ConsNode<V>>),
}

/// A single cell of a [`ConsList`].
#[derive(Debug)]
pub struct ConsNode<V> {
    pub head: V,
    pub tail: ConsList<V>,
}

impl<V> ConsList<V> {
    /// The empty list.
    pub fn new() -> Self {
        ConsList::Nil
    }

    /// Prepend an element, sharing this list as the tail. O(1).
    pub fn cons(&self, value: V) -> ConsList<V> {
        ConsList::Cons(Rc::new(ConsNode {
            head: value,
            tail: self.clone(),
        }))
    }

    /// The first element, or `EmptyStructure` on the empty list.
    pub fn head(&self) -> Result<&V> {
        match self {
            ConsList::Nil => Err(Error::empty("head")),
            ConsList::Cons(node) => Ok(&node.head),
        }
    }

    /// The first element, or `None` on the empty list.
    pub fn head_opt(&self) -> Option<&V> {
        match self {
            ConsList::Nil => None,
            ConsList::Cons(node) => Some(&node.head),
        }
    }

    /// Everything after the first element, or `EmptyStructure` on the empty
    /// list.
    pub fn tail(&self) -> Result<&ConsList<V>> {
        match self {
            ConsList::Nil => Err(Error::empty("tail")),
            ConsList::Cons(node) => Ok(&node.tail),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ConsList::Nil)
    }

    /// Number of elements. O(n) - the length is not cached.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self;
        while let ConsList::Cons(node) = current {
            count += 1;
            current = &node.tail;
        }
        count
    }

    /// The element at `index`, or `IndexOutOfRange`.
    pub fn get(&self, index: usize) -> Result<&V> {
        let mut i = 0;
        let mut current = self;
        while let ConsList::Cons(node) = current {
            if i == index {
                return Ok(&node.head);
            }
            i += 1;
            current = &node.tail;
        }
        Err(Error::index(index, i))
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        let mut i = 0;
        let mut current = self;
        while let ConsList::Cons(node) = current {
            if node.head == *value {
                return Some(i);
            }
            i += 1;
            current = &node.tail;
        }
        None
    }

    /// Position of the last element equal to `value`.
    pub fn last_index_of(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        let mut i = 0;
        let mut last = None;
        let mut current = self;
        while let ConsList::Cons(node) = current {
            if node.head == *value {
                last = Some(i);
            }
            i += 1;
            current = &node.tail;
        }
        last
    }

    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// True if any element satisfies the predicate.
    pub fn any<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        let mut current = self;
        while let ConsList::Cons(node) = current {
            if f(&node.head) {
                return true;
            }
            current = &node.tail;
        }
        false
    }

    /// Fold from the front.
    pub fn fold_left<Z, F>(&self, z: Z, mut f: F) -> Z
    where
        F: FnMut(Z, &V) -> Z,
    {
        let mut acc = z;
        let mut current = self;
        while let ConsList::Cons(node) = current {
            acc = f(acc, &node.head);
            current = &node.tail;
        }
        acc
    }

    /// Fold from the back (materializes the spine once).
    pub fn fold_right<Z, F>(&self, z: Z, mut f: F) -> Z
    where
        F: FnMut(&V, Z) -> Z,
    {
        let mut spine = Vec::new();
        let mut current = self;
        while let ConsList::Cons(node) = current {
            spine.push(&node.head);
            current = &node.tail;
        }
        let mut acc = z;
        for head in spine.into_iter().rev() {
            acc = f(head, acc);
        }
        acc
    }

    /// Iterate over the elements by reference.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { current: self }
    }
}

impl<V: Clone> ConsList<V> {
    /// Build a list from a slice, preserving order.
    pub fn from_slice(values: &[V]) -> Self {
        let mut result = ConsList::Nil;
        for value in values.iter().rev() {
            result = result.cons(value.clone());
        }
        result
    }

    /// Replace the element at `index`, sharing the unchanged suffix.
    pub fn update(&self, index: usize, value: V) -> Result<ConsList<V>> {
        let mut prefix = Vec::with_capacity(index);
        let mut i = 0;
        let mut current = self;
        while let ConsList::Cons(node) = current {
            if i == index {
                let mut result = node.tail.cons(value);
                for head in prefix.into_iter().rev() {
                    result = result.cons(head);
                }
                return Ok(result);
            }
            prefix.push(node.head.clone());
            i += 1;
            current = &node.tail;
        }
        Err(Error::index(index, i))
    }

    /// New list with the elements in reverse order.
    pub fn reverse(&self) -> ConsList<V> {
        let mut result = ConsList::Nil;
        let mut current = self;
        while let ConsList::Cons(node) = current {
            result = result.cons(node.head.clone());
            current = &node.tail;
        }
        result
    }

    /// Keep the elements satisfying the predicate, preserving order.
    pub fn filter<F>(&self, mut f: F) -> ConsList<V>
    where
        F: FnMut(&V) -> bool,
    {
        let mut reversed = ConsList::Nil;
        let mut current = self;
        while let ConsList::Cons(node) = current {
            if f(&node.head) {
                reversed = reversed.cons(node.head.clone());
            }
            current = &node.tail;
        }
        reversed.reverse()
    }

    /// Concatenate: rebuild this list onto `other`. O(n) in `self`, shares
    /// `other` wholesale.
    pub fn concat(&self, other: &ConsList<V>) -> ConsList<V> {
        self.fold_right(other.clone(), |value, acc| acc.cons(value.clone()))
    }

    pub fn to_vec(&self) -> Vec<V> {
        let mut out = Vec::new();
        let mut current = self;
        while let ConsList::Cons(node) = current {
            out.push(node.head.clone());
            current = &node.tail;
        }
        out
    }
}

impl<V: Clone + 'static> ConsList<V> {
    /// Wrap each cell lazily without building the whole chain up front.
    ///
    /// Forcing one produced cell clones one element and defers the rest, so
    /// a consumer that stops early never touches the remainder of the spine.
    pub fn to_lazy(&self) -> LazyList<V> {
        match self {
            ConsList::Nil => LazyList::nil(),
            ConsList::Cons(node) => {
                let node = Rc::clone(node);
                LazyList::delay(Need::new(move || {
                    LazyList::strict_cons(node.head.clone(), node.tail.to_lazy())
                }))
            }
        }
    }

    /// Reverse eagerly, but produce a [`LazyList`] whose cells are already
    /// forced. Used where a lazy-typed result is required and immediate
    /// computation is acceptable (banker's queue rebalancing).
    pub fn reverse_lazy(&self) -> LazyList<V> {
        let mut result = LazyList::nil();
        let mut current = self;
        while let ConsList::Cons(node) = current {
            result = result.cons(node.head.clone());
            current = &node.tail;
        }
        result
    }

    /// Fold from the back into a deferred result without forcing it.
    pub fn fold_right_lazy<Z, F>(&self, z: Need<Z>, f: &F) -> Need<Z>
    where
        Z: Clone + 'static,
        F: Fn(V, Need<Z>) -> Need<Z>,
    {
        match self {
            ConsList::Nil => z,
            ConsList::Cons(node) => f(node.head.clone(), node.tail.fold_right_lazy(z, f)),
        }
    }
}

impl<V> Clone for ConsList<V> {
    fn clone(&self) -> Self {
        match self {
            ConsList::Nil => ConsList::Nil,
            ConsList::Cons(node) => ConsList::Cons(Rc::clone(node)),
        }
    }
}

impl<V> Default for ConsList<V> {
    fn default() -> Self {
        ConsList::Nil
    }
}

/// Borrowing iterator over a [`ConsList`].
pub struct Iter<'a, V> {
    current: &'a ConsList<V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        match self.current {
            ConsList::Nil => None,
            ConsList::Cons(node) => {
                self.current = &node.tail;
                Some(&node.head)
            }
        }
    }
}

impl<'a, V> IntoIterator for &'a ConsList<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V: Clone> From<Vec<V>> for ConsList<V> {
    fn from(values: Vec<V>) -> Self {
        ConsList::from_slice(&values)
    }
}

impl<V> FromIterator<V> for ConsList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let values: Vec<V> = iter.into_iter().collect();
        let mut result = ConsList::Nil;
        for value in values.into_iter().rev() {
            result = result.cons(value);
        }
        result
    }
}

impl<V: Clone> std::ops::Add for &ConsList<V> {
    type Output = ConsList<V>;

    fn add(self, other: &ConsList<V>) -> ConsList<V> {
        self.concat(other)
    }
}

impl<V: PartialEq> PartialEq for ConsList<V> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self;
        let mut b = other;
        loop {
            match (a, b) {
                (ConsList::Nil, ConsList::Nil) => return true,
                (ConsList::Cons(x), ConsList::Cons(y)) => {
                    if Rc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.head != y.head {
                        return false;
                    }
                    a = &x.tail;
                    b = &y.tail;
                }
                _ => return false,
            }
        }
    }
}

impl<V: Eq> Eq for ConsList<V> {}

/// Lexicographic order by element sequence; a strict prefix sorts first.
impl<V: PartialOrd> PartialOrd for ConsList<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering;

        let mut a = self;
        let mut b = other;
        loop {
            match (a, b) {
                (ConsList::Nil, ConsList::Nil) => return Some(Ordering::Equal),
                (ConsList::Nil, ConsList::Cons(_)) => return Some(Ordering::Less),
                (ConsList::Cons(_), ConsList::Nil) => return Some(Ordering::Greater),
                (ConsList::Cons(x), ConsList::Cons(y)) => {
                    match x.head.partial_cmp(&y.head) {
                        Some(Ordering::Equal) => {
                            a = &x.tail;
                            b = &y.tail;
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

impl<V: Ord> Ord for ConsList<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        let mut a = self;
        let mut b = other;
        loop {
            match (a, b) {
                (ConsList::Nil, ConsList::Nil) => return Ordering::Equal,
                (ConsList::Nil, ConsList::Cons(_)) => return Ordering::Less,
                (ConsList::Cons(_), ConsList::Nil) => return Ordering::Greater,
                (ConsList::Cons(x), ConsList::Cons(y)) => match x.head.cmp(&y.head) {
                    Ordering::Equal => {
                        a = &x.tail;
                        b = &y.tail;
                    }
                    other => return other,
                },
            }
        }
    }
}

impl<V: Hash> Hash for ConsList<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut current = self;
        while let ConsList::Cons(node) = current {
            node.head.hash(state);
            current = &node.tail;
        }
    }
}

impl<V: fmt::Display> fmt::Display for ConsList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConsList(")?;
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        write!(f, ")")
    }
}

impl<V: fmt::Debug> fmt::Debug for ConsList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
