// lazydata - Chain: a concatenation tree over arbitrary elements
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! A rope for bulk sequences: concatenation builds an O(1) tree node instead
//! of copying, and the tree is flattened only at materialization time.
//!
//! Alongside the representation a `Chain` carries two counters: `length`,
//! the total element count (additive on concatenation), and `depth`, an
//! upper bound on nesting used solely to size the explicit flattening stack.
//! Depth is *not* a balance invariant - a chain built by 100 000 one-sided
//! appends is a 100 000-deep list of `Concat` nodes, and flattening it must
//! still work. [`to_vec`](Chain::to_vec) therefore simulates the recursive
//! traversal `visit(Concat(l, r)) = visit(l); visit(r)` with an explicit
//! stack of pending right subtrees, never recursing, so pathologically deep
//! trees cannot overflow the call stack.

use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A persistent sequence represented as a tree of deferred concatenations.
#[derive(Clone)]
pub struct Chain<A> {
    repr: Rep<A>,
    length: usize,
    depth: usize,
}

/// Internal node shape. `Wrap` shares a pre-existing slice without copying.
#[derive(Clone)]
enum Rep<A> {
    Empty,
    One(A),
    Wrap(Rc<[A]>),
    Concat(Rc<Rep<A>>, Rc<Rep<A>>),
}

impl<A> Chain<A> {
    /// The empty chain.
    pub fn empty() -> Self {
        Chain {
            repr: Rep::Empty,
            length: 0,
            depth: 1,
        }
    }

    /// A one-element chain.
    pub fn of(value: A) -> Self {
        Chain {
            repr: Rep::One(value),
            length: 1,
            depth: 1,
        }
    }

    /// Wrap an owned vector as a single leaf without copying.
    pub fn from_vec(values: Vec<A>) -> Self {
        let length = values.len();
        Chain {
            repr: Rep::Wrap(values.into()),
            length,
            depth: 1,
        }
    }

    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Nesting bound used to size the flattening stack (white-box view).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Walk the elements left to right without materializing. Uses the same
    /// explicit-stack discipline as [`to_vec`](Chain::to_vec), one step per
    /// `next` call.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            rights: Vec::with_capacity(self.depth),
            current: Some(&self.repr),
            wrap: None,
        }
    }

    /// The element at `index`, or `IndexOutOfRange`. O(n).
    pub fn get(&self, index: usize) -> Result<&A> {
        let mut remaining = index;
        for value in self.iter() {
            if remaining == 0 {
                return Ok(value);
            }
            remaining -= 1;
        }
        Err(Error::index(index, self.length))
    }
}

impl<A: Clone> Chain<A> {
    /// Copy a slice into a single leaf.
    pub fn from_slice(values: &[A]) -> Self {
        Chain {
            repr: Rep::Wrap(values.into()),
            length: values.len(),
            depth: 1,
        }
    }

    /// Concatenate two chains. O(1) apart from the two counter updates.
    pub fn concat(&self, other: &Chain<A>) -> Chain<A> {
        Chain {
            repr: Rep::Concat(Rc::new(self.repr.clone()), Rc::new(other.repr.clone())),
            length: self.length + other.length,
            depth: usize::max(self.depth + 1, other.depth),
        }
    }

    /// Append a single element. O(1).
    pub fn append(&self, value: A) -> Chain<A> {
        Chain {
            repr: Rep::Concat(Rc::new(self.repr.clone()), Rc::new(Rep::One(value))),
            length: self.length + 1,
            depth: self.depth + 1,
        }
    }

    /// Prepend a single element. O(1).
    pub fn prepend(&self, value: A) -> Chain<A> {
        Chain {
            repr: Rep::Concat(Rc::new(Rep::One(value)), Rc::new(self.repr.clone())),
            length: self.length + 1,
            depth: self.depth + 1,
        }
    }

    /// Append a slice as one leaf. O(len) for the copy, one tree node.
    pub fn append_slice(&self, values: &[A]) -> Chain<A> {
        if values.is_empty() {
            return self.clone();
        }
        Chain {
            repr: Rep::Concat(Rc::new(self.repr.clone()), Rc::new(Rep::Wrap(values.into()))),
            length: self.length + values.len(),
            depth: self.depth + 1,
        }
    }

    /// Prepend a slice as one leaf. O(len) for the copy, one tree node.
    pub fn prepend_slice(&self, values: &[A]) -> Chain<A> {
        if values.is_empty() {
            return self.clone();
        }
        Chain {
            repr: Rep::Concat(Rc::new(Rep::Wrap(values.into())), Rc::new(self.repr.clone())),
            length: self.length + values.len(),
            depth: self.depth + 1,
        }
    }

    /// Flatten into a `Vec`, linear in element count plus tree node count.
    ///
    /// The pending-right stack is pre-sized to `depth`, the cursor descends
    /// left spines, and leaves are emitted at the write position; recursion
    /// is never used, so one-sided trees of any depth are safe.
    pub fn to_vec(&self) -> Vec<A> {
        let mut rights: Vec<&Rep<A>> = Vec::with_capacity(self.depth);
        let mut out: Vec<A> = Vec::with_capacity(self.length);
        let mut current = Some(&self.repr);
        while let Some(rep) = current {
            match rep {
                Rep::Empty => current = rights.pop(),
                Rep::One(value) => {
                    out.push(value.clone());
                    current = rights.pop();
                }
                Rep::Wrap(values) => {
                    out.extend(values.iter().cloned());
                    current = rights.pop();
                }
                Rep::Concat(left, right) => {
                    rights.push(right.as_ref());
                    current = Some(left.as_ref());
                }
            }
        }
        out
    }
}

impl<A: Clone> std::ops::Add for &Chain<A> {
    type Output = Chain<A>;

    fn add(self, other: &Chain<A>) -> Chain<A> {
        self.concat(other)
    }
}

impl<A> Default for Chain<A> {
    fn default() -> Self {
        Chain::empty()
    }
}

impl<A> From<Vec<A>> for Chain<A> {
    fn from(values: Vec<A>) -> Self {
        Chain::from_vec(values)
    }
}

impl<A> FromIterator<A> for Chain<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Chain::from_vec(iter.into_iter().collect())
    }
}

/// Equality is by linearized content, not tree shape.
impl<A: PartialEq> PartialEq for Chain<A> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for Chain<A> {}

impl<A: fmt::Debug> fmt::Debug for Chain<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for Chain<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chain(")?;
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

/// Borrowing iterator over a [`Chain`], driven by the explicit stack.
pub struct Iter<'a, A> {
    rights: Vec<&'a Rep<A>>,
    current: Option<&'a Rep<A>>,
    wrap: Option<(&'a [A], usize)>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A> {
        loop {
            if let Some((slice, pos)) = &mut self.wrap {
                if *pos < slice.len() {
                    let value = &slice[*pos];
                    *pos += 1;
                    return Some(value);
                }
                self.wrap = None;
                self.current = self.rights.pop();
            }
            match self.current.take() {
                None => return None,
                Some(Rep::Empty) => self.current = self.rights.pop(),
                Some(Rep::One(value)) => {
                    self.current = self.rights.pop();
                    return Some(value);
                }
                Some(Rep::Wrap(values)) => self.wrap = Some((values.as_ref(), 0)),
                Some(Rep::Concat(left, right)) => {
                    self.rights.push(right.as_ref());
                    self.current = Some(left.as_ref());
                }
            }
        }
    }
}

impl<'a, A> IntoIterator for &'a Chain<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linearization() {
        let chain = (&Chain::of('a') + &Chain::of('b')).append('c');
        assert_eq!(chain.to_vec(), vec!['a', 'b', 'c']);
        assert_eq!(chain.len(), 3);
        assert_eq!(format!("{}", chain), "Chain(a, b, c)");
    }

    #[test]
    fn test_empty() {
        let chain: Chain<i32> = Chain::empty();
        assert!(chain.is_empty());
        assert_eq!(chain.to_vec(), Vec::<i32>::new());
        assert_eq!(chain.depth(), 1);
    }

    #[test]
    fn test_wrap_leaves() {
        let chain = Chain::from_slice(&[1, 2]).concat(&Chain::from_vec(vec![3, 4]));
        assert_eq!(chain.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_prepend_and_slices() {
        let chain = Chain::of(3)
            .prepend(2)
            .prepend(1)
            .append_slice(&[4, 5])
            .prepend_slice(&[0]);
        assert_eq!(chain.to_vec(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get() {
        let chain = Chain::from_slice(&[10, 20]).append(30);
        assert_eq!(chain.get(0), Ok(&10));
        assert_eq!(chain.get(2), Ok(&30));
        assert_eq!(chain.get(3), Err(Error::index(3, 3)));
    }

    #[test]
    fn test_persistence() {
        let base = Chain::from_slice(&[1, 2]);
        let appended = base.append(3);
        assert_eq!(base.to_vec(), vec![1, 2]);
        assert_eq!(appended.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_equality_by_content() {
        let balanced = &Chain::of(1) + &(&Chain::of(2) + &Chain::of(3));
        let skewed = Chain::empty().append(1).append(2).append(3);
        assert_eq!(balanced, skewed);
    }

    #[test]
    fn test_deep_one_sided_append() {
        let mut chain = Chain::empty();
        for i in 0..100_000 {
            chain = chain.append(i);
        }
        let flat = chain.to_vec();
        assert_eq!(flat.len(), 100_000);
        assert_eq!(flat[0], 0);
        assert_eq!(flat[99_999], 99_999);
    }

    #[test]
    fn test_deep_one_sided_prepend() {
        let mut chain = Chain::empty();
        for i in 0..100_000 {
            chain = chain.prepend(i);
        }
        let flat = chain.to_vec();
        assert_eq!(flat[0], 99_999);
        assert_eq!(flat[99_999], 0);
    }

    #[test]
    fn test_iter_matches_to_vec() {
        let chain = (&Chain::from_slice(&[1, 2]) + &Chain::of(3)).append_slice(&[4, 5]);
        let collected: Vec<i32> = chain.iter().copied().collect();
        assert_eq!(collected, chain.to_vec());
    }
}
