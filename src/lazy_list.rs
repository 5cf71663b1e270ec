// lazydata - Lazy persistent cons list
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! A persistent, possibly-infinite singly linked list whose tail is deferred
//! behind a [`Need`] and memoized.
//!
//! A list is either `Delay` (an unforced cell) or `Strict` (a forced `Nil` or
//! `Cons`). Forcing a `Delay` runs its thunk exactly once; because clones
//! share the `Need` cell, the forced result becomes the node's cached
//! identity for every handle that can reach it.
//!
//! `map`, `flat_map`, `filter` and concatenation are all re-expressed through
//! `Need`, so forcing a derived list forces only as many source cells as the
//! consumer actually demands. `filter` is the one exception to "one cell in,
//! one cell out": it may force arbitrarily many rejected source cells before
//! it can yield a `Cons` or `Nil`.

use std::fmt;
use std::rc::Rc;

use crate::cons_list::ConsList;
use crate::error::{Error, Result};
use crate::need::Need;

/// A lazy immutable singly linked list.
#[derive(Clone)]
pub enum LazyList<E> {
    /// An unforced cell.
    Delay(Need<Strict<E>>),
    /// A forced cell.
    Strict(Strict<E>),
}

/// A forced cell of a [`LazyList`].
#[derive(Clone)]
pub enum Strict<E> {
    Nil,
    Cons { head: E, tail: Rc<LazyList<E>> },
}

impl<E> LazyList<E> {
    /// The empty list.
    pub fn nil() -> Self {
        LazyList::Strict(Strict::Nil)
    }

    /// Wrap a deferred cell.
    pub fn delay(thunk: Need<Strict<E>>) -> Self {
        LazyList::Delay(thunk)
    }

    /// Build a forced cons cell.
    pub fn strict_cons(head: E, tail: LazyList<E>) -> Strict<E> {
        Strict::Cons {
            head,
            tail: Rc::new(tail),
        }
    }

    /// Whether the first cell has already been forced.
    pub fn is_realized(&self) -> bool {
        match self {
            LazyList::Strict(_) => true,
            LazyList::Delay(need) => need.is_realized(),
        }
    }
}

impl<E: Clone + 'static> LazyList<E> {
    /// The first cell as a shared deferred computation. `Strict` cells wrap
    /// themselves; `Delay` cells hand out their memo-cell, so every handle
    /// forces the same thunk at most once.
    pub fn thunk(&self) -> Need<Strict<E>> {
        match self {
            LazyList::Delay(need) => need.clone(),
            LazyList::Strict(strict) => Need::now(strict.clone()),
        }
    }

    /// Prepend an element. O(1), never forces anything.
    pub fn cons(&self, head: E) -> LazyList<E> {
        LazyList::Strict(Strict::Cons {
            head,
            tail: Rc::new(self.clone()),
        })
    }

    /// Lazy concatenation. Forcing the result forces at most the first
    /// unresolved cell of the left operand per cell demanded; the right
    /// operand is untouched until the left is exhausted.
    pub fn concat(&self, other: &LazyList<E>) -> LazyList<E> {
        let other = other.clone();
        LazyList::Delay(self.thunk().flat_map(move |strict| match strict {
            Strict::Nil => other.thunk(),
            Strict::Cons { head, tail } => Need::new(move || Strict::Cons {
                head,
                tail: Rc::new(tail.concat(&other)),
            }),
        }))
    }

    /// Lazy map: no source cell is forced until the corresponding output
    /// cell is.
    pub fn map<G, F>(&self, f: F) -> LazyList<G>
    where
        G: Clone + 'static,
        F: Fn(E) -> G + 'static,
    {
        self.map_rc(Rc::new(f))
    }

    fn map_rc<G: Clone + 'static>(&self, f: Rc<dyn Fn(E) -> G>) -> LazyList<G> {
        LazyList::Delay(self.thunk().map(move |strict| match strict {
            Strict::Nil => Strict::Nil,
            Strict::Cons { head, tail } => {
                let rest = tail.map_rc(Rc::clone(&f));
                Strict::Cons {
                    head: f(head),
                    tail: Rc::new(rest),
                }
            }
        }))
    }

    /// Lazy flat-map, defined through lazy concatenation.
    pub fn flat_map<G, F>(&self, f: F) -> LazyList<G>
    where
        G: Clone + 'static,
        F: Fn(E) -> LazyList<G> + 'static,
    {
        self.flat_map_rc(Rc::new(f))
    }

    fn flat_map_rc<G: Clone + 'static>(&self, f: Rc<dyn Fn(E) -> LazyList<G>>) -> LazyList<G> {
        LazyList::Delay(self.thunk().flat_map(move |strict| match strict {
            Strict::Nil => Need::now(Strict::Nil),
            Strict::Cons { head, tail } => {
                let rest = tail.flat_map_rc(Rc::clone(&f));
                f(head).concat(&rest).thunk()
            }
        }))
    }

    /// Lazy filter. Forcing the first output cell forces source cells until
    /// an element passes the predicate (or the source ends), so a long run of
    /// rejections is paid for by the forcing caller.
    pub fn filter<F>(&self, f: F) -> LazyList<E>
    where
        F: Fn(&E) -> bool + 'static,
    {
        self.filter_rc(Rc::new(f))
    }

    fn filter_rc(&self, f: Rc<dyn Fn(&E) -> bool>) -> LazyList<E> {
        LazyList::Delay(self.thunk().flat_map(move |strict| match strict {
            Strict::Nil => Need::now(Strict::Nil),
            Strict::Cons { head, tail } => {
                let rest = tail.filter_rc(Rc::clone(&f));
                if f(&head) {
                    Need::now(Strict::Cons {
                        head,
                        tail: Rc::new(rest),
                    })
                } else {
                    rest.thunk()
                }
            }
        }))
    }

    /// Force the first cell and return its element, or `EmptyStructure`.
    pub fn head(&self) -> Result<E> {
        match self.thunk().force() {
            Strict::Nil => Err(Error::empty("head")),
            Strict::Cons { head, .. } => Ok(head),
        }
    }

    /// Force the first cell and return the rest, or `EmptyStructure`.
    pub fn tail(&self) -> Result<LazyList<E>> {
        match self.thunk().force() {
            Strict::Nil => Err(Error::empty("tail")),
            Strict::Cons { tail, .. } => Ok((*tail).clone()),
        }
    }

    /// Force the first cell and test for `Nil`.
    pub fn is_empty(&self) -> bool {
        matches!(self.thunk().force(), Strict::Nil)
    }

    /// Build from a generator; each call to `f` is deferred until the
    /// corresponding cell is forced, `None` ends the list.
    pub fn from_fn<F>(mut f: F) -> LazyList<E>
    where
        F: FnMut() -> Option<E> + 'static,
    {
        LazyList::Delay(Need::new(move || match f() {
            None => Strict::Nil,
            Some(head) => Strict::Cons {
                head,
                tail: Rc::new(LazyList::from_fn(f)),
            },
        }))
    }

    /// Build an already-forced list from a slice.
    pub fn from_slice(values: &[E]) -> LazyList<E> {
        let mut result = LazyList::nil();
        for value in values.iter().rev() {
            result = result.cons(value.clone());
        }
        result
    }

    /// Forcing iterator: each `next` forces one more cell.
    pub fn iter(&self) -> Iter<E> {
        Iter {
            current: self.clone(),
        }
    }

    /// Eagerly force the whole list into a `Vec`.
    pub fn to_vec(&self) -> Vec<E> {
        let mut out = Vec::new();
        let mut current = self.clone();
        loop {
            match current.thunk().force() {
                Strict::Nil => return out,
                Strict::Cons { head, tail } => {
                    out.push(head);
                    current = (*tail).clone();
                }
            }
        }
    }

    /// Eagerly force the whole list into an eager [`ConsList`].
    pub fn to_cons_list(&self) -> ConsList<E> {
        ConsList::from(self.to_vec())
    }
}

/// Iterator that forces cells on demand.
pub struct Iter<E> {
    current: LazyList<E>,
}

impl<E: Clone + 'static> Iterator for Iter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        match self.current.thunk().force() {
            Strict::Nil => None,
            Strict::Cons { head, tail } => {
                self.current = (*tail).clone();
                Some(head)
            }
        }
    }
}

impl<E: Clone + 'static> FromIterator<E> for LazyList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let values: Vec<E> = iter.into_iter().collect();
        let mut result = LazyList::nil();
        for value in values.into_iter().rev() {
            result = result.cons(value);
        }
        result
    }
}

impl<E: Clone + 'static> std::ops::Add for &LazyList<E> {
    type Output = LazyList<E>;

    fn add(self, other: &LazyList<E>) -> LazyList<E> {
        self.concat(other)
    }
}

/// Shows only the already-forced prefix; `Debug` never forces a cell.
impl<E: fmt::Debug + Clone + 'static> fmt::Debug for LazyList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LazyList(")?;
        let mut first = true;
        let mut current = self.clone();
        loop {
            let forced = match &current {
                LazyList::Strict(strict) => Some(strict.clone()),
                LazyList::Delay(need) if need.is_realized() => Some(need.force()),
                LazyList::Delay(_) => None,
            };
            match forced {
                None => {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "..")?;
                    break;
                }
                Some(Strict::Nil) => break,
                Some(Strict::Cons { head, tail }) => {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", head)?;
                    first = false;
                    current = (*tail).clone();
                }
            }
        }
        write!(f, ")")
    }
}
