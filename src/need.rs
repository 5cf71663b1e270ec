// lazydata - Need: a memoized deferred computation
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! `Need<T>` is a single-assignment memo-cell: a computation that is either
//! already evaluated or deferred behind a thunk, evaluated at most once, and
//! cached for every subsequent access.
//!
//! Clones of a `Need` share the underlying cell, so forcing through any
//! clone realizes all of them. This is the laziness substrate for
//! [`LazyList`](crate::LazyList) and the banker's queue: composing with
//! [`map`](Need::map) or [`flat_map`](Need::flat_map) builds a new deferred
//! cell without forcing the source.
//!
//! All structures in this crate are single-threaded value types (`Rc`, not
//! `Arc`), so a cell is realized exactly once by construction. Forcing a cell
//! from inside its own thunk is a caller bug and panics.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A memoized deferred computation.
pub struct Need<T> {
    state: Rc<RefCell<State<T>>>,
}

/// Internal state of the cell.
enum State<T> {
    /// Not yet evaluated - contains the thunk to call.
    Pending(Box<dyn FnOnce() -> T>),
    /// The thunk is currently running; observed only on re-entrant forcing.
    Running,
    /// Already evaluated - contains the cached result.
    Realized(T),
}

impl<T> Need<T> {
    /// Create an already-evaluated cell.
    pub fn now(value: T) -> Self {
        Need {
            state: Rc::new(RefCell::new(State::Realized(value))),
        }
    }

    /// Create a deferred cell from a thunk. The thunk runs the first time
    /// the cell is forced, and never again.
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Need {
            state: Rc::new(RefCell::new(State::Pending(Box::new(thunk)))),
        }
    }

    /// Check whether the cell has been evaluated.
    pub fn is_realized(&self) -> bool {
        matches!(*self.state.borrow(), State::Realized(_))
    }
}

impl<T: Clone> Need<T> {
    /// Evaluate-or-fetch-cached.
    ///
    /// The first call runs the thunk and stores the result; every later call
    /// (through this handle or any clone) returns the cached value.
    ///
    /// # Panics
    ///
    /// Panics if the cell's own thunk forces the cell again.
    pub fn force(&self) -> T {
        if let State::Realized(value) = &*self.state.borrow() {
            return value.clone();
        }
        // Take the thunk out so the borrow is not held while it runs.
        let thunk = match std::mem::replace(&mut *self.state.borrow_mut(), State::Running) {
            State::Pending(thunk) => thunk,
            State::Running => panic!("Need forced from inside its own thunk"),
            State::Realized(value) => {
                let result = value.clone();
                *self.state.borrow_mut() = State::Realized(value);
                return result;
            }
        };
        let value = thunk();
        *self.state.borrow_mut() = State::Realized(value.clone());
        value
    }

    /// Compose without forcing: the returned cell, when forced, forces this
    /// cell and applies `f` to the result.
    pub fn map<U, F>(self, f: F) -> Need<U>
    where
        T: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        Need::new(move || f(self.force()))
    }

    /// Compose without forcing: the returned cell, when forced, forces this
    /// cell, applies `f`, and forces the cell `f` produced.
    pub fn flat_map<U, F>(self, f: F) -> Need<U>
    where
        T: 'static,
        U: Clone,
        F: FnOnce(T) -> Need<U> + 'static,
    {
        Need::new(move || f(self.force()).force())
    }
}

impl<T> Clone for Need<T> {
    fn clone(&self) -> Self {
        Need {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Need<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            State::Pending(_) | State::Running => write!(f, "#<Need: pending>"),
            State::Realized(value) => write!(f, "#<Need: {:?}>", value),
        }
    }
}
