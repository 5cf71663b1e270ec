// lazydata - Persistent lazy sequences and priority queues
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # lazydata
//!
//! A small family of persistent (immutable) sequence and priority-queue
//! structures on a shared lazy-evaluation substrate:
//!
//! - [`Need`] - a memoized deferred computation, the laziness primitive
//!   everything else builds on;
//! - [`ConsList`] - an eager persistent singly linked list;
//! - [`LazyList`] - its lazy counterpart, with `Need`-deferred tails;
//! - [`BankersQueue`] - an amortized O(1) FIFO queue combining a lazy front
//!   with an eager back;
//! - [`LeftistHeap`] - a mergeable min-priority queue;
//! - [`Chain`] and [`Cord`] - concatenation trees (ropes) for building long
//!   sequences and strings by O(1) concatenation, flattened without
//!   recursion.
//!
//! Every structure is a single-threaded value type: updates return a new
//! handle sharing unmodified substructure with the original, and a handle
//! once returned never changes observably. The only interior mutation
//! anywhere is `Need`'s at-most-once memoization.

pub mod bankers_queue;
pub mod chain;
pub mod cons_list;
pub mod cord;
pub mod error;
pub mod lazy_list;
pub mod leftist_heap;
pub mod need;

pub use bankers_queue::BankersQueue;
pub use chain::Chain;
pub use cons_list::{ConsList, ConsNode};
pub use cord::Cord;
pub use error::{Error, Result};
pub use lazy_list::{LazyList, Strict};
pub use leftist_heap::{HeapNode, LeftistHeap};
pub use need::Need;
