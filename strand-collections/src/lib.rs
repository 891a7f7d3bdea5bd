//! Singly linked sequence store backed by a slab arena.
//!
//! Classic linked lists chain heap-allocated nodes through owning pointers.
//! This crate keeps the same shape but moves the nodes into an arena:
//!
//! ```text
//! Slab<Node<T>>   - owns every node, recycles freed slots
//! SequenceStore   - head link + length, walks `next` links by slot number
//! ```
//!
//! Benefits:
//! - **No dangling links**: a link is a slot number, never a raw pointer
//! - **Cheap relinking**: `reverse` and removals rewrite integers in place
//! - **Slot reuse**: removed nodes return their slot to the arena free list
//! - **Pre-sizing**: `with_capacity` avoids reallocation on the insert path
//!
//! # Quick Start
//!
//! ```
//! use strand_collections::SequenceStore;
//!
//! let mut store = SequenceStore::with_capacity(16);
//! store.append(2);
//! store.append(3);
//! store.prepend(1);
//!
//! assert_eq!(store.to_vec(), vec![1, 2, 3]);
//! assert_eq!(store.to_string(), "1 -> 2 -> 3");
//! ```
//!
//! # Positional Errors
//!
//! `insert`, `delete_at`, `get` and `get_mut` return [`OutOfRange`] for an
//! index outside their interval. Nothing is modified on failure.
//!
//! ```
//! use strand_collections::{OutOfRange, SequenceStore};
//!
//! let mut store: SequenceStore<u32> = (0..4).collect();
//!
//! assert!(store.insert(4, 99).is_ok()); // len is a valid insert position
//! assert_eq!(
//!     store.insert(6, 99),
//!     Err(OutOfRange { index: 6, valid: 0..6 })
//! );
//! assert_eq!(store.len(), 5);
//! ```
//!
//! # Value Lookups
//!
//! Lookups by value report absence without an error: `find` returns `None`,
//! `find_all` an empty `Vec`, `contains` and `delete` return `false`.
//!
//! # Concurrency
//!
//! The store is a plain single-owner value. Sharing it across threads needs
//! an external lock around every call; the borrow checker already rules out
//! mutating it while an [`Iter`] is alive.

#![warn(missing_docs)]

pub mod error;
pub mod link;
pub mod sequence;

pub use error::OutOfRange;
pub use link::Link;
pub use sequence::{IntoIter, Iter, Node, SequenceStore};
