//! Singly linked sequence store over a slab arena.
//!
//! Nodes live in a [`slab::Slab`], which owns every value and recycles the
//! slots of removed nodes through its free list. Each node names its
//! successor with a [`Link`]; the store tracks only the head link and the
//! length.
//!
//! # Invariants
//!
//! - `len == 0` exactly when `head` is [`Link::NONE`].
//! - Following `next` from `head` visits `len` nodes and then reaches
//!   [`Link::NONE`]. There are no cycles.
//! - Every occupied arena slot is reachable from `head`.
//!
//! Positional operations validate their index before any link is touched,
//! so a rejected call leaves the store exactly as it was.
//!
//! # Example
//!
//! ```
//! use strand_collections::SequenceStore;
//!
//! let mut store = SequenceStore::new();
//! for value in [1, 3, 2, 3, 4, 3, 5] {
//!     store.append(value);
//! }
//!
//! assert_eq!(store.find(&3), Some(1));
//! assert_eq!(store.find_all(&3), vec![1, 3, 5]);
//! assert_eq!(store.count(&3), 3);
//! assert_eq!(store.to_string(), "1 -> 3 -> 2 -> 3 -> 4 -> 3 -> 5");
//!
//! store.reverse();
//! assert_eq!(store.to_vec(), vec![5, 3, 4, 3, 2, 3, 1]);
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use slab::Slab;
use tracing::{debug, trace};

use crate::{Link, OutOfRange};

/// A node in the chain: one value and the link to its successor.
///
/// Nodes are owned by the store's arena. Callers only see them through
/// [`SequenceStore::node`] when inspecting the chain.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    next: Link,
}

impl<T> Node<T> {
    #[inline]
    fn new(value: T, next: Link) -> Self {
        Self { value, next }
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the link to the successor, [`Link::NONE`] for the last node.
    #[inline]
    pub fn next(&self) -> Link {
        self.next
    }
}

/// An ordered, singly linked sequence of values.
///
/// Head operations are O(1). Positional and value-based operations walk the
/// chain from the head and are O(index) or O(n).
///
/// # Example
///
/// ```
/// use strand_collections::SequenceStore;
///
/// let mut store: SequenceStore<&str> = SequenceStore::new();
/// store.append("b");
/// store.prepend("a");
/// store.insert(2, "c").unwrap();
///
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.get(1), Ok(&"b"));
/// assert!(store.insert(5, "z").is_err());
/// ```
pub struct SequenceStore<T> {
    nodes: Slab<Node<T>>,
    head: Link,
    len: usize,
}

impl<T> Default for SequenceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceStore<T> {
    /// Creates an empty store. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: Link::NONE,
            len: 0,
        }
    }

    /// Creates an empty store whose arena holds `capacity` nodes before
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Link::NONE,
            len: 0,
        }
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves arena room for at least `additional` more nodes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Releases unused arena capacity where possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Returns the number of values in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the store holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the link to the first node, [`Link::NONE`] if empty.
    #[inline]
    pub fn head(&self) -> Link {
        self.head
    }

    /// Returns the node behind `link`, or `None` for the sentinel or a
    /// vacant slot.
    #[inline]
    pub fn node(&self, link: Link) -> Option<&Node<T>> {
        self.nodes.get(link.slot()?)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Adds a value after the last node.
    ///
    /// O(n): walks the chain to find the tail.
    pub fn append(&mut self, value: T) {
        let tail = self.tail();
        self.link_after(tail, value);
    }

    /// Adds a value before the first node. O(1).
    #[inline]
    pub fn prepend(&mut self, value: T) {
        self.link_after(Link::NONE, value);
    }

    /// Inserts a value so that it ends up at `index`.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index > len()`. The store is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        let index = self.validate("insert", index, self.len + 1)?;

        let prev = match index.checked_sub(1) {
            Some(before) => Link::from_slot(self.locate("insert", before)?.1),
            None => Link::NONE,
        };
        self.link_after(prev, value);
        Ok(())
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the first node whose value equals `value`.
    ///
    /// Returns `true` if a node was removed. Absence is not an error.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev = Link::NONE;
        let mut current = self.head;

        while let Some(slot) = current.slot() {
            let node = &self.nodes[slot];
            if node.value == *value {
                self.unlink(prev, slot);
                return true;
            }
            prev = current;
            current = node.next;
        }

        false
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`, which includes every index
    /// of an empty store. The store is unchanged.
    pub fn delete_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        let (prev, slot) = self.locate("delete_at", index)?;
        Ok(self.unlink(prev, slot))
    }

    /// Removes and returns the first value. O(1).
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        let slot = self.head.slot()?;
        Some(self.unlink(Link::NONE, slot))
    }

    /// Removes every value and resets the store to empty.
    ///
    /// Arena capacity is kept for reuse.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing sequence store");
        self.nodes.clear();
        self.head = Link::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        let (_, slot) = self.locate("get", index)?;
        Ok(&self.nodes[slot].value)
    }

    /// Returns a mutable reference to the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let (_, slot) = self.locate("get_mut", index)?;
        Ok(&mut self.nodes[slot].value)
    }

    /// Returns a reference to the first value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.node(self.head).map(Node::value)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the index of the first value equal to `value`, or `None`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns the indices of every value equal to `value`, ascending.
    pub fn find_all(&self, value: &T) -> Vec<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .enumerate()
            .filter(|(_, v)| *v == value)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns `true` if some value equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Returns how many values equal `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|v| *v == value).count()
    }

    /// Copies the values into a new `Vec`, head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Reverses the chain in place. O(n) time, O(1) extra space.
    ///
    /// Each node's `next` is flipped to point at its predecessor; the former
    /// tail becomes the head. No values move in the arena.
    pub fn reverse(&mut self) {
        trace!(len = self.len, "reversing sequence store");

        let mut prev = Link::NONE;
        let mut current = self.head;

        while let Some(slot) = current.slot() {
            let next = mem::replace(&mut self.nodes[slot].next, prev);
            prev = current;
            current = next;
        }

        self.head = prev;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over the values, head to tail.
    ///
    /// Each call starts a fresh traversal from the current head.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Internal link surgery
    // ========================================================================

    /// Returns the successor of `prev`, treating `Link::NONE` as "before head".
    #[inline]
    fn next_of(&self, prev: Link) -> Link {
        match prev.slot() {
            Some(slot) => self.nodes[slot].next,
            None => self.head,
        }
    }

    /// Points `prev` (or the head, for `Link::NONE`) at `link`.
    #[inline]
    fn set_next(&mut self, prev: Link, link: Link) {
        match prev.slot() {
            Some(slot) => self.nodes[slot].next = link,
            None => self.head = link,
        }
    }

    /// Allocates a node holding `value` right after `prev`.
    fn link_after(&mut self, prev: Link, value: T) -> Link {
        let next = self.next_of(prev);
        let link = Link::from_slot(self.nodes.insert(Node::new(value, next)));
        self.set_next(prev, link);
        self.len += 1;
        link
    }

    /// Detaches the node at `slot` (successor of `prev`) and frees its slot.
    fn unlink(&mut self, prev: Link, slot: usize) -> T {
        let node = self.nodes.remove(slot);
        self.set_next(prev, node.next);
        self.len -= 1;
        node.value
    }

    /// Returns the link to the last node, `Link::NONE` if empty.
    fn tail(&self) -> Link {
        let mut tail = Link::NONE;
        let mut current = self.head;
        while let Some(slot) = current.slot() {
            tail = current;
            current = self.nodes[slot].next;
        }
        tail
    }

    /// Finds the node at `index` together with its predecessor link.
    fn locate(&self, op: &'static str, index: usize) -> Result<(Link, usize), OutOfRange> {
        let index = self.validate(op, index, self.len)?;

        // index < len, so the walk never leaves the chain
        let mut prev = Link::NONE;
        let mut current = self.head;
        for _ in 0..index {
            prev = current;
            current = self.nodes[current.raw()].next;
        }

        debug_assert!(current.is_some(), "chain shorter than len");
        Ok((prev, current.raw()))
    }

    /// Checks `index < end`, logging the rejection.
    #[inline]
    fn validate(&self, op: &'static str, index: usize, end: usize) -> Result<usize, OutOfRange> {
        OutOfRange::check(index, 0..end).inspect_err(|err| {
            debug!(op, index = err.index, len = self.len, "rejected out-of-range index");
        })
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: Clone> Clone for SequenceStore<T> {
    /// Clones into a freshly packed arena.
    fn clone(&self) -> Self {
        let mut store = Self::with_capacity(self.len);
        store.extend(self.iter().cloned());
        store
    }
}

impl<T: PartialEq> PartialEq for SequenceStore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SequenceStore<T> {}

impl<T: fmt::Debug> fmt::Debug for SequenceStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `[]` when empty, otherwise the values joined by `" -> "`.
///
/// ```
/// use strand_collections::SequenceStore;
///
/// let store: SequenceStore<u8> = [1, 2, 3].into_iter().collect();
/// assert_eq!(store.to_string(), "1 -> 2 -> 3");
/// assert_eq!(SequenceStore::<u8>::new().to_string(), "[]");
/// ```
impl<T: fmt::Display> fmt::Display for SequenceStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }

        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for SequenceStore<T> {
    /// Appends each value in order. Walks to the tail once.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for value in iter {
            tail = self.link_after(tail, value);
        }
    }
}

impl<T> FromIterator<T> for SequenceStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut store = Self::with_capacity(iter.size_hint().0);
        store.extend(iter);
        store
    }
}

impl<'a, T> IntoIterator for &'a SequenceStore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SequenceStore<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { store: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the values, head to tail.
///
/// Holds a shared borrow of the store, so the chain cannot change while the
/// iterator is alive.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    current: Link,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.current.slot()?];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that pops values from the front.
pub struct IntoIter<T> {
    store: SequenceStore<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.store.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.store.len(), Some(self.store.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}


#[cfg(test)]
mod bench_sequence {
    use super::*;
    use hdrhistogram::Histogram;
    use std::hint::black_box;
    use std::time::Instant;

    const WARMUP: usize = 1_000;
    const ITERATIONS: usize = 10_000;
    const LEN: u64 = 256;

    fn print_histogram(name: &str, hist: &Histogram<u64>) {
        println!(
            "{:16} p50: {:6} ns | p99: {:6} ns | p999: {:7} ns | min: {:6} | max: {:7}",
            name,
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.99),
            hist.value_at_quantile(0.999),
            hist.min(),
            hist.max(),
        );
    }

    fn filled() -> SequenceStore<u64> {
        (0..LEN).collect()
    }

    fn record<F: FnMut()>(name: &str, mut op: F) {
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for _ in 0..WARMUP {
            op();
        }

        for _ in 0..ITERATIONS {
            let start = Instant::now();
            op();
            hist.record(start.elapsed().as_nanos() as u64).unwrap();
        }

        print_histogram(name, &hist);
    }

    #[test]
    #[ignore]
    fn bench_prepend_pop() {
        let mut store = filled();
        record("prepend+pop", || {
            store.prepend(black_box(7));
            black_box(store.pop_front());
        });
    }

    #[test]
    #[ignore]
    fn bench_append_delete_at_tail() {
        let mut store = filled();
        record("append+delete_at", || {
            store.append(black_box(7));
            black_box(store.delete_at(LEN as usize).ok());
        });
    }

    #[test]
    #[ignore]
    fn bench_find_middle() {
        let store = filled();
        record("find(mid)", || {
            black_box(store.find(&black_box(LEN / 2)));
        });
    }

    #[test]
    #[ignore]
    fn bench_reverse() {
        let mut store = filled();
        record("reverse", || {
            store.reverse();
            black_box(store.head());
        });
    }

    #[test]
    #[ignore]
    fn bench_all() {
        println!("\n=== SequenceStore latency ({LEN} values) ===");
        println!(
            "Run with: cargo test --release -p strand-collections bench_sequence::bench_all -- --ignored --nocapture\n"
        );

        bench_prepend_pop();
        bench_append_delete_at_tail();
        bench_find_middle();
        bench_reverse();
    }
}
