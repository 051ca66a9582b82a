//! Leftist Heap implementation
//!
//! A leftist heap is a heap-ordered binary tree in which every node's left
//! subtree has a null-path length ([rank](crate::rank)) at least as large as
//! its right subtree's. That keeps the right spine logarithmic, and every
//! operation is a meld that only walks right spines:
//!
//! | Operation | Complexity | Comparator calls |
//! |-----------|------------|------------------|
//! | `top`     | O(1)       | 0 |
//! | `push`    | O(log n)   | at most `rank(root)` |
//! | `pop`     | O(log n)   | at most `rank(left) + rank(right)` of the old root |
//! | `merge`   | O(log n + log m) | at most `rank(self) + rank(other)` |
//! | `clone`   | O(n)       | 0 |
//!
//! # Failure atomicity
//!
//! The comparator may fail (see [`Compare`]). Every mutating operation finishes
//! all of its comparisons before it changes anything, so when `push`, `pop` or
//! `merge` returns an error, or a panic unwinds out of the comparator, every
//! queue involved holds exactly what it held before the call.
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heap::LeftistHeap;
//!
//! let mut heap = LeftistHeap::new();
//! for value in [5, 3, 8, 1] {
//!     heap.push(value).unwrap();
//! }
//! assert_eq!(heap.top(), Ok(&8));
//!
//! let mut other = LeftistHeap::new();
//! other.push(10).unwrap();
//! heap.merge(&mut other).unwrap();
//! assert!(other.is_empty());
//!
//! assert_eq!(heap.pop(), Ok(10));
//! assert_eq!(heap.pop(), Ok(8));
//! assert_eq!(heap.len(), 3);
//! ```

use crate::compare::Natural;
use crate::meld::MeldPlan;
use crate::node::{self, rank, Link, Node};
use crate::traits::{Compare, EmptyQueue, PopError, ValidationError};
use log::{debug, trace};
use std::fmt;

/// A mergeable priority queue backed by a leftist heap
///
/// The element that no other element is [less](Compare::less) than sits on
/// top. With the default [`Natural`] comparator that is the largest element,
/// as in `std::collections::BinaryHeap`. Elements that compare equal come
/// out in no particular order.
pub struct LeftistHeap<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> LeftistHeap<T, Natural> {
    /// Creates an empty max-heap
    ///
    /// Use [`with_comparator`](Self::with_comparator) or `Default` for other
    /// orderings.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C: Default> Default for LeftistHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> LeftistHeap<T, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the comparator that orders this queue
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the top element
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueue`] if the queue has no elements.
    pub fn top(&self) -> Result<&T, EmptyQueue> {
        self.peek().ok_or(EmptyQueue)
    }

    /// Returns the top element, or `None` if the queue is empty
    pub fn peek(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.value)
    }

    /// Drops every element
    pub fn clear(&mut self) {
        node::teardown(self.root.take());
        self.len = 0;
    }

    /// Checks rank consistency, the leftist property and the element count,
    /// without consulting the comparator
    fn check_shape<E>(&self) -> Result<(), ValidationError<E>> {
        let mut reachable = 0usize;
        node::walk(&self.root, |node, _| {
            reachable += 1;
            let (left, right) = (rank(&node.left), rank(&node.right));
            if left < right {
                return Err(ValidationError::NotLeftist { left, right });
            }
            let expected = right.wrapping_add(1);
            if node.rank != expected {
                return Err(ValidationError::RankMismatch {
                    stored: node.rank,
                    expected,
                });
            }
            Ok(())
        })?;

        if reachable != self.len {
            return Err(ValidationError::CountMismatch {
                recorded: self.len,
                reachable,
            });
        }
        Ok(())
    }

    #[cfg(feature = "verify-invariants")]
    fn verify_after(&self, op: &'static str) {
        if let Err(violation) = self.check_shape::<std::convert::Infallible>() {
            panic!("leftist heap invariant broken after {}: {}", op, violation);
        }
    }

    #[cfg(not(feature = "verify-invariants"))]
    #[inline(always)]
    fn verify_after(&self, _op: &'static str) {}
}

impl<T, C: Compare<T>> LeftistHeap<T, C> {
    /// Adds an element to the queue
    ///
    /// # Errors
    ///
    /// Returns the comparator's error unchanged if a comparison fails. The
    /// queue is then exactly as it was and `value` has been dropped.
    pub fn push(&mut self, value: T) -> Result<(), C::Error> {
        let leaf = Node::leaf(value);
        let plan = match MeldPlan::new(&self.cmp, self.root.as_deref(), Some(&*leaf)) {
            Ok(plan) => plan,
            Err(e) => {
                debug!("comparator failed during push, {} elements left as they were", self.len);
                return Err(e);
            }
        };
        trace!("push melded after {} comparisons", plan.depth());

        self.root = plan.apply(self.root.take(), Some(leaf));
        self.len += 1;
        self.verify_after("push");
        Ok(())
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    ///
    /// Returns [`PopError::Empty`] if there is nothing to pop, and
    /// [`PopError::Compare`] if a comparison fails while the root's two
    /// subtrees are melded. Either way the queue is left as it was.
    pub fn pop(&mut self) -> Result<T, PopError<C::Error>> {
        let plan = match self.root.as_deref() {
            Some(root) => MeldPlan::new(&self.cmp, root.left.as_deref(), root.right.as_deref())
                .map_err(|e| {
                    debug!("comparator failed during pop, {} elements left as they were", self.len);
                    PopError::Compare(e)
                })?,
            None => return Err(PopError::Empty),
        };
        // The plan above was made from this root
        let root = self.root.take().expect("non-empty heap must have root");
        trace!("pop melded after {} comparisons", plan.depth());

        let (value, left, right) = root.into_parts();
        self.root = plan.apply(left, right);
        self.len -= 1;
        self.verify_after("pop");
        Ok(value)
    }

    /// Moves every element of `other` into this queue
    ///
    /// On success `other` is left empty. Ordering follows this queue's
    /// comparator.
    ///
    /// # Errors
    ///
    /// Returns the comparator's error unchanged if a comparison fails. Both
    /// queues are then exactly as they were; in particular `other` keeps all
    /// of its elements.
    pub fn merge(&mut self, other: &mut Self) -> Result<(), C::Error> {
        let plan = match MeldPlan::new(&self.cmp, self.root.as_deref(), other.root.as_deref()) {
            Ok(plan) => plan,
            Err(e) => {
                debug!(
                    "comparator failed merging {} elements into {}, both queues left as they were",
                    other.len, self.len
                );
                return Err(e);
            }
        };
        debug!(
            "merging {} elements into {} after {} comparisons",
            other.len,
            self.len,
            plan.depth()
        );

        self.root = plan.apply(self.root.take(), other.root.take());
        self.len += other.len;
        other.len = 0;
        self.verify_after("merge");
        Ok(())
    }

    /// Checks every heap invariant
    ///
    /// Verifies, for every node, that the left child's rank is at least the
    /// right child's, that the rank is one more than the right child's, and
    /// that no child precedes its parent; and that [`len`](Self::len) matches
    /// the number of nodes. Runs in O(n).
    ///
    /// # Errors
    ///
    /// Returns the first violation found, or [`ValidationError::Compare`] if
    /// the comparator fails.
    pub fn validate(&self) -> Result<(), ValidationError<C::Error>> {
        self.check_shape::<C::Error>()?;
        node::walk(&self.root, |node, parent| match parent {
            Some(parent) => match self.cmp.less(&parent.value, &node.value) {
                Ok(false) => Ok(()),
                Ok(true) => Err(ValidationError::HeapOrder),
                Err(e) => Err(ValidationError::Compare(e)),
            },
            None => Ok(()),
        })
    }
}

impl<T: Clone, C: Clone> Clone for LeftistHeap<T, C> {
    fn clone(&self) -> Self {
        // Comparator first: a panic after the tree is built would drop it recursively
        let cmp = self.cmp.clone();
        Self {
            root: node::clone_tree(&self.root),
            len: self.len,
            cmp,
        }
    }

    /// Replaces this queue's contents with a deep copy of `source`
    ///
    /// The copy is built completely before anything here is replaced, so a
    /// panicking `T::clone` leaves this queue untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        std::mem::swap(self, &mut copy);
        // `copy` now owns the old tree and drops it
    }
}

impl<T, C> Drop for LeftistHeap<T, C> {
    fn drop(&mut self) {
        node::teardown(self.root.take());
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftistHeap")
            .field("len", &self.len)
            .field("top", &self.peek())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Reversed, TryFnLess};
    use std::cell::Cell;

    fn heap_of(values: &[i32]) -> LeftistHeap<i32> {
        let mut heap = LeftistHeap::new();
        for &v in values {
            heap.push(v).unwrap();
        }
        heap
    }

    fn drain<C: Compare<i32>>(heap: &mut LeftistHeap<i32, C>) -> Vec<i32>
    where
        C::Error: fmt::Debug,
    {
        let mut out = Vec::new();
        while !heap.is_empty() {
            out.push(heap.pop().unwrap());
        }
        out
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = heap_of(&[5, 3, 8, 1]);
        assert_eq!(heap.top(), Ok(&8));
        assert_eq!(heap.len(), 4);

        assert_eq!(heap.pop(), Ok(8));
        assert_eq!(heap.top(), Ok(&5));
        assert_eq!(heap.len(), 3);
        heap.validate().unwrap();
    }

    #[test]
    fn test_merge_moves_everything() {
        let mut heap = heap_of(&[5, 3, 8, 1]);
        heap.pop().unwrap();
        let mut other = heap_of(&[10, 2]);

        heap.merge(&mut other).unwrap();
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.top(), Ok(&10));
        assert_eq!(other.len(), 0);
        assert!(other.is_empty());
        assert_eq!(other.top(), Err(EmptyQueue));
        heap.validate().unwrap();
        other.validate().unwrap();
    }

    #[test]
    fn test_pop_until_empty() {
        let mut heap = heap_of(&[4, 9, 1, 9, 0, 7]);
        assert_eq!(drain(&mut heap), vec![9, 9, 7, 4, 1, 0]);
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.top(), Err(EmptyQueue));
        assert_eq!(heap.pop(), Err(PopError::Empty));
    }

    #[test]
    fn test_empty_queue() {
        let mut heap: LeftistHeap<i32> = LeftistHeap::default();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.top(), Err(EmptyQueue));
        assert_eq!(heap.pop(), Err(PopError::Empty));
        heap.validate().unwrap();
    }

    #[test]
    fn test_min_heap_comparator() {
        let mut heap = LeftistHeap::with_comparator(Reversed);
        for v in [5, 3, 8, 1] {
            heap.push(v).unwrap();
        }
        assert_eq!(*heap.comparator(), Reversed);
        assert_eq!(drain(&mut heap), vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_comparator_is_shared_with_clones() {
        let by_abs = TryFnLess::<_, ()>::new(|a: &i32, b: &i32| Ok(a.abs() < b.abs()));
        let mut heap = LeftistHeap::with_comparator(by_abs);
        for v in [-7, 3, 5] {
            heap.push(v).unwrap();
        }
        assert_eq!(heap.comparator().less(&-7, &5), Ok(false));

        let copy = heap.clone();
        assert_eq!(copy.comparator().less(&3, &-4), Ok(true));
        assert_eq!(copy.top(), Ok(&-7));
    }

    #[test]
    fn test_pop_single_element() {
        let mut heap = heap_of(&[42]);
        assert_eq!(heap.pop(), Ok(42));
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), Err(PopError::Empty));
        heap.validate().unwrap();
    }

    #[test]
    fn test_ascending_and_descending_insertion() {
        let mut ascending = heap_of(&(0..1000).collect::<Vec<_>>());
        ascending.validate().unwrap();
        assert_eq!(drain(&mut ascending), (0..1000).rev().collect::<Vec<_>>());

        let mut descending = heap_of(&(0..1000).rev().collect::<Vec<_>>());
        descending.validate().unwrap();
        assert_eq!(drain(&mut descending), (0..1000).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = heap_of(&[3, 1, 4, 1, 5]);
        let mut copy = original.clone();
        copy.validate().unwrap();

        copy.push(9).unwrap();
        assert_eq!(original.top(), Ok(&5));
        assert_eq!(original.len(), 5);

        original.pop().unwrap();
        assert_eq!(copy.top(), Ok(&9));
        assert_eq!(copy.len(), 6);
        assert_eq!(drain(&mut copy), vec![9, 5, 4, 3, 1, 1]);
    }

    #[test]
    fn test_clone_from_replaces_contents() {
        let source = heap_of(&[2, 7]);
        let mut target = heap_of(&[100, 50, 25]);
        target.clone_from(&source);

        assert_eq!(target.len(), 2);
        assert_eq!(target.top(), Ok(&7));
        target.validate().unwrap();
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut heap = heap_of(&[1, 2, 3]);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        heap.push(4).unwrap();
        assert_eq!(heap.top(), Ok(&4));
    }

    #[test]
    fn test_failed_push_leaves_queue_unchanged() {
        let cmp = TryFnLess::<_, &str>::new(|a: &i32, b: &i32| {
            if *a < 0 || *b < 0 {
                Err("negative")
            } else {
                Ok(a < b)
            }
        });
        let mut heap = LeftistHeap::with_comparator(cmp);
        for v in [4, 2, 6] {
            heap.push(v).unwrap();
        }

        assert_eq!(heap.push(-1), Err("negative"));
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.top(), Ok(&6));
        heap.validate().unwrap();
        assert_eq!(drain(&mut heap), vec![6, 4, 2]);
    }

    #[test]
    fn test_comparator_calls_bounded_by_ranks() {
        let calls = Cell::new(0usize);
        let counting = TryFnLess::<_, ()>::new(|a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            Ok(a < b)
        });
        let mut heap = LeftistHeap::with_comparator(counting);
        for v in 0..1024 {
            let spine = usize::from(rank(&heap.root));
            calls.set(0);
            heap.push((v * 7919) % 1024).unwrap();
            assert!(calls.get() <= spine, "push took {} comparisons", calls.get());
        }
    }

    #[test]
    fn test_merge_with_empty_skips_comparator() {
        let calls = Cell::new(0usize);
        let counting = TryFnLess::<_, ()>::new(|a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            Ok(a < b)
        });
        let mut heap = LeftistHeap::with_comparator(counting.clone());
        let mut empty = LeftistHeap::with_comparator(counting);
        heap.push(1).unwrap();

        heap.merge(&mut empty).unwrap();
        empty.merge(&mut heap).unwrap();
        assert_eq!(calls.get(), 0);
        assert_eq!(empty.top(), Ok(&1));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_validate_catches_corruption() {
        let mut heap = heap_of(&[3, 2, 1]);
        if let Some(root) = heap.root.as_deref_mut() {
            root.rank = 7;
        }
        assert!(matches!(
            heap.validate(),
            Err(ValidationError::RankMismatch { stored: 7, .. })
        ));

        let mut heap = heap_of(&[3, 2, 1]);
        heap.len = 4;
        assert_eq!(
            heap.validate(),
            Err(ValidationError::CountMismatch {
                recorded: 4,
                reachable: 3
            })
        );

        let mut heap = heap_of(&[3, 2]);
        if let Some(root) = heap.root.as_deref_mut() {
            root.value = 0;
        }
        assert_eq!(heap.validate(), Err(ValidationError::HeapOrder));
    }

    #[test]
    fn test_debug_format() {
        let heap = heap_of(&[1, 2]);
        assert_eq!(format!("{:?}", heap), "LeftistHeap { len: 2, top: Some(2) }");
    }
}
