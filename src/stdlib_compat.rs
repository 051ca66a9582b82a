//! Standard library compatibility layer
//!
//! Provides a drop-in replacement for `std::collections::BinaryHeap` for
//! orderings that cannot fail.
//!
//! [`LeftistHeap`] returns a `Result` from every operation that compares,
//! because its comparator is allowed to fail. When the comparator's error type
//! is [`Infallible`] those results carry no information, and [`StdHeap`]
//! unwraps them to give the familiar `push`/`peek`/`pop` API, plus an `append`
//! that runs in O(log n + log m) instead of `BinaryHeap`'s O(n + m).
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heap::stdlib_compat::StdHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: StdHeap<i32> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7)); // max-heap, like BinaryHeap
//! assert_eq!(heap.pop(), Some(7));
//!
//! let mut more: StdHeap<i32> = [9, 1].into_iter().collect();
//! heap.append(&mut more);
//! assert!(more.is_empty());
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 9]);
//! ```

use crate::compare::Natural;
use crate::leftist::LeftistHeap;
use crate::traits::{Compare, PopError};
use std::convert::Infallible;
use std::fmt;

#[inline]
fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// A drop-in replacement for `std::collections::BinaryHeap`
///
/// # Type Parameters
/// - `T`: The item type
/// - `C`: An ordering that cannot fail, [`Natural`] by default (max-heap)
pub struct StdHeap<T, C = Natural>
where
    C: Compare<T, Error = Infallible>,
{
    heap: LeftistHeap<T, C>,
}

impl<T, C> StdHeap<T, C>
where
    C: Compare<T, Error = Infallible> + Default,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: LeftistHeap::default(),
        }
    }
}

impl<T, C> StdHeap<T, C>
where
    C: Compare<T, Error = Infallible>,
{
    /// Creates a new empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: LeftistHeap::with_comparator(cmp),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        unwrap_infallible(self.heap.push(item))
    }

    /// Returns a reference to the greatest item without removing it
    ///
    /// "Greatest" is with respect to the comparator; with [`Natural`] this is
    /// exactly `BinaryHeap::peek`.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Removes and returns the greatest item
    pub fn pop(&mut self) -> Option<T> {
        match self.heap.pop() {
            Ok(item) => Some(item),
            Err(PopError::Empty) => None,
            Err(PopError::Compare(never)) => match never {},
        }
    }

    /// Moves all items of `other` into `self`, leaving `other` empty
    pub fn append(&mut self, other: &mut Self) {
        unwrap_infallible(self.heap.merge(&mut other.heap))
    }

    /// Drops all items
    pub fn clear(&mut self) {
        self.heap.clear()
    }

    /// Consumes the heap and returns its items in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted.reverse();
        sorted
    }

    /// Unwraps the underlying [`LeftistHeap`]
    pub fn into_inner(self) -> LeftistHeap<T, C> {
        self.heap
    }
}

impl<T, C> From<LeftistHeap<T, C>> for StdHeap<T, C>
where
    C: Compare<T, Error = Infallible>,
{
    fn from(heap: LeftistHeap<T, C>) -> Self {
        Self { heap }
    }
}

impl<T, C> Default for StdHeap<T, C>
where
    C: Compare<T, Error = Infallible> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C> Clone for StdHeap<T, C>
where
    C: Compare<T, Error = Infallible> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.heap.clone_from(&source.heap)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for StdHeap<T, C>
where
    C: Compare<T, Error = Infallible>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdHeap")
            .field("len", &self.len())
            .field("top", &self.peek())
            .finish()
    }
}

impl<T, C> Extend<T> for StdHeap<T, C>
where
    C: Compare<T, Error = Infallible>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C> FromIterator<T> for StdHeap<T, C>
where
    C: Compare<T, Error = Infallible> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{FnLess, Reversed};
    use std::collections::BinaryHeap;

    #[test]
    fn test_matches_binary_heap() {
        let values = [5, 1, 9, 3, 3, 7, 0, 12, -4];
        let mut ours: StdHeap<i32> = values.iter().copied().collect();
        let mut std_heap: BinaryHeap<i32> = values.iter().copied().collect();

        assert_eq!(ours.len(), std_heap.len());
        while let Some(expected) = std_heap.pop() {
            assert_eq!(ours.peek(), Some(&expected));
            assert_eq!(ours.pop(), Some(expected));
        }
        assert_eq!(ours.pop(), None);
        assert!(ours.is_empty());
    }

    #[test]
    fn test_into_sorted_vec_ascending() {
        let heap: StdHeap<i32> = [4, 2, 8, 6].into_iter().collect();
        assert_eq!(heap.into_sorted_vec(), vec![2, 4, 6, 8]);

        let min_heap: StdHeap<i32, Reversed> = [4, 2, 8, 6].into_iter().collect();
        assert_eq!(min_heap.into_sorted_vec(), vec![8, 6, 4, 2]);
    }

    #[test]
    fn test_append_empties_other() {
        let mut a: StdHeap<i32> = (0..10).collect();
        let mut b: StdHeap<i32> = (10..15).collect();
        a.append(&mut b);

        assert_eq!(a.len(), 15);
        assert!(b.is_empty());
        assert_eq!(a.peek(), Some(&14));
    }

    #[test]
    fn test_custom_closure_order() {
        let mut heap = StdHeap::with_comparator(FnLess::new(|a: &&str, b: &&str| a.len() < b.len()));
        heap.extend(["a", "abc", "ab"]);
        assert_eq!(heap.pop(), Some("abc"));
        assert_eq!(heap.pop(), Some("ab"));
        assert_eq!(heap.pop(), Some("a"));
    }

    #[test]
    fn test_round_trip_through_leftist_heap() {
        let heap: StdHeap<i32> = [1, 2, 3].into_iter().collect();
        let inner = heap.into_inner();
        assert_eq!(inner.top(), Ok(&3));

        let mut again = StdHeap::from(inner);
        again.clear();
        assert!(again.is_empty());
    }

    #[test]
    fn test_clone_and_debug() {
        let heap: StdHeap<i32> = [1, 2].into_iter().collect();
        let mut copy = heap.clone();
        copy.push(3);
        assert_eq!(heap.len(), 2);
        assert_eq!(format!("{:?}", copy), "StdHeap { len: 3, top: Some(3) }");
    }
}
