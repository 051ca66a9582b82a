//! Ordering trait and error types shared by the queue types
//!
//! This module provides:
//!
//! - [`Compare`]: the ordering predicate a queue is parameterised over. Unlike
//!   [`Ord`], a comparison may fail, and the queue guarantees that a failed
//!   comparison leaves it exactly as it was before the call.
//! - [`EmptyQueue`]: returned by `top`/`pop` on a queue with no elements.
//! - [`PopError`]: what `pop` returns, since it can fail either way.
//! - [`ValidationError`]: what an invariant check reports.

use crate::rank::Rank;
use std::error::Error;
use std::fmt;

/// A strict weak order over `T`, expressed as a fallible "less than"
///
/// `less(a, b)` answers whether `a` precedes `b`. The queue surfaces the
/// element that is not less than any other, so an ascending order (the
/// [`Natural`](crate::compare::Natural) comparator) gives a max-heap, matching
/// `std::collections::BinaryHeap`.
///
/// Returning `Err` is the comparator's way of aborting the operation in
/// progress. The error value is handed back to the caller untouched.
///
/// Implementations are assumed to be pure: the same inputs must always give
/// the same answer. A comparator that changes its mind between calls can
/// silently break the heap order.
///
/// # Example
///
/// ```rust
/// use rust_leftist_heap::traits::Compare;
///
/// struct ByLength;
///
/// impl Compare<str> for ByLength {
///     type Error = std::convert::Infallible;
///
///     fn less(&self, a: &str, b: &str) -> Result<bool, Self::Error> {
///         Ok(a.len() < b.len())
///     }
/// }
///
/// assert_eq!(ByLength.less("ab", "abc"), Ok(true));
/// ```
pub trait Compare<T: ?Sized> {
    /// The error a failed comparison produces
    type Error;

    /// Returns whether `a` precedes `b`
    fn less(&self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    type Error = C::Error;

    #[inline]
    fn less(&self, a: &T, b: &T) -> Result<bool, Self::Error> {
        (**self).less(a, b)
    }
}

/// The queue has no elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyQueue;

impl fmt::Display for EmptyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "priority queue is empty")
    }
}

impl Error for EmptyQueue {}

/// Error returned by `pop`
///
/// The queue is unchanged whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopError<E> {
    /// There was nothing to pop
    Empty,
    /// The comparator failed while the children of the root were being melded
    Compare(E),
}

impl<E> PopError<E> {
    /// Returns the comparator error, if that is what this is
    pub fn into_compare(self) -> Option<E> {
        match self {
            PopError::Empty => None,
            PopError::Compare(e) => Some(e),
        }
    }
}

impl<E> From<EmptyQueue> for PopError<E> {
    fn from(_: EmptyQueue) -> Self {
        PopError::Empty
    }
}

impl<E: fmt::Display> fmt::Display for PopError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopError::Empty => fmt::Display::fmt(&EmptyQueue, f),
            PopError::Compare(e) => write!(f, "comparator failed during pop: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for PopError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PopError::Empty => None,
            PopError::Compare(e) => Some(e),
        }
    }
}

/// A broken heap invariant, as found by `validate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError<E> {
    /// A node's stored rank is not one more than its right child's
    RankMismatch {
        /// Rank stored on the node
        stored: Rank,
        /// Rank implied by the right child
        expected: Rank,
    },
    /// A node's left child has a smaller rank than its right child
    NotLeftist {
        /// Rank of the left child
        left: Rank,
        /// Rank of the right child
        right: Rank,
    },
    /// A child precedes its parent under the comparator
    HeapOrder,
    /// The element count disagrees with the number of reachable nodes
    CountMismatch {
        /// Count held by the queue
        recorded: usize,
        /// Nodes actually reachable from the root
        reachable: usize,
    },
    /// The comparator failed while heap order was being checked
    Compare(E),
}

impl<E: fmt::Display> fmt::Display for ValidationError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RankMismatch { stored, expected } => {
                write!(f, "node rank is {} but its right child implies {}", stored, expected)
            }
            ValidationError::NotLeftist { left, right } => {
                write!(f, "left child rank {} is below right child rank {}", left, right)
            }
            ValidationError::HeapOrder => write!(f, "a child precedes its parent"),
            ValidationError::CountMismatch {
                recorded,
                reachable,
            } => write!(
                f,
                "queue records {} elements but {} nodes are reachable",
                recorded, reachable
            ),
            ValidationError::Compare(e) => write!(f, "comparator failed during validation: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for ValidationError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ValidationError::Compare(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "refused")
        }
    }

    impl Error for Refused {}

    #[test]
    fn test_pop_error_display() {
        assert_eq!(PopError::<Refused>::Empty.to_string(), "priority queue is empty");
        assert_eq!(
            PopError::Compare(Refused).to_string(),
            "comparator failed during pop: refused"
        );
    }

    #[test]
    fn test_pop_error_source() {
        assert!(PopError::<Refused>::Empty.source().is_none());
        let err = PopError::Compare(Refused);
        assert_eq!(err.source().map(|e| e.to_string()), Some("refused".into()));
        assert_eq!(err.into_compare(), Some(Refused));
    }

    #[test]
    fn test_empty_queue_converts() {
        let err: PopError<Refused> = EmptyQueue.into();
        assert_eq!(err, PopError::Empty);
    }
}
