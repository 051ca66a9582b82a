//! Mergeable priority queues backed by leftist heaps
//!
//! This crate provides [`LeftistHeap`], a priority queue whose two queues can be
//! merged in logarithmic time, and whose ordering predicate is allowed to fail.
//!
//! # Features
//!
//! - **O(log n) push, pop and merge**: every operation is a meld of two
//!   leftist trees, which only walks their short right spines
//! - **Fallible comparators**: the ordering is a [`Compare`] implementation
//!   returning `Result<bool, E>`; a failed comparison aborts the operation and
//!   hands `E` back to the caller
//! - **Failure atomicity**: all comparisons of an operation happen before any
//!   node is touched, so a failed or panicking comparison leaves every queue
//!   involved exactly as it was
//! - **No deep recursion**: dropping and cloning use explicit stacks, so even
//!   a queue built from sorted input (one long left spine) is safe
//! - **`BinaryHeap` compatibility**: [`StdHeap`](stdlib_compat::StdHeap) wraps
//!   infallible orderings in the standard `push`/`peek`/`pop` API
//!
//! # Cargo features
//!
//! - `verify-invariants`: re-check rank consistency, the leftist property and
//!   the element count after every mutation, panicking on a violation
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heap::compare::TryFnLess;
//! use rust_leftist_heap::{LeftistHeap, PopError};
//!
//! // An ordering that refuses to compare NaN
//! let by_value = TryFnLess::<_, &str>::new(|a: &f64, b: &f64| {
//!     a.partial_cmp(b).map(|o| o.is_lt()).ok_or("NaN is unordered")
//! });
//!
//! let mut heap = LeftistHeap::with_comparator(by_value);
//! heap.push(2.5).unwrap();
//! heap.push(0.5).unwrap();
//!
//! assert_eq!(heap.push(f64::NAN), Err("NaN is unordered"));
//! assert_eq!(heap.len(), 2);
//!
//! assert_eq!(heap.pop(), Ok(2.5));
//! assert_eq!(heap.pop(), Ok(0.5));
//! assert_eq!(heap.pop(), Err(PopError::Empty));
//! ```

pub mod compare;
pub mod leftist;
mod meld;
mod node;
pub mod rank;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use leftist::LeftistHeap;
pub use traits::{Compare, EmptyQueue, PopError, ValidationError};
