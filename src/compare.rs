//! Stock comparators
//!
//! | Comparator | Order | Can fail |
//! |------------|-------|----------|
//! | [`Natural`] | `a < b` via [`Ord`], max-heap | no |
//! | [`Reversed`] | `b < a` via [`Ord`], min-heap | no |
//! | [`FnLess`] | any `Fn(&T, &T) -> bool` | no |
//! | [`TryFnLess`] | any `Fn(&T, &T) -> Result<bool, E>` | yes, with `E` |
//!
//! # Example
//!
//! ```rust
//! use rust_leftist_heap::compare::{Reversed, TryFnLess};
//! use rust_leftist_heap::LeftistHeap;
//!
//! let mut min_first = LeftistHeap::with_comparator(Reversed);
//! min_first.push(3).unwrap();
//! min_first.push(1).unwrap();
//! assert_eq!(min_first.top(), Ok(&1));
//!
//! let picky = TryFnLess::<_, &str>::new(|a: &i32, b: &i32| {
//!     if *a == 13 || *b == 13 {
//!         Err("unlucky")
//!     } else {
//!         Ok(a < b)
//!     }
//! });
//! let mut heap = LeftistHeap::with_comparator(picky);
//! heap.push(1).unwrap();
//! assert_eq!(heap.push(13), Err("unlucky"));
//! assert_eq!(heap.len(), 1);
//! ```

use crate::traits::Compare;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// Ascending order from [`Ord`]; the queue pops the largest element first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    type Error = Infallible;

    #[inline]
    fn less(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a < b)
    }
}

/// Descending order from [`Ord`]; the queue pops the smallest element first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reversed;

impl<T: Ord + ?Sized> Compare<T> for Reversed {
    type Error = Infallible;

    #[inline]
    fn less(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(b < a)
    }
}

/// An infallible "less than" closure
#[derive(Clone, Copy, Default)]
pub struct FnLess<F> {
    f: F,
}

impl<F> FnLess<F> {
    /// Wraps `f`, which must answer whether its first argument precedes its second
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnLess<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLess").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Compare<T> for FnLess<F>
where
    F: Fn(&T, &T) -> bool,
{
    type Error = Infallible;

    #[inline]
    fn less(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok((self.f)(a, b))
    }
}

/// A fallible "less than" closure
///
/// An `Err` from the closure aborts whichever queue operation asked for the
/// comparison, and is returned from that operation as is.
pub struct TryFnLess<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> TryFnLess<F, E> {
    /// Wraps `f`, which must answer whether its first argument precedes its second
    pub fn new(f: F) -> Self {
        Self {
            f,
            _error: PhantomData,
        }
    }
}

impl<F: Clone, E> Clone for TryFnLess<F, E> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone())
    }
}

impl<F: Default, E> Default for TryFnLess<F, E> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F, E> fmt::Debug for TryFnLess<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFnLess").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F, E> Compare<T> for TryFnLess<F, E>
where
    F: Fn(&T, &T) -> Result<bool, E>,
{
    type Error = E;

    #[inline]
    fn less(&self, a: &T, b: &T) -> Result<bool, E> {
        (self.f)(a, b)
    }
}
