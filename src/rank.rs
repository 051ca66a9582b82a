//! Null-path length ("rank") of leftist heap nodes.
//!
//! The rank of a node is the length of the shortest path from it to a missing
//! child: an absent subtree has rank 0 and a node has `rank(right) + 1`.
//! Because the leftist property keeps `rank(left) >= rank(right)` everywhere,
//! a node of rank `r` roots a subtree with at least `2ʳ - 1` nodes, so
//!
//! ```text
//! rank(root) <= log₂(len + 1)
//! ```
//!
//! and the right spine that every meld walks is never longer than that.
//!
//! # Why u8?
//!
//! A rank above 64 would need more than 2⁶⁴ nodes, more than any address space
//! can hold, so `u8` has room to spare. Using it instead of `usize` lets the
//! rank share a padding slot with small element types.
//!
//! [`checked_increment`] panics if the limit is ever exceeded, which can only
//! mean a corrupted tree.

/// Type alias for a node's null-path length.
pub type Rank = u8;

/// Largest rank a node can carry.
pub const MAX_RANK: Rank = u8::MAX;

/// Rank of a node whose right child is absent.
pub const LEAF_RANK: Rank = 1;

/// Increment a rank, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. A valid tree would need more than 2²⁵⁵ nodes
/// to get there.
///
/// # Example
///
/// ```rust
/// use rust_leftist_heap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: a leftist tree of rank 255 would need more than 2²⁵⁵ nodes",
    )
}

/// Upper bound on the rank of a tree holding `len` nodes, `⌊log₂(len + 1)⌋`.
///
/// # Example
///
/// ```rust
/// use rust_leftist_heap::rank::max_rank_for;
///
/// assert_eq!(max_rank_for(0), 0);
/// assert_eq!(max_rank_for(1), 1);
/// assert_eq!(max_rank_for(7), 3);
/// assert_eq!(max_rank_for(8), 3);
/// ```
#[inline]
pub fn max_rank_for(len: usize) -> Rank {
    // len + 1 overflows only at usize::MAX, where it would be exactly 2^BITS
    let bits = usize::BITS - len.leading_zeros();
    let full = len.checked_add(1).map_or(true, |n| n.is_power_of_two());
    if full {
        bits as Rank
    } else {
        bits.saturating_sub(1) as Rank
    }
}
