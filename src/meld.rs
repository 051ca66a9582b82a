//! Meld: merging two leftist trees into one
//!
//! The textbook meld compares the two roots, keeps the winner as the new
//! root, melds the winner's right subtree with the loser, swaps the winner's
//! children if the right one ended up with the larger rank, and recomputes
//! the rank. Only right spines are ever followed, so it takes
//! `O(rank(a) + rank(b)) = O(log |a| + log |b|)` steps.
//!
//! Here it runs in two phases so that a failing comparator can never leave a
//! half-melded tree behind:
//!
//! 1. [`MeldPlan::new`] walks both right spines through shared references,
//!    asking the comparator at each level which root wins and recording the
//!    answer. Nothing is written. A comparator error ends the walk and is
//!    returned as is; a comparator panic unwinds past untouched trees.
//! 2. [`MeldPlan::apply`] takes ownership of the same two trees and replays
//!    the recorded answers bottom-up. It never calls the comparator and
//!    cannot fail.
//!
//! The comparator sees exactly the pairs the one-pass algorithm would show
//! it, in the same order, and the resulting tree has the same shape.

use crate::node::{rank, Link, Node};
use crate::traits::Compare;
use smallvec::SmallVec;
use std::slice;

/// Comparator answers for one meld, outermost level first
///
/// `true` at a level means the second tree's root won. Sixty-four levels
/// cover two right spines of rank 32, which is past four billion elements per
/// side before anything spills to the heap.
pub(crate) struct MeldPlan {
    picks: SmallVec<[bool; 64]>,
}

impl MeldPlan {
    /// Decides a meld of `a` and `b` without touching either tree
    ///
    /// Calls the comparator once per level, and not at all when either tree
    /// is absent.
    pub(crate) fn new<T, C>(
        cmp: &C,
        a: Option<&Node<T>>,
        b: Option<&Node<T>>,
    ) -> Result<Self, C::Error>
    where
        C: Compare<T> + ?Sized,
    {
        let mut picks = SmallVec::new();
        let (mut a, mut b) = (a, b);

        while let (Some(x), Some(y)) = (a, b) {
            let b_wins = cmp.less(&x.value, &y.value)?;
            picks.push(b_wins);
            let (winner, loser) = if b_wins { (y, x) } else { (x, y) };
            a = winner.right.as_deref();
            b = Some(loser);
        }

        Ok(Self { picks })
    }

    /// Number of comparisons this meld needed
    pub(crate) fn depth(&self) -> usize {
        self.picks.len()
    }

    /// Melds `a` and `b`, which must be the trees the plan was made from
    pub(crate) fn apply<T>(self, a: Link<T>, b: Link<T>) -> Link<T> {
        debug_assert!(
            self.depth() <= usize::from(rank(&a)) + usize::from(rank(&b)),
            "meld plan is longer than both right spines"
        );
        let mut picks = self.picks.iter();
        let melded = splice(a, b, &mut picks);
        debug_assert!(picks.next().is_none(), "meld plan not fully replayed");
        melded
    }
}

fn splice<T>(a: Link<T>, b: Link<T>, picks: &mut slice::Iter<'_, bool>) -> Link<T> {
    match (a, b) {
        (None, rest) | (rest, None) => rest,
        (Some(mut a), Some(mut b)) => {
            let b_wins = picks.next().copied();
            debug_assert!(b_wins.is_some(), "meld plan ran out before the spines did");
            if b_wins == Some(true) {
                std::mem::swap(&mut a, &mut b);
            }
            a.right = splice(a.right.take(), Some(b), picks);
            a.restore_leftist();
            Some(a)
        }
    }
}
