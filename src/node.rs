//! Tree cells of a leftist heap
//!
//! Each [`Node`] exclusively owns its two children through [`Link`]s, so a
//! tree is a plain `Box` hierarchy with no sharing and no parent pointers.
//!
//! Only the right spine of a leftist tree is guaranteed to be short. The left
//! spine can hold every node (pushing an ascending sequence into a max-heap
//! builds exactly that), so the whole-tree walks here ([`teardown`],
//! [`clone_tree`], [`walk`]) use an explicit stack instead of recursion.

use crate::rank::{checked_increment, Rank, LEAF_RANK};

/// An owned, possibly absent subtree
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// Null-path length, always `rank(right) + 1`
    pub(crate) rank: Rank,
}

impl<T> Node<T> {
    /// A single-node tree
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            rank: LEAF_RANK,
        })
    }

    /// Re-establishes the leftist property and the rank after `right` changed
    #[inline]
    pub(crate) fn restore_leftist(&mut self) {
        if rank(&self.left) < rank(&self.right) {
            std::mem::swap(&mut self.left, &mut self.right);
        }
        self.rank = checked_increment(rank(&self.right));
    }

    /// Splits the node into its value and both subtrees
    #[inline]
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Link<T>, Link<T>) {
        let Node {
            value, left, right, ..
        } = *self;
        (value, left, right)
    }
}

/// Rank of a subtree; zero when absent
#[inline]
pub(crate) fn rank<T>(link: &Link<T>) -> Rank {
    link.as_ref().map_or(0, |node| node.rank)
}

/// Drops every node in `link` without recursing
pub(crate) fn teardown<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        // `node` drops here with no children attached
    }
}

/// Finished subtrees of an in-progress clone
///
/// Dropped during unwinding when `T::clone` panics; each subtree goes through
/// [`teardown`] so a deep left spine cannot overflow the stack.
struct Built<T>(Vec<Box<Node<T>>>);

impl<T> Drop for Built<T> {
    fn drop(&mut self) {
        for subtree in self.0.drain(..) {
            teardown(Some(subtree));
        }
    }
}

enum CloneStep<'a, T> {
    Enter(&'a Node<T>),
    Assemble(&'a Node<T>),
}

/// Deep-copies a tree: fresh nodes, same values, same ranks
///
/// If `T::clone` panics, the partially built copy is dropped and the source is
/// untouched.
pub(crate) fn clone_tree<T: Clone>(link: &Link<T>) -> Link<T> {
    let root = link.as_deref()?;

    let mut todo = vec![CloneStep::Enter(root)];
    let mut built = Built(Vec::new());

    while let Some(step) = todo.pop() {
        match step {
            CloneStep::Enter(node) => {
                // Children are entered after `Assemble` is queued, so both are
                // built (left first) by the time it runs.
                todo.push(CloneStep::Assemble(node));
                if let Some(right) = node.right.as_deref() {
                    todo.push(CloneStep::Enter(right));
                }
                if let Some(left) = node.left.as_deref() {
                    todo.push(CloneStep::Enter(left));
                }
            }
            CloneStep::Assemble(node) => {
                // Clone before taking the children out of `built`, which owns
                // them if this panics
                let value = node.value.clone();
                let right = if node.right.is_some() {
                    built.0.pop()
                } else {
                    None
                };
                let left = if node.left.is_some() {
                    built.0.pop()
                } else {
                    None
                };
                built.0.push(Box::new(Node {
                    value,
                    left,
                    right,
                    rank: node.rank,
                }));
            }
        }
    }

    debug_assert_eq!(built.0.len(), 1);
    built.0.pop()
}

/// Visits every node paired with its parent, depth first, without recursing
///
/// Stops at the first `Err` the visitor returns.
pub(crate) fn walk<'a, T, E>(
    link: &'a Link<T>,
    mut visit: impl FnMut(&'a Node<T>, Option<&'a Node<T>>) -> Result<(), E>,
) -> Result<(), E> {
    let mut stack: Vec<(&'a Node<T>, Option<&'a Node<T>>)> = Vec::new();
    stack.extend(link.as_deref().map(|root| (root, None)));

    while let Some((node, parent)) = stack.pop() {
        visit(node, parent)?;
        stack.extend(node.right.as_deref().map(|child| (child, Some(node))));
        stack.extend(node.left.as_deref().map(|child| (child, Some(node))));
    }
    Ok(())
}
