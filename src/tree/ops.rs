//! The construction algebra: every composite node is built here, so the
//! structural invariants and the balance bound are enforced in one place.

use std::sync::Arc;

use super::balance::{is_balanced, rebalance};
use super::node::{Concat, Flat, Node, Reverse, Substring};

/// Leaves at or below this length are cheap enough to copy: slicing and
/// reversing them materializes a fresh `Flat` instead of hanging onto an
/// overlay, and adjacent short leaves get merged into one.
pub(crate) const MAX_LEAF_LEN: usize = 16;

/// Concatenations deeper than this are rebalanced even when the Fibonacci
/// bound still holds.
pub(crate) const MAX_ROPE_DEPTH: usize = 32;

/// Concatenates two subtrees.
///
/// Empty operands are elided, short flat-backed leaves are merged (directly
/// or into the right spine of `left`), and the result is rebalanced
/// whenever it grows past [`MAX_ROPE_DEPTH`] or fails the Fibonacci bound.
pub(crate) fn concat(left: &Arc<Node>, right: &Arc<Node>) -> Arc<Node> {
    if left.is_empty() {
        return Arc::clone(right);
    }
    if right.is_empty() {
        return Arc::clone(left);
    }

    if left.len() + right.len() <= MAX_LEAF_LEN {
        if let (Some(l), Some(r)) = (left.leaf_chars(), right.leaf_chars()) {
            return merge_leaves(l, r);
        }
    }

    // Right-spine compaction: gluing a short flat onto a concatenation
    // whose right child is itself a short flat merges the two leaves
    // instead of growing the spine one node per append.
    if let Node::Concat(c) = &**left {
        if let (Some(mid), Some(r)) =
            (c.right().leaf_chars(), right.leaf_chars())
        {
            if mid.len() + r.len() <= MAX_LEAF_LEN {
                let node = Node::Concat(Concat::new(
                    Arc::clone(c.left()),
                    merge_leaves(mid, r),
                ));
                return balanced(Arc::new(node));
            }
        }
    }

    let node =
        Node::Concat(Concat::new(Arc::clone(left), Arc::clone(right)));

    balanced(Arc::new(node))
}

/// Returns the `[start, end)` window of `node`.
///
/// Whole children are shared untouched, windows over flat storage become
/// `Substring` overlays (or fresh short `Flat`s), and windows into a
/// `Reverse` are taken on the inner leaf and re-wrapped.
pub(crate) fn subseq(node: &Arc<Node>, start: usize, end: usize) -> Arc<Node> {
    debug_assert!(start <= end && end <= node.len());

    if start == end {
        return Node::empty();
    }
    if start == 0 && end == node.len() {
        return Arc::clone(node);
    }

    match &**node {
        Node::Flat(flat) => overlay(flat.shared_buf(), start, end),

        Node::Substring(sub) => overlay(
            sub.shared_buf(),
            sub.offset() + start,
            sub.offset() + end,
        ),

        Node::Concat(c) => {
            let left_len = c.left().len();
            if end <= left_len {
                subseq(c.left(), start, end)
            } else if start >= left_len {
                subseq(c.right(), start - left_len, end - left_len)
            } else {
                concat(
                    &subseq(c.left(), start, left_len),
                    &subseq(c.right(), 0, end - left_len),
                )
            }
        },

        Node::Reverse(rev) => {
            let len = node.len();
            reverse(&subseq(rev.inner(), len - end, len - start))
        },
    }
}

/// Reverses `node` without copying anything longer than a short leaf.
///
/// A `Reverse` unwraps, a `Concat` swaps its reversed children, and a
/// flat-backed leaf either materializes reversed (when short) or gets a
/// `Reverse` overlay.
pub(crate) fn reverse(node: &Arc<Node>) -> Arc<Node> {
    match &**node {
        Node::Reverse(rev) => Arc::clone(rev.inner()),

        Node::Concat(c) => concat(&reverse(c.right()), &reverse(c.left())),

        Node::Flat(_) | Node::Substring(_) => {
            if node.len() <= MAX_LEAF_LEN {
                let Some(chars) = node.leaf_chars() else { unreachable!() };
                let buf: Vec<char> = chars.iter().rev().copied().collect();
                Arc::new(Node::Flat(Flat::from_vec(buf)))
            } else {
                Arc::new(Node::Reverse(Reverse::new(Arc::clone(node))))
            }
        },
    }
}

#[inline]
fn balanced(node: Arc<Node>) -> Arc<Node> {
    if node.depth() > MAX_ROPE_DEPTH || !is_balanced(&node) {
        rebalance(&node)
    } else {
        node
    }
}

#[inline]
fn merge_leaves(left: &[char], right: &[char]) -> Arc<Node> {
    let mut buf = Vec::with_capacity(left.len() + right.len());
    buf.extend_from_slice(left);
    buf.extend_from_slice(right);
    Arc::new(Node::Flat(Flat::from_vec(buf)))
}

#[inline]
fn overlay(buf: &Arc<[char]>, start: usize, end: usize) -> Arc<Node> {
    if end - start <= MAX_LEAF_LEN {
        Arc::new(Node::Flat(Flat::from_vec(buf[start..end].to_vec())))
    } else {
        Arc::new(Node::Substring(Substring::new(
            Arc::clone(buf),
            start,
            end - start,
        )))
    }
}
