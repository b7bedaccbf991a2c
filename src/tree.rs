//! The interfaces shared by every tree in the crate.
//!
//! A tree implementation only supplies a handful of navigation primitives; everything which can be computed from them (`height`, `depth`, `is_leaf` and so on, as well as the traversals in the [`traversal`] module) is provided once for all trees.
//!
//! [`traversal`]: ../traversal/index.html " "

use crate::{Position, Result};

/// Tree-like data structures addressed through [`Position`]s.
///
/// Every method receiving a position validates it and fails with [`Error::InvalidPosition`] if it was not made by this tree instance or if its node has been deleted.
///
/// [`Position`]: ../struct.Position.html " "
/// [`Error::InvalidPosition`]: ../enum.Error.html#variant.InvalidPosition " "
pub trait Tree {
    /// The payload stored in every node.
    type Element;
    /// The iterator over the positions of a node's children, in order.
    type Children<'a>: Iterator<Item = Position>
    where
        Self: 'a;

    /// Returns the number of nodes in the tree.
    fn len(&self) -> usize;
    /// Returns the position of the root node, or `None` if the tree is empty.
    fn root(&self) -> Option<Position>;
    /// Returns the position of the parent of `p`, or `None` if `p` is the root.
    fn parent(&self, p: Position) -> Result<Option<Position>>;
    /// Returns an iterator over the positions of the children of `p`.
    ///
    /// The iterator borrows the tree, so it can be requested again at any time to restart the sequence.
    fn children(&self, p: Position) -> Result<Self::Children<'_>>;
    /// Returns the number of children of `p`.
    fn num_children(&self, p: Position) -> Result<usize>;
    /// Returns a reference to the element stored at `p`.
    fn element(&self, p: Position) -> Result<&Self::Element>;

    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns `true` if `p` is the root of the tree, `false` otherwise.
    #[inline]
    fn is_root(&self, p: Position) -> Result<bool> {
        self.parent(p).map(|parent| parent.is_none())
    }
    /// Returns `true` if `p` has no children, `false` otherwise.
    #[inline]
    fn is_leaf(&self, p: Position) -> Result<bool> {
        self.num_children(p).map(|n| n == 0)
    }
    /// Returns the height of the subtree rooted at `p`: zero for a leaf, otherwise one more than the tallest child subtree.
    fn height(&self, p: Position) -> Result<usize> {
        let mut height = 0;
        for child in self.children(p)? {
            height = height.max(1 + self.height(child)?);
        }
        Ok(height)
    }
    /// Returns the number of edges between `p` and the root.
    fn depth(&self, p: Position) -> Result<usize> {
        match self.parent(p)? {
            Some(parent) => Ok(1 + self.depth(parent)?),
            None => Ok(0),
        }
    }
}

/// Trees in which every node has at most a left and a right child.
pub trait BinaryTree: Tree {
    /// Returns the position of the left child of `p`, if any.
    fn left(&self, p: Position) -> Result<Option<Position>>;
    /// Returns the position of the right child of `p`, if any.
    fn right(&self, p: Position) -> Result<Option<Position>>;

    /// Returns the position of the other child of the parent of `p`, or `None` if `p` is the root or an only child.
    fn sibling(&self, p: Position) -> Result<Option<Position>> {
        let parent = match self.parent(p)? {
            Some(parent) => parent,
            None => return Ok(None),
        };
        if self.left(parent)? == Some(p) {
            self.right(parent)
        } else {
            self.left(parent)
        }
    }
}
