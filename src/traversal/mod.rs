//! Everything related to traversing trees in general.
//!
//! The module is home to two extension traits, implemented automatically for every tree:
//! - [`Traversable`], for every [`Tree`]: preorder, postorder and level-order traversals
//! - [`InorderTraversable`], for every [`BinaryTree`]: inorder traversal, which only makes sense when a node has a distinct left and right side
//!
//! Each traversal starts at a given position and covers the subtree rooted there. Every traversal comes in two flavors: one producing the elements and one producing their positions, for algorithms which need to navigate further from the nodes they visit.
//!
//! ```rust
//! use positree::prelude::*;
//!
//! let mut tree = LinkedBinaryTree::new();
//! let root = tree.add_root('b')?;
//! tree.add_left(root, 'a')?;
//! tree.add_right(root, 'c')?;
//! assert_eq!(tree.preorder(root)?, [&'b', &'a', &'c']);
//! assert_eq!(tree.inorder(root)?, [&'a', &'b', &'c']);
//! assert_eq!(tree.postorder(root)?, [&'a', &'c', &'b']);
//! # Ok::<(), positree::Error>(())
//! ```
//!
//! [`Traversable`]: trait.Traversable.html " "
//! [`InorderTraversable`]: trait.InorderTraversable.html " "
//! [`Tree`]: ../tree/trait.Tree.html " "
//! [`BinaryTree`]: ../tree/trait.BinaryTree.html " "

use std::collections::VecDeque;
use crate::{
    tree::{BinaryTree, Tree},
    Position,
    Result,
};

/// Traversals available for every [`Tree`].
///
/// [`Tree`]: ../tree/trait.Tree.html " "
pub trait Traversable: Tree {
    /// Returns the positions of the subtree rooted at `p`, each node visited before its children.
    fn preorder_positions(&self, p: Position) -> Result<Vec<Position>> {
        let mut out = Vec::new();
        preorder_into(self, p, &mut out)?;
        Ok(out)
    }
    /// Returns the positions of the subtree rooted at `p`, each node visited after its children.
    fn postorder_positions(&self, p: Position) -> Result<Vec<Position>> {
        let mut out = Vec::new();
        postorder_into(self, p, &mut out)?;
        Ok(out)
    }
    /// Returns the positions of the subtree rooted at `p` breadth-first: level by level, each level in child order.
    fn level_order_positions(&self, p: Position) -> Result<Vec<Position>> {
        // Rejects an invalid starting position before anything is queued
        self.element(p)?;
        let mut out = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(p);
        while let Some(p) = queue.pop_front() {
            out.push(p);
            queue.extend(self.children(p)?);
        }
        Ok(out)
    }
    /// Returns the elements of the subtree rooted at `p` in preorder.
    fn preorder(&self, p: Position) -> Result<Vec<&Self::Element>> {
        elements_at(self, self.preorder_positions(p)?)
    }
    /// Returns the elements of the subtree rooted at `p` in postorder.
    fn postorder(&self, p: Position) -> Result<Vec<&Self::Element>> {
        elements_at(self, self.postorder_positions(p)?)
    }
    /// Returns the elements of the subtree rooted at `p` in level order.
    fn level_order(&self, p: Position) -> Result<Vec<&Self::Element>> {
        elements_at(self, self.level_order_positions(p)?)
    }
}
impl<T: Tree + ?Sized> Traversable for T {}

/// The inorder traversal, available for every [`BinaryTree`].
///
/// [`BinaryTree`]: ../tree/trait.BinaryTree.html " "
pub trait InorderTraversable: BinaryTree {
    /// Returns the positions of the subtree rooted at `p`: the left subtree, then the node itself, then the right subtree.
    fn inorder_positions(&self, p: Position) -> Result<Vec<Position>> {
        let mut out = Vec::new();
        inorder_into(self, p, &mut out)?;
        Ok(out)
    }
    /// Returns the elements of the subtree rooted at `p` in inorder.
    fn inorder(&self, p: Position) -> Result<Vec<&Self::Element>> {
        elements_at(self, self.inorder_positions(p)?)
    }
}
impl<T: BinaryTree + ?Sized> InorderTraversable for T {}

fn preorder_into<T: Tree + ?Sized>(tree: &T, p: Position, out: &mut Vec<Position>) -> Result<()> {
    let children = tree.children(p)?;
    out.push(p);
    for child in children {
        preorder_into(tree, child, out)?;
    }
    Ok(())
}
fn postorder_into<T: Tree + ?Sized>(tree: &T, p: Position, out: &mut Vec<Position>) -> Result<()> {
    for child in tree.children(p)? {
        postorder_into(tree, child, out)?;
    }
    out.push(p);
    Ok(())
}
fn inorder_into<T: BinaryTree + ?Sized>(tree: &T, p: Position, out: &mut Vec<Position>) -> Result<()> {
    let right = tree.right(p)?;
    if let Some(left) = tree.left(p)? {
        inorder_into(tree, left, out)?;
    }
    out.push(p);
    if let Some(right) = right {
        inorder_into(tree, right, out)?;
    }
    Ok(())
}
fn elements_at<T: Tree + ?Sized>(tree: &T, positions: Vec<Position>) -> Result<Vec<&T::Element>> {
    positions.into_iter().map(|p| tree.element(p)).collect()
}

#[cfg(all(test, feature = "general_tree"))]
mod tests {
    use crate::{general_tree::LinkedTree, prelude::*};

    #[test]
    fn traversals_of_a_general_tree() {
        let mut tree = LinkedTree::new();
        let a = tree.add_root('a').unwrap();
        let b = tree.add_child(a, 'b').unwrap();
        let c = tree.add_child(a, 'c').unwrap();
        tree.add_child(b, 'd').unwrap();
        tree.add_child(b, 'e').unwrap();
        tree.add_child(c, 'f').unwrap();
        assert_eq!(tree.preorder(a).unwrap(), [&'a', &'b', &'d', &'e', &'c', &'f']);
        assert_eq!(tree.postorder(a).unwrap(), [&'d', &'e', &'b', &'f', &'c', &'a']);
        assert_eq!(tree.level_order(a).unwrap(), [&'a', &'b', &'c', &'d', &'e', &'f']);
        assert_eq!(tree.preorder(b).unwrap(), [&'b', &'d', &'e']);
    }

    #[test]
    fn traversal_of_a_stale_position_fails() {
        let mut tree = LinkedTree::new();
        let a = tree.add_root(1).unwrap();
        let b = tree.add_child(a, 2).unwrap();
        tree.delete(b).unwrap();
        assert!(tree.preorder(b).is_err());
        assert!(tree.level_order(b).is_err());
        assert_eq!(tree.postorder(a).unwrap(), [&1]);
    }
}
