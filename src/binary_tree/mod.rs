//! Linked trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Each node knows its parent and has a left and a right child slot, either of which may be empty. Nodes are addressed through [`Position`]s, which stay valid until the node they name is deleted.
//!
//! # Deletion
//! Removing a node from the middle of a binary tree is only well-defined if there is at most one subtree below it to take its place, so [`delete`] refuses to remove a node with two children. Otherwise, the only child (if any) moves up into the slot the deleted node occupied; deleting the root with one child makes that child the new root.
//!
//! # Example
//! ```rust
//! use positree::prelude::*;
//!
//! let mut tree = LinkedBinaryTree::new();
//! let root = tree.add_root("Hello")?;
//! let world = tree.add_left(root, "World")?;
//! tree.add_right(root, "Rust")?;
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.parent(world)?, Some(root));
//! assert_eq!(tree.inorder(root)?, [&"World", &"Hello", &"Rust"]);
//!
//! // The root has two children, so it cannot be deleted...
//! assert!(tree.delete(root).is_err());
//! // ...but a leaf can.
//! assert_eq!(tree.delete(world)?, "World");
//! assert_eq!(tree.num_children(root)?, 1);
//! # Ok::<(), positree::Error>(())
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`Position`]: ../struct.Position.html " "
//! [`delete`]: struct.LinkedBinaryTree.html#method.delete " "

use core::fmt::{self, Debug, Formatter};
use arrayvec::ArrayVec;
use crate::{
    position::{self, ContainerId, Position},
    storage::{Arena, Key},
    traversal::Traversable,
    tree::{self, Tree},
    util::dangling_link,
    Error,
    Result,
    StructuralError,
};

mod node;

use node::Node;

/// A binary tree of linked nodes.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct LinkedBinaryTree<T> {
    id: ContainerId,
    storage: Arena<Node<T>>,
    root: Option<Key>,
}
impl<T> LinkedBinaryTree<T> {
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Creates an empty tree with room for `capacity` nodes before reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ContainerId::next(),
            storage: Arena::with_capacity(capacity),
            root: None,
        }
    }
    /// Returns the id of the tree, shared by every position it hands out.
    #[inline(always)]
    pub fn id(&self) -> ContainerId {
        self.id
    }
    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
    /// Returns the position of the root, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<Position> {
        self.root.map(|key| self.make_position(key))
    }
    /// Returns a *mutable* reference to the element at `p`.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this tree.
    pub fn element_mut(&mut self, p: Position) -> Result<&mut T> {
        let key = self.validate(p)?;
        Ok(&mut self.node_mut(key).element)
    }

    /// Places `element` at the root of an empty tree, returning its position.
    ///
    /// # Errors
    /// Fails with [`StructuralError::RootExists`] if the tree is not empty.
    ///
    /// [`StructuralError::RootExists`]: ../enum.StructuralError.html#variant.RootExists " "
    pub fn add_root(&mut self, element: T) -> Result<Position> {
        if self.root.is_some() {
            return Err(Error::Structural(StructuralError::RootExists));
        }
        let key = self.storage.add(Node::leaf(element, None));
        self.root = Some(key);
        Ok(self.make_position(key))
    }
    /// Creates a left child of `p` holding `element`, returning its position.
    ///
    /// # Errors
    /// Fails if `p` is invalid, or with [`StructuralError::LeftChildExists`] if `p` already has a left child.
    ///
    /// [`StructuralError::LeftChildExists`]: ../enum.StructuralError.html#variant.LeftChildExists " "
    pub fn add_left(&mut self, p: Position, element: T) -> Result<Position> {
        let parent = self.validate(p)?;
        if self.node(parent).left.is_some() {
            return Err(Error::Structural(StructuralError::LeftChildExists));
        }
        let key = self.storage.add(Node::leaf(element, Some(parent)));
        self.node_mut(parent).left = Some(key);
        Ok(self.make_position(key))
    }
    /// Creates a right child of `p` holding `element`, returning its position.
    ///
    /// # Errors
    /// Fails if `p` is invalid, or with [`StructuralError::RightChildExists`] if `p` already has a right child.
    ///
    /// [`StructuralError::RightChildExists`]: ../enum.StructuralError.html#variant.RightChildExists " "
    pub fn add_right(&mut self, p: Position, element: T) -> Result<Position> {
        let parent = self.validate(p)?;
        if self.node(parent).right.is_some() {
            return Err(Error::Structural(StructuralError::RightChildExists));
        }
        let key = self.storage.add(Node::leaf(element, Some(parent)));
        self.node_mut(parent).right = Some(key);
        Ok(self.make_position(key))
    }
    /// Replaces the element at `p` with `element`, returning the old one.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this tree.
    pub fn replace(&mut self, p: Position, element: T) -> Result<T> {
        let slot = self.element_mut(p)?;
        Ok(core::mem::replace(slot, element))
    }
    /// Deletes the node at `p`, moving its only child (if any) into its place, and returns its element.
    ///
    /// # Errors
    /// Fails if `p` is invalid, or with [`StructuralError::TwoChildren`] if `p` has two children. The tree is left untouched in both cases.
    ///
    /// [`StructuralError::TwoChildren`]: ../enum.StructuralError.html#variant.TwoChildren " "
    pub fn delete(&mut self, p: Position) -> Result<T> {
        let key = self.validate(p)?;
        let node = self.node(key);
        if node.num_children() == 2 {
            return Err(Error::Structural(StructuralError::TwoChildren));
        }
        let (parent, child) = (node.parent, node.left.or(node.right));
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        match parent {
            Some(parent) => *self.node_mut(parent).slot_of(key) = child,
            None => self.root = child,
        }
        let node = self
            .storage
            .remove(key)
            .unwrap_or_else(|| dangling_link(key));
        tracing::trace!(
            container = ?self.id,
            size = self.len(),
            promoted = child.is_some(),
            "deleted binary tree node"
        );
        Ok(node.element)
    }
    /// Moves the nodes of `left` and `right` into the tree as the left and right subtrees of the leaf `p`.
    ///
    /// Both donor trees are left empty. Their nodes receive new positions in this tree, so positions previously taken from the donors stop resolving.
    ///
    /// # Errors
    /// Fails if `p` is invalid, or with [`StructuralError::NotALeaf`] if `p` has children. Nothing is moved in that case.
    ///
    /// [`StructuralError::NotALeaf`]: ../enum.StructuralError.html#variant.NotALeaf " "
    pub fn attach(&mut self, p: Position, left: &mut Self, right: &mut Self) -> Result<()> {
        let key = self.validate(p)?;
        if self.node(key).num_children() != 0 {
            return Err(Error::Structural(StructuralError::NotALeaf));
        }
        let moved = left.len() + right.len();
        if let Some(donor_root) = left.root.take() {
            let adopted = self.adopt(left, donor_root, key);
            self.node_mut(key).left = Some(adopted);
        }
        if let Some(donor_root) = right.root.take() {
            let adopted = self.adopt(right, donor_root, key);
            self.node_mut(key).right = Some(adopted);
        }
        if moved != 0 {
            tracing::debug!(container = ?self.id, size = self.len(), moved, "attached subtrees");
        }
        Ok(())
    }
    /// Removes every node. All positions handed out so far become invalid.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.root = None;
    }

    /// Moves the subtree at `donor_key` out of `donor` and links it under `parent`, returning the new key of its root.
    fn adopt(&mut self, donor: &mut Self, donor_key: Key, parent: Key) -> Key {
        let node = donor
            .storage
            .remove(donor_key)
            .unwrap_or_else(|| dangling_link(donor_key));
        let key = self.storage.add(Node::leaf(node.element, Some(parent)));
        if let Some(left) = node.left {
            let adopted = self.adopt(donor, left, key);
            self.node_mut(key).left = Some(adopted);
        }
        if let Some(right) = node.right {
            let adopted = self.adopt(donor, right, key);
            self.node_mut(key).right = Some(adopted);
        }
        tracing::trace!(container = ?self.id, from = ?donor.id, "adopted node");
        key
    }
    #[inline]
    fn validate(&self, p: Position) -> Result<Key> {
        position::validate(self.id, &self.storage, p)
    }
    #[inline(always)]
    fn make_position(&self, key: Key) -> Position {
        Position::new(self.id, key)
    }
    #[inline]
    #[track_caller]
    fn node(&self, key: Key) -> &Node<T> {
        self.storage.get(key).unwrap_or_else(|| dangling_link(key))
    }
    #[inline]
    #[track_caller]
    fn node_mut(&mut self, key: Key) -> &mut Node<T> {
        self.storage.get_mut(key).unwrap_or_else(|| dangling_link(key))
    }
    #[inline]
    fn validated_node(&self, p: Position) -> Result<&Node<T>> {
        self.validate(p).map(|key| self.node(key))
    }
}
impl<T> Tree for LinkedBinaryTree<T> {
    type Element = T;
    type Children<'a> = arrayvec::IntoIter<[Position; 2]> where Self: 'a;

    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len()
    }
    #[inline]
    fn root(&self) -> Option<Position> {
        LinkedBinaryTree::root(self)
    }
    fn parent(&self, p: Position) -> Result<Option<Position>> {
        let node = self.validated_node(p)?;
        Ok(node.parent.map(|key| self.make_position(key)))
    }
    fn children(&self, p: Position) -> Result<Self::Children<'_>> {
        let node = self.validated_node(p)?;
        let mut children = ArrayVec::<[Position; 2]>::new();
        for key in node.left.into_iter().chain(node.right) {
            children.push(self.make_position(key));
        }
        Ok(children.into_iter())
    }
    fn num_children(&self, p: Position) -> Result<usize> {
        self.validated_node(p).map(Node::num_children)
    }
    fn element(&self, p: Position) -> Result<&T> {
        self.validated_node(p).map(|node| &node.element)
    }
}
impl<T> tree::BinaryTree for LinkedBinaryTree<T> {
    fn left(&self, p: Position) -> Result<Option<Position>> {
        let node = self.validated_node(p)?;
        Ok(node.left.map(|key| self.make_position(key)))
    }
    fn right(&self, p: Position) -> Result<Option<Position>> {
        let node = self.validated_node(p)?;
        Ok(node.right.map(|key| self.make_position(key)))
    }
}
impl<T> Default for LinkedBinaryTree<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Clone> Clone for LinkedBinaryTree<T> {
    /// Clones the tree. The clone is a separate container: positions of the original are foreign to it.
    fn clone(&self) -> Self {
        Self {
            id: ContainerId::next(),
            storage: self.storage.clone(),
            root: self.root,
        }
    }
}
impl<T: Debug> Debug for LinkedBinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let preorder = match self.root() {
            Some(root) => self.preorder(root).map_err(|_| fmt::Error)?,
            None => Vec::new(),
        };
        f.debug_struct("LinkedBinaryTree")
            .field("id", &self.id)
            .field("len", &self.len())
            .field("preorder", &preorder)
            .finish()
    }
}
