//! General trees, ones which don't impose any restrictions on the number of children a node can have.
//!
//! Children are kept in insertion order. Each node links to its first and last child and to its neighbouring siblings, so adding a child is constant-time and no per-node collection is ever reallocated.
//!
//! # Deletion
//! Deleting a node which has children does not delete them. Instead, the first child takes the place of the deleted node among its siblings (or becomes the new root), and the remaining children are appended, in order, to the children of the promoted node.
//!
//! # Example
//! ```rust
//! use positree::prelude::*;
//!
//! let mut tree = LinkedTree::new();
//! let root = tree.add_root("Electronics R'Us")?;
//! let rd = tree.add_child(root, "R&D")?;
//! let sales = tree.add_child(root, "Sales")?;
//! tree.add_child(sales, "Domestic")?;
//! tree.add_child(sales, "International")?;
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.children(root)?.collect::<Vec<_>>(), [rd, sales]);
//! assert_eq!(tree.height(root)?, 2);
//!
//! // "Domestic" takes over for "Sales", adopting "International"
//! tree.delete(sales)?;
//! assert_eq!(tree.preorder(root)?, [&"Electronics R'Us", &"R&D", &"Domestic", &"International"]);
//! # Ok::<(), positree::Error>(())
//! ```

use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use crate::{
    position::{self, ContainerId, Position},
    storage::{Arena, Key},
    traversal::Traversable,
    tree::Tree,
    util::dangling_link,
    Error,
    Result,
    StructuralError,
};

mod node;
#[cfg(test)]
mod tests;

use node::Node;

/// A tree of linked nodes with any number of ordered children each.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct LinkedTree<T> {
    id: ContainerId,
    storage: Arena<Node<T>>,
    root: Option<Key>,
}
impl<T> LinkedTree<T> {
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
        let key = self.storage.add(Node::detached(element));
        self.root = Some(key);
        Ok(self.make_position(key))
    }
    /// Appends a new last child holding `element` to `p`, returning its position.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this tree.
    pub fn add_child(&mut self, p: Position, element: T) -> Result<Position> {
        let parent = self.validate(p)?;
        let key = self.storage.add(Node::detached(element));
        self.link_last(parent, key);
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
    /// Deletes the node at `p` and returns its element.
    ///
    /// If the node has children, the first one takes its place and adopts the rest. See the [module-level documentation] for more.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this tree.
    ///
    /// [module-level documentation]: index.html " "
    pub fn delete(&mut self, p: Position) -> Result<T> {
        let key = self.validate(p)?;
        let promoted = self.node(key).first_child;
        match promoted {
            Some(promoted) => self.promote(key, promoted),
            None => self.unlink(key),
        }
        let node = self
            .storage
            .remove(key)
            .unwrap_or_else(|| dangling_link(key));
        tracing::trace!(
            container = ?self.id,
            size = self.len(),
            promoted = promoted.is_some(),
            "deleted tree node"
        );
        Ok(node.element)
    }
    /// Moves the nodes of `subtree` into the tree, its root becoming the only child of the leaf `p`.
    ///
    /// `subtree` is left empty. Its nodes receive new positions in this tree, so positions previously taken from it stop resolving.
    ///
    /// # Errors
    /// Fails if `p` is invalid, or with [`StructuralError::NotALeaf`] if `p` has children. Nothing is moved in that case.
    ///
    /// [`StructuralError::NotALeaf`]: ../enum.StructuralError.html#variant.NotALeaf " "
    pub fn attach(&mut self, p: Position, subtree: &mut Self) -> Result<()> {
        let key = self.validate(p)?;
        if self.node(key).num_children != 0 {
            return Err(Error::Structural(StructuralError::NotALeaf));
        }
        if let Some(donor_root) = subtree.root.take() {
            let moved = subtree.len();
            self.adopt(subtree, donor_root, key);
            tracing::debug!(container = ?self.id, size = self.len(), moved, "attached subtree");
        }
        Ok(())
    }
    /// Removes every node. All positions handed out so far become invalid.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.root = None;
    }

    /// Puts `promoted`, the first child of `key`, in place of `key` and hands it the remaining children.
    fn promote(&mut self, key: Key, promoted: Key) {
        let node = self.node(key);
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        let (rest_first, rest_last, rest_len) = (
            self.node(promoted).next_sibling,
            node.last_child,
            node.num_children - 1,
        );

        let promoted_node = self.node_mut(promoted);
        promoted_node.parent = parent;
        promoted_node.prev_sibling = prev;
        promoted_node.next_sibling = next;
        match prev {
            Some(prev) => self.node_mut(prev).next_sibling = Some(promoted),
            None => {
                if let Some(parent) = parent {
                    self.node_mut(parent).first_child = Some(promoted);
                }
            }
        }
        match next {
            Some(next) => self.node_mut(next).prev_sibling = Some(promoted),
            None => {
                if let Some(parent) = parent {
                    self.node_mut(parent).last_child = Some(promoted);
                }
            }
        }
        if parent.is_none() {
            self.root = Some(promoted);
        }

        if let (Some(rest_first), Some(rest_last)) = (rest_first, rest_last) {
            let mut cursor = Some(rest_first);
            while let Some(child) = cursor {
                let child_node = self.node_mut(child);
                child_node.parent = Some(promoted);
                cursor = child_node.next_sibling;
            }
            let old_last = self.node(promoted).last_child;
            self.node_mut(rest_first).prev_sibling = old_last;
            match old_last {
                Some(old_last) => self.node_mut(old_last).next_sibling = Some(rest_first),
                None => self.node_mut(promoted).first_child = Some(rest_first),
            }
            let promoted_node = self.node_mut(promoted);
            promoted_node.last_child = Some(rest_last);
            promoted_node.num_children += rest_len;
        }
        tracing::trace!(container = ?self.id, adopted = rest_len, "promoted first child");
    }
    /// Detaches `key` from its parent's children, or from the root if it has no parent. Its own children are not touched.
    fn unlink(&mut self, key: Key) {
        let node = self.node(key);
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        let parent = match parent {
            Some(parent) => parent,
            None => {
                self.root = None;
                return;
            }
        };
        match prev {
            Some(prev) => self.node_mut(prev).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }
        self.node_mut(parent).num_children -= 1;
    }
    /// Links the detached node `child` as the last child of `parent`.
    fn link_last(&mut self, parent: Key, child: Key) {
        let old_last = self.node(parent).last_child;
        let child_node = self.node_mut(child);
        child_node.parent = Some(parent);
        child_node.prev_sibling = old_last;
        child_node.next_sibling = None;
        match old_last {
            Some(old_last) => self.node_mut(old_last).next_sibling = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }
        let parent_node = self.node_mut(parent);
        parent_node.last_child = Some(child);
        parent_node.num_children += 1;
    }
    /// Moves the subtree at `donor_key` out of `donor` and appends it to the children of `parent`, returning the new key of its root.
    fn adopt(&mut self, donor: &mut Self, donor_key: Key, parent: Key) -> Key {
        let node = donor
            .storage
            .remove(donor_key)
            .unwrap_or_else(|| dangling_link(donor_key));
        let key = self.storage.add(Node::detached(node.element));
        self.link_last(parent, key);
        let mut cursor = node.first_child;
        while let Some(child) = cursor {
            // Read the link before the child leaves the donor
            cursor = donor.node(child).next_sibling;
            self.adopt(donor, child, key);
        }
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
    fn validated_node(&self, p: Position) -> Result<&Node<T>> {
        self.validate(p).map(|key| self.node(key))
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
}
impl<T> Tree for LinkedTree<T> {
    type Element = T;
    type Children<'a> = Children<'a, T> where Self: 'a;

    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len()
    }
    #[inline]
    fn root(&self) -> Option<Position> {
        LinkedTree::root(self)
    }
    fn parent(&self, p: Position) -> Result<Option<Position>> {
        let node = self.validated_node(p)?;
        Ok(node.parent.map(|key| self.make_position(key)))
    }
    fn children(&self, p: Position) -> Result<Children<'_, T>> {
        let node = self.validated_node(p)?;
        Ok(Children {
            tree: self,
            next: node.first_child,
            remaining: node.num_children,
        })
    }
    fn num_children(&self, p: Position) -> Result<usize> {
        self.validated_node(p).map(|node| node.num_children)
    }
    fn element(&self, p: Position) -> Result<&T> {
        self.validated_node(p).map(|node| &node.element)
    }
}
impl<T> Default for LinkedTree<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Clone> Clone for LinkedTree<T> {
    /// Clones the tree. The clone is a separate container: positions of the original are foreign to it.
    fn clone(&self) -> Self {
        Self {
            id: ContainerId::next(),
            storage: self.storage.clone(),
            root: self.root,
        }
    }
}
impl<T: Debug> Debug for LinkedTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let preorder = match self.root() {
            Some(root) => self.preorder(root).map_err(|_| fmt::Error)?,
            None => Vec::new(),
        };
        f.debug_struct("LinkedTree")
            .field("id", &self.id)
            .field("len", &self.len())
            .field("preorder", &preorder)
            .finish()
    }
}

/// An iterator over the positions of the children of a node in a [`LinkedTree`], in order.
///
/// [`LinkedTree`]: struct.LinkedTree.html " "
pub struct Children<'a, T> {
    tree: &'a LinkedTree<T>,
    next: Option<Key>,
    remaining: usize,
}
impl<T> Iterator for Children<'_, T> {
    type Item = Position;
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        self.next = self.tree.node(key).next_sibling;
        self.remaining -= 1;
        Some(self.tree.make_position(key))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> ExactSizeIterator for Children<'_, T> {}
impl<T> FusedIterator for Children<'_, T> {}
impl<T> Clone for Children<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}
impl<T> Debug for Children<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
