//! A doubly linked list which hands out positions into itself.
//!
//! Unlike an index, a [`Position`] keeps referring to the same element no matter how many elements are inserted or removed around it, which makes the list a good foundation for structures that repeatedly reorder their contents (see the [`favorites`] and [`priority_queue`] modules).
//!
//! The list keeps two boundary nodes, a *header* before the first element and a *trailer* after the last one. Every insertion is then a splice between two existing nodes and never needs to special-case the ends.
//!
//! # Example
//! ```rust
//! use positree::PositionalList;
//!
//! let mut list = PositionalList::new();
//! let dsa = list.add_first("DSA");
//! list.add_first("Python");
//! list.add_last("Computer Science");
//! list.add_after(dsa, "Computation")?;
//! list.add_before(dsa, "C")?;
//! assert_eq!(
//!     list.iter().copied().collect::<Vec<_>>(),
//!     ["Python", "C", "DSA", "Computation", "Computer Science"],
//! );
//!
//! // Positions survive unrelated edits:
//! let last = list.last().unwrap();
//! list.delete(last)?;
//! assert_eq!(list.get(dsa)?, &"DSA");
//! // ...but not the deletion of their own node:
//! assert!(list.get(last).is_err());
//! # Ok::<(), positree::Error>(())
//! ```
//!
//! [`Position`]: ../struct.Position.html " "
//! [`favorites`]: ../favorites/index.html " "
//! [`priority_queue`]: ../priority_queue/index.html " "

use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use crate::{
    position::{self, ContainerId, Position},
    storage::{Arena, Key},
    util::dangling_link,
    Error,
    InvalidPosition,
    Result,
};

mod node;

use node::{Node, NodeData};

/// A positional doubly linked list.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct PositionalList<T> {
    id: ContainerId,
    storage: Arena<Node<T>>,
    header: Key,
    trailer: Key,
}
impl<T> PositionalList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Creates an empty list with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut storage = Arena::with_capacity(capacity.saturating_add(2));
        let header = storage.add(Node::sentinel());
        let trailer = storage.add(Node::sentinel());
        let mut list = Self {
            id: ContainerId::next(),
            storage,
            header,
            trailer,
        };
        list.node_mut(header).next = Some(trailer);
        list.node_mut(trailer).prev = Some(header);
        list
    }

    /// Returns the number of elements in the list.
    #[inline(always)]
    pub fn len(&self) -> usize {
        // The boundary nodes live in the same arena
        self.storage.len() - 2
    }
    /// Returns `true` if the list holds no elements, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the id of the list, shared by every position it hands out.
    #[inline(always)]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Returns the position of the first element, or `None` if the list is empty.
    #[inline]
    pub fn first(&self) -> Option<Position> {
        self.make_position(self.node(self.header).next)
    }
    /// Returns the position of the last element, or `None` if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<Position> {
        self.make_position(self.node(self.trailer).prev)
    }
    /// Returns the position of the first element.
    ///
    /// # Errors
    /// Fails with [`Error::Empty`] if the list is empty.
    ///
    /// [`Error::Empty`]: ../enum.Error.html#variant.Empty " "
    #[inline]
    pub fn try_first(&self) -> Result<Position> {
        self.first().ok_or(Error::Empty)
    }
    /// Returns the position of the last element.
    ///
    /// # Errors
    /// Fails with [`Error::Empty`] if the list is empty.
    ///
    /// [`Error::Empty`]: ../enum.Error.html#variant.Empty " "
    #[inline]
    pub fn try_last(&self) -> Result<Position> {
        self.last().ok_or(Error::Empty)
    }
    /// Returns the position just before `p`, or `None` if `p` is the first element.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this list.
    pub fn before(&self, p: Position) -> Result<Option<Position>> {
        let key = self.validate(p)?;
        Ok(self.make_position(self.node(key).prev))
    }
    /// Returns the position just after `p`, or `None` if `p` is the last element.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this list.
    pub fn after(&self, p: Position) -> Result<Option<Position>> {
        let key = self.validate(p)?;
        Ok(self.make_position(self.node(key).next))
    }

    /// Returns a reference to the element at `p`.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this list.
    pub fn get(&self, p: Position) -> Result<&T> {
        let key = self.validate(p)?;
        self.node(key)
            .data
            .as_ref()
            .ok_or(Error::InvalidPosition(InvalidPosition::Removed))
    }
    /// Returns a *mutable* reference to the element at `p`.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this list.
    pub fn get_mut(&mut self, p: Position) -> Result<&mut T> {
        let key = self.validate(p)?;
        self.node_mut(key)
            .data
            .as_mut()
            .ok_or(Error::InvalidPosition(InvalidPosition::Removed))
    }

    /// Inserts `element` at the front of the list, returning its position.
    #[inline]
    pub fn add_first(&mut self, element: T) -> Position {
        let (prev, next) = (self.header, self.successor_of_header());
        self.insert_between(element, prev, next)
    }
    /// Inserts `element` at the back of the list, returning its position.
    #[inline]
    pub fn add_last(&mut self, element: T) -> Position {
        let (prev, next) = (self.predecessor_of_trailer(), self.trailer);
        self.insert_between(element, prev, next)
    }
    /// Inserts `element` just before `p`, returning its position.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this list. Nothing is inserted in that case.
    pub fn add_before(&mut self, p: Position, element: T) -> Result<Position> {
        let key = self.validate(p)?;
        let (prev, _) = self.node(key).neighbours();
        Ok(self.insert_between(element, prev, key))
    }
    /// Inserts `element` just after `p`, returning its position.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this list. Nothing is inserted in that case.
    pub fn add_after(&mut self, p: Position, element: T) -> Result<Position> {
        let key = self.validate(p)?;
        let (_, next) = self.node(key).neighbours();
        Ok(self.insert_between(element, key, next))
    }
    /// Removes the element at `p` and returns it. `p` and all of its copies become invalid.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this list.
    pub fn delete(&mut self, p: Position) -> Result<T> {
        let key = self.validate(p)?;
        let (prev, next) = self.node(key).neighbours();
        self.node_mut(prev).next = Some(next);
        self.node_mut(next).prev = Some(prev);
        let node = self
            .storage
            .remove(key)
            .unwrap_or_else(|| dangling_link(key));
        tracing::trace!(container = ?self.id, slot = key.index(), size = self.len(), "deleted list node");
        Ok(node.data.into_element())
    }
    /// Replaces the element at `p` with `element`, returning the old one. The structure of the list is not touched.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this list.
    pub fn replace(&mut self, p: Position, element: T) -> Result<T> {
        let slot = self.get_mut(p)?;
        Ok(core::mem::replace(slot, element))
    }
    /// Removes every element. All positions handed out so far become invalid.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.header = self.storage.add(Node::sentinel());
        self.trailer = self.storage.add(Node::sentinel());
        let (header, trailer) = (self.header, self.trailer);
        self.node_mut(header).next = Some(trailer);
        self.node_mut(trailer).prev = Some(header);
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.successor_of_header(),
            back: self.predecessor_of_trailer(),
            remaining: self.len(),
        }
    }
    /// Returns an iterator over the positions of the elements, front to back.
    #[inline]
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            list: self,
            front: self.successor_of_header(),
            back: self.predecessor_of_trailer(),
            remaining: self.len(),
        }
    }

    #[inline]
    fn validate(&self, p: Position) -> Result<Key> {
        position::validate(self.id, &self.storage, p)
    }
    #[inline]
    fn make_position(&self, key: Option<Key>) -> Option<Position> {
        key.filter(|&key| key != self.header && key != self.trailer)
            .map(|key| Position::new(self.id, key))
    }
    fn insert_between(&mut self, element: T, prev: Key, next: Key) -> Position {
        let key = self.storage.add(Node::element(element, prev, next));
        self.node_mut(prev).next = Some(key);
        self.node_mut(next).prev = Some(key);
        Position::new(self.id, key)
    }
    #[inline]
    fn successor_of_header(&self) -> Key {
        let header = self.header;
        self.node(header).next.unwrap_or_else(|| dangling_link(header))
    }
    #[inline]
    fn predecessor_of_trailer(&self) -> Key {
        let trailer = self.trailer;
        self.node(trailer).prev.unwrap_or_else(|| dangling_link(trailer))
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
impl<T> Default for PositionalList<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Clone> Clone for PositionalList<T> {
    /// Clones the list. The clone is a separate container: positions of the original are foreign to it.
    fn clone(&self) -> Self {
        Self {
            id: ContainerId::next(),
            storage: self.storage.clone(),
            header: self.header,
            trailer: self.trailer,
        }
    }
}
impl<T: Debug> Debug for PositionalList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
impl<T: PartialEq> PartialEq for PositionalList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for PositionalList<T> {}
impl<T> Extend<T> for PositionalList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}
impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T> IntoIterator for PositionalList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An iterator over the elements of a [`PositionalList`].
///
/// [`PositionalList`]: struct.PositionalList.html " "
pub struct Iter<'a, T> {
    list: &'a PositionalList<T>,
    front: Key,
    back: Key,
    remaining: usize,
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.front);
        self.remaining -= 1;
        if let Some(next) = node.next {
            self.front = next;
        }
        node.data.as_ref()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = list.node(self.back);
        self.remaining -= 1;
        if let Some(prev) = node.prev {
            self.back = prev;
        }
        node.data.as_ref()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}
impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the positions of a [`PositionalList`].
///
/// [`PositionalList`]: struct.PositionalList.html " "
pub struct Positions<'a, T> {
    list: &'a PositionalList<T>,
    front: Key,
    back: Key,
    remaining: usize,
}
impl<T> Iterator for Positions<'_, T> {
    type Item = Position;
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front;
        self.remaining -= 1;
        if let Some(next) = self.list.node(key).next {
            self.front = next;
        }
        Some(Position::new(self.list.id, key))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> DoubleEndedIterator for Positions<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back;
        self.remaining -= 1;
        if let Some(prev) = self.list.node(key).prev {
            self.back = prev;
        }
        Some(Position::new(self.list.id, key))
    }
}
impl<T> ExactSizeIterator for Positions<'_, T> {}
impl<T> FusedIterator for Positions<'_, T> {}
impl<T> Debug for Positions<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Positions")
            .field("container", &self.list.id)
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// An owning iterator over the elements of a [`PositionalList`].
///
/// [`PositionalList`]: struct.PositionalList.html " "
#[derive(Debug)]
pub struct IntoIter<T> {
    list: PositionalList<T>,
}
impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let first = self.list.first()?;
        self.list.delete(first).ok()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let last = self.list.last()?;
        self.list.delete(last).ok()
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
