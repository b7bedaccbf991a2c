//! A sorted map backed by an unbalanced binary search tree.
//!
//! Keys are kept in binary search tree order: every key in the left subtree of a node is smaller than the node's key, every key in the right subtree is greater. The tree is never rebalanced, so inserting keys in sorted order degrades it into a list and every operation into a linear scan.
//!
//! Besides the usual map operations, the map exposes the positions of its entries, which can be navigated in key order with [`before`] and [`after`].
//!
//! # Example
//! ```rust
//! use positree::tree_map::TreeMap;
//!
//! let mut map = TreeMap::new();
//! for &key in &[5, 2, 8, 1, 3] {
//!     map.insert(key, key * 10);
//! }
//! assert_eq!(map.get(&3), Some(&30));
//! assert_eq!(map.find_ge(&4), Some((&5, &50)));
//! assert_eq!(map.find_range(2..6).map(|(k, _)| *k).collect::<Vec<_>>(), [2, 3, 5]);
//!
//! assert_eq!(map.remove(&5)?, 50);
//! assert_eq!(map.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [1, 2, 3, 8]);
//! # Ok::<(), positree::Error>(())
//! ```
//!
//! [`before`]: struct.TreeMap.html#method.before " "
//! [`after`]: struct.TreeMap.html#method.after " "

use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
};
use crate::{
    binary_tree::LinkedBinaryTree,
    tree::{BinaryTree, Tree},
    util::own_position,
    Error,
    Position,
    Result,
};

#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A sorted map over an unbalanced binary search tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone)]
pub struct TreeMap<K, V> {
    tree: LinkedBinaryTree<Entry<K, V>>,
}
impl<K: Ord, V> TreeMap<K, V> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            tree: LinkedBinaryTree::new(),
        }
    }
    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }
    /// Returns `true` if the map is empty, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
    /// Returns the position of the root of the search tree, or `None` if the map is empty.
    #[inline]
    pub fn root(&self) -> Option<Position> {
        self.tree.root()
    }
    /// Returns the key stored at `p`.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this map.
    pub fn key(&self, p: Position) -> Result<&K> {
        self.tree.element(p).map(|entry| &entry.key)
    }
    /// Returns the value stored at `p`.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this map.
    pub fn value(&self, p: Position) -> Result<&V> {
        self.tree.element(p).map(|entry| &entry.value)
    }
    /// Returns a *mutable* reference to the value stored at `p`.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this map.
    pub fn value_mut(&mut self, p: Position) -> Result<&mut V> {
        self.tree.element_mut(p).map(|entry| &mut entry.value)
    }

    /// Searches the subtree rooted at `p` for `key`, returning the position holding it, or the position of the last node visited if the key is absent.
    ///
    /// The last node visited is where `key` would be inserted, and holds either its predecessor or its successor in key order.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this map.
    pub fn subtree_search(&self, p: Position, key: &K) -> Result<Position> {
        let mut p = p;
        loop {
            let next = match key.cmp(self.key(p)?) {
                Ordering::Equal => return Ok(p),
                Ordering::Less => self.tree.left(p)?,
                Ordering::Greater => self.tree.right(p)?,
            };
            match next {
                Some(next) => p = next,
                None => return Ok(p),
            }
        }
    }
    /// Returns the position of the smallest key, or `None` if the map is empty.
    #[inline]
    pub fn first(&self) -> Option<Position> {
        self.root().map(|root| self.subtree_first(root))
    }
    /// Returns the position of the greatest key, or `None` if the map is empty.
    #[inline]
    pub fn last(&self) -> Option<Position> {
        self.root().map(|root| self.subtree_last(root))
    }
    /// Returns the position of the key just before the one at `p`, or `None` if `p` holds the smallest key.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this map.
    pub fn before(&self, p: Position) -> Result<Option<Position>> {
        if let Some(left) = self.tree.left(p)? {
            return Ok(Some(self.subtree_last(left)));
        }
        let mut cursor = p;
        let mut parent = self.tree.parent(cursor)?;
        while let Some(above) = parent {
            if self.tree.left(above)? != Some(cursor) {
                break;
            }
            cursor = above;
            parent = self.tree.parent(cursor)?;
        }
        Ok(parent)
    }
    /// Returns the position of the key just after the one at `p`, or `None` if `p` holds the greatest key.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this map.
    pub fn after(&self, p: Position) -> Result<Option<Position>> {
        if let Some(right) = self.tree.right(p)? {
            return Ok(Some(self.subtree_first(right)));
        }
        let mut cursor = p;
        let mut parent = self.tree.parent(cursor)?;
        while let Some(above) = parent {
            if self.tree.right(above)? != Some(cursor) {
                break;
            }
            cursor = above;
            parent = self.tree.parent(cursor)?;
        }
        Ok(parent)
    }

    /// Returns the value associated with `key`, or `None` if the key is absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_position(key).map(|p| self.entry_at(p).1)
    }
    /// Returns the value associated with `key`.
    ///
    /// # Errors
    /// Fails with [`Error::KeyNotFound`] if the key is absent.
    ///
    /// [`Error::KeyNotFound`]: ../enum.Error.html#variant.KeyNotFound " "
    pub fn get_or_err(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }
    /// Returns `true` if the map holds `key`, `false` otherwise.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_position(key).is_some()
    }
    /// Associates `value` with `key`, returning the value previously associated with it, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let root = match self.root() {
            Some(root) => root,
            None => {
                own_position(self.tree.add_root(Entry { key, value }));
                return None;
            }
        };
        let p = own_position(self.subtree_search(root, &key));
        let entry = Entry { key, value };
        match entry.key.cmp(self.key_at(p)) {
            Ordering::Equal => {
                let old = own_position(self.tree.replace(p, entry));
                return Some(old.value);
            }
            Ordering::Less => own_position(self.tree.add_left(p, entry)),
            Ordering::Greater => own_position(self.tree.add_right(p, entry)),
        };
        None
    }
    /// Removes `key` from the map, returning its value.
    ///
    /// # Errors
    /// Fails with [`Error::KeyNotFound`] if the key is absent.
    ///
    /// [`Error::KeyNotFound`]: ../enum.Error.html#variant.KeyNotFound " "
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let p = self.find_position(key).ok_or(Error::KeyNotFound)?;
        self.remove_at(p).map(|(_, value)| value)
    }
    /// Removes the entry at `p`, returning its key and value.
    ///
    /// If the node at `p` has two children, the entry of its in-order predecessor is moved into it and the predecessor's node is deleted instead, so `p` stays valid and now holds the predecessor.
    ///
    /// # Errors
    /// Fails if `p` is not a valid position of this map.
    pub fn remove_at(&mut self, p: Position) -> Result<(K, V)> {
        let entry = if let (Some(left), Some(_)) = (self.tree.left(p)?, self.tree.right(p)?) {
            let predecessor = self.subtree_last(left);
            let moved = own_position(self.tree.delete(predecessor));
            tracing::trace!(container = ?self.tree.id(), "moved predecessor into removed entry");
            own_position(self.tree.replace(p, moved))
        } else {
            self.tree.delete(p)?
        };
        Ok((entry.key, entry.value))
    }

    /// Returns the entry with the smallest key, or `None` if the map is empty.
    pub fn find_min(&self) -> Option<(&K, &V)> {
        self.first().map(|p| self.entry_at(p))
    }
    /// Returns the entry with the greatest key, or `None` if the map is empty.
    pub fn find_max(&self) -> Option<(&K, &V)> {
        self.last().map(|p| self.entry_at(p))
    }
    /// Returns the entry with the smallest key.
    ///
    /// # Errors
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// [`Error::Empty`]: ../enum.Error.html#variant.Empty " "
    pub fn first_entry(&self) -> Result<(&K, &V)> {
        self.find_min().ok_or(Error::Empty)
    }
    /// Returns the entry with the greatest key.
    ///
    /// # Errors
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// [`Error::Empty`]: ../enum.Error.html#variant.Empty " "
    pub fn last_entry(&self) -> Result<(&K, &V)> {
        self.find_max().ok_or(Error::Empty)
    }
    /// Returns the entry with the smallest key greater than or equal to `key`.
    pub fn find_ge(&self, key: &K) -> Option<(&K, &V)> {
        self.position_ge(key).map(|p| self.entry_at(p))
    }
    /// Returns the entry with the greatest key strictly less than `key`.
    pub fn find_lt(&self, key: &K) -> Option<(&K, &V)> {
        let p = own_position(self.subtree_search(self.root()?, key));
        if self.key_at(p) < key {
            Some(self.entry_at(p))
        } else {
            own_position(self.before(p)).map(|p| self.entry_at(p))
        }
    }
    /// Returns the entry with the smallest key strictly greater than `key`.
    pub fn find_gt(&self, key: &K) -> Option<(&K, &V)> {
        self.position_gt(key).map(|p| self.entry_at(p))
    }
    /// Returns an iterator over the entries whose keys lie in `range`, in ascending key order.
    pub fn find_range<'a, R>(&'a self, range: R) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
    where
        R: RangeBounds<K> + 'a,
    {
        let start = match range.start_bound() {
            Bound::Included(key) => self.position_ge(key),
            Bound::Excluded(key) => self.position_gt(key),
            Bound::Unbounded => self.first(),
        };
        Iter { map: self, next: start }.take_while(move |(key, _)| match range.end_bound() {
            Bound::Included(end) => *key <= end,
            Bound::Excluded(end) => *key < end,
            Bound::Unbounded => true,
        })
    }
    /// Returns an iterator over all entries in ascending key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            map: self,
            next: self.first(),
        }
    }

    fn find_position(&self, key: &K) -> Option<Position> {
        let p = own_position(self.subtree_search(self.root()?, key));
        if self.key_at(p) == key {
            Some(p)
        } else {
            None
        }
    }
    fn position_ge(&self, key: &K) -> Option<Position> {
        let p = own_position(self.subtree_search(self.root()?, key));
        if self.key_at(p) < key {
            own_position(self.after(p))
        } else {
            Some(p)
        }
    }
    fn position_gt(&self, key: &K) -> Option<Position> {
        let p = own_position(self.subtree_search(self.root()?, key));
        if self.key_at(p) <= key {
            own_position(self.after(p))
        } else {
            Some(p)
        }
    }
    fn subtree_first(&self, p: Position) -> Position {
        let mut p = p;
        while let Some(left) = own_position(self.tree.left(p)) {
            p = left;
        }
        p
    }
    fn subtree_last(&self, p: Position) -> Position {
        let mut p = p;
        while let Some(right) = own_position(self.tree.right(p)) {
            p = right;
        }
        p
    }
    #[inline]
    fn key_at(&self, p: Position) -> &K {
        own_position(self.key(p))
    }
    #[inline]
    fn entry_at(&self, p: Position) -> (&K, &V) {
        let entry = own_position(self.tree.element(p));
        (&entry.key, &entry.value)
    }
}
impl<K: Ord, V> Default for TreeMap<K, V> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<K: Ord + Debug, V: Debug> Debug for TreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
impl<'a, K: Ord, V> IntoIterator for &'a TreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`TreeMap`] in ascending key order.
///
/// [`TreeMap`]: struct.TreeMap.html " "
pub struct Iter<'a, K, V> {
    map: &'a TreeMap<K, V>,
    next: Option<Position>,
}
impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        let p = self.next?;
        self.next = own_position(map.after(p));
        Some(map.entry_at(p))
    }
}
impl<K: Ord, V> FusedIterator for Iter<'_, K, V> {}
impl<K, V> Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("next", &self.next).finish()
    }
}
