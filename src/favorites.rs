//! A list of values ordered by how often they have been accessed.
//!
//! Every [`access`] bumps the count of a value and moves it towards the front past all entries with a strictly lower count, one step of insertion sort. Entries with equal counts therefore keep the order in which they first reached that count.
//!
//! # Example
//! ```rust
//! use positree::favorites::FavoritesList;
//!
//! let mut favorites = FavoritesList::new();
//! for &value in &["a", "b", "c", "b", "d", "a", "a"] {
//!     favorites.access(value);
//! }
//! assert_eq!(favorites.top(3)?.copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//! assert_eq!(favorites.count(&"a"), Some(3));
//! # Ok::<(), positree::Error>(())
//! ```
//!
//! [`access`]: struct.FavoritesList.html#method.access " "

use core::fmt::{self, Debug, Formatter};
use crate::{
    positional_list::PositionalList,
    util::own_position,
    Error,
    Position,
    Result,
};

#[derive(Clone, Debug)]
struct Entry<T> {
    value: T,
    count: usize,
}

/// A list of values ordered from the most frequently accessed to the least.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone)]
pub struct FavoritesList<T> {
    data: PositionalList<Entry<T>>,
}
impl<T: PartialEq> FavoritesList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: PositionalList::new(),
        }
    }
    /// Returns the number of distinct values in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Returns `true` if the list is empty, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Records an access to `value`, adding it at the back if it is new, and returns its updated access count.
    pub fn access(&mut self, value: T) -> usize {
        let p = match self.find_position(&value) {
            Some(p) => p,
            None => self.data.add_last(Entry { value, count: 0 }),
        };
        let entry = own_position(self.data.get_mut(p));
        entry.count += 1;
        let count = entry.count;
        self.move_up(p, count);
        count
    }
    /// Removes `value` from the list, returning the access count it had, or `None` if it was not in the list.
    pub fn remove(&mut self, value: &T) -> Option<usize> {
        let p = self.find_position(value)?;
        Some(own_position(self.data.delete(p)).count)
    }
    /// Returns the access count of `value`, or `None` if it is not in the list.
    pub fn count(&self, value: &T) -> Option<usize> {
        self.data
            .iter()
            .find(|entry| entry.value == *value)
            .map(|entry| entry.count)
    }
    /// Returns the `k` most frequently accessed values, most frequent first.
    ///
    /// # Errors
    /// Fails with [`Error::OutOfRange`] unless `1 <= k <= len`.
    ///
    /// [`Error::OutOfRange`]: ../enum.Error.html#variant.OutOfRange " "
    pub fn top(&self, k: usize) -> Result<impl Iterator<Item = &T> + '_> {
        if k < 1 || k > self.len() {
            return Err(Error::OutOfRange {
                requested: k,
                len: self.len(),
            });
        }
        Ok(self.data.iter().take(k).map(|entry| &entry.value))
    }
    /// Returns an iterator over the values and their access counts, most frequent first.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.data.iter().map(|entry| (&entry.value, entry.count))
    }

    fn find_position(&self, value: &T) -> Option<Position> {
        self.data
            .positions()
            .zip(self.data.iter())
            .find(|(_, entry)| entry.value == *value)
            .map(|(p, _)| p)
    }
    /// Moves the entry at `p` in front of every preceding entry with a count lower than `count`.
    fn move_up(&mut self, p: Position, count: usize) {
        let mut target = None;
        let mut walk = own_position(self.data.before(p));
        while let Some(prev) = walk {
            if own_position(self.data.get(prev)).count >= count {
                break;
            }
            target = Some(prev);
            walk = own_position(self.data.before(prev));
        }
        if let Some(target) = target {
            let entry = own_position(self.data.delete(p));
            own_position(self.data.add_before(target, entry));
        }
    }
}
impl<T: PartialEq> Default for FavoritesList<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Debug> Debug for FavoritesList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.data.iter().map(|entry| (&entry.value, entry.count)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_order() {
        let mut favorites = FavoritesList::new();
        for &value in &["a", "b", "c"] {
            assert_eq!(favorites.access(value), 1);
        }
        assert_eq!(favorites.iter().collect::<Vec<_>>(), [(&"a", 1), (&"b", 1), (&"c", 1)]);
        favorites.access("b");
        favorites.access("d");
        favorites.access("a");
        favorites.access("a");
        assert_eq!(
            favorites.iter().collect::<Vec<_>>(),
            [(&"a", 3), (&"b", 2), (&"c", 1), (&"d", 1)],
        );
        assert_eq!(favorites.top(3).unwrap().copied().collect::<Vec<_>>(), ["a", "b", "c"]);

        assert_eq!(favorites.remove(&"c"), Some(1));
        assert_eq!(favorites.remove(&"e"), None);
        assert_eq!(favorites.len(), 3);
        assert_eq!(format!("{:?}", favorites), r#"{"a": 3, "b": 2, "d": 1}"#);
    }

    #[test]
    fn late_value_overtakes_lower_counts() {
        let mut favorites = FavoritesList::new();
        favorites.access(1);
        favorites.access(2);
        favorites.access(3);
        favorites.access(3);
        assert_eq!(favorites.top(1).unwrap().collect::<Vec<_>>(), [&3]);
        favorites.access(3);
        favorites.access(2);
        assert_eq!(favorites.iter().collect::<Vec<_>>(), [(&3, 3), (&2, 2), (&1, 1)]);
    }

    #[test]
    fn top_checks_its_range() {
        let mut favorites = FavoritesList::new();
        assert_eq!(
            favorites.top(1).err(),
            Some(Error::OutOfRange { requested: 1, len: 0 }),
        );
        favorites.access('x');
        assert!(favorites.top(0).is_err());
        assert!(favorites.top(2).is_err());
        assert_eq!(favorites.top(1).unwrap().count(), 1);
    }
}
