use core::fmt::{self, Debug, Formatter};
use crate::{positional_list::PositionalList, util::own_position, Error, Result};
use super::{Item, PriorityQueue};

/// A priority queue which keeps its entries sorted by key.
///
/// Insertion walks from the back of the list to the spot where the new entry belongs, so it takes linear time in the worst case; the minimum is always the first entry.
#[derive(Clone)]
pub struct SortedPriorityQueue<K, V> {
    data: PositionalList<Item<K, V>>,
}
impl<K: Ord, V> SortedPriorityQueue<K, V> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: PositionalList::new(),
        }
    }
    /// Returns an iterator over the entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.data.iter().map(Item::as_pair)
    }
}
impl<K: Ord, V> PriorityQueue<K, V> for SortedPriorityQueue<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }
    fn insert(&mut self, key: K, value: V) {
        // The last entry whose key is not greater, so equal keys stay in arrival order
        let anchor = self
            .data
            .positions()
            .rev()
            .zip(self.data.iter().rev())
            .find(|(_, item)| item.key <= key)
            .map(|(p, _)| p);
        let item = Item { key, value };
        match anchor {
            Some(anchor) => {
                own_position(self.data.add_after(anchor, item));
            }
            None => {
                self.data.add_first(item);
            }
        }
    }
    fn min(&self) -> Result<(&K, &V)> {
        self.data.iter().next().map(Item::as_pair).ok_or(Error::Empty)
    }
    fn remove_min(&mut self) -> Result<(K, V)> {
        let first = self.data.try_first()?;
        Ok(own_position(self.data.delete(first)).into_pair())
    }
}
impl<K: Ord, V> Default for SortedPriorityQueue<K, V> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<K: Debug, V: Debug> Debug for SortedPriorityQueue<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.data.iter().map(|item| (&item.key, &item.value)))
            .finish()
    }
}
