use core::fmt::{self, Debug, Formatter};
use crate::{positional_list::PositionalList, util::own_position, Error, Position, Result};
use super::{Item, PriorityQueue};

/// A priority queue which stores its entries in insertion order.
///
/// Insertion is constant-time, finding the minimum takes a full scan.
#[derive(Clone)]
pub struct UnsortedPriorityQueue<K, V> {
    data: PositionalList<Item<K, V>>,
}
impl<K: Ord, V> UnsortedPriorityQueue<K, V> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: PositionalList::new(),
        }
    }
    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.data.iter().map(Item::as_pair)
    }
    /// Returns the position of the earliest-inserted entry among those with the smallest key.
    fn find_min(&self) -> Result<Position> {
        self.data
            .positions()
            .zip(self.data.iter())
            // min_by keeps the first of equal elements
            .min_by(|(_, a), (_, b)| a.key.cmp(&b.key))
            .map(|(p, _)| p)
            .ok_or(Error::Empty)
    }
}
impl<K: Ord, V> PriorityQueue<K, V> for UnsortedPriorityQueue<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }
    #[inline]
    fn insert(&mut self, key: K, value: V) {
        self.data.add_last(Item { key, value });
    }
    fn min(&self) -> Result<(&K, &V)> {
        let p = self.find_min()?;
        Ok(own_position(self.data.get(p)).as_pair())
    }
    fn remove_min(&mut self) -> Result<(K, V)> {
        let p = self.find_min()?;
        Ok(own_position(self.data.delete(p)).into_pair())
    }
}
impl<K: Ord, V> Default for UnsortedPriorityQueue<K, V> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<K: Debug, V: Debug> Debug for UnsortedPriorityQueue<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.data.iter().map(|item| (&item.key, &item.value)))
            .finish()
    }
}
