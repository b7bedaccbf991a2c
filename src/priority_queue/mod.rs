//! Min-oriented priority queues built on a positional list.
//!
//! Two flavors are provided, trading insertion cost for lookup cost:
//! - [`UnsortedPriorityQueue`] appends in constant time and scans the whole list to find the minimum
//! - [`SortedPriorityQueue`] keeps the list sorted on insertion, so the minimum is always at the front
//!
//! Both implement the [`PriorityQueue`] trait. Among entries with equal keys, both queues hand out the one inserted first.
//!
//! # Example
//! ```rust
//! use positree::priority_queue::{PriorityQueue, SortedPriorityQueue};
//!
//! let mut queue = SortedPriorityQueue::new();
//! queue.insert(3, "three");
//! queue.insert(1, "one");
//! queue.insert(1, "ONE");
//! queue.insert(5, "five");
//! assert_eq!(queue.min()?, (&1, &"one"));
//! assert_eq!(queue.remove_min()?, (1, "one"));
//! assert_eq!(queue.remove_min()?, (1, "ONE"));
//! assert_eq!(queue.len(), 2);
//! # Ok::<(), positree::Error>(())
//! ```
//!
//! [`UnsortedPriorityQueue`]: struct.UnsortedPriorityQueue.html " "
//! [`SortedPriorityQueue`]: struct.SortedPriorityQueue.html " "
//! [`PriorityQueue`]: trait.PriorityQueue.html " "

use crate::Result;

mod sorted;
mod unsorted;
#[cfg(test)]
mod tests;

pub use sorted::SortedPriorityQueue;
pub use unsorted::UnsortedPriorityQueue;

/// A collection of key-value entries from which the entry with the smallest key can be taken.
pub trait PriorityQueue<K: Ord, V> {
    /// Returns the number of entries in the queue.
    fn len(&self) -> usize;
    /// Returns `true` if the queue holds no entries, `false` otherwise.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Adds an entry to the queue.
    fn insert(&mut self, key: K, value: V);
    /// Returns the entry with the smallest key without removing it.
    ///
    /// # Errors
    /// Fails with [`Error::Empty`] if the queue is empty.
    ///
    /// [`Error::Empty`]: ../enum.Error.html#variant.Empty " "
    fn min(&self) -> Result<(&K, &V)>;
    /// Removes the entry with the smallest key and returns it.
    ///
    /// # Errors
    /// Fails with [`Error::Empty`] if the queue is empty.
    ///
    /// [`Error::Empty`]: ../enum.Error.html#variant.Empty " "
    fn remove_min(&mut self) -> Result<(K, V)>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Item<K, V> {
    key: K,
    value: V,
}
impl<K, V> Item<K, V> {
    #[inline(always)]
    fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
