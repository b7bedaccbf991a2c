//! Backing storage for the linked containers.
//!
//! Every container in the crate keeps its nodes in an [`Arena`] and links them with [`Key`]s instead of pointers. The arena is a `Vec` of slots, each of which is either occupied by a node or vacant. Vacant slots are chained into a free list and are reused by later insertions, so removal never shifts other nodes around and never invalidates their keys.
//!
//! Reusing slots raises the question of what happens to a key which pointed to a removed node once the slot is occupied again. The answer is the *generation*: every slot carries a counter which is bumped each time the slot is vacated, and a key only resolves if its generation matches the slot's current one. A stale key therefore reads as absent instead of silently aliasing the new occupant.
//!
//! [`Arena`]: struct.Arena.html " "
//! [`Key`]: struct.Key.html " "

use core::fmt::{self, Debug, Formatter};

/// The key used to address a node inside an [`Arena`].
///
/// [`Arena`]: struct.Arena.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    index: u32,
    generation: u32,
}
impl Key {
    /// Returns the index of the slot the key points to.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.index as usize
    }
    /// Returns the generation of the slot at the moment the key was handed out.
    #[inline(always)]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// The generation of a slot which has been vacated too many times to be reused.
const RETIRED: u32 = u32::MAX;

#[derive(Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<u32> },
}
impl<T> Slot<T> {
    #[inline(always)]
    fn generation(&self) -> u32 {
        match self {
              Self::Occupied { generation, .. }
            | Self::Vacant { generation, .. }
            => *generation,
        }
    }
}

/// A slot arena with a free list and per-slot generations.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}
impl<T> Arena<T> {
    /// Creates an empty arena. Does not allocate.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }
    /// Creates an empty arena with room for `capacity` nodes before reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }
    /// Returns the number of occupied slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if no slot is occupied, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Returns the number of slots the arena can hold without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `value` in a vacant slot (or a new one if the free list is empty) and returns its key.
    ///
    /// # Panics
    /// Panics if the arena would need more than `u32::MAX` slots.
    pub fn add(&mut self, value: T) -> Key {
        self.len += 1;
        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            let (generation, next_free) = match slot {
                Slot::Vacant {
                    generation,
                    next_free,
                } => (*generation, *next_free),
                Slot::Occupied { .. } => unreachable!("free list points to an occupied slot"),
            };
            self.free_head = next_free;
            *slot = Slot::Occupied { generation, value };
            Key { index, generation }
        } else {
            let index = u32::try_from(self.slots.len()).unwrap_or_else(|_| {
                panic!("arena cannot hold more than {} slots", u32::MAX)
            });
            self.slots.push(Slot::Occupied {
                generation: 0,
                value,
            });
            Key {
                index,
                generation: 0,
            }
        }
    }
    /// Vacates the slot at `key`, returning the value which was stored there, or `None` if the key is stale or was never handed out by this arena.
    ///
    /// The slot's generation is bumped, so `key` and every copy of it stop resolving. A slot whose generation reaches `u32::MAX` is retired: it is never reused, so no key can ever alias a later occupant.
    pub fn remove(&mut self, key: Key) -> Option<T> {
        if !self.contains_key(key) {
            return None;
        }
        let generation = key.generation + 1;
        let retired = generation == RETIRED;
        let vacant = Slot::Vacant {
            generation,
            next_free: if retired { None } else { self.free_head },
        };
        let old = core::mem::replace(&mut self.slots[key.index()], vacant);
        if !retired {
            self.free_head = Some(key.index);
        }
        self.len -= 1;
        match old {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }
    /// Returns `true` if `key` currently resolves to a value, `false` otherwise.
    #[inline]
    pub fn contains_key(&self, key: Key) -> bool {
        matches!(
            self.slots.get(key.index()),
            Some(Slot::Occupied { generation, .. }) if *generation == key.generation
        )
    }
    /// Returns a reference to the value at `key`, or `None` if the key is stale.
    #[inline]
    pub fn get(&self, key: Key) -> Option<&T> {
        match self.slots.get(key.index()) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => {
                Some(value)
            }
            _ => None,
        }
    }
    /// Returns a *mutable* reference to the value at `key`, or `None` if the key is stale.
    #[inline]
    pub fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        match self.slots.get_mut(key.index()) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => {
                Some(value)
            }
            _ => None,
        }
    }
    /// Vacates every slot, invalidating all keys handed out so far while keeping the allocation.
    ///
    /// Slots whose generation runs out are retired as in [`remove`].
    ///
    /// [`remove`]: #method.remove " "
    pub fn clear(&mut self) {
        let mut next_free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match slot {
                Slot::Occupied { generation, .. } => *generation + 1,
                Slot::Vacant { generation, .. } => *generation,
            };
            if generation == RETIRED {
                *slot = Slot::Vacant {
                    generation,
                    next_free: None,
                };
                continue;
            }
            *slot = Slot::Vacant {
                generation,
                next_free,
            };
            next_free = Some(index as u32);
        }
        self.free_head = next_free;
        self.len = 0;
    }
}
impl<T> Default for Arena<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Debug> Debug for Arena<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().enumerate().filter_map(|(index, slot)| {
                match slot {
                    Slot::Occupied { value, .. } => Some((
                        Key {
                            index: index as u32,
                            generation: slot.generation(),
                        },
                        value,
                    )),
                    Slot::Vacant { .. } => None,
                }
            }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_key_stops_resolving() {
        let mut arena = Arena::new();
        let a = arena.add("a");
        let b = arena.add("b");
        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 1);
        // Second removal through the same key is a no-op
        assert_eq!(arena.remove(a), None);
    }

    #[test]
    fn vacant_slots_are_recycled_with_a_new_generation() {
        let mut arena = Arena::new();
        let a = arena.add(1);
        arena.remove(a);
        let c = arena.add(3);
        assert_eq!(c.index(), a.index());
        assert_ne!(c.generation(), a.generation());
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(c), Some(&3));
    }

    #[test]
    fn exhausted_slot_is_retired() {
        let mut arena = Arena {
            slots: vec![Slot::Vacant {
                generation: RETIRED - 1,
                next_free: None,
            }],
            free_head: Some(0),
            len: 0,
        };
        let last = arena.add('a');
        assert_eq!(last.generation(), RETIRED - 1);
        assert_eq!(arena.remove(last), Some('a'));
        assert_eq!(arena.get(last), None);
        // The exhausted slot stays vacant, so a new value gets a fresh one
        let fresh = arena.add('b');
        assert_eq!(fresh.index(), 1);
        assert_eq!(arena.get(last), None);
        assert!(!arena.contains_key(Key { index: 0, generation: RETIRED }));

        let mut arena = Arena {
            slots: vec![Slot::Occupied {
                generation: RETIRED - 1,
                value: 'c',
            }],
            free_head: None,
            len: 1,
        };
        let stale = Key { index: 0, generation: RETIRED - 1 };
        arena.clear();
        assert_eq!(arena.add('d').index(), 1);
        assert_eq!(arena.get(stale), None);
    }

    #[test]
    fn clear_invalidates_everything() {
        let mut arena = Arena::new();
        let keys = [arena.add(1), arena.add(2), arena.add(3)];
        arena.clear();
        assert!(arena.is_empty());
        assert!(keys.iter().all(|&key| !arena.contains_key(key)));
        let reused = arena.add(4);
        assert_eq!(reused.index(), 0);
        assert_eq!(arena.len(), 1);
    }
}
