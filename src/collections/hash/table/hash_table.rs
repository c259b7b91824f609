use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::ops::Index;
use std::{cmp, iter, mem};

use log::{debug, trace};

use super::{IntoKeys, IntoValues, Iter, Keys, TableKey, Values};
use crate::collections::error::KeyNotFound;
use crate::util::result::ResultExtension;

/// The capacity used by [`HashTable::new`].
pub const DEFAULT_CAP: usize = 10;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 7;
const LOAD_FACTOR_DENOMINATOR: usize = 10;

/// A map of keys to values, stored in a single array of slots and using linear probing to resolve
/// collisions.
///
/// Keys are strings or integers, see [`TableKey`] for how they are mapped onto slots. The load
/// factor is fixed at 7/10: before every insertion, the table checks whether one more entry would
/// push it over that limit and if so, doubles its capacity and places every existing entry again.
///
/// Entries can't be removed, which keeps the probing logic free of tombstones.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
///
/// \* Keys which share a home slot (or land in each other's probe runs) take additional time while
/// the run is scanned. The simple hashing used here makes this far more common than with a real
/// hasher, e.g. every anagram of a string collides.
///
/// \** If inserting would exceed the load factor, the table grows first, which takes `O(n)`.
/// \* applies as well.
pub struct HashTable<K: TableKey, V> {
    pub(crate) slots: Box<[Bucket<K, V>]>,
    pub(crate) count: usize,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

fn empty_slots<K, V>(cap: usize) -> Box<[Bucket<K, V>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<K: TableKey, V> HashTable<K, V> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] empty slots.
    pub fn new() -> HashTable<K, V> {
        HashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new HashTable with `cap` empty slots. A capacity of 0 is allowed, in which case
    /// the first insertion allocates.
    pub fn with_cap(cap: usize) -> HashTable<K, V> {
        HashTable {
            slots: empty_slots(cap),
            count: 0,
        }
    }

    /// Returns the number of occupied slots.
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the total number of slots, occupied or not.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the ratio of occupied slots to total slots, or 0 for a table with no slots.
    pub fn load_factor(&self) -> f64 {
        if self.cap() == 0 {
            return 0.0;
        }
        self.len() as f64 / self.cap() as f64
    }

    /// Inserts the provided `key`-`value` pair into the HashTable, growing it first if one more
    /// entry would exceed the load factor. If the key was already associated with a value, that
    /// value is replaced in place and returned.
    ///
    /// As with the standard library, the stored key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow();
        }

        self.place(key, value)
    }

    /// Returns the entry for the provided `key` as a key-value pair.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if no slot in the key's probe run holds an equal key.
    pub fn get_entry<Q>(&self, key: &Q) -> Result<(&K, &V), KeyNotFound>
    where
        // Q is a borrowed form of K, for which the home slot and equality must agree with K's.
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        match self.find_index_for_key(key).and_then(|i| self.slots[i].as_ref()) {
            Some((k, v)) => Ok((k, v)),
            None => Err(Self::missing(key)),
        }
    }

    /// Returns a reference to the value associated with the provided `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the table contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the table contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = self.find_index_for_key(key);

        match index.and_then(|i| self.slots[i].as_mut()) {
            Some((_, v)) => Ok(v),
            None => Err(Self::missing(key)),
        }
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        match self.find_index_for_key(key) {
            Some(i) => self.slots[i].is_some(),
            None => false,
        }
    }

    /// Returns an iterator over all key-value pairs in slot order, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in slot order, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all values in slot order, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: TableKey, V> HashTable<K, V> {
    /// Determines whether adding one more entry would push the load factor above 7/10.
    pub(crate) fn should_grow(&self) -> bool {
        (self.count + 1) * LOAD_FACTOR_DENOMINATOR > self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Grows the HashTable by the growth factor and places every entry again, so that each one
    /// lands relative to the new capacity.
    pub(crate) fn grow(&mut self) {
        let old_cap = self.cap();
        let new_cap = cmp::max(old_cap * GROWTH_FACTOR, MIN_ALLOCATED_CAP);

        // Swap in the new slots first so that the old ones can be consumed.
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_cap));
        let moved = self.count;
        self.count = 0;

        for (key, value) in old_slots.into_vec().into_iter().flatten() {
            // Keys in the old slots are unique, so every placement takes a fresh slot.
            self.place(key, value);
        }

        debug_assert_eq!(self.count, moved);
        debug!("grew HashTable from {old_cap} to {new_cap} slots, moving {moved} entries");
    }

    /// Stores the pair in the slot found for `key`, without checking the load factor. Returns the
    /// replaced value if the key was already present.
    fn place(&mut self, key: K, value: V) -> Option<V> {
        let Some(index) = self.find_index_for_key(&key) else {
            // Growth always leaves at least one empty slot, so the probe ends before wrapping.
            unreachable!("no free slot in a HashTable with {} slots", self.cap());
        };

        // The slot at index is either empty or contains an equal key.
        match &mut self.slots[index] {
            Some(existing) => Some(mem::replace(&mut existing.1, value)),
            None => {
                self.slots[index] = Some((key, value));
                self.count += 1;
                None
            },
        }
    }

    /// Finds the slot for the provided `key`. Starting at the key's home slot, slots are checked in
    /// order (wrapping at the capacity) until one is found that is empty or has an equal key.
    ///
    /// Returns None if the table has no slots, or if the probe wraps back around to the home slot
    /// having only seen other keys.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let cap = self.cap();
        if cap == 0 {
            return None;
        }

        let home = key.home_slot(cap);
        let mut index = home;

        // Nothing is ever removed, so an empty slot ends the run: the key can't be any further on.
        while let Some(existing) = &self.slots[index] {
            if existing.0.borrow() == key {
                break;
            }

            index = (index + 1) % cap;
            if index == home {
                return None;
            }
        }

        Some(index)
    }

    fn missing<Q: TableKey + ?Sized>(key: &Q) -> KeyNotFound {
        trace!("lookup for key '{key}' missed");
        KeyNotFound::new(key)
    }
}

impl<K: TableKey, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Q, V> Index<&Q> for HashTable<K, V>
where
    K: TableKey + Borrow<Q>,
    Q: TableKey + ?Sized,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics with the [`KeyNotFound`] message if the table contains no value for `key`.
    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).throw()
    }
}

impl<K: TableKey, V> FromIterator<(K, V)> for HashTable<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = HashTable::new();
        table.extend(iter);
        table
    }
}

impl<K: TableKey, V> Extend<(K, V)> for HashTable<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: TableKey + Debug, V: Debug> Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("slots", &self.slots)
            .field("count", &self.count)
            .finish()
    }
}
