use crate::compare::{Comparator, NaturalOrder};
use crate::open_addressing::probe::Probe;
use crate::open_addressing::slot::Slot;
use crate::set::Set;
use log::debug;
use rand::{Rng, XorShiftRng};
use siphasher::sip::SipHasher;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;
use std::slice;
use std::vec;

const DEFAULT_CAPACITY: usize = 128;
const MIN_CAPACITY: usize = 2;

/// An unordered set implemented using an open-addressing hash table.
///
/// Values are located by double hashing: two keyed SipHash functions give a starting slot and an
/// odd step, and the table capacity is always a power of two, so a probe sequence visits every
/// slot. Removed values are replaced by tombstones, which lookups skip over and insertions reuse.
/// The table doubles once more than half of its slots hold values.
///
/// Equality is decided by the set's comparator. Values that compare equal must also hash
/// equally.
///
/// # Examples
/// ```
/// use balanced_sets::open_addressing::OpenHashSet;
///
/// let mut set = OpenHashSet::new();
/// set.insert("foo");
/// set.insert("bar");
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&"foo"));
///
/// assert!(set.remove(&"foo"));
/// assert!(!set.remove(&"baz"));
/// ```
pub struct OpenHashSet<T, C = NaturalOrder> {
    slots: Vec<Slot<T>>,
    len: usize,
    tombstones: usize,
    hashers: [SipHasher; 2],
    comparator: C,
}

impl<T> OpenHashSet<T>
where
    T: Hash + Ord,
{
    /// Constructs a new, empty `OpenHashSet<T>` that compares values with their `Ord`
    /// implementation.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::open_addressing::OpenHashSet;
    ///
    /// let set: OpenHashSet<u32> = OpenHashSet::new();
    /// assert_eq!(set.capacity(), 128);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity_and_comparator(DEFAULT_CAPACITY, NaturalOrder)
    }

    /// Constructs a new, empty `OpenHashSet<T>` with at least `capacity` slots. The capacity is
    /// rounded up to a power of two.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::open_addressing::OpenHashSet;
    ///
    /// let set: OpenHashSet<u32> = OpenHashSet::with_capacity(100);
    /// assert_eq!(set.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, C> OpenHashSet<T, C>
where
    T: Hash,
    C: Comparator<T>,
{
    fn get_hashers() -> [SipHasher; 2] {
        let mut rng = XorShiftRng::new_unseeded();
        [
            SipHasher::new_with_keys(rng.next_u64(), rng.next_u64()),
            SipHasher::new_with_keys(rng.next_u64(), rng.next_u64()),
        ]
    }

    fn empty_slots(capacity: usize) -> Vec<Slot<T>> {
        (0..capacity).map(|_| Slot::Empty).collect()
    }

    /// Constructs a new, empty `OpenHashSet<T, C>` that decides equality with `comparator`.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::open_addressing::OpenHashSet;
    ///
    /// let mut set = OpenHashSet::with_comparator(|a: &u32, b: &u32| a.cmp(b));
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(DEFAULT_CAPACITY, comparator)
    }

    /// Constructs a new, empty `OpenHashSet<T, C>` with at least `capacity` slots that decides
    /// equality with `comparator`.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        let capacity = capacity.max(MIN_CAPACITY).next_power_of_two();
        OpenHashSet {
            slots: Self::empty_slots(capacity),
            len: 0,
            tombstones: 0,
            hashers: Self::get_hashers(),
            comparator,
        }
    }

    fn get_hashes(&self, value: &T) -> [u64; 2] {
        let mut ret = [0; 2];
        for (index, hasher) in self.hashers.iter().enumerate() {
            let sip = &mut hasher.clone();
            value.hash(sip);
            ret[index] = sip.finish();
        }
        ret
    }

    fn find(&self, value: &T) -> Option<usize> {
        for index in Probe::new(self.slots.len(), self.get_hashes(value)) {
            match self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => continue,
                Slot::Occupied(ref stored) => {
                    if self.comparator.compare(stored, value) == Ordering::Equal {
                        return Some(index);
                    }
                },
            }
        }
        None
    }

    // Places a value known to be absent into the first empty slot of its probe sequence.
    fn insert_unique(&mut self, value: T) {
        let vacant = Probe::new(self.slots.len(), self.get_hashes(&value))
            .find(|index| match self.slots[*index] {
                Slot::Empty => true,
                _ => false,
            });
        match vacant {
            Some(index) => {
                self.slots[index] = Slot::Occupied(value);
                self.len += 1;
            },
            None => unreachable!(),
        }
    }

    fn rehash(&mut self, capacity: usize) {
        debug!(
            "rehashing {} values ({} tombstones) from {} to {} slots",
            self.len,
            self.tombstones,
            self.slots.len(),
            capacity,
        );
        let old_slots = mem::replace(&mut self.slots, Self::empty_slots(capacity));
        self.len = 0;
        self.tombstones = 0;
        for slot in old_slots {
            if let Slot::Occupied(value) = slot {
                self.insert_unique(value);
            }
        }
    }

    fn try_grow(&mut self) {
        let capacity = self.slots.len();
        if (self.len + self.tombstones) * 2 <= capacity {
            return;
        }
        if self.len * 2 > capacity {
            self.rehash(capacity * 2);
        } else {
            self.rehash(capacity);
        }
    }

    /// Inserts a value into the set. Returns `true` if the value was inserted. If an equal value
    /// already exists, the set is left unchanged and `false` is returned.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::open_addressing::OpenHashSet;
    ///
    /// let mut set = OpenHashSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut vacant = None;
        for index in Probe::new(self.slots.len(), self.get_hashes(&value)) {
            match self.slots[index] {
                Slot::Empty => {
                    vacant.get_or_insert(index);
                    break;
                },
                Slot::Tombstone => {
                    vacant.get_or_insert(index);
                },
                Slot::Occupied(ref stored) => {
                    if self.comparator.compare(stored, &value) == Ordering::Equal {
                        return false;
                    }
                },
            }
        }

        match vacant {
            Some(index) => {
                if let Slot::Tombstone = self.slots[index] {
                    self.tombstones -= 1;
                }
                self.slots[index] = Slot::Occupied(value);
                self.len += 1;
                self.try_grow();
            },
            None => {
                let capacity = self.slots.len() * 2;
                self.rehash(capacity);
                self.insert_unique(value);
            },
        }
        true
    }

    /// Removes a value from the set. Returns `true` if the value was present.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::open_addressing::OpenHashSet;
    ///
    /// let mut set = OpenHashSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns the stored value, or `None` if no equal value
    /// exists.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let index = self.find(value)?;
        let ret = self.slots[index].take();
        if ret.is_some() {
            self.len -= 1;
            self.tombstones += 1;
        }
        ret
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::open_addressing::OpenHashSet;
    ///
    /// let mut set = OpenHashSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns a reference to the stored value that is equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(value).and_then(|index| self.slots[index].value())
    }

    /// Clears the set, removing all values. The capacity of the table is kept.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::open_addressing::OpenHashSet;
    ///
    /// let mut set = OpenHashSet::new();
    /// set.insert(1);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(!set.contains(&1));
    /// ```
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.len = 0;
        self.tombstones = 0;
    }
}

impl<T, C> OpenHashSet<T, C> {
    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table.
    ///
    /// # Examples
    /// ```
    /// use balanced_sets::open_addressing::OpenHashSet;
    ///
    /// let mut set = OpenHashSet::with_capacity(4);
    /// set.insert(0);
    /// set.insert(1);
    /// assert_eq!(set.capacity(), 4);
    /// set.insert(2);
    /// assert_eq!(set.capacity(), 8);
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns an iterator over the set. The order of the values is unspecified.
    pub fn iter(&self) -> OpenHashSetIter<'_, T> {
        OpenHashSetIter {
            slot_iter: self.slots.iter(),
        }
    }
}

impl<T, C> Set<T> for OpenHashSet<T, C>
where
    T: Hash,
    C: Comparator<T>,
{
    fn len(&self) -> usize {
        OpenHashSet::len(self)
    }

    fn contains(&self, value: &T) -> bool {
        OpenHashSet::contains(self, value)
    }

    fn insert(&mut self, value: T) -> bool {
        OpenHashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        OpenHashSet::remove(self, value)
    }
}

impl<T, C> IntoIterator for OpenHashSet<T, C> {
    type Item = T;
    type IntoIter = OpenHashSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            slot_iter: self.slots.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a OpenHashSet<T, C>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = OpenHashSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `OpenHashSet<T, C>`.
pub struct OpenHashSetIntoIter<T> {
    slot_iter: vec::IntoIter<Slot<T>>,
}

impl<T> Iterator for OpenHashSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in &mut self.slot_iter {
            if let Slot::Occupied(value) = slot {
                return Some(value);
            }
        }
        None
    }
}

/// An iterator for `OpenHashSet<T, C>`.
pub struct OpenHashSetIter<'a, T>
where
    T: 'a,
{
    slot_iter: slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iterator for OpenHashSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slot_iter.by_ref().filter_map(Slot::value).next()
    }
}

impl<T> Default for OpenHashSet<T>
where
    T: Hash + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OpenHashSet<T>
where
    T: Hash + Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = OpenHashSet::new();
        set.extend(iter);
        set
    }
}

impl<T, C> Extend<T> for OpenHashSet<T, C>
where
    T: Hash,
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> fmt::Debug for OpenHashSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::OpenHashSet;
    use crate::error::Error;
    use crate::set::Set;
    use std::hash::{Hash, Hasher};

    // Every value lands on the same probe sequence.
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Collide(u32);

    impl Hash for Collide {
        fn hash<H: Hasher>(&self, state: &mut H) {
            0u8.hash(state);
        }
    }

    #[test]
    fn test_len_empty() {
        let set: OpenHashSet<u32> = OpenHashSet::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut set = OpenHashSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = OpenHashSet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(!set.remove(&1));
        assert_eq!(set.tombstones, 1);
    }

    #[test]
    fn test_tombstone_keeps_chain() {
        let mut set = OpenHashSet::new();
        for value in 0..4 {
            assert!(set.insert(Collide(value)));
        }
        assert!(set.remove(&Collide(0)));
        assert!(set.remove(&Collide(2)));

        assert!(set.contains(&Collide(1)));
        assert!(set.contains(&Collide(3)));
        assert!(!set.contains(&Collide(2)));
        assert!(!set.insert(Collide(3)));
        assert!(set.remove(&Collide(3)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_reuses_tombstone() {
        let mut set = OpenHashSet::new();
        set.insert(Collide(0));
        set.insert(Collide(1));
        set.remove(&Collide(0));
        assert_eq!(set.tombstones, 1);

        assert!(set.insert(Collide(2)));
        assert_eq!(set.tombstones, 0);
        assert_eq!(set.get(&Collide(2)), Some(&Collide(2)));
        assert!(set.contains(&Collide(1)));
    }

    #[test]
    fn test_grow() {
        let mut set = OpenHashSet::new();
        for value in 0..64 {
            set.insert(value);
        }
        assert_eq!(set.capacity(), 128);
        set.insert(64);
        assert_eq!(set.capacity(), 256);
        for value in 0..65 {
            assert!(set.contains(&value));
        }
    }

    #[test]
    fn test_purge_tombstones() {
        let mut set = OpenHashSet::with_capacity(8);
        for value in 0..100u32 {
            assert!(set.insert(value));
            assert!(set.remove(&value));
            assert_eq!(set.capacity(), 8);
            assert!((set.len + set.tombstones) * 2 <= set.capacity());
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let set: OpenHashSet<u32> = OpenHashSet::with_capacity(0);
        assert_eq!(set.capacity(), 2);
        let set: OpenHashSet<u32> = OpenHashSet::with_capacity(9);
        assert_eq!(set.capacity(), 16);
    }

    #[test]
    fn test_comparator() {
        let mut set = OpenHashSet::with_comparator(|a: &u32, b: &u32| a.cmp(b));
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(&3));
    }

    #[test]
    fn test_try_operations() {
        let mut set = OpenHashSet::new();
        assert_eq!(set.try_insert(Some(1)), Ok(true));
        assert_eq!(set.try_insert(None), Err(Error::InvalidArgument));
        assert_eq!(set.try_contains(None), Err(Error::InvalidArgument));
        assert_eq!(set.try_remove(None), Err(Error::InvalidArgument));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut set: OpenHashSet<u32> = (0..10).collect();
        set.remove(&0);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.tombstones, 0);
        assert!(!set.contains(&1));
    }

    #[test]
    fn test_iter() {
        let set: OpenHashSet<u32> = vec![1, 5, 3].into_iter().collect();
        let mut values = set.iter().cloned().collect::<Vec<u32>>();
        values.sort();
        assert_eq!(values, vec![1, 3, 5]);

        let mut values = set.into_iter().collect::<Vec<u32>>();
        values.sort();
        assert_eq!(values, vec![1, 3, 5]);
    }
}
