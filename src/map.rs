//! A growable associative array based on an [association list](https://en.wikipedia.org/wiki/Association_list).

use core::borrow::Borrow;
use core::fmt::{self, Debug, Display};
use core::iter::{FromIterator, FusedIterator};

use alloc::vec::Vec;

/// The number of slots a freshly constructed [`AssocArray`] allocates.
pub const DEFAULT_CAPACITY: usize = 16;

/// The error returned by [`AssocArray::get`] when the given key is absent.
///
/// This is the only failure the array ever surfaces: [`AssocArray::set`] and
/// [`AssocArray::remove`] treat the corresponding conditions as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found")
    }
}

impl core::error::Error for KeyNotFound {}

/// A key/value binding stored in one slot of an [`AssocArray`].
///
/// The key is fixed at construction; the value may be replaced in place.
/// A value of `None` is a stored "null", which is distinct from the key
/// being absent from the array altogether.
#[derive(Clone, Debug)]
pub struct Pair<K, V> {
    key: K,
    value: Option<V>,
}

impl<K, V> Pair<K, V> {
    /// Creates a new binding of `key` to `value`.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::Pair;
    ///
    /// let pair = Pair::new("a", 1);
    /// assert_eq!(pair.key(), &"a");
    /// assert_eq!(pair.value(), Some(&1));
    ///
    /// let null = Pair::<_, u32>::new("b", None);
    /// assert_eq!(null.value(), None);
    /// ```
    pub fn new(key: K, value: impl Into<Option<V>>) -> Self {
        Pair { key, value: value.into() }
    }

    /// Returns a reference to the key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value, or [`None`] if a null is stored.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns a mutable reference to the value slot.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::Pair;
    ///
    /// let mut pair = Pair::new("a", 1);
    /// *pair.value_mut() = None;
    /// assert_eq!(pair.value(), None);
    /// ```
    #[inline]
    pub fn value_mut(&mut self) -> &mut Option<V> {
        &mut self.value
    }

    /// Decomposes the binding into its key and value.
    #[inline]
    pub fn into_parts(self) -> (K, Option<V>) {
        (self.key, self.value)
    }
}

impl<K: Display, V: Display> Display for Pair<K, V> {
    /// Renders the binding as `key: value`, with a null value printed as
    /// the literal text `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.as_ref() {
            Some(value) => write!(f, "{}: {}", self.key, value),
            None => write!(f, "{}: null", self.key),
        }
    }
}

/// A growable associative array based on an [association list](https://en.wikipedia.org/wiki/Association_list).
///
/// Keys are compared using the [`Eq`] trait, and nothing else; in particular
/// they need not be hashable or ordered. Every search operation ([`get`],
/// [`contains_key`], [`remove`], and the update path of [`set`]) is a linear
/// scan over the slot array, i.e. *O*(*capacity*), which is problematic for
/// large maps but simple and often faster than a hash table for small ones.
///
/// Storage is a sequence of optional slots. A new key goes into the first
/// empty slot; when none is left, the slot sequence doubles in length. The
/// capacity never drops below [`DEFAULT_CAPACITY`] and never shrinks.
/// Iteration and [`Display`] follow physical slot order, so insertion order
/// is preserved only until a removal opens a hole for a later insertion to
/// fill.
///
/// Values are stored as `Option<V>`: a present key may be bound to a null
/// value, and [`get`] distinguishes that (`Ok(None)`) from the key being
/// absent (`Err(KeyNotFound)`).
///
/// It is a logic error for a key to be modified in such a way that its
/// equality, as determined by the [`Eq`] trait, changes while it is in the
/// array.
///
/// [`get`]: AssocArray::get
/// [`contains_key`]: AssocArray::contains_key
/// [`remove`]: AssocArray::remove
/// [`set`]: AssocArray::set
///
/// # Examples
/// ```
/// use assoc_array::AssocArray;
///
/// let mut reviews = AssocArray::new();
/// reviews.set("Grimms' Fairy Tales", "masterpiece");
/// reviews.set("Pride and Prejudice", "very enjoyable");
/// reviews.set("The Trial", None);
///
/// assert_eq!(reviews.get("Pride and Prejudice"), Ok(Some(&"very enjoyable")));
/// assert_eq!(reviews.get("The Trial"), Ok(None));
/// assert!(reviews.get("Les Misérables").is_err());
/// assert_eq!(reviews.len(), 3);
/// ```
pub struct AssocArray<K, V> {
    slots: Vec<Option<Pair<K, V>>>,
    len: usize,
}

impl<K, V> AssocArray<K, V> {
    /// Constructs a new, empty `AssocArray` with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::{AssocArray, DEFAULT_CAPACITY};
    ///
    /// let map = AssocArray::<u32, u32>::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `AssocArray` with at least the specified
    /// capacity.
    ///
    /// Capacities below [`DEFAULT_CAPACITY`] are rounded up to it.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let map = AssocArray::<u32, u32>::with_capacity(100);
    /// assert_eq!(map.capacity(), 100);
    ///
    /// let map = AssocArray::<u32, u32>::with_capacity(3);
    /// assert_eq!(map.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(DEFAULT_CAPACITY);
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        AssocArray { slots, len: 0 }
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of key/value pairs in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no pairs, or `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every allocated slot is occupied, or `false`
    /// otherwise.
    ///
    /// Unlike in a fixed-capacity map, a full `AssocArray` is not stuck:
    /// the next insertion of a new key doubles the capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Clears the array, removing all key/value pairs. The capacity is
    /// retained.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Finds the first occupied slot whose key equals the argument.
    ///
    /// This is the single source of truth for key presence; every search
    /// operation goes through it, so they always agree on which slot a key
    /// lives in.
    fn find_slot<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q> + Eq,
        Q: Eq + ?Sized,
    {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(pair) if pair.key.borrow() == key))
    }

    /// Doubles the number of slots, leaving existing slots (occupied and
    /// empty alike) at their indices. Called only when an insertion of a new
    /// key finds no empty slot.
    fn expand(&mut self) {
        let doubled = self.slots.len() * 2;
        self.slots.resize_with(doubled, || None);
    }

    /// Sets the value associated with `key`. Future calls to
    /// [`get(key)`](AssocArray::get) will return it.
    ///
    /// If the key is already present, only its value is overwritten and the
    /// length is unchanged. A new key is placed in the first empty slot, or
    /// in the first slot added by a capacity doubling if the array is full.
    /// `set` never fails.
    ///
    /// The value may be given as a plain `V` or as an `Option<V>`; passing
    /// [`None`] binds the key to a null value, which is still a present
    /// entry.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 37);
    /// map.set("a", 42);
    /// map.set("b", None);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("a"), Ok(Some(&42)));
    /// assert_eq!(map.get("b"), Ok(None));
    /// ```
    pub fn set(&mut self, key: K, value: impl Into<Option<V>>)
    where
        K: Eq,
    {
        let value = value.into();

        if let Some(idx) = self.find_slot(&key) {
            // Update in place; the stored key is not replaced. This matters
            // for types that can be == without being identical.
            if let Some(pair) = &mut self.slots[idx] {
                pair.value = value;
            }
            return;
        }

        let idx = match self.slots.iter().position(Option::is_none) {
            Some(idx) => idx,
            None => {
                let end = self.slots.len();
                self.expand();
                end
            }
        };

        self.slots[idx] = Some(Pair { key, value });
        self.len += 1;
    }

    /// Returns the value associated with the given key.
    ///
    /// Fails with [`KeyNotFound`] if the key is absent; a present key bound
    /// to a null value yields `Ok(None)`.
    ///
    /// The key may be any borrowed form of the array's key type, but `Eq` on
    /// the borrowed form *must* match that for the key type.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::{AssocArray, KeyNotFound};
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    ///
    /// assert_eq!(map.get("a"), Ok(Some(&1)));
    /// assert_eq!(map.get("b"), Err(KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<Option<&V>, KeyNotFound>
    where
        K: Borrow<Q> + Eq,
        Q: Eq + ?Sized,
    {
        match self.find_slot(key) {
            Some(idx) => Ok(self.slots[idx].as_ref().and_then(|pair| pair.value.as_ref())),
            None => Err(KeyNotFound),
        }
    }

    /// Returns a mutable reference to the value slot associated with the
    /// given key, or fails with [`KeyNotFound`] if the key is absent.
    ///
    /// The key may be any borrowed form of the array's key type, but `Eq` on
    /// the borrowed form *must* match that for the key type.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    ///
    /// if let Ok(value) = map.get_mut("a") {
    ///     *value = Some(3);
    /// }
    ///
    /// assert_eq!(map.get("a"), Ok(Some(&3)));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut Option<V>, KeyNotFound>
    where
        K: Borrow<Q> + Eq,
        Q: Eq + ?Sized,
    {
        let idx = self.find_slot(key).ok_or(KeyNotFound)?;
        self.slots[idx]
            .as_mut()
            .map(Pair::value_mut)
            .ok_or(KeyNotFound)
    }

    /// Returns `true` if the array contains a pair with the given key, or
    /// `false` otherwise.
    ///
    /// The key may be any borrowed form of the array's key type, but `Eq` on
    /// the borrowed form *must* match that for the key type.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    ///
    /// assert_eq!(map.contains_key("a"), true);
    /// assert_eq!(map.contains_key("b"), false);
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Eq,
        Q: Eq + ?Sized,
    {
        self.find_slot(key).is_some()
    }

    /// Removes the pair associated with the given key, returning it if it
    /// was present. Future calls to [`get(key)`](AssocArray::get) will fail.
    ///
    /// If the key does not appear in the array, does nothing; removal is
    /// idempotent and never surfaces an error. The vacated slot is reused by
    /// a later insertion, and the capacity is unchanged.
    ///
    /// The key may be any borrowed form of the array's key type, but `Eq` on
    /// the borrowed form *must* match that for the key type.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    ///
    /// let pair = map.remove("a").unwrap();
    /// assert_eq!(pair.into_parts(), ("a", Some(1)));
    /// assert_eq!(map.remove("a").is_none(), true);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Pair<K, V>>
    where
        K: Borrow<Q> + Eq,
        Q: Eq + ?Sized,
    {
        let idx = self.find_slot(key)?;
        self.len -= 1;
        self.slots[idx].take()
    }

    /// An iterator visiting all key/value pairs in physical slot order.
    /// The iterator element type is `(&'a K, Option<&'a V>)`.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{} -> {:?}", key, value);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.slots.iter(), remaining: self.len }
    }

    /// An iterator visiting all key/value pairs in physical slot order, with
    /// mutable references to the value slots. The iterator element type is
    /// `(&'a K, &'a mut Option<V>)`.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value = value.map(|v| v * 2);
    /// }
    ///
    /// assert_eq!(map.get("a"), Ok(Some(&2)));
    /// assert_eq!(map.get("b"), Ok(Some(&4)));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut { slots: self.slots.iter_mut(), remaining: self.len }
    }

    /// An iterator visiting all keys in physical slot order.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { base: self.iter() }
    }

    /// An iterator visiting all value slots in physical slot order.
    /// The iterator element type is `Option<&'a V>`.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    /// map.set("b", None);
    ///
    /// let values: Vec<_> = map.values().collect();
    /// assert_eq!(values, [Some(&1), None]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { base: self.iter() }
    }
}

impl<K, V> Default for AssocArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for AssocArray<K, V> {
    /// Creates a deep copy of the array: a fresh slot sequence of the same
    /// capacity, with every pair duplicated at its original index and empty
    /// slots left empty. Mutating the copy never affects the original, and
    /// vice versa.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1);
    ///
    /// let mut copy = map.clone();
    /// copy.set("b", 2);
    /// copy.remove("a");
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.contains_key("b"), false);
    /// ```
    fn clone(&self) -> Self {
        AssocArray { slots: self.slots.clone(), len: self.len }
    }
}

impl<K: Debug, V: Debug> Debug for AssocArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Display, V: Display> Display for AssocArray<K, V> {
    /// Renders the array as `{}` when empty, and otherwise as
    /// `{ k1: v1, k2: v2 }` in physical slot order, skipping empty slots,
    /// with a null value printed as the literal text `null`.
    ///
    /// # Examples
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// assert_eq!(map.to_string(), "{}");
    ///
    /// map.set("a", "b");
    /// map.set("c", None);
    /// assert_eq!(map.to_string(), "{ a: b, c: null }");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }

        f.write_str("{ ")?;
        let mut rest = false;
        for pair in self.slots.iter().flatten() {
            if rest {
                f.write_str(", ")?;
            }
            Display::fmt(pair, f)?;
            rest = true;
        }
        f.write_str(" }")
    }
}

impl<K: Eq, V: PartialEq> PartialEq for AssocArray<K, V> {
    /// Tests for `self` and `other` to be equal, and is used by `==`.
    /// Two arrays are equal when they bind the same keys to the same values,
    /// regardless of slot positions or capacity.
    ///
    /// Note that this is *O*(1) if the two arrays have different lengths,
    /// but *O*(*n*²) if they are the same length.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.get(key).map_or(false, |v| value == v))
    }
}

impl<K: Eq, V: Eq> Eq for AssocArray<K, V> {}

impl<K: Eq, V> Extend<(K, V)> for AssocArray<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(k, v)| self.set(k, v));
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for AssocArray<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

/// An iterator over the entries of an [`AssocArray`].
///
/// This `struct` is created by the [`iter`](AssocArray::iter) method on
/// `AssocArray`. See its documentation for more.
pub struct Iter<'a, K, V> {
    slots: core::slice::Iter<'a, Option<Pair<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, Option<&'a V>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next() {
            if let Some(pair) = slot {
                self.remaining -= 1;
                return Some((&pair.key, pair.value.as_ref()));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a AssocArray<K, V> {
    type Item = (&'a K, Option<&'a V>);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A mutable iterator over the entries of an [`AssocArray`].
///
/// This `struct` is created by the [`iter_mut`](AssocArray::iter_mut) method
/// on `AssocArray`. See its documentation for more.
pub struct IterMut<'a, K, V> {
    slots: core::slice::IterMut<'a, Option<Pair<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut Option<V>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next() {
            if let Some(pair) = slot {
                self.remaining -= 1;
                return Some((&pair.key, &mut pair.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a mut AssocArray<K, V> {
    type Item = (&'a K, &'a mut Option<V>);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator over the entries of an [`AssocArray`].
///
/// This `struct` is created by the [`into_iter`](IntoIterator::into_iter)
/// method on `AssocArray` (provided by the [`IntoIterator`] trait).
pub struct IntoIter<K, V> {
    slots: alloc::vec::IntoIter<Option<Pair<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, Option<V>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next() {
            if let Some(pair) = slot {
                self.remaining -= 1;
                return Some(pair.into_parts());
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for AssocArray<K, V> {
    type Item = (K, Option<V>);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let remaining = self.len;
        IntoIter { slots: self.slots.into_iter(), remaining }
    }
}

/// An iterator over the keys of an [`AssocArray`].
///
/// This `struct` is created by the [`keys`](AssocArray::keys) method on
/// `AssocArray`. See its documentation for more.
pub struct Keys<'a, K, V> {
    base: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.base.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.base.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the value slots of an [`AssocArray`].
///
/// This `struct` is created by the [`values`](AssocArray::values) method on
/// `AssocArray`. See its documentation for more.
pub struct Values<'a, K, V> {
    base: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = Option<&'a V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.base.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.base.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn set_and_get_round_trip() {
        let mut map = AssocArray::new();
        map.set("x", 1);
        map.set("y", 2);

        assert_eq!(map.get("x"), Ok(Some(&1)));
        assert_eq!(map.get("y"), Ok(Some(&2)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn set_overwrites_without_growing() {
        let mut map = AssocArray::new();
        map.set("a", 1);
        map.set("a", 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Ok(Some(&2)));
    }

    #[test]
    fn null_values_are_present_entries() {
        let mut map = AssocArray::new();
        map.set("a", None::<u32>);

        assert_eq!(map.len(), 1);
        assert_eq!(map.contains_key("a"), true);
        assert_eq!(map.get("a"), Ok(None));

        map.set("a", 7);
        assert_eq!(map.get("a"), Ok(Some(&7)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_fails_for_absent_keys() {
        let mut map = AssocArray::<&str, u32>::new();
        assert_eq!(map.get("a"), Err(KeyNotFound));

        map.set("a", 1);
        map.remove("a");
        assert_eq!(map.get("a"), Err(KeyNotFound));
    }

    #[test]
    fn removal_is_idempotent() {
        let mut map = AssocArray::new();
        map.set("x", 1);
        map.set("y", 2);

        let pair = map.remove("x").unwrap();
        assert_eq!(pair.into_parts(), ("x", Some(1)));
        assert_eq!(map.len(), 1);
        assert_eq!(map.contains_key("x"), false);

        assert!(map.remove("x").is_none());
        assert!(map.remove("z").is_none());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn growth_boundary() {
        let mut map = AssocArray::new();
        for i in 0..16u32 {
            map.set(i, i * 10);
        }
        assert_eq!(map.capacity(), 16);
        assert!(map.is_full());

        map.set(16, 160);
        assert_eq!(map.len(), 17);
        assert_eq!(map.capacity(), 32);

        for i in 0..17u32 {
            assert_eq!(map.get(&i), Ok(Some(&(i * 10))));
        }
    }

    #[test]
    fn updating_a_full_map_does_not_grow_it() {
        let mut map = AssocArray::new();
        for i in 0..16u32 {
            map.set(i, i);
        }

        map.set(3, 99);
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.len(), 16);
        assert_eq!(map.get(&3), Ok(Some(&99)));
    }

    #[test]
    fn insertion_reuses_the_first_empty_slot() {
        let mut map = AssocArray::new();
        map.set("a", 1);
        map.set("b", 2);
        map.set("c", 3);

        map.remove("a");
        map.set("d", 4);

        assert_eq!(map.to_string(), "{ d: 4, b: 2, c: 3 }");
    }

    #[test]
    fn display_format() {
        let mut map = AssocArray::<&str, &str>::new();
        assert_eq!(map.to_string(), "{}");

        map.set("a", "b");
        assert_eq!(map.to_string(), "{ a: b }");

        map.set("c", None);
        assert_eq!(map.to_string(), "{ a: b, c: null }");
    }

    #[test]
    fn clones_are_independent() {
        let mut map = AssocArray::new();
        map.set("a", 1);
        map.set("b", 2);
        map.set("c", 3);
        map.remove("b");

        let mut copy = map.clone();
        assert_eq!(copy.capacity(), map.capacity());
        assert_eq!(copy.to_string(), map.to_string());

        copy.set("d", 4);
        copy.remove("a");
        assert_eq!(map.len(), 2);
        assert_eq!(map.contains_key("a"), true);
        assert_eq!(map.contains_key("d"), false);

        map.set("e", 5);
        assert_eq!(copy.contains_key("e"), false);
    }

    #[test]
    fn clone_preserves_capacity_and_holes() {
        let mut map = AssocArray::new();
        for i in 0..17u32 {
            map.set(i, i);
        }
        map.remove(&0);

        let copy = map.clone();
        assert_eq!(copy.capacity(), 32);
        assert_eq!(copy.len(), 16);
        assert_eq!(copy.to_string(), map.to_string());
    }

    #[test]
    fn usage_scenario() {
        let mut map = AssocArray::new();
        map.set("x", 1);
        map.set("y", 2);
        assert_eq!(map.get("x"), Ok(Some(&1)));

        map.remove("x");
        assert_eq!(map.contains_key("x"), false);
        assert_eq!(map.get("x"), Err(KeyNotFound));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iterators_follow_slot_order_and_skip_holes() {
        let mut map = AssocArray::new();
        map.set("a", 1);
        map.set("b", 2);
        map.set("c", 3);
        map.remove("b");

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, [(&"a", Some(&1)), (&"c", Some(&3))]);

        let mut iter = map.iter();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, ["a", "c"]);

        let values: Vec<_> = map.values().collect();
        assert_eq!(values, [Some(&1), Some(&3)]);

        for (_, value) in map.iter_mut() {
            *value = value.map(|v| v + 10);
        }
        assert_eq!(map.get("c"), Ok(Some(&13)));

        let owned: Vec<_> = map.into_iter().collect();
        assert_eq!(owned, [("a", Some(11)), ("c", Some(13))]);
    }

    #[test]
    fn equality_ignores_slot_positions() {
        let mut a = AssocArray::new();
        a.set("x", 1);
        a.set("y", 2);

        let mut b = AssocArray::new();
        b.set("y", 2);
        b.set("x", 1);
        assert_eq!(a, b);

        b.set("y", 3);
        assert_ne!(a, b);

        b.remove("y");
        assert_ne!(a, b);
    }

    #[test]
    fn collecting_from_an_iterator() {
        let map: AssocArray<u32, u32> = (0..20u32).map(|i| (i, i + 100)).collect();
        assert_eq!(map.len(), 20);
        assert_eq!(map.capacity(), 32);
        assert_eq!(map.get(&19), Ok(Some(&119)));
    }

    #[test]
    fn randomized_ops_match_reference_model() {
        use alloc::collections::BTreeMap;
        use rand::{rngs::SmallRng, RngCore, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
        let mut map = AssocArray::new();
        let mut model = BTreeMap::new();

        for _ in 0..1000 {
            let key = rng.next_u32() % 64;
            match rng.next_u32() % 4 {
                0 | 1 => {
                    let value = rng.next_u32();
                    map.set(key, value);
                    model.insert(key, Some(value));
                }
                2 => {
                    map.set(key, None::<u32>);
                    model.insert(key, None);
                }
                _ => {
                    map.remove(&key);
                    model.remove(&key);
                }
            }

            assert_eq!(map.len(), model.len());
        }

        for key in 0..64u32 {
            match model.get(&key) {
                Some(value) => assert_eq!(map.get(&key), Ok(value.as_ref())),
                None => assert_eq!(map.get(&key), Err(KeyNotFound)),
            }
        }
    }
}
