//! Keyset: insertion-ordered, deduplicating set of key-compatible values.
//!
//! Layout
//! - `entries`: dense `Vec` of `(value, hash)` in first-insertion order.
//!   Iteration walks this vector, so order is exactly insertion order.
//! - `index`: `hashbrown::HashTable<usize>` of positions into `entries`.
//!   Probing compares candidate entries by value; resizing reuses the stored
//!   hash, so `T: Hash` runs once per inserted value.
//!
//! Inserting a value that is already present leaves both the membership and
//! the position of the existing element untouched.

use crate::key::KeyCompatible;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use hashbrown::HashTable;
use std::collections::hash_map::RandomState;

#[derive(Clone, Debug)]
struct Entry<T> {
    value: T,
    hash: u64,
}

#[derive(Clone)]
pub struct Keyset<T, S = RandomState> {
    hasher: S,
    index: HashTable<usize>,
    entries: Vec<Entry<T>>, // insertion order
}

impl<T> Keyset<T>
where
    T: KeyCompatible,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<T> Default for Keyset<T>
where
    T: KeyCompatible,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Keyset<T, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            index: HashTable::new(),
            entries: Vec::new(),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            hasher,
            index: HashTable::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Element at `position` in insertion order.
    pub fn get_index(&self, position: usize) -> Option<&T> {
        self.entries.get(position).map(|e| &e.value)
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.first().map(|e| &e.value)
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.last().map(|e| &e.value)
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
    }

    /// Iterates elements in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            it: self.entries.iter(),
        }
    }

    /// Consumes the keyset, returning its elements in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.entries.into_iter().map(|e| e.value).collect()
    }
}

impl<T, S> Keyset<T, S>
where
    T: KeyCompatible,
    S: BuildHasher,
{
    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Adds `value` at the end unless an equal element is present.
    /// Returns `true` when the value was newly added.
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.make_hash(&value);
        let entries = &self.entries;
        match self.index.entry(
            hash,
            |&i| entries.get(i).map(|e| e.value == value).unwrap_or(false),
            |&i| entries.get(i).map(|e| e.hash).unwrap_or(0),
        ) {
            hashbrown::hash_table::Entry::Occupied(_) => false,
            hashbrown::hash_table::Entry::Vacant(v) => {
                let position = self.entries.len();
                let _ = v.insert(position);
                self.entries.push(Entry { value, hash });
                true
            }
        }
    }

    /// Position of `q` in insertion order, if present.
    pub fn get_index_of<Q>(&self, q: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if self.entries.is_empty() {
            return None;
        }
        let hash = self.make_hash(q);
        self.index
            .find(hash, |&i| {
                self.entries
                    .get(i)
                    .map(|e| e.value.borrow() == q)
                    .unwrap_or(false)
            })
            .copied()
    }

    pub fn contains<Q>(&self, q: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_index_of(q).is_some()
    }

    pub fn reserve(&mut self, additional: usize) {
        let entries = &self.entries;
        self.index.reserve(additional, |&i| {
            entries.get(i).map(|e| e.hash).unwrap_or(0)
        });
        self.entries.reserve(additional);
    }

    /// Equal membership and equal iteration order.
    pub fn eq_ordered<S2>(&self, other: &Keyset<T, S2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// Iterator over the elements of a `Keyset`, in insertion order.
#[derive(Clone)]
pub struct Iter<'a, T> {
    it: core::slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| &e.value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back().map(|e| &e.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of a `Keyset`, in insertion order.
pub struct IntoIter<T> {
    it: std::vec::IntoIter<Entry<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| e.value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back().map(|e| e.value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T, S> IntoIterator for Keyset<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            it: self.entries.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Keyset<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> FromIterator<T> for Keyset<T, S>
where
    T: KeyCompatible,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for Keyset<T, S>
where
    T: KeyCompatible,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for Keyset<T, S>
where
    T: KeyCompatible + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for Keyset<T>
where
    T: KeyCompatible,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Membership equality; insertion order is ignored. See `eq_ordered`.
impl<T, S1, S2> PartialEq<Keyset<T, S2>> for Keyset<T, S1>
where
    T: KeyCompatible,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &Keyset<T, S2>) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl<T, S> Eq for Keyset<T, S>
where
    T: KeyCompatible,
    S: BuildHasher,
{
}

impl<T, S> fmt::Debug for Keyset<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::ArrayKey;

    /// Invariant: re-inserting a present value is a no-op for membership and
    /// position, and reports `false`.
    #[test]
    fn duplicate_insert_is_noop() {
        let mut k: Keyset<String> = Keyset::new();
        assert!(k.insert("a".to_string()));
        assert!(k.insert("b".to_string()));
        assert!(!k.insert("a".to_string()));
        assert_eq!(k.len(), 2);
        assert_eq!(k.get_index_of("a"), Some(0));
        assert_eq!(k.get_index_of("b"), Some(1));
    }

    /// Invariant: iteration order is first-insertion order, not hash order.
    #[test]
    fn iteration_follows_insertion_order() {
        let mut k: Keyset<i64> = Keyset::new();
        for v in [5, 3, 9, 3, 1, 5, 7] {
            k.insert(v);
        }
        let seen: Vec<i64> = k.iter().copied().collect();
        assert_eq!(seen, vec![5, 3, 9, 1, 7]);
        assert_eq!(k.first(), Some(&5));
        assert_eq!(k.last(), Some(&7));
        assert_eq!(k.get_index(2), Some(&9));
        assert_eq!(k.get_index(5), None);

        let rev: Vec<i64> = k.iter().rev().copied().collect();
        assert_eq!(rev, vec![7, 1, 9, 3, 5]);
        assert_eq!(k.into_vec(), vec![5, 3, 9, 1, 7]);
    }

    /// Invariant: borrowed lookup works (store `String`, query with `&str`).
    #[test]
    fn borrowed_lookup_with_str() {
        let k: Keyset<String> = ["hello".to_string()].into();
        assert!(k.contains("hello"));
        assert!(!k.contains("world"));
        assert_eq!(k.get_index_of("world"), None);
    }

    /// Invariant: lookups and dedup stay correct when every value collides.
    #[test]
    fn collision_handling_with_const_hasher() {
        #[derive(Clone, Default)]
        struct ConstBuildHasher;
        struct ConstHasher;
        impl BuildHasher for ConstBuildHasher {
            type Hasher = ConstHasher;
            fn build_hasher(&self) -> Self::Hasher {
                ConstHasher
            }
        }
        impl core::hash::Hasher for ConstHasher {
            fn write(&mut self, _bytes: &[u8]) {}
            fn finish(&self) -> u64 {
                0
            } // force all values into the same hash bucket
        }

        let mut k: Keyset<&str, ConstBuildHasher> = Keyset::with_hasher(ConstBuildHasher);
        for v in ["a", "b", "a", "c", "b"] {
            k.insert(v);
        }
        assert_eq!(k.len(), 3);
        assert_eq!(k.get_index_of("a"), Some(0));
        assert_eq!(k.get_index_of("b"), Some(1));
        assert_eq!(k.get_index_of("c"), Some(2));
        assert!(!k.contains("d"));
    }

    /// Invariant: growing past the initial capacity keeps every position
    /// resolvable (resizes reuse stored hashes).
    #[test]
    fn growth_keeps_positions() {
        let mut k: Keyset<u32> = Keyset::with_capacity(2);
        for v in 0..1_000u32 {
            assert!(k.insert(v * 7));
        }
        k.reserve(500);
        for v in 0..1_000u32 {
            assert_eq!(k.get_index_of(&(v * 7)), Some(v as usize));
        }
    }

    /// Invariant: `==` compares membership only; `eq_ordered` also compares
    /// order.
    #[test]
    fn equality_semantics() {
        let a: Keyset<i32> = [1, 2, 3].into();
        let b: Keyset<i32> = [3, 2, 1].into();
        let c: Keyset<i32> = [1, 2].into();
        assert_eq!(a, b);
        assert!(!a.eq_ordered(&b));
        assert!(a.eq_ordered(&a.clone()));
        assert_ne!(a, c);
    }

    /// Invariant: `clear` empties both storage and index.
    #[test]
    fn clear_then_reuse() {
        let mut k: Keyset<ArrayKey> = Keyset::new();
        k.insert(ArrayKey::from(1));
        k.insert(ArrayKey::from("1"));
        assert_eq!(k.len(), 2);
        k.clear();
        assert!(k.is_empty());
        assert!(!k.contains(&ArrayKey::from(1)));
        assert!(k.insert(ArrayKey::from(1)));
        assert_eq!(k.get_index_of(&ArrayKey::from(1)), Some(0));
    }

    #[test]
    fn debug_prints_in_insertion_order() {
        let k: Keyset<i32> = [2, 1, 2, 3].into();
        assert_eq!(format!("{:?}", k), "{2, 1, 3}");
    }

    #[test]
    fn extend_by_reference() {
        let mut k: Keyset<i32> = Keyset::new();
        let src = [4, 4, 5];
        k.extend(src.iter());
        assert_eq!(k.into_vec(), vec![4, 5]);
    }
}
