use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{Iter, Visit};
use crate::util::fmt::DebugRaw;

/// An unordered set of distinct values, relying on the values implementing [`Hash`] and [`Eq`].
///
/// Internally, each element is a key in a [`HashMap`] whose value is `()`, marking presence and
/// nothing else. Hashing, collision handling and growth are all left to the map.
///
/// The order in which elements are visited by [`iter`](HashSet::iter),
/// [`range`](HashSet::range) or [`to_vec`](HashSet::to_vec) is unspecified and may differ between
/// calls.
///
/// It is a logic error for an element to be modified in a way that changes its hash or equality
/// while it is in the set. Because of this, the set's API never hands out mutable references to
/// its elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)`** |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `clear` | `O(n)` |
/// | `range` | `O(n)` |
/// | `to_vec` | `O(n)` |
///
/// \* Expected, assuming a reasonable hasher.
///
/// \** If the underlying map has to grow to fit the new element.
#[derive(Clone)]
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates a new, empty HashSet using the default hasher. Memory will be allocated once the
    /// first element is inserted.
    pub fn new() -> HashSet<T> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet which can hold at least `cap` elements before reallocating.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new, empty HashSet which hashes its elements with `hasher`.
    pub const fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new HashSet with room for at least `cap` elements, which hashes its elements with
    /// `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of distinct elements in the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's [`BuildHasher`].
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the set, returning true if it wasn't already present.
    ///
    /// If an equal item is already present, the set is left untouched (the existing item is kept
    /// and `item` is dropped) and false is returned.
    pub fn insert(&mut self, item: T) -> bool {
        match self.inner.entry(item) {
            Entry::Occupied(_) => false,
            Entry::Vacant(bucket) => {
                bucket.insert(());
                true
            },
        }
    }

    /// Removes `item` from the set, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes `item` from the set, returning the stored element if it was present.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(stored, ())| stored)
    }

    /// Returns true if the set contains `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Removes every element from the set. The allocated capacity is kept for reuse.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.inner.retain(|item, _| keep(item))
    }

    /// Reserves space for at least `extra` more elements.
    ///
    /// # Panics
    /// Panics if the new allocation size overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Shrinks the capacity of the set as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit()
    }

    /// Returns an iterator over all elements in the set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Calls `visitor` once for each element in the set, in no particular order.
    ///
    /// The visitor returns anything that converts into a [`Visit`]: either a `Visit` itself, a
    /// [`bool`] where `true` means stop, or `()` to always continue. As soon as the visitor asks
    /// to stop, iteration halts and the remaining elements are skipped. For an empty set the
    /// visitor is never called.
    pub fn range<F, V>(&self, mut visitor: F)
    where
        F: FnMut(&T) -> V,
        V: Into<Visit>,
    {
        for item in self.iter() {
            if visitor(item).into().is_stop() {
                break;
            }
        }
    }

    /// Copies every element of the set into a new [`Vec`], in no particular order.
    ///
    /// The returned Vec is independent of the set, later changes to the set aren't reflected in
    /// it.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut vec = Vec::with_capacity(self.len());
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        HashSet::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = HashSet::with_cap_and_hasher(iter.size_hint().0, B::default());

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for HashSet<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!(
                "#{{{}}}",
                self.iter()
                    .map(|i| format!("{i:?}"))
                    .collect::<Vec<String>>()
                    .join(", ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
