use std::collections::hash_map::{IntoKeys, Keys};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::HashSet;

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

/// An owned iterator over the elements of a [`HashSet`], in no particular order.
pub struct IntoIter<T: Hash + Eq> (
    pub(crate) IntoKeys<T, ()>,
);

impl<T: Hash + Eq> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Hash + Eq> ExactSizeIterator for IntoIter<T> {}

impl<T: Hash + Eq> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

/// A borrowed iterator over the elements of a [`HashSet`], in no particular order.
pub struct Iter<'a, T: Hash + Eq> (
    pub(crate) Keys<'a, T, ()>,
);

impl<'a, T: Hash + Eq> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Hash + Eq> ExactSizeIterator for Iter<'_, T> {}

impl<T: Hash + Eq> FusedIterator for Iter<'_, T> {}

// Keys is Clone regardless of T, which a derive wouldn't express.
impl<T: Hash + Eq> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}
