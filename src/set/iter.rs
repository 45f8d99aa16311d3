//! Iterators over frozen sets.
//!
//! Both iterators walk the keys in sorted order and are double-ended, so
//! reverse iteration is `iter().rev()`. Neither hands out mutable access.

use std::iter::FusedIterator;

/// Iterator over references to the keys of a frozen set, in sorted order.
#[derive(Debug, Clone)]
pub struct FrozenSetIterator<'a, K> {
    inner: std::slice::Iter<'a, K>,
}

impl<'a, K> FrozenSetIterator<'a, K> {
    #[inline]
    pub(crate) fn new(keys: &'a [K]) -> Self {
        Self { inner: keys.iter() }
    }

    /// Returns the keys not yet yielded, in sorted order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &'a [K] {
        self.inner.as_slice()
    }
}

impl<'a, K> Iterator for FrozenSetIterator<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }
}

impl<K> DoubleEndedIterator for FrozenSetIterator<'_, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for FrozenSetIterator<'_, K> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for FrozenSetIterator<'_, K> {}

/// Owning iterator over the keys of a frozen set, in sorted order.
#[derive(Debug, Clone)]
pub struct FrozenSetIntoIterator<K, const N: usize> {
    inner: std::array::IntoIter<K, N>,
}

impl<K, const N: usize> FrozenSetIntoIterator<K, N> {
    #[inline]
    pub(crate) fn new(keys: [K; N]) -> Self {
        Self {
            inner: keys.into_iter(),
        }
    }
}

impl<K, const N: usize> Iterator for FrozenSetIntoIterator<K, N> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, const N: usize> DoubleEndedIterator for FrozenSetIntoIterator<K, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, const N: usize> ExactSizeIterator for FrozenSetIntoIterator<K, N> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, const N: usize> FusedIterator for FrozenSetIntoIterator<K, N> {}
