//! Fixed-capacity inline key storage.
//!
//! [`FixedStorage`] owns exactly `N` keys in an inline array. It has value
//! semantics: cloning it duplicates every key, and nothing above this
//! module depends on its layout beyond indexed access and iteration.

use arrayvec::ArrayVec;

use crate::error::CapacityMismatch;

/// An owned sequence of exactly `N` keys.
///
/// The order is whatever the producer left it in: argument order before
/// sorting, comparator order after [`sort_storage`](crate::algorithms::sort_storage).
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::storage::FixedStorage;
///
/// let storage = FixedStorage::new([3, 1, 2]);
/// assert_eq!(storage.len(), 3);
/// assert_eq!(storage[0], 3);
/// assert_eq!(storage.iter().rev().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedStorage<K, const N: usize> {
    keys: [K; N],
}

impl<K, const N: usize> FixedStorage<K, N> {
    /// Wraps an array of keys.
    #[inline]
    #[must_use]
    pub const fn new(keys: [K; N]) -> Self {
        Self { keys }
    }

    /// Copies exactly `N` keys out of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityMismatch`] if `keys.len() != N`.
    pub fn try_from_slice(keys: &[K]) -> Result<Self, CapacityMismatch>
    where
        K: Clone,
    {
        if keys.len() != N {
            return Err(CapacityMismatch {
                expected: N,
                actual: keys.len(),
            });
        }
        Self::try_from_iter(keys.iter().cloned())
    }

    /// Collects exactly `N` keys from an iterator without allocating.
    ///
    /// At most `N + 1` items are pulled from the iterator.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityMismatch`] if the iterator yields fewer or more
    /// than `N` keys.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, CapacityMismatch>
    where
        I: IntoIterator<Item = K>,
    {
        let mut buffer: ArrayVec<K, N> = ArrayVec::new();

        for key in iter {
            if buffer.try_push(key).is_err() {
                return Err(CapacityMismatch {
                    expected: N,
                    actual: N + 1,
                });
            }
        }

        let actual = buffer.len();
        buffer
            .into_inner()
            .map(Self::new)
            .map_err(|_| CapacityMismatch {
                expected: N,
                actual,
            })
    }

    /// Always `N`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the keys as a slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Returns a reference to the underlying array.
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[K; N] {
        &self.keys
    }

    /// Returns the key at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Returns a double-ended iterator over the keys in storage order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Unwraps the storage into its array.
    #[inline]
    #[must_use]
    pub fn into_array(self) -> [K; N] {
        self.keys
    }

    /// Mutable view used by the sort engine only.
    #[inline]
    pub(crate) const fn as_mut_slice(&mut self) -> &mut [K] {
        &mut self.keys
    }
}

impl<K, const N: usize> From<[K; N]> for FixedStorage<K, N> {
    #[inline]
    fn from(keys: [K; N]) -> Self {
        Self::new(keys)
    }
}

impl<K, const N: usize> std::ops::Index<usize> for FixedStorage<K, N> {
    type Output = K;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.keys[index]
    }
}

impl<K, const N: usize> AsRef<[K]> for FixedStorage<K, N> {
    #[inline]
    fn as_ref(&self) -> &[K] {
        &self.keys
    }
}

impl<'a, K, const N: usize> IntoIterator for &'a FixedStorage<K, N> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, const N: usize> IntoIterator for FixedStorage<K, N> {
    type Item = K;
    type IntoIter = std::array::IntoIter<K, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_keeps_argument_order() {
        let storage = FixedStorage::new([5, 3, 1]);
        assert_eq!(storage.as_slice(), &[5, 3, 1]);
    }

    #[rstest]
    fn test_clone_is_a_full_duplicate() {
        let original = FixedStorage::new([String::from("a"), String::from("b")]);
        let copy = original.clone();
        drop(original);
        assert_eq!(copy.as_slice(), &["a", "b"]);
    }

    #[rstest]
    fn test_zero_length_storage() {
        let storage: FixedStorage<i32, 0> = FixedStorage::new([]);
        assert!(storage.is_empty());
        assert_eq!(storage.iter().next(), None);
    }

    #[rstest]
    #[case(&[1, 2, 3], Ok([1, 2, 3]))]
    #[case(&[1, 2], Err(CapacityMismatch { expected: 3, actual: 2 }))]
    #[case(&[1, 2, 3, 4], Err(CapacityMismatch { expected: 3, actual: 4 }))]
    fn test_try_from_slice(
        #[case] input: &[i32],
        #[case] expected: Result<[i32; 3], CapacityMismatch>,
    ) {
        let result = FixedStorage::<i32, 3>::try_from_slice(input).map(FixedStorage::into_array);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_try_from_iter_too_long_stops_early() {
        let mut pulled = 0;
        let iter = (0..100).inspect(|_| pulled += 1);
        let result = FixedStorage::<i32, 4>::try_from_iter(iter);
        assert_eq!(
            result,
            Err(CapacityMismatch {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(pulled, 5);
    }

    #[rstest]
    fn test_try_from_iter_too_short() {
        let result = FixedStorage::<i32, 4>::try_from_iter([7, 8]);
        assert_eq!(
            result,
            Err(CapacityMismatch {
                expected: 4,
                actual: 2
            })
        );
    }

    #[rstest]
    fn test_reverse_iteration() {
        let storage = FixedStorage::new(['a', 'b', 'c']);
        let reversed: String = storage.iter().rev().collect();
        assert_eq!(reversed, "cba");
    }
}
