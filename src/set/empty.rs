//! The zero-key specialization of [`FrozenSet`](super::FrozenSet).

use std::marker::PhantomData;
use std::ops::Range;

use super::iter::{FrozenSetIntoIterator, FrozenSetIterator};
use super::lookup::SortedLookup;
use crate::compare::Natural;
use crate::error::CapacityMismatch;

/// A permanently empty set.
///
/// Holds no storage at all, only the comparator, so that it offers the
/// same observers as a non-empty set. Every query answers "not found" in
/// constant time without calling the comparator. [`frozen_set!`](crate::frozen_set)
/// produces this type when invoked with no keys.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::EmptySet;
///
/// const NOTHING: EmptySet<u32> = EmptySet::new();
///
/// assert!(NOTHING.is_empty());
/// assert_eq!(NOTHING.find(&7), None);
/// assert_eq!(NOTHING.count(&7), 0);
/// assert_eq!(NOTHING.equal_range(&7), 0..0);
/// assert_eq!(NOTHING.iter().next(), None);
/// ```
pub struct EmptySet<K, C = Natural> {
    compare: C,
    marker: PhantomData<fn() -> K>,
}

static_assertions::assert_impl_all!(EmptySet<std::rc::Rc<u8>>: Send, Sync, Copy);

impl<K> EmptySet<K, Natural> {
    /// Creates an empty set with the natural ordering.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty set from an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityMismatch`] if `keys` is not empty.
    pub const fn try_from_slice(keys: &[K]) -> Result<Self, CapacityMismatch> {
        if keys.is_empty() {
            Ok(Self::new())
        } else {
            Err(CapacityMismatch {
                expected: 0,
                actual: keys.len(),
            })
        }
    }
}

impl<K, C> EmptySet<K, C> {
    /// Creates an empty set holding `compare`.
    #[inline]
    #[must_use]
    pub const fn with_comparator(compare: C) -> Self {
        Self {
            compare,
            marker: PhantomData,
        }
    }

    /// Always `0`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        0
    }

    /// Always `true`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// Always `0`.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        0
    }

    /// Always the empty slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[K] {
        &[]
    }

    /// Returns the comparator.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Consumes the set, returning its comparator.
    #[inline]
    #[must_use]
    pub fn into_comparator(self) -> C {
        self.compare
    }

    /// Always `0`, the end position.
    #[inline]
    #[must_use]
    pub const fn lower_bound(&self, _key: &K) -> usize {
        0
    }

    /// Always `0`, the end position.
    #[inline]
    #[must_use]
    pub const fn upper_bound(&self, _key: &K) -> usize {
        0
    }

    /// Always `None`.
    #[inline]
    #[must_use]
    pub const fn find(&self, _key: &K) -> Option<usize> {
        None
    }

    /// Always `None`.
    #[inline]
    #[must_use]
    pub const fn get(&self, _key: &K) -> Option<&K> {
        None
    }

    /// Always `false`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, _key: &K) -> bool {
        false
    }

    /// Always `0`.
    #[inline]
    #[must_use]
    pub const fn count(&self, _key: &K) -> usize {
        0
    }

    /// Always `0..0`.
    #[inline]
    #[must_use]
    pub const fn equal_range(&self, _key: &K) -> Range<usize> {
        0..0
    }

    /// Returns an iterator that is already exhausted.
    #[inline]
    pub fn iter(&self) -> FrozenSetIterator<'_, K> {
        FrozenSetIterator::new(&[])
    }
}

impl<K, C> SortedLookup<K> for EmptySet<K, C> {
    #[inline]
    fn as_slice(&self) -> &[K] {
        &[]
    }

    #[inline]
    fn lower_bound(&self, _key: &K) -> usize {
        0
    }

    #[inline]
    fn find(&self, _key: &K) -> Option<usize> {
        None
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }
}

impl<K, C: Clone> Clone for EmptySet<K, C> {
    fn clone(&self) -> Self {
        Self::with_comparator(self.compare.clone())
    }
}

impl<K, C: Copy> Copy for EmptySet<K, C> {}

impl<K, C: Default> Default for EmptySet<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C> std::fmt::Debug for EmptySet<K, C> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("{}")
    }
}

impl<K, C> PartialEq for EmptySet<K, C> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<K, C> Eq for EmptySet<K, C> {}

impl<K, C> std::hash::Hash for EmptySet<K, C> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(0);
    }
}

impl<'a, K, C> IntoIterator for &'a EmptySet<K, C> {
    type Item = &'a K;
    type IntoIter = FrozenSetIterator<'a, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> IntoIterator for EmptySet<K, C> {
    type Item = K;
    type IntoIter = FrozenSetIntoIterator<K, 0>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        FrozenSetIntoIterator::new([])
    }
}

#[cfg(feature = "serde")]
impl<K, C> serde::Serialize for EmptySet<K, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        serializer.serialize_seq(Some(0))?.end()
    }
}

#[cfg(feature = "serde")]
struct EmptySetVisitor<K, C> {
    marker: PhantomData<fn() -> (K, C)>,
}

#[cfg(feature = "serde")]
impl<'de, K, C: Default> serde::de::Visitor<'de> for EmptySetVisitor<K, C> {
    type Value = EmptySet<K, C>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an empty sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut surplus = 0;
        while access.next_element::<serde::de::IgnoredAny>()?.is_some() {
            surplus += 1;
        }
        if surplus == 0 {
            Ok(EmptySet::default())
        } else {
            Err(serde::de::Error::invalid_length(surplus, &self))
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, C: Default> serde::Deserialize<'de> for EmptySet<K, C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(EmptySetVisitor {
            marker: PhantomData,
        })
    }
}
