//! Immutable fixed-capacity sorted sets.
//!
//! - [`FrozenSet`]: `N` keys, sorted once at construction
//! - [`EmptySet`]: the zero-key specialization, holding only a comparator
//! - [`SortedLookup`]: the query surface both of them implement
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity             |
//! |----------------------------|------------------------|
//! | construction               | O(n log n) average     |
//! | `len` / `is_empty` / `capacity` | O(1)              |
//! | `lower_bound` / `find`     | O(log n)               |
//! | `count` / `contains`       | O(log n)               |
//! | `upper_bound` / `equal_range` | O(log n)            |
//! | `iter`                     | O(1) + O(n)            |
//!
//! Every query on [`EmptySet`] is O(1) and never calls the comparator.
//!
//! # Construction regimes
//!
//! A set can be built by the compiler, for `const` and `static` items, or
//! at runtime, for example lazily behind [`std::sync::LazyLock`]. Both
//! regimes run the same partition sort, so they yield the same layout.
//!
//! ```rust
//! use frozen_lookup::FrozenSet;
//! use std::sync::LazyLock;
//!
//! static OPCODES: FrozenSet<u8, 4> = FrozenSet::<u8, 4>::from_array_const([0x90, 0x0f, 0xc3, 0x55]);
//!
//! static COMMANDS: LazyLock<FrozenSet<String, 3>> = LazyLock::new(|| {
//!     FrozenSet::new(["stop".to_string(), "go".to_string(), "wait".to_string()])
//! });
//!
//! assert_eq!(OPCODES.as_slice(), &[0x0f, 0x55, 0x90, 0xc3]);
//! assert!(COMMANDS.contains(&"wait".to_string()));
//! ```

mod constant;
mod empty;
mod iter;
mod lookup;

pub use empty::EmptySet;
pub use iter::FrozenSetIntoIterator;
pub use iter::FrozenSetIterator;
pub use lookup::SortedLookup;

use std::ops::Range;

use crate::algorithms;
use crate::compare::{Comparator, Natural};
use crate::error::CapacityMismatch;
use crate::instrument;
use crate::storage::FixedStorage;

/// An immutable set of exactly `N` keys, sorted by `C` at construction.
///
/// Lookups are binary searches over inline storage; nothing is allocated
/// and nothing can be inserted or removed after construction. Duplicate
/// keys are accepted, but each lookup reaches at most one of them, and
/// which one is unspecified.
///
/// # Type Parameters
///
/// * `K` - The key type
/// * `N` - The number of keys, fixed by the type
/// * `C` - The [`Comparator`], [`Natural`] ordering by default
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::FrozenSet;
///
/// let set = FrozenSet::new([5, 3, 1, 4, 2]);
/// assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5]);
///
/// assert_eq!(set.find(&3), Some(2));
/// assert_eq!(set.find(&6), None);
/// assert_eq!(set.count(&4), 1);
/// assert_eq!(set.lower_bound(&0), 0);
/// assert_eq!(set.upper_bound(&5), set.len());
///
/// let descending: Vec<i32> = set.iter().rev().copied().collect();
/// assert_eq!(descending, vec![5, 4, 3, 2, 1]);
/// ```
#[derive(Clone, Copy)]
pub struct FrozenSet<K, const N: usize, C = Natural> {
    storage: FixedStorage<K, N>,
    compare: C,
}

static_assertions::assert_impl_all!(FrozenSet<&'static str, 4>: Send, Sync, Copy);
static_assertions::assert_impl_all!(FrozenSet<String, 4>: Send, Sync, Clone);

impl<K, const N: usize, C> FrozenSet<K, N, C> {
    /// Returns the number of keys, always `N`.
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

    /// Returns the maximum number of keys, always `N`.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the keys in sorted order.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[K] {
        self.storage.as_slice()
    }

    /// Returns the sorted backing storage.
    #[inline]
    #[must_use]
    pub const fn storage(&self) -> &FixedStorage<K, N> {
        &self.storage
    }

    /// Returns the comparator the keys were sorted with.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the key at sorted position `index`.
    #[inline]
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&K> {
        self.storage.get(index)
    }

    /// Returns the smallest key, or `None` if `N == 0`.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.as_slice().first()
    }

    /// Returns the largest key, or `None` if `N == 0`.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.as_slice().last()
    }

    /// Returns an iterator over the keys in sorted order.
    ///
    /// The iterator is double-ended: use `iter().rev()` for descending
    /// order.
    #[inline]
    pub fn iter(&self) -> FrozenSetIterator<'_, K> {
        FrozenSetIterator::new(self.as_slice())
    }

    /// Consumes the set, returning its sorted storage.
    #[inline]
    #[must_use]
    pub fn into_storage(self) -> FixedStorage<K, N> {
        self.storage
    }

    /// Consumes the set, returning its sorted storage and comparator.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (FixedStorage<K, N>, C) {
        (self.storage, self.compare)
    }
}

impl<K: Ord, const N: usize> FrozenSet<K, N, Natural> {
    /// Creates a set from `N` keys using their natural ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_lookup::FrozenSet;
    ///
    /// let set = FrozenSet::new(["b", "a", "c"]);
    /// assert_eq!(set.first(), Some(&"a"));
    /// ```
    #[must_use]
    pub fn new(keys: [K; N]) -> Self {
        Self::with_comparator(keys, Natural)
    }

    /// Creates a set from a slice that must hold exactly `N` keys.
    ///
    /// # Panics
    ///
    /// Panics if `keys.len() != N`. Use [`try_from_slice`](Self::try_from_slice)
    /// when the length is not known to be right.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use frozen_lookup::FrozenSet;
    ///
    /// // Four keys for a capacity of five: construction aborts.
    /// let _ = FrozenSet::<i32, 5>::from_slice(&[1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn from_slice(keys: &[K]) -> Self
    where
        K: Clone,
    {
        Self::from_slice_with_comparator(keys, Natural)
    }

    /// Creates a set from a slice, failing if it does not hold exactly
    /// `N` keys.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityMismatch`] if `keys.len() != N`.
    pub fn try_from_slice(keys: &[K]) -> Result<Self, CapacityMismatch>
    where
        K: Clone,
    {
        Self::try_from_slice_with_comparator(keys, Natural)
    }

    /// Creates a set from an iterator, failing unless it yields exactly
    /// `N` keys. Keys are buffered inline; nothing is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityMismatch`] if the iterator yields fewer or more
    /// than `N` keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_lookup::FrozenSet;
    ///
    /// let set = FrozenSet::<u32, 3>::try_from_iter((1..=3).rev()).unwrap();
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    ///
    /// assert!(FrozenSet::<u32, 3>::try_from_iter(1..=4).is_err());
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, CapacityMismatch>
    where
        I: IntoIterator<Item = K>,
    {
        Self::try_from_iter_with_comparator(iter, Natural)
    }
}

impl<K, const N: usize, C: Comparator<K>> FrozenSet<K, N, C> {
    /// Creates a set from `N` keys sorted by `compare`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_lookup::FrozenSet;
    ///
    /// let by_length = |left: &&str, right: &&str| left.len() < right.len();
    /// let set = FrozenSet::with_comparator(["three", "a", "to"], by_length);
    /// assert_eq!(set.as_slice(), &["a", "to", "three"]);
    /// assert!(set.contains(&"xy"));
    /// ```
    #[must_use]
    pub fn with_comparator(keys: [K; N], compare: C) -> Self {
        Self::from_storage(FixedStorage::new(keys), compare)
    }

    /// Creates a set from unsorted storage, sorting it by `compare`.
    #[must_use]
    pub fn from_storage(storage: FixedStorage<K, N>, compare: C) -> Self {
        let storage = algorithms::sort_storage(storage, &compare);
        instrument::constructed::<K>(N);
        Self { storage, compare }
    }

    /// Creates a set from a slice of exactly `N` keys sorted by `compare`.
    ///
    /// # Panics
    ///
    /// Panics if `keys.len() != N`.
    #[must_use]
    pub fn from_slice_with_comparator(keys: &[K], compare: C) -> Self
    where
        K: Clone,
    {
        match Self::try_from_slice_with_comparator(keys, compare) {
            Ok(set) => set,
            Err(error) => panic!("{error}"),
        }
    }

    /// Fallible form of [`from_slice_with_comparator`](Self::from_slice_with_comparator).
    ///
    /// # Errors
    ///
    /// Returns [`CapacityMismatch`] if `keys.len() != N`.
    pub fn try_from_slice_with_comparator(
        keys: &[K],
        compare: C,
    ) -> Result<Self, CapacityMismatch>
    where
        K: Clone,
    {
        let storage = FixedStorage::try_from_slice(keys).inspect_err(instrument::rejected::<K>)?;
        Ok(Self::from_storage(storage, compare))
    }

    /// Fallible construction from an iterator of exactly `N` keys.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityMismatch`] if the iterator yields fewer or more
    /// than `N` keys.
    pub fn try_from_iter_with_comparator<I>(iter: I, compare: C) -> Result<Self, CapacityMismatch>
    where
        I: IntoIterator<Item = K>,
    {
        let storage = FixedStorage::try_from_iter(iter).inspect_err(instrument::rejected::<K>)?;
        Ok(Self::from_storage(storage, compare))
    }

    /// Returns the position of the first key not ordered before `key`, or
    /// `len()` if every key is ordered before it.
    ///
    /// # Complexity
    ///
    /// At most `ceil(log2(N + 1))` comparator calls.
    #[inline]
    pub fn lower_bound(&self, key: &K) -> usize {
        algorithms::lower_bound(self.as_slice(), key, &self.compare)
    }

    /// Returns the position of a key equivalent to `key`, or `None`.
    #[inline]
    pub fn find(&self, key: &K) -> Option<usize> {
        algorithms::find(self.as_slice(), key, &self.compare)
    }

    /// Returns the stored key equivalent to `key`, or `None`.
    ///
    /// Useful when equivalence is coarser than equality, for instance
    /// with a comparator that looks at one field only.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).and_then(|position| self.storage.get(position))
    }

    /// Returns `true` if a key equivalent to `key` is stored.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns `1` if a key equivalent to `key` is stored, else `0`.
    ///
    /// Duplicates are never counted twice.
    #[inline]
    pub fn count(&self, key: &K) -> usize {
        algorithms::count(self.as_slice(), key, &self.compare)
    }

    /// Returns one past the position of `key`, or `len()` if absent.
    #[inline]
    pub fn upper_bound(&self, key: &K) -> usize {
        algorithms::upper_bound(self.as_slice(), key, &self.compare)
    }

    /// Returns `position..position + 1` if `key` is stored, else
    /// `len()..len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen_lookup::FrozenSet;
    ///
    /// let set = FrozenSet::new([2, 2, 1]);
    /// assert_eq!(set.equal_range(&2).len(), 1);
    /// assert_eq!(set.equal_range(&9), 3..3);
    /// ```
    #[inline]
    pub fn equal_range(&self, key: &K) -> Range<usize> {
        algorithms::equal_range(self.as_slice(), key, &self.compare)
    }
}

impl<K, C> FrozenSet<K, 0, C> {
    /// Converts a zero-key set into the [`EmptySet`] specialization.
    #[must_use]
    pub fn into_empty(self) -> EmptySet<K, C> {
        EmptySet::with_comparator(self.compare)
    }
}

impl<K, C> From<EmptySet<K, C>> for FrozenSet<K, 0, C> {
    fn from(empty: EmptySet<K, C>) -> Self {
        Self {
            storage: FixedStorage::new([]),
            compare: empty.into_comparator(),
        }
    }
}

impl<K, const N: usize, C: Comparator<K>> SortedLookup<K> for FrozenSet<K, N, C> {
    #[inline]
    fn as_slice(&self) -> &[K] {
        Self::as_slice(self)
    }

    #[inline]
    fn lower_bound(&self, key: &K) -> usize {
        Self::lower_bound(self, key)
    }

    #[inline]
    fn find(&self, key: &K) -> Option<usize> {
        Self::find(self, key)
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for FrozenSet<K, N, Natural> {
    fn from(keys: [K; N]) -> Self {
        Self::new(keys)
    }
}

impl<K: Ord + Clone, const N: usize> TryFrom<&[K]> for FrozenSet<K, N, Natural> {
    type Error = CapacityMismatch;

    fn try_from(keys: &[K]) -> Result<Self, Self::Error> {
        Self::try_from_slice(keys)
    }
}

impl<K: std::fmt::Debug, const N: usize, C> std::fmt::Debug for FrozenSet<K, N, C> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, const N: usize, C> PartialEq for FrozenSet<K, N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<K: Eq, const N: usize, C> Eq for FrozenSet<K, N, C> {}

impl<K: std::hash::Hash, const N: usize, C> std::hash::Hash for FrozenSet<K, N, C> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<K, const N: usize, C> AsRef<[K]> for FrozenSet<K, N, C> {
    #[inline]
    fn as_ref(&self) -> &[K] {
        self.as_slice()
    }
}

impl<'a, K, const N: usize, C> IntoIterator for &'a FrozenSet<K, N, C> {
    type Item = &'a K;
    type IntoIter = FrozenSetIterator<'a, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, const N: usize, C> IntoIterator for FrozenSet<K, N, C> {
    type Item = K;
    type IntoIter = FrozenSetIntoIterator<K, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        FrozenSetIntoIterator::new(self.storage.into_array())
    }
}

#[cfg(feature = "serde")]
impl<K, const N: usize, C> serde::Serialize for FrozenSet<K, N, C>
where
    K: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct FrozenSetVisitor<K, const N: usize, C> {
    marker: std::marker::PhantomData<fn() -> (K, C)>,
}

#[cfg(feature = "serde")]
impl<K, const N: usize, C> FrozenSetVisitor<K, N, C> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, const N: usize, C> serde::de::Visitor<'de> for FrozenSetVisitor<K, N, C>
where
    K: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    type Value = FrozenSet<K, N, C>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a sequence of exactly {N} keys")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Keys are buffered inline, so a hostile length hint cannot allocate.
        let mut buffer: arrayvec::ArrayVec<K, N> = arrayvec::ArrayVec::new();
        while let Some(key) = access.next_element()? {
            if buffer.try_push(key).is_err() {
                let mut surplus = 1;
                while access.next_element::<serde::de::IgnoredAny>()?.is_some() {
                    surplus += 1;
                }
                return Err(serde::de::Error::invalid_length(N + surplus, &self));
            }
        }

        let actual = buffer.len();
        let keys = buffer
            .into_inner()
            .map_err(|_| serde::de::Error::invalid_length(actual, &self))?;
        Ok(FrozenSet::with_comparator(keys, C::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, const N: usize, C> serde::Deserialize<'de> for FrozenSet<K, N, C>
where
    K: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(FrozenSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
