//! The query surface shared by [`FrozenSet`](super::FrozenSet) and
//! [`EmptySet`](super::EmptySet).

use std::ops::Range;

/// Read-only lookups over keys held in sorted order.
///
/// Implemented by both the general set and the empty specialization, so
/// code that only queries a table can accept either. Positions are
/// indices into [`as_slice`](Self::as_slice); `len()` is the end position.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::{frozen_set, SortedLookup};
///
/// fn is_reserved<S: SortedLookup<&'static str>>(table: &S, word: &'static str) -> bool {
///     table.contains(&word)
/// }
///
/// assert!(is_reserved(&frozen_set!["fn", "let"], "let"));
/// assert!(!is_reserved(&frozen_set![], "let"));
/// ```
pub trait SortedLookup<K> {
    /// Returns the stored keys in sorted order.
    fn as_slice(&self) -> &[K];

    /// Returns the index of the first key not ordered before `key`, or
    /// `len()` if there is none.
    fn lower_bound(&self, key: &K) -> usize;

    /// Returns the index of a key equivalent to `key`, or `None`.
    fn find(&self, key: &K) -> Option<usize>;

    /// Returns the fixed number of keys.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns the maximum number of keys, which is always `len()`.
    fn capacity(&self) -> usize {
        self.len()
    }

    /// Returns `true` if no keys are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the stored key equivalent to `key`, or `None`.
    fn get(&self, key: &K) -> Option<&K> {
        self.find(key)
            .and_then(|position| self.as_slice().get(position))
    }

    /// Returns `true` if a key equivalent to `key` is stored.
    fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns `1` if a key equivalent to `key` is stored, else `0`.
    fn count(&self, key: &K) -> usize {
        usize::from(self.contains(key))
    }

    /// Returns one past the position of `key`, or `len()` if absent.
    fn upper_bound(&self, key: &K) -> usize {
        self.find(key)
            .map_or(self.len(), |position| position + 1)
    }

    /// Returns `position..position + 1` if `key` is stored, else
    /// `len()..len()`.
    fn equal_range(&self, key: &K) -> Range<usize> {
        let end = self.len();
        self.find(key)
            .map_or(end..end, |position| position..position + 1)
    }
}
