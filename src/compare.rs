//! Ordering predicates used to sort and search frozen sets.
//!
//! A [`Comparator`] answers a single question: is `left` strictly ordered
//! before `right`? Two keys for which neither is ordered before the other
//! are treated as the same key by every lookup.
//!
//! The comparator is stored by value inside each set and invoked on every
//! comparison during construction and lookup. Implementations must be pure
//! (no observable side effects) and cheap to call.
//!
//! # Examples
//!
//! ```rust
//! use frozen_lookup::compare::{Comparator, Descending, Natural};
//!
//! assert!(Natural.less(&1, &2));
//! assert!(Descending.less(&2, &1));
//!
//! let by_length = |left: &&str, right: &&str| left.len() < right.len();
//! assert!(by_length.less(&"ab", &"abc"));
//! ```

/// A strict weak ordering over keys of type `K`.
///
/// `less(a, b)` must be irreflexive and transitive, and incomparability
/// must be transitive as well. Violating this contract does not cause
/// memory unsafety, but lookups may then miss keys that are present.
pub trait Comparator<K: ?Sized> {
    /// Returns `true` if `left` is strictly ordered before `right`.
    fn less(&self, left: &K, right: &K) -> bool;

    /// Returns `true` if neither key is ordered before the other.
    #[inline]
    fn equivalent(&self, left: &K, right: &K) -> bool {
        !self.less(left, right) && !self.less(right, left)
    }
}

/// The natural (`Ord`) ordering of the key type.
///
/// This is the default comparator of [`FrozenSet`](crate::FrozenSet) and
/// [`EmptySet`](crate::EmptySet), and the only one available to the
/// `const` constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        left < right
    }
}

/// The reverse of the natural ordering.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::FrozenSet;
/// use frozen_lookup::compare::Descending;
///
/// let set = FrozenSet::with_comparator([1, 3, 2], Descending);
/// assert_eq!(set.as_slice(), &[3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Descending;

impl<K: Ord + ?Sized> Comparator<K> for Descending {
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        right < left
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, left: &K, right: &K) -> bool {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, true)]
    #[case(2, 1, false)]
    #[case(2, 2, false)]
    fn test_natural_less(#[case] left: i32, #[case] right: i32, #[case] expected: bool) {
        assert_eq!(Natural.less(&left, &right), expected);
    }

    #[rstest]
    #[case(1, 2, false)]
    #[case(2, 1, true)]
    #[case(2, 2, false)]
    fn test_descending_less(#[case] left: i32, #[case] right: i32, #[case] expected: bool) {
        assert_eq!(Descending.less(&left, &right), expected);
    }

    #[rstest]
    fn test_closure_comparator() {
        let by_absolute = |left: &i32, right: &i32| left.abs() < right.abs();
        assert!(by_absolute.less(&1, &-2));
        assert!(by_absolute.equivalent(&-3, &3));
    }

    #[rstest]
    fn test_natural_on_unsized_keys() {
        assert!(Comparator::<str>::less(&Natural, "apple", "banana"));
        assert!(Comparator::<str>::equivalent(&Natural, "pear", "pear"));
    }
}
