//! Binary-search query engine over sorted keys.
//!
//! Every function assumes `keys` is sorted under `compare`; on unsorted
//! input the results are unspecified but memory safe. Positions are
//! indices into `keys`, with `keys.len()` acting as the end position.

use std::ops::Range;

use crate::compare::Comparator;

/// Returns the index of the first key not ordered before `key`, or
/// `keys.len()` if every key is ordered before it.
///
/// Performs at most `ceil(log2(keys.len() + 1))` comparator calls and
/// none at all on an empty slice.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::algorithms::lower_bound;
/// use frozen_lookup::compare::Natural;
///
/// let keys = [10, 20, 30];
/// assert_eq!(lower_bound(&keys, &5, &Natural), 0);
/// assert_eq!(lower_bound(&keys, &20, &Natural), 1);
/// assert_eq!(lower_bound(&keys, &25, &Natural), 2);
/// assert_eq!(lower_bound(&keys, &99, &Natural), 3);
/// ```
pub fn lower_bound<K, C>(keys: &[K], key: &K, compare: &C) -> usize
where
    C: Comparator<K> + ?Sized,
{
    let mut low = 0;
    let mut remaining = keys.len();

    while remaining > 0 {
        let half = remaining / 2;
        let middle = low + half;
        if compare.less(&keys[middle], key) {
            low = middle + 1;
            remaining -= half + 1;
        } else {
            remaining = half;
        }
    }
    low
}

/// Returns the index of a key equivalent to `key`, or `None`.
///
/// When several equivalent keys are stored, the first one in sorted order
/// is returned. Which of the original duplicates that is depends on the
/// (unstable) construction sort.
pub fn find<K, C>(keys: &[K], key: &K, compare: &C) -> Option<usize>
where
    C: Comparator<K> + ?Sized,
{
    let position = lower_bound(keys, key, compare);
    keys.get(position)
        .filter(|candidate| !compare.less(key, candidate))
        .map(|_| position)
}

/// Returns `1` if a key equivalent to `key` is stored, else `0`.
///
/// Duplicates are never counted more than once.
pub fn count<K, C>(keys: &[K], key: &K, compare: &C) -> usize
where
    C: Comparator<K> + ?Sized,
{
    usize::from(find(keys, key, compare).is_some())
}

/// Returns one past the position of the found key, or `keys.len()` if
/// `key` is not stored.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::algorithms::upper_bound;
/// use frozen_lookup::compare::Natural;
///
/// let keys = [10, 20, 30];
/// assert_eq!(upper_bound(&keys, &20, &Natural), 2);
/// assert_eq!(upper_bound(&keys, &15, &Natural), 3);
/// ```
pub fn upper_bound<K, C>(keys: &[K], key: &K, compare: &C) -> usize
where
    C: Comparator<K> + ?Sized,
{
    find(keys, key, compare).map_or(keys.len(), |position| position + 1)
}

/// Returns the window of positions holding `key`.
///
/// The window is `position..position + 1` when found and
/// `keys.len()..keys.len()` otherwise; it never spans more than one key,
/// even if equivalent duplicates are stored.
pub fn equal_range<K, C>(keys: &[K], key: &K, compare: &C) -> Range<usize>
where
    C: Comparator<K> + ?Sized,
{
    find(keys, key, compare).map_or(keys.len()..keys.len(), |position| {
        position..position + 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Descending, Natural};
    use rstest::rstest;
    use std::cell::Cell;

    struct Counting<'a>(&'a Cell<usize>);

    impl Comparator<i32> for Counting<'_> {
        fn less(&self, left: &i32, right: &i32) -> bool {
            self.0.set(self.0.get() + 1);
            left < right
        }
    }

    const KEYS: [i32; 5] = [1, 2, 3, 4, 5];

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(3, 2)]
    #[case(5, 4)]
    #[case(6, 5)]
    fn test_lower_bound(#[case] key: i32, #[case] expected: usize) {
        assert_eq!(lower_bound(&KEYS, &key, &Natural), expected);
    }

    #[rstest]
    #[case(3, Some(2))]
    #[case(6, None)]
    #[case(0, None)]
    fn test_find(#[case] key: i32, #[case] expected: Option<usize>) {
        assert_eq!(find(&KEYS, &key, &Natural), expected);
    }

    #[rstest]
    fn test_find_between_keys_misses() {
        let keys = [10, 20, 30];
        assert_eq!(find(&keys, &25, &Natural), None);
        assert_eq!(count(&keys, &25, &Natural), 0);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(5, 5)]
    #[case(9, 5)]
    fn test_upper_bound(#[case] key: i32, #[case] expected: usize) {
        assert_eq!(upper_bound(&KEYS, &key, &Natural), expected);
    }

    #[rstest]
    fn test_equal_range_caps_duplicates_at_one() {
        let keys = [1, 2, 2, 2, 3];
        assert_eq!(equal_range(&keys, &2, &Natural), 1..2);
        assert_eq!(count(&keys, &2, &Natural), 1);
        assert_eq!(equal_range(&keys, &7, &Natural), 5..5);
    }

    #[rstest]
    fn test_descending_order_search() {
        let keys = [9, 7, 4, 1];
        assert_eq!(find(&keys, &4, &Descending), Some(2));
        assert_eq!(lower_bound(&keys, &8, &Descending), 1);
        assert_eq!(lower_bound(&keys, &0, &Descending), 4);
    }

    #[rstest]
    fn test_empty_slice_never_calls_comparator() {
        let calls = Cell::new(0);
        let keys: [i32; 0] = [];
        assert_eq!(lower_bound(&keys, &1, &Counting(&calls)), 0);
        assert_eq!(find(&keys, &1, &Counting(&calls)), None);
        assert_eq!(equal_range(&keys, &1, &Counting(&calls)), 0..0);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    #[case(8)]
    #[case(100)]
    #[case(1023)]
    #[case(1024)]
    fn test_lower_bound_comparison_budget(#[case] size: i32) {
        let keys: Vec<i32> = (0..size).collect();
        let budget = (usize::BITS - keys.len().leading_zeros()) as usize;

        for key in -1..=size {
            let calls = Cell::new(0);
            lower_bound(&keys, &key, &Counting(&calls));
            assert!(
                calls.get() <= budget,
                "size {size}, key {key}: {} calls exceeds {budget}",
                calls.get()
            );
        }
    }
}
