//! Construction-time sort engine.

use crate::compare::Comparator;
use crate::storage::FixedStorage;

/// Sorts `keys` in place under `compare`.
///
/// Partition sort with the middle element as pivot: keys ordered before
/// the pivot move left, all others move right, and each side is sorted
/// independently until it holds at most one key. The smaller side is
/// handled recursively and the larger one in the loop, so stack depth
/// stays logarithmic in `keys.len()`.
///
/// The sort is not stable: the relative order of equivalent keys is
/// unspecified. No memory is allocated.
///
/// # Complexity
///
/// O(n log n) comparisons on average, O(n^2) in the worst case (for
/// example many equivalent keys). Tables this engine targets are small.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::algorithms::quicksort;
/// use frozen_lookup::compare::Descending;
///
/// let mut keys = ["b", "c", "a"];
/// quicksort(&mut keys, &Descending);
/// assert_eq!(keys, ["c", "b", "a"]);
/// ```
pub fn quicksort<K, C>(keys: &mut [K], compare: &C)
where
    C: Comparator<K> + ?Sized,
{
    let len = keys.len();
    sort_range(keys, 0, len, compare);
}

/// Consumes `storage` and returns it sorted under `compare`.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::algorithms::sort_storage;
/// use frozen_lookup::compare::Natural;
/// use frozen_lookup::storage::FixedStorage;
///
/// let sorted = sort_storage(FixedStorage::new([3, 1, 2]), &Natural);
/// assert_eq!(sorted.as_slice(), &[1, 2, 3]);
/// ```
#[must_use]
pub fn sort_storage<K, C, const N: usize>(
    mut storage: FixedStorage<K, N>,
    compare: &C,
) -> FixedStorage<K, N>
where
    C: Comparator<K> + ?Sized,
{
    quicksort(storage.as_mut_slice(), compare);
    storage
}

/// Sorts the half-open index range `[low, high)`.
fn sort_range<K, C>(keys: &mut [K], mut low: usize, mut high: usize, compare: &C)
where
    C: Comparator<K> + ?Sized,
{
    while high - low > 1 {
        let pivot = partition(keys, low, high, compare);
        if pivot - low < high - pivot - 1 {
            sort_range(keys, low, pivot, compare);
            low = pivot + 1;
        } else {
            sort_range(keys, pivot + 1, high, compare);
            high = pivot;
        }
    }
}

/// Partitions `[low, high)` around its middle key and returns the pivot's
/// final index. Requires `high - low >= 2`.
fn partition<K, C>(keys: &mut [K], low: usize, high: usize, compare: &C) -> usize
where
    C: Comparator<K> + ?Sized,
{
    let last = high - 1;
    keys.swap(low + (high - low) / 2, last);

    let mut store = low;
    for index in low..last {
        if compare.less(&keys[index], &keys[last]) {
            keys.swap(index, store);
            store += 1;
        }
    }
    keys.swap(store, last);
    store
}
