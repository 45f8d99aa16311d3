//! `const fn` versions of the sort and search engines.
//!
//! Trait methods cannot run during const evaluation, so the generic
//! engines cannot build a `const` or `static` set. This module generates
//! the same partition sort and binary search for every key type with a
//! builtin total order, plus `&'static str` (byte-wise lexicographic,
//! which is exactly `str`'s `Ord`). All of them use the natural ordering.
//!
//! For each supported type `T` with suffix `t` (`u8`, `i64`, `char`,
//! `str`, ...) the following functions exist:
//!
//! - `sort_t::<N>(keys: [T; N]) -> [T; N]`
//! - `copy_t::<N>(keys: &[T]) -> [T; N]`, panicking on a length mismatch
//! - `lower_bound_t(keys: &[T], key: T) -> usize`
//! - `contains_t(keys: &[T], key: T) -> bool`
//!
//! # Examples
//!
//! ```rust
//! use frozen_lookup::algorithms::constant::{contains_str, sort_str};
//!
//! const KEYWORDS: [&str; 4] = sort_str(["let", "fn", "mut", "else"]);
//!
//! assert_eq!(KEYWORDS, ["else", "fn", "let", "mut"]);
//! const HAS_FN: bool = contains_str(&KEYWORDS, "fn");
//! assert!(HAS_FN);
//! ```
//!
//! A length mismatch in `copy_*` fails const evaluation:
//!
//! ```rust,compile_fail
//! use frozen_lookup::algorithms::constant::copy_u8;
//!
//! const KEYS: [u8; 5] = copy_u8(&[1, 2, 3, 4]);
//! assert_eq!(KEYS.len(), 5);
//! ```

/// Generates the const sort and search functions for one key type.
macro_rules! const_engine {
    ($($key:ty => $name:ident, $filler:expr);* $(;)?) => {
        paste::paste! { $(
            #[doc = concat!("Sorts `", stringify!($key), "` keys in const evaluation.")]
            #[must_use]
            pub const fn [<sort_ $name>]<const N: usize>(mut keys: [$key; N]) -> [$key; N] {
                [<sort_range_ $name>](&mut keys, 0, N);
                keys
            }

            #[doc = concat!(
                "Copies exactly `N` `", stringify!($key), "` keys out of a slice.\n\n",
                "# Panics\n\nPanics (or fails const evaluation) if `keys.len() != N`."
            )]
            #[must_use]
            pub const fn [<copy_ $name>]<const N: usize>(keys: &[$key]) -> [$key; N] {
                assert!(
                    keys.len() == N,
                    "inconsistent key count: slice length differs from set capacity"
                );
                let mut copied = [$filler; N];
                let mut index = 0;
                while index < N {
                    copied[index] = keys[index];
                    index += 1;
                }
                copied
            }

            #[doc = concat!(
                "Index of the first `", stringify!($key),
                "` key not less than `key`, or `keys.len()`."
            )]
            #[must_use]
            pub const fn [<lower_bound_ $name>](keys: &[$key], key: $key) -> usize {
                let mut low = 0;
                let mut remaining = keys.len();
                while remaining > 0 {
                    let half = remaining / 2;
                    let middle = low + half;
                    if [<less_ $name>](keys[middle], key) {
                        low = middle + 1;
                        remaining -= half + 1;
                    } else {
                        remaining = half;
                    }
                }
                low
            }

            #[doc = concat!("Returns `true` if sorted `", stringify!($key), "` keys contain `key`.")]
            #[must_use]
            pub const fn [<contains_ $name>](keys: &[$key], key: $key) -> bool {
                let position = [<lower_bound_ $name>](keys, key);
                position < keys.len() && ![<less_ $name>](key, keys[position])
            }

            const fn [<sort_range_ $name>](keys: &mut [$key], mut low: usize, mut high: usize) {
                while high - low > 1 {
                    let pivot = [<partition_ $name>](keys, low, high);
                    if pivot - low < high - pivot - 1 {
                        [<sort_range_ $name>](keys, low, pivot);
                        low = pivot + 1;
                    } else {
                        [<sort_range_ $name>](keys, pivot + 1, high);
                        high = pivot;
                    }
                }
            }

            const fn [<partition_ $name>](keys: &mut [$key], low: usize, high: usize) -> usize {
                let last = high - 1;
                keys.swap(low + (high - low) / 2, last);

                let mut store = low;
                let mut index = low;
                while index < last {
                    if [<less_ $name>](keys[index], keys[last]) {
                        keys.swap(index, store);
                        store += 1;
                    }
                    index += 1;
                }
                keys.swap(store, last);
                store
            }
        )* }
    };
}

/// Generates `less_*` for key types whose `<` is a builtin operator.
macro_rules! primitive_less {
    ($($key:ty => $name:ident),* $(,)?) => {
        paste::paste! { $(
            #[inline]
            const fn [<less_ $name>](left: $key, right: $key) -> bool {
                left < right
            }
        )* }
    };
}

primitive_less! {
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => i8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize,
    char => char, bool => bool,
}

#[inline]
const fn less_str(left: &str, right: &str) -> bool {
    let left = left.as_bytes();
    let right = right.as_bytes();
    let mut index = 0;
    while index < left.len() && index < right.len() {
        if left[index] != right[index] {
            return left[index] < right[index];
        }
        index += 1;
    }
    left.len() < right.len()
}

const_engine! {
    u8 => u8, 0;
    u16 => u16, 0;
    u32 => u32, 0;
    u64 => u64, 0;
    u128 => u128, 0;
    usize => usize, 0;
    i8 => i8, 0;
    i16 => i16, 0;
    i32 => i32, 0;
    i64 => i64, 0;
    i128 => i128, 0;
    isize => isize, 0;
    char => char, '\0';
    bool => bool, false;
    &'static str => str, "";
}
