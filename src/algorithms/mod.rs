//! Sort and search engines shared by every frozen set.
//!
//! Both engines are pure functions over borrowed keys and a comparator:
//! they never allocate, never touch global state, and never mutate
//! anything but the slice they are handed. The same algorithms are also
//! generated as `const fn` for primitive key types in [`constant`], so a
//! set built by the compiler and a set built at runtime from the same
//! keys are arranged identically.
//!
//! - [`quicksort`] / [`sort_storage`]: construction-time partition sort
//! - [`lower_bound`], [`find`], [`count`], [`upper_bound`], [`equal_range`]:
//!   binary-search queries over sorted keys
//!
//! # Examples
//!
//! ```rust
//! use frozen_lookup::algorithms::{find, lower_bound, quicksort};
//! use frozen_lookup::compare::Natural;
//!
//! let mut keys = [5, 3, 1, 4, 2];
//! quicksort(&mut keys, &Natural);
//! assert_eq!(keys, [1, 2, 3, 4, 5]);
//!
//! assert_eq!(find(&keys, &3, &Natural), Some(2));
//! assert_eq!(lower_bound(&keys, &0, &Natural), 0);
//! ```

pub mod constant;
mod search;
mod sort;

pub use search::count;
pub use search::equal_range;
pub use search::find;
pub use search::lower_bound;
pub use search::upper_bound;
pub use sort::quicksort;
pub use sort::sort_storage;
