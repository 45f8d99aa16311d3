//! # frozen-lookup
//!
//! Immutable, fixed-capacity sorted sets for small read-only lookup
//! tables: reserved keywords, protocol opcodes, enum-like values. All
//! ordering work happens once, at construction; every lookup afterwards is
//! a binary search over inline storage.
//!
//! ## Overview
//!
//! - **[`FrozenSet`]**: exactly `N` keys, sorted by a [`Comparator`](compare::Comparator)
//! - **[`EmptySet`]**: the zero-key specialization, every query misses in O(1)
//! - **[`SortedLookup`]**: the query surface shared by both
//! - **[`frozen_set!`]**: literal construction with the capacity inferred
//! - **[`algorithms`]**: the sort and search engines, generic and `const`
//! - **[`storage`]**: the fixed-size backing array
//!
//! Nothing in this crate allocates, locks, or mutates after construction,
//! so a set can be shared across threads freely and can live in a
//! `static`, built either by the compiler or lazily at first use.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`FrozenSet`] and [`EmptySet`]
//! - `tracing`: debug events when sets are constructed at runtime
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use frozen_lookup::prelude::*;
//!
//! static KEYWORDS: FrozenSet<&str, 4> =
//!     FrozenSet::<&str, 4>::from_array_const(["let", "fn", "mut", "pub"]);
//!
//! assert!(KEYWORDS.contains(&"fn"));
//! assert_eq!(KEYWORDS.find(&"let"), Some(1));
//! assert_eq!(KEYWORDS.find(&"struct"), None);
//!
//! let opcodes = frozen_set![0x90u8, 0x0f, 0xc3];
//! assert_eq!(opcodes.count(&0xc3), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use frozen_lookup::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compare::{Comparator, Descending, Natural};
    pub use crate::error::CapacityMismatch;
    pub use crate::frozen_set;
    pub use crate::set::{EmptySet, FrozenSet, SortedLookup};
}

#[macro_use]
mod macros;

pub mod algorithms;
pub mod compare;
mod error;
mod instrument;
mod set;
pub mod storage;

pub use error::CapacityMismatch;
pub use set::EmptySet;
pub use set::FrozenSet;
pub use set::FrozenSetIntoIterator;
pub use set::FrozenSetIterator;
pub use set::SortedLookup;
