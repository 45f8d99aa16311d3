//! Errors raised while constructing a frozen set.
//!
//! Lookups never fail: a missing key is reported as `None`, an empty
//! range, or a zero count. The only failure is a construction whose key
//! count differs from the capacity fixed by the set's type.

/// The number of supplied keys does not match the set's fixed capacity.
///
/// Returned by the fallible constructors (`try_from_slice`,
/// `try_from_iter`, `TryFrom<&[K]>`). The panicking constructors abort
/// with the same message instead.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::{CapacityMismatch, FrozenSet};
///
/// let error = FrozenSet::<i32, 5>::try_from_slice(&[1, 2, 3, 4]).unwrap_err();
/// assert_eq!(error, CapacityMismatch { expected: 5, actual: 4 });
/// assert_eq!(
///     format!("{error}"),
///     "inconsistent key count: expected 5 keys, found 4"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityMismatch {
    /// The capacity declared by the set's type.
    pub expected: usize,
    /// The number of keys actually supplied.
    ///
    /// For iterator input this counts at most `expected + 1` keys; the
    /// remainder of an over-long iterator is not consumed.
    pub actual: usize,
}

impl std::fmt::Display for CapacityMismatch {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "inconsistent key count: expected {} keys, found {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for CapacityMismatch {}
