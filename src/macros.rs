//! Literal construction of frozen sets.

/// Builds a frozen set from a literal list of keys.
///
/// The capacity is the number of keys written, so it can never disagree
/// with the list. An empty invocation selects [`EmptySet`](crate::EmptySet);
/// any other selects [`FrozenSet`](crate::FrozenSet). A comparator may
/// follow the keys after a semicolon.
///
/// # Examples
///
/// ```rust
/// use frozen_lookup::{frozen_set, EmptySet, FrozenSet};
/// use frozen_lookup::compare::Descending;
///
/// let set: FrozenSet<i32, 3> = frozen_set![3, 1, 2];
/// assert_eq!(set.as_slice(), &[1, 2, 3]);
///
/// let reversed = frozen_set![3, 1, 2; Descending];
/// assert_eq!(reversed.as_slice(), &[3, 2, 1]);
///
/// let empty: EmptySet<i32> = frozen_set![];
/// assert!(empty.is_empty());
///
/// let empty_descending: EmptySet<i32, Descending> = frozen_set![; Descending];
/// assert_eq!(empty_descending.comparator(), &Descending);
/// ```
#[macro_export]
macro_rules! frozen_set {
    () => {
        $crate::EmptySet::new()
    };
    (; $compare:expr $(,)?) => {
        $crate::EmptySet::with_comparator($compare)
    };
    ($($key:expr),+ $(,)?) => {
        $crate::FrozenSet::new([$($key),+])
    };
    ($($key:expr),+ ; $compare:expr $(,)?) => {
        $crate::FrozenSet::with_comparator([$($key),+], $compare)
    };
}

#[cfg(test)]
mod tests {
    use crate::compare::Descending;
    use crate::{EmptySet, FrozenSet};
    use rstest::rstest;

    #[rstest]
    fn test_macro_infers_capacity() {
        let set = frozen_set!["gamma", "alpha", "beta"];
        assert_eq!(set.capacity(), 3);
        assert_eq!(set.as_slice(), &["alpha", "beta", "gamma"]);
    }

    #[rstest]
    fn test_macro_trailing_comma() {
        let set: FrozenSet<u8, 2> = frozen_set![2, 1,];
        assert_eq!(set.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_macro_with_comparator() {
        let set = frozen_set!['a', 'c', 'b'; Descending];
        assert_eq!(set.as_slice(), &['c', 'b', 'a']);
    }

    #[rstest]
    fn test_macro_empty_selects_empty_set() {
        let set: EmptySet<String> = frozen_set![];
        assert_eq!(set.len(), 0);
        assert!(set.find(&String::from("x")).is_none());
    }
}
