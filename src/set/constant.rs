//! `const` construction and lookup for primitive and `&'static str` keys.
//!
//! These constructors let a [`FrozenSet`] live in a `const` or `static`
//! item, sorted by the compiler. The layout is the same one the runtime
//! constructors produce for the same keys.
//!
//! ```rust
//! use frozen_lookup::FrozenSet;
//!
//! static RESERVED: FrozenSet<&str, 5> =
//!     FrozenSet::<&str, 5>::from_array_const(["while", "if", "loop", "else", "fn"]);
//!
//! const HAS_LOOP: bool = RESERVED_CONST.contains_const("loop");
//! const RESERVED_CONST: FrozenSet<&str, 5> =
//!     FrozenSet::<&str, 5>::from_slice_const(&["while", "if", "loop", "else", "fn"]);
//!
//! assert!(HAS_LOOP);
//! assert_eq!(RESERVED.as_slice(), &["else", "fn", "if", "loop", "while"]);
//! assert_eq!(RESERVED.as_slice(), RESERVED_CONST.as_slice());
//! ```
//!
//! A key count that disagrees with the declared capacity stops the build:
//!
//! ```rust,compile_fail
//! use frozen_lookup::FrozenSet;
//!
//! static BROKEN: FrozenSet<u32, 5> = FrozenSet::<u32, 5>::from_slice_const(&[1, 2, 3, 4]);
//! assert!(BROKEN.contains_const(1));
//! ```

use super::FrozenSet;
use crate::algorithms::constant;
use crate::compare::Natural;
use crate::storage::FixedStorage;

macro_rules! const_frozen_set {
    ($($key:ty => $name:ident),* $(,)?) => {
        paste::paste! { $(
            impl<const N: usize> FrozenSet<$key, N, Natural> {
                /// Sorts `keys` during const evaluation and builds the set.
                #[must_use]
                pub const fn from_array_const(keys: [$key; N]) -> Self {
                    Self {
                        storage: FixedStorage::new(constant::[<sort_ $name>](keys)),
                        compare: Natural,
                    }
                }

                /// Builds the set from a slice of exactly `N` keys during
                /// const evaluation.
                ///
                /// # Panics
                ///
                /// Panics if `keys.len() != N`; in a `const` or `static`
                /// initializer this is a compile-time error.
                #[must_use]
                pub const fn from_slice_const(keys: &[$key]) -> Self {
                    Self::from_array_const(constant::[<copy_ $name>]::<N>(keys))
                }

                /// Const form of [`contains`](Self::contains).
                #[must_use]
                pub const fn contains_const(&self, key: $key) -> bool {
                    constant::[<contains_ $name>](self.storage.as_slice(), key)
                }

                /// Const form of [`lower_bound`](Self::lower_bound).
                #[must_use]
                pub const fn lower_bound_const(&self, key: $key) -> usize {
                    constant::[<lower_bound_ $name>](self.storage.as_slice(), key)
                }
            }
        )* }
    };
}

const_frozen_set! {
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => i8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize,
    char => char, bool => bool, &'static str => str,
}
