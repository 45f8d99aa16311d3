//! Construction events, emitted through `tracing` when the feature is on.
//!
//! Lookups are never instrumented. Const construction has no runtime and
//! therefore never reaches these hooks.

use crate::error::CapacityMismatch;

#[inline]
pub(crate) fn constructed<K>(capacity: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        capacity,
        key_type = std::any::type_name::<K>(),
        "sorted frozen set keys"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = capacity;
}

#[inline]
pub(crate) fn rejected<K>(error: &CapacityMismatch) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        expected = error.expected,
        actual = error.actual,
        key_type = std::any::type_name::<K>(),
        "rejected frozen set construction"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = error;
}
