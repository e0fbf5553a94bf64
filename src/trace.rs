//! Optional `tracing` events for completed intersection calls.
//!
//! With the `tracing` feature disabled, [`record`] compiles to nothing.

use crate::select::Variant;

/// Emits one `TRACE` event describing a finished intersection.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn record(variant: Variant, before: usize, after: usize) {
    tracing::trace!(
        variant = variant.as_str(),
        retained = after,
        removed = before - after,
        "intersection update finished"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) const fn record(_variant: Variant, _before: usize, _after: usize) {}
