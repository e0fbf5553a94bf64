//! Probe-based in-place intersection.
//!
//! Every element of `bc` is looked up in `ac` and removed when absent. The
//! cost is O(|bc| log |ac|), which beats the merge variant when `ac` is much
//! larger than `bc`: only the few target elements pay, never a full scan of
//! `ac`.

use crate::select::Variant;
use crate::sequence::{SortedLookup, SortedTarget};
use crate::trace;

/// Removes from `bc` every element missing from `ac` by looking each one up.
///
/// Produces exactly the same `bc` as
/// [`intersect_update_merge`](crate::intersect_update_merge). `ac` must
/// support ordered lookup ([`SortedLookup`]); `bc` must be sorted ascending.
///
/// # Examples
///
/// ```rust
/// use sorted_intersect::intersect_update_probe;
/// use std::collections::BTreeSet;
///
/// let allowed: BTreeSet<u32> = (0..10_000).filter(|n| n % 3 == 0).collect();
/// let mut target: BTreeSet<u32> = [1, 3, 4, 9, 10_002].into_iter().collect();
/// intersect_update_probe(&allowed, &mut target);
/// assert_eq!(target.into_iter().collect::<Vec<_>>(), vec![3, 9]);
/// ```
pub fn intersect_update_probe<A, B>(ac: &A, bc: &mut B)
where
    A: SortedLookup + ?Sized,
    B: SortedTarget<Item = A::Item> + ?Sized,
{
    let before = bc.len();
    bc.retain_ascending(|candidate| ac.contains_item(candidate));
    trace::record(Variant::Probe, before, bc.len());
}
