//! Merge-based in-place intersection.
//!
//! Two cursors walk `ac` and `bc` in lockstep:
//!
//! - `a < b`: the allowed element has no partner left in `bc`; advance `a`.
//! - `a > b`: the target element has no partner in `ac`; remove it.
//! - `a == b`: keep the target element and advance `b` only, so further
//!   duplicates of the same value in `bc` meet the same `a`.
//!
//! Once `ac` runs out, every remaining target element is removed.
//!
//! Cost is O(|ac| + |bc|) comparisons and O(1) extra space. The generic
//! [`intersect_update_merge`] removes through [`SortedTarget`];
//! [`intersect_update_merge_vec`] is the contiguous specialization that
//! defers all removals to one truncation.

use crate::scan::MergeScan;
use crate::select::Variant;
use crate::sequence::{SortedSource, SortedTarget};
use crate::trace;

/// Removes from `bc` every element missing from `ac` by merging the two
/// ascending sequences.
///
/// Survivors keep their relative order. When `bc` holds duplicates, each
/// occurrence is kept iff its value is present in `ac`. `ac` is only read.
///
/// Both operands must be sorted ascending; this is not checked. See
/// [`crate::checked::try_intersect_update_merge`] for a validating variant.
///
/// # Examples
///
/// ```rust
/// use sorted_intersect::intersect_update_merge;
/// use std::collections::BTreeSet;
///
/// let allowed: BTreeSet<i32> = [5, 10].into_iter().collect();
/// let mut target = vec![5, 5, 7, 10];
/// intersect_update_merge(&allowed, &mut target);
/// assert_eq!(target, vec![5, 5, 10]);
/// ```
///
/// Operands must share an element type: a `BTreeSet<i64>` cannot filter a
/// `Vec<i32>`.
pub fn intersect_update_merge<A, B>(ac: &A, bc: &mut B)
where
    A: SortedSource + ?Sized,
    B: SortedTarget<Item = A::Item> + ?Sized,
{
    let before = bc.len();
    let mut allowed = ac.ascending().peekable();
    bc.retain_ascending(|candidate| {
        while allowed.next_if(|item| *item < candidate).is_some() {}
        allowed.peek().is_some_and(|item| *item == candidate)
    });
    trace::record(Variant::Merge, before, bc.len());
}

/// Merge intersection specialized for a `Vec` target.
///
/// Survivors are swapped forward into a growing live prefix while rejected
/// elements drift behind it; the vector is truncated once at the end. No
/// element is shifted more than once, and survivors keep their order.
///
/// # Examples
///
/// ```rust
/// use sorted_intersect::intersect_update_merge_vec;
///
/// let mut target = vec![1, 2, 3, 4, 5];
/// intersect_update_merge_vec(&[2, 4, 6], &mut target);
/// assert_eq!(target, vec![2, 4]);
/// ```
pub fn intersect_update_merge_vec<A>(ac: &A, bc: &mut Vec<A::Item>)
where
    A: SortedSource + ?Sized,
{
    MergeScan::new(ac, bc).finish();
}
