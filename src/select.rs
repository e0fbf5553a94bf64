//! Choosing between the merge and probe variants.
//!
//! Both variants produce the same result; they differ only in cost. Merge
//! pays for every element of `ac` and `bc` once, probe pays a binary search
//! into `ac` for every element of `bc`. [`Selector`] compares the two
//! estimates:
//!
//! ```text
//! merge cost = |ac| + |bc|
//! probe cost = |bc| * (floor(log2 |ac|) + 1) * probe_weight
//! ```
//!
//! and picks probe only when it is strictly cheaper. Calling
//! [`intersect_update_merge`](crate::intersect_update_merge) or
//! [`intersect_update_probe`](crate::intersect_update_probe) directly is
//! always allowed; the selector is a convenience.
//!
//! # Examples
//!
//! ```rust
//! use sorted_intersect::{Selector, Variant};
//!
//! let selector = Selector::default();
//! assert_eq!(selector.choose(1_000_000, 10), Variant::Probe);
//! assert_eq!(selector.choose(100, 100), Variant::Merge);
//! ```

use crate::merge::intersect_update_merge;
use crate::probe::intersect_update_probe;
use crate::sequence::{SortedLookup, SortedTarget};
use std::fmt;

/// One of the two intersection algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Two-cursor merge, O(|ac| + |bc|).
    Merge,
    /// Membership probe per target element, O(|bc| log |ac|).
    Probe,
}

impl Variant {
    /// Returns a lowercase name for the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Probe => "probe",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Cost-based choice between [`Variant::Merge`] and [`Variant::Probe`].
///
/// `probe_weight` scales the probe estimate. The default of 1 compares raw
/// comparison counts; larger values bias towards merge (useful when lookups
/// are cache-unfriendly, as in `BTreeSet`), and 0 always probes unless an
/// operand is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selector {
    probe_weight: usize,
}

impl Selector {
    /// The weight used by [`Selector::default`].
    pub const DEFAULT_PROBE_WEIGHT: usize = 1;

    /// Creates a selector with the default weight.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            probe_weight: Self::DEFAULT_PROBE_WEIGHT,
        }
    }

    /// Returns a copy of this selector with a different probe weight.
    #[inline]
    #[must_use]
    pub const fn with_probe_weight(self, probe_weight: usize) -> Self {
        Self { probe_weight }
    }

    /// Returns the probe weight.
    #[inline]
    #[must_use]
    pub const fn probe_weight(&self) -> usize {
        self.probe_weight
    }

    /// Picks a variant for operands of the given lengths.
    ///
    /// An empty operand always selects merge: the merge loop never starts
    /// and the tail removal handles the rest in one pass.
    #[must_use]
    pub const fn choose(&self, allowed_len: usize, target_len: usize) -> Variant {
        if allowed_len == 0 || target_len == 0 {
            return Variant::Merge;
        }
        let depth = allowed_len.ilog2() as usize + 1;
        let probe_cost = target_len
            .saturating_mul(depth)
            .saturating_mul(self.probe_weight);
        let merge_cost = allowed_len.saturating_add(target_len);
        if probe_cost < merge_cost {
            Variant::Probe
        } else {
            Variant::Merge
        }
    }
}

impl Default for Selector {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Removes from `bc` every element missing from `ac`, picking the variant
/// with [`Selector::default`].
///
/// # Examples
///
/// ```rust
/// use sorted_intersect::intersect_update;
/// use std::collections::BTreeSet;
///
/// let allowed: BTreeSet<i32> = (0..1000).step_by(2).collect();
/// let mut target = vec![1, 2, 3, 4];
/// intersect_update(&allowed, &mut target);
/// assert_eq!(target, vec![2, 4]);
/// ```
pub fn intersect_update<A, B>(ac: &A, bc: &mut B) -> Variant
where
    A: SortedLookup + ?Sized,
    B: SortedTarget<Item = A::Item> + ?Sized,
{
    intersect_update_with(Selector::default(), ac, bc)
}

/// Like [`intersect_update`] with an explicit selector. Returns the variant
/// that ran.
pub fn intersect_update_with<A, B>(selector: Selector, ac: &A, bc: &mut B) -> Variant
where
    A: SortedLookup + ?Sized,
    B: SortedTarget<Item = A::Item> + ?Sized,
{
    let variant = selector.choose(ac.len(), bc.len());
    match variant {
        Variant::Merge => intersect_update_merge(ac, bc),
        Variant::Probe => intersect_update_probe(ac, bc),
    }
    variant
}
