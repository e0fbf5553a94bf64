//! # sorted-intersect
//!
//! In-place intersection update for ordered collections.
//!
//! Given a read-only ascending collection `ac` (the allowed elements) and a
//! mutable ascending collection `bc`, the functions in this crate remove from
//! `bc` every element that does not occur in `ac`. No buffer is allocated:
//! `bc` only ever shrinks, and its survivors keep their order.
//!
//! ## Overview
//!
//! - [`intersect_update_merge`]: two-cursor merge, O(|ac| + |bc|). Works for
//!   any [`SortedSource`] as `ac`.
//! - [`intersect_update_probe`]: binary-search probe per target element,
//!   O(|bc| log |ac|). Needs a [`SortedLookup`] as `ac`; wins when `ac` is
//!   much larger than `bc`.
//! - [`intersect_update_merge_vec`]: merge specialized for `Vec` targets,
//!   with a single truncation at the end.
//! - [`MergeScan`]: the same merge, resumable in bounded steps.
//! - [`intersect_update`]: picks merge or probe with a [`Selector`].
//! - [`checked`]: variants that validate sortedness first.
//!
//! Duplicates in `bc` are tested one by one: every occurrence of a value that
//! exists in `ac` survives, however often it occurs in either operand.
//!
//! ## Feature Flags
//!
//! - `std-adapters` (default): trait impls for `BTreeSet`, `Vec`, `VecDeque`,
//!   `LinkedList`, slices and arrays.
//! - `tracing`: a `TRACE` event per completed intersection.
//! - `serde`: serialization for [`SortedVec`], [`Variant`], [`Selector`] and
//!   [`ScanSummary`].
//! - `full`: all of the above.
//!
//! ## Example
//!
//! ```rust
//! use sorted_intersect::prelude::*;
//! use std::collections::BTreeSet;
//!
//! let allowed: BTreeSet<i32> = [2, 4, 6].into_iter().collect();
//!
//! let mut set: BTreeSet<i32> = (1..=5).collect();
//! intersect_update_merge(&allowed, &mut set);
//! assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![2, 4]);
//!
//! let mut bag = SortedVec::from_sorted_vec(vec![1, 2, 2, 3, 4]);
//! intersect_update_probe(&allowed, &mut bag);
//! assert_eq!(bag.as_slice(), &[2, 2, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sorted_intersect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::checked::{try_intersect_update_merge, try_intersect_update_probe};
    pub use crate::merge::{intersect_update_merge, intersect_update_merge_vec};
    pub use crate::probe::intersect_update_probe;
    pub use crate::scan::{MergeScan, ScanProgress, ScanSummary};
    pub use crate::select::{Selector, Variant, intersect_update, intersect_update_with};
    pub use crate::sequence::{SortedLookup, SortedSource, SortedTarget};
    pub use crate::sorted_vec::SortedVec;
}

pub mod checked;
pub mod error;
pub mod scan;
pub mod select;
pub mod sequence;
pub mod sorted_vec;

mod merge;
mod probe;
mod trace;

pub use error::{Operand, UnsortedInputError};
pub use merge::{intersect_update_merge, intersect_update_merge_vec};
pub use probe::intersect_update_probe;
pub use scan::{MergeScan, ScanProgress, ScanSummary};
pub use select::{Selector, Variant, intersect_update, intersect_update_with};
pub use sequence::{SortedLookup, SortedSource, SortedTarget};
pub use sorted_vec::SortedVec;
