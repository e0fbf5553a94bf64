//! Capability traits for ordered containers.
//!
//! The intersection algorithms are written once against three small traits
//! instead of once per container:
//!
//! - [`SortedSource`]: ascending read-only traversal. Enough for `ac` in the
//!   merge variant.
//! - [`SortedLookup`]: logarithmic membership test. Required for `ac` in the
//!   probe variant.
//! - [`SortedTarget`]: ascending traversal with in-place removal. Required
//!   for `bc` in both variants.
//!
//! Both operands of one call must agree on [`SortedSource::Item`], so mixing
//! element types is rejected at compile time.
//!
//! # Adapters
//!
//! | Container        | Source | Lookup | Target |
//! |------------------|--------|--------|--------|
//! | `BTreeSet<T>`    | yes    | yes    | yes    |
//! | `SortedVec<T>`   | yes    | yes    | yes    |
//! | `Vec<T>`         | yes    | yes    | yes    |
//! | `VecDeque<T>`    | yes    | yes    | yes    |
//! | `[T]`, `[T; N]`  | yes    | yes    | no     |
//! | `LinkedList<T>`  | yes    | no     | yes    |
//!
//! The std adapters live behind the `std-adapters` feature (on by default).
//! `SortedVec` always implements all three.
//!
//! # Sortedness
//!
//! Every implementation assumes the container already holds its elements in
//! ascending order. Sets are ascending by construction; plain sequences are
//! trusted. Use [`crate::checked`] when the input is not trusted.

#[cfg(feature = "std-adapters")]
mod std_adapters;

/// A container that can be traversed in ascending order.
///
/// # Examples
///
/// ```rust
/// use sorted_intersect::sequence::SortedSource;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
/// let items: Vec<&i32> = set.ascending().collect();
/// assert_eq!(items, vec![&1, &2, &3]);
/// ```
pub trait SortedSource {
    /// The element type, ordered by its `Ord` implementation.
    type Item: Ord;

    /// Iterator over the elements in ascending order.
    type Ascending<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns an iterator over the elements in ascending order.
    fn ascending(&self) -> Self::Ascending<'_>;

    /// Returns the number of elements, duplicates included.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`SortedSource`] with ordered membership lookup.
///
/// Implementations must answer in O(log n) or better; containers that can
/// only be scanned linearly do not implement this trait.
pub trait SortedLookup: SortedSource {
    /// Returns `true` if at least one element equals `item`.
    fn contains_item(&self, item: &Self::Item) -> bool;
}

/// A [`SortedSource`] that supports removal during an ascending traversal.
///
/// This is the removal cursor the algorithms are built on: each element is
/// presented to `keep` exactly once, in ascending order, and is removed iff
/// `keep` returns `false`. Removal never skips or revisits an element, and
/// the survivors keep their relative order.
pub trait SortedTarget: SortedSource {
    /// Keeps only the elements for which `keep` returns `true`.
    fn retain_ascending<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Item) -> bool;
}

/// Returns `true` if `source` yields a non-decreasing sequence.
///
/// Duplicates are accepted. Runs in O(n).
#[must_use]
pub fn is_ascending<S>(source: &S) -> bool
where
    S: SortedSource + ?Sized,
{
    first_descent(source).is_none()
}

/// Returns the position of the first element smaller than its predecessor.
pub(crate) fn first_descent<S>(source: &S) -> Option<usize>
where
    S: SortedSource + ?Sized,
{
    let mut iterator = source.ascending();
    let mut previous = iterator.next()?;
    for (offset, current) in iterator.enumerate() {
        if current < previous {
            return Some(offset + 1);
        }
        previous = current;
    }
    None
}
