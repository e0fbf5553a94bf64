//! A sorted vector that permits duplicates.
//!
//! [`SortedVec`] plays the multiset role in intersection calls: its elements
//! are kept in ascending order, equal elements may repeat, and membership is
//! answered by binary search. It works both as the allowed operand (merge
//! and probe) and as the target operand.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity   |
//! |------------------|--------------|
//! | `insert`         | O(n)         |
//! | `remove_one`     | O(n)         |
//! | `contains`       | O(log n)     |
//! | `count`          | O(log n)     |
//! | `from_sorted_vec`| O(1)         |
//! | `from_unsorted`  | O(n log n)   |
//! | `try_from_vec`   | O(n)         |
//!
//! # Examples
//!
//! ```rust
//! use sorted_intersect::SortedVec;
//!
//! let mut bag = SortedVec::from_unsorted(vec![5, 1, 5, 3]);
//! assert_eq!(bag.as_slice(), &[1, 3, 5, 5]);
//! assert_eq!(bag.count(&5), 2);
//!
//! bag.insert(3);
//! assert_eq!(bag.as_slice(), &[1, 3, 3, 5, 5]);
//!
//! assert_eq!(bag.remove_one(&5), Some(5));
//! assert_eq!(bag.as_slice(), &[1, 3, 3, 5]);
//! ```

use crate::error::{Operand, UnsortedInputError};
use crate::sequence::{SortedLookup, SortedSource, SortedTarget, first_descent};
use std::ops::Deref;

/// Message for the debug-build check in [`SortedVec::from_sorted_vec`].
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_vec requires elements in ascending order (duplicates allowed)";

/// A vector kept in ascending order, with duplicates allowed.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedVec<T: Ord> {
    elements: Vec<T>,
}

impl<T: Ord> SortedVec<T> {
    /// Creates an empty `SortedVec`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty `SortedVec` with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Wraps a vector that is already in ascending order.
    ///
    /// # Preconditions
    ///
    /// `elements` must be non-decreasing. In debug builds this is checked with
    /// `debug_assert!`; in release builds an unsorted vector yields a
    /// `SortedVec` whose lookups and intersections are incorrect (a logic
    /// error, not memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_intersect::SortedVec;
    ///
    /// let bag = SortedVec::from_sorted_vec(vec![1, 1, 2]);
    /// assert_eq!(bag.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_sorted_vec(elements: Vec<T>) -> Self {
        debug_assert!(
            elements.windows(2).all(|window| window[0] <= window[1]),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self { elements }
    }

    /// Sorts `elements` and wraps the result.
    ///
    /// The sort is stable, so equal elements keep their input order.
    #[must_use]
    pub fn from_unsorted(mut elements: Vec<T>) -> Self {
        elements.sort();
        Self { elements }
    }

    /// Wraps `elements` after checking that they are in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedInputError`] naming the first out-of-order position.
    /// `operand` is recorded in the error so callers can tell which argument
    /// of an intersection was rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_intersect::SortedVec;
    /// use sorted_intersect::error::Operand;
    ///
    /// assert!(SortedVec::try_from_vec(vec![1, 2, 2], Operand::Target).is_ok());
    ///
    /// let error = SortedVec::try_from_vec(vec![1, 3, 2], Operand::Target).unwrap_err();
    /// assert_eq!(error.index, 2);
    /// ```
    pub fn try_from_vec(elements: Vec<T>, operand: Operand) -> Result<Self, UnsortedInputError> {
        let candidate = Self { elements };
        match first_descent(&candidate) {
            Some(index) => Err(UnsortedInputError { operand, index }),
            None => Ok(candidate),
        }
    }

    /// Returns the number of elements, duplicates included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as an ascending slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the smallest element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns `true` if at least one element equals `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.binary_search(value).is_ok()
    }

    /// Returns how many elements equal `value`.
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        let lower = self.elements.partition_point(|element| element < value);
        let upper = self.elements.partition_point(|element| element <= value);
        upper - lower
    }

    /// Inserts `value` after any elements equal to it.
    pub fn insert(&mut self, value: T) {
        let position = self.elements.partition_point(|element| *element <= value);
        self.elements.insert(position, value);
    }

    /// Removes and returns the first element equal to `value`, if any.
    pub fn remove_one(&mut self, value: &T) -> Option<T> {
        let position = self.elements.partition_point(|element| element < value);
        if self.elements.get(position) == Some(value) {
            Some(self.elements.remove(position))
        } else {
            None
        }
    }

    /// Unwraps the underlying ascending vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Ord> Default for SortedVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from_unsorted(iterator.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for SortedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.elements.extend(iterator);
        // Stable: existing elements stay ahead of equal new ones.
        self.elements.sort();
    }
}

impl<T: Ord> From<SortedVec<T>> for Vec<T> {
    #[inline]
    fn from(sorted: SortedVec<T>) -> Self {
        sorted.elements
    }
}

impl<T: Ord> AsRef<[T]> for SortedVec<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

// Read-only: there is no `DerefMut`, so slice methods cannot reorder elements.
impl<T: Ord> Deref for SortedVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Ord> IntoIterator for SortedVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Capability Traits
// =============================================================================

impl<T: Ord> SortedSource for SortedVec<T> {
    type Item = T;
    type Ascending<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn ascending(&self) -> Self::Ascending<'_> {
        self.elements.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T: Ord> SortedLookup for SortedVec<T> {
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> SortedTarget for SortedVec<T> {
    #[inline]
    fn retain_ascending<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.retain(keep);
    }
}

static_assertions::assert_impl_all!(SortedVec<i32>: SortedSource, SortedLookup, SortedTarget);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: Ord + serde::Serialize> serde::Serialize for SortedVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedVec<T>
where
    T: Ord + serde::Deserialize<'de>,
{
    /// Accepts any sequence; the elements are sorted after decoding.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_unsorted)
    }
}
