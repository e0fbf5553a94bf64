//! Adapters for the standard library collections.

use super::{SortedLookup, SortedSource, SortedTarget};
use std::collections::{BTreeSet, LinkedList, VecDeque, btree_set, linked_list, vec_deque};

// =============================================================================
// BTreeSet
// =============================================================================

impl<T: Ord> SortedSource for BTreeSet<T> {
    type Item = T;
    type Ascending<'a>
        = btree_set::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn ascending(&self) -> Self::Ascending<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T: Ord> SortedLookup for BTreeSet<T> {
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T: Ord> SortedTarget for BTreeSet<T> {
    // BTreeSet::retain visits elements in ascending order.
    #[inline]
    fn retain_ascending<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }
}

// =============================================================================
// Vec
// =============================================================================

impl<T: Ord> SortedSource for Vec<T> {
    type Item = T;
    type Ascending<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn ascending(&self) -> Self::Ascending<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T: Ord> SortedLookup for Vec<T> {
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.binary_search(item).is_ok()
    }
}

impl<T: Ord> SortedTarget for Vec<T> {
    // Vec::retain compacts survivors in order and truncates once.
    #[inline]
    fn retain_ascending<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }
}

// =============================================================================
// VecDeque
// =============================================================================

impl<T: Ord> SortedSource for VecDeque<T> {
    type Item = T;
    type Ascending<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn ascending(&self) -> Self::Ascending<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T: Ord> SortedLookup for VecDeque<T> {
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.binary_search(item).is_ok()
    }
}

impl<T: Ord> SortedTarget for VecDeque<T> {
    #[inline]
    fn retain_ascending<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }
}

// =============================================================================
// Slices and arrays (read-only)
// =============================================================================

impl<T: Ord> SortedSource for [T] {
    type Item = T;
    type Ascending<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn ascending(&self) -> Self::Ascending<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Ord> SortedLookup for [T] {
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.binary_search(item).is_ok()
    }
}

impl<T: Ord, const N: usize> SortedSource for [T; N] {
    type Item = T;
    type Ascending<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn ascending(&self) -> Self::Ascending<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}

impl<T: Ord, const N: usize> SortedLookup for [T; N] {
    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.binary_search(item).is_ok()
    }
}

// =============================================================================
// LinkedList (no lookup)
// =============================================================================

impl<T: Ord> SortedSource for LinkedList<T> {
    type Item = T;
    type Ascending<'a>
        = linked_list::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn ascending(&self) -> Self::Ascending<'_> {
        self.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T: Ord> SortedTarget for LinkedList<T> {
    // Nodes are detached one at a time from the front and relinked onto
    // `self` when kept; rejected nodes are dropped. O(n), no reallocation.
    fn retain_ascending<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut remaining = std::mem::take(self);
        while !remaining.is_empty() {
            let rest = remaining.split_off(1);
            if remaining.front().is_some_and(&mut keep) {
                self.append(&mut remaining);
            }
            remaining = rest;
        }
    }
}

static_assertions::assert_impl_all!(BTreeSet<i32>: SortedSource, SortedLookup, SortedTarget);
static_assertions::assert_impl_all!(Vec<i32>: SortedSource, SortedLookup, SortedTarget);
static_assertions::assert_impl_all!(VecDeque<i32>: SortedSource, SortedLookup, SortedTarget);
static_assertions::assert_impl_all!([i32]: SortedSource, SortedLookup);
static_assertions::assert_impl_all!([i32; 4]: SortedSource, SortedLookup);
static_assertions::assert_not_impl_any!([i32; 4]: SortedTarget);
static_assertions::assert_impl_all!(LinkedList<i32>: SortedSource, SortedTarget);
static_assertions::assert_not_impl_any!(LinkedList<i32>: SortedLookup);
