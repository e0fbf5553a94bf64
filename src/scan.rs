//! Resumable merge intersection over a `Vec` target.
//!
//! [`MergeScan`] runs the merge variant in bounded steps so a long
//! intersection can be interleaved with other work. It holds two explicit
//! cursors into the target vector:
//!
//! ```text
//!  0           write          read              len
//!  | survivors  | rejected      | not yet visited |
//! ```
//!
//! Each visited survivor is swapped down to `write`; rejected elements end up
//! between `write` and `read`. Completion truncates the vector to `write` in
//! one call.
//!
//! While the scan exists it holds the only reference to the vector, so the
//! intermediate layout is never observable. Dropping a suspended scan closes
//! the rejected gap, leaving the survivors followed by the unvisited
//! elements: still ascending, and free of every element the scan rejected.
//! A leaked scan skips this step; see [`MergeScan`].
//!
//! # Examples
//!
//! ```rust
//! use sorted_intersect::{MergeScan, ScanProgress, ScanSummary};
//!
//! let allowed = [2, 4, 6, 8];
//! let mut target: Vec<i32> = (1..=9).collect();
//!
//! let mut scan = MergeScan::new(&allowed, &mut target);
//! assert_eq!(scan.step(4), ScanProgress::Suspended { visited: 4 });
//! let summary = scan.finish();
//! assert_eq!(summary, ScanSummary { retained: 4, removed: 5 });
//! assert_eq!(target, vec![2, 4, 6, 8]);
//! ```

use crate::select::Variant;
use crate::sequence::SortedSource;
use crate::trace;
use std::iter::Peekable;

/// Counts reported when a scan completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanSummary {
    /// Target elements kept.
    pub retained: usize,
    /// Target elements removed.
    pub removed: usize,
}

/// Result of one [`MergeScan::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanProgress {
    /// The budget ran out before the end of the target.
    Suspended {
        /// Target elements visited during this step.
        visited: usize,
    },
    /// The target has been fully processed and truncated.
    Complete(ScanSummary),
}

impl ScanProgress {
    /// Returns `true` for [`ScanProgress::Complete`].
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// A merge intersection that can pause between target elements.
///
/// See the [module documentation](self) for the cursor layout.
///
/// # Leaking
///
/// Closing the rejected gap of a suspended scan happens in `Drop`. If the
/// scan is leaked (for example with [`std::mem::forget`]) before it
/// completes, the vector is left as survivors, then rejected elements, then
/// unvisited elements, and is no longer guaranteed to be ascending. This
/// mirrors [`Vec::drain`].
pub struct MergeScan<'a, A>
where
    A: SortedSource + ?Sized + 'a,
{
    allowed: Peekable<A::Ascending<'a>>,
    target: &'a mut Vec<A::Item>,
    read: usize,
    write: usize,
    len: usize,
    summary: Option<ScanSummary>,
}

impl<'a, A> MergeScan<'a, A>
where
    A: SortedSource + ?Sized + 'a,
{
    /// Prepares a scan of `bc` against `ac`. No element is visited yet.
    #[must_use]
    pub fn new(ac: &'a A, bc: &'a mut Vec<A::Item>) -> Self {
        let len = bc.len();
        Self {
            allowed: ac.ascending().peekable(),
            target: bc,
            read: 0,
            write: 0,
            len,
            summary: None,
        }
    }

    /// Number of target elements visited so far.
    #[inline]
    #[must_use]
    pub const fn visited(&self) -> usize {
        self.read
    }

    /// Number of visited target elements that were kept so far.
    #[inline]
    #[must_use]
    pub const fn retained(&self) -> usize {
        self.write
    }

    /// Returns `true` once every target element has been visited.
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.read == self.len
    }

    /// Visits up to `budget` target elements.
    ///
    /// When `ac` is exhausted the remaining target tail is rejected as a
    /// whole, which may report more than `budget` visits for that step.
    /// Calling `step` after completion returns the same
    /// [`ScanProgress::Complete`] again.
    pub fn step(&mut self, budget: usize) -> ScanProgress {
        let start = self.read;
        while self.read < self.len && self.read - start < budget {
            if self.allowed.peek().is_none() {
                self.read = self.len;
                break;
            }
            self.visit();
        }

        if self.is_complete() {
            ScanProgress::Complete(self.complete())
        } else {
            ScanProgress::Suspended {
                visited: self.read - start,
            }
        }
    }

    /// Runs the scan to completion.
    pub fn finish(mut self) -> ScanSummary {
        self.step(usize::MAX);
        self.complete()
    }

    fn visit(&mut self) {
        let keep = {
            let candidate = &self.target[self.read];
            while self.allowed.next_if(|item| *item < candidate).is_some() {}
            self.allowed.peek().is_some_and(|item| *item == candidate)
        };
        if keep {
            self.target.swap(self.write, self.read);
            self.write += 1;
        }
        self.read += 1;
    }

    // Only valid once every element has been visited.
    fn complete(&mut self) -> ScanSummary {
        if let Some(summary) = self.summary {
            return summary;
        }
        self.target.truncate(self.write);
        trace::record(Variant::Merge, self.len, self.write);
        let summary = ScanSummary {
            retained: self.write,
            removed: self.len - self.write,
        };
        self.summary = Some(summary);
        summary
    }
}

impl<'a, A> Drop for MergeScan<'a, A>
where
    A: SortedSource + ?Sized + 'a,
{
    fn drop(&mut self) {
        if !self.is_complete() {
            self.target.drain(self.write..self.read);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorted_vec::SortedVec;
    use rstest::rstest;

    fn allowed_set(elements: &[i32]) -> SortedVec<i32> {
        SortedVec::from_sorted_vec(elements.to_vec())
    }

    #[rstest]
    fn test_new_visits_nothing() {
        let allowed = allowed_set(&[1]);
        let mut target = vec![1, 2];
        let scan = MergeScan::new(&allowed, &mut target);
        assert_eq!(scan.visited(), 0);
        assert_eq!(scan.retained(), 0);
        assert!(!scan.is_complete());
    }

    #[rstest]
    fn test_empty_target_completes_immediately() {
        let allowed = allowed_set(&[1, 2]);
        let mut target: Vec<i32> = Vec::new();
        let mut scan = MergeScan::new(&allowed, &mut target);
        assert_eq!(
            scan.step(0),
            ScanProgress::Complete(ScanSummary::default())
        );
    }

    #[rstest]
    fn test_zero_budget_suspends_without_progress() {
        let allowed = allowed_set(&[1, 2]);
        let mut target = vec![1, 2];
        let mut scan = MergeScan::new(&allowed, &mut target);
        assert_eq!(scan.step(0), ScanProgress::Suspended { visited: 0 });
        assert_eq!(scan.visited(), 0);
    }

    #[rstest]
    fn test_step_by_one_matches_finish() {
        let allowed = allowed_set(&[2, 3, 5, 7]);
        let mut target = vec![1, 2, 2, 3, 4, 5, 6, 7, 8];
        let mut scan = MergeScan::new(&allowed, &mut target);
        let mut steps = 0;
        let summary = loop {
            match scan.step(1) {
                ScanProgress::Suspended { visited } => {
                    assert_eq!(visited, 1);
                    steps += 1;
                }
                ScanProgress::Complete(summary) => break summary,
            }
        };
        drop(scan);
        assert_eq!(steps, 8);
        assert_eq!(summary, ScanSummary { retained: 5, removed: 4 });
        assert_eq!(target, vec![2, 2, 3, 5, 7]);
    }

    #[rstest]
    fn test_exhausted_allowed_rejects_tail_at_once() {
        let allowed = allowed_set(&[1]);
        let mut target = vec![1, 2, 3, 4, 5, 6];
        let mut scan = MergeScan::new(&allowed, &mut target);
        assert_eq!(scan.step(1), ScanProgress::Suspended { visited: 1 });
        // Allowed still peeks at 1, so the next visit consumes it.
        assert_eq!(scan.step(1), ScanProgress::Suspended { visited: 1 });
        assert_eq!(
            scan.step(1),
            ScanProgress::Complete(ScanSummary { retained: 1, removed: 5 })
        );
        drop(scan);
        assert_eq!(target, vec![1]);
    }

    #[rstest]
    fn test_step_after_completion_repeats_summary() {
        let allowed = allowed_set(&[1, 3]);
        let mut target = vec![1, 2, 3];
        let mut scan = MergeScan::new(&allowed, &mut target);
        let first = scan.step(10);
        let second = scan.step(10);
        assert!(first.is_complete());
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_drop_while_suspended_keeps_unvisited_tail() {
        let allowed = allowed_set(&[2, 4, 6]);
        let mut target = vec![1, 2, 3, 4, 5, 6, 7];
        {
            let mut scan = MergeScan::new(&allowed, &mut target);
            assert_eq!(scan.step(3), ScanProgress::Suspended { visited: 3 });
        }
        // 1 and 3 were rejected; 4..=7 were never visited.
        assert_eq!(target, vec![2, 4, 5, 6, 7]);
    }

    #[rstest]
    fn test_leaked_scan_leaves_rejected_gap_in_place() {
        let allowed = allowed_set(&[2, 4, 6]);
        let mut target = vec![1, 2, 3, 4, 5, 6, 7];
        let mut scan = MergeScan::new(&allowed, &mut target);
        assert_eq!(scan.step(3), ScanProgress::Suspended { visited: 3 });
        std::mem::forget(scan);
        // Survivor 2, then rejected 1 and 3, then the unvisited tail.
        assert_eq!(target, vec![2, 1, 3, 4, 5, 6, 7]);
    }
}
