//! Validating entry points.
//!
//! The plain intersection functions trust their inputs. The functions here
//! first verify that both operands are ascending, at the price of one extra
//! O(|ac| + |bc|) pass, and leave `bc` untouched when either check fails.

use crate::error::{Operand, UnsortedInputError};
use crate::merge::intersect_update_merge;
use crate::probe::intersect_update_probe;
use crate::sequence::{SortedLookup, SortedSource, SortedTarget, first_descent};

/// Verifies that `source` is ascending (duplicates allowed).
///
/// # Errors
///
/// Returns [`UnsortedInputError`] tagged with `operand` and the position of
/// the first element smaller than its predecessor.
///
/// # Examples
///
/// ```rust
/// use sorted_intersect::checked::check_ascending;
/// use sorted_intersect::error::Operand;
///
/// assert!(check_ascending(&[1, 1, 2], Operand::Allowed).is_ok());
///
/// let error = check_ascending(&[3, 1, 2], Operand::Allowed).unwrap_err();
/// assert_eq!(error.index, 1);
/// ```
pub fn check_ascending<S>(source: &S, operand: Operand) -> Result<(), UnsortedInputError>
where
    S: SortedSource + ?Sized,
{
    first_descent(source).map_or(Ok(()), |index| Err(UnsortedInputError { operand, index }))
}

fn check_operands<A, B>(ac: &A, bc: &B) -> Result<(), UnsortedInputError>
where
    A: SortedSource + ?Sized,
    B: SortedSource<Item = A::Item> + ?Sized,
{
    check_ascending(ac, Operand::Allowed)?;
    check_ascending(bc, Operand::Target)
}

/// [`intersect_update_merge`](crate::intersect_update_merge) after checking
/// that both operands are ascending.
///
/// # Errors
///
/// Returns [`UnsortedInputError`] for the first unsorted operand, checking
/// `ac` before `bc`. `bc` is not modified in that case.
///
/// # Examples
///
/// ```rust
/// use sorted_intersect::checked::try_intersect_update_merge;
/// use sorted_intersect::error::Operand;
///
/// let mut target = vec![3, 1, 2];
/// let error = try_intersect_update_merge(&[1, 2, 3], &mut target).unwrap_err();
/// assert_eq!(error.operand, Operand::Target);
/// assert_eq!(target, vec![3, 1, 2]);
/// ```
pub fn try_intersect_update_merge<A, B>(ac: &A, bc: &mut B) -> Result<(), UnsortedInputError>
where
    A: SortedSource + ?Sized,
    B: SortedTarget<Item = A::Item> + ?Sized,
{
    check_operands(ac, &*bc)?;
    intersect_update_merge(ac, bc);
    Ok(())
}

/// [`intersect_update_probe`](crate::intersect_update_probe) after checking
/// that both operands are ascending.
///
/// # Errors
///
/// Same as [`try_intersect_update_merge`].
pub fn try_intersect_update_probe<A, B>(ac: &A, bc: &mut B) -> Result<(), UnsortedInputError>
where
    A: SortedLookup + ?Sized,
    B: SortedTarget<Item = A::Item> + ?Sized,
{
    check_operands(ac, &*bc)?;
    intersect_update_probe(ac, bc);
    Ok(())
}
