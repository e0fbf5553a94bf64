//! Error types for the checked intersection entry points.
//!
//! The unchecked primitives never fail: a violated sortedness precondition is
//! a caller bug and only produces an incorrect result. The `try_*` functions
//! in [`crate::checked`] validate their operands first and report the first
//! out-of-order position with [`UnsortedInputError`].

use std::fmt;

/// Names the operand of an intersection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The read-only collection whose elements are kept (`ac`).
    Allowed,
    /// The collection that is shrunk in place (`bc`).
    Target,
}

impl Operand {
    /// Returns a lowercase name for the operand.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// An operand was not in ascending order.
///
/// `index` is the position of the first element that compares less than its
/// predecessor in ascending traversal order.
///
/// # Examples
///
/// ```rust
/// use sorted_intersect::error::{Operand, UnsortedInputError};
///
/// let error = UnsortedInputError {
///     operand: Operand::Target,
///     index: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "target operand is not sorted: element 3 is smaller than its predecessor"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsortedInputError {
    /// The operand that violated the ordering precondition.
    pub operand: Operand,
    /// Position of the first out-of-order element.
    pub index: usize,
}

impl fmt::Display for UnsortedInputError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} operand is not sorted: element {} is smaller than its predecessor",
            self.operand, self.index
        )
    }
}

impl std::error::Error for UnsortedInputError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Operand::Allowed, "allowed")]
    #[case(Operand::Target, "target")]
    fn test_operand_display(#[case] operand: Operand, #[case] expected: &str) {
        assert_eq!(operand.to_string(), expected);
    }

    #[rstest]
    fn test_unsorted_input_error_display() {
        let error = UnsortedInputError {
            operand: Operand::Allowed,
            index: 1,
        };
        assert_eq!(
            error.to_string(),
            "allowed operand is not sorted: element 1 is smaller than its predecessor"
        );
    }

    #[rstest]
    fn test_unsorted_input_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(UnsortedInputError {
            operand: Operand::Target,
            index: 0,
        });
        assert!(error.source().is_none());
    }
}
