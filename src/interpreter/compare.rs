use std::fmt;

use crate::util::num::{format_float, format_integer, is_close};

/// Tolerance used to decide whether an expected value is integer-like.
pub const INTEGER_TOLERANCE: f64 = 1e-12;
/// Relative and absolute tolerance used when comparing an answer.
pub const ANSWER_TOLERANCE: f64 = 1e-9;

/// The outcome of comparing a submitted answer with the expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The expected value is integer-like and the answer matches it.
    Correct,
    /// The expected value is fractional and the answer is close enough.
    CorrectWithinTolerance,
    /// The answer does not match.
    Incorrect {
        /// The expected value as shown to the user.
        expected: String,
    },
}

impl Verdict {
    /// Whether the answer was accepted.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct | Self::CorrectWithinTolerance)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "Correct!"),
            Self::CorrectWithinTolerance => write!(f, "Correct (within tolerance)!"),
            Self::Incorrect { expected } => {
                write!(f, "Incorrect. The correct answer is {expected}.")
            },
        }
    }
}

/// Whether `value` is within [`INTEGER_TOLERANCE`] of the nearest integer.
#[must_use]
pub fn is_integer_like(value: f64) -> bool {
    is_close(value, value.round(), INTEGER_TOLERANCE, INTEGER_TOLERANCE)
}

/// Renders an expected value for display: integer-like values are shown
/// rounded without a fractional part, anything else as a float.
///
/// # Example
/// ```
/// use mathcheck::interpreter::compare::display_expected;
///
/// assert_eq!(display_expected(4.0), "4");
/// assert_eq!(display_expected(2.999_999_999_999_9), "3");
/// assert_eq!(display_expected(4.5), "4.5");
/// ```
#[must_use]
pub fn display_expected(expected: f64) -> String {
    if is_integer_like(expected) {
        format_integer(expected)
    } else {
        format_float(expected)
    }
}

/// Compares a submitted answer with the expected value.
///
/// Integer-like expected values are snapped to the nearest integer before the
/// comparison.
///
/// # Example
/// ```
/// use mathcheck::interpreter::compare::{Verdict, compare};
///
/// assert_eq!(compare(4.0, 4.0), Verdict::Correct);
/// assert_eq!(compare(0.5, 0.5), Verdict::CorrectWithinTolerance);
/// assert_eq!(compare(4.0, 3.9), Verdict::Incorrect { expected: "4".to_string() });
/// ```
#[must_use]
pub fn compare(expected: f64, actual: f64) -> Verdict {
    if is_integer_like(expected) {
        let target = expected.round();
        if is_close(actual, target, ANSWER_TOLERANCE, ANSWER_TOLERANCE) {
            Verdict::Correct
        } else {
            Verdict::Incorrect { expected: format_integer(target) }
        }
    } else if is_close(actual, expected, ANSWER_TOLERANCE, ANSWER_TOLERANCE) {
        Verdict::CorrectWithinTolerance
    } else {
        Verdict::Incorrect { expected: format_float(expected) }
    }
}
