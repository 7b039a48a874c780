use thiserror::Error;

use crate::error::ParseError;

/// The classified failures of [`crate::safe_eval`].
///
/// Every failure is recoverable and carries a message meant to be shown to the
/// end user as is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Blank or whitespace-only input.
    #[error("Empty expression.")]
    EmptyExpression,
    /// Malformed input.
    #[error("Syntax error: {0}")]
    Syntax(ParseError),
    /// A node or operator outside the allow-list.
    #[error("Unsupported element: {construct}.")]
    UnsupportedConstruct {
        /// Description of the construct.
        construct: String,
    },
    /// A literal without a numeric value.
    #[error("Only numeric constants allowed (found {kind}).")]
    NonNumericConstant {
        /// Kind of the rejected literal.
        kind: &'static str,
    },
    /// The right operand of `**` exceeded the exponent bound.
    #[error("Exponent too large (abs > {max}).")]
    ExponentTooLarge {
        /// The rejected exponent.
        exponent: f64,
        /// The configured maximum.
        max:      f64,
    },
    /// The left operand of `**` exceeded the base bound.
    #[error("Base too large for exponentiation (abs > {max}).")]
    BaseTooLarge {
        /// The rejected base.
        base: f64,
        /// The configured maximum.
        max:  f64,
    },
    /// Zero denominator in `/`, `//` or `%`, or zero raised to a negative
    /// power.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A result that is not finite or exceeds the allowed magnitude.
    #[error("Result out of allowed range or not finite.")]
    ResultOutOfRange {
        /// The rejected value.
        value: f64,
    },
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::EmptyExpression => Self::EmptyExpression,
            ParseError::UnsupportedConstruct { construct, .. } => {
                Self::UnsupportedConstruct { construct }
            },
            other => Self::Syntax(other),
        }
    }
}
