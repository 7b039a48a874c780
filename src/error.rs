/// Parsing errors.
///
/// Defines the errors that can occur while lexing and parsing an expression:
/// blank input, malformed syntax, and recognised constructs that fall outside
/// the arithmetic grammar.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the classified failures surfaced to callers of
/// [`crate::safe_eval`], including the power-operator guards, division by
/// zero and range violations.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
