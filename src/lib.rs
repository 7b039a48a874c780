//! # mathcheck
//!
//! mathcheck is a sandboxed arithmetic evaluator with an answer checker.
//! It accepts numeric literals, parentheses, unary `+`/`-` and the binary
//! operators `+ - * / % // **`, and rejects everything else: no names, no
//! calls, no attribute access, no statements. Results are bounded to finite
//! values within `[-1e12, 1e12]`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use crate::{
    error::EvalError,
    interpreter::{
        compare::Verdict,
        evaluator::core::{Evaluator, Limits},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent an
/// arithmetic expression as a tree. The tree is closed over literals, unary
/// operations and binary operations; the parser builds it and the evaluator
/// only reads it.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Classifies every way an expression can be rejected.
/// - Carries positions and user-facing messages.
pub mod error;
/// Generates random easy problems to feed into the evaluator.
pub mod generator;
/// Orchestrates lexing, parsing, evaluation and answer comparison.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Enforces the configured [`Limits`].
/// - Compares answers with tolerance.
pub mod interpreter;
/// Holds a locked equation and judges answers against it.
pub mod quiz;
/// Floating-point helpers shared by the evaluator and the comparator.
pub mod util;

/// Parses and evaluates an arithmetic expression with the default [`Limits`].
///
/// This is the single entry point for turning untrusted text into a number.
/// It is pure: the same input always yields the same result.
///
/// # Errors
/// Returns a classified [`EvalError`]; see its variants.
///
/// # Examples
/// ```
/// use mathcheck::{error::EvalError, safe_eval};
///
/// assert_eq!(safe_eval("2+2"), Ok(4.0));
/// assert_eq!(safe_eval("10//3"), Ok(3.0));
/// assert_eq!(safe_eval("   "), Err(EvalError::EmptyExpression));
/// assert!(matches!(safe_eval("2**20"), Err(EvalError::ExponentTooLarge { .. })));
/// ```
pub fn safe_eval(source: &str) -> Result<f64, EvalError> {
    Evaluator::new(Limits::default()).safe_eval(source)
}

/// Compares a submitted value with the expected one.
///
/// See [`interpreter::compare::compare`].
#[must_use]
pub fn compare(expected: f64, actual: f64) -> Verdict {
    interpreter::compare::compare(expected, actual)
}
