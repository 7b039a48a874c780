use log::{debug, trace};

use crate::{
    ast::{Constant, Expr},
    error::EvalError,
    interpreter::parser::core::parse_with_limits,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Largest magnitude any result may have.
pub const MAX_ABS_RESULT: f64 = 1e12;
/// Largest magnitude allowed for the base of `**`.
pub const MAX_ABS_BASE: f64 = 1e6;
/// Largest magnitude allowed for the exponent of `**`.
pub const MAX_ABS_EXPONENT: f64 = 10.0;
/// Longest accepted input, in characters.
pub const MAX_INPUT_LEN: usize = 4096;
/// Deepest accepted nesting of parentheses, prefix signs and `**` exponents.
pub const MAX_NESTING: usize = 200;

/// Bounds enforced while parsing and evaluating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Largest magnitude of any intermediate or final result.
    pub max_abs_result:   f64,
    /// Largest magnitude of a `**` base.
    pub max_abs_base:     f64,
    /// Largest magnitude of a `**` exponent.
    pub max_abs_exponent: f64,
    /// Longest accepted input, in characters.
    pub max_input_len:    usize,
    /// Deepest accepted nesting of parentheses, prefix signs and `**`
    /// exponents.
    pub max_nesting:      usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_abs_result:   MAX_ABS_RESULT,
               max_abs_base:     MAX_ABS_BASE,
               max_abs_exponent: MAX_ABS_EXPONENT,
               max_input_len:    MAX_INPUT_LEN,
               max_nesting:      MAX_NESTING, }
    }
}

/// The restricted tree-walking evaluator.
///
/// Holds nothing but its [`Limits`], so a single instance can be shared freely
/// between threads and every call is independent of every other.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluator {
    /// The bounds this evaluator enforces.
    pub limits: Limits,
}

impl Evaluator {
    /// Creates an evaluator enforcing `limits`.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Parses and evaluates `source`.
    ///
    /// # Errors
    /// Returns the classified [`EvalError`] of the first failure, whether it
    /// happens while parsing or while evaluating.
    ///
    /// # Example
    /// ```
    /// use mathcheck::{error::EvalError, interpreter::evaluator::core::Evaluator};
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.safe_eval("3*(4-1)/2"), Ok(4.5));
    /// assert_eq!(evaluator.safe_eval("1/0"), Err(EvalError::DivisionByZero));
    /// ```
    pub fn safe_eval(&self, source: &str) -> EvalResult<f64> {
        let expr = parse_with_limits(source, &self.limits)?;
        debug!("parsed {source:?} as {expr}");
        let value = self.eval(&expr)?;
        self.check_range(value)
    }

    /// Evaluates a syntax tree.
    ///
    /// Operands are reduced first, then the node's operator is applied. The
    /// match is exhaustive over the closed set of node kinds.
    ///
    /// # Errors
    /// Returns the first [`EvalError`] raised anywhere in the tree.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Self::eval_literal(value),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                let result = self.eval_binary(*op, left, right)?;
                trace!("{left} {op} {right} = {result}");
                Ok(result)
            },
        }
    }

    /// Converts a literal into its numeric value.
    ///
    /// Booleans count as `1` and `0`. Imaginary numbers, strings and `None`
    /// have no real value.
    ///
    /// # Errors
    /// Returns [`EvalError::NonNumericConstant`] for non-numeric literals.
    pub fn eval_literal(value: &Constant) -> EvalResult<f64> {
        match value {
            Constant::Number(n) => Ok(*n),
            Constant::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Constant::Imaginary(_) | Constant::Str(_) | Constant::None => {
                Err(EvalError::NonNumericConstant { kind: value.kind() })
            },
        }
    }

    /// Accepts `value` only if it is finite and within the result bound.
    ///
    /// # Errors
    /// Returns [`EvalError::ResultOutOfRange`] otherwise.
    pub fn check_range(&self, value: f64) -> EvalResult<f64> {
        if value.is_finite() && value.abs() <= self.limits.max_abs_result {
            Ok(value)
        } else {
            Err(EvalError::ResultOutOfRange { value })
        }
    }
}
