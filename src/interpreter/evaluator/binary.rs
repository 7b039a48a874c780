use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::{checked_pow, floor_div, floored_mod},
};

impl Evaluator {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// For `**` the exponent bound is checked first, then the base bound.
    /// Zero denominators in `/`, `//` and `%` and zero raised to a negative
    /// power are reported as division by zero. The result must pass
    /// [`Evaluator::check_range`].
    ///
    /// # Errors
    /// - [`EvalError::ExponentTooLarge`] / [`EvalError::BaseTooLarge`] for
    ///   `**` operands out of bounds.
    /// - [`EvalError::DivisionByZero`] as described above.
    /// - [`EvalError::ResultOutOfRange`] for non-finite or oversized results.
    ///
    /// # Example
    /// ```
    /// use mathcheck::{
    ///     ast::BinaryOperator, error::EvalError, interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let evaluator = Evaluator::default();
    /// assert_eq!(evaluator.eval_binary(BinaryOperator::FloorDiv, 10.0, 3.0), Ok(3.0));
    /// assert!(matches!(evaluator.eval_binary(BinaryOperator::Pow, 2.0, 20.0),
    ///                  Err(EvalError::ExponentTooLarge { .. })));
    /// ```
    pub fn eval_binary(&self, op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        let result = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                left / right
            },
            Mod => floored_mod(left, right).ok_or(EvalError::DivisionByZero)?,
            FloorDiv => floor_div(left, right).ok_or(EvalError::DivisionByZero)?,
            Pow => {
                self.check_pow_operands(left, right)?;
                checked_pow(left, right).ok_or(EvalError::DivisionByZero)?
            },
        };

        self.check_range(result)
    }

    /// Enforces the `**` operand bounds.
    fn check_pow_operands(&self, base: f64, exponent: f64) -> EvalResult<()> {
        let limits = &self.limits;
        if exponent.abs() > limits.max_abs_exponent {
            return Err(EvalError::ExponentTooLarge { exponent,
                                                     max: limits.max_abs_exponent });
        }
        if base.abs() > limits.max_abs_base {
            return Err(EvalError::BaseTooLarge { base,
                                                 max: limits.max_abs_base });
        }
        Ok(())
    }
}
