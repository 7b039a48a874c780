use crate::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator {
    /// Applies a prefix operator.
    ///
    /// # Example
    /// ```
    /// use mathcheck::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Neg, 5.0), -5.0);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Pos, -5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Pos => value,
            UnaryOperator::Neg => -value,
        }
    }
}
