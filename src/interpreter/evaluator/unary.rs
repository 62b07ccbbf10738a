use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the value unchanged.
    /// - `Negate`: numeric negation for integers and reals. Negating
    ///   `i64::MIN` overflows.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Number},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, Number::Integer(5), 0).unwrap();
    /// assert_eq!(v, Number::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Plus, Number::Real(-1.5), 0).unwrap();
    /// assert_eq!(v, Number::Real(-1.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Number, offset: usize) -> EvalResult<Number> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => match value {
                Number::Integer(n) => n.checked_neg()
                                       .map(Number::Integer)
                                       .ok_or(RuntimeError::Overflow { offset }),
                Number::Real(r) => Ok(Number::Real(-r)),
            },
        }
    }
}
