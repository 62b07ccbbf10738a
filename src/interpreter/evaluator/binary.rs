use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Number,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// `+`, `-` and `*` stay integral when both operands are integers and fail
    /// with `RuntimeError::Overflow` if the result does not fit; a real operand
    /// promotes the operation to real. `/` always divides as reals, after
    /// checking that the right operand is not zero.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Offset of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::Evaluator, value::Number},
    /// };
    ///
    /// let (three, four) = (Number::Integer(3), Number::Integer(4));
    /// let v = Evaluator::eval_binary(BinaryOperator::Add, three, four, 0).unwrap();
    /// assert_eq!(v, Number::Integer(7));
    ///
    /// let (eight, two) = (Number::Integer(8), Number::Integer(2));
    /// let v = Evaluator::eval_binary(BinaryOperator::Div, eight, two, 0).unwrap();
    /// assert_eq!(v, Number::Real(4.0));
    ///
    /// let (one, zero) = (Number::Integer(1), Number::Integer(0));
    /// let err = Evaluator::eval_binary(BinaryOperator::Div, one, zero, 1).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { offset: 1 });
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Number,
                       right: Number,
                       offset: usize)
                       -> EvalResult<Number> {
        match op {
            BinaryOperator::Add => Self::eval_arithmetic(left, right, offset, i64::checked_add, |a, b| a + b),
            BinaryOperator::Sub => Self::eval_arithmetic(left, right, offset, i64::checked_sub, |a, b| a - b),
            BinaryOperator::Mul => Self::eval_arithmetic(left, right, offset, i64::checked_mul, |a, b| a * b),
            BinaryOperator::Div => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero { offset });
                }
                Ok(Number::Real(left.as_real() / right.as_real()))
            },
        }
    }

    /// Applies `integer` when both operands are integers, `real` otherwise.
    fn eval_arithmetic(left: Number,
                       right: Number,
                       offset: usize,
                       integer: fn(i64, i64) -> Option<i64>,
                       real: fn(f64, f64) -> f64)
                       -> EvalResult<Number> {
        match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => {
                integer(a, b).map(Number::Integer)
                             .ok_or(RuntimeError::Overflow { offset })
            },
            _ => Ok(Number::Real(real(left.as_real(), right.as_real()))),
        }
    }
}
