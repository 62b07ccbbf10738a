use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::value::Number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// One pending step of the traversal.
enum Frame<'a> {
    /// Evaluate this node and push its value.
    Visit(&'a Expr),
    /// Pop one operand and apply a unary operator to it.
    Unary {
        op:     UnaryOperator,
        offset: usize,
    },
    /// Pop the right then the left operand and apply a binary operator.
    Binary {
        op:     BinaryOperator,
        offset: usize,
    },
}

/// Reduces an [`Expr`] tree to a single [`Number`].
///
/// The tree is walked post-order with an explicit work stack instead of
/// recursion, so the depth of a tree (for example the left spine of
/// `1 + 1 + ... + 1`) never grows the call stack. Left operands are always
/// evaluated before right operands.
#[derive(Default)]
pub struct Evaluator<'a> {
    work:   Vec<Frame<'a>>,
    values: Vec<Number>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self { work:   Vec::new(),
               values: Vec::new(), }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// This is the main entry point for expression evaluation. Literals yield
    /// integers, signs apply to the value of their operand, and binary
    /// operators combine the values of both sides once both are known.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` when a right operand of `/` is
    /// zero and `RuntimeError::Overflow` when integer arithmetic overflows.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     interpreter::{evaluator::Evaluator, parser::Parser, value::Number},
    /// };
    ///
    /// let expr = Parser::new("(2 + 3) * 4").unwrap().parse().unwrap();
    /// assert_eq!(Evaluator::new().eval(&expr).unwrap(), Number::Integer(20));
    ///
    /// let expr = Parser::new("7 / 2").unwrap().parse().unwrap();
    /// assert_eq!(Evaluator::new().eval(&expr).unwrap(), Number::Real(3.5));
    /// ```
    pub fn eval(&mut self, expr: &'a Expr) -> EvalResult<Number> {
        self.work.clear();
        self.values.clear();
        self.work.push(Frame::Visit(expr));

        while let Some(frame) = self.work.pop() {
            match frame {
                Frame::Visit(Expr::Number { value, .. }) => self.values.push(Number::Integer(*value)),
                Frame::Visit(Expr::UnaryOp { op, expr, offset }) => {
                    self.work.push(Frame::Unary { op:     *op,
                                                  offset: *offset, });
                    self.work.push(Frame::Visit(expr));
                },
                Frame::Visit(Expr::BinaryOp { left,
                                              op,
                                              right,
                                              offset, }) => {
                    self.work.push(Frame::Binary { op:     *op,
                                                   offset: *offset, });
                    self.work.push(Frame::Visit(right));
                    self.work.push(Frame::Visit(left));
                },
                Frame::Unary { op, offset } => {
                    let value = self.pop_operand()?;
                    self.values.push(Self::eval_unary(op, value, offset)?);
                },
                Frame::Binary { op, offset } => {
                    let right = self.pop_operand()?;
                    let left = self.pop_operand()?;
                    self.values.push(Self::eval_binary(op, left, right, offset)?);
                },
            }
        }

        let result = self.pop_operand()?;
        if !self.values.is_empty() {
            return Err(RuntimeError::Internal { details: format!("{} operands left after evaluation",
                                                                 self.values.len()) });
        }

        debug!(%result, "evaluated expression");
        Ok(result)
    }

    fn pop_operand(&mut self) -> EvalResult<Number> {
        self.values
            .pop()
            .ok_or_else(|| RuntimeError::Internal { details: "operand stack is empty".to_string() })
    }
}

/// Evaluates `expr` with a fresh [`Evaluator`].
///
/// # Errors
/// See [`Evaluator::eval`].
pub fn evaluate_expr(expr: &Expr) -> EvalResult<Number> {
    Evaluator::new().eval(expr)
}
