/// Binary operator evaluation logic.
///
/// Implements `+`, `-`, `*` and `/` with integer overflow checks, promotion
/// to real for mixed operands, and the division-by-zero check.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the identity and negation signs.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator itself, which walks the tree with an explicit work
/// stack, and the result type shared by the evaluation routines.
pub mod core;

pub use self::core::{EvalResult, Evaluator, evaluate_expr};
