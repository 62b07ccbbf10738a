//! # reckon
//!
//! reckon is an arithmetic expression interpreter written in Rust.
//! It lexes, parses, and evaluates expressions built from integers, the four
//! arithmetic operators, parentheses, and unary signs.

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
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::evaluate_expr,
        parser::{DEFAULT_MAX_DEPTH, Parser},
        value::Number,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary and binary expression nodes.
/// - Attaches source offsets to AST nodes for error reporting.
pub mod ast;
/// Provides error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression, grouped by the stage that detects them, each carrying the
/// source offset where it occurred.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Combines them into [`error::EvalError`] at the public boundary.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and the numeric
/// value type.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Settings for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// How deeply parentheses and unary signs may nest before parsing fails
    /// with `ParseError::NestingTooDeep`.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Evaluates one arithmetic expression with the default [`Options`].
///
/// Each call builds its own lexer, parser and tree, so a failed call leaves
/// nothing behind and independent calls may run on separate threads.
///
/// # Errors
/// Returns [`EvalError::Lexical`] for text that is not a token,
/// [`EvalError::Syntax`] for tokens that do not form one complete expression,
/// and [`EvalError::Runtime`] for division by zero or integer overflow.
///
/// # Examples
/// ```
/// use reckon::{error::EvalError, evaluate, interpreter::value::Number};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Number::Integer(14));
/// assert_eq!(evaluate("-(3 + 4)").unwrap(), Number::Integer(-7));
/// assert_eq!(evaluate("7 / 2").unwrap(), Number::Real(3.5));
///
/// assert!(matches!(evaluate("1 / 0"), Err(EvalError::Runtime(_))));
/// assert!(matches!(evaluate("1 +"), Err(EvalError::Syntax(_))));
/// assert!(matches!(evaluate("1 + @"), Err(EvalError::Lexical(_))));
/// ```
pub fn evaluate(source: &str) -> Result<Number, EvalError> {
    evaluate_with(source, &Options::default())
}

/// Evaluates one arithmetic expression with the given [`Options`].
///
/// # Errors
/// See [`evaluate`].
///
/// # Examples
/// ```
/// use reckon::{Options, error::EvalError, evaluate_with};
///
/// let options = Options { max_depth: 2 };
/// assert!(evaluate_with("((1))", &options).is_ok());
/// assert!(matches!(evaluate_with("(((1)))", &options), Err(EvalError::Syntax(_))));
/// ```
pub fn evaluate_with(source: &str, options: &Options) -> Result<Number, EvalError> {
    let expr = parse_with(source, options)?;
    Ok(evaluate_expr(&expr)?)
}

/// Parses one arithmetic expression into its tree without evaluating it.
///
/// # Errors
/// Returns [`EvalError::Lexical`] or [`EvalError::Syntax`].
///
/// # Examples
/// ```
/// use reckon::parse;
///
/// let expr = parse("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse(source: &str) -> Result<Expr, EvalError> {
    parse_with(source, &Options::default())
}

/// Parses one arithmetic expression with the given [`Options`].
///
/// # Errors
/// Returns [`EvalError::Lexical`] or [`EvalError::Syntax`].
pub fn parse_with(source: &str, options: &Options) -> Result<Expr, EvalError> {
    let parser = Parser::new(source)?.with_max_depth(options.max_depth);
    Ok(parser.parse()?)
}
