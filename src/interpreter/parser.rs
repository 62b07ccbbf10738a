/// Core parser state and the top-level entry point.
///
/// Holds the lexer and the single token of lookahead, and provides `parse`,
/// `expect` and the nesting-depth guard used by the grammar rules.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-folding `expr` and `term` rules for additive and
/// multiplicative operators.
pub mod binary;

/// Factor parsing.
///
/// Handles unary signs, integer literals and parenthesized groups.
pub mod unary;

pub use self::core::{DEFAULT_MAX_DEPTH, ParseResult, Parser};
