/// The evaluator module reduces AST nodes to numbers.
///
/// The evaluator walks the tree produced by the parser, applies the unary and
/// binary operators, and reports runtime errors such as division by zero or
/// integer overflow. It holds no state between evaluations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces, on demand, a stream of
/// tokens: integers, the four arithmetic operators and parentheses. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offsets.
/// - Skips whitespace between tokens.
/// - Reports lexical errors for invalid characters or oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes tokens with one token of lookahead and constructs an
/// AST honoring operator precedence and left associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting syntax errors with their offsets.
/// - Bounds how deeply parentheses and signs may nest.
pub mod parser;
/// The value module defines the numeric result of evaluation.
pub mod value;
