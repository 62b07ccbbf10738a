/// Lexical errors.
///
/// Raised when the input contains a character that starts no token, or an
/// integer literal too large to represent.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax errors detected while matching tokens against the
/// grammar: unexpected tokens, premature end of input, trailing input and
/// excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a tree, such as division by
/// zero or integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::{Expected, ParseError};
pub use runtime_error::RuntimeError;

/// Every way a single call to [`crate::evaluate`] can fail.
///
/// The three variants mirror the three stages of the pipeline. A lexical error
/// surfaced through the parser is reported as [`EvalError::Lexical`], never as
/// a syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input contains text that is not a token.
    Lexical(LexError),
    /// The tokens do not match the grammar.
    Syntax(ParseError),
    /// Evaluation of a well-formed expression failed.
    Runtime(RuntimeError),
}

impl From<LexError> for EvalError {
    fn from(e: LexError) -> Self {
        Self::Lexical(e)
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Lex(e) => Self::Lexical(e),
            e => Self::Syntax(e),
        }
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
