use crate::{error::LexError, interpreter::lexer::TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// The parser pulls tokens lazily, so a lexical error met while advancing is
/// carried through here unchanged as [`ParseError::Lex`].
pub enum ParseError {
    /// The lexer rejected the input while the parser was advancing.
    Lex(LexError),
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// What the grammar required.
        expected: Expected,
        /// The token kind actually found.
        found:    TokenKind,
        /// Byte offset of the found token.
        offset:   usize,
    },
    /// Reached the end of input while more was required.
    UnexpectedEndOfInput {
        /// What the grammar required.
        expected: Expected,
        /// Byte offset of the end of input.
        offset:   usize,
    },
    /// A complete expression was parsed but tokens remain.
    UnexpectedTrailingTokens {
        /// The first token kind after the expression.
        found:  TokenKind,
        /// Byte offset of that token.
        offset: usize,
    },
    /// Parentheses and unary signs are nested deeper than allowed.
    NestingTooDeep {
        /// The configured nesting limit.
        limit:  usize,
        /// Byte offset of the token that crossed the limit.
        offset: usize,
    },
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token kind, as in `expect(RParen)`.
    Token(TokenKind),
    /// The start of a factor: a sign, an integer or `(`.
    Factor,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Factor => write!(f, "a number, a sign or '('"),
        }
    }
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset(),
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset, .. }
            | Self::UnexpectedTrailingTokens { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),

            Self::UnexpectedToken { expected,
                                    found,
                                    offset, } => write!(f,
                                                        "Error at offset {offset}: Expected {expected}, found {found}."),

            Self::UnexpectedEndOfInput { expected, offset } => write!(f,
                                                                      "Error at offset {offset}: Unexpected end of input, expected {expected}."),

            Self::UnexpectedTrailingTokens { found, offset } => write!(f,
                                                                       "Error at offset {offset}: Extra tokens after expression, starting with {found}."),

            Self::NestingTooDeep { limit, offset } => write!(f,
                                                             "Error at offset {offset}: Expression is nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
