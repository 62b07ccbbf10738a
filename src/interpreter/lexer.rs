use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched by the generated lexer; [`Lexer`] produces
    /// it once the source is exhausted.
    End,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// The kind of a [`Token`], without its payload.
///
/// Used where the parser names what it expected or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    End,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::End.kind(), TokenKind::End);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            // `Ignored` is skipped by the generated lexer and never reaches callers.
            Self::End | Self::Ignored => TokenKind::End,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Integer => "integer",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::End => "end of input",
        };
        write!(f, "{kind}")
    }
}

/// Error produced by the generated lexer before it is given a location.
///
/// [`Lexer`] turns this into a [`LexError`] carrying the offending text and
/// its offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with the current character.
    #[default]
    InvalidCharacter,
    /// A digit run does not fit in an `i64`.
    LiteralTooLarge,
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    /// The token itself.
    pub token:  Token,
    /// Byte offset of the first character of the token.
    pub offset: usize,
}

/// Produces tokens on demand from a source string.
///
/// Whitespace between tokens is skipped. Once the source is exhausted every
/// call to [`Lexer::next_token`] returns [`Token::End`]; the lexer never
/// restarts, so lexing the same text again needs a fresh instance.
pub struct Lexer<'src> {
    inner:     logos::Lexer<'src, Token>,
    exhausted: bool,
    done:      bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:     Token::lexer(source),
               exhausted: false,
               done:      false, }
    }

    /// Returns the next token in the source.
    ///
    /// # Errors
    /// Returns a [`LexError`] for a character that begins no token, or for an
    /// integer literal that does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new(" 12 *(");
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Integer(12));
    /// assert_eq!(lexer.next_token().unwrap().token, Token::Star);
    /// assert_eq!(lexer.next_token().unwrap().token, Token::LParen);
    /// assert_eq!(lexer.next_token().unwrap().token, Token::End);
    /// assert_eq!(lexer.next_token().unwrap().token, Token::End);
    ///
    /// let err = Lexer::new("1+@").nth(2).unwrap().unwrap_err();
    /// assert_eq!(err.to_string(), "Error at offset 2: Invalid character '@'.");
    /// ```
    pub fn next_token(&mut self) -> LexResult<Spanned> {
        if self.exhausted {
            return Ok(self.end());
        }

        match self.inner.next() {
            Some(Ok(token)) => {
                let offset = self.inner.span().start;
                trace!(?token, offset, "lexed token");
                Ok(Spanned { token, offset })
            },
            Some(Err(kind)) => Err(self.locate(&kind)),
            None => {
                self.exhausted = true;
                Ok(self.end())
            },
        }
    }

    fn end(&self) -> Spanned {
        Spanned { token:  Token::End,
                  offset: self.inner.source().len(), }
    }

    fn locate(&self, kind: &LexErrorKind) -> LexError {
        let offset = self.inner.span().start;
        let slice = self.inner.slice();
        match kind {
            LexErrorKind::InvalidCharacter => {
                let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                LexError::InvalidCharacter { character, offset }
            },
            LexErrorKind::LiteralTooLarge => LexError::LiteralTooLarge { literal: slice.to_string(),
                                                                         offset },
        }
    }
}

/// Yields every token up to and including [`Token::End`], then stops. The
/// first error is yielded once and ends the sequence.
impl Iterator for Lexer<'_> {
    type Item = LexResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.next_token();
        if !matches!(&next, Ok(spanned) if spanned.token != Token::End) {
            self.done = true;
        }
        Some(next)
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value if it fits.
/// - `Err(LexErrorKind::LiteralTooLarge)`: If the digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::LiteralTooLarge)
}
