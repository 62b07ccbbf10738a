use tracing::debug;

use crate::{
    ast::Expr,
    error::{Expected, ParseError},
    interpreter::lexer::{Lexer, Spanned, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply parentheses and unary signs may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A recursive-descent parser with one token of lookahead.
///
/// The grammar, with left-associative binary operators:
///
/// ```text
///     expr   := term ( ("+" | "-") term )*
///     term   := factor ( ("*" | "/") factor )*
///     factor := ("+" | "-") factor | INTEGER | "(" expr ")"
/// ```
///
/// Tokens are pulled from the [`Lexer`] one at a time, so a lexical error is
/// reported at the point the parser reaches it. A parser is consumed by
/// [`Parser::parse`]; parsing again needs a new instance.
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) lexer:     Lexer<'src>,
    pub(in crate::interpreter::parser) current:   Spanned,
    pub(in crate::interpreter::parser) depth:     usize,
    pub(in crate::interpreter::parser) max_depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the first token is not valid.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  depth: 0,
                  max_depth: DEFAULT_MAX_DEPTH })
    }

    /// Sets the nesting limit for parentheses and unary signs.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole input as a single expression.
    ///
    /// This is the entry point for parsing. The expression must be followed by
    /// the end of input.
    ///
    /// # Errors
    /// Returns a `ParseError` if the tokens do not form an expression, if
    /// tokens remain after it, if nesting exceeds the limit, or if the lexer
    /// fails along the way.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::parser::Parser;
    ///
    /// let expr = Parser::new("10 - 2 - 3").unwrap().parse().unwrap();
    /// assert_eq!(expr.to_string(), "((10 - 2) - 3)");
    ///
    /// let expr = Parser::new("2 + 3 * -4").unwrap().parse().unwrap();
    /// assert_eq!(expr.to_string(), "(2 + (3 * (-4)))");
    ///
    /// assert!(Parser::new("1 2").unwrap().parse().is_err());
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr()?;
        match self.current {
            Spanned { token: Token::End, .. } => {
                debug!(nodes = expr.node_count(), "parsed expression");
                Ok(expr)
            },
            Spanned { token, offset } => {
                Err(ParseError::UnexpectedTrailingTokens { found: token.kind(),
                                                           offset })
            },
        }
    }

    /// Consumes the lookahead and reads the next token in its place.
    ///
    /// Returns the consumed token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Spanned> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the lookahead if it has the given kind.
    ///
    /// # Errors
    /// Returns `UnexpectedEndOfInput` if the input ended, or `UnexpectedToken`
    /// naming the expected and found kinds otherwise.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind)
                                                 -> ParseResult<Spanned> {
        if self.current.token.kind() == kind {
            return self.advance();
        }
        Err(self.unexpected(Expected::Token(kind)))
    }

    /// Builds the error for a lookahead that does not fit what the grammar
    /// requires.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: Expected) -> ParseError {
        let Spanned { token, offset } = self.current;
        match token {
            Token::End => ParseError::UnexpectedEndOfInput { expected, offset },
            _ => ParseError::UnexpectedToken { expected,
                                               found: token.kind(),
                                               offset },
        }
    }

    /// Enters one level of nesting, failing once the limit is crossed.
    pub(in crate::interpreter::parser) fn descend(&mut self, offset: usize) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    offset });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting.
    pub(in crate::interpreter::parser) const fn ascend(&mut self) {
        self.depth -= 1;
    }
}
