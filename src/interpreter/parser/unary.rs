use crate::{
    ast::{Expr, UnaryOperator},
    error::Expected,
    interpreter::{
        lexer::{Spanned, Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a signed factor, an integer or a parenthesized group.
    ///
    /// Grammar: `factor := ("+" | "-") factor | INTEGER | "(" expr ")"`
    ///
    /// # Errors
    /// Returns `UnexpectedEndOfInput` when the input stops where a factor is
    /// required (as in `1 +`), and `UnexpectedToken` for any other token that
    /// cannot start a factor.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current.token {
            Token::Plus => self.parse_unary(UnaryOperator::Plus),
            Token::Minus => self.parse_unary(UnaryOperator::Negate),
            Token::Integer(_) => self.parse_literal(),
            Token::LParen => self.parse_grouping(),
            _ => Err(self.unexpected(Expected::Factor)),
        }
    }

    /// Parses a sign followed by another factor.
    ///
    /// The recursion is what lets signs repeat: `--5` is `-(-5)` and `+-3` is
    /// `+(-3)`. Each sign counts as one level of nesting.
    fn parse_unary(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        let Spanned { offset, .. } = self.advance()?;
        self.descend(offset)?;
        let expr = self.parse_factor()?;
        self.ascend();
        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           offset })
    }

    /// Parses an integer literal.
    fn parse_literal(&mut self) -> ParseResult<Expr> {
        let Spanned { token: Token::Integer(value),
                      offset, } = self.current
        else {
            return Err(self.unexpected(Expected::Token(TokenKind::Integer)));
        };
        self.advance()?;
        Ok(Expr::Number { value, offset })
    }

    /// Parses a parenthesized expression.
    ///
    /// Expected form `( expression )`
    ///
    /// The function consumes the opening parenthesis, parses the enclosed
    /// expression, and then requires a closing `)`.
    ///
    /// Grammar `grouping := "(" expr ")"`
    ///
    /// # Returns
    /// The inner expression as-is (no wrapper node).
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let Spanned { offset, .. } = self.advance()?;
        self.descend(offset)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        self.ascend();
        Ok(expr)
    }
}
