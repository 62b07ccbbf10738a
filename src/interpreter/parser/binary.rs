use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`. Each operator
    /// folds the expression built so far into the left operand of a new node,
    /// so `a - b - c` becomes `(a - b) - c`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    pub(in crate::interpreter::parser) fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current.token)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let operator = self.advance()?;
                let right = self.parse_term()?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        offset: operator.offset };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`, binding tighter than
    /// `+` and `-`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current.token)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let operator = self.advance()?;
                let right = self.parse_factor()?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        offset: operator.offset };
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of `+`, `-`,
/// `*` or `/`, and `None` for all other tokens.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
