use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

/// Maps a token to its infix operator.
///
/// Returns `None` for tokens that are not binary operators; the expression
/// loop only calls into the infix rules for registered kinds, so the rules
/// themselves never see a `None`.
#[must_use]
pub const fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}

impl Parser {
    /// Parses a binary operation, with `left` already parsed and `cur` on
    /// the operator.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes all binary operators left-associative: `a + b + c` groups as
    /// `((a + b) + c)`.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                 left: Expr)
                                                                 -> Option<Expr> {
        let operator = infix_operator(self.cur.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();

        let right = Box::new(self.parse_expression(precedence)?);
        Some(Expr::Infix { left: Box::new(left),
                           operator,
                           right })
    }

    /// Parses a call expression, with the callee already parsed and `cur` on
    /// the opening `(`.
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self,
                                                                function: Expr)
                                                                -> Option<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call { function: Box::new(function),
                          arguments })
    }

    /// Parses an index expression, with the container already parsed and
    /// `cur` on the opening `[`.
    pub(in crate::interpreter::parser) fn parse_index_expression(&mut self,
                                                                 left: Expr)
                                                                 -> Option<Expr> {
        self.next_token();
        let index = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expr::Index { left: Box::new(left),
                           index })
    }
}
