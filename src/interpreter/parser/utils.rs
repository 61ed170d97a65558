use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Parses a comma-separated expression list terminated by `closing`.
    ///
    /// Shared by array literals (`]`) and call arguments (`)`). On entry
    /// `cur` is the opening delimiter; on exit `cur` is the closing one. An
    /// immediately encountered closing token produces an empty list.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                closing: TokenKind)
                                                                -> Option<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }

        Some(items)
    }

    /// Parses a function literal's parameter list.
    ///
    /// On entry `cur` is the opening `(`. The list is a comma-separated
    /// sequence of identifiers, allowing empty; on exit `cur` is the closing
    /// `)`.
    pub(in crate::interpreter::parser) fn parse_function_parameters(&mut self)
                                                                    -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        parameters.push(self.cur.literal.clone());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(self.cur.literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(parameters)
    }
}
