use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Parses the current identifier token into an identifier expression.
    pub(in crate::interpreter::parser) fn parse_identifier(&self) -> Expr {
        Expr::Identifier { name: self.cur.literal.clone(), }
    }

    /// Parses the current integer token.
    ///
    /// A literal that does not fit into an `i64` records an error and
    /// produces no node.
    pub(in crate::interpreter::parser) fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.cur.literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral { value }),
            Err(_) => {
                self.errors
                    .push(ParseError::InvalidIntegerLiteral { literal: self.cur.literal.clone(), });
                None
            },
        }
    }

    pub(in crate::interpreter::parser) fn parse_string_literal(&self) -> Expr {
        Expr::StringLiteral { value: self.cur.literal.clone(), }
    }

    pub(in crate::interpreter::parser) fn parse_boolean_literal(&self) -> Expr {
        Expr::BooleanLiteral { value: self.cur_is(TokenKind::True), }
    }

    /// Parses a prefix operation (`!` or `-`).
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so prefix operators
    /// bind more tightly than any binary operator: `-a * b` groups as
    /// `((-a) * b)`.
    pub(in crate::interpreter::parser) fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let operator = match self.cur.kind {
            TokenKind::Bang => PrefixOperator::Bang,
            _ => PrefixOperator::Minus,
        };
        self.next_token();

        let right = Box::new(self.parse_expression(Precedence::Prefix)?);
        Some(Expr::Prefix { operator, right })
    }

    /// Parses a parenthesized expression.
    ///
    /// Grouping has no node of its own; the parentheses only reset the
    /// precedence so the inner expression parses at the lowest level.
    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expr)
    }

    /// Parses an array literal `[e1, e2, …]`, allowing empty.
    pub(in crate::interpreter::parser) fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::ArrayLiteral { elements })
    }

    /// Parses a hash literal `{k1: v1, k2: v2, …}`, allowing empty.
    ///
    /// Keys and values are arbitrary expressions. Duplicate keys are kept in
    /// source order here; the evaluator resolves them last-writer-wins.
    pub(in crate::interpreter::parser) fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        Some(Expr::HashLiteral { pairs })
    }

    /// Parses a function literal `fn(p1, p2) { <body> }`.
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expr::FunctionLiteral { parameters, body })
    }
}
