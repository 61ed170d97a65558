use crate::{
    ast::BlockStatement,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser {
    /// Parses a brace-delimited block.
    ///
    /// On entry `cur` is the opening `{`. Statements are collected until a
    /// `}` or the end of input; on exit `cur` is that closing token, per the
    /// cursor invariant. An unterminated block is not an error of its own —
    /// the inner rules will already have recorded what went wrong.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.next_token();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { statements }
    }
}
