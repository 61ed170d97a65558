use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Parse errors accumulate inside the parser instead of aborting it; the
/// driver inspects the full list after `parse_program` returns.
pub enum ParseError {
    /// The token following the current one did not have the expected kind.
    UnexpectedToken {
        /// The kind the parser required next.
        expected: TokenKind,
        /// The kind that was actually found.
        found:    TokenKind,
    },
    /// No prefix parse rule exists for the token starting an expression.
    NoPrefixRule {
        /// The kind in prefix position.
        found: TokenKind,
    },
    /// An integer literal did not fit into a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The offending literal text.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixRule { found } => {
                write!(f, "no prefix parse function for {found} found")
            },
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
