//! Errors produced while tokenizing and parsing.

use crate::lexer::{Token, TokenKind};
use std::fmt;

/// Represents an error occurring during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("unterminated string literal")]
    UnterminatedString {
        /// Offset of the opening quote.
        position: usize,
    },
}

impl LexError {
    /// Byte offset of the offending character.
    pub fn position(&self) -> usize {
        match *self {
            LexError::UnexpectedCharacter { position, .. } => position,
            LexError::UnterminatedString { position } => position,
        }
    }
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Expression,
    Statement,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Expression => f.write_str("expression"),
            Expected::Statement => f.write_str("statement"),
        }
    }
}

/// Owned copy of the token that caused a [`SyntaxError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundToken {
    pub kind: TokenKind,
    pub text: String,
}

impl From<Token<'_>> for FoundToken {
    fn from(token: Token<'_>) -> Self {
        Self {
            kind: token.kind,
            text: token.text.to_string(),
        }
    }
}

impl fmt::Display for FoundToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.text)
    }
}

/// Represents a syntax error (compile time error).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The next token is not of the expected kind.
    #[error("expected {expected}, found {found}")]
    Unexpected {
        expected: Expected,
        found: FoundToken,
    },
    /// A token was required but none remained.
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: Expected },
    /// Statements or expressions are nested deeper than `limit`.
    #[error("nesting deeper than {limit} levels")]
    TooDeep { limit: usize },
}

impl SyntaxError {
    /// What the parser was looking for, if it failed on a token.
    pub fn expected(&self) -> Option<Expected> {
        match *self {
            SyntaxError::Unexpected { expected, .. } => Some(expected),
            SyntaxError::UnexpectedEof { expected } => Some(expected),
            SyntaxError::TooDeep { .. } => None,
        }
    }
}

/// Any error raised while turning source text into a program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// Byte offset of the error, when known.
    /// Tokens carry no positions, so only lexical errors have one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Lex(error) => Some(error.position()),
            Error::Syntax(_) => None,
        }
    }
}
