use crate::ast::*;
use crate::error::{Error, Expected, SyntaxError};
use crate::lexer::{tokenize, Token, TokenKind};
use shlang_source::Source;

mod expr;
mod stmt;

/// Result of a parse step.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// How deeply statements and expressions may nest.
pub const MAX_DEPTH: usize = 256;

/// Recursive descent parser over a token sequence.
pub struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    /// Index of the next unread token.
    pos: usize,
    /// Current statement and expression nesting.
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }
}

impl<'src> Parser<'src> {
    /// Parses every function until the tokens run out.
    pub fn parse_program(&mut self) -> ParseResult<Program<'src>> {
        let mut functions = Vec::new();
        while self.peek().is_some() {
            functions.push(self.parse_function()?);
        }
        log::debug!("parsed {} functions", functions.len());
        Ok(Program { functions })
    }

    /// Parses a function definition.
    pub fn parse_function(&mut self) -> ParseResult<Function<'src>> {
        self.expect(TokenKind::Func)?;
        let name = self.parse_identifier()?;
        log::trace!("parsing function `{}`", name.as_str());

        self.expect(TokenKind::OpenParen)?;
        let params = if self.check(TokenKind::CloseParen) {
            None
        } else {
            Some(self.parse_params()?)
        };
        self.expect(TokenKind::CloseParen)?;

        let return_type = if self.eat(TokenKind::Colon) {
            Some(self.parse_identifier()?)
        } else {
            None
        };

        let body = self.parse_compound_stmt()?;
        Ok(Function {
            name,
            params,
            return_type,
            body,
        })
    }

    fn parse_params(&mut self) -> ParseResult<Vec<Declaration<'src>>> {
        let mut params = vec![self.parse_param()?];
        while self.eat(TokenKind::Comma) {
            params.push(self.parse_param()?);
        }
        Ok(params)
    }

    /// Parses `name: type`. Shared by parameters and `for` loops.
    fn parse_param(&mut self) -> ParseResult<Declaration<'src>> {
        let name = self.parse_identifier()?;
        self.expect(TokenKind::Colon)?;
        let var_type = self.parse_expr()?;
        Ok(Declaration { name, var_type })
    }

    fn parse_identifier(&mut self) -> ParseResult<Identifier<'src>> {
        self.expect(TokenKind::Id).map(Identifier::new)
    }
}

/// Parse utilities
impl<'src> Parser<'src> {
    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Predicate that tests whether the next token is of kind `kind`.
    /// Returns `false` at the end of input.
    fn check(&self, kind: TokenKind) -> bool {
        matches!(self.peek(), Some(token) if token.kind == kind)
    }

    /// Predicate that tests whether the next token is of kind `kind` and eats the next token if yes as a side effect.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes and returns the next token if it is of kind `kind`.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            found => Err(Self::unexpected(Expected::Token(kind), found)),
        }
    }

    /// Runs `parse` one nesting level deeper, failing past [`MAX_DEPTH`].
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Creates an unexpected token error, or an end of input error if `found` is `None`.
    fn unexpected(expected: Expected, found: Option<Token<'src>>) -> SyntaxError {
        match found {
            Some(token) => SyntaxError::Unexpected {
                expected,
                found: token.into(),
            },
            None => SyntaxError::UnexpectedEof { expected },
        }
    }
}

/// Tokenizes and parses a whole program.
pub fn parse<'src>(source: &Source<'src>) -> Result<Program<'src>, Error> {
    let tokens = tokenize(source.content)?;
    let program = Parser::new(tokens).parse_program()?;
    Ok(program)
}
