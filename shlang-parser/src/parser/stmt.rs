use super::*;

impl<'src> Parser<'src> {
    /// Parses a statement.
    pub fn parse_stmt(&mut self) -> ParseResult<Stmt<'src>> {
        self.nested(Self::parse_any_stmt)
    }

    fn parse_any_stmt(&mut self) -> ParseResult<Stmt<'src>> {
        let token = self
            .peek()
            .ok_or(SyntaxError::UnexpectedEof {
                expected: Expected::Statement,
            })?;
        log::trace!("parsing statement starting at {}", token);

        match token.kind {
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::OpenBrace => self.parse_compound_stmt().map(Stmt::Compound),
            _ => self.parse_basic_stmt(),
        }
    }

    /// Parses a brace-delimited block.
    pub fn parse_compound_stmt(&mut self) -> ParseResult<CompoundStatement<'src>> {
        self.expect(TokenKind::OpenBrace)?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::CloseBrace) {
            if self.peek().is_none() {
                return Err(SyntaxError::UnexpectedEof {
                    expected: Expected::Token(TokenKind::CloseBrace),
                });
            }
            statements.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::CloseBrace)?;

        Ok(CompoundStatement { statements })
    }

    fn parse_for_stmt(&mut self) -> ParseResult<Stmt<'src>> {
        self.expect(TokenKind::For)?;
        let declaration = self.parse_param()?;
        self.expect(TokenKind::Equal)?;
        let initial_value = self.parse_expr()?;
        self.expect(TokenKind::To)?;
        let limit = self.parse_expr()?;
        let body = self.parse_stmt()?;
        Ok(Stmt::For {
            declaration,
            initial_value,
            limit,
            body: Box::new(body),
        })
    }

    fn parse_while_stmt(&mut self) -> ParseResult<Stmt<'src>> {
        self.expect(TokenKind::While)?;
        let condition = self.parse_expr()?;
        let body = self.parse_stmt()?;
        Ok(Stmt::While {
            condition,
            body: Box::new(body),
        })
    }

    fn parse_if_stmt(&mut self) -> ParseResult<Stmt<'src>> {
        self.expect(TokenKind::If)?;
        let condition = self.parse_expr()?;
        let true_branch = self.parse_stmt()?;
        let false_branch = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            true_branch: Box::new(true_branch),
            false_branch,
        })
    }

    fn parse_return_stmt(&mut self) -> ParseResult<Stmt<'src>> {
        self.expect(TokenKind::Return)?;
        let value = self.parse_expr()?;
        Ok(Stmt::Return(value))
    }

    /// Parses a declaration, a bare literal, a call, an assignment or a bare identifier.
    fn parse_basic_stmt(&mut self) -> ParseResult<Stmt<'src>> {
        let token = self.peek();
        match token.map(|t| t.kind) {
            Some(TokenKind::Var) => self.parse_var_declaration(),
            Some(TokenKind::StringLit | TokenKind::NumberLit) => {
                self.parse_literal().map(Stmt::Literal)
            }
            Some(TokenKind::Id) => {
                let identifier = self.parse_identifier()?;
                if self.check(TokenKind::OpenParen) {
                    self.parse_call(identifier).map(Stmt::Call)
                } else if self.eat(TokenKind::Equal) {
                    let value = self.parse_expr()?;
                    Ok(Stmt::Assignment(Assignment {
                        target: AssignTarget::Identifier(identifier),
                        value,
                    }))
                } else {
                    Ok(Stmt::Identifier(identifier))
                }
            }
            _ => Err(Self::unexpected(Expected::Statement, token)),
        }
    }

    /// Parses `var name: type` with an optional `= value` initializer.
    fn parse_var_declaration(&mut self) -> ParseResult<Stmt<'src>> {
        self.expect(TokenKind::Var)?;
        let name = self.parse_identifier()?;
        self.expect(TokenKind::Colon)?;
        let var_type = self.parse_expr()?;
        let declaration = Declaration { name, var_type };

        if self.eat(TokenKind::Equal) {
            let value = self.parse_expr()?;
            Ok(Stmt::Assignment(Assignment {
                target: AssignTarget::Declaration(declaration),
                value,
            }))
        } else {
            Ok(Stmt::Declaration(declaration))
        }
    }
}
