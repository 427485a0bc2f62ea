use super::*;

impl<'src> Parser<'src> {
    /* Expressions */
    /// Parses any expression.
    /// Operator tokens are never consumed here: `1 + 2` parses as `1` and leaves `+` behind.
    pub fn parse_expr(&mut self) -> ParseResult<Expr<'src>> {
        self.nested(Self::parse_any_expr)
    }

    fn parse_any_expr(&mut self) -> ParseResult<Expr<'src>> {
        let token = self.peek();
        match token.map(|t| t.kind) {
            Some(TokenKind::OpenParen) => {
                self.next();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::CloseParen)?;
                Ok(expr)
            }
            Some(TokenKind::Id) => self.parse_identifier_or_call_expr(),
            Some(TokenKind::StringLit | TokenKind::NumberLit) => {
                self.parse_literal().map(Expr::Literal)
            }
            _ => Err(Self::unexpected(Expected::Expression, token)),
        }
    }

    /* Expressions.Literals */
    /// Parses a literal expression.
    /// A literal can be either a string literal or a number literal.
    pub(super) fn parse_literal(&mut self) -> ParseResult<Token<'src>> {
        match self.peek() {
            Some(token) if matches!(token.kind, TokenKind::StringLit | TokenKind::NumberLit) => {
                self.next();
                Ok(token)
            }
            found => Err(Self::unexpected(Expected::Expression, found)),
        }
    }

    /* Expressions.Identifier */
    /// Parses an identifier or a call expression.
    fn parse_identifier_or_call_expr(&mut self) -> ParseResult<Expr<'src>> {
        let identifier = self.parse_identifier()?;
        if self.check(TokenKind::OpenParen) {
            self.parse_call(identifier).map(Expr::Call)
        } else {
            Ok(Expr::Identifier(identifier))
        }
    }

    /// Parses the argument list of a call to `identifier`, starting at `(`.
    /// Empty parentheses leave `args` absent.
    pub(super) fn parse_call(
        &mut self,
        identifier: Identifier<'src>,
    ) -> ParseResult<FunctionCall<'src>> {
        self.expect(TokenKind::OpenParen)?;
        let args = if self.check(TokenKind::CloseParen) {
            None
        } else {
            Some(self.parse_args()?)
        };
        self.expect(TokenKind::CloseParen)?;
        Ok(FunctionCall { identifier, args })
    }

    fn parse_args(&mut self) -> ParseResult<Vec<Expr<'src>>> {
        let mut args = vec![self.parse_expr()?];
        while self.eat(TokenKind::Comma) {
            args.push(self.parse_expr()?);
        }
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tests::parser;
    use test_log::test;

    fn expr(source: &str) -> Expr<'_> {
        let mut parser = parser(source);
        let ast = parser.parse_expr().unwrap();
        assert!(parser.peek().is_none(), "trailing tokens in {source:?}");
        ast
    }

    fn id(name: &str) -> Identifier<'_> {
        Identifier::new(Token::new(TokenKind::Id, name))
    }

    #[test]
    fn test_literal() {
        assert_eq!(
            expr("1"),
            Expr::Literal(Token::new(TokenKind::NumberLit, "1"))
        );
        assert_eq!(
            expr("\"text\""),
            Expr::Literal(Token::new(TokenKind::StringLit, "text"))
        );
    }

    #[test]
    fn test_identifier() {
        assert_eq!(expr("foo"), Expr::Identifier(id("foo")));
    }

    #[test]
    fn test_parenthesized() {
        assert_eq!(expr("((foo))"), Expr::Identifier(id("foo")));
    }

    #[test]
    fn test_fn_call() {
        assert_eq!(
            expr("foo()"),
            Expr::Call(FunctionCall {
                identifier: id("foo"),
                args: None,
            })
        );
        assert_eq!(
            expr("foo(1, bar, baz())"),
            Expr::Call(FunctionCall {
                identifier: id("foo"),
                args: Some(vec![
                    Expr::Literal(Token::new(TokenKind::NumberLit, "1")),
                    Expr::Identifier(id("bar")),
                    Expr::Call(FunctionCall {
                        identifier: id("baz"),
                        args: None,
                    }),
                ]),
            })
        );
    }

    #[test]
    fn test_operators_are_left_unparsed() {
        let mut parser = parser("1 + 2");
        assert_eq!(
            parser.parse_expr().unwrap(),
            Expr::Literal(Token::new(TokenKind::NumberLit, "1"))
        );
        assert_eq!(parser.peek().map(|t| t.kind), Some(TokenKind::Plus));
    }

    #[test]
    fn test_unclosed_call_fails() {
        assert_eq!(
            parser("foo(1").parse_expr().unwrap_err(),
            SyntaxError::UnexpectedEof {
                expected: Expected::Token(TokenKind::CloseParen)
            }
        );
        assert_eq!(
            parser("foo(").parse_expr().unwrap_err(),
            SyntaxError::UnexpectedEof {
                expected: Expected::Expression
            }
        );
    }

    #[test]
    fn test_trailing_comma_fails() {
        let error = parser("foo(1,)").parse_expr().unwrap_err();
        assert!(matches!(
            error,
            SyntaxError::Unexpected { expected: Expected::Expression, ref found }
                if found.kind == TokenKind::CloseParen
        ));
    }

    #[test]
    fn test_keyword_is_not_an_expression() {
        let error = parser("var").parse_expr().unwrap_err();
        assert!(matches!(
            error,
            SyntaxError::Unexpected { expected: Expected::Expression, ref found }
                if found.kind == TokenKind::Var && found.text == "var"
        ));
    }
}
