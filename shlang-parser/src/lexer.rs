use crate::error::LexError;
use logos::Logos;
use std::fmt;

/// The kind of a [`Token`].
#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r]+")]
pub enum TokenKind {
    // punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("=")]
    Equal,

    // binary operators, lexed but not yet part of any expression
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,

    // literals
    #[regex(r#""[^"]*""#)]
    StringLit,
    #[regex("[0-9]+")]
    NumberLit,

    // keywords
    #[token("for")]
    For,
    #[token("to")]
    To,
    #[token("while")]
    While,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("func")]
    Func,
    #[token("var")]
    Var,

    // identifiers
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,
}

impl TokenKind {
    /// Returns `true` if the kind is one of the reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::For
                | TokenKind::To
                | TokenKind::While
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::Func
                | TokenKind::Var
        )
    }

    /// The name used when exchanging token streams with other tools.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::OpenBrace => "OPEN_BRACE",
            TokenKind::CloseBrace => "CLOSE_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Equal => "EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::StringLit => "STRING",
            TokenKind::NumberLit => "NUMBER",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::While => "WHILE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Func => "FUNC",
            TokenKind::Var => "VAR",
            TokenKind::Id => "ID",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexed token borrowing its text from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The matched text. String literals exclude their quotes.
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.text)
    }
}

/// Whitespace as far as the tokenizer is concerned.
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Iterator over the tokens of a source string.
/// Stops after the first error.
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, TokenKind>,
    failed: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: TokenKind::lexer(source),
            failed: false,
        }
    }

    fn error(&self) -> LexError {
        let position = self.lexer.span().start;
        match self.lexer.source()[position..].chars().next() {
            Some(character) if character != '"' => LexError::UnexpectedCharacter {
                character,
                position,
            },
            _ => LexError::UnterminatedString { position },
        }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let kind = match self.lexer.next()? {
            Ok(kind) => kind,
            Err(()) => {
                self.failed = true;
                return Some(Err(self.error()));
            }
        };
        let slice = self.lexer.slice();

        let token = match kind {
            TokenKind::StringLit => Token::new(kind, &slice[1..slice.len() - 1]),
            // a keyword only counts when followed by whitespace, so `for(` starts an identifier
            kind if kind.is_keyword() => {
                let terminated = self
                    .lexer
                    .remainder()
                    .chars()
                    .next()
                    .map_or(true, is_whitespace);
                if terminated {
                    Token::new(kind, slice)
                } else {
                    Token::new(TokenKind::Id, slice)
                }
            }
            _ => Token::new(kind, slice),
        };
        Some(Ok(token))
    }
}

/// Tokenizes the whole `source`, failing on the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let tokens = Tokenizer::new(source).collect::<Result<Vec<_>, _>>()?;
    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("( ) { } , : = + - * /"),
            vec![
                OpenParen, CloseParen, OpenBrace, CloseBrace, Comma, Colon, Equal, Plus, Minus,
                Mul, Div
            ]
        );
    }

    #[test]
    fn test_punctuation_count_matches_characters() {
        let source = "(\t)\n{ }  ,:=\n\n+ -*/ ( (";
        let non_whitespace = source.chars().filter(|c| !c.is_whitespace()).count();
        assert_eq!(tokenize(source).unwrap().len(), non_whitespace);
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(
            tokenize("\"hello\"").unwrap(),
            vec![Token::new(StringLit, "hello")]
        );
        assert_eq!(tokenize("\"\"").unwrap(), vec![Token::new(StringLit, "")]);
        assert_eq!(
            tokenize("\"two\nlines\"").unwrap(),
            vec![Token::new(StringLit, "two\nlines")]
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            tokenize("var s: string = \"oops"),
            Err(LexError::UnterminatedString { position: 16 })
        );
    }

    #[test]
    fn test_number() {
        assert_eq!(
            tokenize("0 1234").unwrap(),
            vec![Token::new(NumberLit, "0"), Token::new(NumberLit, "1234")]
        );
        // no signs or decimals
        assert_eq!(kinds("-1"), vec![Minus, NumberLit]);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("for to while if else return func var "),
            vec![For, To, While, If, Else, Return, Func, Var]
        );
    }

    #[test]
    fn test_keyword_at_end_of_input() {
        assert_eq!(kinds("} else"), vec![CloseBrace, Else]);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(tokenize("forever").unwrap(), vec![Token::new(Id, "forever")]);
        assert_eq!(tokenize("toint").unwrap(), vec![Token::new(Id, "toint")]);
        assert_eq!(tokenize("if_").unwrap(), vec![Token::new(Id, "if_")]);
    }

    #[test]
    fn test_keyword_needs_whitespace() {
        assert_eq!(
            tokenize("return(x)").unwrap(),
            vec![
                Token::new(Id, "return"),
                Token::new(OpenParen, "("),
                Token::new(Id, "x"),
                Token::new(CloseParen, ")"),
            ]
        );
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            tokenize("_foo bar9 x").unwrap(),
            vec![
                Token::new(Id, "_foo"),
                Token::new(Id, "bar9"),
                Token::new(Id, "x")
            ]
        );
        assert_eq!(kinds("9lives"), vec![NumberLit, Id]);
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            tokenize("x = 1; y"),
            Err(LexError::UnexpectedCharacter {
                character: ';',
                position: 5
            })
        );
        assert_eq!(
            tokenize("é"),
            Err(LexError::UnexpectedCharacter {
                character: 'é',
                position: 0
            })
        );
    }

    #[test]
    fn test_tokenizer_stops_after_error() {
        let mut tokenizer = Tokenizer::new("a @ b");
        assert_eq!(tokenizer.next(), Some(Ok(Token::new(Id, "a"))));
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(Id, "main").to_string(), "Token(ID, main)");
        assert_eq!(Token::new(StringLit, "hi").to_string(), "Token(STRING, hi)");
    }
}
