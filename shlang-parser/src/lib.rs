//! Tokenizer and recursive descent parser for shlang.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod visitor;

pub use error::{Error, LexError, SyntaxError};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, Parser};
pub use printer::print_program;
