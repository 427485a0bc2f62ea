use crate::lexer::Token;

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program<'src> {
    pub functions: Vec<Function<'src>>,
}

/// A function definition (e.g. `func add(a: int, b: int): int { ... }`).
#[derive(Debug, Clone, PartialEq)]
pub struct Function<'src> {
    pub name: Identifier<'src>,
    /// `None` when the parentheses are empty, never an empty `Vec`.
    pub params: Option<Vec<Declaration<'src>>>,
    pub return_type: Option<Identifier<'src>>,
    pub body: CompoundStatement<'src>,
}

/// An identifier (e.g. `foo`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identifier<'src> {
    pub name: Token<'src>,
}

impl<'src> Identifier<'src> {
    pub fn new(name: Token<'src>) -> Self {
        Self { name }
    }

    /// The identifier's text.
    pub fn as_str(&self) -> &'src str {
        self.name.text
    }
}

/// A name with a type annotation (e.g. `x: int`).
/// The type is a full expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'src> {
    pub name: Identifier<'src>,
    pub var_type: Expr<'src>,
}

/// A brace-delimited block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStatement<'src> {
    pub statements: Vec<Stmt<'src>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget<'src> {
    Identifier(Identifier<'src>),
    /// `var x: int = ...`
    Declaration(Declaration<'src>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<'src> {
    pub target: AssignTarget<'src>,
    pub value: Expr<'src>,
}

/// A call (e.g. `foo(1, bar)`).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall<'src> {
    pub identifier: Identifier<'src>,
    /// `None` for `foo()`, never an empty `Vec`.
    pub args: Option<Vec<Expr<'src>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<'src> {
    Compound(CompoundStatement<'src>),
    Assignment(Assignment<'src>),
    /// `var x: int` without an initializer.
    Declaration(Declaration<'src>),
    If {
        condition: Expr<'src>,
        true_branch: Box<Stmt<'src>>,
        false_branch: Option<Box<Stmt<'src>>>,
    },
    While {
        condition: Expr<'src>,
        body: Box<Stmt<'src>>,
    },
    For {
        declaration: Declaration<'src>,
        initial_value: Expr<'src>,
        limit: Expr<'src>,
        body: Box<Stmt<'src>>,
    },
    Call(FunctionCall<'src>),
    Return(Expr<'src>),
    /// A bare identifier used as a statement.
    Identifier(Identifier<'src>),
    /// A bare string or number literal used as a statement.
    Literal(Token<'src>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'src> {
    Identifier(Identifier<'src>),
    Call(FunctionCall<'src>),
    /// A `STRING` or `NUMBER` token.
    Literal(Token<'src>),
}
