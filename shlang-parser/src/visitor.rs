//! Visitor pattern for AST nodes.

use crate::ast::*;
use crate::lexer::Token;

pub trait Visitor<'ast, 'src: 'ast>: Sized {
    fn visit_program(&mut self, program: &'ast Program<'src>) {
        walk_program(self, program);
    }
    fn visit_function(&mut self, function: &'ast Function<'src>) {
        walk_function(self, function);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt<'src>) {
        walk_stmt(self, stmt);
    }
    fn visit_compound_stmt(&mut self, block: &'ast CompoundStatement<'src>) {
        walk_compound_stmt(self, block);
    }
    fn visit_expr(&mut self, expr: &'ast Expr<'src>) {
        walk_expr(self, expr);
    }
    fn visit_declaration(&mut self, declaration: &'ast Declaration<'src>) {
        walk_declaration(self, declaration);
    }
    fn visit_call(&mut self, call: &'ast FunctionCall<'src>) {
        walk_call(self, call);
    }
    fn visit_identifier(&mut self, identifier: &'ast Identifier<'src>) {
        self.visit_token(&identifier.name);
    }
    fn visit_token(&mut self, _token: &'ast Token<'src>) {}
}

pub fn walk_program<'ast, 'src: 'ast>(
    visitor: &mut impl Visitor<'ast, 'src>,
    program: &'ast Program<'src>,
) {
    for function in &program.functions {
        visitor.visit_function(function);
    }
}

pub fn walk_function<'ast, 'src: 'ast>(
    visitor: &mut impl Visitor<'ast, 'src>,
    function: &'ast Function<'src>,
) {
    visitor.visit_identifier(&function.name);
    for param in function.params.iter().flatten() {
        visitor.visit_declaration(param);
    }
    if let Some(return_type) = &function.return_type {
        visitor.visit_identifier(return_type);
    }
    visitor.visit_compound_stmt(&function.body);
}

pub fn walk_compound_stmt<'ast, 'src: 'ast>(
    visitor: &mut impl Visitor<'ast, 'src>,
    block: &'ast CompoundStatement<'src>,
) {
    for stmt in &block.statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_declaration<'ast, 'src: 'ast>(
    visitor: &mut impl Visitor<'ast, 'src>,
    declaration: &'ast Declaration<'src>,
) {
    visitor.visit_identifier(&declaration.name);
    visitor.visit_expr(&declaration.var_type);
}

pub fn walk_call<'ast, 'src: 'ast>(
    visitor: &mut impl Visitor<'ast, 'src>,
    call: &'ast FunctionCall<'src>,
) {
    visitor.visit_identifier(&call.identifier);
    for arg in call.args.iter().flatten() {
        visitor.visit_expr(arg);
    }
}

pub fn walk_expr<'ast, 'src: 'ast>(visitor: &mut impl Visitor<'ast, 'src>, expr: &'ast Expr<'src>) {
    match expr {
        Expr::Identifier(identifier) => visitor.visit_identifier(identifier),
        Expr::Call(call) => visitor.visit_call(call),
        Expr::Literal(token) => visitor.visit_token(token),
    }
}

pub fn walk_stmt<'ast, 'src: 'ast>(visitor: &mut impl Visitor<'ast, 'src>, stmt: &'ast Stmt<'src>) {
    match stmt {
        Stmt::Compound(block) => visitor.visit_compound_stmt(block),
        Stmt::Assignment(Assignment { target, value }) => {
            match target {
                AssignTarget::Identifier(identifier) => visitor.visit_identifier(identifier),
                AssignTarget::Declaration(declaration) => visitor.visit_declaration(declaration),
            }
            visitor.visit_expr(value);
        }
        Stmt::Declaration(declaration) => visitor.visit_declaration(declaration),
        Stmt::If {
            condition,
            true_branch,
            false_branch,
        } => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(true_branch);
            if let Some(false_branch) = false_branch {
                visitor.visit_stmt(false_branch);
            }
        }
        Stmt::While { condition, body } => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(body);
        }
        Stmt::For {
            declaration,
            initial_value,
            limit,
            body,
        } => {
            visitor.visit_declaration(declaration);
            visitor.visit_expr(initial_value);
            visitor.visit_expr(limit);
            visitor.visit_stmt(body);
        }
        Stmt::Call(call) => visitor.visit_call(call),
        Stmt::Return(value) => visitor.visit_expr(value),
        Stmt::Identifier(identifier) => visitor.visit_identifier(identifier),
        Stmt::Literal(token) => visitor.visit_token(token),
    }
}
