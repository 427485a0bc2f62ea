//! Indented textual rendering of the AST, one node per line.

use crate::ast::*;
use crate::lexer::Token;
use crate::visitor::{self, Visitor};
use std::fmt::{self, Write};

/// Renders `program` with one space of indentation per nesting level.
pub fn print_program(program: &Program<'_>) -> String {
    let mut printer = Printer::default();
    printer.visit_program(program);
    printer.output
}

#[derive(Default)]
struct Printer {
    output: String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: impl fmt::Display) {
        // writing into a `String` cannot fail
        let _ = writeln!(self.output, "{:indent$}{}", "", text, indent = self.depth);
    }

    /// Prints `label` and runs `children` one level deeper.
    fn node(&mut self, label: &str, children: impl FnOnce(&mut Self)) {
        self.line(format_args!("{}:", label));
        self.depth += 1;
        children(self);
        self.depth -= 1;
    }

    fn none(&mut self) {
        self.line("None");
    }
}

impl<'ast, 'src: 'ast> Visitor<'ast, 'src> for Printer {
    fn visit_program(&mut self, program: &'ast Program<'src>) {
        self.node("Program", move |p| visitor::walk_program(p, program));
    }

    fn visit_function(&mut self, function: &'ast Function<'src>) {
        self.node("Function", move |p| {
            p.visit_identifier(&function.name);
            for param in function.params.iter().flatten() {
                p.visit_declaration(param);
            }
            match &function.return_type {
                Some(return_type) => p.visit_identifier(return_type),
                None => p.none(),
            }
            p.visit_compound_stmt(&function.body);
        });
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt<'src>) {
        match stmt {
            Stmt::Compound(block) => self.visit_compound_stmt(block),
            Stmt::Assignment(_) => self.node("Assignment", move |p| visitor::walk_stmt(p, stmt)),
            Stmt::Declaration(declaration) => self.visit_declaration(declaration),
            Stmt::If {
                condition,
                true_branch,
                false_branch,
            } => self.node("If", move |p| {
                p.visit_expr(condition);
                p.visit_stmt(true_branch);
                match false_branch {
                    Some(false_branch) => p.visit_stmt(false_branch),
                    None => p.none(),
                }
            }),
            Stmt::While { .. } => self.node("While", move |p| visitor::walk_stmt(p, stmt)),
            Stmt::For { .. } => self.node("For", move |p| visitor::walk_stmt(p, stmt)),
            Stmt::Call(call) => self.visit_call(call),
            Stmt::Return(_) => self.node("Return", move |p| visitor::walk_stmt(p, stmt)),
            Stmt::Identifier(identifier) => self.visit_identifier(identifier),
            Stmt::Literal(token) => self.visit_token(token),
        }
    }

    fn visit_compound_stmt(&mut self, block: &'ast CompoundStatement<'src>) {
        self.node("CompoundStatement", move |p| {
            visitor::walk_compound_stmt(p, block)
        });
    }

    fn visit_declaration(&mut self, declaration: &'ast Declaration<'src>) {
        self.node("Declaration", move |p| {
            visitor::walk_declaration(p, declaration)
        });
    }

    fn visit_call(&mut self, call: &'ast FunctionCall<'src>) {
        self.node("FunctionCall", move |p| visitor::walk_call(p, call));
    }

    fn visit_identifier(&mut self, identifier: &'ast Identifier<'src>) {
        self.node("Identifier", move |p| p.visit_token(&identifier.name));
    }

    fn visit_token(&mut self, token: &'ast Token<'src>) {
        self.line(token);
    }
}

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_program(self))
    }
}
