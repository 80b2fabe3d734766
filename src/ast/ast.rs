use std::fmt::{self, Display};

use super::{
    expressions::{
        ArrayExpr, BinaryExpr, BoolExpr, CallExpr, FnExpr, IfExpr, IndexExpr, NumberExpr,
        PrefixExpr, StringExpr, SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement variants.
///
/// A closed sum over every statement form. Consumers match exhaustively, so
/// adding a variant is a compile-time visible change at every use site.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
            Statement::Block(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression variants.
///
/// Like [`Statement`], a closed sum; each node owns its children outright,
/// so the tree is strictly acyclic and immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Symbol(SymbolExpr),
    Number(NumberExpr),
    String(StringExpr),
    Bool(BoolExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    Fn(FnExpr),
    Call(CallExpr),
    Array(ArrayExpr),
    Index(IndexExpr),
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Symbol(expr) => expr.fmt(f),
            Expression::Number(expr) => expr.fmt(f),
            Expression::String(expr) => expr.fmt(f),
            Expression::Bool(expr) => expr.fmt(f),
            Expression::Prefix(expr) => expr.fmt(f),
            Expression::Binary(expr) => expr.fmt(f),
            Expression::If(expr) => expr.fmt(f),
            Expression::Fn(expr) => expr.fmt(f),
            Expression::Call(expr) => expr.fmt(f),
            Expression::Array(expr) => expr.fmt(f),
            Expression::Index(expr) => expr.fmt(f),
        }
    }
}

/// Root of a parsed source unit: the ordered top-level statements.
///
/// A program is always produced, even when the parse recorded errors; the
/// parser's error list decides whether the tree can be trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }
        Ok(())
    }
}
