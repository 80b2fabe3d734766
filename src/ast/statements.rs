use std::fmt::{self, Display};

use super::{
    ast::{Expression, Statement},
    expressions::SymbolExpr,
};

/// Block Statement
/// An ordered sequence of statements, used as the body of `if` and `fn`
/// expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub statements: Vec<Statement>,
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }
        Ok(())
    }
}

/// Expression Statement
/// An expression in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expression,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expression.fmt(f)
    }
}

/// Let Statement
/// Binds a name to a value. `value` stays `None` when the right-hand side
/// failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: SymbolExpr,
    pub value: Option<Expression>,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = ", self.name)?;
        if let Some(value) = &self.value {
            value.fmt(f)?;
        }
        write!(f, ";")
    }
}

/// Return Statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expression>,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return ")?;
        if let Some(value) = &self.value {
            value.fmt(f)?;
        }
        write!(f, ";")
    }
}
