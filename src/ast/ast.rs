use std::fmt::Display;

use super::{
    expressions::{
        ArrayLiteral, Boolean, CallExpression, FunctionLiteral, HashLiteral, Identifier,
        IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
        StringLiteral,
    },
    statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
};

/// Statement node set.
///
/// A closed sum over every statement form the parser can produce. Each
/// variant owns its children exclusively; dropping a statement drops its
/// whole subtree.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Stmt {
    /// Literal text of the token that introduced this statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => &stmt.token.literal,
            Stmt::Return(stmt) => &stmt.token.literal,
            Stmt::Expression(stmt) => &stmt.token.literal,
            Stmt::Block(stmt) => &stmt.token.literal,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression node set.
///
/// The canonical string form (`Display`) fully parenthesizes every unary
/// and binary operation, which is what makes precedence and associativity
/// observable in tests.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(Boolean),
    Str(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
    Hash(HashLiteral),
}

impl Expr {
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => &expr.token.literal,
            Expr::Integer(expr) => &expr.token.literal,
            Expr::Boolean(expr) => &expr.token.literal,
            Expr::Str(expr) => &expr.token.literal,
            Expr::Prefix(expr) => &expr.token.literal,
            Expr::Infix(expr) => &expr.token.literal,
            Expr::If(expr) => &expr.token.literal,
            Expr::Function(expr) => &expr.token.literal,
            Expr::Call(expr) => &expr.token.literal,
            Expr::Array(expr) => &expr.token.literal,
            Expr::Index(expr) => &expr.token.literal,
            Expr::Hash(expr) => &expr.token.literal,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Str(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::Function(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
            Expr::Array(expr) => expr.fmt(f),
            Expr::Index(expr) => expr.fmt(f),
            Expr::Hash(expr) => expr.fmt(f),
        }
    }
}

/// Root of the tree: an ordered sequence of top-level statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            statement.fmt(f)?;
        }

        Ok(())
    }
}
