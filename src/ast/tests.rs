//! Unit tests for canonical AST rendering.
//!
//! These build small trees by hand and check their string form, so the
//! rendering rules are pinned down independently of the parser.

use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span};

use super::ast::{Expr, Program, Stmt};
use super::expressions::{Boolean, HashLiteral, Identifier, IntegerLiteral, PrefixExpression};
use super::statements::LetStatement;

fn token(kind: TokenKind, literal: &str) -> Token {
    Token {
        kind,
        literal: literal.to_string(),
        span: Span {
            start: Position::null(),
            end: Position::null(),
        },
    }
}

fn identifier(name: &str) -> Identifier {
    Identifier {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![Stmt::Let(LetStatement {
            token: token(TokenKind::Let, "let"),
            name: identifier("myVar"),
            value: Expr::Identifier(identifier("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_prefix_expression_string() {
    let expr = Expr::Prefix(PrefixExpression {
        token: token(TokenKind::Not, "!"),
        operator: "!".to_string(),
        right: Box::new(Expr::Boolean(Boolean {
            token: token(TokenKind::True, "true"),
            value: true,
        })),
    });

    assert_eq!(expr.to_string(), "(!true)");
}

#[test]
fn test_hash_literal_insertion_order_string() {
    let int = |value: i64| {
        Expr::Integer(IntegerLiteral {
            token: token(TokenKind::Int, &value.to_string()),
            value,
        })
    };

    let expr = Expr::Hash(HashLiteral {
        token: token(TokenKind::OpenCurly, "{"),
        pairs: vec![
            (int(2), int(4)),
            (int(1), int(3)),
        ],
    });

    // Pairs render in the order they were inserted, not sorted
    assert_eq!(expr.to_string(), "{2:4, 1:3}");
}

#[test]
fn test_empty_program_string() {
    let program = Program::default();

    assert_eq!(program.to_string(), "");
    assert_eq!(program.token_literal(), "");
}
