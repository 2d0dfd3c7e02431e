//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic types and their rendering.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            token: TokenKind::Illegal,
        },
        Position(10, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.monkey".to_string()));
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Assignment,
            got: TokenKind::Int,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_expected_token_display() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Assignment,
            got: TokenKind::Int,
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be Assignment, got Int instead"
    );
}

#[test]
fn test_no_prefix_parse_fn_display() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            token: TokenKind::Star,
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.to_string(), "no prefix parse function for Star found");
}

#[test]
fn test_integer_parse_error_display() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::CloseParen,
            got: TokenKind::EOF,
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
