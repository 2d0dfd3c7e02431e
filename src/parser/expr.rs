use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayLiteral, Boolean, CallExpression, FunctionLiteral, HashLiteral, Identifier,
            IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
            StringLiteral,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// The central precedence-climbing loop. Looks up a NUD for the current
/// token (recording a diagnostic and failing when there is none), then
/// keeps extending the left-hand expression through LEDs while the
/// lookahead token is not a semicolon and binds strictly tighter than
/// `bp`. A lookahead token with no LED simply ends the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let prefix = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => {
            parser.no_prefix_parse_error(token_kind);
            return None;
        }
    };

    let mut left = prefix(parser)?;

    // While LED exists and bp is less than the BP of the peeked token,
    // continue extending the lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let infix = match parser.get_led_lookup().get(&parser.peek_token_kind()) {
            Some(handler) => *handler,
            None => return Some(left),
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();
    let value = token.literal.clone();

    Some(Expr::Identifier(Identifier { token, value }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.literal.clone(),
                },
                token.span.start.clone(),
            ));
            None
        }
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();
    let value = token.literal.clone();

    Some(Expr::Str(StringLiteral { token, value }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();
    let value = parser.current_token_is(TokenKind::True);

    Some(Expr::Boolean(Boolean { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Some(Expr::Prefix(PrefixExpression {
        token,
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let token = parser.current_token().clone();
    let operator = token.literal.clone();

    // The right operand parses at the operator's own binding power, not
    // one above it, which left-associates same-precedence chains
    let bp = parser.current_binding_power();
    parser.advance();
    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpression {
        token,
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }
    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();

        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }

        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expr::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let body = parse_block_stmt(parser);

    Some(Expr::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut identifiers = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(identifiers);
    }

    parser.advance();

    let token = parser.current_token().clone();
    let value = token.literal.clone();
    identifiers.push(Identifier { token, value });

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();

        let token = parser.current_token().clone();
        let value = token.literal.clone();
        identifiers.push(Identifier { token, value });
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(identifiers)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_expression_list(parser, TokenKind::CloseParen)?;

    Some(Expr::Call(CallExpression {
        token,
        function: Box::new(left),
        arguments,
    }))
}

pub fn parse_array_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();
    let elements = parse_expression_list(parser, TokenKind::CloseBracket)?;

    Some(Expr::Array(ArrayLiteral { token, elements }))
}

/// Comma-delimited expression list shared by call arguments and array
/// elements. A missing terminator fails the whole list, which callers
/// treat as a hard failure for their construct.
fn parse_expression_list(parser: &mut Parser, end: TokenKind) -> Option<Vec<Expr>> {
    let mut list = vec![];

    if parser.peek_token_is(end) {
        parser.advance();
        return Some(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Default)?);
    }

    if !parser.expect_peek(end) {
        return None;
    }

    Some(list)
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let token = parser.current_token().clone();

    parser.advance();
    let index = parse_expr(parser, BindingPower::Default)?;

    if !parser.expect_peek(TokenKind::CloseBracket) {
        return None;
    }

    Some(Expr::Index(IndexExpression {
        token,
        left: Box::new(left),
        index: Box::new(index),
    }))
}

pub fn parse_hash_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();
    let mut pairs = vec![];

    while !parser.peek_token_is(TokenKind::CloseCurly) {
        parser.advance();
        let key = parse_expr(parser, BindingPower::Default)?;

        if !parser.expect_peek(TokenKind::Colon) {
            return None;
        }

        parser.advance();
        let value = parse_expr(parser, BindingPower::Default)?;

        pairs.push((key, value));

        if !parser.peek_token_is(TokenKind::CloseCurly) && !parser.expect_peek(TokenKind::Comma) {
            return None;
        }
    }

    if !parser.expect_peek(TokenKind::CloseCurly) {
        return None;
    }

    Some(Expr::Hash(HashLiteral { token, pairs }))
}
