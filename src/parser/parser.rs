//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and a token-kind switch for statement parsing.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Malformed input never aborts a parse: every failure is recorded as a
//! diagnostic, the offending statement is dropped, and the top-level loop
//! carries on with the next statement.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and pulls tokens from it through a two-token
/// lookahead window. It tracks accumulated diagnostics and holds the
/// handler lookup tables for expression parsing.
pub struct Parser {
    /// Token source, pulled on demand
    lexer: Lexer,
    /// The token currently being parsed
    current_token: Token,
    /// One-token lookahead
    peek_token: Token,
    /// Diagnostics accumulated so far, in source order
    errors: Vec<Error>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance over a lexer, registers the token
    /// lookups and primes the lookahead window with two advances.
    pub fn new(lexer: Lexer) -> Self {
        let placeholder = Token {
            kind: TokenKind::EOF,
            literal: String::new(),
            span: Span {
                start: Position::null(),
                end: Position::null(),
            },
        };

        let mut parser = Parser {
            lexer,
            current_token: placeholder.clone(),
            peek_token: placeholder,
            errors: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };

        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Slides the window forward: current takes peek, peek pulls the next
    /// token from the lexer.
    pub fn advance(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances onto the lookahead token if it has the expected kind.
    /// Otherwise records an ExpectedToken diagnostic and stays put; the
    /// caller is responsible for abandoning its construct.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek_token_is(expected_kind) {
            self.advance();
            true
        } else {
            self.errors.push(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    got: self.peek_token.kind,
                },
                self.peek_token.span.start.clone(),
            ));
            false
        }
    }

    /// Records a diagnostic for a token kind with no registered NUD.
    pub fn no_prefix_parse_error(&mut self, kind: TokenKind) {
        self.errors.push(Error::new(
            ErrorImpl::NoPrefixParseFn { token: kind },
            self.current_token.span.start.clone(),
        ));
    }

    pub fn push_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// The diagnostics accumulated so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of the lookahead token, `Default` when unregistered.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Binding power of the current token, `Default` when unregistered.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current_token.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token. NUD
    /// registration deliberately leaves the binding power table alone: a
    /// literal or grouping opener must query as `Default` when peeked at.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Parses statements until end-of-input. A statement that failed to
    /// parse is omitted from the program; scanning continues with the next
    /// one.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.advance();
        }

        Program { statements }
    }
}

/// Parses one source unit into an Abstract Syntax Tree.
///
/// This is the main entry point. It constructs a fresh lexer/parser pair,
/// parses all statements until end-of-input and hands back the best-effort
/// tree together with every diagnostic collected along the way. It never
/// fails: malformed input shows up in the diagnostics list, not as a
/// panic or an error return.
///
/// # Arguments
///
/// * `source` - The complete source text of one program or shell line
/// * `file` - Optional source name used in positions (defaults to "shell")
///
/// # Returns
///
/// A tuple containing:
/// - The parsed Program (possibly partial when the input was malformed)
/// - The list of diagnostics, empty for syntactically valid input
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let lexer = Lexer::new(source, file);
    let mut parser = Parser::new(lexer);

    let program = parser.parse_program();

    (program, parser.errors)
}
