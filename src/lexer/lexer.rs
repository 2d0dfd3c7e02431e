use std::rc::Rc;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Byte-cursor tokenizer. `next_token` can be called forever; once the
/// source is exhausted it keeps returning an EOF token.
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.read_position >= self.source.len() {
            // Sentinel byte, returned forever after exhaustion
            self.ch = 0;
        } else {
            self.ch = self.source.as_bytes()[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.source.len() {
            0
        } else {
            self.source.as_bytes()[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while self.ch == b' ' || self.ch == b'\t' || self.ch == b'\n' || self.ch == b'\r' {
            self.read_char();
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position as u32;

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.make_token(TokenKind::Equals, String::from("=="), start)
                } else {
                    self.make_token(TokenKind::Assignment, String::from("="), start)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    self.make_token(TokenKind::NotEquals, String::from("!="), start)
                } else {
                    self.make_token(TokenKind::Not, String::from("!"), start)
                }
            }
            b';' => self.make_token(TokenKind::Semicolon, String::from(";"), start),
            b':' => self.make_token(TokenKind::Colon, String::from(":"), start),
            b',' => self.make_token(TokenKind::Comma, String::from(","), start),
            b'(' => self.make_token(TokenKind::OpenParen, String::from("("), start),
            b')' => self.make_token(TokenKind::CloseParen, String::from(")"), start),
            b'{' => self.make_token(TokenKind::OpenCurly, String::from("{"), start),
            b'}' => self.make_token(TokenKind::CloseCurly, String::from("}"), start),
            b'[' => self.make_token(TokenKind::OpenBracket, String::from("["), start),
            b']' => self.make_token(TokenKind::CloseBracket, String::from("]"), start),
            b'+' => self.make_token(TokenKind::Plus, String::from("+"), start),
            b'-' => self.make_token(TokenKind::Dash, String::from("-"), start),
            b'*' => self.make_token(TokenKind::Star, String::from("*"), start),
            b'/' => self.make_token(TokenKind::Slash, String::from("/"), start),
            b'<' => self.make_token(TokenKind::Less, String::from("<"), start),
            b'>' => self.make_token(TokenKind::Greater, String::from(">"), start),
            b'"' => {
                let literal = self.read_string();
                self.make_token(TokenKind::String, literal, start)
            }
            0 => self.make_token(TokenKind::EOF, String::new(), start),
            ch if is_letter(ch) => {
                let literal = self.read_identifier();
                let kind = RESERVED_LOOKUP
                    .get(literal.as_str())
                    .copied()
                    .unwrap_or(TokenKind::Identifier);
                // read_identifier already advanced past the last byte
                return self.make_token(kind, literal, start);
            }
            ch if is_digit(ch) => {
                let literal = self.read_number();
                return self.make_token(TokenKind::Int, literal, start);
            }
            ch => self.make_token(TokenKind::Illegal, (ch as char).to_string(), start),
        };

        self.read_char();
        token
    }

    fn make_token(&self, kind: TokenKind, literal: String, start: u32) -> Token {
        let end = start + literal.len() as u32;
        MK_TOKEN!(
            kind,
            literal,
            Span {
                start: Position(start, Rc::clone(&self.file)),
                end: Position(end, Rc::clone(&self.file)),
            }
        )
    }

    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }

        String::from(&self.source[position..self.position])
    }

    fn read_number(&mut self) -> String {
        let position = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }

        String::from(&self.source[position..self.position])
    }

    fn read_string(&mut self) -> String {
        // Bytes are taken verbatim, no escape sequences
        let position = self.position + 1;
        loop {
            self.read_char();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }

        String::from(&self.source[position..self.position])
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Drains a fresh lexer into a token list, EOF token included. Handy for
/// token dumps and tests; the parser pulls tokens on demand instead.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
