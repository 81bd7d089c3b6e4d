use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_CHAR_TOKEN, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Value of the current character once the cursor has run off the input.
const EOF_CHAR: u8 = 0;

const TAB_WIDTH: usize = 8;

lazy_static! {
    static ref FLOAT_PATTERN: Regex = Regex::new("^[0-9]*[.][0-9]+$").unwrap();
}

/// Streaming lexer over a single input buffer.
///
/// `pos` indexes the current character `ch`, `read_pos` the next one to be
/// read; `read_pos == pos + 1` holds after every advance and `pos` never
/// moves past `source.len()`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    read_pos: usize,
    ch: u8,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            pos: 0,
            read_pos: 0,
            ch: EOF_CHAR,
            line: 0,
            col: 0,
        };

        lexer.read_char();
        lexer
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn cursor_position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => self.digraph_or(TokenKind::Equals, TokenKind::Assignment),
            b'!' => self.digraph_or(TokenKind::NotEquals, TokenKind::Not),
            b'>' => self.digraph_or(TokenKind::GreaterEquals, TokenKind::Greater),
            b'<' => self.digraph_or(TokenKind::LessEquals, TokenKind::Less),
            b';' => MK_CHAR_TOKEN!(self, TokenKind::Semicolon),
            b',' => MK_CHAR_TOKEN!(self, TokenKind::Comma),
            b'{' => MK_CHAR_TOKEN!(self, TokenKind::OpenCurly),
            b'}' => MK_CHAR_TOKEN!(self, TokenKind::CloseCurly),
            b'(' => MK_CHAR_TOKEN!(self, TokenKind::OpenParen),
            b')' => MK_CHAR_TOKEN!(self, TokenKind::CloseParen),
            b'+' => MK_CHAR_TOKEN!(self, TokenKind::Plus),
            b'-' => MK_CHAR_TOKEN!(self, TokenKind::Dash),
            b'/' => MK_CHAR_TOKEN!(self, TokenKind::Slash),
            b'*' => MK_CHAR_TOKEN!(self, TokenKind::Star),
            b'%' => MK_CHAR_TOKEN!(self, TokenKind::Percent),
            EOF_CHAR if self.at_eof() => {
                // The cursor stays put, so every later call lands here again.
                let end = self.source.len();
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    self.cursor_position(),
                    Span { start: end, end }
                );
            }
            ch if is_letter(ch) => return self.identifier(),
            ch if ch.is_ascii_digit() => return self.number(),
            b'.' if self.peek_char().is_ascii_digit() => match self.float() {
                Some(token) => return token,
                None => MK_CHAR_TOKEN!(self, TokenKind::Illegal),
            },
            _ => self.illegal(),
        };

        trace!("{}", token);
        self.read_char();
        token
    }

    fn read_char(&mut self) {
        if self.read_pos >= self.source.len() {
            self.ch = EOF_CHAR;
            self.pos = self.source.len();
        } else {
            self.ch = self.source.as_bytes()[self.read_pos];
            self.pos = self.read_pos;
        }
        self.read_pos = self.pos + 1;
    }

    fn peek_char(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_pos)
            .copied()
            .unwrap_or(EOF_CHAR)
    }

    /// Moves the cursor `count` characters forward.
    fn skip_chars(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.read_pos += count - 1;
        self.read_char();
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            match self.ch {
                b' ' => self.col += 1,
                b'\t' => self.col += TAB_WIDTH,
                b'\n' => self.line += 1,
                _ => {}
            }
            self.read_char();
        }
    }

    /// Builds `double` when the next character is `=`, otherwise `single`.
    /// Leaves the cursor on the last character of the token.
    fn digraph_or(&mut self, double: TokenKind, single: TokenKind) -> Token {
        if self.peek_char() != b'=' {
            return MK_CHAR_TOKEN!(self, single);
        }

        let start = self.pos;
        let position = self.cursor_position();
        self.read_char();

        MK_TOKEN!(
            double,
            self.source[start..=self.pos].to_string(),
            position,
            Span {
                start,
                end: self.pos + 1
            }
        )
    }

    fn identifier(&mut self) -> Token {
        let start = self.pos;
        let position = self.cursor_position();

        while is_letter(self.ch) {
            self.read_char();
        }

        let value = &self.source[start..self.pos];
        let token = MK_TOKEN!(
            lookup_ident(value),
            value.to_string(),
            position,
            Span {
                start,
                end: self.pos
            }
        );

        self.finish(token)
    }

    fn number(&mut self) -> Token {
        if let Some(token) = self.float() {
            return token;
        }

        let start = self.pos;
        let position = self.cursor_position();

        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        let token = MK_TOKEN!(
            TokenKind::Int,
            self.source[start..self.pos].to_string(),
            position,
            Span {
                start,
                end: self.pos
            }
        );

        self.finish(token)
    }

    /// Consumes the word under the cursor if the whole of it is float shaped.
    fn float(&mut self) -> Option<Token> {
        let start = self.pos;
        let word = self.peek_word();

        if !FLOAT_PATTERN.is_match(word) {
            return None;
        }

        let value = word.to_string();
        let position = self.cursor_position();
        self.skip_chars(value.len());

        let token = MK_TOKEN!(
            TokenKind::Float,
            value,
            position,
            Span {
                start,
                end: self.pos
            }
        );

        Some(self.finish(token))
    }

    /// Emits a single illegal character. Non-ASCII input is taken a whole
    /// UTF-8 scalar at a time; the cursor is left on its last byte.
    fn illegal(&mut self) -> Token {
        let start = self.pos;
        let position = self.cursor_position();
        let ch = self.source[start..].chars().next().unwrap_or('\0');
        let width = ch.len_utf8();

        self.read_pos = start + width;
        self.pos = self.read_pos - 1;

        MK_TOKEN!(
            TokenKind::Illegal,
            ch.to_string(),
            position,
            Span {
                start,
                end: start + width
            }
        )
    }

    /// Advances the column past an identifier or number token.
    fn finish(&mut self, token: Token) -> Token {
        self.col += token.value.len();
        trace!("{}", token);
        token
    }

    /// Everything from the cursor up to the next boundary character.
    fn peek_word(&self) -> &str {
        let bytes = self.source.as_bytes();
        let end = bytes[self.pos..]
            .iter()
            .position(|b| is_boundary(*b))
            .map_or(bytes.len(), |offset| self.pos + offset);

        &self.source[self.pos..end]
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens until the end of input, without the EOF token itself.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();

        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_boundary(ch: u8) -> bool {
    matches!(ch, b' ' | b'\n' | b';' | EOF_CHAR)
}

/// Lexes the whole of `source`, ending with the EOF token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
