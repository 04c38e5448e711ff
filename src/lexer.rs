use std::fmt;
use std::iter::FusedIterator;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Identifier,
    Integer,
    Decimal,
    Character,
    String,
    Operator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Decimal => "decimal",
            TokenKind::Character => "character",
            TokenKind::String => "string",
            TokenKind::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// A classified span of source text. `literal` is the exact source text of
/// the token, quotes and backslashes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn is(&self, literal: &str) -> bool {
        self.literal == literal
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Lexer error [{line}:{col}]: unterminated character literal")]
    UnterminatedCharacter { line: usize, col: usize },
    #[error("Lexer error [{line}:{col}]: unterminated string literal")]
    UnterminatedString { line: usize, col: usize },
    #[error("Lexer error [{line}:{col}]: empty character literal")]
    EmptyCharacter { line: usize, col: usize },
    #[error("Lexer error [{line}:{col}]: invalid escape sequence '\\{escape}'")]
    InvalidEscape { escape: char, line: usize, col: usize },
}

/// Characters allowed after a backslash in character and string literals.
pub const ESCAPES: [char; 8] = ['t', 'b', 'n', 'r', '\'', '"', '\\', '$'];

/// Lazy tokenizer. Each call to `next` materializes one token; the input is
/// covered exactly once, so concatenating every literal reproduces it.
/// The iterator is fused after the first error.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    failed: bool,
}

pub fn tokenize(source: &str) -> Lexer {
    Lexer::new(source)
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            failed: false,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn current(&self) -> Option<char> {
        self.peek(0)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn advance_if(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        match self.current() {
            Some(c) if predicate(c) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn lex_token(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let line = self.line;
        let col = self.col;

        let kind = match self.current() {
            Some(c) if c.is_whitespace() => self.lex_whitespace(),
            Some(c) if c.is_alphabetic() => self.lex_identifier(),
            Some(c) if c.is_numeric() => self.lex_number(),
            Some('\'') => self.lex_character(line, col)?,
            Some('"') => self.lex_string(line, col)?,
            _ => self.lex_operator(),
        };

        let literal = self.chars[start..self.pos].iter().collect();
        Ok(Token {
            kind,
            literal,
            line,
            col,
        })
    }

    fn lex_whitespace(&mut self) -> TokenKind {
        while self.advance_if(char::is_whitespace) {}
        TokenKind::Whitespace
    }

    fn lex_identifier(&mut self) -> TokenKind {
        self.advance();
        while self.advance_if(char::is_alphanumeric) {}
        TokenKind::Identifier
    }

    fn lex_number(&mut self) -> TokenKind {
        while self.advance_if(char::is_numeric) {}
        // A trailing '.' is only part of the number when a digit follows it.
        if self.current() == Some('.') && self.peek(1).is_some_and(char::is_numeric) {
            self.advance();
            while self.advance_if(char::is_numeric) {}
            return TokenKind::Decimal;
        }
        TokenKind::Integer
    }

    fn lex_character(&mut self, line: usize, col: usize) -> Result<TokenKind, LexError> {
        self.advance(); // opening '
        match self.current() {
            None => return Err(LexError::UnterminatedCharacter { line, col }),
            Some('\'') => return Err(LexError::EmptyCharacter { line, col }),
            Some('\\') => self.lex_escape(LexError::UnterminatedCharacter { line, col })?,
            Some(_) => {
                self.advance();
            }
        }
        if !self.advance_if(|c| c == '\'') {
            return Err(LexError::UnterminatedCharacter { line, col });
        }
        Ok(TokenKind::Character)
    }

    fn lex_string(&mut self, line: usize, col: usize) -> Result<TokenKind, LexError> {
        self.advance(); // opening "
        loop {
            match self.current() {
                None => return Err(LexError::UnterminatedString { line, col }),
                Some('"') => {
                    self.advance();
                    return Ok(TokenKind::String);
                }
                Some('\\') => self.lex_escape(LexError::UnterminatedString { line, col })?,
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Consumes a backslash and the escape character following it.
    fn lex_escape(&mut self, unterminated: LexError) -> Result<(), LexError> {
        let line = self.line;
        let col = self.col;
        self.advance();
        match self.current() {
            None => Err(unterminated),
            Some(c) if ESCAPES.contains(&c) => {
                self.advance();
                Ok(())
            }
            Some(escape) => Err(LexError::InvalidEscape { escape, line, col }),
        }
    }

    fn lex_operator(&mut self) -> TokenKind {
        self.advance();
        TokenKind::Operator
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.chars.len() {
            return None;
        }
        let result = self.lex_token();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

impl FusedIterator for Lexer {}
