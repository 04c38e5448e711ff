use crate::ast::*;
use crate::lexer::{Token, TokenKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(
        "Parse error [{}:{}]: expected {expected}, found '{}'",
        .found.line,
        .found.col,
        .found.literal
    )]
    Unexpected { expected: String, found: Token },
    #[error("Parse error: expected {expected}, found end of input")]
    UnexpectedEof { expected: String },
    #[error("Parse error [{line}:{col}]: invalid literal '{literal}'")]
    InvalidLiteral {
        literal: String,
        line: usize,
        col: usize,
    },
}

/// Recursive-descent parser over a whitespace-free token buffer.
///
/// Every public `parse_*` entry point consumes exactly one production and
/// leaves the cursor immediately after it.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

mod core;
mod expr;
mod members;
mod module;
mod patterns;
mod stmt;
mod types;
