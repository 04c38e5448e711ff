//! Rhovas front end: lexer, recursive-descent parser and Kotlin generator.
//!
//! The pipeline is `text -> tokenize -> Parser -> generate -> text`; each
//! stage is a pure transformation and fails fast on malformed input.

pub mod ast;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod source;

use thiserror::Error;

pub use generator::generate;
pub use lexer::{tokenize, LexError, Token, TokenKind};
pub use parser::{ParseError, Parser};
pub use source::{parse_expr_text, parse_source, parse_stmt_text, parse_type_text, tokenize_all};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Translates a whole Rhovas source file into Kotlin.
pub fn compile(source: &str) -> Result<String, Error> {
    let src = parse_source(source)?;
    Ok(generate(&src))
}
