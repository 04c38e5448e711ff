use crate::ast::{Expr, Src, Stmt, Type};
use crate::lexer::{tokenize, LexError, Token};
use crate::parser::{ParseError, Parser};
use crate::Error;

/// Drains the lexer, stopping at the first error.
pub fn tokenize_all(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source).collect()
}

fn parse_whole<T>(
    source: &str,
    parse: impl FnOnce(&mut Parser) -> Result<T, ParseError>,
) -> Result<T, Error> {
    let tokens = tokenize_all(source)?;
    let mut parser = Parser::new(tokens);
    let node = parse(&mut parser)?;
    parser.expect_end()?;
    Ok(node)
}

pub fn parse_source(source: &str) -> Result<Src, Error> {
    parse_whole(source, Parser::parse_src)
}

pub fn parse_stmt_text(source: &str) -> Result<Stmt, Error> {
    parse_whole(source, Parser::parse_stmt)
}

pub fn parse_expr_text(source: &str) -> Result<Expr, Error> {
    parse_whole(source, Parser::parse_expr)
}

pub fn parse_type_text(source: &str) -> Result<Type, Error> {
    parse_whole(source, Parser::parse_type)
}
