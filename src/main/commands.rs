use std::fs;

use colored::Colorize;

use rhovas::ast::Src;
use rhovas::{generate, parse_expr_text, parse_source, parse_stmt_text, tokenize_all, TokenKind};

use crate::shared::{exit_with, read_file};

pub(super) fn cmd_compile(file: &str, output: Option<&str>, verbose: bool) {
    let source = read_file(file).unwrap_or_else(|e| exit_with(&e));

    let src: Src = parse_source(&source).unwrap_or_else(|e| exit_with(&e.to_string()));
    if verbose {
        eprintln!(
            "{}",
            format!(
                "parsed {}: {} import(s), {} component(s), {} member(s)",
                file,
                src.imports.len(),
                src.components.len(),
                src.members.len()
            )
            .dimmed()
        );
    }

    let kotlin = generate(&src);
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &kotlin) {
                exit_with(&format!("Cannot write file '{}': {}", path, e));
            }
            if verbose {
                eprintln!("{}", format!("wrote {}", path).dimmed());
            }
        }
        None => print!("{}", kotlin),
    }
}

pub(super) fn cmd_tokens(file: &str, whitespace: bool) {
    let source = read_file(file).unwrap_or_else(|e| exit_with(&e));
    let tokens = tokenize_all(&source).unwrap_or_else(|e| exit_with(&e.to_string()));

    for tok in tokens {
        if tok.kind == TokenKind::Whitespace && !whitespace {
            continue;
        }
        println!(
            "{}:{} {} {:?}",
            tok.line,
            tok.col,
            tok.kind.to_string().cyan(),
            tok.literal
        );
    }
}

pub(super) fn cmd_parse(file: &str, stmt: bool, expr: bool) {
    let source = read_file(file).unwrap_or_else(|e| exit_with(&e));

    let tree = if stmt {
        parse_stmt_text(&source).map(|s| format!("{:#?}", s))
    } else if expr {
        parse_expr_text(&source).map(|e| format!("{:#?}", e))
    } else {
        parse_source(&source).map(|s| format!("{:#?}", s))
    };

    match tree {
        Ok(tree) => println!("{}", tree),
        Err(e) => exit_with(&e.to_string()),
    }
}
