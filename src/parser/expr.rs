use super::*;

type Operand = fn(&mut Parser) -> Result<Expr, ParseError>;

impl Parser {
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_logical_or()
    }

    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(Self::parse_logical_and, &["||"])
    }

    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(Self::parse_comparison, &["&&"])
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(
            Self::parse_additive,
            &["<", "<=", ">", ">=", "==", "!=", "===", "!=="],
        )
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(Self::parse_multiplicative, &["+", "-"])
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(Self::parse_unary, &["*", "/"])
    }

    /// Left-associative chain of `operand (op operand)*`.
    fn parse_binary(&mut self, operand: Operand, ops: &[&str]) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = self.match_operator(ops) {
            let right = operand(self)?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_literal(&["+", "-", "!"]) {
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary(op.literal, Box::new(operand)));
        }
        self.parse_postfix()
    }

    /// Member access, method calls and indexing, applied left to right.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            if self.match_literal(&["."]).is_some() {
                let name = self.expect_identifier()?;
                let receiver = Some(Box::new(expr));
                expr = if self.match_literal(&["("]).is_some() {
                    let args = self.parse_seq(Some(","), ")", Self::parse_expr)?;
                    Expr::Call {
                        name,
                        receiver,
                        args,
                    }
                } else {
                    Expr::Access { name, receiver }
                };
            } else if self.match_literal(&["["]).is_some() {
                let args = self.parse_seq(Some(","), "]", Self::parse_expr)?;
                expr = Expr::Index {
                    receiver: Box::new(expr),
                    args,
                };
            } else {
                return Ok(expr);
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(tok) = self.peek(0).cloned() else {
            return Err(self.error("expression"));
        };

        match tok.kind {
            TokenKind::Identifier if tok.is("null") => {
                self.advance();
                Ok(Expr::Literal(Literal::Null))
            }
            TokenKind::Identifier if tok.is("true") || tok.is("false") => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(tok.is("true"))))
            }
            TokenKind::Integer => {
                self.advance();
                let value = tok.literal.parse().map_err(|_| invalid_literal(&tok))?;
                Ok(Expr::Literal(Literal::Int(value)))
            }
            TokenKind::Decimal => {
                self.advance();
                let value: f64 = tok.literal.parse().map_err(|_| invalid_literal(&tok))?;
                // Overflow parses as infinity, which has no Kotlin literal.
                if !value.is_finite() {
                    return Err(invalid_literal(&tok));
                }
                Ok(Expr::Literal(Literal::Decimal(value)))
            }
            TokenKind::Character => {
                self.advance();
                let text = unescape(strip_quotes(&tok.literal));
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Expr::Literal(Literal::Char(c))),
                    _ => Err(invalid_literal(&tok)),
                }
            }
            TokenKind::String => {
                self.advance();
                Ok(Expr::Literal(Literal::Str(unescape(strip_quotes(
                    &tok.literal,
                )))))
            }
            TokenKind::Identifier => {
                self.advance();
                let name = tok.literal;
                if self.match_literal(&["("]).is_some() {
                    let args = self.parse_seq(Some(","), ")", Self::parse_expr)?;
                    Ok(Expr::Call {
                        name,
                        receiver: None,
                        args,
                    })
                } else {
                    Ok(Expr::Access {
                        name,
                        receiver: None,
                    })
                }
            }
            TokenKind::Operator if tok.is("(") => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect_literal(")")?;
                Ok(Expr::Group(Box::new(expr)))
            }
            TokenKind::Operator if tok.is("{") => self.parse_lambda(),
            _ => Err(self.error("expression")),
        }
    }

    /// `{ [(a, b) ->] stmts }`. Parameters are only recognised when `(`
    /// directly follows the opening brace.
    fn parse_lambda(&mut self) -> Result<Expr, ParseError> {
        self.expect_literal("{")?;
        let params = if self.match_literal(&["("]).is_some() {
            let params = self.parse_seq(Some(","), ")", Self::expect_identifier)?;
            self.expect_literal("-")?;
            self.expect_literal(">")?;
            params
        } else {
            Vec::new()
        };

        let mut stmts = self.parse_seq(None, "}", Self::parse_stmt)?;
        let body = if stmts.len() == 1 {
            stmts.remove(0)
        } else {
            Stmt::Block(stmts)
        };

        Ok(Expr::Lambda {
            params,
            body: Box::new(body),
        })
    }
}

fn invalid_literal(tok: &Token) -> ParseError {
    ParseError::InvalidLiteral {
        literal: tok.literal.clone(),
        line: tok.line,
        col: tok.col,
    }
}

fn strip_quotes(literal: &str) -> &str {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Replaces each two-character escape sequence with the character it
/// denotes. Runs once over the text, so `\\t` yields a backslash and a `t`.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{0008}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
