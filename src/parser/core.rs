use super::*;

impl Parser {
    /// Builds a parser from a token sequence; whitespace tokens are discarded.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Parser {
            tokens: tokens
                .into_iter()
                .filter(|t| t.kind != TokenKind::Whitespace)
                .collect(),
            pos: 0,
        }
    }

    pub(super) fn error(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        match self.peek(0) {
            Some(found) => ParseError::Unexpected {
                expected,
                found: found.clone(),
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }

    /// Token `offset` positions past the cursor; offset 0 is the next unconsumed token.
    pub(super) fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    pub(super) fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    pub(super) fn is_match(&self, offset: usize, literal: &str) -> bool {
        self.peek(offset).is_some_and(|t| t.is(literal))
    }

    pub(super) fn is_kind(&self, offset: usize, kind: TokenKind) -> bool {
        self.peek(offset).is_some_and(|t| t.kind == kind)
    }

    pub(super) fn match_literal(&mut self, literals: &[&str]) -> Option<Token> {
        if literals.iter().any(|lit| self.is_match(0, lit)) {
            self.advance()
        } else {
            None
        }
    }

    pub(super) fn match_kind(&mut self, kind: TokenKind) -> Option<Token> {
        if self.is_kind(0, kind) {
            self.advance()
        } else {
            None
        }
    }

    pub(super) fn expect_literal(&mut self, literal: &str) -> Result<Token, ParseError> {
        match self.match_literal(&[literal]) {
            Some(tok) => Ok(tok),
            None => Err(self.error(format!("'{}'", literal))),
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.match_kind(TokenKind::Identifier) {
            Some(tok) => Ok(tok.literal),
            None => Err(self.error("identifier")),
        }
    }

    /// Matches the longest operator of `ops` spelled by the upcoming
    /// single-character operator tokens, e.g. `===` before `==` before `=`.
    pub(super) fn match_operator(&mut self, ops: &[&str]) -> Option<String> {
        let mut candidates = ops.to_vec();
        candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let op = candidates.into_iter().find(|op| {
            op.chars().enumerate().all(|(i, c)| {
                let mut buf = [0u8; 4];
                self.peek(i)
                    .is_some_and(|t| t.kind == TokenKind::Operator && t.is(c.encode_utf8(&mut buf)))
            })
        })?;

        for _ in op.chars() {
            self.advance();
        }
        Some(op.to_string())
    }

    /// Parses items until `end`, separated by `sep` when given. Consumes `end`.
    pub(super) fn parse_seq<T>(
        &mut self,
        sep: Option<&str>,
        end: &str,
        mut parse: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        if self.match_literal(&[end]).is_some() {
            return Ok(items);
        }

        loop {
            items.push(parse(self)?);
            let more = match sep {
                Some(sep) => self.match_literal(&[sep]).is_some(),
                None => !self.is_match(0, end),
            };
            if !more {
                break;
            }
        }

        if self.match_literal(&[end]).is_none() {
            return Err(match sep {
                Some(sep) => self.error(format!("'{}' or '{}'", sep, end)),
                None => self.error(format!("'{}'", end)),
            });
        }
        Ok(items)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Fails unless every token has been consumed.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek(0) {
            None => Ok(()),
            Some(found) => Err(ParseError::Unexpected {
                expected: "end of input".to_string(),
                found: found.clone(),
            }),
        }
    }
}
