use super::*;

impl Parser {
    /// `match ( [name =] subjects ) { cases }`
    pub(super) fn parse_match(&mut self) -> Result<Stmt, ParseError> {
        self.expect_literal("match")?;
        self.expect_literal("(")?;

        // `name = ...` binds the subjects; `name == ...` is an ordinary subject.
        let binding = if self.is_kind(0, TokenKind::Identifier)
            && self.is_match(1, "=")
            && !self.is_match(2, "=")
        {
            let name = self.expect_identifier()?;
            self.expect_literal("=")?;
            Some(name)
        } else {
            None
        };

        let subjects = self.parse_seq(Some(","), ")", Self::parse_expr)?;
        self.expect_literal("{")?;
        let arity = subjects.len();
        let cases = self.parse_seq(None, "}", |p| p.parse_match_case(arity))?;

        Ok(Stmt::Match {
            binding,
            subjects,
            cases,
        })
    }

    /// One case of a match over `arity` subjects. With no subjects each value
    /// is a condition; otherwise a case holds at most one value per subject.
    fn parse_match_case(&mut self, arity: usize) -> Result<MatchCase, ParseError> {
        let pattern = if self.match_literal(&["is"]).is_some() {
            let ty = self.parse_type()?;
            self.expect_literal(":")?;
            MatchPattern::Type(ty)
        } else {
            MatchPattern::Values(self.parse_case_values(arity)?)
        };
        let body = self.parse_stmt()?;
        Ok(MatchCase { pattern, body })
    }

    /// `value, value, ... :`
    fn parse_case_values(&mut self, arity: usize) -> Result<Vec<Expr>, ParseError> {
        let mut values = Vec::new();
        if self.match_literal(&[":"]).is_some() {
            return Ok(values);
        }
        values.push(self.parse_case_value()?);
        while self.is_match(0, ",") {
            if arity > 0 && values.len() == arity {
                return Err(self.error(format!("':' after {} case value(s)", arity)));
            }
            self.advance();
            values.push(self.parse_case_value()?);
        }
        self.expect_literal(":")?;
        Ok(values)
    }

    /// A case position: `_` (an operator token, not an identifier) or any expression.
    fn parse_case_value(&mut self) -> Result<Expr, ParseError> {
        if let Some(tok) = self.match_literal(&["_"]) {
            return Ok(Expr::ident(tok.literal));
        }
        self.parse_expr()
    }
}
