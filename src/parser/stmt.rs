use super::*;

impl Parser {
    pub fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.peek(0).map(|t| t.literal.clone());
        match keyword.as_deref() {
            Some("{") => self.parse_block(),
            Some("var") | Some("val") => self.parse_declaration(),
            Some("if") => self.parse_if(),
            Some("match") => self.parse_match(),
            Some("for") => self.parse_for(),
            Some("while") => self.parse_while(),
            Some("try") => self.parse_try(),
            Some("with") => self.parse_with(),
            Some("break") | Some("continue") | Some("return") | Some("throw") => self.parse_jump(),
            Some("assert") | Some("require") | Some("ensure") => self.parse_assert(),
            _ if self.is_kind(0, TokenKind::Identifier) && self.is_match(1, ":") => {
                self.parse_label()
            }
            _ => self.parse_expression_stmt(),
        }
    }

    fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        self.expect_literal("{")?;
        Ok(Stmt::Block(self.parse_seq(None, "}", Self::parse_stmt)?))
    }

    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let (mutable, name, ty, value) = self.parse_binding()?;
        Ok(Stmt::Declaration {
            mutable,
            name,
            ty,
            value,
        })
    }

    /// `( expr )`, as used by `if` and `while`.
    fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        self.expect_literal("(")?;
        let cond = self.parse_expr()?;
        self.expect_literal(")")?;
        Ok(cond)
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect_literal("if")?;
        let cond = self.parse_condition()?;
        let then = Box::new(self.parse_stmt()?);
        let otherwise = if self.match_literal(&["else"]).is_some() {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then,
            otherwise,
        })
    }

    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        self.expect_literal("for")?;
        self.expect_literal("(")?;
        let name = self.expect_identifier()?;
        self.expect_literal("in")?;
        let iterable = self.parse_expr()?;
        self.expect_literal(")")?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::For {
            name,
            iterable,
            body,
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.expect_literal("while")?;
        let cond = self.parse_condition()?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::While { cond, body })
    }

    fn parse_try(&mut self) -> Result<Stmt, ParseError> {
        self.expect_literal("try")?;
        let body = Box::new(self.parse_stmt()?);
        let catch = if self.match_literal(&["catch"]).is_some() {
            self.expect_literal("(")?;
            let name = self.expect_identifier()?;
            self.expect_literal(":")?;
            let ty = self.parse_type()?;
            self.expect_literal(")")?;
            let body = Box::new(self.parse_stmt()?);
            Some(Catch { name, ty, body })
        } else {
            None
        };
        let finally = if self.match_literal(&["finally"]).is_some() {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(Stmt::Try {
            body,
            catch,
            finally,
        })
    }

    fn parse_with(&mut self) -> Result<Stmt, ParseError> {
        self.expect_literal("with")?;
        self.expect_literal("(")?;
        let name = self.expect_identifier()?;
        self.expect_literal("=")?;
        let resource = self.parse_expr()?;
        self.expect_literal(")")?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::With {
            name,
            resource,
            body,
        })
    }

    fn parse_label(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier()?;
        self.expect_literal(":")?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::Label { name, body })
    }

    fn parse_jump(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self
            .match_literal(&["break", "continue", "return", "throw"])
            .ok_or_else(|| self.error("'break', 'continue', 'return' or 'throw'"))?;

        let stmt = match keyword.literal.as_str() {
            "break" | "continue" => {
                let kind = if keyword.is("break") {
                    JumpKind::Break
                } else {
                    JumpKind::Continue
                };
                let label = self.match_kind(TokenKind::Identifier).map(|t| t.literal);
                Stmt::Jump {
                    kind,
                    label,
                    value: None,
                }
            }
            "return" => {
                let value = if self.is_match(0, ";") {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                Stmt::Jump {
                    kind: JumpKind::Return,
                    label: None,
                    value,
                }
            }
            _ => Stmt::Jump {
                kind: JumpKind::Throw,
                label: None,
                value: Some(self.parse_expr()?),
            },
        };

        self.expect_literal(";")?;
        Ok(stmt)
    }

    fn parse_assert(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self
            .match_literal(&["assert", "require", "ensure"])
            .ok_or_else(|| self.error("'assert', 'require' or 'ensure'"))?;
        let kind = match keyword.literal.as_str() {
            "assert" => AssertKind::Assert,
            "require" => AssertKind::Require,
            _ => AssertKind::Ensure,
        };
        let expr = self.parse_expr()?;
        self.expect_literal(";")?;
        Ok(Stmt::Assert(kind, expr))
    }

    /// `expr ;` or `target = value ;`.
    fn parse_expression_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        let stmt = if self.match_literal(&["="]).is_some() {
            Stmt::Assignment {
                target: expr,
                value: self.parse_expr()?,
            }
        } else {
            Stmt::Expression(expr)
        };
        self.expect_literal(";")?;
        Ok(stmt)
    }
}
