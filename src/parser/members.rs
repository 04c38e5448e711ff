use super::*;

impl Parser {
    pub fn parse_member(&mut self) -> Result<Member, ParseError> {
        match self.peek(0).map(|t| t.literal.as_str()) {
            Some("var") | Some("val") => self.parse_field(),
            Some("ctor") => self.parse_constructor(),
            Some("func") => self.parse_function(),
            _ => Err(self.error("'var', 'val', 'ctor' or 'func'")),
        }
    }

    fn parse_field(&mut self) -> Result<Member, ParseError> {
        let (mutable, name, ty, initializer) = self.parse_binding()?;
        Ok(Member::Field {
            mutable,
            name,
            ty,
            initializer,
        })
    }

    /// `var|val name [: Type] [= expr] ;`, shared by fields and local declarations.
    pub(super) fn parse_binding(
        &mut self,
    ) -> Result<(bool, String, Option<Type>, Option<Expr>), ParseError> {
        let keyword = self
            .match_literal(&["var", "val"])
            .ok_or_else(|| self.error("'var' or 'val'"))?;
        let mutable = keyword.is("var");
        let name = self.expect_identifier()?;
        let ty = if self.match_literal(&[":"]).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        let value = if self.match_literal(&["="]).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_literal(";")?;
        Ok((mutable, name, ty, value))
    }

    fn parse_constructor(&mut self) -> Result<Member, ParseError> {
        self.expect_literal("ctor")?;
        self.expect_literal("(")?;
        let params = self.parse_seq(Some(","), ")", Self::parse_param)?;
        let body = self.parse_stmt()?;
        Ok(Member::Constructor { params, body })
    }

    fn parse_function(&mut self) -> Result<Member, ParseError> {
        self.expect_literal("func")?;
        let name = self.expect_identifier()?;
        self.expect_literal("(")?;
        let params = self.parse_seq(Some(","), ")", Self::parse_param)?;
        let return_type = if self.match_literal(&[":"]).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        let body = self.parse_stmt()?;
        Ok(Member::Function {
            name,
            params,
            return_type,
            body,
        })
    }

    pub fn parse_param(&mut self) -> Result<Param, ParseError> {
        let name = self.expect_identifier()?;
        self.expect_literal(":")?;
        let ty = self.parse_type()?;
        let default = if self.match_literal(&["="]).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Param { name, ty, default })
    }
}
