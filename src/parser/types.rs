use super::*;

impl Parser {
    /// `[+|-] Name [<Type, ...>] [?]` or `(Type, ...) -> Type`.
    pub fn parse_type(&mut self) -> Result<Type, ParseError> {
        if self.match_literal(&["("]).is_some() {
            let params = self.parse_seq(Some(","), ")", Self::parse_type)?;
            self.expect_literal("-")?;
            self.expect_literal(">")?;
            let ret = self.parse_type()?;
            return Ok(Type::Func {
                params,
                ret: Box::new(ret),
            });
        }

        let mutability = if self.match_literal(&["+"]).is_some() {
            Mutability::Mutable
        } else if self.match_literal(&["-"]).is_some() {
            Mutability::Immutable
        } else {
            Mutability::Viewable
        };
        let name = self.expect_identifier()?;
        let generics = if self.match_literal(&["<"]).is_some() {
            self.parse_seq(Some(","), ">", Self::parse_type)?
        } else {
            Vec::new()
        };
        let nullable = self.match_literal(&["?"]).is_some();

        Ok(Type::Base {
            mutability,
            name,
            generics,
            nullable,
        })
    }
}
