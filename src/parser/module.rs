use super::*;

const COMPONENT_KEYWORDS: [&str; 3] = ["class", "interface", "struct"];
const MEMBER_KEYWORDS: [&str; 4] = ["var", "val", "ctor", "func"];

impl Parser {
    /// Parses a whole source unit: imports first, then components and
    /// members in any order until the end of input.
    pub fn parse_src(&mut self) -> Result<Src, ParseError> {
        let mut imports = Vec::new();
        while self.is_match(0, "import") {
            imports.push(self.parse_import()?);
        }

        let mut components = Vec::new();
        let mut members = Vec::new();
        while let Some(keyword) = self.peek(0).map(|t| t.literal.clone()) {
            if COMPONENT_KEYWORDS.contains(&keyword.as_str()) {
                components.push(self.parse_component()?);
            } else if MEMBER_KEYWORDS.contains(&keyword.as_str()) {
                members.push(self.parse_member()?);
            } else {
                return Err(self.error("component or member declaration"));
            }
        }

        Ok(Src {
            imports,
            components,
            members,
        })
    }

    pub fn parse_import(&mut self) -> Result<Import, ParseError> {
        self.expect_literal("import")?;
        let mut path = vec![self.expect_identifier()?];
        while self.match_literal(&["."]).is_some() {
            path.push(self.expect_identifier()?);
        }
        let alias = if self.match_literal(&["as"]).is_some() {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        self.expect_literal(";")?;
        Ok(Import { path, alias })
    }

    pub fn parse_component(&mut self) -> Result<Component, ParseError> {
        let kind = match self.peek(0).map(|t| t.literal.as_str()) {
            Some("class") => ComponentKind::Class,
            Some("interface") => ComponentKind::Interface,
            Some("struct") => ComponentKind::Struct,
            _ => return Err(self.error("'class', 'interface' or 'struct'")),
        };
        self.advance();

        let ty = self.parse_type()?;
        let super_types = if self.match_literal(&[":"]).is_some() {
            self.parse_seq(Some(","), "{", Self::parse_type)?
        } else {
            self.expect_literal("{")?;
            Vec::new()
        };
        let members = self.parse_seq(None, "}", Self::parse_member)?;

        Ok(Component {
            kind,
            ty,
            super_types,
            members,
        })
    }
}
