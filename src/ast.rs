#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Viewable,
    Mutable,
    Immutable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Base {
        mutability: Mutability,
        name: String,
        generics: Vec<Type>,
        nullable: bool,
    },
    Func {
        params: Vec<Type>,
        ret: Box<Type>,
    },
}

impl Type {
    /// Plain viewable, non-nullable type without generics.
    pub fn named(name: impl Into<String>) -> Self {
        Type::Base {
            mutability: Mutability::Viewable,
            name: name.into(),
            generics: Vec::new(),
            nullable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Src {
    pub imports: Vec<Import>,
    pub components: Vec<Component>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub path: Vec<String>,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Class,
    Interface,
    Struct,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    pub ty: Type,
    pub super_types: Vec<Type>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field {
        mutable: bool,
        name: String,
        ty: Option<Type>,
        initializer: Option<Expr>,
    },
    Constructor {
        params: Vec<Param>,
        body: Stmt,
    },
    Function {
        name: String,
        params: Vec<Param>,
        return_type: Option<Type>,
        body: Stmt,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: Type,
    pub default: Option<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Break,
    Continue,
    Return,
    Throw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertKind {
    Assert,
    Require,
    Ensure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catch {
    pub name: String,
    pub ty: Type,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchPattern {
    /// `is Type`: tests the runtime type of the first subject.
    Type(Type),
    /// One expression per subject position; `_` and `else` match anything.
    Values(Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCase {
    pub pattern: MatchPattern,
    pub body: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Expression(Expr),
    Declaration {
        mutable: bool,
        name: String,
        ty: Option<Type>,
        value: Option<Expr>,
    },
    Assignment {
        target: Expr,
        value: Expr,
    },
    If {
        cond: Expr,
        then: Box<Stmt>,
        otherwise: Option<Box<Stmt>>,
    },
    Match {
        binding: Option<String>,
        subjects: Vec<Expr>,
        cases: Vec<MatchCase>,
    },
    For {
        name: String,
        iterable: Expr,
        body: Box<Stmt>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    Try {
        body: Box<Stmt>,
        catch: Option<Catch>,
        finally: Option<Box<Stmt>>,
    },
    With {
        name: String,
        resource: Expr,
        body: Box<Stmt>,
    },
    Label {
        name: String,
        body: Box<Stmt>,
    },
    Jump {
        kind: JumpKind,
        label: Option<String>,
        value: Option<Expr>,
    },
    Assert(AssertKind, Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Decimal(f64),
    Char(char),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Group(Box<Expr>),
    Unary(String, Box<Expr>),
    Binary(String, Box<Expr>, Box<Expr>),
    Access {
        name: String,
        receiver: Option<Box<Expr>>,
    },
    Call {
        name: String,
        receiver: Option<Box<Expr>>,
        args: Vec<Expr>,
    },
    Index {
        receiver: Box<Expr>,
        args: Vec<Expr>,
    },
    Lambda {
        params: Vec<String>,
        body: Box<Stmt>,
    },
}

impl Expr {
    /// Receiver-less access to `name`.
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Access {
            name: name.into(),
            receiver: None,
        }
    }

    /// Whether this is a case-position wildcard (`_` or `else`).
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Expr::Access { name, receiver: None } if name == "_" || name == "else")
    }
}
