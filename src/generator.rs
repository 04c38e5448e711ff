//! Kotlin code generation.
//!
//! [`generate`] walks an AST depth first and renders Kotlin source. All
//! formatting state lives in a [`Writer`] created per call, so generation is
//! reentrant: indentation is entered and left through scoped `indented` calls.
//!
//! Lowerings that are not one-to-one:
//!
//! - `match` becomes a `run { }` block that binds every subject once, followed
//!   by a subject-less `when` whose arms test the bindings in case order.
//! - `with (name = resource) body` becomes `resource.use { name -> body }`,
//!   which closes the resource on every exit path.
//! - `ensure` becomes `check`; `assert` and `require` keep their names.
//! - labels and labelled jumps use Kotlin's `name@` / `break@name` syntax.

use std::slice;

use crate::ast::*;

const INDENT: &str = "    ";

/// Output buffer plus the current indentation depth.
pub struct Writer {
    out: String,
    indent: usize,
}

impl Writer {
    fn new() -> Self {
        Writer {
            out: String::new(),
            indent: 0,
        }
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Line break followed by the current indentation.
    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    /// Empty line without trailing indentation.
    fn blank_line(&mut self) {
        self.out.push('\n');
    }

    fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    fn seq<T: Generate>(&mut self, items: &[T], sep: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            item.emit(self);
        }
    }

    /// `{`, one statement per indented line, `}`; `{}` when empty.
    fn block(&mut self, stmts: &[Stmt]) {
        self.write("{");
        if !stmts.is_empty() {
            self.indented(|w| {
                for stmt in stmts {
                    w.newline();
                    stmt.emit(w);
                }
            });
            self.newline();
        }
        self.write("}");
    }

    /// Renders `stmt` as a block, wrapping a lone statement in braces.
    fn body(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(stmts) => self.block(stmts),
            other => self.block(slice::from_ref(other)),
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

/// An AST node that can be rendered as Kotlin.
pub trait Generate {
    fn emit(&self, w: &mut Writer);
}

/// Renders `node` as Kotlin source text. Never fails for a well-formed tree.
pub fn generate<T: Generate + ?Sized>(node: &T) -> String {
    let mut writer = Writer::new();
    node.emit(&mut writer);
    writer.finish()
}

/// Top-level declarations are either components or members.
enum Decl<'a> {
    Component(&'a Component),
    Member(&'a Member),
}

impl Generate for Src {
    fn emit(&self, w: &mut Writer) {
        for import in &self.imports {
            import.emit(w);
            w.blank_line();
        }

        let decls: Vec<Decl<'_>> = self
            .components
            .iter()
            .map(Decl::Component)
            .chain(self.members.iter().map(Decl::Member))
            .collect();
        if decls.is_empty() {
            return;
        }
        if !self.imports.is_empty() {
            w.blank_line();
        }
        for (i, decl) in decls.iter().enumerate() {
            if i > 0 {
                w.blank_line();
            }
            match decl {
                Decl::Component(c) => c.emit(w),
                Decl::Member(m) => m.emit(w),
            }
            w.blank_line();
        }
    }
}

impl Generate for Import {
    fn emit(&self, w: &mut Writer) {
        w.write("import ");
        w.write(&self.path.join("."));
        if let Some(alias) = &self.alias {
            w.write(" as ");
            w.write(alias);
        }
    }
}

impl Generate for Type {
    fn emit(&self, w: &mut Writer) {
        match self {
            // Kotlin has no mutability sigils; only the shape survives.
            Type::Base {
                name,
                generics,
                nullable,
                ..
            } => {
                w.write(name);
                if !generics.is_empty() {
                    w.write("<");
                    w.seq(generics, ", ");
                    w.write(">");
                }
                if *nullable {
                    w.write("?");
                }
            }
            Type::Func { params, ret } => {
                w.write("(");
                w.seq(params, ", ");
                w.write(") -> ");
                ret.emit(w);
            }
        }
    }
}

impl Generate for Component {
    fn emit(&self, w: &mut Writer) {
        w.write(match self.kind {
            ComponentKind::Class | ComponentKind::Struct => "class ",
            ComponentKind::Interface => "interface ",
        });
        self.ty.emit(w);
        if !self.super_types.is_empty() {
            w.write(": ");
            w.seq(&self.super_types, ", ");
        }
        w.write(" {");
        if !self.members.is_empty() {
            w.indented(|w| {
                for member in &self.members {
                    w.blank_line();
                    w.newline();
                    member.emit(w);
                }
            });
            w.blank_line();
            w.newline();
        }
        w.write("}");
    }
}

impl Generate for Member {
    fn emit(&self, w: &mut Writer) {
        match self {
            Member::Field {
                mutable,
                name,
                ty,
                initializer,
            } => emit_binding(w, *mutable, name, ty.as_ref(), initializer.as_ref()),
            Member::Constructor { params, body } => {
                w.write("constructor(");
                w.seq(params, ", ");
                w.write(") ");
                w.body(body);
            }
            Member::Function {
                name,
                params,
                return_type,
                body,
            } => {
                w.write("fun ");
                w.write(name);
                w.write("(");
                w.seq(params, ", ");
                w.write(")");
                if let Some(ty) = return_type {
                    w.write(": ");
                    ty.emit(w);
                }
                w.write(" ");
                w.body(body);
            }
        }
    }
}

impl Generate for Param {
    fn emit(&self, w: &mut Writer) {
        w.write(&self.name);
        w.write(": ");
        self.ty.emit(w);
        if let Some(default) = &self.default {
            w.write(" = ");
            default.emit(w);
        }
    }
}

/// `var|val name[: Type][ = value]`
fn emit_binding(
    w: &mut Writer,
    mutable: bool,
    name: &str,
    ty: Option<&Type>,
    value: Option<&Expr>,
) {
    w.write(if mutable { "var " } else { "val " });
    w.write(name);
    if let Some(ty) = ty {
        w.write(": ");
        ty.emit(w);
    }
    if let Some(value) = value {
        w.write(" = ");
        value.emit(w);
    }
}

impl Generate for Stmt {
    fn emit(&self, w: &mut Writer) {
        match self {
            Stmt::Block(stmts) => w.block(stmts),
            Stmt::Expression(expr) => expr.emit(w),
            Stmt::Declaration {
                mutable,
                name,
                ty,
                value,
            } => emit_binding(w, *mutable, name, ty.as_ref(), value.as_ref()),
            Stmt::Assignment { target, value } => {
                target.emit(w);
                w.write(" = ");
                value.emit(w);
            }
            Stmt::If {
                cond,
                then,
                otherwise,
            } => {
                w.write("if (");
                cond.emit(w);
                w.write(") ");
                then.emit(w);
                if let Some(otherwise) = otherwise {
                    w.write(" else ");
                    otherwise.emit(w);
                }
            }
            Stmt::Match {
                binding,
                subjects,
                cases,
            } => emit_match(w, binding.as_deref(), subjects, cases),
            Stmt::For {
                name,
                iterable,
                body,
            } => {
                w.write("for (");
                w.write(name);
                w.write(" in ");
                iterable.emit(w);
                w.write(") ");
                body.emit(w);
            }
            Stmt::While { cond, body } => {
                w.write("while (");
                cond.emit(w);
                w.write(") ");
                body.emit(w);
            }
            Stmt::Try {
                body,
                catch,
                finally,
            } => {
                w.write("try ");
                w.body(body);
                if let Some(catch) = catch {
                    w.write(" catch (");
                    w.write(&catch.name);
                    w.write(": ");
                    catch.ty.emit(w);
                    w.write(") ");
                    w.body(&catch.body);
                }
                if let Some(finally) = finally {
                    w.write(" finally ");
                    w.body(finally);
                }
            }
            Stmt::With {
                name,
                resource,
                body,
            } => emit_with(w, name, resource, body),
            Stmt::Label { name, body } => {
                w.write(name);
                w.write("@ ");
                body.emit(w);
            }
            Stmt::Jump { kind, label, value } => {
                w.write(match kind {
                    JumpKind::Break => "break",
                    JumpKind::Continue => "continue",
                    JumpKind::Return => "return",
                    JumpKind::Throw => "throw",
                });
                if let Some(label) = label {
                    w.write("@");
                    w.write(label);
                }
                if let Some(value) = value {
                    w.write(" ");
                    value.emit(w);
                }
            }
            Stmt::Assert(kind, expr) => {
                w.write(match kind {
                    AssertKind::Assert => "assert",
                    AssertKind::Require => "require",
                    AssertKind::Ensure => "check",
                });
                w.write("(");
                expr.emit(w);
                w.write(")");
            }
        }
    }
}

/// Name bound to the subject at `index`.
fn subject_name(binding: Option<&str>, subjects: usize, index: usize) -> String {
    match binding {
        Some(name) if subjects == 1 => name.to_string(),
        Some(name) => format!("{}{}", name, index),
        None => format!("_obj{}", index),
    }
}

fn emit_match(w: &mut Writer, binding: Option<&str>, subjects: &[Expr], cases: &[MatchCase]) {
    w.write("run {");
    w.indented(|w| {
        for (i, subject) in subjects.iter().enumerate() {
            w.newline();
            w.write("val ");
            w.write(&subject_name(binding, subjects.len(), i));
            w.write(" = ");
            subject.emit(w);
        }
        w.newline();
        w.write("when {");
        if !cases.is_empty() {
            w.indented(|w| {
                for case in cases {
                    w.newline();
                    emit_case_guard(w, binding, subjects.len(), &case.pattern);
                    w.write(" -> ");
                    case.body.emit(w);
                }
            });
            w.newline();
        }
        w.write("}");
    });
    w.newline();
    w.write("}");
}

/// Renders the condition of one `when` arm; `else` when every position is a wildcard.
fn emit_case_guard(w: &mut Writer, binding: Option<&str>, subjects: usize, pattern: &MatchPattern) {
    match pattern {
        MatchPattern::Type(ty) => {
            w.write(&subject_name(binding, subjects, 0));
            w.write(" is ");
            ty.emit(w);
        }
        MatchPattern::Values(values) => {
            let tests: Vec<(usize, &Expr)> = values
                .iter()
                .enumerate()
                .filter(|(_, value)| !value.is_wildcard())
                .collect();
            if tests.is_empty() {
                w.write("else");
                return;
            }
            for (n, (i, value)) in tests.iter().enumerate() {
                if n > 0 {
                    w.write(" && ");
                }
                // Without subjects every value is a plain boolean guard.
                if *i < subjects {
                    w.write(&subject_name(binding, subjects, *i));
                    w.write(" == ");
                    emit_operand(w, value);
                } else if tests.len() > 1 {
                    emit_operand(w, value);
                } else {
                    value.emit(w);
                }
            }
        }
    }
}

/// Emits `expr`, parenthesized when it is a binary expression so that it
/// stays a single operand of the surrounding `==` or `&&`.
fn emit_operand(w: &mut Writer, expr: &Expr) {
    if matches!(expr, Expr::Binary(..) | Expr::Lambda { .. }) {
        w.write("(");
        expr.emit(w);
        w.write(")");
    } else {
        expr.emit(w);
    }
}

fn emit_with(w: &mut Writer, name: &str, resource: &Expr, body: &Stmt) {
    if matches!(resource, Expr::Binary(..) | Expr::Unary(..) | Expr::Lambda { .. }) {
        w.write("(");
        resource.emit(w);
        w.write(")");
    } else {
        resource.emit(w);
    }
    w.write(".use { ");
    w.write(name);
    w.write(" ->");

    let stmts = match body {
        Stmt::Block(stmts) => stmts.as_slice(),
        other => slice::from_ref(other),
    };
    if stmts.is_empty() {
        w.write(" }");
        return;
    }
    w.indented(|w| {
        for stmt in stmts {
            w.newline();
            stmt.emit(w);
        }
    });
    w.newline();
    w.write("}");
}

impl Generate for Expr {
    fn emit(&self, w: &mut Writer) {
        match self {
            Expr::Literal(literal) => emit_literal(w, literal),
            Expr::Group(expr) => {
                w.write("(");
                expr.emit(w);
                w.write(")");
            }
            Expr::Unary(op, expr) => {
                w.write(op);
                // `- -x` and `! !x` must not fuse into `--` or `!!`.
                if matches!(&**expr, Expr::Unary(inner, _) if inner == op) {
                    w.write(" ");
                }
                expr.emit(w);
            }
            Expr::Binary(op, left, right) => {
                left.emit(w);
                w.write(" ");
                w.write(op);
                w.write(" ");
                right.emit(w);
            }
            Expr::Access { name, receiver } => {
                if let Some(receiver) = receiver {
                    receiver.emit(w);
                    w.write(".");
                }
                w.write(name);
            }
            Expr::Call {
                name,
                receiver,
                args,
            } => {
                if let Some(receiver) = receiver {
                    receiver.emit(w);
                    w.write(".");
                }
                w.write(name);
                w.write("(");
                w.seq(args, ", ");
                w.write(")");
            }
            Expr::Index { receiver, args } => {
                receiver.emit(w);
                w.write("[");
                w.seq(args, ", ");
                w.write("]");
            }
            Expr::Lambda { params, body } => emit_lambda(w, params, body),
        }
    }
}

fn emit_lambda(w: &mut Writer, params: &[String], body: &Stmt) {
    w.write("{");
    if !params.is_empty() {
        w.write(" ");
        w.write(&params.join(", "));
        w.write(" ->");
    }

    let stmts = match body {
        Stmt::Block(stmts) => stmts.as_slice(),
        other => slice::from_ref(other),
    };
    match stmts {
        [] => {
            if !params.is_empty() {
                w.write(" ");
            }
        }
        [stmt] => {
            w.write(" ");
            stmt.emit(w);
            w.write(" ");
        }
        _ => {
            w.indented(|w| {
                for stmt in stmts {
                    w.newline();
                    stmt.emit(w);
                }
            });
            w.newline();
        }
    }
    w.write("}");
}

fn emit_literal(w: &mut Writer, literal: &Literal) {
    match literal {
        Literal::Null => w.write("null"),
        Literal::Bool(b) => w.write(if *b { "true" } else { "false" }),
        Literal::Int(i) => {
            w.write(&i.to_string());
            if i32::try_from(*i).is_err() {
                w.write("L");
            }
        }
        // Debug keeps the fractional part (`1.0`, not `1`).
        Literal::Decimal(d) => w.write(&format!("{:?}", d)),
        Literal::Char(c) => {
            w.write("'");
            w.write(&escape(*c, '\''));
            w.write("'");
        }
        Literal::Str(s) => {
            w.write("\"");
            for c in s.chars() {
                w.write(&escape(c, '"'));
            }
            w.write("\"");
        }
    }
}

/// Kotlin spelling of `c` inside a literal delimited by `quote`.
fn escape(c: char, quote: char) -> String {
    match c {
        '\t' => "\\t".to_string(),
        '\u{0008}' => "\\b".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\\' => "\\\\".to_string(),
        '$' if quote == '"' => "\\$".to_string(),
        c if c == quote => format!("\\{}", c),
        c => c.to_string(),
    }
}
