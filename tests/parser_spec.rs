/// Tests for the Rhovas parser.
///
/// Each test verifies that a specific source snippet produces the expected
/// AST structure.  Expression operands are written as `exprN` identifiers so
/// that expected trees stay short.
use rhovas::ast::*;
use rhovas::lexer::tokenize;
use rhovas::parser::{ParseError, Parser};
use rhovas::{parse_expr_text, parse_source, parse_stmt_text, parse_type_text, Error};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn expr(src: &str) -> Expr {
    parse_expr_text(src).expect("parse failed")
}

fn stmt(src: &str) -> Stmt {
    parse_stmt_text(src).expect("parse failed")
}

fn ty(src: &str) -> Type {
    parse_type_text(src).expect("parse failed")
}

fn src(text: &str) -> Src {
    parse_source(text).expect("parse failed")
}

fn parse_error(text: &str) -> ParseError {
    match parse_source(text) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected parse error, got {:?}", other),
    }
}

fn id(name: &str) -> Expr {
    Expr::ident(name)
}

fn e(n: u32) -> Expr {
    id(&format!("expr{}", n))
}

fn bin(op: &str, left: Expr, right: Expr) -> Expr {
    Expr::Binary(op.to_string(), Box::new(left), Box::new(right))
}

fn unary(op: &str, operand: Expr) -> Expr {
    Expr::Unary(op.to_string(), Box::new(operand))
}

fn lit(literal: Literal) -> Expr {
    Expr::Literal(literal)
}

fn expr_stmt(name: &str) -> Stmt {
    Stmt::Expression(id(name))
}

// ---------------------------------------------------------------------------
// Literals
// ---------------------------------------------------------------------------

#[test]
fn literal_null_and_booleans() {
    assert_eq!(expr("null"), lit(Literal::Null));
    assert_eq!(expr("true"), lit(Literal::Bool(true)));
    assert_eq!(expr("false"), lit(Literal::Bool(false)));
}

#[test]
fn literal_numbers() {
    assert_eq!(expr("123"), lit(Literal::Int(123)));
    assert_eq!(expr("123.456"), lit(Literal::Decimal(123.456)));
}

#[test]
fn literal_integer_overflow_is_error() {
    assert!(matches!(
        parse_expr_text("99999999999999999999"),
        Err(Error::Parse(ParseError::InvalidLiteral { .. }))
    ));
}

#[test]
fn literal_decimal_overflow_is_error() {
    let source = format!("{}.0", "9".repeat(400));
    assert!(matches!(
        parse_expr_text(&source),
        Err(Error::Parse(ParseError::InvalidLiteral { .. }))
    ));
}

#[test]
fn literal_non_ascii_digits_are_invalid() {
    assert!(matches!(
        parse_expr_text("\u{0663}"),
        Err(Error::Parse(ParseError::InvalidLiteral { .. }))
    ));
}

#[test]
fn literal_characters() {
    assert_eq!(expr("'a'"), lit(Literal::Char('a')));
    assert_eq!(expr("'\\''"), lit(Literal::Char('\'')));
    assert_eq!(expr("'\\n'"), lit(Literal::Char('\n')));
}

#[test]
fn literal_string() {
    assert_eq!(expr("\"abc\""), lit(Literal::Str("abc".to_string())));
}

#[test]
fn literal_string_escapes() {
    assert_eq!(
        expr("\"\\t\\b\\n\\r\\'\\\"\\\\\\$\""),
        lit(Literal::Str("\t\u{0008}\n\r'\"\\$".to_string()))
    );
}

#[test]
fn escaped_backslash_is_unescaped_once() {
    assert_eq!(expr("\"\\\\t\""), lit(Literal::Str("\\t".to_string())));
}

// ---------------------------------------------------------------------------
// Operators and precedence
// ---------------------------------------------------------------------------

#[test]
fn group_is_kept() {
    assert_eq!(expr("(expr)"), Expr::Group(Box::new(id("expr"))));
    assert_eq!(
        expr("expr1 * (expr2 + expr3)"),
        bin("*", e(1), Expr::Group(Box::new(bin("+", e(2), e(3)))))
    );
}

#[test]
fn unary_operators() {
    assert_eq!(expr("+expr"), unary("+", id("expr")));
    assert_eq!(expr("-expr"), unary("-", id("expr")));
    assert_eq!(expr("!expr"), unary("!", id("expr")));
    assert_eq!(
        expr("+expr1 - -expr2"),
        bin("-", unary("+", e(1)), unary("-", e(2)))
    );
}

#[test]
fn unary_binds_looser_than_method_call() {
    assert_eq!(
        expr("!obj.method()"),
        unary(
            "!",
            Expr::Call {
                name: "method".to_string(),
                receiver: Some(Box::new(id("obj"))),
                args: vec![],
            }
        )
    );
}

#[test]
fn logical_and_binds_tighter_than_or() {
    assert_eq!(
        expr("expr1 || expr2 && expr3"),
        bin("||", e(1), bin("&&", e(2), e(3)))
    );
}

#[test]
fn comparison_below_logical() {
    assert_eq!(
        expr("expr1 < expr2 && expr3 >= expr4"),
        bin("&&", bin("<", e(1), e(2)), bin(">=", e(3), e(4)))
    );
    assert_eq!(
        expr("expr1 == expr2 && expr3 != expr4"),
        bin("&&", bin("==", e(1), e(2)), bin("!=", e(3), e(4)))
    );
}

#[test]
fn multiplicative_above_comparison() {
    assert_eq!(
        expr("expr1 * expr2 == expr3 / expr4"),
        bin("==", bin("*", e(1), e(2)), bin("/", e(3), e(4)))
    );
    assert_eq!(
        expr("expr1 + expr2 == expr3 - expr4"),
        bin("==", bin("+", e(1), e(2)), bin("-", e(3), e(4)))
    );
}

#[test]
fn binary_is_left_associative() {
    assert_eq!(
        expr("expr1 - expr2 - expr3"),
        bin("-", bin("-", e(1), e(2)), e(3))
    );
}

#[test]
fn longest_operator_wins() {
    assert_eq!(expr("expr1 === expr2"), bin("===", e(1), e(2)));
    assert_eq!(expr("expr1 !== expr2"), bin("!==", e(1), e(2)));
    assert_eq!(expr("expr1 <= expr2"), bin("<=", e(1), e(2)));
}

// ---------------------------------------------------------------------------
// Access, calls, indexing, lambdas
// ---------------------------------------------------------------------------

#[test]
fn access_chain() {
    assert_eq!(
        expr("expr.first.second"),
        Expr::Access {
            name: "second".to_string(),
            receiver: Some(Box::new(Expr::Access {
                name: "first".to_string(),
                receiver: Some(Box::new(id("expr"))),
            })),
        }
    );
}

#[test]
fn function_calls() {
    assert_eq!(
        expr("func(expr1, expr2, expr3)"),
        Expr::Call {
            name: "func".to_string(),
            receiver: None,
            args: vec![e(1), e(2), e(3)],
        }
    );
    assert_eq!(
        expr("expr.method()"),
        Expr::Call {
            name: "method".to_string(),
            receiver: Some(Box::new(id("expr"))),
            args: vec![],
        }
    );
}

#[test]
fn index_chain() {
    assert_eq!(
        expr("expr[expr1][expr2]"),
        Expr::Index {
            receiver: Box::new(Expr::Index {
                receiver: Box::new(id("expr")),
                args: vec![e(1)],
            }),
            args: vec![e(2)],
        }
    );
    assert_eq!(
        expr("expr[]"),
        Expr::Index {
            receiver: Box::new(id("expr")),
            args: vec![],
        }
    );
}

#[test]
fn lambda_with_params() {
    assert_eq!(
        expr("{ (a, b) -> stmt; }"),
        Expr::Lambda {
            params: vec!["a".to_string(), "b".to_string()],
            body: Box::new(expr_stmt("stmt")),
        }
    );
}

#[test]
fn lambda_with_several_statements() {
    assert_eq!(
        expr("{ stmt1; stmt2; }"),
        Expr::Lambda {
            params: vec![],
            body: Box::new(Stmt::Block(vec![expr_stmt("stmt1"), expr_stmt("stmt2")])),
        }
    );
}

#[test]
fn lambda_as_call_argument() {
    let parsed = expr("list.forEach({ (x) -> print(x); })");
    if let Expr::Call { name, args, .. } = parsed {
        assert_eq!(name, "forEach");
        assert!(matches!(args[0], Expr::Lambda { .. }));
    } else {
        panic!("expected call");
    }
}

#[test]
fn mixed_expression() {
    let parsed = expr("x <= (1 + 2) / 3 && y == \"ca\\t\" || z(4.5, '@') && !obj.field.method()[6]");
    let expected = bin(
        "||",
        bin(
            "&&",
            bin(
                "<=",
                id("x"),
                bin(
                    "/",
                    Expr::Group(Box::new(bin(
                        "+",
                        lit(Literal::Int(1)),
                        lit(Literal::Int(2)),
                    ))),
                    lit(Literal::Int(3)),
                ),
            ),
            bin("==", id("y"), lit(Literal::Str("ca\t".to_string()))),
        ),
        bin(
            "&&",
            Expr::Call {
                name: "z".to_string(),
                receiver: None,
                args: vec![lit(Literal::Decimal(4.5)), lit(Literal::Char('@'))],
            },
            unary(
                "!",
                Expr::Index {
                    receiver: Box::new(Expr::Call {
                        name: "method".to_string(),
                        receiver: Some(Box::new(Expr::Access {
                            name: "field".to_string(),
                            receiver: Some(Box::new(id("obj"))),
                        })),
                        args: vec![],
                    }),
                    args: vec![lit(Literal::Int(6))],
                },
            ),
        ),
    );
    assert_eq!(parsed, expected);
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[test]
fn type_plain() {
    assert_eq!(ty("Type"), Type::named("Type"));
}

#[test]
fn type_mutability_generics_nullable() {
    assert_eq!(
        ty("+Map<String, -List<Int>>?"),
        Type::Base {
            mutability: Mutability::Mutable,
            name: "Map".to_string(),
            generics: vec![
                Type::named("String"),
                Type::Base {
                    mutability: Mutability::Immutable,
                    name: "List".to_string(),
                    generics: vec![Type::named("Int")],
                    nullable: false,
                },
            ],
            nullable: true,
        }
    );
}

#[test]
fn type_function() {
    assert_eq!(
        ty("(Int, String) -> Boolean"),
        Type::Func {
            params: vec![Type::named("Int"), Type::named("String")],
            ret: Box::new(Type::named("Boolean")),
        }
    );
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[test]
fn block_statement() {
    assert_eq!(
        stmt("{ stmt1; stmt2; }"),
        Stmt::Block(vec![expr_stmt("stmt1"), expr_stmt("stmt2")])
    );
    assert_eq!(stmt("{}"), Stmt::Block(vec![]));
}

#[test]
fn declaration_statement() {
    assert_eq!(
        stmt("var name: Type = expr;"),
        Stmt::Declaration {
            mutable: true,
            name: "name".to_string(),
            ty: Some(Type::named("Type")),
            value: Some(id("expr")),
        }
    );
    assert_eq!(
        stmt("val name;"),
        Stmt::Declaration {
            mutable: false,
            name: "name".to_string(),
            ty: None,
            value: None,
        }
    );
}

#[test]
fn assignment_statement() {
    assert_eq!(
        stmt("obj.field = expr == other;"),
        Stmt::Assignment {
            target: Expr::Access {
                name: "field".to_string(),
                receiver: Some(Box::new(id("obj"))),
            },
            value: bin("==", id("expr"), id("other")),
        }
    );
}

#[test]
fn if_else_statement() {
    assert_eq!(
        stmt("if (expr) stmt1; else stmt2;"),
        Stmt::If {
            cond: id("expr"),
            then: Box::new(expr_stmt("stmt1")),
            otherwise: Some(Box::new(expr_stmt("stmt2"))),
        }
    );
}

#[test]
fn for_and_while_statements() {
    assert_eq!(
        stmt("for (name in expr) stmt;"),
        Stmt::For {
            name: "name".to_string(),
            iterable: id("expr"),
            body: Box::new(expr_stmt("stmt")),
        }
    );
    assert_eq!(
        stmt("while (expr) stmt;"),
        Stmt::While {
            cond: id("expr"),
            body: Box::new(expr_stmt("stmt")),
        }
    );
}

#[test]
fn try_catch_finally_statement() {
    assert_eq!(
        stmt("try stmt1; catch (e: Exception) stmt2; finally stmt3;"),
        Stmt::Try {
            body: Box::new(expr_stmt("stmt1")),
            catch: Some(Catch {
                name: "e".to_string(),
                ty: Type::named("Exception"),
                body: Box::new(expr_stmt("stmt2")),
            }),
            finally: Some(Box::new(expr_stmt("stmt3"))),
        }
    );
}

#[test]
fn catch_requires_parenthesized_binding() {
    assert!(parse_stmt_text("try stmt1; catch e: Exception stmt2;").is_err());
}

#[test]
fn with_statement() {
    assert_eq!(
        stmt("with (name = expr) stmt;"),
        Stmt::With {
            name: "name".to_string(),
            resource: id("expr"),
            body: Box::new(expr_stmt("stmt")),
        }
    );
}

#[test]
fn label_statement() {
    assert_eq!(
        stmt("outer: while (expr) break outer;"),
        Stmt::Label {
            name: "outer".to_string(),
            body: Box::new(Stmt::While {
                cond: id("expr"),
                body: Box::new(Stmt::Jump {
                    kind: JumpKind::Break,
                    label: Some("outer".to_string()),
                    value: None,
                }),
            }),
        }
    );
}

#[test]
fn jump_statements() {
    assert_eq!(
        stmt("continue;"),
        Stmt::Jump {
            kind: JumpKind::Continue,
            label: None,
            value: None,
        }
    );
    assert_eq!(
        stmt("return;"),
        Stmt::Jump {
            kind: JumpKind::Return,
            label: None,
            value: None,
        }
    );
    assert_eq!(
        stmt("return expr;"),
        Stmt::Jump {
            kind: JumpKind::Return,
            label: None,
            value: Some(id("expr")),
        }
    );
    assert_eq!(
        stmt("throw expr;"),
        Stmt::Jump {
            kind: JumpKind::Throw,
            label: None,
            value: Some(id("expr")),
        }
    );
}

#[test]
fn throw_requires_operand() {
    assert!(parse_stmt_text("throw;").is_err());
}

#[test]
fn assert_statements() {
    assert_eq!(stmt("assert expr;"), Stmt::Assert(AssertKind::Assert, id("expr")));
    assert_eq!(stmt("require expr;"), Stmt::Assert(AssertKind::Require, id("expr")));
    assert_eq!(stmt("ensure expr;"), Stmt::Assert(AssertKind::Ensure, id("expr")));
}

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

#[test]
fn match_value_cases() {
    assert_eq!(
        stmt("match (expr1, expr2) { 1, _: stmt1; else, 2: stmt2; }"),
        Stmt::Match {
            binding: None,
            subjects: vec![e(1), e(2)],
            cases: vec![
                MatchCase {
                    pattern: MatchPattern::Values(vec![lit(Literal::Int(1)), id("_")]),
                    body: expr_stmt("stmt1"),
                },
                MatchCase {
                    pattern: MatchPattern::Values(vec![id("else"), lit(Literal::Int(2))]),
                    body: expr_stmt("stmt2"),
                },
            ],
        }
    );
}

#[test]
fn match_named_binding_and_type_case() {
    assert_eq!(
        stmt("match (name = expr) { is Type: stmt; }"),
        Stmt::Match {
            binding: Some("name".to_string()),
            subjects: vec![id("expr")],
            cases: vec![MatchCase {
                pattern: MatchPattern::Type(Type::named("Type")),
                body: expr_stmt("stmt"),
            }],
        }
    );
}

#[test]
fn match_equality_subject_is_not_a_binding() {
    if let Stmt::Match {
        binding, subjects, ..
    } = stmt("match (a == b) { true: stmt; }")
    {
        assert_eq!(binding, None);
        assert_eq!(subjects, vec![bin("==", id("a"), id("b"))]);
    } else {
        panic!("expected match");
    }
}

#[test]
fn match_without_subjects() {
    if let Stmt::Match {
        subjects, cases, ..
    } = stmt("match () { x > 1: stmt1; else: stmt2; }")
    {
        assert!(subjects.is_empty());
        assert_eq!(cases.len(), 2);
    } else {
        panic!("expected match");
    }
}

#[test]
fn match_case_with_more_values_than_subjects_is_error() {
    match parse_stmt_text("match (x) { 1, 2: stmt; }") {
        Err(Error::Parse(ParseError::Unexpected { found, .. })) => {
            assert_eq!(found.literal, ",");
            assert_eq!((found.line, found.col), (1, 14));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn match_case_may_leave_trailing_subjects_untested() {
    if let Stmt::Match { cases, .. } = stmt("match (x, y) { 1: stmt; }") {
        assert_eq!(
            cases[0].pattern,
            MatchPattern::Values(vec![lit(Literal::Int(1))])
        );
    } else {
        panic!("expected match");
    }
}

#[test]
fn match_without_subjects_accepts_several_conditions() {
    if let Stmt::Match { cases, .. } = stmt("match () { a, b, c: stmt; }") {
        assert_eq!(
            cases[0].pattern,
            MatchPattern::Values(vec![id("a"), id("b"), id("c")])
        );
    } else {
        panic!("expected match");
    }
}

#[test]
fn wildcards_are_recognised() {
    assert!(id("_").is_wildcard());
    assert!(id("else").is_wildcard());
    assert!(!id("other").is_wildcard());
    assert!(!Expr::Access {
        name: "_".to_string(),
        receiver: Some(Box::new(id("x"))),
    }
    .is_wildcard());
}

// ---------------------------------------------------------------------------
// Source units
// ---------------------------------------------------------------------------

#[test]
fn imports() {
    let parsed = src("import a.b.C; import d as e;");
    assert_eq!(
        parsed.imports,
        vec![
            Import {
                path: vec!["a".to_string(), "b".to_string(), "C".to_string()],
                alias: None,
            },
            Import {
                path: vec!["d".to_string()],
                alias: Some("e".to_string()),
            },
        ]
    );
}

#[test]
fn class_with_members_in_order() {
    let parsed = src("class Type1: Type2 { val name: Type2; ctor() stmt1; func name() stmt2; }");
    assert_eq!(parsed.components.len(), 1);
    let class = &parsed.components[0];
    assert_eq!(class.kind, ComponentKind::Class);
    assert_eq!(class.ty, Type::named("Type1"));
    assert_eq!(class.super_types, vec![Type::named("Type2")]);
    assert_eq!(
        class.members,
        vec![
            Member::Field {
                mutable: false,
                name: "name".to_string(),
                ty: Some(Type::named("Type2")),
                initializer: None,
            },
            Member::Constructor {
                params: vec![],
                body: expr_stmt("stmt1"),
            },
            Member::Function {
                name: "name".to_string(),
                params: vec![],
                return_type: None,
                body: expr_stmt("stmt2"),
            },
        ]
    );
}

#[test]
fn interface_and_struct_components() {
    let parsed = src("interface A<T> {} struct B: A<Int>, C {}");
    assert_eq!(parsed.components[0].kind, ComponentKind::Interface);
    assert_eq!(parsed.components[1].kind, ComponentKind::Struct);
    assert_eq!(parsed.components[1].super_types.len(), 2);
}

#[test]
fn function_params_and_return_type() {
    let parsed = src("func add(a: Int, b: Int = 1): Int { return a + b; }");
    if let Member::Function {
        params,
        return_type,
        ..
    } = &parsed.members[0]
    {
        assert_eq!(params.len(), 2);
        assert_eq!(params[1].default, Some(lit(Literal::Int(1))));
        assert_eq!(return_type, &Some(Type::named("Int")));
    } else {
        panic!("expected function");
    }
}

#[test]
fn top_level_members_and_components_mix() {
    let parsed = src("var x = 1; class A {} func f() {}");
    assert_eq!(parsed.components.len(), 1);
    assert_eq!(parsed.members.len(), 2);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn unclosed_parameter_list_is_fatal() {
    assert!(parse_source("func name( stmt;").is_err());
}

#[test]
fn error_reports_offending_token() {
    match parse_error("func name( stmt;") {
        ParseError::Unexpected { found, .. } => assert_eq!(found.literal, ";"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn error_reports_end_of_input() {
    assert!(matches!(
        parse_error("class A {"),
        ParseError::UnexpectedEof { .. }
    ));
}

#[test]
fn unknown_top_level_declaration() {
    assert!(matches!(
        parse_error("print(x);"),
        ParseError::Unexpected { .. }
    ));
}

#[test]
fn entry_points_leave_cursor_after_production() {
    let tokens: Vec<_> = tokenize("a + b; c;")
        .collect::<Result<_, _>>()
        .expect("lex failed");
    let mut parser = Parser::new(tokens);
    assert_eq!(
        parser.parse_stmt().expect("first"),
        Stmt::Expression(bin("+", id("a"), id("b")))
    );
    assert_eq!(parser.parse_stmt().expect("second"), expr_stmt("c"));
    assert!(parser.is_at_end());
}

#[test]
fn trailing_tokens_are_rejected_by_text_helpers() {
    assert!(parse_expr_text("a b").is_err());
}

#[test]
fn error_message_format() {
    assert_eq!(
        parse_error("class A { val x }").to_string(),
        "Parse error [1:17]: expected ';', found '}'"
    );
}
