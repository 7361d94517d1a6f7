//! Render phase tests: structural mapping, indentation, parenthesization.

use bojro_eval::{render_expr, render_program};
use bojro_types::ast::{Expr, ExprKind, Program, Stmt};
use bojro_types::SourceFile;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn parse(source: &str) -> Program {
    let sf = SourceFile::new("test.bojro", source);
    match bojro_parser::parse(&sf) {
        Ok(program) => program,
        Err(e) => panic!("parse failed:\n{}", e.report()),
    }
}

fn render(source: &str) -> String {
    render_program(&parse(source))
}

fn expr(source: &str) -> Expr {
    match parse(&format!("print({source});")).body.into_iter().next() {
        Some(Stmt::Print(p)) => p.expression,
        other => panic!("expected print statement, got {other:?}"),
    }
}

/// Tree shape without spans or raw text.
fn strip_spans(e: &Expr) -> String {
    match &e.kind {
        ExprKind::Binary { left, op, right } => {
            format!("({} {op} {})", strip_spans(left), strip_spans(right))
        }
        ExprKind::Literal(lit) => format!("{:?}", lit.value),
        ExprKind::Identifier(name) => name.clone(),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Statements
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_declaration_and_assignment() {
    assert_eq!(
        render("float x = 2.5; x = x * 2;"),
        "let x = 2.5;\nx = x * 2;\n"
    );
}

#[test]
fn test_print_uses_sink() {
    assert_eq!(render(r#"print("hi");"#), "__print(\"hi\");\n");
}

#[test]
fn test_if_else_indentation() {
    let src = r#"int a = 10; if (a > 5) { print("big"); } else { print(a); }"#;
    let expected = "\
let a = 10;
if (a > 5) {
  __print(\"big\");
} else {
  __print(a);
}
";
    assert_eq!(render(src), expected);
}

#[test]
fn test_nested_while() {
    let src = "int i = 0; while (i < 2) { if (i == 1) { print(i); } i = i + 1; }";
    let expected = "\
let i = 0;
while (i < 2) {
  if (i == 1) {
    __print(i);
  }
  i = i + 1;
}
";
    assert_eq!(render(src), expected);
}

#[test]
fn test_empty_block() {
    assert_eq!(render("while (0) { }"), "while (0) {}\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(render(""), "");
}

#[test]
fn test_bengali_names_pass_through() {
    assert_eq!(
        render("বাক্য নাম = \"বজ্র\"; লিখো(নাম);"),
        "let নাম = \"বজ্র\";\n__print(নাম);\n"
    );
}

// ─────────────────────────────────────────────────────────────────────
// Expressions
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_number_renders_its_value() {
    assert_eq!(render_expr(&expr("5.")), "5");
    assert_eq!(render_expr(&expr("007")), "7");
    assert_eq!(render_expr(&expr("2.50")), "2.5");
}

#[test]
fn test_no_parens_for_left_leaning_precedence() {
    assert_eq!(render_expr(&expr("2 + 3 * 4")), "2 + 3 * 4");
    assert_eq!(render_expr(&expr("10 - 4 - 3")), "10 - 4 - 3");
    assert_eq!(render_expr(&expr("((a))")), "a");
}

#[test]
fn test_parens_for_looser_operand() {
    assert_eq!(render_expr(&expr("(2 + 3) * 4")), "(2 + 3) * 4");
    assert_eq!(render_expr(&expr("a * (b % c)")), "a * (b % c)");
}

#[test]
fn test_parens_for_right_operand_at_same_level() {
    assert_eq!(render_expr(&expr("10 - (4 - 3)")), "10 - (4 - 3)");
    assert_eq!(render_expr(&expr("a == (b == c)")), "a == (b == c)");
}

#[test]
fn test_comparison_inside_equality() {
    assert_eq!(render_expr(&expr("a > b == c < d")), "a > b == c < d");
    assert_eq!(render_expr(&expr("(a == b) > c")), "(a == b) > c");
}

#[test]
fn test_rendered_expression_reparses_to_same_tree() {
    for src in [
        "(2 + 3) * 4",
        "10 - (4 - 3)",
        "a / (b * c) % d",
        "(a == b) != (c < d + 1)",
        "1 + 2 + (3 + 4)",
    ] {
        let tree = expr(src);
        let rendered = render_expr(&tree);
        let reparsed = expr(&rendered);
        assert_eq!(
            render_expr(&reparsed),
            rendered,
            "render of {src:?} did not reparse stably"
        );
        assert_eq!(strip_spans(&tree), strip_spans(&reparsed), "source {src:?}");
    }
}
