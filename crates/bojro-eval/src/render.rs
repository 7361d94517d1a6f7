//! Render phase: turns the AST into equivalent JavaScript-like program text.
//!
//! The mapping is structural:
//!
//! | Node                | Rendered as                    |
//! |---------------------|--------------------------------|
//! | VariableDeclaration | `let name = value;`            |
//! | Assignment          | `name = value;`                |
//! | PrintStatement      | `__print(expr);`               |
//! | IfStatement         | `if (cond) { .. } else { .. }` |
//! | WhileStatement      | `while (cond) { .. }`          |
//! | BinaryExpression    | `left op right`                |
//! | Literal             | quoted string, bare number     |
//! | Identifier          | bare name                      |
//!
//! Operands are parenthesized only where the tree's shape would otherwise be
//! lost, so the text reads back into the same tree. The result is for
//! display; execution walks the tree directly.

use crate::value::format_number;
use bojro_types::ast::*;

/// Name of the print sink in rendered text.
pub const PRINT_SINK: &str = "__print";

const INDENT: &str = "  ";

/// Render a whole program, one top-level statement per line.
pub fn render_program(program: &Program) -> String {
    let mut out = String::new();
    for stmt in &program.body {
        render_stmt(stmt, 0, &mut out);
    }
    out
}

fn render_stmt(stmt: &Stmt, depth: usize, out: &mut String) {
    out.push_str(&INDENT.repeat(depth));
    match stmt {
        Stmt::VariableDeclaration(decl) => {
            out.push_str(&format!("let {} = {};", decl.name.name, render_expr(&decl.value)));
        }
        Stmt::Assignment(assign) => {
            out.push_str(&format!("{} = {};", assign.name.name, render_expr(&assign.value)));
        }
        Stmt::Print(print) => {
            out.push_str(&format!("{PRINT_SINK}({});", render_expr(&print.expression)));
        }
        Stmt::If(if_stmt) => {
            out.push_str(&format!("if ({}) ", render_expr(&if_stmt.condition)));
            render_block(&if_stmt.consequent, depth, out);
            if let Some(alternate) = &if_stmt.alternate {
                out.push_str(" else ");
                render_block(alternate, depth, out);
            }
        }
        Stmt::While(while_stmt) => {
            out.push_str(&format!("while ({}) ", render_expr(&while_stmt.condition)));
            render_block(&while_stmt.body, depth, out);
        }
    }
    out.push('\n');
}

/// `{`, the statements one level deeper, then `}` at the opening depth.
fn render_block(block: &Block, depth: usize, out: &mut String) {
    if block.body.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    for stmt in &block.body {
        render_stmt(stmt, depth + 1, out);
    }
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
}

/// Render an expression with the minimum parentheses.
pub fn render_expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Binary { left, op, right } => {
            let lhs = render_operand(left, *op, false);
            let rhs = render_operand(right, *op, true);
            format!("{lhs} {op} {rhs}")
        }
        ExprKind::Literal(lit) => match &lit.value {
            LiteralValue::String(s) => format!("\"{s}\""),
            LiteralValue::Number(n) => format_number(*n),
        },
        ExprKind::Identifier(name) => name.clone(),
    }
}

/// Parenthesize an operand that binds looser than its parent, or a right
/// operand at the same level (every level is left-associative).
fn render_operand(operand: &Expr, parent: BinOp, is_right: bool) -> String {
    let text = render_expr(operand);
    let needs_parens = match &operand.kind {
        ExprKind::Binary { op, .. } => {
            op.precedence() < parent.precedence()
                || (is_right && op.precedence() == parent.precedence())
        }
        _ => false,
    };
    if needs_parens {
        format!("({text})")
    } else {
        text
    }
}
