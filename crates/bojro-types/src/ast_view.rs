//! Generic, field-labelled view of an AST for tree visualizers.
//!
//! The walk visits each node by kind and emits its declared fields in
//! declaration order: sequences become counted child lists, nested nodes
//! become labelled children, scalar fields become attributes. Location
//! bookkeeping (`span`) and literal source text (`raw`) are never emitted.

use crate::ast::*;
use crate::format_number;
use serde::Serialize;
use std::fmt::Write as _;

/// One node of the view tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewNode {
    /// Node kind name, e.g. `BinaryExpression`.
    pub kind: NodeKind,
    /// Field name under which the parent holds this node, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Leaf payload for `Literal` and `Identifier` nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Scalar fields such as `name` or `operator`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ViewAttr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewAttr {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewChild {
    /// A single nested node; its `label` names the field.
    Node(ViewNode),
    /// An ordered sequence field such as `body`.
    List { name: String, items: Vec<ViewNode> },
}

impl ViewNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            label: None,
            value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push(ViewAttr {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    fn child(mut self, label: &str, mut node: ViewNode) -> Self {
        node.label = Some(label.to_string());
        self.children.push(ViewChild::Node(node));
        self
    }

    fn list(mut self, name: &str, items: Vec<ViewNode>) -> Self {
        self.children.push(ViewChild::List {
            name: name.to_string(),
            items,
        });
        self
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| match c {
                ViewChild::Node(n) => n.node_count(),
                ViewChild::List { items, .. } => items.iter().map(ViewNode::node_count).sum(),
            })
            .sum::<usize>()
    }

    /// Render as an indented text tree, two spaces per level.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out, 0);
        out
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn write_text(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}");
        if let Some(label) = &self.label {
            let _ = write!(out, "{label}: ");
        }
        let _ = write!(out, "{}", self.kind);
        if let Some(value) = &self.value {
            let _ = write!(out, " {value}");
        }
        for attr in &self.attributes {
            let _ = write!(out, " {}={}", attr.name, attr.value);
        }
        out.push('\n');
        for child in &self.children {
            match child {
                ViewChild::Node(node) => node.write_text(out, depth + 1),
                ViewChild::List { name, items } => {
                    let _ = writeln!(out, "{indent}  {name} [{}]", items.len());
                    for item in items {
                        item.write_text(out, depth + 2);
                    }
                }
            }
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Walkers
// ══════════════════════════════════════════════════════════════════════════════

/// Build the view tree for a whole program.
pub fn view_program(program: &Program) -> ViewNode {
    ViewNode::new(NodeKind::Program).list("body", program.body.iter().map(view_stmt).collect())
}

pub fn view_stmt(stmt: &Stmt) -> ViewNode {
    match stmt {
        Stmt::VariableDeclaration(decl) => ViewNode::new(NodeKind::VariableDeclaration)
            .attr("var_type", decl.var_type.name())
            .attr("name", decl.name.name.clone())
            .child("value", view_expr(&decl.value)),
        Stmt::Assignment(assign) => ViewNode::new(NodeKind::Assignment)
            .attr("name", assign.name.name.clone())
            .child("value", view_expr(&assign.value)),
        Stmt::Print(print) => {
            ViewNode::new(NodeKind::PrintStatement).child("expression", view_expr(&print.expression))
        }
        Stmt::If(if_stmt) => {
            let node = ViewNode::new(NodeKind::IfStatement)
                .child("condition", view_expr(&if_stmt.condition))
                .child("consequent", view_block(&if_stmt.consequent));
            match &if_stmt.alternate {
                Some(alternate) => node.child("alternate", view_block(alternate)),
                None => node,
            }
        }
        Stmt::While(while_stmt) => ViewNode::new(NodeKind::WhileStatement)
            .child("condition", view_expr(&while_stmt.condition))
            .child("body", view_block(&while_stmt.body)),
    }
}

pub fn view_block(block: &Block) -> ViewNode {
    ViewNode::new(NodeKind::BlockStatement).list("body", block.body.iter().map(view_stmt).collect())
}

pub fn view_expr(expr: &Expr) -> ViewNode {
    match &expr.kind {
        ExprKind::Binary { left, op, right } => ViewNode::new(NodeKind::BinaryExpression)
            .child("left", view_expr(left))
            .attr("operator", op.symbol())
            .child("right", view_expr(right)),
        ExprKind::Literal(lit) => {
            let mut node = ViewNode::new(NodeKind::Literal);
            node.value = Some(match &lit.value {
                LiteralValue::Number(n) => format_number(*n),
                LiteralValue::String(s) => s.clone(),
            });
            node
        }
        ExprKind::Identifier(name) => {
            let mut node = ViewNode::new(NodeKind::Identifier);
            node.value = Some(name.clone());
            node
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;

    fn sp() -> Span {
        Span::point(1, 1)
    }

    fn num(n: f64, raw: &str) -> Expr {
        Expr::new(
            ExprKind::Literal(Literal {
                value: LiteralValue::Number(n),
                raw: raw.to_string(),
            }),
            sp(),
        )
    }

    fn ident(name: &str) -> Expr {
        Expr::new(ExprKind::Identifier(name.to_string()), sp())
    }

    /// `int a = 10; if (a > 5) { print(a); }`
    fn sample() -> Program {
        let decl = Stmt::VariableDeclaration(VarDecl {
            var_type: DeclType::Integer,
            name: Ident::new("a", sp()),
            value: num(10.0, "10"),
            span: sp(),
        });
        let cond = Expr::new(
            ExprKind::Binary {
                left: Box::new(ident("a")),
                op: BinOp::Greater,
                right: Box::new(num(5.0, "5")),
            },
            sp(),
        );
        let if_stmt = Stmt::If(IfStmt {
            condition: cond,
            consequent: Block {
                body: vec![Stmt::Print(PrintStmt {
                    expression: ident("a"),
                    span: sp(),
                })],
                span: sp(),
            },
            alternate: None,
            span: sp(),
        });
        Program {
            body: vec![decl, if_stmt],
            span: sp(),
        }
    }

    #[test]
    fn test_view_text_tree() {
        let text = view_program(&sample()).to_text();
        let expected = "\
Program
  body [2]
    VariableDeclaration var_type=integer name=a
      value: Literal 10
    IfStatement
      condition: BinaryExpression operator=>
        left: Identifier a
        right: Literal 5
      consequent: BlockStatement
        body [1]
          PrintStatement
            expression: Identifier a
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_view_excludes_location_fields() {
        let json = view_program(&sample()).to_json();
        assert!(!json.contains("span"));
        assert!(!json.contains("raw"));
        assert!(json.contains("\"kind\": \"IfStatement\""));
        assert!(json.contains("\"label\": \"consequent\""));
    }

    #[test]
    fn test_missing_alternate_is_omitted() {
        let view = view_program(&sample());
        let ViewChild::List { items, .. } = &view.children[0] else {
            panic!("program body should be a list");
        };
        let labels: Vec<_> = items[1]
            .children
            .iter()
            .filter_map(|c| match c {
                ViewChild::Node(n) => n.label.clone(),
                ViewChild::List { .. } => None,
            })
            .collect();
        assert_eq!(labels, vec!["condition", "consequent"]);
    }

    #[test]
    fn test_literal_shows_value_not_source_text() {
        let padded = view_expr(&num(7.0, "007"));
        assert_eq!(padded.value.as_deref(), Some("7"));

        let string = Expr::new(
            ExprKind::Literal(Literal {
                value: LiteralValue::String("হ্যালো".into()),
                raw: "\"হ্যালো\"".into(),
            }),
            sp(),
        );
        assert_eq!(view_expr(&string).value.as_deref(), Some("হ্যালো"));
    }

    #[test]
    fn test_node_count() {
        // Program, decl, literal, if, binary, ident, literal, block, print, ident
        assert_eq!(view_program(&sample()).node_count(), 10);
    }
}
