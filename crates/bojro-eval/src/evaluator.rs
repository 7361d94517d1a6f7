//! Core expression and statement evaluator.

use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use bojro_types::ast::*;

/// The core evaluator: walks AST nodes, binds variables, collects output.
pub struct Evaluator {
    /// Variable environment (flat).
    pub env: Environment,
    /// Step counter: one per evaluated node.
    pub steps: u64,
    pub step_limit: u64,
    /// Captured `print` output, one entry per call.
    pub output: Vec<String>,
    pub max_output_lines: usize,
}

impl Evaluator {
    /// Create a new evaluator with the given limits.
    pub fn new(step_limit: u64, max_output_lines: usize) -> Self {
        Self {
            env: Environment::new(),
            steps: 0,
            step_limit,
            output: Vec::new(),
            max_output_lines,
        }
    }

    /// Consume one step. Returns error if the limit is exhausted.
    fn tick(&mut self) -> EvalResult<()> {
        self.steps += 1;
        if self.steps > self.step_limit {
            Err(EvalError::StepLimitExceeded)
        } else {
            Ok(())
        }
    }

    /// The print sink.
    fn emit(&mut self, value: &Value) -> EvalResult<()> {
        if self.output.len() >= self.max_output_lines {
            return Err(EvalError::OutputLimitExceeded);
        }
        self.output.push(value.to_string());
        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statement execution
    // ══════════════════════════════════════════════════════════════════════

    /// Execute every top-level statement in order.
    pub fn exec_program(&mut self, program: &Program) -> EvalResult<()> {
        self.tick()?;
        self.exec_stmts(&program.body)
    }

    fn exec_stmts(&mut self, stmts: &[Stmt]) -> EvalResult<()> {
        for stmt in stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn exec_block(&mut self, block: &Block) -> EvalResult<()> {
        self.tick()?;
        self.exec_stmts(&block.body)
    }

    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<()> {
        self.tick()?;
        match stmt {
            Stmt::VariableDeclaration(decl) => {
                let value = self.eval_expr(&decl.value)?;
                self.env.define(&decl.name.name, value);
                Ok(())
            }
            Stmt::Assignment(assign) => {
                let value = self.eval_expr(&assign.value)?;
                if self.env.set(&assign.name.name, value) {
                    Ok(())
                } else {
                    Err(EvalError::UndefinedVariable(assign.name.name.clone()))
                }
            }
            Stmt::Print(print) => {
                let value = self.eval_expr(&print.expression)?;
                self.emit(&value)
            }
            Stmt::If(if_stmt) => {
                if self.eval_expr(&if_stmt.condition)?.is_truthy() {
                    self.exec_block(&if_stmt.consequent)
                } else if let Some(alternate) = &if_stmt.alternate {
                    self.exec_block(alternate)
                } else {
                    Ok(())
                }
            }
            Stmt::While(while_stmt) => {
                while self.eval_expr(&while_stmt.condition)?.is_truthy() {
                    self.exec_block(&while_stmt.body)?;
                }
                Ok(())
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate an expression to a Value.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.tick()?;
        match &expr.kind {
            ExprKind::Literal(lit) => Ok(match &lit.value {
                LiteralValue::Number(n) => Value::Number(*n),
                LiteralValue::String(s) => Value::String(s.clone()),
            }),
            ExprKind::Identifier(name) => self.eval_identifier(name),
            ExprKind::Binary { left, op, right } => self.eval_binary(left, *op, right),
        }
    }

    fn eval_identifier(&self, name: &str) -> EvalResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))
    }

    /// Walks the left spine of a chain in a loop, so `1 + 1 + ... + 1`
    /// recurses only into right operands.
    fn eval_binary(&mut self, left: &Expr, op: BinOp, right: &Expr) -> EvalResult<Value> {
        let mut pending = vec![(op, right)];
        let mut leftmost = left;
        while let ExprKind::Binary { left, op, right } = &leftmost.kind {
            self.tick()?;
            pending.push((*op, right.as_ref()));
            leftmost = left.as_ref();
        }

        let mut acc = self.eval_expr(leftmost)?;
        for (op, right) in pending.into_iter().rev() {
            let rv = self.eval_expr(right)?;
            acc = self.apply_binary(op, &acc, &rv)?;
        }
        Ok(acc)
    }

    fn apply_binary(&self, op: BinOp, lv: &Value, rv: &Value) -> EvalResult<Value> {
        match op {
            BinOp::Add => Ok(self.eval_add(lv, rv)),
            BinOp::Sub => self.eval_arith(lv, rv, op, |a, b| a - b),
            BinOp::Mul => self.eval_arith(lv, rv, op, |a, b| a * b),
            // IEEE semantics: `1 / 0` is Infinity, `5 % 0` is NaN.
            BinOp::Div => self.eval_arith(lv, rv, op, |a, b| a / b),
            BinOp::Mod => self.eval_arith(lv, rv, op, |a, b| a % b),
            BinOp::Eq => Ok(Value::Bool(lv.loose_eq(rv))),
            BinOp::NotEq => Ok(Value::Bool(!lv.loose_eq(rv))),
            BinOp::Less | BinOp::Greater | BinOp::LessEq | BinOp::GreaterEq => {
                self.eval_comparison(lv, rv, op)
            }
        }
    }

    /// A string on either side concatenates; otherwise numeric addition.
    fn eval_add(&self, lv: &Value, rv: &Value) -> Value {
        match (lv.as_number(), rv.as_number()) {
            (Some(a), Some(b)) => Value::Number(a + b),
            _ => Value::String(format!("{lv}{rv}")),
        }
    }

    fn eval_arith(
        &self,
        lv: &Value,
        rv: &Value,
        op: BinOp,
        apply: fn(f64, f64) -> f64,
    ) -> EvalResult<Value> {
        match (lv.as_number(), rv.as_number()) {
            (Some(a), Some(b)) => Ok(Value::Number(apply(a, b))),
            _ => Err(EvalError::TypeMismatch(format!(
                "cannot apply '{op}' to {} and {}",
                lv.type_name(),
                rv.type_name()
            ))),
        }
    }

    /// Numbers compare numerically, strings lexicographically.
    fn eval_comparison(&self, lv: &Value, rv: &Value, op: BinOp) -> EvalResult<Value> {
        let ordering = match (lv, rv) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => {
                return Err(EvalError::TypeMismatch(format!(
                    "cannot compare {} and {}",
                    lv.type_name(),
                    rv.type_name()
                )))
            }
        };
        // NaN is unordered: every comparison with it is false.
        let result = ordering.is_some_and(|ord| match op {
            BinOp::Less => ord.is_lt(),
            BinOp::Greater => ord.is_gt(),
            BinOp::LessEq => ord.is_le(),
            BinOp::GreaterEq => ord.is_ge(),
            _ => false,
        });
        Ok(Value::Bool(result))
    }
}
