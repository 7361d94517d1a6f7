//! Bojro evaluator.
//!
//! Renders a parsed program to JavaScript-like text for display, then runs
//! it by walking the tree, capturing printed lines.

pub mod env;
pub mod error;
pub mod evaluator;
pub mod interpreter;
pub mod render;
pub mod value;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use interpreter::{
    Interpreter, RunConfig, RunOutcome, RunPhase, DEFAULT_MAX_OUTPUT_LINES, DEFAULT_STEP_LIMIT,
};
pub use render::{render_expr, render_program};
pub use value::Value;
